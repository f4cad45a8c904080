//! Background fetch worker.
//!
//! The event loop stays synchronous; network calls run on one worker
//! thread fed over an mpsc channel. Search commands carry a request id and
//! the latest issued id lives in a shared atomic, so both the worker and
//! the receiving side can drop responses that a newer search has
//! superseded.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread;

use crate::api::{ApiClient, ApiError};
use crate::types::{QuestionSearch, RecentEntry, SimilarSearch};

#[derive(Debug)]
pub enum FetchCommand {
    SimilarSearch { id: u64, query: String },
    QuestionSearch { id: u64, query: String },
    RecentQuestions,
    Shutdown,
}

#[derive(Debug)]
pub enum FetchResult {
    Similar {
        id: u64,
        outcome: Result<SimilarSearch, ApiError>,
    },
    Question {
        id: u64,
        outcome: Result<QuestionSearch, ApiError>,
    },
    Recent(Result<Vec<RecentEntry>, ApiError>),
}

/// Spawns the worker thread. Returns the command sender, the result
/// receiver, and the shared latest-request-id cell.
pub fn spawn(client: ApiClient) -> (Sender<FetchCommand>, Receiver<FetchResult>, Arc<AtomicU64>) {
    let (command_tx, command_rx) = mpsc::channel::<FetchCommand>();
    let (result_tx, result_rx) = mpsc::channel::<FetchResult>();
    let latest = Arc::new(AtomicU64::new(0));
    let thread_latest = Arc::clone(&latest);

    thread::spawn(move || {
        while let Ok(command) = command_rx.recv() {
            let result = match command {
                FetchCommand::SimilarSearch { id, query } => {
                    let outcome = client.search_similar(&query);
                    if superseded(id, &thread_latest) {
                        tracing::debug!(id, "dropping superseded similar-search response");
                        continue;
                    }
                    FetchResult::Similar { id, outcome }
                }
                FetchCommand::QuestionSearch { id, query } => {
                    let outcome = client.search_question(&query);
                    if superseded(id, &thread_latest) {
                        tracing::debug!(id, "dropping superseded question response");
                        continue;
                    }
                    FetchResult::Question { id, outcome }
                }
                FetchCommand::RecentQuestions => FetchResult::Recent(client.recent_questions()),
                FetchCommand::Shutdown => break,
            };
            if result_tx.send(result).is_err() {
                break;
            }
        }
    });

    (command_tx, result_rx, latest)
}

fn superseded(id: u64, latest: &AtomicU64) -> bool {
    latest.load(Ordering::Acquire) != id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn superseded_compares_against_latest() {
        let latest = AtomicU64::new(3);
        assert!(!superseded(3, &latest));
        assert!(superseded(2, &latest));
        latest.store(4, Ordering::Release);
        assert!(superseded(3, &latest));
    }
}
