//! View models shared between the API client, the controller, and the UI.
//!
//! Everything here is transient: created from one fetch response, held for
//! the duration of a search, and replaced wholesale by the next one.

mod outcome;
mod question;
mod recent;

pub use outcome::{QuestionRef, SessionOutcome};
pub use question::{Answer, Owner, Question, QuestionSearch, SimilarSearch};
pub use recent::{RecentEntry, RecentEnvelope};
