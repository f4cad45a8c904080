use serde::Deserialize;

/// One row of the backend-maintained search history.
///
/// The history endpoint is written by the backend as a side effect of prior
/// searches and is read-only here. Depending on the backend's bookkeeping a
/// row carries the matched question `title`, the raw `search_query`, or
/// both.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentEntry {
    #[serde(default)]
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub search_query: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub score: i64,
    #[serde(default)]
    pub answer_count: u64,
    /// RFC 3339 timestamp of when the search was recorded.
    #[serde(default)]
    pub searched_at: Option<String>,
}

impl RecentEntry {
    /// Text shown for the entry and re-submitted when it is selected.
    #[must_use]
    pub fn display_title(&self) -> &str {
        self.title
            .as_deref()
            .or(self.search_query.as_deref())
            .unwrap_or("")
    }
}

/// Response envelope of `GET /questions/recent`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentEnvelope {
    #[serde(default)]
    pub questions: Vec<RecentEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_title_prefers_title_over_query() {
        let entry = RecentEntry {
            title: Some("How to reverse a string".into()),
            search_query: Some("reverse string".into()),
            ..RecentEntry::default()
        };
        assert_eq!(entry.display_title(), "How to reverse a string");

        let query_only = RecentEntry {
            search_query: Some("reverse string".into()),
            ..RecentEntry::default()
        };
        assert_eq!(query_only.display_title(), "reverse string");
    }

    #[test]
    fn envelope_tolerates_missing_questions() {
        let envelope: RecentEnvelope = serde_json::from_str("{}").expect("deserializes");
        assert!(envelope.questions.is_empty());
    }
}
