/// Captures what the user walked away with when the session ended.
#[derive(Debug, Clone)]
pub struct SessionOutcome {
    pub accepted: bool,
    pub query: String,
    pub selection: Option<QuestionRef>,
}

/// Identity of the question the user had open when quitting.
#[derive(Debug, Clone)]
pub struct QuestionRef {
    pub id: u64,
    pub title: String,
    pub link: String,
}

impl QuestionRef {
    #[must_use]
    pub fn of(question: &super::Question) -> Self {
        Self {
            id: question.id,
            title: question.title.clone(),
            link: question.link.clone(),
        }
    }
}
