
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One row of the question/answer corpus. Read-only; loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct QaRecord {
    pub id: i64,
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentMetadata {
    pub id: i64,
    pub question: String,
}

/// Indexable unit derived from a [`QaRecord`]. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub content: String,
    pub metadata: DocumentMetadata,
}

impl QaRecord {
    /// Content is the question and answer joined by a single space,
    /// with no truncation or re-ordering.
    #[inline]
    pub fn to_document(&self) -> Document {
        Document {
            content: format!("{} {}", self.question, self.answer),
            metadata: DocumentMetadata {
                id: self.id,
                question: self.question.clone(),
            },
        }
    }
}
