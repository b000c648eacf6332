use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A knowledge-base entry as supplied by the document store. Field names on
/// the wire are camelCase (`notHelpful`, `createdAt`, ...); timestamps are
/// RFC 3339. Counters default to 0 and collections to empty when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub helpful: u64,
    #[serde(default)]
    pub not_helpful: u64,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

impl Faq {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
            category: None,
            tags: Vec::new(),
            views: 0,
            helpful: 0,
            not_helpful: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// Question, answer and tags joined into the single string the scorer
    /// and exact-phrase matcher operate on.
    pub fn combined_text(&self) -> String {
        format!("{} {} {}", self.question, self.answer, self.tags.join(" "))
    }
}

/// A record annotated by the ranking pipeline. `relevance_score` is present
/// only on results of a scored search; it is comparable within a single
/// query's result set, not across queries or corpora.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    #[serde(flatten)]
    pub faq: Faq,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub relevance_score: Option<f64>,
}
