//! Wire types for the analysis backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

pub const DEFAULT_TOP_K: u32 = 3;

/// Body of `POST /semantic/api/paragraph_web_check`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ParagraphCheckRequest {
    pub paragraph: String,
    pub top_k: u32,
    pub google_doc_url: Option<String>,
    pub use_web_search: bool,
}

impl ParagraphCheckRequest {
    /// Build a request, treating a blank document URL as absent.
    ///
    /// Returns `None` when `paragraph` is blank.
    #[must_use]
    pub fn new(paragraph: &str, google_doc_url: &str, use_web_search: bool) -> Option<Self> {
        if paragraph.trim().is_empty() {
            return None;
        }
        let google_doc_url = Some(google_doc_url.trim()).filter(|url| !url.is_empty()).map(str::to_owned);
        Some(Self { paragraph: paragraph.to_owned(), top_k: DEFAULT_TOP_K, google_doc_url, use_web_search })
    }
}

/// One corpus passage matched against the paragraph. Scores are in `0..=1`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ParagraphMatch {
    #[serde(default)]
    pub combined: f64,
    #[serde(default)]
    pub semantic: f64,
    #[serde(default)]
    pub lexical: f64,
    #[serde(default)]
    pub stylometric: f64,
    #[serde(default)]
    pub corpus_text: String,
}

/// Report returned by the paragraph check. `paragraph_score` is already a
/// percentage.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct ParagraphReport {
    #[serde(default)]
    pub paragraph_score: Option<f64>,
    #[serde(default)]
    pub matches: Vec<ParagraphMatch>,
}

/// Format a `0..=1` score as a percentage with two decimals.
#[must_use]
pub fn format_ratio(score: f64) -> String {
    format!("{:.2}%", score * 100.0)
}
