use std::fmt;

use serde::Serialize;

use crate::inverted_index::doc_map::DocId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    pub doc_id: DocId,
    pub score: f64,
}

impl SearchResult {
    pub const fn new(doc_id: DocId, score: f64) -> Self {
        Self { doc_id, score }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Doc {}   {}", self.doc_id, self.score)
    }
}
