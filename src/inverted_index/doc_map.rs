use std::collections::HashMap;

/// 1-based position of a document in its corpus ("Doc 1", "Doc 2", ...).
pub type DocId = usize;
pub type TF = u32;
pub type DF = u32;
pub type Weight = f64;

pub type TermFreqMap = HashMap<String, TF>;
pub type DocFreqMap = HashMap<String, DF>;

/// A document reduced to its term frequencies; the text itself is not kept.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Doc {
    pub id: DocId,
    pub term_freq: TermFreqMap,
}

impl Doc {
    pub fn new(id: DocId, terms: impl IntoIterator<Item = String>) -> Self {
        let mut term_freq = TermFreqMap::new();
        for term in terms {
            *term_freq.entry(term).or_insert(0) += 1;
        }

        Self { id, term_freq }
    }

    pub fn contains(&self, term: &str) -> bool {
        self.term_freq.contains_key(term)
    }

    pub fn frequency(&self, term: &str) -> TF {
        self.term_freq.get(term).copied().unwrap_or(0)
    }
}
