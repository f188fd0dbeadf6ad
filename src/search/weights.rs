use std::collections::HashMap;

use crate::inverted_index::doc_map::{DocFreqMap, Weight, DF};

/// Robertson/Sparck-Jones relevance weight of a term that occurs in `df` of
/// `total_documents` documents: `(N - df + 0.5) / (df + 0.5)`.
#[allow(clippy::cast_precision_loss)]
pub fn robertson_sparck_jones(total_documents: usize, df: DF) -> Weight {
    let n = total_documents as f64;
    let df = f64::from(df);

    (n - df + 0.5) / (df + 0.5)
}

/// Weight of every term that appears somewhere in an indexed corpus.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermWeights {
    weights: HashMap<String, Weight>,
}

impl TermWeights {
    pub fn from_document_frequencies(document_frequency: &DocFreqMap, total_documents: usize) -> Self {
        let weights = document_frequency
            .iter()
            .map(|(term, &df)| (term.clone(), robertson_sparck_jones(total_documents, df)))
            .collect();

        Self { weights }
    }

    pub fn get(&self, term: &str) -> Option<Weight> {
        self.weights.get(term).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
