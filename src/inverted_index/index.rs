use std::time::Instant;

use tracing::debug;

use super::doc_map::{Doc, DocFreqMap, DocId, Weight, DF};
use crate::{analyzer::Analyzer, search::weights::TermWeights};

/// Term statistics for one corpus snapshot: a term-frequency map per
/// document, the document frequency of every term and the derived weights.
///
/// Built once and shared by reference across queries; call
/// [`Index::rebuild`] when the corpus changes.
#[derive(Debug, Clone, Default)]
pub struct Index {
    docs: Vec<Doc>,
    document_frequency: DocFreqMap,
    weights: TermWeights,
}

impl Index {
    pub fn build<S: AsRef<str>>(analyzer: &Analyzer, corpus: &[S]) -> Self {
        let start = Instant::now();
        let mut document_frequency = DocFreqMap::new();

        let docs: Vec<Doc> = corpus
            .iter()
            .enumerate()
            .map(|(position, text)| {
                let doc = Doc::new(position + 1, analyzer.analyze(text.as_ref()));

                for term in doc.term_freq.keys() {
                    *document_frequency.entry(term.clone()).or_insert(0) += 1;
                }

                doc
            })
            .collect();

        let weights = TermWeights::from_document_frequencies(&document_frequency, docs.len());

        debug!(
            documents = docs.len(),
            terms = document_frequency.len(),
            elapsed = ?start.elapsed(),
            "Index built"
        );

        Self {
            docs,
            document_frequency,
            weights,
        }
    }

    /// Replaces the index contents with statistics for `corpus`.
    pub fn rebuild<S: AsRef<str>>(&mut self, analyzer: &Analyzer, corpus: &[S]) {
        *self = Self::build(analyzer, corpus);
    }

    pub fn total_documents(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn docs(&self) -> &[Doc] {
        &self.docs
    }

    pub fn doc(&self, doc_id: DocId) -> Option<&Doc> {
        doc_id.checked_sub(1).and_then(|position| self.docs.get(position))
    }

    pub fn document_frequency(&self, term: &str) -> DF {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    pub fn weight(&self, term: &str) -> Option<Weight> {
        self.weights.get(term)
    }

    pub const fn weights(&self) -> &TermWeights {
        &self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyzer::normalize;

    fn build(corpus: &[&str]) -> Index {
        let analyzer = Analyzer::new().expect("Failed to create analyzer");
        Index::build(&analyzer, corpus)
    }

    #[test]
    fn documents_are_numbered_from_one() {
        let index = build(&["first text", "second text"]);

        assert_eq!(index.total_documents(), 2);
        assert_eq!(index.doc(1).map(|doc| doc.id), Some(1));
        assert_eq!(index.doc(2).map(|doc| doc.id), Some(2));
        assert!(index.doc(0).is_none());
        assert!(index.doc(3).is_none());
    }

    #[test]
    fn term_frequency_counts_occurrences() {
        let index = build(&["pizza pizza PIZZAS and more pizza"]);
        let doc = index.doc(1).expect("Doc 1 exists");

        assert_eq!(doc.frequency(&normalize("pizza")), 4);
        assert_eq!(doc.frequency(&normalize("more")), 1);
    }

    #[test]
    fn document_frequency_counts_documents_not_occurrences() {
        let index = build(&[
            "pizza pizza pizza",
            "no food here",
            "a pizza, please",
        ]);

        assert_eq!(index.document_frequency(&normalize("pizza")), 2);
        assert_eq!(index.document_frequency(&normalize("please")), 1);
        assert_eq!(index.document_frequency("missing"), 0);
    }

    #[test]
    fn weights_cover_every_corpus_term() {
        let index = build(&["I need a pizza", "pizza money"]);

        assert_eq!(index.weights().len(), index.document_frequency.len());
        assert_eq!(index.weight(&normalize("pizza")), Some(0.5 / 2.5));
        assert_eq!(index.weight(&normalize("money")), Some(1.5 / 1.5));
        assert_eq!(index.weight("unknown"), None);
    }

    #[test]
    fn rebuild_replaces_previous_statistics() {
        let analyzer = Analyzer::new().expect("Failed to create analyzer");
        let mut index = Index::build(&analyzer, &["pizza"]);
        assert_eq!(index.document_frequency(&normalize("pizza")), 1);

        index.rebuild(&analyzer, &["cars", "more cars", "pizza"]);

        assert_eq!(index.total_documents(), 3);
        assert_eq!(index.document_frequency(&normalize("car")), 2);
        assert_eq!(index.document_frequency(&normalize("pizza")), 1);
    }

    #[test]
    fn empty_corpus() {
        let index = build(&[]);

        assert!(index.is_empty());
        assert!(index.weights().is_empty());
    }
}
