use std::{collections::BTreeSet, time::Instant};

use tracing::{debug, info};

use super::{ranker, search_result::SearchResult};
use crate::{analyzer::Analyzer, error::Result, inverted_index::Index};

/// Ranks the documents of one corpus against free-text queries.
///
/// The index is built when the engine is created and reused by every query
/// until [`SearchEngine::rebuild`] is called. Searching only borrows the engine,
/// so one engine can serve concurrent queries.
pub struct SearchEngine {
    index: Index,
    analyzer: Analyzer,
}

impl SearchEngine {
    pub fn new<S: AsRef<str>>(corpus: &[S]) -> Result<Self> {
        let analyzer = Analyzer::new()?;
        let index = Index::build(&analyzer, corpus);

        info!(documents = index.total_documents(), "Search engine ready");

        Ok(Self { index, analyzer })
    }

    pub fn rebuild<S: AsRef<str>>(&mut self, corpus: &[S]) {
        self.index.rebuild(&self.analyzer, corpus);

        info!(documents = self.index.total_documents(), "Index rebuilt");
    }

    pub const fn index(&self) -> &Index {
        &self.index
    }

    /// Distinct normalized terms of `query`, in a fixed order.
    pub fn query_terms(&self, query: &str) -> BTreeSet<String> {
        self.analyzer.analyze(query).collect()
    }

    pub fn search(&self, query: &str, top_k: usize) -> Result<Vec<SearchResult>> {
        let start = Instant::now();
        let query_terms = self.query_terms(query);

        let results = ranker::rank(&self.index, &query_terms, top_k)?;

        debug!(
            query,
            terms = query_terms.len(),
            top_k,
            results = results.len(),
            elapsed = ?start.elapsed(),
            "Search completed"
        );

        Ok(results)
    }
}
