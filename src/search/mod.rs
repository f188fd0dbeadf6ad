pub mod engine;
pub mod ranker;
pub mod search_result;
pub mod weights;

pub use engine::SearchEngine;
pub use search_result::SearchResult;

use crate::error::Result;

/// One-shot search: indexes `corpus`, ranks it against `query` and returns at
/// most `top_k` results. Use [`SearchEngine`] to reuse the index across queries.
pub fn search<S: AsRef<str>>(query: &str, corpus: &[S], top_k: usize) -> Result<Vec<SearchResult>> {
    SearchEngine::new(corpus)?.search(query, top_k)
}
