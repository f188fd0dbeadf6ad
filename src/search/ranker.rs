use std::collections::BTreeSet;

use super::{search_result::SearchResult, weights::TermWeights};
use crate::{
    error::{Error, Result},
    inverted_index::{doc_map::Weight, Doc, Index},
};

/// Product of the weights of the distinct query terms present in `doc`.
///
/// A document containing none of the terms scores `1.0`, the empty product,
/// the same as an empty query gives every document.
pub fn score(doc: &Doc, query_terms: &BTreeSet<String>, weights: &TermWeights) -> Weight {
    query_terms
        .iter()
        .filter(|term| doc.contains(term))
        .filter_map(|term| weights.get(term))
        .product()
}

/// Scores every document and returns at most `top_k` of them, best first.
/// Documents with equal scores keep their corpus order.
pub fn rank(index: &Index, query_terms: &BTreeSet<String>, top_k: usize) -> Result<Vec<SearchResult>> {
    if top_k == 0 {
        return Err(Error::InvalidTopK(top_k));
    }

    let mut results: Vec<SearchResult> = index
        .docs()
        .iter()
        .map(|doc| SearchResult::new(doc.id, score(doc, query_terms, index.weights())))
        .collect();

    results.sort_by(|a, b| b.score.total_cmp(&a.score));
    results.truncate(top_k);

    Ok(results)
}
