pub mod analyzer;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod inverted_index;
pub mod phonetic;
pub mod search;
pub mod stemmer;
pub mod tokenizer;

pub use corpus::Corpus;
pub use error::{Error, Result};
pub use search::{search, SearchEngine, SearchResult};
