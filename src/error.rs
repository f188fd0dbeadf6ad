use crate::inverted_index::doc_map::DocId;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Generic {0}")]
    Generic(String),

    #[error("document {index} has no string field `{field}`")]
    MissingTextField { index: usize, field: String },

    #[error("Doc {0} does not exist in the corpus")]
    DocumentNotFound(DocId),

    #[error("top-k must be at least 1, got {0}")]
    InvalidTopK(usize),

    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    SerdeJson(#[from] serde_json::Error),

    #[error(transparent)]
    WalkDir(#[from] walkdir::Error),
}

pub type Result<T> = core::result::Result<T, Error>;
