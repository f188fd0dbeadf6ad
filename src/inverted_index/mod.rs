pub mod doc_map;
pub mod index;

pub use doc_map::{Doc, DocId};
pub use index::Index;
