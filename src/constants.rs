/// Number of results shown when the caller does not ask for a specific count.
pub const DEFAULT_TOP_K: usize = 10;
pub const MIN_TOP_K: usize = 3;
pub const MAX_TOP_K: usize = 30;

/// Maximum number of characters in a phonetic code.
pub const CODE_LENGTH: usize = 6;

/// Field holding the document body in each corpus record.
pub const DEFAULT_TEXT_FIELD: &str = "request_text";
pub const DEFAULT_CORPUS_PATH: &str = "pizza_request_dataset.json";
