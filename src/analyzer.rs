use crate::{error::Result, phonetic, stemmer, tokenizer::Tokenizer};

/// Turns raw text into the term stream used for both documents and queries:
/// tokenize, lowercase, stem, then phonetically encode plain words.
pub struct Analyzer {
    tokenizer: Tokenizer,
}

impl Analyzer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            tokenizer: Tokenizer::new()?,
        })
    }

    pub fn analyze<'t>(&'t self, text: &'t str) -> impl Iterator<Item = String> + 't {
        self.tokenizer.tokenize(text).map(normalize)
    }
}

/// Normalizes a single token into a term.
pub fn normalize(token: &str) -> String {
    let stemmed = stemmer::stem(&token.to_lowercase());

    if is_plain_word(&stemmed) {
        phonetic::encode(&stemmed)
    } else {
        stemmed
    }
}

/// Matches `[a-zA-Z][a-z]+`: only these stems are phonetically folded, so
/// numbers, mixed tokens and single letters are indexed as stemmed.
fn is_plain_word(stem: &str) -> bool {
    let mut chars = stem.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    let rest = chars.as_str();
    first.is_ascii_alphabetic() && !rest.is_empty() && rest.chars().all(|c| c.is_ascii_lowercase())
}
