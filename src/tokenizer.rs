use crate::error::{Error, Result};
use regex::Regex;

/// Letters and digits in any script, optionally joined by apostrophes
/// (`o'clock`, `rock'n'roll`). Everything else (whitespace and punctuation) is a
/// token boundary.
const WORD_PATTERN: &str = r"[\p{L}\p{N}]+(?:['’][\p{L}\p{N}]+)*";

/// Clitics split off the end of a word: `pizza's` -> `pizza` `'s`.
const CLITICS: [&str; 6] = ["s", "m", "d", "ll", "re", "ve"];

pub struct Tokenizer {
    regex: Regex,
}

impl Tokenizer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            regex: Regex::new(WORD_PATTERN)
                .map_err(|e| Error::Generic(format!("Failed to compile regex: {e}")))?,
        })
    }

    /// Lazily yields the word tokens of `text`, case preserved. Trailing
    /// clitics (`'s`, `'ll`, `n't`, ...) come out as tokens of their own.
    pub fn tokenize<'t>(&'t self, text: &'t str) -> impl Iterator<Item = &'t str> + 't {
        self.regex.find_iter(text).flat_map(|token| {
            let (word, clitic) = split_clitic(token.as_str());
            std::iter::once(word).chain(clitic)
        })
    }
}

/// Splits a trailing clitic off `token`, if it carries one.
fn split_clitic(token: &str) -> (&str, Option<&str>) {
    let Some(apostrophe) = token.rfind(['\'', '’']) else {
        return (token, None);
    };

    let (word, clitic) = token.split_at(apostrophe);
    let suffix = clitic.trim_start_matches(['\'', '’']);

    if CLITICS.iter().any(|c| suffix.eq_ignore_ascii_case(c)) {
        return (word, Some(clitic));
    }

    if suffix.eq_ignore_ascii_case("t") && word.len() > 1 && word.ends_with(['n', 'N']) {
        let (word, negation) = token.split_at(apostrophe - 1);
        return (word, Some(negation));
    }

    (token, None)
}
