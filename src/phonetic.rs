//! Metaphone-style phonetic encoder.
//!
//! Folds a word into a code of at most [`CODE_LENGTH`] characters so that
//! spellings which sound alike (`knight`, `nite`) normalize to the same term.

use crate::constants::CODE_LENGTH;

/// Code for each letter `A..=Z` when no context rule applies.
const LETTER_CODES: &[u8; 26] = b"vBKTvFKHvJKLMNvPKRSTvFW*YS";

/// Prefix rewrites applied once, in order, before encoding.
const INITIAL_REWRITES: &[(&[u8], &[u8])] = &[
    (b"KN", b"N"),
    (b"GN", b"N"),
    (b"PN", b"N"),
    (b"WR", b"R"),
    (b"AE", b"E"),
    (b"PF", b"F"),
    (b"WH", b"W"),
    (b"X", b"S"),
];

const VOWELS: &[u8] = b"AEIOU";
const FRONT_VOWELS: &[u8] = b"EIY";

const fn letter_code(c: u8) -> u8 {
    LETTER_CODES[(c - b'A') as usize]
}

/// Encodes `word` into its phonetic code.
///
/// Non-letters are ignored. An empty word gives an empty code and a single
/// letter is returned as is.
pub fn encode(word: &str) -> String {
    let mut letters: Vec<u8> = word
        .chars()
        .flat_map(char::to_uppercase)
        .filter(char::is_ascii_uppercase)
        .map(|c| c as u8)
        .collect();

    if letters.len() <= 1 {
        return letters.into_iter().map(char::from).collect();
    }

    rewrite_prefix(&mut letters);

    Encoder::new(&letters).run()
}

fn rewrite_prefix(letters: &mut Vec<u8>) {
    for (prefix, replacement) in INITIAL_REWRITES {
        if letters.starts_with(prefix) {
            *letters = [*replacement, &letters[prefix.len()..]].concat();
        }
    }
}

struct Encoder<'w> {
    input: &'w [u8],
    code: Vec<u8>,
}

impl<'w> Encoder<'w> {
    fn new(input: &'w [u8]) -> Self {
        Self {
            input,
            code: Vec::with_capacity(CODE_LENGTH),
        }
    }

    fn at(&self, i: usize) -> Option<u8> {
        self.input.get(i).copied()
    }

    fn next_in(&self, i: usize, set: &[u8]) -> bool {
        self.at(i + 1).is_some_and(|c| set.contains(&c))
    }

    /// `input[i+1..=i+2]` is `I` followed by one of `tails`.
    fn followed_by_i(&self, i: usize, tails: &[u8]) -> bool {
        self.at(i + 1) == Some(b'I') && self.at(i + 2).is_some_and(|c| tails.contains(&c))
    }

    fn emit(&mut self, c: u8) {
        if self.code.len() < CODE_LENGTH {
            self.code.push(c);
        }
    }

    fn run(mut self) -> String {
        let last = self.input.len() - 1;
        let mut prev = None;

        for i in 0..self.input.len() {
            if self.code.len() >= CODE_LENGTH {
                break;
            }

            let c = self.input[i];
            // A doubled letter is one sound, except "cc" before e/i/y ("accent").
            if prev == Some(c) && !(c == b'C' && self.next_in(i, FRONT_VOWELS)) {
                continue;
            }

            match c {
                b'A' | b'E' | b'I' | b'O' | b'U' => {
                    if i == 0 {
                        self.emit(c);
                    }
                }
                b'F' | b'J' | b'L' | b'M' | b'N' | b'R' => self.emit(c),
                b'Q' | b'V' | b'Z' => self.emit(letter_code(c)),
                b'B' => {
                    // Silent in a final "mb".
                    if !(i == last && self.code.last() == Some(&b'M')) {
                        self.emit(c);
                    }
                }
                b'C' => {
                    if self.followed_by_i(i, b"A")
                        || (self.at(i + 1) == Some(b'H') && i > 0 && self.input[i - 1] != b'S')
                    {
                        self.emit(b'X');
                    } else if self.next_in(i, FRONT_VOWELS) {
                        self.emit(b'S');
                    } else {
                        self.emit(b'K');
                    }
                }
                b'D' => {
                    if self.at(i + 1) == Some(b'G')
                        && self.at(i + 2).is_some_and(|c| FRONT_VOWELS.contains(&c))
                    {
                        self.emit(b'J');
                    } else {
                        self.emit(b'T');
                    }
                }
                b'G' => self.encode_g(i),
                b'H' => {
                    let after_modifier = i > 0 && b"AEIOUCGPST".contains(&self.input[i - 1]);
                    let before_consonant =
                        self.at(i + 1).is_some_and(|next| !VOWELS.contains(&next));
                    if !after_modifier && !before_consonant {
                        self.emit(c);
                    }
                }
                b'K' => {
                    if !(i > 0 && self.input[i - 1] == b'C') {
                        self.emit(letter_code(c));
                    }
                }
                b'P' => {
                    if self.at(i + 1) == Some(b'H') {
                        self.emit(b'F');
                    } else {
                        self.emit(letter_code(c));
                    }
                }
                b'S' => {
                    if self.followed_by_i(i, b"AO") || self.at(i + 1) == Some(b'H') {
                        self.emit(b'X');
                    } else {
                        self.emit(b'S');
                    }
                }
                b'T' => {
                    if self.followed_by_i(i, b"AO") {
                        self.emit(b'X');
                    } else if self.at(i + 1) == Some(b'H') {
                        self.emit(b'0');
                    } else if !(self.at(i + 1) == Some(b'C') && self.at(i + 2) == Some(b'H')) {
                        self.emit(b'T');
                    }
                }
                b'W' | b'Y' => {
                    if self.next_in(i, VOWELS) {
                        self.emit(letter_code(c));
                    }
                }
                b'X' => {
                    self.emit(b'K');
                    self.emit(b'S');
                }
                _ => {}
            }

            prev = Some(c);
        }

        self.code.into_iter().map(char::from).collect()
    }

    fn encode_g(&mut self, i: usize) {
        let next = self.at(i + 1);

        if next == Some(b'N') {
            // "gn" -> "n"
        } else if i > 0 && self.input[i - 1] == b'D' && self.next_in(i, FRONT_VOWELS) {
            // "dg[eiy]" was already encoded as J
        } else if next == Some(b'H') && !self.at(i + 2).is_some_and(|c| VOWELS.contains(&c)) {
            // silent "gh" as in "night"
        } else if self.next_in(i, FRONT_VOWELS) {
            self.emit(b'J');
        } else {
            self.emit(letter_code(b'G'));
        }
    }
}
