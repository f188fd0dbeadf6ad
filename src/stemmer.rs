//! Porter stemmer.
//!
//! The word being stemmed lives in a [`Stemmer`] value: a byte buffer plus two
//! cursors. `k` is the index of the last character of the current word, `j` is
//! one past the last character of the stem that precedes a matched suffix
//! (so an empty stem is `j == 0`). Bytes after `k` are stale and never read.
//!
//! Each step consumes the value and hands it back, so no state is shared
//! between calls to [`stem`].

type SuffixRules = &'static [(&'static [u8], &'static [u8])];

/// Step 3 rules, grouped by the penultimate letter of the word.
const DOUBLE_SUFFIXES: &[(u8, SuffixRules)] = &[
    (b'a', &[(b"ational", b"ate"), (b"tional", b"tion")]),
    (b'c', &[(b"enci", b"ence"), (b"anci", b"ance")]),
    (b'e', &[(b"izer", b"ize")]),
    (
        b'l',
        &[
            (b"bli", b"ble"),
            (b"alli", b"al"),
            (b"entli", b"ent"),
            (b"eli", b"e"),
            (b"ousli", b"ous"),
        ],
    ),
    (
        b'o',
        &[(b"ization", b"ize"), (b"ation", b"ate"), (b"ator", b"ate")],
    ),
    (
        b's',
        &[
            (b"alism", b"al"),
            (b"iveness", b"ive"),
            (b"fulness", b"ful"),
            (b"ousness", b"ous"),
        ],
    ),
    (
        b't',
        &[(b"aliti", b"al"), (b"iviti", b"ive"), (b"biliti", b"ble")],
    ),
    (b'g', &[(b"logi", b"log")]),
];

/// Step 4 rules, grouped by the last letter of the word.
const IC_FUL_NESS_SUFFIXES: &[(u8, SuffixRules)] = &[
    (b'e', &[(b"icate", b"ic"), (b"ative", b""), (b"alize", b"al")]),
    (b'i', &[(b"iciti", b"ic")]),
    (b'l', &[(b"ical", b"ic"), (b"ful", b"")]),
    (b's', &[(b"ness", b"")]),
];

/// Step 5 suffixes, grouped by the penultimate letter of the word.
const FINAL_SUFFIXES: &[(u8, &[&[u8]])] = &[
    (b'a', &[b"al"]),
    (b'c', &[b"ance", b"ence"]),
    (b'e', &[b"er"]),
    (b'i', &[b"ic"]),
    (b'l', &[b"able", b"ible"]),
    (b'n', &[b"ant", b"ement", b"ment", b"ent"]),
    (b'o', &[b"ion", b"ou"]),
    (b's', &[b"ism"]),
    (b't', &[b"ate", b"iti"]),
    (b'u', &[b"ous"]),
    (b'v', &[b"ive"]),
    (b'z', &[b"ize"]),
];

fn rule_group<T: Copy>(table: &[(u8, T)], key: u8) -> Option<T> {
    table
        .iter()
        .find(|(letter, _)| *letter == key)
        .map(|(_, rules)| *rules)
}

/// Reduces a lower-case English word to its Porter stem.
///
/// Words of one or two letters and non-ASCII input are returned unchanged.
///
/// This is the full algorithm including the final-`e` step, so `agreed`
/// stems to `agre`: step 1 yields `agree` and step 6 drops the `e`.
pub fn stem(word: &str) -> String {
    if word.len() <= 2 || !word.is_ascii() {
        return word.to_owned();
    }

    Stemmer::new(word)
        .step1()
        .step2()
        .step3()
        .step4()
        .step5()
        .step6()
        .into_stem()
}

const fn is_vowel(c: u8) -> bool {
    matches!(c, b'a' | b'e' | b'i' | b'o' | b'u')
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Stemmer {
    b: Vec<u8>,
    j: usize,
    k: usize,
}

impl Stemmer {
    fn new(word: &str) -> Self {
        let b = word.as_bytes().to_vec();
        let k = b.len().saturating_sub(1);
        Self { b, j: 0, k }
    }

    fn into_stem(mut self) -> String {
        self.b.truncate(self.k + 1);
        self.b.into_iter().map(char::from).collect()
    }

    /// A `y` is a consonant at the start of the word or after a vowel, so
    /// along a run of `y`s the answer alternates.
    fn consonant(&self, i: usize) -> bool {
        if self.b[i] != b'y' {
            return !is_vowel(self.b[i]);
        }

        let start = self.b[..i].iter().rposition(|&c| c != b'y').map_or(0, |p| p + 1);
        let first = start == 0 || is_vowel(self.b[start - 1]);

        first ^ ((i - start) % 2 == 1)
    }

    /// Consonant flags of `b[..end]`, left to right.
    fn consonants(&self, end: usize) -> impl Iterator<Item = bool> + '_ {
        self.b[..end].iter().scan(false, |previous, &c| {
            *previous = match c {
                b'y' => !*previous,
                c => !is_vowel(c),
            };
            Some(*previous)
        })
    }

    /// Number of vowel-consonant boundaries in `b[..j]`.
    ///
    /// `<c><v>` gives 0, `<c>vc<v>` gives 1, `<c>vcvc<v>` gives 2, ...
    fn m(&self) -> usize {
        let mut previous = true;
        self.consonants(self.j)
            .filter(|&consonant| {
                let boundary = consonant && !previous;
                previous = consonant;
                boundary
            })
            .count()
    }

    fn vowel_in_stem(&self) -> bool {
        self.consonants(self.j).any(|consonant| !consonant)
    }

    fn double_consonant(&self, x: usize) -> bool {
        x >= 1 && self.b[x] == self.b[x - 1] && self.consonant(x)
    }

    /// `b[i-2..=i]` is consonant-vowel-consonant and the last one is not
    /// `w`, `x` or `y`: cav(e), lov(e), hop(e) but snow, box, tray.
    fn cvc(&self, i: usize) -> bool {
        if i < 2 || !self.consonant(i) || self.consonant(i - 1) || !self.consonant(i - 2) {
            return false;
        }

        !matches!(self.b[i], b'w' | b'x' | b'y')
    }

    fn ends_with(&mut self, suffix: &[u8]) -> bool {
        let len = suffix.len();
        if len > self.k + 1 {
            return false;
        }

        let start = self.k + 1 - len;
        if &self.b[start..=self.k] != suffix {
            return false;
        }

        self.j = start;
        true
    }

    fn replace_suffix(&mut self, replacement: &[u8]) {
        self.b.truncate(self.j);
        self.b.extend_from_slice(replacement);
        self.k = self.b.len().saturating_sub(1);
    }

    fn conditional_replace(&mut self, replacement: &[u8]) {
        if self.m() > 0 {
            self.replace_suffix(replacement);
        }
    }

    /// Plurals and -ed/-ing: caresses -> caress, ponies -> poni,
    /// agreed -> agree, matting -> mat, mating -> mate, meetings -> meet.
    fn step1(mut self) -> Self {
        if self.b[self.k] == b's' {
            if self.ends_with(b"sses") {
                self.k -= 2;
            } else if self.ends_with(b"ies") {
                self.replace_suffix(b"i");
            } else if self.b[self.k - 1] != b's' {
                self.k -= 1;
            }
        }

        if self.ends_with(b"eed") {
            if self.m() > 0 {
                self.k -= 1;
            }
        } else if (self.ends_with(b"ed") || self.ends_with(b"ing")) && self.vowel_in_stem() {
            self.k = self.j - 1;
            if self.ends_with(b"at") {
                self.replace_suffix(b"ate");
            } else if self.ends_with(b"bl") {
                self.replace_suffix(b"ble");
            } else if self.ends_with(b"iz") {
                self.replace_suffix(b"ize");
            } else if self.double_consonant(self.k) {
                if !matches!(self.b[self.k], b'l' | b's' | b'z') {
                    self.k -= 1;
                }
            } else if self.m() == 1 && self.cvc(self.k) {
                self.replace_suffix(b"e");
            }
        }

        self
    }

    /// Terminal y becomes i when the stem has another vowel.
    fn step2(mut self) -> Self {
        if self.ends_with(b"y") && self.vowel_in_stem() {
            self.b[self.k] = b'i';
        }

        self
    }

    fn step3(mut self) -> Self {
        if self.k == 0 {
            return self;
        }

        if let Some(rules) = rule_group(DOUBLE_SUFFIXES, self.b[self.k - 1]) {
            self.apply_first(rules);
        }

        self
    }

    fn step4(mut self) -> Self {
        if let Some(rules) = rule_group(IC_FUL_NESS_SUFFIXES, self.b[self.k]) {
            self.apply_first(rules);
        }

        self
    }

    /// Takes off -ant, -ence etc. in context `<c>vcvc<v>`.
    fn step5(mut self) -> Self {
        if self.k == 0 {
            return self;
        }

        let Some(suffixes) = rule_group(FINAL_SUFFIXES, self.b[self.k - 1]) else {
            return self;
        };

        let matched = suffixes.iter().any(|suffix| {
            self.ends_with(suffix)
                && (*suffix != b"ion" || (self.j >= 1 && matches!(self.b[self.j - 1], b's' | b't')))
        });

        if matched && self.m() > 1 {
            self.k = self.j - 1;
        }

        self
    }

    /// Removes a final -e and reduces -ll to -l when the measure allows it.
    fn step6(mut self) -> Self {
        self.j = self.k + 1;

        if self.b[self.k] == b'e' {
            let m = self.m();
            let short_syllable = self.k >= 1 && self.cvc(self.k - 1);
            if m > 1 || (m == 1 && !short_syllable) {
                self.k -= 1;
            }
        }

        if self.b[self.k] == b'l' && self.double_consonant(self.k) && self.m() > 1 {
            self.k -= 1;
        }

        self
    }

    fn apply_first(&mut self, rules: SuffixRules) {
        if let Some((_, replacement)) = rules.iter().find(|(suffix, _)| self.ends_with(suffix)) {
            self.conditional_replace(replacement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after_step1(word: &str) -> String {
        Stemmer::new(word).step1().into_stem()
    }

    #[test]
    fn y_alternates_along_a_run() {
        let stemmer = Stemmer::new("toyyyboy");
        let expected = [true, false, true, false, true, true, false, true];

        let single: Vec<_> = (0..8).map(|i| stemmer.consonant(i)).collect();
        let scanned: Vec<_> = stemmer.consonants(8).collect();
        assert_eq!(single, expected);
        assert_eq!(scanned, expected);
    }

    #[test]
    fn long_runs_of_y_do_not_exhaust_the_stack() {
        let word = format!("a{}s", "y".repeat(200_000));

        let stemmed = stem(&word);
        assert!(stemmed.starts_with("ay"));
    }

    #[test]
    fn plurals_and_participles() {
        assert_eq!(stem("caresses"), "caress");
        assert_eq!(stem("ponies"), "poni");
        assert_eq!(stem("ties"), "ti");
        assert_eq!(stem("caress"), "caress");
        assert_eq!(stem("cats"), "cat");
        assert_eq!(stem("feed"), "feed");
        assert_eq!(stem("matting"), "mat");
        assert_eq!(stem("mating"), "mate");
        assert_eq!(stem("meeting"), "meet");
        assert_eq!(stem("milling"), "mill");
        assert_eq!(stem("messing"), "mess");
        assert_eq!(stem("meetings"), "meet");
    }

    #[test]
    fn step1_restores_endings() {
        assert_eq!(after_step1("agreed"), "agree");
        assert_eq!(after_step1("disabled"), "disable");
        assert_eq!(after_step1("conflated"), "conflate");
        assert_eq!(after_step1("troubled"), "trouble");
        assert_eq!(after_step1("sized"), "size");
        assert_eq!(after_step1("hopping"), "hop");
        assert_eq!(after_step1("tanned"), "tan");
        assert_eq!(after_step1("falling"), "fall");
        assert_eq!(after_step1("hissing"), "hiss");
        assert_eq!(after_step1("fizzed"), "fizz");
        assert_eq!(after_step1("failing"), "fail");
        assert_eq!(after_step1("filing"), "file");
    }

    #[test]
    fn final_e_is_removed_after_step1() {
        // "agree" has measure 1 and does not end consonant-vowel-consonant.
        assert_eq!(stem("agreed"), "agre");
        assert_eq!(stem("probate"), "probat");
        assert_eq!(stem("rate"), "rate");
        assert_eq!(stem("cease"), "ceas");
    }

    #[test]
    fn y_to_i() {
        assert_eq!(stem("happy"), "happi");
        assert_eq!(stem("sky"), "sky");
    }

    #[test]
    fn double_suffixes() {
        assert_eq!(stem("relational"), "relat");
        assert_eq!(stem("conditional"), "condit");
        assert_eq!(stem("valenci"), "valenc");
        assert_eq!(stem("digitizer"), "digit");
        assert_eq!(stem("vietnamization"), "vietnam");
        assert_eq!(stem("predication"), "predic");
        assert_eq!(stem("operator"), "oper");
        assert_eq!(stem("hopefulness"), "hope");
        assert_eq!(stem("sensibiliti"), "sensibl");
        assert_eq!(stem("analogi"), "analog");
    }

    #[test]
    fn ic_ful_ness_suffixes() {
        assert_eq!(stem("triplicate"), "triplic");
        assert_eq!(stem("formative"), "form");
        assert_eq!(stem("formalize"), "formal");
        assert_eq!(stem("electrical"), "electr");
        assert_eq!(stem("goodness"), "good");
    }

    #[test]
    fn final_suffixes() {
        assert_eq!(stem("revival"), "reviv");
        assert_eq!(stem("allowance"), "allow");
        assert_eq!(stem("inference"), "infer");
        assert_eq!(stem("airliner"), "airlin");
        assert_eq!(stem("adjustable"), "adjust");
        assert_eq!(stem("irritant"), "irrit");
        assert_eq!(stem("replacement"), "replac");
        assert_eq!(stem("adoption"), "adopt");
        assert_eq!(stem("communism"), "commun");
        assert_eq!(stem("effective"), "effect");
        assert_eq!(stem("bowdlerize"), "bowdler");
    }

    #[test]
    fn ion_needs_s_or_t_before_it() {
        assert_eq!(stem("adoption"), "adopt");
        assert_eq!(stem("champion"), "champion");
    }

    #[test]
    fn double_l_reduction() {
        assert_eq!(stem("controll"), "control");
        assert_eq!(stem("roll"), "roll");
    }

    #[test]
    fn short_and_degenerate_input() {
        assert_eq!(stem(""), "");
        assert_eq!(stem("a"), "a");
        assert_eq!(stem("is"), "is");
        assert_eq!(stem("ing"), "ing");
        assert_eq!(stem("sss"), "sss");
        assert_eq!(stem("123"), "123");
    }

    #[test]
    fn non_ascii_is_returned_unchanged() {
        assert_eq!(stem("cafés"), "cafés");
        assert_eq!(stem("naïvely"), "naïvely");
    }

    #[test]
    fn stemming_is_stable_on_stems() {
        for word in ["caress", "poni", "mat", "meet", "feed", "pizza"] {
            assert_eq!(stem(word), word);
        }
    }
}
