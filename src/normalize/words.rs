//! English number-word to digit conversion.
//!
//! Replaces runs of number words inside a phrase with their numeric value
//! while leaving every other word in place: `"twenty five"` becomes `"25"`,
//! `"several"` stays `"several"`. Fuzzy mode additionally accepts common
//! one-character misspellings ("fourty", "eigth").

/// Number words with their values. Scales (hundred/thousand/million) are
/// handled separately in the accumulator.
const UNITS: &[(&str, u64)] = &[
    ("zero", 0),
    ("one", 1),
    ("two", 2),
    ("three", 3),
    ("four", 4),
    ("five", 5),
    ("six", 6),
    ("seven", 7),
    ("eight", 8),
    ("nine", 9),
    ("ten", 10),
    ("eleven", 11),
    ("twelve", 12),
    ("thirteen", 13),
    ("fourteen", 14),
    ("fifteen", 15),
    ("sixteen", 16),
    ("seventeen", 17),
    ("eighteen", 18),
    ("nineteen", 19),
    ("twenty", 20),
    ("thirty", 30),
    ("forty", 40),
    ("fifty", 50),
    ("sixty", 60),
    ("seventy", 70),
    ("eighty", 80),
    ("ninety", 90),
];

const SCALES: &[(&str, u64)] = &[
    ("hundred", 100),
    ("thousand", 1_000),
    ("million", 1_000_000),
];

enum NumberWord {
    Unit(u64),
    Scale(u64),
}

/// Convert number words in `text` to digits, leaving other words intact.
///
/// Tokens are split on whitespace and hyphens, so `"twenty-five"` and
/// `"twenty five"` both come back as `"25"`. With `fuzzy` set, words within
/// one edit of a known number word are accepted.
pub fn words_to_numbers(text: &str, fuzzy: bool) -> String {
    let mut out: Vec<String> = Vec::new();
    let mut run: Option<Accumulator> = None;

    for token in text.split(|c: char| c.is_whitespace() || c == '-') {
        if token.is_empty() {
            continue;
        }

        match lookup(&token.to_lowercase(), fuzzy) {
            Some(word) => {
                run.get_or_insert_with(Accumulator::default).push(word);
            }
            None => {
                if let Some(acc) = run.take() {
                    out.push(acc.value().to_string());
                }
                out.push(token.to_string());
            }
        }
    }

    if let Some(acc) = run.take() {
        out.push(acc.value().to_string());
    }

    out.join(" ")
}

#[derive(Default)]
struct Accumulator {
    total: u64,
    current: u64,
}

impl Accumulator {
    fn push(&mut self, word: NumberWord) {
        match word {
            NumberWord::Unit(v) => self.current += v,
            NumberWord::Scale(100) => {
                self.current = self.current.max(1) * 100;
            }
            NumberWord::Scale(s) => {
                self.total += self.current.max(1) * s;
                self.current = 0;
            }
        }
    }

    fn value(&self) -> u64 {
        self.total + self.current
    }
}

fn lookup(token: &str, fuzzy: bool) -> Option<NumberWord> {
    for (word, value) in UNITS {
        if token == *word {
            return Some(NumberWord::Unit(*value));
        }
    }
    for (word, value) in SCALES {
        if token == *word {
            return Some(NumberWord::Scale(*value));
        }
    }

    // Short tokens produce too many false positives under fuzzy matching
    if fuzzy && token.len() >= 4 {
        for (word, value) in UNITS {
            if within_one_edit(token, word) {
                return Some(NumberWord::Unit(*value));
            }
        }
        for (word, value) in SCALES {
            if within_one_edit(token, word) {
                return Some(NumberWord::Scale(*value));
            }
        }
    }

    None
}

/// Edit distance of at most one: a single insertion, deletion, substitution
/// or transposition of adjacent characters.
fn within_one_edit(a: &str, b: &str) -> bool {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let (short, long) = if a.len() <= b.len() { (&a, &b) } else { (&b, &a) };
    match long.len() - short.len() {
        0 => {
            let mismatches: Vec<usize> = (0..short.len()).filter(|&i| short[i] != long[i]).collect();
            match mismatches.as_slice() {
                [] | [_] => true,
                [i, j] => {
                    // Adjacent swap ("eigth" vs "eight")
                    j - i == 1 && short[*i] == long[*j] && short[*j] == long[*i]
                }
                _ => false,
            }
        }
        1 => {
            let mut i = 0;
            let mut j = 0;
            let mut edited = false;
            while i < short.len() && j < long.len() {
                if short[i] == long[j] {
                    i += 1;
                    j += 1;
                } else if edited {
                    return false;
                } else {
                    edited = true;
                    j += 1;
                }
            }
            true
        }
        _ => false,
    }
}
