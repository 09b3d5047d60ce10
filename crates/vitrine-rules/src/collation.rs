//! Alphabetic ordering for product titles.
//!
//! Titles compare on three levels, like a conventional dictionary: base
//! letters first (so `Água` files under A), then accents, then case with
//! lowercase ahead of uppercase. Input is decomposed to NFD, so precomposed
//! and decomposed spellings of the same title get the same key.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Stroke overlays for letters NFD leaves whole (`ø`, `ł`, `đ`).
const LONG_STROKE: char = '\u{338}';
const SHORT_STROKE: char = '\u{335}';

/// Sort key for a string; compare keys instead of the raw strings.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct CollationKey {
    primary: Vec<char>,
    /// Combining marks attached to each primary letter, in NFD order.
    secondary: Vec<Vec<char>>,
    tertiary: Vec<u8>,
}

impl CollationKey {
    fn with_capacity(n: usize) -> Self {
        Self {
            primary: Vec::with_capacity(n),
            secondary: Vec::with_capacity(n),
            tertiary: Vec::with_capacity(n),
        }
    }

    fn push_letter(&mut self, base: char, mark: Option<char>, upper: bool) {
        self.primary.push(base);
        self.secondary.push(mark.into_iter().collect());
        self.tertiary.push(u8::from(upper));
    }

    /// Attaches a mark to the preceding letter. A leading mark has nothing to
    /// attach to and is ignored.
    fn push_mark(&mut self, mark: char) {
        if let Some(marks) = self.secondary.last_mut() {
            marks.push(mark);
        }
    }

    fn push_lowercase(&mut self, c: char, upper: bool) {
        match c {
            'ø' => self.push_letter('o', Some(LONG_STROKE), upper),
            'ł' => self.push_letter('l', Some(SHORT_STROKE), upper),
            'đ' => self.push_letter('d', Some(SHORT_STROKE), upper),
            'ß' => {
                self.push_letter('s', None, upper);
                self.push_letter('s', None, upper);
            }
            'æ' => {
                self.push_letter('a', None, upper);
                self.push_letter('e', None, upper);
            }
            'œ' => {
                self.push_letter('o', None, upper);
                self.push_letter('e', None, upper);
            }
            'þ' => {
                self.push_letter('t', None, upper);
                self.push_letter('h', None, upper);
            }
            other => self.push_letter(other, None, upper),
        }
    }
}

#[must_use]
pub fn collation_key(s: &str) -> CollationKey {
    let mut key = CollationKey::with_capacity(s.len());

    for c in s.nfd() {
        if is_combining_mark(c) {
            key.push_mark(c);
            continue;
        }

        let upper = c.is_uppercase();
        // Lowercasing can itself produce a combining mark (`İ` -> `i̇`).
        for lower in c.to_lowercase() {
            if is_combining_mark(lower) {
                key.push_mark(lower);
            } else {
                key.push_lowercase(lower, upper);
            }
        }
    }

    key
}
