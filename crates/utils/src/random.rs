//! Random strings drawn from the operating system RNG

use rand::distributions::Uniform;
use rand::rngs::OsRng;
use rand::Rng;
use std::ops::BitOr;

/// Set of character classes a random string may draw from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CharSet(u8);

impl CharSet {
    pub const EMPTY: CharSet = CharSet(0);
    /// `a-z`
    pub const LOWER: CharSet = CharSet(1);
    /// `A-Z`
    pub const UPPER: CharSet = CharSet(2);
    /// `0-9`
    pub const DIGITS: CharSet = CharSet(4);
    /// ASCII punctuation
    pub const PUNCTUATION: CharSet = CharSet(8);

    /// Build from raw flag bits; unknown bits are ignored
    pub const fn from_bits(bits: u8) -> Self {
        CharSet(bits & 0b1111)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: CharSet) -> bool {
        self.0 & other.0 == other.0
    }

    /// The characters in this set, classes in flag order
    pub fn alphabet(self) -> Vec<char> {
        let classes: [(CharSet, fn(&u8) -> bool); 4] = [
            (CharSet::LOWER, u8::is_ascii_lowercase),
            (CharSet::UPPER, u8::is_ascii_uppercase),
            (CharSet::DIGITS, u8::is_ascii_digit),
            (CharSet::PUNCTUATION, u8::is_ascii_punctuation),
        ];

        classes
            .iter()
            .filter(|(class, _)| self.contains(*class))
            .flat_map(|(_, member)| (b'!'..=b'~').filter(member).map(char::from))
            .collect()
    }
}

impl BitOr for CharSet {
    type Output = CharSet;

    fn bitor(self, rhs: CharSet) -> CharSet {
        CharSet(self.0 | rhs.0)
    }
}

/// A string of `len` characters picked uniformly from `set`.
///
/// An empty set yields an empty string whatever `len` is.
pub fn random_string(set: CharSet, len: usize) -> String {
    let alphabet = set.alphabet();
    if alphabet.is_empty() {
        return String::new();
    }

    let pick = Uniform::from(0..alphabet.len());
    OsRng
        .sample_iter(pick)
        .take(len)
        .map(|i| alphabet[i])
        .collect()
}

pub fn letters_lower(len: usize) -> String {
    random_string(CharSet::LOWER, len)
}

pub fn letters_upper(len: usize) -> String {
    random_string(CharSet::UPPER, len)
}

pub fn letters(len: usize) -> String {
    random_string(CharSet::LOWER | CharSet::UPPER, len)
}

pub fn digits(len: usize) -> String {
    random_string(CharSet::DIGITS, len)
}

pub fn digits_and_letters(len: usize) -> String {
    random_string(CharSet::LOWER | CharSet::UPPER | CharSet::DIGITS, len)
}

/// Letters, digits and punctuation
pub fn printable(len: usize) -> String {
    random_string(CharSet::from_bits(15), len)
}
