use core::fmt;
use serde::{Deserialize, Serialize};

use crate::{GameError, Result};

/// Number of letters in the guessing alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// A single guessable letter, always stored lowercase.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "char", into = "char")]
pub struct Letter(u8);

impl Letter {
    /// Builds a letter from its position in the alphabet, `0` being `a`.
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < ALPHABET_LEN {
            Some(Self(b'a' + index))
        } else {
            None
        }
    }

    pub const fn index(self) -> u8 {
        self.0 - b'a'
    }

    pub const fn as_char(self) -> char {
        self.0 as char
    }

    /// All 26 letters in alphabetical order.
    pub fn all() -> impl Iterator<Item = Letter> {
        (0..ALPHABET_LEN).filter_map(Letter::from_index)
    }
}

impl TryFrom<char> for Letter {
    type Error = GameError;

    fn try_from(value: char) -> Result<Self> {
        if value.is_ascii_alphabetic() {
            Ok(Self(value.to_ascii_lowercase() as u8))
        } else {
            Err(GameError::InvalidLetter)
        }
    }
}

impl From<Letter> for char {
    fn from(letter: Letter) -> Self {
        letter.as_char()
    }
}

impl fmt::Display for Letter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Set of letters packed into one bit per letter.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LetterSet(u32);

impl LetterSet {
    pub const fn new() -> Self {
        Self(0)
    }

    pub const fn contains(self, letter: Letter) -> bool {
        self.0 & (1 << letter.index()) != 0
    }

    /// Adds `letter`, returning `false` if it was already present.
    pub fn insert(&mut self, letter: Letter) -> bool {
        let was_present = self.contains(letter);
        self.0 |= 1 << letter.index();
        !was_present
    }

    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn iter(self) -> impl Iterator<Item = Letter> {
        Letter::all().filter(move |&letter| self.contains(letter))
    }
}

impl FromIterator<Letter> for LetterSet {
    fn from_iter<I: IntoIterator<Item = Letter>>(iter: I) -> Self {
        let mut set = Self::new();
        for letter in iter {
            set.insert(letter);
        }
        set
    }
}
