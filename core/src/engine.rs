use alloc::string::String;
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl RoundStatus {
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// One play-through against a single secret word.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    secret_word: String,
    reveal_mask: Vec<Option<Letter>>,
    guessed: LetterSet,
    lives_remaining: u8,
    status: RoundStatus,
}

impl Round {
    /// Starts a round with every position hidden and full lives.
    pub fn new(secret_word: &str) -> Result<Self> {
        if secret_word.is_empty() || !secret_word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidWord);
        }

        let secret_word = secret_word.to_ascii_lowercase();
        let reveal_mask = alloc::vec![None; secret_word.len()];

        Ok(Self {
            secret_word,
            reveal_mask,
            guessed: LetterSet::new(),
            lives_remaining: MAX_LIVES,
            status: Default::default(),
        })
    }

    pub fn secret_word(&self) -> &str {
        &self.secret_word
    }

    pub fn reveal_mask(&self) -> &[Option<Letter>] {
        &self.reveal_mask
    }

    /// Reveal mask as displayed to the player, e.g. `"c _ t"`.
    pub fn masked_word(&self) -> String {
        let mut masked = String::with_capacity(self.reveal_mask.len() * 2);
        for (i, slot) in self.reveal_mask.iter().enumerate() {
            if i > 0 {
                masked.push(' ');
            }
            masked.push(slot.map_or(PLACEHOLDER, Letter::as_char));
        }
        masked
    }

    pub fn lives_remaining(&self) -> u8 {
        self.lives_remaining
    }

    pub fn lives_lost(&self) -> u8 {
        MAX_LIVES - self.lives_remaining
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_finished(&self) -> bool {
        self.status.is_finished()
    }

    pub fn guessed(&self) -> LetterSet {
        self.guessed
    }

    pub fn is_guessed(&self, letter: Letter) -> bool {
        self.guessed.contains(letter)
    }

    pub fn hidden_count(&self) -> usize {
        self.reveal_mask.iter().filter(|slot| slot.is_none()).count()
    }

    pub fn apply_guess(&mut self, letter: Letter) -> Result<GuessOutcome> {
        use GuessOutcome::*;

        self.check_not_finished()?;

        if !self.guessed.insert(letter) {
            log::trace!("letter {} already guessed, ignoring", letter);
            return Ok(NoChange);
        }

        let mut hit = false;
        for (slot, c) in self.reveal_mask.iter_mut().zip(self.secret_word.chars()) {
            if c == letter.as_char() {
                *slot = Some(letter);
                hit = true;
            }
        }

        if hit {
            if self.hidden_count() == 0 {
                self.status = RoundStatus::Won;
                Ok(Won)
            } else {
                Ok(Hit)
            }
        } else {
            self.lives_remaining = self.lives_remaining.saturating_sub(1);
            if self.lives_remaining == 0 {
                self.status = RoundStatus::Lost;
                Ok(Lost)
            } else {
                Ok(Miss)
            }
        }
    }

    fn check_not_finished(&self) -> Result<()> {
        if self.status.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
