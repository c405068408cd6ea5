#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use figure::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod engine;
mod error;
mod figure;
mod generator;
mod session;
mod types;

/// Lives granted at the start of every round.
pub const MAX_LIVES: u8 = 10;

/// Character shown in the reveal mask for letters not yet guessed.
pub const PLACEHOLDER: char = '_';

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuessOutcome {
    NoChange,
    Hit,
    Miss,
    Won,
    Lost,
}

impl GuessOutcome {
    pub const fn has_update(self) -> bool {
        use GuessOutcome::*;
        match self {
            NoChange => false,
            Hit => true,
            Miss => true,
            Won => true,
            Lost => true,
        }
    }

    pub const fn cost_life(self) -> bool {
        matches!(self, Self::Miss | Self::Lost)
    }

    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}
