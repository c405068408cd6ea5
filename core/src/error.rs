use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Not a letter between a and z")]
    InvalidLetter,
    #[error("Secret word must be a non-empty run of ASCII letters")]
    InvalidWord,
    #[error("Round already ended, no new guesses are accepted")]
    AlreadyEnded,
    #[error("No round is in progress")]
    NoRound,
}

pub type Result<T> = core::result::Result<T, GameError>;
