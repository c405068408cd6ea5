use alloc::format;
use alloc::string::String;
use serde::{Deserialize, Serialize};

use crate::*;

/// Word fetches tried for a single round before the offline list is used.
pub const MAX_WORD_ATTEMPTS: u8 = 3;

pub const HINT_PREFIX: &str = "Hint: ";
pub const HINT_UNAVAILABLE: &str = "Not available";
pub const HINT_LOADING: &str = "Loading...";

pub const WON_MESSAGE: &str = "You Won!";
pub const LOST_MESSAGE: &str = "GAME OVER! You Lost! The word was: ";

/// Tag carried by every request so late responses from an older round can be told apart.
pub type RoundId = u32;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    Idle,
    Loading,
    InProgress,
    Ended(RoundStatus),
}

impl SessionPhase {
    pub const fn is_ended(self) -> bool {
        matches!(self, Self::Ended(_))
    }
}

/// Asynchronous work the host must carry out and report back.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    FetchWord { round: RoundId, attempt: u8 },
    FetchHint { round: RoundId, word: String },
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Hint {
    Pending,
    Ready(String),
    Unavailable,
}

impl Hint {
    pub fn display_text(&self) -> String {
        match self {
            Hint::Pending => format!("{HINT_PREFIX}{HINT_LOADING}"),
            Hint::Ready(definition) => format!("{HINT_PREFIX}{definition}"),
            Hint::Unavailable => format!("{HINT_PREFIX}{HINT_UNAVAILABLE}"),
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tone {
    Success,
    Failure,
}

impl Tone {
    pub const fn color(self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Failure => "red",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndMessage {
    pub text: String,
    pub tone: Tone,
}

/// Drives rounds from word selection to the end-of-round popup.
///
/// The session never performs I/O itself: starting a round or receiving a word yields a [`Command`] for the host to
/// execute, and the host feeds the result back through the `on_*` methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    round_id: RoundId,
    phase: SessionPhase,
    round: Option<Round>,
    hint: Hint,
    word_attempts: u8,
    popup_open: bool,
    fallback_seed: u64,
}

impl Session {
    pub fn new(fallback_seed: u64) -> Self {
        Self {
            round_id: 0,
            phase: SessionPhase::Idle,
            round: None,
            hint: Hint::Pending,
            word_attempts: 0,
            popup_open: false,
            fallback_seed,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn round_id(&self) -> RoundId {
        self.round_id
    }

    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    pub fn hint(&self) -> &Hint {
        &self.hint
    }

    pub fn hint_text(&self) -> String {
        self.hint.display_text()
    }

    pub fn lives_remaining(&self) -> u8 {
        self.round.as_ref().map_or(MAX_LIVES, Round::lives_remaining)
    }

    pub fn lives_lost(&self) -> u8 {
        MAX_LIVES - self.lives_remaining()
    }

    pub fn masked_word(&self) -> String {
        self.round.as_ref().map(Round::masked_word).unwrap_or_default()
    }

    pub fn is_letter_enabled(&self, letter: Letter) -> bool {
        match (&self.phase, &self.round) {
            (SessionPhase::Ended(_), _) => false,
            (_, Some(round)) => !round.is_guessed(letter),
            (_, None) => true,
        }
    }

    pub fn restart_visible(&self) -> bool {
        self.phase.is_ended()
    }

    pub fn popup_visible(&self) -> bool {
        self.popup_open
    }

    pub fn end_message(&self) -> Option<EndMessage> {
        let SessionPhase::Ended(status) = self.phase else {
            return None;
        };
        let round = self.round.as_ref()?;

        match status {
            RoundStatus::Won => Some(EndMessage {
                text: String::from(WON_MESSAGE),
                tone: Tone::Success,
            }),
            RoundStatus::Lost => Some(EndMessage {
                text: format!("{LOST_MESSAGE}{}", round.secret_word()),
                tone: Tone::Failure,
            }),
            RoundStatus::InProgress => None,
        }
    }

    /// Begins a new round, discarding the previous one.
    pub fn start_round(&mut self) -> Command {
        self.round_id = self.round_id.wrapping_add(1);
        self.phase = SessionPhase::Loading;
        self.round = None;
        self.hint = Hint::Pending;
        self.word_attempts = 1;
        self.popup_open = false;
        self.fallback_seed = self.fallback_seed.wrapping_add(1);

        log::debug!("round {} loading", self.round_id);
        Command::FetchWord {
            round: self.round_id,
            attempt: self.word_attempts,
        }
    }

    pub fn on_restart_activated(&mut self) -> Option<Command> {
        if self.phase.is_ended() {
            Some(self.start_round())
        } else {
            log::debug!("restart ignored while {:?}", self.phase);
            None
        }
    }

    pub fn on_word_fetched(&mut self, round: RoundId, word: &str) -> Option<Command> {
        if !self.accepts_word_for(round) {
            return None;
        }

        match Round::new(word) {
            Ok(new_round) => Some(self.begin(new_round)),
            Err(err) => {
                log::warn!("round {}: unusable word {:?}: {}", round, word, err);
                self.retry_or_fallback()
            }
        }
    }

    pub fn on_word_failed(&mut self, round: RoundId) -> Option<Command> {
        if !self.accepts_word_for(round) {
            return None;
        }
        self.retry_or_fallback()
    }

    /// Returns whether the hint changed.
    pub fn on_hint_fetched(&mut self, round: RoundId, definition: Option<String>) -> bool {
        if round != self.round_id {
            log::debug!("discarding hint for stale round {} (current {})", round, self.round_id);
            return false;
        }

        self.hint = match definition {
            Some(definition) => Hint::Ready(definition),
            None => Hint::Unavailable,
        };
        true
    }

    pub fn on_letter_activated(&mut self, letter: Letter) -> Result<GuessOutcome> {
        if self.phase != SessionPhase::InProgress {
            return Err(match self.phase {
                SessionPhase::Ended(_) => GameError::AlreadyEnded,
                _ => GameError::NoRound,
            });
        }

        let round = self.round.as_mut().ok_or(GameError::NoRound)?;
        let outcome = round.apply_guess(letter)?;
        log::debug!(
            "guess {}: {:?}, {} lives left",
            letter,
            outcome,
            round.lives_remaining()
        );

        if outcome.is_final() {
            self.phase = SessionPhase::Ended(round.status());
            self.popup_open = true;
        }

        Ok(outcome)
    }

    /// Returns whether the popup was open.
    pub fn dismiss_popup(&mut self) -> bool {
        core::mem::replace(&mut self.popup_open, false)
    }

    fn accepts_word_for(&self, round: RoundId) -> bool {
        if round != self.round_id {
            log::debug!("discarding word for stale round {} (current {})", round, self.round_id);
            false
        } else if self.phase != SessionPhase::Loading {
            log::debug!("round {} already has a word", round);
            false
        } else {
            true
        }
    }

    fn begin(&mut self, round: Round) -> Command {
        let word = String::from(round.secret_word());
        self.round = Some(round);
        self.phase = SessionPhase::InProgress;

        log::debug!("round {} in progress, {} letters", self.round_id, word.len());
        Command::FetchHint {
            round: self.round_id,
            word,
        }
    }

    fn retry_or_fallback(&mut self) -> Option<Command> {
        if self.word_attempts < MAX_WORD_ATTEMPTS {
            self.word_attempts += 1;
            log::warn!(
                "round {}: retrying word fetch ({}/{})",
                self.round_id,
                self.word_attempts,
                MAX_WORD_ATTEMPTS
            );
            return Some(Command::FetchWord {
                round: self.round_id,
                attempt: self.word_attempts,
            });
        }

        let word = FallbackWordPicker::new(self.fallback_seed).pick();
        log::error!(
            "round {}: word source failed {} times, using an offline word",
            self.round_id,
            MAX_WORD_ATTEMPTS
        );
        match Round::new(&word) {
            Ok(round) => Some(self.begin(round)),
            Err(err) => {
                log::error!("offline word {:?} rejected: {}", word, err);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(c: char) -> Letter {
        Letter::try_from(c).unwrap()
    }

    fn session_with_word(word: &str) -> Session {
        let mut session = Session::new(0);
        let Command::FetchWord { round, .. } = session.start_round() else {
            panic!("expected a word fetch");
        };
        let command = session.on_word_fetched(round, word);
        assert!(matches!(command, Some(Command::FetchHint { .. })));
        session
    }

    #[test]
    fn start_round_requests_a_word_and_resets_display() {
        let mut session = Session::new(0);
        assert_eq!(session.phase(), SessionPhase::Idle);

        let command = session.start_round();

        assert_eq!(command, Command::FetchWord { round: 1, attempt: 1 });
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert_eq!(session.lives_remaining(), MAX_LIVES);
        assert!(!session.restart_visible());
        assert!(!session.popup_visible());
        assert!(Letter::all().all(|l| session.is_letter_enabled(l)));
    }

    #[test]
    fn fetched_word_starts_round_and_requests_hint() {
        let mut session = Session::new(0);
        session.start_round();

        let command = session.on_word_fetched(1, "Cat");

        assert_eq!(
            command,
            Some(Command::FetchHint {
                round: 1,
                word: String::from("cat")
            })
        );
        assert_eq!(session.phase(), SessionPhase::InProgress);
        assert_eq!(session.masked_word(), "_ _ _");
        assert_eq!(session.hint_text(), "Hint: Loading...");
    }

    #[test]
    fn cat_end_to_end_is_won() {
        let mut session = session_with_word("cat");

        assert_eq!(session.on_letter_activated(letter('c')), Ok(GuessOutcome::Hit));
        assert_eq!(session.masked_word(), "c _ _");
        assert_eq!(session.on_letter_activated(letter('a')), Ok(GuessOutcome::Hit));
        assert_eq!(session.masked_word(), "c a _");
        assert_eq!(session.on_letter_activated(letter('t')), Ok(GuessOutcome::Won));
        assert_eq!(session.masked_word(), "c a t");

        assert_eq!(session.phase(), SessionPhase::Ended(RoundStatus::Won));
        assert_eq!(session.lives_remaining(), MAX_LIVES);
        assert!(session.popup_visible());
        assert!(session.restart_visible());
        assert_eq!(
            session.end_message(),
            Some(EndMessage {
                text: String::from("You Won!"),
                tone: Tone::Success
            })
        );
    }

    #[test]
    fn dog_end_to_end_is_lost() {
        let mut session = session_with_word("dog");

        for c in "qwxyzvbnmp".chars() {
            session.on_letter_activated(letter(c)).unwrap();
        }

        assert_eq!(session.lives_remaining(), 0);
        assert_eq!(session.phase(), SessionPhase::Ended(RoundStatus::Lost));
        let message = session.end_message().unwrap();
        assert_eq!(message.tone, Tone::Failure);
        assert_eq!(message.text, "GAME OVER! You Lost! The word was: dog");
        assert!(message.text.contains("dog"));
    }

    #[test]
    fn no_mutation_after_round_ends() {
        let mut session = session_with_word("a");
        session.on_letter_activated(letter('a')).unwrap();
        let before = session.clone();

        assert_eq!(
            session.on_letter_activated(letter('b')),
            Err(GameError::AlreadyEnded)
        );
        assert_eq!(session, before);
        assert!(Letter::all().all(|l| !session.is_letter_enabled(l)));
    }

    #[test]
    fn used_letters_are_disabled() {
        let mut session = session_with_word("dog");
        session.on_letter_activated(letter('d')).unwrap();
        session.on_letter_activated(letter('x')).unwrap();

        assert!(!session.is_letter_enabled(letter('d')));
        assert!(!session.is_letter_enabled(letter('x')));
        assert!(session.is_letter_enabled(letter('o')));
    }

    #[test]
    fn guesses_before_word_arrives_are_rejected() {
        let mut session = Session::new(0);
        session.start_round();

        assert_eq!(
            session.on_letter_activated(letter('e')),
            Err(GameError::NoRound)
        );
    }

    #[test]
    fn hint_failure_shows_fallback_and_keeps_round() {
        let mut session = session_with_word("cat");
        session.on_letter_activated(letter('c')).unwrap();
        let round_before = session.round().cloned();

        assert!(session.on_hint_fetched(1, None));

        assert_eq!(session.hint_text(), "Hint: Not available");
        assert_eq!(session.round().cloned(), round_before);
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn hint_success_is_prefixed() {
        let mut session = session_with_word("cat");
        session.on_hint_fetched(1, Some(String::from("a small domesticated carnivorous mammal")));

        assert_eq!(
            session.hint_text(),
            "Hint: a small domesticated carnivorous mammal"
        );
    }

    #[test]
    fn restart_only_after_round_ends() {
        let mut session = session_with_word("a");
        assert_eq!(session.on_restart_activated(), None);

        session.on_letter_activated(letter('a')).unwrap();
        let command = session.on_restart_activated();

        assert_eq!(command, Some(Command::FetchWord { round: 2, attempt: 1 }));
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert!(session.round().is_none());
        assert!(!session.popup_visible());
        assert!(!session.restart_visible());
        assert_eq!(session.hint(), &Hint::Pending);
    }

    #[test]
    fn stale_responses_are_discarded() {
        let mut session = session_with_word("a");
        session.on_letter_activated(letter('a')).unwrap();
        session.on_restart_activated();

        assert_eq!(session.on_word_fetched(1, "stale"), None);
        assert!(!session.on_hint_fetched(1, Some(String::from("old"))));
        assert_eq!(session.phase(), SessionPhase::Loading);
        assert_eq!(session.hint(), &Hint::Pending);

        assert!(session.on_word_fetched(2, "fresh").is_some());
        assert_eq!(session.round().map(Round::secret_word), Some("fresh"));
    }

    #[test]
    fn duplicate_word_response_is_ignored() {
        let mut session = session_with_word("cat");
        assert_eq!(session.on_word_fetched(1, "dog"), None);
        assert_eq!(session.round().map(Round::secret_word), Some("cat"));
    }

    #[test]
    fn word_failures_retry_then_fall_back() {
        let mut session = Session::new(9);
        session.start_round();

        assert_eq!(
            session.on_word_failed(1),
            Some(Command::FetchWord { round: 1, attempt: 2 })
        );
        assert_eq!(
            session.on_word_fetched(1, "not-a-word"),
            Some(Command::FetchWord { round: 1, attempt: 3 })
        );

        let word = match session.on_word_failed(1) {
            Some(Command::FetchHint { round: 1, word }) => word,
            other => panic!("expected fallback round, got {other:?}"),
        };
        assert!(FALLBACK_WORDS.contains(&word.as_str()));
        assert_eq!(session.phase(), SessionPhase::InProgress);
    }

    #[test]
    fn dismissing_popup_keeps_restart_visible() {
        let mut session = session_with_word("a");
        session.on_letter_activated(letter('a')).unwrap();

        assert!(session.dismiss_popup());
        assert!(!session.dismiss_popup());
        assert!(!session.popup_visible());
        assert!(session.restart_visible());
    }

    #[test]
    fn figure_progress_matches_lives_lost_regardless_of_order() {
        let orders = ["qwxyz", "zyxwq", "xqzwy"];
        let mut drawings = orders.iter().map(|order| {
            let mut session = session_with_word("dog");
            let mut progress = FigureProgress::new();
            let mut drawn = alloc::vec::Vec::new();
            for c in order.chars() {
                let outcome = session.on_letter_activated(letter(c)).unwrap();
                assert!(outcome.cost_life());
                drawn.extend(progress.advance(session.lives_lost()).map(|s| s.part));
            }
            drawn
        });

        let first = drawings.next().unwrap();
        assert_eq!(first.len(), 5);
        for other in drawings {
            assert_eq!(other, first);
        }
    }
}
