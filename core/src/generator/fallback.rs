use super::*;

/// Words used when the remote word source cannot be reached.
pub const FALLBACK_WORDS: &[&str] = &[
    "anchor", "biscuit", "canyon", "dolphin", "eclipse", "falcon", "glacier", "harbor", "igloo",
    "jigsaw", "kettle", "lantern", "meadow", "nectar", "orchard", "pepper", "quartz", "riddle",
    "saddle", "thunder", "umbrella", "velvet", "walnut", "yonder", "zephyr",
];

/// Offline picker, deterministic for a given seed.
#[derive(Clone, Debug, PartialEq)]
pub struct FallbackWordPicker {
    seed: u64,
    words: &'static [&'static str],
}

impl FallbackWordPicker {
    pub fn new(seed: u64) -> Self {
        Self::with_words(seed, FALLBACK_WORDS)
    }

    pub fn with_words(seed: u64, words: &'static [&'static str]) -> Self {
        Self { seed, words }
    }
}

impl WordPicker for FallbackWordPicker {
    fn pick(self) -> String {
        use rand::prelude::*;

        if self.words.is_empty() {
            log::warn!("Fallback word list is empty, using the first default word");
            return String::from(FALLBACK_WORDS[0]);
        }

        let mut rng = SmallRng::seed_from_u64(self.seed);
        let word = self.words.choose(&mut rng).copied().unwrap_or(FALLBACK_WORDS[0]);
        String::from(word)
    }
}
