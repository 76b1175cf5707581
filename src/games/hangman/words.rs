use rand::{rngs::ThreadRng, Rng};

pub const WORD_LIST: [&str; 12] = [
    "python",
    "hangman",
    "computer",
    "program",
    "network",
    "developer",
    "function",
    "variable",
    "algorithm",
    "database",
    "internet",
    "github",
];

/// Supplies the secret word for each round
pub trait WordSource {
    fn select_word(&mut self) -> String;
}

/// Uniform pick from [`WORD_LIST`]
pub struct RandomWords<R: Rng = ThreadRng> {
    rng: R,
}

impl RandomWords {
    pub fn new() -> Self {
        Self::with_rng(rand::rng())
    }
}

impl Default for RandomWords {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> RandomWords<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> WordSource for RandomWords<R> {
    fn select_word(&mut self) -> String {
        let index = self.rng.random_range(0..WORD_LIST.len());
        WORD_LIST[index].to_lowercase()
    }
}

/// Hands out the given words in order, wrapping around
#[cfg(test)]
#[derive(Debug, Clone)]
pub(crate) struct FixedWords {
    words: Vec<String>,
    next: usize,
}

#[cfg(test)]
impl FixedWords {
    pub(crate) fn new<S: Into<String>>(words: impl IntoIterator<Item = S>) -> Self {
        let words: Vec<String> = words.into_iter().map(Into::into).collect();
        assert!(!words.is_empty(), "FixedWords needs at least one word");
        Self { words, next: 0 }
    }
}

#[cfg(test)]
impl WordSource for FixedWords {
    fn select_word(&mut self) -> String {
        let word = self.words[self.next % self.words.len()].to_lowercase();
        self.next += 1;
        word
    }
}
