/// Hangman game module - clean and simple!
pub mod game;
pub mod renderer;
pub mod words;

pub use game::{Guess, GuessError, HangmanGame, HangmanState, Status, MAX_MISSES};
pub use renderer::HangmanRenderer;
pub use words::{RandomWords, WordSource, WORD_LIST};
