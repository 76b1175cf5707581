use std::collections::BTreeSet;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info, warn};

use super::renderer::HANGMAN_PICS;
use super::words::{RandomWords, WordSource};
use crate::core::game::{ConsoleGame, Turn};

/// Misses allowed before the round is lost: one per stage after the empty gallows
pub const MAX_MISSES: usize = HANGMAN_PICS.len() - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Guessing,
    Won,
    Lost,
}

/// A validated guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guess {
    Letter(char),
    Word(String),
}

/// Reasons a line of input is not a usable guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("Please enter a letter or a word.")]
    Empty,
    #[error("Enter a letter (a-z).")]
    NotALetter,
    #[error("You already guessed that letter. Try again.")]
    AlreadyGuessed(char),
    #[error("Word must contain letters only.")]
    NotAWord,
}

/// Guesses the state itself refuses, whatever the input layer let through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("the round is already over")]
    RoundOver,
    #[error("letter '{0}' was already guessed")]
    Repeated(char),
}

/// What a guess did to the round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Feedback {
    Hit(char),
    Miss(char),
    WrongWord(String),
    Solved { by_word: bool },
    OutOfGuesses,
}

impl Guess {
    /// Validate one line of player input against the letters already tried
    pub fn parse(line: &str, state: &HangmanState) -> Result<Self, GuessError> {
        let guess = line.trim().to_lowercase();
        let mut chars = guess.chars();

        match (chars.next(), chars.next()) {
            (None, _) => Err(GuessError::Empty),
            (Some(letter), None) => {
                if !letter.is_ascii_alphabetic() {
                    Err(GuessError::NotALetter)
                } else if state.already_guessed(letter) {
                    Err(GuessError::AlreadyGuessed(letter))
                } else {
                    Ok(Guess::Letter(letter))
                }
            }
            _ => {
                if guess.chars().all(|c| c.is_ascii_alphabetic()) {
                    Ok(Guess::Word(guess))
                } else {
                    Err(GuessError::NotAWord)
                }
            }
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HangmanState {
    word: String,
    missed: BTreeSet<String>,
    correct: BTreeSet<char>,
    status: Status,
}

impl HangmanState {
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into().to_lowercase(),
            missed: BTreeSet::new(),
            correct: BTreeSet::new(),
            status: Status::Guessing,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Missed letters and words, sorted
    pub fn missed(&self) -> &BTreeSet<String> {
        &self.missed
    }

    pub fn correct(&self) -> &BTreeSet<char> {
        &self.correct
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn misses(&self) -> usize {
        self.missed.len()
    }

    pub fn already_guessed(&self, letter: char) -> bool {
        self.correct.contains(&letter) || self.missed.contains(&letter.to_string())
    }

    fn is_word_complete(&self) -> bool {
        self.word.chars().all(|c| self.correct.contains(&c))
    }

    /// Secret word with unrevealed letters as `_`; fully shown once won
    pub fn masked_word(&self) -> String {
        self.word
            .chars()
            .map(|c| {
                if self.status == Status::Won || self.correct.contains(&c) {
                    c
                } else {
                    '_'
                }
            })
            .collect()
    }

    pub fn guess(&mut self, guess: Guess) -> Result<Feedback, MoveError> {
        if self.status != Status::Guessing {
            return Err(MoveError::RoundOver);
        }

        let feedback = match guess {
            Guess::Letter(letter) => {
                if self.already_guessed(letter) {
                    return Err(MoveError::Repeated(letter));
                }

                if self.word.contains(letter) {
                    self.correct.insert(letter);
                    if self.is_word_complete() {
                        self.status = Status::Won;
                        Feedback::Solved { by_word: false }
                    } else {
                        Feedback::Hit(letter)
                    }
                } else {
                    self.missed.insert(letter.to_string());
                    self.check_misses(Feedback::Miss(letter))
                }
            }
            Guess::Word(word) => {
                if word == self.word {
                    self.status = Status::Won;
                    Feedback::Solved { by_word: true }
                } else {
                    self.missed.insert(word.clone());
                    self.check_misses(Feedback::WrongWord(word))
                }
            }
        };

        debug!(?feedback, misses = self.misses(), "guess applied");
        Ok(feedback)
    }

    fn check_misses(&mut self, feedback: Feedback) -> Feedback {
        if self.misses() >= MAX_MISSES {
            self.status = Status::Lost;
            Feedback::OutOfGuesses
        } else {
            feedback
        }
    }

    pub fn summary(&self) -> RoundSummary<'_> {
        RoundSummary {
            word: &self.word,
            status: self.status,
            misses: self.misses(),
            missed: self.missed.iter().map(String::as_str).collect(),
            correct: self.correct.iter().collect(),
        }
    }
}

/// End-of-round record written to the log
#[derive(Debug, Serialize)]
pub struct RoundSummary<'a> {
    pub word: &'a str,
    pub status: Status,
    pub misses: usize,
    pub missed: Vec<&'a str>,
    pub correct: String,
}

/// Pure game implementation - no UI or transport concerns
pub struct HangmanGame<S: WordSource = RandomWords> {
    words: S,
}

impl HangmanGame {
    pub fn new() -> Self {
        Self::with_words(RandomWords::new())
    }
}

impl Default for HangmanGame {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: WordSource> HangmanGame<S> {
    pub fn with_words(words: S) -> Self {
        Self { words }
    }
}

fn log_summary(state: &HangmanState) {
    match serde_json::to_string(&state.summary()) {
        Ok(summary) => info!(%summary, "round finished"),
        Err(e) => warn!(error = %e, "failed to serialize round summary"),
    }
}

impl<S: WordSource> ConsoleGame for HangmanGame<S> {
    type State = HangmanState;
    type Input = Guess;
    type Reject = GuessError;

    const NAME: &'static str = "Hangman";
    const PROMPT: &'static str = "Guess a letter (or full word): ";

    fn new_game(&mut self) -> Self::State {
        let word = self.words.select_word();
        info!(len = word.len(), "secret word selected");
        debug!(%word, "secret word");
        HangmanState::new(word)
    }

    fn parse_line(line: &str, state: &Self::State) -> Result<Self::Input, Self::Reject> {
        Guess::parse(line, state)
    }

    fn handle_input(state: &mut Self::State, input: Self::Input) -> Turn {
        let feedback = match state.guess(input) {
            Ok(feedback) => feedback,
            Err(e) => return Turn::Continue(Some(e.to_string())),
        };

        let turn = match feedback {
            Feedback::Hit(_) | Feedback::Miss(_) => Turn::Continue(None),
            Feedback::WrongWord(_) => Turn::Continue(Some("That's not the word.".to_string())),
            Feedback::Solved { by_word: true } => {
                Turn::Finished(format!("Amazing! You guessed the word: {}", state.word()))
            }
            Feedback::Solved { by_word: false } => {
                Turn::Finished(format!("Congratulations! You guessed the word: {}", state.word()))
            }
            Feedback::OutOfGuesses => {
                Turn::Finished(format!("You ran out of guesses! The word was: {}", state.word()))
            }
        };

        if let Turn::Finished(_) = turn {
            log_summary(state);
        }
        turn
    }

    fn render_on_finish(state: &Self::State) -> bool {
        state.status() == Status::Lost
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::hangman::words::WORD_LIST;

    fn play(state: &mut HangmanState, letters: &str) -> Vec<Feedback> {
        letters
            .chars()
            .map(|c| state.guess(Guess::Letter(c)).unwrap())
            .collect()
    }

    #[test]
    fn guessing_every_distinct_letter_wins_for_each_word() {
        for word in WORD_LIST {
            let mut state = HangmanState::new(word);
            let distinct: BTreeSet<char> = word.chars().collect();
            for letter in distinct {
                state.guess(Guess::Letter(letter)).unwrap();
            }
            assert_eq!(state.status(), Status::Won, "{word}");
            assert_eq!(state.misses(), 0);
        }
    }

    #[test]
    fn python_solved_in_any_order_has_no_misses() {
        let mut state = HangmanState::new("python");
        let feedback = play(&mut state, "nohtyp");
        assert_eq!(feedback.last(), Some(&Feedback::Solved { by_word: false }));
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.misses(), 0);
        assert_eq!(state.masked_word(), "python");
    }

    #[test]
    fn six_misses_lose() {
        let mut state = HangmanState::new("python");
        let feedback = play(&mut state, "zxqjvw");
        assert_eq!(MAX_MISSES, 6);
        assert_eq!(feedback[..5], [
            Feedback::Miss('z'),
            Feedback::Miss('x'),
            Feedback::Miss('q'),
            Feedback::Miss('j'),
            Feedback::Miss('v'),
        ]);
        assert_eq!(feedback[5], Feedback::OutOfGuesses);
        assert_eq!(state.status(), Status::Lost);
    }

    #[test]
    fn full_word_wins_regardless_of_misses() {
        let mut state = HangmanState::new("python");
        play(&mut state, "zxqjv");
        let feedback = state.guess(Guess::Word("python".into())).unwrap();
        assert_eq!(feedback, Feedback::Solved { by_word: true });
        assert_eq!(state.status(), Status::Won);
        assert_eq!(state.masked_word(), "python");
    }

    #[test]
    fn wrong_word_counts_as_a_miss() {
        let mut state = HangmanState::new("python");
        let feedback = state.guess(Guess::Word("rust".into())).unwrap();
        assert_eq!(feedback, Feedback::WrongWord("rust".into()));
        assert_eq!(state.misses(), 1);
        assert!(state.missed().contains("rust"));
        assert_eq!(state.status(), Status::Guessing);
    }

    #[test]
    fn repeated_wrong_word_is_not_counted_twice() {
        let mut state = HangmanState::new("python");
        state.guess(Guess::Word("rust".into())).unwrap();
        state.guess(Guess::Word("rust".into())).unwrap();
        assert_eq!(state.misses(), 1);
    }

    #[test]
    fn wrong_word_at_threshold_loses() {
        let mut state = HangmanState::new("python");
        play(&mut state, "zxqjv");
        let feedback = state.guess(Guess::Word("pythons".into())).unwrap();
        assert_eq!(feedback, Feedback::OutOfGuesses);
        assert_eq!(state.status(), Status::Lost);
    }

    #[test]
    fn missed_and_correct_stay_disjoint() {
        let mut state = HangmanState::new("hangman");
        play(&mut state, "hzaq");
        assert_eq!(state.guess(Guess::Letter('h')), Err(MoveError::Repeated('h')));
        assert_eq!(state.guess(Guess::Letter('z')), Err(MoveError::Repeated('z')));
        for letter in state.correct() {
            assert!(!state.missed().contains(&letter.to_string()));
        }
        assert_eq!(state.masked_word(), "ha___a_");
    }

    #[test]
    fn finished_round_rejects_guesses() {
        let mut state = HangmanState::new("github");
        state.guess(Guess::Word("github".into())).unwrap();
        assert_eq!(state.guess(Guess::Letter('a')), Err(MoveError::RoundOver));
    }

    #[test]
    fn parse_rejects_bad_input_in_order() {
        let mut state = HangmanState::new("python");
        state.guess(Guess::Letter('p')).unwrap();
        state.guess(Guess::Letter('z')).unwrap();

        assert_eq!(Guess::parse("   \n", &state), Err(GuessError::Empty));
        assert_eq!(Guess::parse("7", &state), Err(GuessError::NotALetter));
        assert_eq!(Guess::parse("P\n", &state), Err(GuessError::AlreadyGuessed('p')));
        assert_eq!(Guess::parse("z", &state), Err(GuessError::AlreadyGuessed('z')));
        assert_eq!(Guess::parse("py7hon", &state), Err(GuessError::NotAWord));
        assert_eq!(Guess::parse("two words", &state), Err(GuessError::NotAWord));
    }

    #[test]
    fn parse_normalizes_case_and_whitespace() {
        let state = HangmanState::new("python");
        assert_eq!(Guess::parse(" Y \n", &state), Ok(Guess::Letter('y')));
        assert_eq!(Guess::parse("PyThOn\r\n", &state), Ok(Guess::Word("python".into())));
    }

    #[test]
    fn handle_input_reports_round_end() {
        let mut state = HangmanState::new("python");
        let turn = HangmanGame::<RandomWords>::handle_input(&mut state, Guess::Word("java".into()));
        assert_eq!(turn, Turn::Continue(Some("That's not the word.".into())));

        let turn = HangmanGame::<RandomWords>::handle_input(&mut state, Guess::Word("python".into()));
        assert_eq!(turn, Turn::Finished("Amazing! You guessed the word: python".into()));
        assert!(!HangmanGame::<RandomWords>::render_on_finish(&state));
    }

    #[test]
    fn summary_serializes_to_json() {
        let mut state = HangmanState::new("python");
        play(&mut state, "pz");
        let json = serde_json::to_value(state.summary()).unwrap();
        assert_eq!(json["word"], "python");
        assert_eq!(json["status"], "guessing");
        assert_eq!(json["misses"], 1);
        assert_eq!(json["missed"][0], "z");
        assert_eq!(json["correct"], "p");
    }
}
