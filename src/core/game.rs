/// Core game interface for the hangterm console framework
use std::fmt::Display;

/// Outcome of applying one input to a round
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Turn {
    /// Round keeps going, optionally with a line of feedback for the player
    Continue(Option<String>),
    /// Round is over; the message announces the result
    Finished(String),
}

/// Main game trait that all console games implement
/// The engine owns the terminal and the replay loop; games stay pure.
pub trait ConsoleGame {
    /// Per-round state, rebuilt wholesale by `new_game`
    type State;

    /// A validated move
    type Input;

    /// Why a line of input was refused; `Display` is shown to the player
    type Reject: Display;

    const NAME: &'static str;

    /// Prompt printed before each line is read
    const PROMPT: &'static str;

    /// Initialize the state for a fresh round
    fn new_game(&mut self) -> Self::State;

    /// Game controls its own input parsing
    fn parse_line(line: &str, state: &Self::State) -> Result<Self::Input, Self::Reject>;

    /// Update state based on a validated input
    fn handle_input(state: &mut Self::State, input: Self::Input) -> Turn;

    /// Whether the last screen should be drawn again once the round is over
    fn render_on_finish(_state: &Self::State) -> bool {
        true
    }
}
