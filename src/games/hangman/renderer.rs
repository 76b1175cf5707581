/// Hangman-specific renderer - injected dependency
use std::io::{self, Write};

use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::games::hangman::HangmanState;

/// Gallows stages, indexed by miss count
pub const HANGMAN_PICS: [&str; 7] = [
    r"
     +---+
         |
         |
         |
        ===",
    r"
     +---+
     O   |
         |
         |
        ===",
    r"
     +---+
     O   |
     |   |
         |
        ===",
    r"
     +---+
     O   |
    /|   |
         |
        ===",
    r"
     +---+
     O   |
    /|\  |
         |
        ===",
    r"
     +---+
     O   |
    /|\  |
    /    |
        ===",
    r"
     +---+
     O   |
    /|\  |
    / \  |
        ===",
];

#[derive(Debug, Default, Clone, Copy)]
pub struct HangmanRenderer;

impl HangmanRenderer {
    pub fn stage(misses: usize) -> &'static str {
        HANGMAN_PICS[misses.min(HANGMAN_PICS.len() - 1)]
    }
}

impl GameRenderer<HangmanState> for HangmanRenderer {
    /// Pure rendering function - no game logic
    fn render<W: Write>(&self, state: &HangmanState, ctx: &mut TerminalContext<W>) -> io::Result<()> {
        ctx.print_line(Self::stage(state.misses()))?;
        ctx.empty_line()?;

        ctx.print("Missed: ")?;
        if state.missed().is_empty() {
            ctx.print_line("None")?;
        } else {
            let missed: Vec<&str> = state.missed().iter().map(String::as_str).collect();
            ctx.print_colored_line(&missed.join(" "), TerminalColor::Red)?;
        }

        let revealed: Vec<String> = state.masked_word().chars().map(String::from).collect();
        ctx.print("Word: ")?;
        ctx.print_colored_line(&revealed.join(" "), TerminalColor::Green)?;
        ctx.empty_line()
    }
}
