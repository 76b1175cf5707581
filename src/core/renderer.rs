/// Generic game renderer trait for dependency injection
use std::io::{self, Write};

use crate::core::terminal::TerminalContext;

/// Injected renderer - the engine calls it once per turn
pub trait GameRenderer<State> {
    /// Render game state using terminal context
    fn render<W: Write>(&self, state: &State, ctx: &mut TerminalContext<W>) -> io::Result<()>;
}
