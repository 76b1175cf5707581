use crate::core::game::{ConsoleGame, Turn};
use crate::core::renderer::GameRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::{debug, info};

const REPLAY_PROMPT: &str = "Play again? (y/n): ";

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// Player declined a replay
    Quit,
    /// Input stream closed while waiting for the player
    InputClosed,
}

enum RoundEnd {
    Over,
    InputClosed,
}

/// Drives rounds of a console game: render, prompt, validate, apply, replay.
pub struct Engine<G, R, I, W: Write> {
    game: G,
    renderer: R,
    input: I,
    ctx: TerminalContext<W>,
}

impl<G, R, I, W> Engine<G, R, I, W>
where
    G: ConsoleGame,
    R: GameRenderer<G::State>,
    I: BufRead,
    W: Write,
{
    pub fn new(game: G, renderer: R, input: I, ctx: TerminalContext<W>) -> Self {
        Self {
            game,
            renderer,
            input,
            ctx,
        }
    }

    /// Play rounds until the player declines a replay or input runs out
    pub fn run(&mut self) -> Result<SessionEnd> {
        self.ctx
            .print_line(&format!("Welcome to {}!", G::NAME))
            .context("failed to write to the terminal")?;

        loop {
            let mut state = self.game.new_game();
            info!(game = G::NAME, "round started");

            if let RoundEnd::InputClosed = self.play_round(&mut state)? {
                return Ok(SessionEnd::InputClosed);
            }

            let Some(answer) = self.read_line(REPLAY_PROMPT)? else {
                return Ok(SessionEnd::InputClosed);
            };

            if answer.trim().to_lowercase().starts_with('y') {
                self.ctx
                    .print_line("\nStarting a new game...\n")
                    .context("failed to write to the terminal")?;
            } else {
                self.ctx
                    .print_line("Thanks for playing. Goodbye!")
                    .context("failed to write to the terminal")?;
                self.ctx.flush()?;
                return Ok(SessionEnd::Quit);
            }
        }
    }

    fn play_round(&mut self, state: &mut G::State) -> Result<RoundEnd> {
        loop {
            self.renderer
                .render(state, &mut self.ctx)
                .context("failed to render the game")?;

            let Some(input) = self.read_input(state)? else {
                return Ok(RoundEnd::InputClosed);
            };

            match G::handle_input(state, input) {
                Turn::Continue(None) => {}
                Turn::Continue(Some(message)) => {
                    self.ctx.empty_line()?;
                    self.ctx.print_colored_line(&message, TerminalColor::Yellow)?;
                }
                Turn::Finished(message) => {
                    if G::render_on_finish(state) {
                        self.renderer.render(state, &mut self.ctx)?;
                    } else {
                        self.ctx.empty_line()?;
                    }
                    self.ctx.print_colored_line(&message, TerminalColor::Cyan)?;
                    return Ok(RoundEnd::Over);
                }
            }
        }
    }

    /// Reprompt until the game accepts a line
    fn read_input(&mut self, state: &G::State) -> Result<Option<G::Input>> {
        loop {
            let Some(line) = self.read_line(G::PROMPT)? else {
                return Ok(None);
            };

            match G::parse_line(&line, state) {
                Ok(input) => return Ok(Some(input)),
                Err(reject) => {
                    debug!(%reject, "input rejected");
                    self.ctx
                        .print_colored_line(&reject.to_string(), TerminalColor::Yellow)?;
                }
            }
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        self.ctx.print(prompt)?;
        self.ctx.flush().context("failed to flush the terminal")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("failed to read from stdin")?;

        if read == 0 {
            debug!("input closed");
            return Ok(None);
        }
        Ok(Some(line))
    }

    pub fn into_output(self) -> W {
        self.ctx.into_inner()
    }
}
