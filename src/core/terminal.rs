/// Terminal output context that handles colour and buffering
use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use std::io::{self, Stdout, Write};

pub struct TerminalContext<W: Write = Stdout> {
    out: W,
    colored: bool,
}

impl TerminalContext<Stdout> {
    pub fn stdout(colored: bool) -> Self {
        Self::new(io::stdout(), colored)
    }
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, colored: bool) -> Self {
        Self { out, colored }
    }

    /// Print a full line
    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print text without newline, e.g. a prompt
    pub fn print(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{}", text)
    }

    /// Print colored text with automatic reset
    pub fn print_colored(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if !self.colored {
            return self.print(text);
        }
        self.out.queue(SetForegroundColor(color.into()))?;
        write!(self.out, "{}", text)?;
        self.out.queue(ResetColor)?;
        Ok(())
    }

    /// Print a colored line
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        self.print_colored(text, color)?;
        writeln!(self.out)
    }

    pub fn empty_line(&mut self) -> io::Result<()> {
        writeln!(self.out)
    }

    /// Flush all output at once - call before blocking on input
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}
