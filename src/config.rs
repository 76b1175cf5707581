//! Runtime settings. There are no flags; everything comes from the environment.
use std::env;
use std::io::IsTerminal;

pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directives
    pub log_filter: String,
    /// Whether game output uses colour escape codes
    pub color: bool,
}

impl Settings {
    pub fn from_env() -> Self {
        Self::resolve(
            env::var("RUST_LOG").ok(),
            env::var("NO_COLOR").ok(),
            std::io::stdout().is_terminal(),
        )
    }

    fn resolve(rust_log: Option<String>, no_color: Option<String>, is_terminal: bool) -> Self {
        let log_filter = rust_log
            .filter(|filter| !filter.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());
        let no_color = no_color.is_some_and(|value| !value.is_empty());

        Self {
            log_filter,
            color: is_terminal && !no_color,
        }
    }
}
