use anyhow::{Context, Result};
use hangterm::config::Settings;
use hangterm::core::engine::{Engine, SessionEnd};
use hangterm::core::terminal::TerminalContext;
use hangterm::games::hangman::{HangmanGame, HangmanRenderer};
use tracing::{info, warn};

const FAREWELL: &str = "\nGame interrupted. Bye!";

#[tokio::main]
async fn main() -> Result<()> {
    let settings = Settings::from_env();
    hangterm::logging::init_tracing(&settings.log_filter);
    info!(?settings, "starting");

    // Console input blocks, so the game loop gets its own thread
    let color = settings.color;
    let session = tokio::task::spawn_blocking(move || {
        let ctx = TerminalContext::stdout(color);
        let mut engine = Engine::new(HangmanGame::new(), HangmanRenderer, std::io::stdin().lock(), ctx);
        engine.run()
    });

    tokio::select! {
        joined = session => {
            match joined.context("game thread panicked")?? {
                SessionEnd::Quit => {}
                SessionEnd::InputClosed => println!("{FAREWELL}"),
            }
        }
        signal = tokio::signal::ctrl_c() => {
            signal.context("failed to listen for ctrl-c")?;
            warn!("interrupted");
            println!("{FAREWELL}");
            // The game thread is parked on stdin and can't be joined
            std::process::exit(0);
        }
    }

    Ok(())
}
