pub mod engine;
pub mod game;
pub mod renderer;  // Injected renderer trait
pub mod terminal;  // Terminal context wrapper
