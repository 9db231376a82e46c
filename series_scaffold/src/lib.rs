#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]

pub const SCAFFOLD_VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod data_paths;
pub mod input;
pub mod prompt;
pub mod scaffold;
pub mod style;
pub mod writer;

// Re-exports for convenience
pub use input::{InputManager, ScriptedTerminal, Terminal};
pub use scaffold::{Outcome, ScaffoldConfig, run_scaffold};
