#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
//! ** new_series **
//! Interactive scaffolder for card-set series documents

use series_scaffold::{InputManager, Outcome, SCAFFOLD_VERSION, ScaffoldConfig, run_scaffold};

use anyhow::{Context, Result};
use log::info;

fn main() -> Result<()> {
    env_logger::init();
    info!("Start: new_series v{SCAFFOLD_VERSION}");

    let config = ScaffoldConfig::discover();
    let mut terminal = InputManager::new();
    match run_scaffold(&mut terminal, &config).context("while scaffolding a new series")? {
        Outcome::Written(path) => info!("finished: wrote '{}'", path.display()),
        Outcome::Aborted => info!("finished: aborted at overwrite prompt"),
    }
    Ok(())
}
