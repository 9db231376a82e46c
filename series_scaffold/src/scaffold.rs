//! Top-level scaffolding run: collect, confirm, persist.

use std::path::PathBuf;

use anyhow::{Context, Result};
use log::{info, warn};
use series_data::validate_series;

use crate::data_paths::detect_data_root;
use crate::input::{MessageKind, Terminal};
use crate::prompt::{SeriesAnswers, collect_series};
use crate::writer::{confirm_overwrite, output_path, print_next_steps, write_series};

/// Where series documents are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    pub data_dir: PathBuf,
}

impl ScaffoldConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Configuration for the data directory found on disk.
    pub fn discover() -> Self {
        Self::new(detect_data_root())
    }
}

/// How a scaffolding run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Written(PathBuf),
    Aborted,
}

/// Prompt for a new series and write it under the configured data directory.
///
/// Declining to overwrite an existing document is a normal outcome, not an error.
///
/// # Errors
/// - Input that ends before every prompt is answered.
/// - Failure to create the data directory or write the document.
pub fn run_scaffold(term: &mut dyn Terminal, config: &ScaffoldConfig) -> Result<Outcome> {
    info!("scaffolding a new series into '{}'", config.data_dir.display());

    let SeriesAnswers { slug, series } = collect_series(term).context("while collecting series details")?;
    info!(
        "collected series '{}' (slug '{slug}') with {} categories",
        series.title,
        series.categories.len()
    );
    for problem in validate_series(&series) {
        warn!("series '{}': {problem}", series.title);
    }

    let path = output_path(&config.data_dir, &slug);
    if !confirm_overwrite(term, &path).context("while confirming overwrite")? {
        term.say(MessageKind::Plain, "Aborted.");
        info!("left existing '{}' untouched", path.display());
        return Ok(Outcome::Aborted);
    }

    write_series(&path, &series)?;
    print_next_steps(term, &path);
    Ok(Outcome::Written(path))
}
