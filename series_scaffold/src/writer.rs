//! Output path, overwrite confirmation, and JSON persistence for series documents.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use log::{info, warn};
use serde::Serialize;
use series_data::Series;

use crate::input::{MessageKind, Terminal};
use crate::prompt::{PromptError, yes_no};

/// Path of the document for `slug` inside `data_dir`.
pub fn output_path(data_dir: &Path, slug: &str) -> PathBuf {
    data_dir.join(format!("{slug}.json"))
}

/// Decide whether writing to `path` may proceed.
///
/// A missing file needs no confirmation. An existing one is only replaced after an
/// explicit `y`.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails while confirming.
pub fn confirm_overwrite(term: &mut dyn Terminal, path: &Path) -> Result<bool, PromptError> {
    if !path.exists() {
        return Ok(true);
    }
    term.say(MessageKind::Plain, "");
    yes_no(term, &format!("{} already exists. Overwrite? [y/N]: ", path.display()), false)
}

/// Render a value as 2-space indented JSON with a trailing newline.
///
/// # Errors
/// Returns an error if the value cannot be serialized.
pub fn render_json<T: Serialize>(value: &T) -> Result<String> {
    let mut text = serde_json::to_string_pretty(value).context("serializing document to JSON")?;
    text.push('\n');
    Ok(text)
}

/// Write `value` as JSON to `path`, creating the parent directory if needed.
///
/// The document is written to a sibling temporary file first and renamed into place,
/// so `path` never holds a partial document.
///
/// # Errors
/// Returns an error if the directory cannot be created or the file cannot be written.
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let text = render_json(value)?;

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir).with_context(|| format!("creating data directory '{}'", dir.display()))?;
    }

    let tmp_path = temp_path_for(path);
    if let Err(err) = fs::write(&tmp_path, text.as_bytes()) {
        discard_temp(&tmp_path);
        return Err(err).with_context(|| format!("writing '{}'", tmp_path.display()));
    }
    if let Err(err) = fs::rename(&tmp_path, path) {
        discard_temp(&tmp_path);
        return Err(err).with_context(|| format!("moving '{}' into place", path.display()));
    }

    info!("wrote {} bytes to '{}'", text.len(), path.display());
    Ok(())
}

/// Write a series document to `path`.
///
/// # Errors
/// Returns an error if the document cannot be written.
pub fn write_series(path: &Path, series: &Series) -> Result<()> {
    write_json(path, series).with_context(|| format!("saving series '{}'", series.title))
}

/// Print where the document went and what to do with it next.
pub fn print_next_steps(term: &mut dyn Terminal, path: &Path) {
    term.say(MessageKind::Success, &format!("\nWrote {}", path.display()));
    term.say(MessageKind::Plain, "Next steps:");
    term.say(
        MessageKind::Hint,
        &format!("  1. Edit {} and add cards to each category", path.display()),
    );
    term.say(MessageKind::Hint, "  2. Run ./generate.sh to create the HTML page");
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard_temp(tmp_path: &Path) {
    if tmp_path.exists()
        && let Err(err) = fs::remove_file(tmp_path)
    {
        warn!("failed to remove temporary file '{}': {err}", tmp_path.display());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::ScriptedTerminal;
    use series_data::Category;
    use tempfile::tempdir;

    fn sample() -> Series {
        Series {
            title: "Holiday 2024".into(),
            categories: vec![
                Category::base(),
                Category::new("Insert", "tab-insert", "IN", true, Some("1:10".into())),
            ],
        }
    }

    #[test]
    fn output_path_appends_json_extension() {
        let path = output_path(Path::new("docs/data"), "holiday_2024");
        assert_eq!(path, PathBuf::from("docs/data/holiday_2024.json"));
    }

    #[test]
    fn render_json_uses_two_space_indent_and_trailing_newline() -> Result<()> {
        let series = Series {
            title: "Mini".into(),
            categories: vec![Category::base()],
        };
        let expected = r#"{
  "title": "Mini",
  "categories": [
    {
      "name": "Base",
      "tabId": "tab-base",
      "prefix": "base",
      "showPrefix": false,
      "odds": null,
      "cards": []
    }
  ]
}
"#;
        assert_eq!(render_json(&series)?, expected);
        Ok(())
    }

    #[test]
    fn write_json_creates_missing_directory_and_leaves_no_temp_file() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("docs").join("data").join("holiday_2024.json");
        write_series(&path, &sample())?;

        let raw = fs::read_to_string(&path)?;
        let parsed: Series = serde_json::from_str(&raw)?;
        assert_eq!(parsed, sample());
        assert!(!temp_path_for(&path).exists());
        Ok(())
    }

    #[test]
    fn write_json_replaces_existing_document() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("holiday_2024.json");
        fs::write(&path, "{\"title\": \"old\"}\n")?;
        write_series(&path, &sample())?;
        assert!(fs::read_to_string(&path)?.contains("\"title\": \"Holiday 2024\""));
        Ok(())
    }

    #[test]
    fn missing_file_needs_no_confirmation() -> Result<()> {
        let dir = tempdir()?;
        let mut term = ScriptedTerminal::new(Vec::<String>::new());
        assert!(confirm_overwrite(&mut term, &dir.path().join("new.json"))?);
        assert!(term.transcript().is_empty());
        Ok(())
    }

    #[test]
    fn existing_file_requires_explicit_yes() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("taken.json");
        fs::write(&path, "{}")?;

        let mut declined = ScriptedTerminal::new(["yes"]);
        assert!(!confirm_overwrite(&mut declined, &path)?);
        let mut accepted = ScriptedTerminal::new(["Y"]);
        assert!(confirm_overwrite(&mut accepted, &path)?);
        assert!(accepted.showed(&format!("{} already exists. Overwrite? [y/N]: ", path.display())));
        Ok(())
    }

    #[test]
    fn temp_path_is_a_sibling() {
        let tmp = temp_path_for(Path::new("docs/data/x.json"));
        assert_eq!(tmp, PathBuf::from("docs/data/x.json.tmp"));
    }
}
