//! Prompt/collect workflow.
//!
//! Validated-input loops over a [`Terminal`] plus the two collection steps built
//! on them: [`prompt_category`] for a single category and [`collect_series`] for
//! the whole document. Every loop re-prompts until it gets an acceptable answer.

use std::io;

use log::debug;
use series_data::{Category, Series, default_slug, default_tab_id};
use thiserror::Error;

use crate::input::{InputEvent, MessageKind, Terminal};

/// The input stream ended before a prompt could be answered.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed while waiting for '{prompt}'")]
    Closed { prompt: String },
    #[error("input interrupted while waiting for '{prompt}'")]
    Interrupted { prompt: String },
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

/// Answers collected for one series: the document itself and the slug naming its file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesAnswers {
    pub slug: String,
    pub series: Series,
}

/// Ask once and return the answer with surrounding whitespace removed.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn answer(term: &mut dyn Terminal, prompt: &str) -> Result<String, PromptError> {
    match term.read_line(prompt)? {
        InputEvent::Line(line) => Ok(line.trim().to_string()),
        InputEvent::Eof => Err(PromptError::Closed {
            prompt: prompt.trim().to_string(),
        }),
        InputEvent::Interrupted => Err(PromptError::Interrupted {
            prompt: prompt.trim().to_string(),
        }),
    }
}

/// Ask with `prompt`, then keep asking with `retry` until the answer is non-empty.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn required(term: &mut dyn Terminal, prompt: &str, retry: &str) -> Result<String, PromptError> {
    let mut value = answer(term, prompt)?;
    while value.is_empty() {
        value = answer(term, retry)?;
    }
    Ok(value)
}

/// Ask `"<label> [<default>]: "`; a blank answer takes the default.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn with_default(term: &mut dyn Terminal, label: &str, default: &str) -> Result<String, PromptError> {
    let value = answer(term, &format!("{label} [{default}]: "))?;
    if value.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(value)
    }
}

/// Ask a yes/no question.
///
/// With `default_yes` only an explicit `n` answers no; otherwise only an explicit
/// `y` answers yes. Case is ignored.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn yes_no(term: &mut dyn Terminal, prompt: &str, default_yes: bool) -> Result<bool, PromptError> {
    let value = answer(term, prompt)?.to_lowercase();
    Ok(if default_yes { value != "n" } else { value == "y" })
}

/// Ask for a whole number of at least one.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn positive_count(term: &mut dyn Terminal, prompt: &str) -> Result<usize, PromptError> {
    loop {
        let value = answer(term, prompt)?;
        match value.parse::<i64>() {
            Ok(n) if n < 1 => term.say(MessageKind::Retry, "Must be at least 1."),
            Ok(n) => match usize::try_from(n) {
                Ok(count) => return Ok(count),
                Err(_) => term.say(MessageKind::Retry, "Please enter a number."),
            },
            Err(_) => term.say(MessageKind::Retry, "Please enter a number."),
        }
    }
}

/// Prompt for the category at 1-based `index`.
///
/// Returns the category and whether it is the base category. The base question is
/// only asked while `base_used` is false.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn prompt_category(
    term: &mut dyn Terminal,
    index: usize,
    base_used: bool,
) -> Result<(Category, bool), PromptError> {
    term.say(MessageKind::Heading, &format!("\n--- Category {index} ---"));

    if !base_used && yes_no(term, "Is this the base category? [y/N]: ", false)? {
        debug!("category {index} is the base category");
        return Ok((Category::base(), true));
    }

    let name = required(term, "Category name: ", "Category name (required): ")?;
    let tab_id = with_default(term, "Tab ID", &default_tab_id(&name))?;
    let prefix = required(term, "Prefix (e.g. NS): ", "Prefix (required): ")?;
    let show_prefix = yes_no(term, "Show prefix? [Y/n]: ", true)?;
    let odds = answer(term, "Odds (e.g. 1:10, blank for null): ")?;
    let odds = if odds.is_empty() { None } else { Some(odds) };

    debug!("category {index}: name='{name}' tab_id='{tab_id}' prefix='{prefix}' show_prefix={show_prefix} odds={odds:?}");
    Ok((Category::new(name, tab_id, prefix, show_prefix, odds), false))
}

/// Prompt for every category in order, accepting at most one base category.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn collect_categories(term: &mut dyn Terminal, count: usize) -> Result<Vec<Category>, PromptError> {
    let mut categories = Vec::new();
    let mut base_used = false;
    for index in 1..=count {
        let (category, is_base) = prompt_category(term, index, base_used)?;
        base_used = base_used || is_base;
        categories.push(category);
    }
    Ok(categories)
}

/// Collect the title, slug, category count and categories for a new series.
///
/// # Errors
/// Returns [`PromptError`] if the input ends or fails.
pub fn collect_series(term: &mut dyn Terminal) -> Result<SeriesAnswers, PromptError> {
    let title = required(term, "Series name: ", "Series name (required): ")?;
    let slug = with_default(term, "Slug name", &default_slug(&title))?;
    let count = positive_count(term, "How many categories? ")?;
    let categories = collect_categories(term, count)?;

    Ok(SeriesAnswers {
        slug,
        series: Series { title, categories },
    })
}
