//! Choosing templates from the catalog.
//!
//! The pipeline only asks a [`Selector`] for a subset of names; whether the
//! names come from a terminal prompt or from the command line is up to the
//! implementation.
//!
//! # Public API
//! - [`Selector`]: async selection seam
//! - [`InteractiveSelector`]: searchable checkbox prompt built on dialoguer
//! - [`PresetSelector`]: names given up front, validated against the choices
//! - [`CheckboxState`] / [`search_checkbox`]: the searchable checkbox itself

use crate::core::error::{Result, ShowcaseError};
use crate::core::output::print_error;
use dialoguer::{theme::ColorfulTheme, FuzzySelect};
use std::future::Future;

/// Present named choices and return the chosen subset
pub trait Selector {
    fn select(&self, choices: Vec<String>) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Label of the entry that confirms a searchable checkbox
pub const DONE_LABEL: &str = "✔ Done";

/// Toggle state behind [`search_checkbox`].
///
/// Selected items are reported in choice order, whatever order they were
/// ticked in.
#[derive(Debug, Clone)]
pub struct CheckboxState {
    items: Vec<String>,
    checked: Vec<bool>,
}

impl CheckboxState {
    pub fn new(items: Vec<String>) -> Self {
        let checked = vec![false; items.len()];
        Self { items, checked }
    }

    /// Pre-check items by name; unknown names are ignored
    pub fn with_checked(mut self, names: &[&str]) -> Self {
        for (item, checked) in self.items.iter().zip(self.checked.iter_mut()) {
            if names.contains(&item.as_str()) {
                *checked = true;
            }
        }
        self
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(checked) = self.checked.get_mut(index) {
            *checked = !*checked;
        }
    }

    /// Prompt rows: [`DONE_LABEL`] followed by one `[x]`/`[ ]` row per item
    pub fn labels(&self) -> Vec<String> {
        std::iter::once(DONE_LABEL.to_string())
            .chain(self.items.iter().zip(&self.checked).map(|(item, checked)| {
                let mark = if *checked { "x" } else { " " };
                format!("[{mark}] {item}")
            }))
            .collect()
    }

    pub fn selected(&self) -> Vec<String> {
        self.items
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(item, _)| item.clone())
            .collect()
    }

    pub fn selected_count(&self) -> usize {
        self.checked.iter().filter(|checked| **checked).count()
    }
}

/// Searchable multi-select.
///
/// Each round shows a fuzzy-searchable list; picking an item toggles it and
/// picking [`DONE_LABEL`] confirms. Confirming with nothing checked prints
/// `empty_message` and keeps the prompt open.
pub fn search_checkbox(
    prompt: &str,
    mut state: CheckboxState,
    empty_message: &str,
) -> Result<Vec<String>> {
    let theme = ColorfulTheme::default();
    let mut cursor = 0;

    loop {
        let labels = state.labels();
        let title = format!("{prompt} ({} selected)", state.selected_count());
        let pick = FuzzySelect::with_theme(&theme)
            .with_prompt(title)
            .items(&labels)
            .default(cursor)
            .interact()?;

        if pick == 0 {
            if state.selected_count() == 0 {
                print_error(empty_message);
                continue;
            }
            return Ok(state.selected());
        }

        state.toggle(pick - 1);
        cursor = pick;
    }
}

/// Terminal prompt over all catalog names
#[derive(Debug, Clone)]
pub struct InteractiveSelector {
    prompt: String,
}

impl InteractiveSelector {
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
        }
    }
}

impl Default for InteractiveSelector {
    fn default() -> Self {
        Self::new("Enter .gitignore items")
    }
}

impl Selector for InteractiveSelector {
    async fn select(&self, choices: Vec<String>) -> Result<Vec<String>> {
        let prompt = self.prompt.clone();
        // dialoguer blocks on terminal input
        tokio::task::spawn_blocking(move || {
            search_checkbox(
                &prompt,
                CheckboxState::new(choices),
                &ShowcaseError::EmptySelection.to_string(),
            )
        })
        .await?
    }
}

/// Selection fixed in advance, e.g. from `--template` flags
#[derive(Debug, Clone, Default)]
pub struct PresetSelector {
    names: Vec<String>,
}

impl PresetSelector {
    pub fn new(names: Vec<String>) -> Self {
        Self { names }
    }
}

impl Selector for PresetSelector {
    async fn select(&self, choices: Vec<String>) -> Result<Vec<String>> {
        if self.names.is_empty() {
            return Err(ShowcaseError::EmptySelection);
        }
        if let Some(unknown) = self.names.iter().find(|name| !choices.contains(name)) {
            return Err(ShowcaseError::unknown_template(unknown.as_str()));
        }
        Ok(self.names.clone())
    }
}
