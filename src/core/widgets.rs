//! Terminal widgets: spinner, progress bar and gauge.
//!
//! Spinners and progress bars are `indicatif` bars with the styles used across
//! the showcase. The gauge is a one-line string rendered with `colored`.

use crate::core::error::Result;
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use std::future::Future;
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(100);

/// Start a spinner showing `message`
pub fn spinner(message: &str) -> Result<ProgressBar> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.set_message(message.to_string());
    spinner.enable_steady_tick(SPINNER_TICK);
    Ok(spinner)
}

/// Await `task` while a spinner shows `message`; the spinner is cleared on
/// success and failure alike
pub async fn with_spinner<T, F>(message: &str, task: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    let spinner = spinner(message)?;
    let result = task.await;
    spinner.finish_and_clear();
    result
}

/// Percentage bar `width` cells wide counting from 0 to 100
pub fn progress_bar(width: usize) -> Result<ProgressBar> {
    let bar = ProgressBar::new(100);
    let template = format!("[{{bar:{width}.green}}] {{pos:>3}}%");
    bar.set_style(
        ProgressStyle::default_bar()
            .template(&template)?
            .progress_chars("|-"),
    );
    Ok(bar)
}

/// Render a gauge: `[` filled `|` cells, `-` cells, `] ` and the suffix.
///
/// The filled part is green up to `danger_zone` and red above it. A zero
/// `max` renders as `[]`.
pub fn gauge(value: f64, max: f64, width: usize, danger_zone: f64, suffix: &str) -> String {
    if max <= 0.0 {
        return "[]".to_string();
    }

    let filled = (value * width as f64 / max).ceil().clamp(0.0, width as f64) as usize;
    let bar = "|".repeat(filled);
    let bar = if value > danger_zone {
        bar.red()
    } else {
        bar.green()
    };

    format!(
        "[{}{}] {}",
        bar,
        "-".repeat(width - filled),
        suffix.bright_black()
    )
}
