//! Interactive prompt demos: text, password, single select, checkbox and a
//! searchable checkbox.

use crate::core::{
    error::Result,
    print_section_header, print_separator,
    selection::{search_checkbox, CheckboxState},
};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Password, Select};

/// Username and password answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

pub const VISIBILITY_CHOICES: [&str; 2] = ["public", "private"];
pub const IGNORE_CHOICES: [&str; 5] = ["a.txt", "b.txt", "c.txt", "d.txt", "e.txt"];
pub const IGNORE_DEFAULTS: [&str; 2] = ["b.txt", "d.txt"];

pub fn execute_prompts() -> Result<()> {
    print_section_header("Prompts");
    let theme = ColorfulTheme::default();

    let credentials = ask_credentials(&theme)?;
    let visibility = ask_visibility(&theme)?;
    let ignored = ask_ignored_files(&theme)?;
    let items = search_checkbox(
        "Select items",
        CheckboxState::new(generate_search_items()),
        "You must choose at least one item.",
    )?;

    print_separator();
    println!(
        "username: {}, password: {}",
        credentials.username,
        "*".repeat(credentials.password.chars().count())
    );
    println!("visibility: {visibility}");
    println!("ignore: [{}]", ignored.join(", "));
    println!("items: [{}]", items.join(", "));
    Ok(())
}

/// Non-empty text validation shared by the text prompts
pub fn require_text(value: &str, message: &'static str) -> std::result::Result<(), &'static str> {
    if value.is_empty() {
        Err(message)
    } else {
        Ok(())
    }
}

fn ask_credentials(theme: &ColorfulTheme) -> Result<Credentials> {
    let username: String = Input::with_theme(theme)
        .with_prompt("Enter your username:")
        .validate_with(|input: &String| require_text(input, "Please enter your username."))
        .interact_text()?;

    let password = Password::with_theme(theme)
        .with_prompt("Enter your password:")
        .validate_with(|input: &String| require_text(input, "Please enter your password."))
        .interact()?;

    Ok(Credentials { username, password })
}

fn ask_visibility(theme: &ColorfulTheme) -> Result<String> {
    let index = Select::with_theme(theme)
        .with_prompt("Public or private:")
        .items(&VISIBILITY_CHOICES)
        .default(0)
        .interact()?;
    Ok(VISIBILITY_CHOICES[index].to_string())
}

fn ask_ignored_files(theme: &ColorfulTheme) -> Result<Vec<String>> {
    let defaults: Vec<bool> = IGNORE_CHOICES
        .iter()
        .map(|choice| IGNORE_DEFAULTS.contains(choice))
        .collect();

    let indices = MultiSelect::with_theme(theme)
        .with_prompt("Select the files and/or folders you wish to ignore:")
        .items(&IGNORE_CHOICES)
        .defaults(&defaults)
        .interact()?;

    Ok(indices
        .into_iter()
        .map(|index| IGNORE_CHOICES[index].to_string())
        .collect())
}

/// `a, aa, aaa, b, bb, bbb, ... z, zz, zzz`
pub fn generate_search_items() -> Vec<String> {
    ('a'..='z')
        .flat_map(|ch| (1..=3).map(move |count| ch.to_string().repeat(count)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_search_items() {
        let items = generate_search_items();
        assert_eq!(items.len(), 78);
        assert_eq!(&items[..4], &["a", "aa", "aaa", "b"]);
        assert_eq!(items.last().map(String::as_str), Some("zzz"));
    }

    #[test]
    fn test_require_text() {
        assert_eq!(require_text("", "missing"), Err("missing"));
        assert_eq!(require_text("octocat", "missing"), Ok(()));
    }

    #[test]
    fn test_ignore_defaults_are_choices() {
        for default in IGNORE_DEFAULTS {
            assert!(IGNORE_CHOICES.contains(&default));
        }
    }
}
