//! Unified output formatting utilities for consistent CLI presentation.
//!
//! This module provides standardized formatting functions for all cli-showcase output,
//! ensuring consistent colors, spacing, and message structure across commands.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, bright_black for details
//! - **Standardized spacing**: Newline before and after all command outputs
//! - **Plain variants**: [`strip_ansi_codes`] lets tests compare rendered text

use crate::core::catalog::Catalog;
use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// Prints a horizontal separator line
pub fn print_separator() {
    println!("{}", "-".repeat(27).bright_black());
}

/// Prints every catalog entry as `[n] name  path`
pub fn print_catalog(catalog: &Catalog) {
    print_section_header(&format!("Available templates ({})", catalog.len()));
    for line in catalog_lines(catalog) {
        println!("{line}");
    }
    println!();
}

fn catalog_lines(catalog: &Catalog) -> Vec<String> {
    let width = catalog.len().to_string().len();
    catalog
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "   {}{}{} {} {}",
                "[".bright_black(),
                format!("{:>width$}", i + 1).white(),
                "]".bright_black(),
                entry.name.blue(),
                entry.path.bright_black(),
            )
        })
        .collect()
}

/// Strip ANSI color codes for testing
pub fn strip_ansi_codes(text: &str) -> String {
    // Simple state machine to remove ANSI escape sequences
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next(); // consume '['
            for ch in chars.by_ref() {
                if ch.is_ascii_alphabetic() {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog::TemplateEntry;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Test error message");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Operation completed");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Information message");
    }

    #[test]
    fn test_print_section_header_does_not_panic() {
        print_section_header("Templates");
    }

    #[test]
    fn test_strip_ansi_codes() {
        let colored = format!("{} {}", "red".red(), "plain");
        assert_eq!(strip_ansi_codes(&colored), "red plain");
        assert_eq!(strip_ansi_codes("\x1b[1;31mbold\x1b[0m"), "bold");
    }

    #[test]
    fn test_catalog_lines_are_numbered() {
        let catalog = Catalog::from_entries(vec![
            TemplateEntry::new("Node.gitignore", "https://example.com/Node.gitignore"),
            TemplateEntry::new("Go.gitignore", "https://example.com/Go.gitignore"),
        ]);
        let lines: Vec<String> = catalog_lines(&catalog)
            .iter()
            .map(|l| strip_ansi_codes(l))
            .collect();
        assert_eq!(lines[0], "   [1] Node Node.gitignore");
        assert_eq!(lines[1], "   [2] Go Go.gitignore");
    }
}
