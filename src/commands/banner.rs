use crate::core::{
    error::{Result, ShowcaseError},
    print_section_header,
};
use colored::*;
use dialoguer::{theme::ColorfulTheme, Input};
use figlet_rs::FIGfont;

/// Print `title` as ASCII art, plain and in yellow. Prompts for the title
/// when none is given.
pub fn execute_banner(title: Option<String>) -> Result<()> {
    let title = match title {
        Some(title) if !title.is_empty() => title,
        _ => ask_title()?,
    };

    let art = render_ascii_art(&title)?;
    print_section_header("Banner");
    println!("{art}");
    println!("{}", art.yellow());
    Ok(())
}

fn ask_title() -> Result<String> {
    let title = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("Enter title to display fancy:")
        .validate_with(|input: &String| {
            if input.is_empty() {
                Err("Please enter a title.")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(title)
}

/// Render `text` with the standard FIGlet font
pub fn render_ascii_art(text: &str) -> Result<String> {
    if text.is_empty() {
        return Err(ShowcaseError::banner("title is empty"));
    }
    let font = FIGfont::standard().map_err(ShowcaseError::banner)?;
    let figure = font
        .convert(text)
        .ok_or_else(|| ShowcaseError::banner(format!("cannot render '{text}'")))?;
    Ok(figure.to_string())
}
