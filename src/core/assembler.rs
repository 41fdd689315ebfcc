//! `.gitignore` assembly from selected templates.
//!
//! Every selected template is downloaded concurrently, prefixed with a
//! `### name ###` marker and placed, in selection order, between a generated
//! header and footer banner.
//!
//! # Public API
//! - [`assemble`]: fetch and concatenate selected templates
//! - [`BANNERS`]: header and footer templates
//! - [`render_banner`]: fill a banner template with template names

use crate::core::catalog::TemplateEntry;
use crate::core::error::Result;
use crate::core::http::HttpClient;
use futures::future::try_join_all;

/// Banner templates wrapped around the generated content
pub struct Banners {
    pub header: &'static str,
    pub footer: &'static str,
}

/// Global banner instance
pub static BANNERS: Banners = Banners {
    header: "# =======================================\n\
             #   Automatic generated.\n\
             #   Templates: {templates}\n\
             # =======================================\n\n",
    footer: "\n# =======================================\n\
             #   END of automatic generated content.\n\
             #   Templates: {templates}\n\
             # =======================================",
};

/// Render a banner, replacing `{templates}` with the names joined by ", "
pub fn render_banner(template: &str, entries: &[TemplateEntry]) -> String {
    let names = entries
        .iter()
        .map(|entry| entry.name.as_str())
        .collect::<Vec<_>>()
        .join(", ");

    let mut output = String::with_capacity(template.len() + names.len());
    let mut chars = template.chars();

    while let Some(ch) = chars.next() {
        if ch != '{' {
            output.push(ch);
            continue;
        }

        let mut placeholder = String::new();
        let mut found_closing = false;
        for next_ch in chars.by_ref() {
            if next_ch == '}' {
                found_closing = true;
                break;
            }
            placeholder.push(next_ch);
        }

        match (found_closing, placeholder.as_str()) {
            (true, "templates") => output.push_str(&names),
            (true, _) => {
                // Unknown placeholder, keep as-is
                output.push('{');
                output.push_str(&placeholder);
                output.push('}');
            }
            (false, _) => {
                output.push('{');
                output.push_str(&placeholder);
            }
        }
    }

    output
}

/// Marker line introducing one template's content
pub fn section_marker(name: &str) -> String {
    format!("### {name} ###\n")
}

async fn fetch_section<C: HttpClient>(client: &C, entry: &TemplateEntry) -> Result<String> {
    log::debug!("Downloading template {} from {}", entry.name, entry.url);
    let body = client.get_text(&entry.url).await?;
    Ok(section_marker(&entry.name) + &body)
}

/// Download every selected template and build the final file content.
///
/// Downloads run concurrently. The first failure aborts the assembly, so a
/// partial file is never produced.
pub async fn assemble<C: HttpClient>(client: &C, selected: &[TemplateEntry]) -> Result<String> {
    let sections = try_join_all(selected.iter().map(|entry| fetch_section(client, entry))).await?;

    let mut content = render_banner(BANNERS.header, selected);
    for section in &sections {
        content.push_str(section);
        content.push('\n');
    }
    content.push_str(&render_banner(BANNERS.footer, selected));

    log::debug!(
        "Assembled {} templates into {} bytes",
        selected.len(),
        content.len()
    );
    Ok(content)
}
