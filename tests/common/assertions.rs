//! Common assertion helpers for generated `.gitignore` content

#![allow(dead_code)]

/// Counts `### name ###` marker lines in generated content
pub fn section_count(content: &str, name: &str) -> usize {
    content.matches(&format!("### {name} ###\n")).count()
}

/// Returns the section names of generated content in file order
pub fn section_order(content: &str) -> Vec<String> {
    content
        .lines()
        .filter_map(|line| {
            line.strip_prefix("### ")
                .and_then(|rest| rest.strip_suffix(" ###"))
        })
        .map(str::to_string)
        .collect()
}
