//! Template catalog construction.
//!
//! The catalog is built by listing every [`SourceSpec`] tree concurrently,
//! filtering each listing down to template files and merging the per-source
//! lists into one catalog in which every display name appears once.
//!
//! # Public API
//! - [`TemplateEntry`]: one selectable template
//! - [`Catalog`]: ordered, name-unique list of entries
//! - [`build_catalog`]: fetch, filter and merge all sources
//! - [`derive_name`]: display name of a template path

use crate::core::error::{Result, ShowcaseError};
use crate::core::http::HttpClient;
use crate::core::source::SourceSpec;
use futures::future::try_join_all;
use serde::Deserialize;
use std::collections::HashSet;

/// Characters removed from the end of a file name to form its display name.
/// Matches the length of `.gitignore`.
pub const NAME_SUFFIX_LEN: usize = 10;

/// One selectable template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateEntry {
    /// Path inside the source repository
    pub path: String,
    /// Raw content URL
    pub url: String,
    /// Display name and catalog key
    pub name: String,
}

impl TemplateEntry {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        let path = path.into();
        let name = derive_name(&path);
        Self {
            path,
            url: url.into(),
            name,
        }
    }
}

/// Display name of a template path: the base name without its last
/// [`NAME_SUFFIX_LEN`] characters.
///
/// The cut is positional, not extension aware: `a/b/Node.gitignore` gives
/// `Node`, while a base name shorter than the suffix gives an empty name.
pub fn derive_name(path: &str) -> String {
    let base = path.rsplit('/').next().unwrap_or(path);
    let keep = base.chars().count().saturating_sub(NAME_SUFFIX_LEN);
    base.chars().take(keep).collect()
}

/// Ordered list of templates, unique by name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<TemplateEntry>,
}

impl Catalog {
    /// Build a catalog from a single list, dropping repeated names
    pub fn from_entries(entries: Vec<TemplateEntry>) -> Self {
        Self::merge(vec![entries])
    }

    /// Merge per-source lists in priority order.
    ///
    /// The first list seeds the catalog; later lists only contribute entries
    /// whose name has not been seen yet.
    pub fn merge(lists: Vec<Vec<TemplateEntry>>) -> Self {
        let mut seen = HashSet::new();
        let mut entries = Vec::new();

        for list in lists {
            for entry in list {
                if seen.insert(entry.name.clone()) {
                    entries.push(entry);
                } else {
                    log::debug!("Skipping duplicate template {} ({})", entry.name, entry.path);
                }
            }
        }

        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TemplateEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[TemplateEntry] {
        &self.entries
    }

    /// Display names in catalog order
    pub fn names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn get(&self, name: &str) -> Option<&TemplateEntry> {
        self.entries.iter().find(|entry| entry.name == name)
    }

    /// Resolve selected names to entries, in selection order.
    ///
    /// Repeated names are taken once. Fails on an empty selection or a name
    /// missing from the catalog.
    pub fn resolve(&self, names: &[String]) -> Result<Vec<TemplateEntry>> {
        if names.is_empty() {
            return Err(ShowcaseError::EmptySelection);
        }

        let mut seen = HashSet::new();
        let mut selected = Vec::with_capacity(names.len());
        for name in names {
            if !seen.insert(name.as_str()) {
                continue;
            }
            let entry = self
                .get(name)
                .ok_or_else(|| ShowcaseError::unknown_template(name))?;
            selected.push(entry.clone());
        }
        Ok(selected)
    }
}

#[derive(Debug, Deserialize)]
struct TreeListing {
    tree: Option<Vec<serde_json::Value>>,
}

/// Extract the `path` of every tree entry, skipping entries without one
pub fn parse_tree_paths(url: &str, body: &str) -> Result<Vec<String>> {
    let listing: TreeListing =
        serde_json::from_str(body).map_err(|e| ShowcaseError::tree_parse_failed(url, e))?;
    let tree = listing
        .tree
        .ok_or_else(|| ShowcaseError::missing_tree(url))?;

    Ok(tree
        .iter()
        .filter_map(|item| item.get("path").and_then(serde_json::Value::as_str))
        .map(str::to_string)
        .collect())
}

/// Fetch one source's tree and turn its template files into entries
pub async fn fetch_source_entries<C: HttpClient>(
    client: &C,
    source: &SourceSpec,
) -> Result<Vec<TemplateEntry>> {
    let pattern = source.compile_pattern()?;
    let url = source.tree_url();
    log::debug!("Listing templates of {} from {url}", source.repository);

    let body = client.get_text(&url).await?;
    let paths = parse_tree_paths(&url, &body)?;
    let entries: Vec<TemplateEntry> = source
        .filter_paths(paths.iter().map(String::as_str), &pattern)
        .into_iter()
        .map(|path| TemplateEntry::new(path, source.raw_url(path)))
        .collect();

    log::debug!(
        "{}: {} of {} tree entries are templates",
        source.repository,
        entries.len(),
        paths.len()
    );
    Ok(entries)
}

/// Build the merged catalog of all sources.
///
/// Sources are listed concurrently; the first failure aborts the build and no
/// partial catalog is returned.
pub async fn build_catalog<C: HttpClient>(client: &C, sources: &[SourceSpec]) -> Result<Catalog> {
    let lists = try_join_all(
        sources
            .iter()
            .map(|source| fetch_source_entries(client, source)),
    )
    .await?;

    let catalog = Catalog::merge(lists);
    log::debug!(
        "Catalog holds {} templates from {} sources",
        catalog.len(),
        sources.len()
    );
    Ok(catalog)
}
