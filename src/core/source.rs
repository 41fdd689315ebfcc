//! Remote template sources.
//!
//! A [`SourceSpec`] describes one GitHub repository to scan for `.gitignore`
//! templates. The two sources the generator uses are fixed in [`SOURCES`].

use regex::Regex;

/// Git API host serving tree listings
pub const API_HOST: &str = "https://api.github.com";

/// Host serving raw file contents
pub const RAW_HOST: &str = "https://raw.githubusercontent.com";

/// Branch every source is read from
pub const BRANCH: &str = "master";

/// Static description of one template repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSpec {
    /// `owner/repo`
    pub repository: &'static str,
    /// Keep only paths starting with this string
    pub directory: Option<&'static str>,
    /// Regex applied to the whole path
    pub pattern: &'static str,
    /// Request a recursive tree listing
    pub recursive: bool,
}

/// Template sources in merge priority order
pub const SOURCES: [SourceSpec; 2] = [
    // https://github.com/github/gitignore
    SourceSpec {
        repository: "github/gitignore",
        directory: None,
        pattern: r".+\.gitignore$",
        recursive: true,
    },
    // https://github.com/toptal/gitignore/tree/master/templates
    SourceSpec {
        repository: "toptal/gitignore",
        directory: Some("templates"),
        pattern: r".+\.gitignore$",
        recursive: false,
    },
];

impl SourceSpec {
    /// Directory filter, treating an empty string as no filter
    pub fn directory_filter(&self) -> Option<&'static str> {
        self.directory.filter(|dir| !dir.is_empty())
    }

    /// A directory filter needs the full tree, so it implies recursion
    pub fn needs_recursive_listing(&self) -> bool {
        self.recursive || self.directory_filter().is_some()
    }

    /// Tree listing endpoint for this repository's branch
    pub fn tree_url(&self) -> String {
        let query = if self.needs_recursive_listing() {
            "?recursive=1"
        } else {
            ""
        };
        format!(
            "{API_HOST}/repos/{}/git/trees/{BRANCH}{query}",
            self.repository
        )
    }

    /// Raw content URL for a path inside this repository
    pub fn raw_url(&self, path: &str) -> String {
        format!("{RAW_HOST}/{}/{BRANCH}/{path}", self.repository)
    }

    pub fn compile_pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(self.pattern)
    }

    /// Apply the directory and pattern filters, preserving input order.
    ///
    /// The directory check is a plain string prefix: `templates` also accepts
    /// `templates-old/...`.
    pub fn filter_paths<'a>(
        &self,
        paths: impl IntoIterator<Item = &'a str>,
        pattern: &Regex,
    ) -> Vec<&'a str> {
        let directory = self.directory_filter();
        paths
            .into_iter()
            .filter(|path| directory.map_or(true, |dir| path.starts_with(dir)))
            .filter(|path| pattern.is_match(path))
            .collect()
    }
}
