//! Core functionality for the cli-showcase tool.
//!
//! This module provides the `.gitignore` template pipeline (sources, catalog,
//! selection, assembly, writing) together with error handling, output
//! formatting and terminal widgets shared by all commands.

pub mod assembler;
pub mod catalog;
pub mod error;
pub mod http;
pub mod output;
pub mod selection;
pub mod source;
pub mod widgets;
pub mod writer;

// === Error handling ===
pub use error::{Result, ShowcaseError};

// === HTTP access ===
pub use http::{HttpClient, MemoryClient, ReqwestClient};

// === Template pipeline ===
pub use assembler::assemble;
pub use catalog::{build_catalog, derive_name, Catalog, TemplateEntry};
pub use selection::{InteractiveSelector, PresetSelector, Selector};
pub use source::{SourceSpec, SOURCES};
pub use writer::write_output;

// === Terminal widgets ===
pub use widgets::{gauge, progress_bar, spinner, with_spinner};

// === Output formatting ===
pub use output::{
    print_catalog, print_error, print_info, print_section_header, print_separator, print_success,
    strip_ansi_codes,
};
