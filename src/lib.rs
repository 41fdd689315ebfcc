//! CLI Showcase - terminal UI demos and a `.gitignore` generator.
//!
//! The library holds the `.gitignore` template pipeline and the terminal
//! widgets used by the `cli-showcase` binary. The pipeline fetches template
//! listings from GitHub, merges them into one catalog, lets a [`Selector`]
//! choose templates and assembles the chosen files into a single document.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - Template sources, catalog building and assembly
//! - HTTP and selection seams ([`HttpClient`], [`Selector`])
//! - Error handling and result types
//! - Output formatting and terminal widgets

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use core::{
    assemble,
    build_catalog,
    derive_name,
    // Output and widgets
    gauge,
    print_error,
    strip_ansi_codes,
    write_output,

    Catalog,
    // HTTP access
    HttpClient,
    InteractiveSelector,
    MemoryClient,
    PresetSelector,
    ReqwestClient,
    // Error handling
    Result,
    // Selection
    Selector,
    ShowcaseError,
    // Template pipeline
    SourceSpec,
    TemplateEntry,
    SOURCES,
};
