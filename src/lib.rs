// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]

//! # pagewindow
//!
//! Offset/limit pagination with a bounded page-window display algorithm.
//!
//! ## Features
//!
//! - **Page windows**: `<< Previous 1 2 ... 47 48 49 50 51 52 53 ... 99 100 Next >>`
//! - **Offset/limit**: the fetch pair for any page
//! - **Layered options**: global defaults, model options, call-site overrides
//! - **Record sources**: in-memory and DuckDB sources, or your own
//! - **Rendering**: `{{ var }}` widget templates and same-page links
//!
//! ## Quick Start
//!
//! ```rust
//! use pagewindow::{compute_page_window, DisplayToken};
//!
//! let pages = compute_page_window(1, 100, 50, 1, 3);
//! let rendered: Vec<String> = pages.iter().map(DisplayToken::to_string).collect();
//! assert_eq!(
//!     rendered.join(" "),
//!     "1 2 ... 47 48 49 50 51 52 53 ... 99 100"
//! );
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Window Calculator                          │
//! │  compute_fetch_spec()   compute_last_page()                     │
//! │  compute_page_window()  build_render_model()                    │
//! └─────────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────┬───────────────┴─────┬──────────────┬─────────────┐
//! │    Config    │       Source        │    Render    │    Link     │
//! ├──────────────┼─────────────────────┼──────────────┼─────────────┤
//! │ Global       │ RecordSource        │ Renderer     │ Request     │
//! │ Model        │ Paginated<S>        │ Templates    │ Page hrefs  │
//! │ Call-site    │ Vec / DuckDB        │              │             │
//! └──────────────┴─────────────────────┴──────────────┴─────────────┘
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]
#![allow(missing_docs)] // TODO: Document the remaining public fields before 1.0

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page window calculation and paginator
pub mod pagination;

/// Pagination options and their resolution
pub mod config;

/// Template interpolation
pub mod template;

/// Rendering boundary and default widget template
pub mod render;

/// Same-page links
pub mod link;

/// Record sources and the pagination adapter
pub mod source;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

// Re-export commonly used types
pub use config::{resolve_options, PaginationOptions, ResolvedOptions};
pub use pagination::{
    build_render_model, compute_fetch_spec, compute_last_page, compute_page_window, parse_page,
    DisplayToken, FetchSpec, PaginationRequest, Paginator, RenderModel, WindowConfig,
};
pub use source::{PaginateExt, Paginated, RecordSource};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
