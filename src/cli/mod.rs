//! CLI module
//!
//! Command-line interface for the page window calculator.
//!
//! # Commands
//!
//! - `window` - Print the page sequence for a listing
//! - `fetch` - Print the offset/limit pair for a page
//! - `render` - Render the pagination widget
//! - `link` - Print the href for a page of a request
//! - `options` - Print the resolved pagination options

mod commands;
mod runner;

pub use commands::{Cli, Commands, OptionArgs, OutputFormat};
pub use runner::Runner;
