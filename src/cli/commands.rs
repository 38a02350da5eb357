//! CLI commands and argument parsing

use crate::config::PaginationOptions;
use crate::types::LogLevel;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Page window calculator CLI
#[derive(Parser, Debug)]
#[command(name = "pagewindow")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Pagination options file (YAML or JSON), used as model-level options
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Log level
    #[arg(long, global = true, default_value = "info")]
    pub log_level: LogLevel,

    /// Verbose output (same as --log-level debug)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Effective log level
    pub fn log_level(&self) -> LogLevel {
        if self.verbose {
            LogLevel::Debug
        } else {
            self.log_level
        }
    }
}

/// Call-site pagination options
#[derive(Args, Debug, Clone, Default)]
pub struct OptionArgs {
    /// Records per page
    #[arg(long)]
    pub per_page: Option<u32>,

    /// Pages shown next to the first and last page
    #[arg(long)]
    pub outer: Option<u32>,

    /// Pages shown on each side of the current page
    #[arg(long)]
    pub inner: Option<u32>,

    /// Query parameter carrying the page number
    #[arg(long)]
    pub param_name: Option<String>,
}

impl OptionArgs {
    /// Convert flags into call-site options
    pub fn to_options(&self) -> PaginationOptions {
        PaginationOptions {
            per_page: self.per_page,
            outer_window: self.outer,
            inner_window: self.inner,
            param_name: self.param_name.clone(),
            ..Default::default()
        }
    }
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the page sequence for a listing
    Window {
        /// Total number of records
        #[arg(long)]
        total: u64,

        /// Current page (defaults to 1)
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the offset/limit pair for a page
    Fetch {
        /// Current page (defaults to 1)
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Render the pagination widget
    Render {
        /// Total number of records
        #[arg(long)]
        total: u64,

        /// Current page (defaults to 1)
        #[arg(long, allow_hyphen_values = true)]
        page: Option<String>,

        /// Request URI the links are built from
        #[arg(long, default_value = "/")]
        uri: String,

        /// Request parameters that come from the route
        #[arg(long = "path-param")]
        path_params: Vec<String>,

        /// Paginator template file (YAML)
        #[arg(long)]
        template_file: Option<PathBuf>,

        /// URL-encode generated query strings
        #[arg(long)]
        encode_links: bool,

        #[command(flatten)]
        options: OptionArgs,
    },

    /// Print the href for a page of the given request
    Link {
        /// Request URI
        #[arg(long)]
        uri: String,

        /// Page to link to
        #[arg(long, allow_hyphen_values = true)]
        page: String,

        /// Query parameter carrying the page number
        #[arg(long)]
        param_name: Option<String>,

        /// Request parameters that come from the route
        #[arg(long = "path-param")]
        path_params: Vec<String>,

        /// URL-encode the query string
        #[arg(long)]
        encode: bool,
    },

    /// Print the resolved pagination options
    Options {
        #[command(flatten)]
        options: OptionArgs,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Human-readable output
    Pretty,
}
