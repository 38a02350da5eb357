//! Pagination module
//!
//! Offset/limit, page-number-indexed pagination.
//!
//! # Overview
//!
//! The window calculator turns a total record count, a page size, the
//! current page and two window sizes into the page sequence shown by a
//! pagination widget (`1 2 ... 47 48 49 50 51 52 53 ... 99 100`), and into
//! the offset/limit pair used to fetch the current page. Everything here is
//! pure and safe to call from any thread.

mod paginator;
mod types;
mod window;

pub use paginator::{build_render_model, Paginator, RenderModel};
pub use types::{
    DisplayToken, FetchSpec, PaginationRequest, WindowConfig, DEFAULT_INNER_WINDOW,
    DEFAULT_OUTER_WINDOW, FIRST_PAGE, GAP_MARKER,
};
pub use window::{
    compute_fetch_spec, compute_last_page, compute_page_window, page_window_for, parse_page,
};

#[cfg(test)]
mod tests;
