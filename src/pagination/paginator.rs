//! Paginator and render model
//!
//! A [`Paginator`] pairs one request (current page, total count) with
//! resolved options and produces the model handed to a renderer.

use super::types::{DisplayToken, FetchSpec, PaginationRequest, FIRST_PAGE};
use super::window::compute_page_window;
use crate::config::{PaginationOptions, ResolvedOptions};
use crate::error::Result;
use serde::Serialize;

/// Everything a renderer needs to draw the pagination widget
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderModel {
    pub current_page: i64,
    pub last_page: i64,
    pub pages: Vec<DisplayToken>,
    pub prev_label: String,
    pub next_label: String,
    pub param_name: String,
    pub html_id: String,
    pub html_class: String,
}

impl RenderModel {
    /// Whether a "previous" link should be active
    pub fn has_previous(&self) -> bool {
        self.last_page >= FIRST_PAGE && self.current_page > FIRST_PAGE
    }

    /// Whether a "next" link should be active
    pub fn has_next(&self) -> bool {
        self.current_page >= FIRST_PAGE && self.current_page < self.last_page
    }

    /// Whether there is nothing to display
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// Build the render model for a request
pub fn build_render_model(
    request: &PaginationRequest,
    options: &ResolvedOptions,
) -> Result<RenderModel> {
    let last_page = request.last_page()?;
    let window = options.window();
    let pages = compute_page_window(
        FIRST_PAGE,
        last_page,
        request.current_page,
        window.outer_window,
        window.inner_window,
    );

    Ok(RenderModel {
        current_page: request.current_page,
        last_page,
        pages,
        prev_label: options.prev_label.clone(),
        next_label: options.next_label.clone(),
        param_name: options.param_name.clone(),
        html_id: options.html_id.clone(),
        html_class: options.html_class.clone(),
    })
}

/// One request's pagination state plus its resolved options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paginator {
    request: PaginationRequest,
    options: ResolvedOptions,
}

impl Paginator {
    /// Create a paginator. The page size comes from `options.per_page`.
    pub fn new(current_page: i64, total_count: u64, options: ResolvedOptions) -> Self {
        Self {
            request: PaginationRequest::new(current_page, options.per_page, total_count),
            options,
        }
    }

    /// The underlying request
    pub fn request(&self) -> &PaginationRequest {
        &self.request
    }

    /// The resolved options
    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    /// Current page number
    pub fn current_page(&self) -> i64 {
        self.request.current_page
    }

    /// Last page number, 0 when there are no records
    pub fn last_page(&self) -> Result<i64> {
        self.request.last_page()
    }

    /// Page sequence to display
    pub fn pages(&self) -> Result<Vec<DisplayToken>> {
        Ok(compute_page_window(
            FIRST_PAGE,
            self.last_page()?,
            self.request.current_page,
            self.options.outer_window,
            self.options.inner_window,
        ))
    }

    /// Offset/limit for the current page
    pub fn fetch_spec(&self) -> FetchSpec {
        self.request.fetch_spec()
    }

    /// Template id to render with
    pub fn template(&self) -> &str {
        &self.options.template
    }

    /// Replace display options (labels, windows, names, template)
    pub fn apply_overrides(&mut self, overrides: &PaginationOptions) {
        self.options = self.options.clone().with_overrides(overrides);
    }

    /// Build the render model
    pub fn render_model(&self) -> Result<RenderModel> {
        build_render_model(&self.request, &self.options)
    }
}
