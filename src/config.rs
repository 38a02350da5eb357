//! Pagination options and their resolution
//!
//! Options come in three tiers: global defaults, model-level options set
//! once per record source, and call-site overrides. Every field is optional
//! in every tier; [`resolve_options`] merges them with call-site values
//! winning over model values winning over global defaults.

use crate::error::{Error, Result};
use crate::pagination::{WindowConfig, DEFAULT_INNER_WINDOW, DEFAULT_OUTER_WINDOW};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Template id of the built-in paginator widget
pub const DEFAULT_TEMPLATE: &str = "default_paginator";

// ============================================================================
// Options (one tier)
// ============================================================================

/// Pagination options, as written in YAML or passed at a call site
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PaginationOptions {
    /// Records per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub per_page: Option<u32>,

    /// Label of the "previous page" link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prev_label: Option<String>,

    /// Label of the "next page" link
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_label: Option<String>,

    /// Pages shown adjacent to the first and last page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outer_window: Option<u32>,

    /// Pages shown on each side of the current page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_window: Option<u32>,

    /// Query parameter carrying the page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub param_name: Option<String>,

    /// HTML id of the widget element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_id: Option<String>,

    /// HTML class of the widget element
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_class: Option<String>,

    /// Template id handed to the renderer
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl PaginationOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in global defaults. `per_page` is intentionally absent.
    pub fn defaults() -> Self {
        Self {
            per_page: None,
            prev_label: Some("<< Previous".to_string()),
            next_label: Some("Next >>".to_string()),
            outer_window: Some(DEFAULT_OUTER_WINDOW),
            inner_window: Some(DEFAULT_INNER_WINDOW),
            param_name: Some("page".to_string()),
            html_id: Some("paginator".to_string()),
            html_class: Some("paginator".to_string()),
            template: Some(DEFAULT_TEMPLATE.to_string()),
        }
    }

    /// Parse options from YAML (JSON is accepted too)
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load options from a YAML or JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Set records per page
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = Some(per_page);
        self
    }

    /// Set both window sizes
    #[must_use]
    pub fn with_windows(mut self, outer_window: u32, inner_window: u32) -> Self {
        self.outer_window = Some(outer_window);
        self.inner_window = Some(inner_window);
        self
    }

    /// Set the previous/next labels
    #[must_use]
    pub fn with_labels(mut self, prev: impl Into<String>, next: impl Into<String>) -> Self {
        self.prev_label = Some(prev.into());
        self.next_label = Some(next.into());
        self
    }

    /// Set the page query parameter name
    #[must_use]
    pub fn with_param_name(mut self, name: impl Into<String>) -> Self {
        self.param_name = Some(name.into());
        self
    }

    /// Set the widget's HTML id and class
    #[must_use]
    pub fn with_html(mut self, id: impl Into<String>, class: impl Into<String>) -> Self {
        self.html_id = Some(id.into());
        self.html_class = Some(class.into());
        self
    }

    /// Set the template id
    #[must_use]
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    /// Fill every unset field from `fallback`
    #[must_use]
    pub fn or(self, fallback: &PaginationOptions) -> Self {
        Self {
            per_page: self.per_page.or(fallback.per_page),
            prev_label: self.prev_label.or_else(|| fallback.prev_label.clone()),
            next_label: self.next_label.or_else(|| fallback.next_label.clone()),
            outer_window: self.outer_window.or(fallback.outer_window),
            inner_window: self.inner_window.or(fallback.inner_window),
            param_name: self.param_name.or_else(|| fallback.param_name.clone()),
            html_id: self.html_id.or_else(|| fallback.html_id.clone()),
            html_class: self.html_class.or_else(|| fallback.html_class.clone()),
            template: self.template.or_else(|| fallback.template.clone()),
        }
    }
}

// ============================================================================
// Resolved Options
// ============================================================================

/// Fully resolved options: every field has a value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedOptions {
    pub per_page: u32,
    pub prev_label: String,
    pub next_label: String,
    pub outer_window: u32,
    pub inner_window: u32,
    pub param_name: String,
    pub html_id: String,
    pub html_class: String,
    pub template: String,
}

impl ResolvedOptions {
    /// Window sizes for the page sequence
    pub fn window(&self) -> WindowConfig {
        WindowConfig::new(self.outer_window, self.inner_window)
    }

    /// Apply display overrides. `per_page` is left untouched.
    #[must_use]
    pub fn with_overrides(mut self, overrides: &PaginationOptions) -> Self {
        if overrides.per_page.is_some_and(|p| p != self.per_page) {
            tracing::debug!(
                per_page = self.per_page,
                "Ignoring per_page override on an existing paginator"
            );
        }
        if let Some(label) = &overrides.prev_label {
            self.prev_label.clone_from(label);
        }
        if let Some(label) = &overrides.next_label {
            self.next_label.clone_from(label);
        }
        if let Some(outer) = overrides.outer_window {
            self.outer_window = outer;
        }
        if let Some(inner) = overrides.inner_window {
            self.inner_window = inner;
        }
        if let Some(name) = &overrides.param_name {
            self.param_name.clone_from(name);
        }
        if let Some(id) = &overrides.html_id {
            self.html_id.clone_from(id);
        }
        if let Some(class) = &overrides.html_class {
            self.html_class.clone_from(class);
        }
        if let Some(template) = &overrides.template {
            self.template.clone_from(template);
        }
        self
    }
}

/// Merge the three option tiers.
///
/// Call-site values win over model values, which win over `global`. Fields
/// missing from all three fall back to [`PaginationOptions::defaults`], except
/// `per_page`, which must be set somewhere.
pub fn resolve_options(
    global: &PaginationOptions,
    model: &PaginationOptions,
    call: &PaginationOptions,
) -> Result<ResolvedOptions> {
    let merged = call
        .clone()
        .or(model)
        .or(global)
        .or(&PaginationOptions::defaults());

    let per_page = merged.per_page.ok_or(Error::PerPageNotSet)?;
    if per_page == 0 {
        return Err(Error::invalid_value(
            "per_page",
            "must be greater than zero",
        ));
    }

    tracing::debug!(
        per_page,
        outer_window = ?merged.outer_window,
        inner_window = ?merged.inner_window,
        "Resolved pagination options"
    );

    // defaults() fills everything except per_page
    Ok(ResolvedOptions {
        per_page,
        prev_label: merged.prev_label.unwrap_or_default(),
        next_label: merged.next_label.unwrap_or_default(),
        outer_window: merged.outer_window.unwrap_or(DEFAULT_OUTER_WINDOW),
        inner_window: merged.inner_window.unwrap_or(DEFAULT_INNER_WINDOW),
        param_name: merged.param_name.unwrap_or_default(),
        html_id: merged.html_id.unwrap_or_default(),
        html_class: merged.html_class.unwrap_or_default(),
        template: merged.template.unwrap_or_default(),
    })
}
