//! Rendering boundary
//!
//! A [`Renderer`] turns a [`RenderModel`] into markup. The crate ships a
//! [`TemplateRenderer`] built on `{{ var }}` interpolation with one
//! registered template, `default_paginator`, which draws
//! `<< Previous 1 2 ... 10 11 12 Next >>`.

use crate::config::{PaginationOptions, DEFAULT_TEMPLATE};
use crate::error::{Error, Result};
use crate::link::{page_href, page_href_encoded, RequestContext};
use crate::pagination::{DisplayToken, Paginator, RenderModel};
use crate::template::{self, escape_html, TemplateContext};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::collections::HashMap;

/// Produces markup for a render model
pub trait Renderer {
    /// Render `model` with the template registered as `template_id`
    fn render(
        &self,
        template_id: &str,
        model: &RenderModel,
        request: &RequestContext,
    ) -> Result<String>;
}

/// Apply view-time overrides to `paginator` and render it
pub fn render_paginator<R: Renderer + ?Sized>(
    renderer: &R,
    paginator: &mut Paginator,
    request: &RequestContext,
    overrides: &PaginationOptions,
) -> Result<String> {
    paginator.apply_overrides(overrides);
    let model = paginator.render_model()?;
    renderer.render(paginator.template(), &model, request)
}

// ============================================================================
// Templates
// ============================================================================

/// Templates for each part of the widget.
///
/// `widget` receives the render model fields plus `items`. Item templates
/// receive `page`, `href` and `label` where they apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorTemplate {
    pub widget: String,
    pub page: String,
    pub current: String,
    pub gap: String,
    pub previous: String,
    pub previous_disabled: String,
    pub next: String,
    pub next_disabled: String,
    #[serde(default = "default_separator")]
    pub separator: String,
}

fn default_separator() -> String {
    " ".to_string()
}

impl Default for PaginatorTemplate {
    fn default() -> Self {
        Self {
            widget: r#"<div id="{{ html_id }}" class="{{ html_class }}">{{ items }}</div>"#
                .to_string(),
            page: r#"<a href="{{ href }}">{{ page }}</a>"#.to_string(),
            current: r#"<span class="current">{{ page }}</span>"#.to_string(),
            gap: r#"<span class="gap">...</span>"#.to_string(),
            previous: r#"<a href="{{ href }}" class="previous">{{ label }}</a>"#.to_string(),
            previous_disabled: r#"<span class="previous disabled">{{ label }}</span>"#
                .to_string(),
            next: r#"<a href="{{ href }}" class="next">{{ label }}</a>"#.to_string(),
            next_disabled: r#"<span class="next disabled">{{ label }}</span>"#.to_string(),
            separator: default_separator(),
        }
    }
}

impl PaginatorTemplate {
    /// Parse a template from YAML
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let tpl: Self = serde_yaml::from_str(yaml)?;
        tpl.validate()?;
        Ok(tpl)
    }

    /// Check that the widget template places the items
    pub fn validate(&self) -> Result<()> {
        if template::extract_variables(&self.widget)
            .iter()
            .any(|v| v == "items" || v == "item.items")
        {
            Ok(())
        } else {
            Err(Error::template("widget template must contain {{ items }}"))
        }
    }
}

// ============================================================================
// Template Renderer
// ============================================================================

/// Registry of named paginator templates
#[derive(Debug, Clone)]
pub struct TemplateRenderer {
    templates: HashMap<String, PaginatorTemplate>,
    encode_links: bool,
}

impl Default for TemplateRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer {
    /// Create a renderer with the default template registered
    pub fn new() -> Self {
        let mut templates = HashMap::new();
        templates.insert(DEFAULT_TEMPLATE.to_string(), PaginatorTemplate::default());
        Self {
            templates,
            encode_links: false,
        }
    }

    /// Register (or replace) a template
    pub fn register(&mut self, id: impl Into<String>, template: PaginatorTemplate) -> &mut Self {
        self.templates.insert(id.into(), template);
        self
    }

    /// Form-urlencode query strings in generated hrefs
    #[must_use]
    pub fn with_encoded_links(mut self) -> Self {
        self.encode_links = true;
        self
    }

    /// Look up a registered template
    pub fn template(&self, id: &str) -> Option<&PaginatorTemplate> {
        self.templates.get(id)
    }

    /// Href for `page`, escaped for an HTML attribute
    fn href(&self, request: &RequestContext, page: i64, param_name: &str) -> String {
        let href = if self.encode_links {
            page_href_encoded(request, page, param_name)
        } else {
            page_href(request, page, param_name)
        };
        escape_html(&href)
    }
}

impl Renderer for TemplateRenderer {
    fn render(
        &self,
        template_id: &str,
        model: &RenderModel,
        request: &RequestContext,
    ) -> Result<String> {
        let tpl = self
            .templates
            .get(template_id)
            .ok_or_else(|| Error::unknown_template(template_id))?;

        if model.is_empty() {
            tracing::debug!("No pages to display, suppressing paginator widget");
            return Ok(String::new());
        }

        let widget = serde_json::to_value(model)?;
        let mut ctx = TemplateContext::with_widget(widget);
        let param = model.param_name.as_str();
        let mut items = Vec::with_capacity(model.pages.len() + 2);
        let prev_label = escape_html(&model.prev_label);
        let next_label = escape_html(&model.next_label);

        if model.has_previous() {
            let href = self.href(request, model.current_page - 1, param);
            ctx.set_item(json!({ "href": href, "label": prev_label }));
            items.push(template::render(&tpl.previous, &ctx)?);
        } else {
            ctx.set_item(json!({ "label": prev_label }));
            items.push(template::render(&tpl.previous_disabled, &ctx)?);
        }

        for token in &model.pages {
            let item = match *token {
                DisplayToken::Gap => {
                    ctx.set_item(json!({}));
                    template::render(&tpl.gap, &ctx)?
                }
                DisplayToken::Page(page) if page == model.current_page => {
                    ctx.set_item(json!({ "page": page }));
                    template::render(&tpl.current, &ctx)?
                }
                DisplayToken::Page(page) => {
                    let href = self.href(request, page, param);
                    ctx.set_item(json!({ "page": page, "href": href }));
                    template::render(&tpl.page, &ctx)?
                }
            };
            items.push(item);
        }

        if model.has_next() {
            let href = self.href(request, model.current_page + 1, param);
            ctx.set_item(json!({ "href": href, "label": next_label }));
            items.push(template::render(&tpl.next, &ctx)?);
        } else {
            ctx.set_item(json!({ "label": next_label }));
            items.push(template::render(&tpl.next_disabled, &ctx)?);
        }

        ctx.set_item(json!({ "items": items.join(tpl.separator.as_str()) }));
        template::render(&tpl.widget, &ctx)
    }
}
