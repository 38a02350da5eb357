//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OptionArgs, OutputFormat};
use crate::config::{resolve_options, PaginationOptions, ResolvedOptions};
use crate::error::{Result, ResultExt};
use crate::link::{page_href, page_href_encoded, RequestContext};
use crate::pagination::{compute_fetch_spec, parse_page, DisplayToken, Paginator};
use crate::render::{render_paginator, PaginatorTemplate, TemplateRenderer};
use serde_json::json;
use std::fs;
use std::path::Path;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command and print its output
    pub fn run(&self) -> Result<()> {
        let output = self.execute()?;
        println!("{output}");
        Ok(())
    }

    /// Run the CLI command and return its output
    pub fn execute(&self) -> Result<String> {
        match &self.cli.command {
            Commands::Window {
                total,
                page,
                options,
            } => self.window(*total, page.as_deref(), options),
            Commands::Fetch { page, options } => self.fetch(page.as_deref(), options),
            Commands::Render {
                total,
                page,
                uri,
                path_params,
                template_file,
                encode_links,
                options,
            } => self.render(
                *total,
                page.as_deref(),
                uri,
                path_params,
                template_file.as_deref(),
                *encode_links,
                options,
            ),
            Commands::Link {
                uri,
                page,
                param_name,
                path_params,
                encode,
            } => self.link(uri, page, param_name.as_deref(), path_params, *encode),
            Commands::Options { options } => self.options(options),
        }
    }

    /// Model-level options from the config file, if any
    fn model_options(&self) -> Result<PaginationOptions> {
        match &self.cli.config {
            Some(path) => {
                tracing::debug!("Loading pagination options from {}", path.display());
                PaginationOptions::from_file(path)
            }
            None => Ok(PaginationOptions::new()),
        }
    }

    /// Resolve defaults, config file and flags
    fn resolve(&self, args: &OptionArgs) -> Result<ResolvedOptions> {
        resolve_options(
            &PaginationOptions::defaults(),
            &self.model_options()?,
            &args.to_options(),
        )
    }

    fn window(&self, total: u64, page: Option<&str>, args: &OptionArgs) -> Result<String> {
        let page = parse_page(page)?;
        let paginator = Paginator::new(page, total, self.resolve(args)?);
        let pages = paginator.pages()?;

        match self.cli.format {
            OutputFormat::Json => Ok(json!({
                "current_page": page,
                "last_page": paginator.last_page()?,
                "pages": pages,
            })
            .to_string()),
            OutputFormat::Pretty => Ok(pages
                .iter()
                .map(|token| match token {
                    DisplayToken::Page(n) if *n == page => format!("[{n}]"),
                    other => other.to_string(),
                })
                .collect::<Vec<_>>()
                .join(" ")),
        }
    }

    fn fetch(&self, page: Option<&str>, args: &OptionArgs) -> Result<String> {
        let page = parse_page(page)?;
        let spec = compute_fetch_spec(page, self.resolve(args)?.per_page);

        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string(&spec)?),
            OutputFormat::Pretty => Ok(format!("offset={} limit={}", spec.offset, spec.limit)),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn render(
        &self,
        total: u64,
        page: Option<&str>,
        uri: &str,
        path_params: &[String],
        template_file: Option<&Path>,
        encode_links: bool,
        args: &OptionArgs,
    ) -> Result<String> {
        let page = parse_page(page)?;
        let mut paginator = Paginator::new(page, total, self.resolve(args)?);
        let request = RequestContext::from_uri(uri, path_params.iter().cloned())?;

        let mut renderer = TemplateRenderer::new();
        if encode_links {
            renderer = renderer.with_encoded_links();
        }
        if let Some(path) = template_file {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read template file {}", path.display()))?;
            renderer.register(paginator.template(), PaginatorTemplate::from_yaml_str(&content)?);
        }

        let html = render_paginator(&renderer, &mut paginator, &request, &PaginationOptions::new())?;

        match self.cli.format {
            OutputFormat::Json => Ok(json!({ "html": html }).to_string()),
            OutputFormat::Pretty => Ok(html),
        }
    }

    fn link(
        &self,
        uri: &str,
        page: &str,
        param_name: Option<&str>,
        path_params: &[String],
        encode: bool,
    ) -> Result<String> {
        let page = parse_page(Some(page))?;
        let request = RequestContext::from_uri(uri, path_params.iter().cloned())?;

        let call = PaginationOptions {
            param_name: param_name.map(String::from),
            ..Default::default()
        };
        let param_name = call
            .or(&self.model_options()?)
            .or(&PaginationOptions::defaults())
            .param_name
            .unwrap_or_default();

        let href = if encode {
            page_href_encoded(&request, page, &param_name)
        } else {
            page_href(&request, page, &param_name)
        };

        match self.cli.format {
            OutputFormat::Json => Ok(json!({ "href": href }).to_string()),
            OutputFormat::Pretty => Ok(href),
        }
    }

    fn options(&self, args: &OptionArgs) -> Result<String> {
        let resolved = self.resolve(args)?;
        match self.cli.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&resolved)?),
            OutputFormat::Pretty => Ok(serde_yaml::to_string(&resolved)?),
        }
    }
}
