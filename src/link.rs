//! Same-page links with the page parameter overridden
//!
//! Given the current request path and parameters, build the href for
//! another page of the same listing. If the current url is
//! `/some/action?arg1=blah&arg2=bleh` then the href for page 5 with
//! parameter `da_page` is `/some/action?arg1=blah&arg2=bleh&da_page=5`.

use crate::error::Result;
use crate::template::escape_html;
use crate::types::QueryPairs;
use std::collections::HashSet;
use url::Url;

/// Base used to parse relative request URIs
const LOCAL_BASE: &str = "http://localhost";

/// Path and parameters of the request being served
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// Request path without query string
    pub path: String,
    /// All request parameters, in order. Includes routing parameters.
    pub params: QueryPairs,
    /// Names of parameters that come from the route, not the query string
    pub path_param_keys: HashSet<String>,
}

impl RequestContext {
    /// Create a context for `path` with no parameters
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Add a query parameter
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Add a routing parameter. It is kept out of generated query strings.
    #[must_use]
    pub fn with_path_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        self.path_param_keys.insert(key.clone());
        self.params.push((key, value.into()));
        self
    }

    /// Parse a request URI such as `/items?sort=name&page=2`.
    ///
    /// Query values are percent-decoded. `path_param_keys` names parameters
    /// to treat as routing parameters.
    pub fn from_uri<I, S>(uri: &str, path_param_keys: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let url = Url::parse(LOCAL_BASE)?.join(uri)?;
        Ok(Self {
            path: url.path().to_string(),
            params: url
                .query_pairs()
                .map(|(k, v)| (k.into_owned(), v.into_owned()))
                .collect(),
            path_param_keys: path_param_keys.into_iter().map(Into::into).collect(),
        })
    }

    /// Non-routing parameters with `param_name` set to `page`.
    ///
    /// An existing `param_name` keeps its position; otherwise it is appended.
    pub fn query_for_page(&self, page: i64, param_name: &str) -> QueryPairs {
        let mut pairs: QueryPairs = self
            .params
            .iter()
            .filter(|(k, _)| !self.path_param_keys.contains(k))
            .cloned()
            .collect();

        let page = page.to_string();
        let mut replaced = false;
        pairs.retain_mut(|(k, v)| {
            if k != param_name {
                return true;
            }
            if replaced {
                return false;
            }
            v.clone_from(&page);
            replaced = true;
            true
        });
        if !replaced {
            pairs.push((param_name.to_string(), page));
        }
        pairs
    }
}

/// Href for `page`, joining parameters unescaped as `k=v&k=v`
pub fn page_href(ctx: &RequestContext, page: i64, param_name: &str) -> String {
    let query = ctx
        .query_for_page(page, param_name)
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{query}", ctx.path)
}

/// Href for `page` with a form-urlencoded query string
pub fn page_href_encoded(ctx: &RequestContext, page: i64, param_name: &str) -> String {
    let query = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(ctx.query_for_page(page, param_name))
        .finish();
    format!("{}?{query}", ctx.path)
}

/// Anchor tag linking to `page`. The href and text are HTML-escaped.
pub fn pagination_link(ctx: &RequestContext, text: &str, page: i64, param_name: &str) -> String {
    format!(
        r#"<a href="{}">{}</a>"#,
        escape_html(&page_href(ctx, page, param_name)),
        escape_html(text)
    )
}
