//! Record sources
//!
//! A [`RecordSource`] counts its records and returns one page of them for
//! an offset/limit pair. [`Paginated`] wraps any source with model-level
//! pagination options, so a source gains `paginate` and `paginator` by
//! composition.
//!
//! # Example
//!
//! ```rust
//! use pagewindow::config::PaginationOptions;
//! use pagewindow::source::{PaginateExt, VecSource};
//!
//! let items = VecSource::new((1..=95).collect::<Vec<u32>>())
//!     .paginated()
//!     .with_options(PaginationOptions::new().with_per_page(10));
//!
//! let page = items.page(3, &PaginationOptions::new()).unwrap();
//! assert_eq!(page.records.first(), Some(&21));
//! assert_eq!(page.paginator.last_page().unwrap(), 10);
//! ```

mod database;
mod memory;

pub use database::DuckDbSource;
pub use memory::VecSource;

use crate::config::{resolve_options, PaginationOptions};
use crate::error::{Error, Result};
use crate::pagination::{compute_fetch_spec, FetchSpec, Paginator};

/// A data store that can be read one page at a time
pub trait RecordSource {
    /// Record type returned by the source
    type Record;

    /// Number of records across all pages
    fn count(&self) -> Result<u64>;

    /// Records for one offset/limit pair
    fn fetch_page(&self, spec: FetchSpec) -> Result<Vec<Self::Record>>;
}

/// One page of records plus the paginator describing it
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub records: Vec<T>,
    pub paginator: Paginator,
}

/// A record source with pagination options attached
#[derive(Debug, Clone)]
pub struct Paginated<S> {
    source: S,
    global: PaginationOptions,
    model: PaginationOptions,
}

impl<S: RecordSource> Paginated<S> {
    /// Wrap a source with built-in global defaults and no model options
    pub fn new(source: S) -> Self {
        Self {
            source,
            global: PaginationOptions::defaults(),
            model: PaginationOptions::new(),
        }
    }

    /// Set the model-level options (usually `per_page`)
    #[must_use]
    pub fn with_options(mut self, options: PaginationOptions) -> Self {
        self.model = options;
        self
    }

    /// Replace the global defaults
    #[must_use]
    pub fn with_global_defaults(mut self, defaults: PaginationOptions) -> Self {
        self.global = defaults;
        self
    }

    /// Model-level options
    pub fn options(&self) -> &PaginationOptions {
        &self.model
    }

    /// The wrapped source
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Page size: the call-site value, else the model's, else an error
    pub fn per_page(&self, per_page: Option<u32>) -> Result<u32> {
        let per_page = per_page
            .or(self.model.per_page)
            .or(self.global.per_page)
            .ok_or(Error::PerPageNotSet)?;
        if per_page == 0 {
            return Err(Error::invalid_value("per_page", "must be greater than zero"));
        }
        Ok(per_page)
    }

    /// Offset/limit for `page`
    pub fn fetch_spec(&self, page: i64, per_page: Option<u32>) -> Result<FetchSpec> {
        Ok(compute_fetch_spec(page, self.per_page(per_page)?))
    }

    /// Records on `page`
    pub fn paginate(&self, page: i64, per_page: Option<u32>) -> Result<Vec<S::Record>> {
        let spec = self.fetch_spec(page, per_page)?;
        tracing::debug!(page, offset = spec.offset, limit = spec.limit, "Fetching page");
        self.source.fetch_page(spec)
    }

    /// Paginator for `page` of `count` records. `call` overrides model options.
    pub fn paginator(&self, page: i64, count: u64, call: &PaginationOptions) -> Result<Paginator> {
        let options = resolve_options(&self.global, &self.model, call)?;
        Ok(Paginator::new(page, count, options))
    }

    /// Count, fetch and describe `page` in one call
    pub fn page(&self, page: i64, call: &PaginationOptions) -> Result<Page<S::Record>> {
        let paginator = self.paginator(page, self.source.count()?, call)?;
        let records = self.source.fetch_page(paginator.fetch_spec())?;
        Ok(Page { records, paginator })
    }
}

/// Adds [`Paginated`] wrapping to every record source
pub trait PaginateExt: RecordSource + Sized {
    /// Wrap this source for pagination
    fn paginated(self) -> Paginated<Self> {
        Paginated::new(self)
    }
}

impl<S: RecordSource> PaginateExt for S {}

/// Reject offsets below zero before they reach a data store
pub(crate) fn check_offset(spec: FetchSpec) -> Result<usize> {
    if spec.offset < 0 {
        tracing::warn!(offset = spec.offset, "Rejecting negative fetch offset");
        return Err(Error::InvalidOffset {
            offset: spec.offset,
        });
    }
    Ok(usize::try_from(spec.offset).unwrap_or(usize::MAX))
}
