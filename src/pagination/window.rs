//! Page window calculation
//!
//! Pure functions turning `(total_count, page_size, current_page, windows)`
//! into display tokens and offset/limit pairs.

use super::types::{DisplayToken, FetchSpec, FIRST_PAGE};
use crate::error::{Error, Result};
use std::collections::BTreeSet;

/// Offset/limit for a page.
///
/// Pages below 1 produce a negative offset; the data layer rejects those.
pub fn compute_fetch_spec(current_page: i64, page_size: u32) -> FetchSpec {
    FetchSpec {
        offset: current_page
            .saturating_sub(1)
            .saturating_mul(i64::from(page_size)),
        limit: page_size,
    }
}

/// Last page number for `total_count` records, `0` when there are none.
pub fn compute_last_page(total_count: u64, page_size: u32) -> Result<i64> {
    if page_size == 0 {
        return Err(Error::ZeroPageSize);
    }
    let pages = total_count.div_ceil(u64::from(page_size));
    Ok(i64::try_from(pages).unwrap_or(i64::MAX))
}

/// Compute the page sequence to display.
///
/// ```text
/// compute_page_window(1, 100, 50, 1, 3)
/// => [1, 2, ..., 47, 48, 49, 50, 51, 52, 53, ..., 99, 100]
/// ```
///
/// The first and last page are always candidates, `outer_window` pages are
/// added next to each of them and `inner_window` pages on each side of the
/// current page.
///
/// Returns an empty sequence when `last_page < first_page`. A current page
/// outside `[first_page, last_page]` is dropped without error.
pub fn compute_page_window(
    first_page: i64,
    last_page: i64,
    current_page: i64,
    outer_window: u32,
    inner_window: u32,
) -> Vec<DisplayToken> {
    if last_page < first_page {
        return Vec::new();
    }

    if !(first_page..=last_page).contains(&current_page) {
        tracing::debug!(
            current_page,
            first_page,
            last_page,
            "Current page outside page range, omitting it"
        );
    }

    let outer = i64::from(outer_window);
    let inner = i64::from(inner_window);
    let range = (first_page, last_page);

    // BTreeSet both deduplicates and orders: windows may overlap or arrive
    // out of order when the current page sits near either end.
    let mut pages = BTreeSet::new();
    insert_run(&mut pages, range, first_page, first_page.saturating_add(outer));
    insert_run(&mut pages, range, last_page.saturating_sub(outer), last_page);
    insert_run(
        &mut pages,
        range,
        current_page.saturating_sub(inner),
        current_page.saturating_add(inner),
    );

    let mut tokens = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<i64> = None;
    for page in pages {
        if previous.is_some_and(|p| page != p + 1) {
            tokens.push(DisplayToken::Gap);
        }
        tokens.push(DisplayToken::Page(page));
        previous = Some(page);
    }
    tokens
}

/// Page sequence for `total_count` records starting at page 1
pub fn page_window_for(
    current_page: i64,
    page_size: u32,
    total_count: u64,
    outer_window: u32,
    inner_window: u32,
) -> Result<Vec<DisplayToken>> {
    let last_page = compute_last_page(total_count, page_size)?;
    Ok(compute_page_window(
        FIRST_PAGE,
        last_page,
        current_page,
        outer_window,
        inner_window,
    ))
}

/// Insert `start..=end`, clipped to `range`, into `pages`
fn insert_run(pages: &mut BTreeSet<i64>, range: (i64, i64), start: i64, end: i64) {
    let (first, last) = range;
    pages.extend(start.max(first)..=end.min(last));
}

/// Parse a page number from request input.
///
/// Missing or blank input defaults to the first page. Anything that is not
/// an integer is rejected rather than coerced to zero. Out-of-range values
/// pass through unchanged.
pub fn parse_page(input: Option<&str>) -> Result<i64> {
    match input.map(str::trim) {
        None | Some("") => Ok(FIRST_PAGE),
        Some(raw) => raw.parse::<i64>().map_err(|_| Error::invalid_page(raw)),
    }
}
