//! Tests for pagination module

use super::*;
use crate::config::{resolve_options, PaginationOptions};
use crate::error::Error;
use pretty_assertions::assert_eq;
use serde_json::json;
use test_case::test_case;

/// Stand-in for a gap in `seq` (page 0 never appears with first page 1)
const GAP: i64 = 0;

fn seq(pages: &[i64]) -> Vec<DisplayToken> {
    pages
        .iter()
        .map(|&n| {
            if n == GAP {
                DisplayToken::Gap
            } else {
                DisplayToken::Page(n)
            }
        })
        .collect()
}

fn options(per_page: u32) -> crate::config::ResolvedOptions {
    resolve_options(
        &PaginationOptions::defaults(),
        &PaginationOptions::new().with_per_page(per_page),
        &PaginationOptions::new(),
    )
    .unwrap()
}

// ============================================================================
// FetchSpec Tests
// ============================================================================

#[test_case(1, 20, 0 ; "first page")]
#[test_case(3, 20, 40 ; "third page")]
#[test_case(10, 7, 63 ; "odd page size")]
#[test_case(0, 20, -20 ; "page zero gives negative offset")]
#[test_case(-2, 10, -30 ; "negative page")]
fn test_compute_fetch_spec(page: i64, page_size: u32, offset: i64) {
    assert_eq!(
        compute_fetch_spec(page, page_size),
        FetchSpec {
            offset,
            limit: page_size
        }
    );
}

#[test]
fn test_compute_fetch_spec_saturates() {
    let spec = compute_fetch_spec(i64::MAX, u32::MAX);
    assert_eq!(spec.offset, i64::MAX);

    let spec = compute_fetch_spec(i64::MIN, 10);
    assert_eq!(spec.offset, i64::MIN);
}

// ============================================================================
// Last Page Tests
// ============================================================================

#[test_case(0, 10, 0 ; "no records")]
#[test_case(1, 10, 1 ; "single record")]
#[test_case(95, 10, 10 ; "partial last page")]
#[test_case(100, 10, 10 ; "exact multiple")]
#[test_case(101, 10, 11 ; "one over")]
#[test_case(7, 1, 7 ; "page size one")]
fn test_compute_last_page(total: u64, page_size: u32, expected: i64) {
    assert_eq!(compute_last_page(total, page_size).unwrap(), expected);
}

#[test]
fn test_compute_last_page_zero_page_size() {
    let err = compute_last_page(5, 0).unwrap_err();
    assert!(matches!(err, Error::ZeroPageSize));
    assert!(!err.is_config_error());
}

// ============================================================================
// Page Window Tests
// ============================================================================

#[test]
fn test_window_documented_example() {
    assert_eq!(
        compute_page_window(1, 100, 50, 1, 3),
        seq(&[1, 2, GAP, 47, 48, 49, 50, 51, 52, 53, GAP, 99, 100])
    );
}

#[test_case(0, 0 ; "no windows")]
#[test_case(1, 3 ; "default windows")]
#[test_case(5, 9 ; "wide windows")]
fn test_window_single_page(outer: u32, inner: u32) {
    assert_eq!(compute_page_window(1, 1, 1, outer, inner), seq(&[1]));
}

#[test]
fn test_window_overlapping_windows_no_duplicates() {
    // Outer window before page 5 is page 4, which the inner window also covers
    assert_eq!(compute_page_window(1, 5, 3, 1, 1), seq(&[1, 2, 3, 4, 5]));
    assert_eq!(compute_page_window(1, 3, 2, 1, 3), seq(&[1, 2, 3]));
}

#[test]
fn test_window_near_start() {
    assert_eq!(
        compute_page_window(1, 100, 2, 1, 3),
        seq(&[1, 2, 3, 4, 5, GAP, 99, 100])
    );
}

#[test]
fn test_window_near_end() {
    assert_eq!(
        compute_page_window(1, 100, 98, 1, 3),
        seq(&[1, 2, GAP, 95, 96, 97, 98, 99, 100])
    );
}

#[test]
fn test_window_wider_outer() {
    assert_eq!(
        compute_page_window(1, 20, 10, 2, 2),
        seq(&[1, 2, 3, GAP, 8, 9, 10, 11, 12, GAP, 18, 19, 20])
    );
}

#[test]
fn test_window_zero_windows() {
    assert_eq!(compute_page_window(1, 10, 1, 0, 0), seq(&[1, GAP, 10]));
    assert_eq!(compute_page_window(1, 10, 5, 0, 0), seq(&[1, GAP, 5, GAP, 10]));
    assert_eq!(compute_page_window(1, 2, 1, 0, 0), seq(&[1, 2]));
}

#[test]
fn test_window_single_hidden_page_still_gaps() {
    assert_eq!(
        compute_page_window(1, 7, 4, 1, 0),
        seq(&[1, 2, GAP, 4, GAP, 6, 7])
    );
}

#[test]
fn test_window_no_pages() {
    assert!(compute_page_window(1, 0, 1, 1, 3).is_empty());
    assert!(compute_page_window(1, 0, 0, 0, 0).is_empty());
}

#[test_case(0 ; "page zero")]
#[test_case(-5 ; "negative page")]
#[test_case(20 ; "past the end")]
fn test_window_current_out_of_range(current: i64) {
    assert_eq!(
        compute_page_window(1, 10, current, 1, 1),
        seq(&[1, 2, GAP, 9, 10])
    );
}

#[test]
fn test_window_out_of_range_inner_window_reaches_in() {
    // current page 0 is dropped but its inner window still covers page 1
    assert_eq!(compute_page_window(1, 10, 0, 0, 2), seq(&[1, 2, GAP, 10]));
}

#[test]
fn test_window_huge_windows() {
    assert_eq!(
        compute_page_window(1, 5, 3, u32::MAX, u32::MAX),
        seq(&[1, 2, 3, 4, 5])
    );
}

#[test]
fn test_window_custom_first_page() {
    assert_eq!(
        compute_page_window(0, 9, 5, 0, 1),
        vec![
            DisplayToken::Page(0),
            DisplayToken::Gap,
            DisplayToken::Page(4),
            DisplayToken::Page(5),
            DisplayToken::Page(6),
            DisplayToken::Gap,
            DisplayToken::Page(9),
        ]
    );
}

#[test]
fn test_window_invariants() {
    for last in 0..=30_i64 {
        for current in -2..=(last + 3) {
            for outer in 0..=3_u32 {
                for inner in 0..=4_u32 {
                    let tokens = compute_page_window(1, last, current, outer, inner);
                    let ctx = format!("last={last} current={current} outer={outer} inner={inner}");

                    if last < 1 {
                        assert!(tokens.is_empty(), "{ctx}");
                        continue;
                    }

                    assert!(!tokens.first().unwrap().is_gap(), "leading gap: {ctx}");
                    assert!(!tokens.last().unwrap().is_gap(), "trailing gap: {ctx}");

                    for pair in tokens.windows(2) {
                        assert!(!(pair[0].is_gap() && pair[1].is_gap()), "double gap: {ctx}");
                        if let (Some(a), Some(b)) = (pair[0].page(), pair[1].page()) {
                            assert_eq!(b, a + 1, "adjacent pages without gap: {ctx}");
                        }
                    }
                    for triple in tokens.windows(3) {
                        if triple[1].is_gap() {
                            let (a, b) = (triple[0].page().unwrap(), triple[2].page().unwrap());
                            assert!(b > a + 1, "gap between adjacent pages: {ctx}");
                        }
                    }

                    let pages: Vec<i64> = tokens.iter().filter_map(DisplayToken::page).collect();
                    assert!(pages.windows(2).all(|w| w[0] < w[1]), "not increasing: {ctx}");
                    assert!(pages.iter().all(|p| (1..=last).contains(p)), "out of range: {ctx}");
                    assert_eq!(pages.first(), Some(&1), "{ctx}");
                    assert_eq!(pages.last(), Some(&last), "{ctx}");
                    assert_eq!(
                        pages.contains(&current),
                        (1..=last).contains(&current),
                        "current page presence: {ctx}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_page_window_for() {
    assert_eq!(page_window_for(2, 10, 35, 1, 1).unwrap(), seq(&[1, 2, 3, 4]));
    assert!(page_window_for(1, 10, 0, 1, 3).unwrap().is_empty());
    assert!(matches!(
        page_window_for(1, 0, 10, 1, 3),
        Err(Error::ZeroPageSize)
    ));
}

// ============================================================================
// Page Input Tests
// ============================================================================

#[test_case(None, 1 ; "missing defaults to first page")]
#[test_case(Some(""), 1 ; "empty defaults to first page")]
#[test_case(Some("   "), 1 ; "blank defaults to first page")]
#[test_case(Some("7"), 7 ; "plain number")]
#[test_case(Some(" 12 "), 12 ; "trimmed")]
#[test_case(Some("0"), 0 ; "zero passes through")]
#[test_case(Some("-3"), -3 ; "negative passes through")]
fn test_parse_page(input: Option<&str>, expected: i64) {
    assert_eq!(parse_page(input).unwrap(), expected);
}

#[test_case("abc" ; "letters")]
#[test_case("2.5" ; "fraction")]
#[test_case("3abc" ; "trailing garbage")]
fn test_parse_page_invalid(input: &str) {
    let err = parse_page(Some(input)).unwrap_err();
    assert!(matches!(err, Error::InvalidPage { .. }));
    assert!(err.to_string().contains(input));
}

// ============================================================================
// DisplayToken Tests
// ============================================================================

#[test]
fn test_display_token_display() {
    assert_eq!(DisplayToken::Page(42).to_string(), "42");
    assert_eq!(DisplayToken::Gap.to_string(), "...");
}

#[test]
fn test_display_token_serialize() {
    let value = serde_json::to_value(seq(&[1, 2, GAP, 9])).unwrap();
    assert_eq!(value, json!([1, 2, "...", 9]));
}

// ============================================================================
// Request and Paginator Tests
// ============================================================================

#[test]
fn test_pagination_request() {
    let request = PaginationRequest::new(3, 20, 95);
    assert_eq!(request.last_page().unwrap(), 5);
    assert_eq!(
        request.fetch_spec(),
        FetchSpec {
            offset: 40,
            limit: 20
        }
    );
}

#[test]
fn test_paginator_basics() {
    let paginator = Paginator::new(50, 1000, options(10));

    assert_eq!(paginator.current_page(), 50);
    assert_eq!(paginator.last_page().unwrap(), 100);
    assert_eq!(paginator.template(), "default_paginator");
    assert_eq!(paginator.request().page_size, 10);
    assert_eq!(
        paginator.pages().unwrap(),
        seq(&[1, 2, GAP, 47, 48, 49, 50, 51, 52, 53, GAP, 99, 100])
    );
    assert_eq!(
        paginator.fetch_spec(),
        FetchSpec {
            offset: 490,
            limit: 10
        }
    );
}

#[test]
fn test_render_model() {
    let paginator = Paginator::new(2, 30, options(10));
    let model = paginator.render_model().unwrap();

    assert_eq!(
        model,
        RenderModel {
            current_page: 2,
            last_page: 3,
            pages: seq(&[1, 2, 3]),
            prev_label: "<< Previous".to_string(),
            next_label: "Next >>".to_string(),
            param_name: "page".to_string(),
            html_id: "paginator".to_string(),
            html_class: "paginator".to_string(),
        }
    );
    assert!(model.has_previous());
    assert!(model.has_next());
    assert!(!model.is_empty());
}

#[test]
fn test_render_model_edges() {
    let first = Paginator::new(1, 30, options(10)).render_model().unwrap();
    assert!(!first.has_previous());
    assert!(first.has_next());

    let last = Paginator::new(3, 30, options(10)).render_model().unwrap();
    assert!(last.has_previous());
    assert!(!last.has_next());

    let empty = Paginator::new(1, 0, options(10)).render_model().unwrap();
    assert!(empty.is_empty());
    assert!(!empty.has_previous());
    assert!(!empty.has_next());

    let beyond = Paginator::new(9, 30, options(10)).render_model().unwrap();
    assert!(beyond.has_previous());
    assert!(!beyond.has_next());
    assert_eq!(beyond.pages, seq(&[1, 2, 3]));
}

#[test]
fn test_render_model_serialize() {
    let model = Paginator::new(1, 15, options(10)).render_model().unwrap();
    let value = serde_json::to_value(&model).unwrap();
    assert_eq!(value["pages"], json!([1, 2]));
    assert_eq!(value["param_name"], "page");
    assert_eq!(value["last_page"], 2);
}

#[test]
fn test_paginator_apply_overrides() {
    let mut paginator = Paginator::new(5, 100, options(10));
    paginator.apply_overrides(
        &PaginationOptions::new()
            .with_windows(0, 0)
            .with_param_name("p")
            .with_template("compact")
            .with_per_page(50),
    );

    assert_eq!(paginator.pages().unwrap(), seq(&[1, GAP, 5, GAP, 10]));
    assert_eq!(paginator.template(), "compact");
    assert_eq!(paginator.options().param_name, "p");
    assert_eq!(paginator.request().page_size, 10);
    assert_eq!(paginator.last_page().unwrap(), 10);
}

#[test]
fn test_build_render_model_zero_page_size() {
    let mut resolved = options(10);
    resolved.per_page = 0;
    let request = PaginationRequest::new(1, 0, 10);
    assert!(matches!(
        build_render_model(&request, &resolved),
        Err(Error::ZeroPageSize)
    ));
}
