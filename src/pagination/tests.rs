//! Tests for page query parsing

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;
use url::Url;

fn query(url: &str) -> PageQuery {
    PageQuery::from_url(&Url::parse(url).unwrap())
}

#[test]
fn test_no_parameters_resolve_to_defaults() {
    let parsed = query("http://localhost/albums");

    assert_eq!(parsed.page, ParsedParam::Missing);
    assert_eq!(parsed.item, ParsedParam::Missing);
    assert_eq!(parsed.resolve(), PageRequest::new(1, 40));
    assert_eq!(parsed.resolve(), PageRequest::default());
}

#[test]
fn test_explicit_parameters_are_used() {
    let parsed = query("http://localhost/albums?page=3&item=20");

    assert_eq!(parsed.page, ParsedParam::Number(3));
    assert_eq!(parsed.item, ParsedParam::Number(20));
    assert_eq!(parsed.resolve(), PageRequest::new(3, 20));
}

#[test]
fn test_non_numeric_page_is_nan_sentinel() {
    let parsed = query("http://localhost/albums?page=abc");

    assert!(parsed.page.is_nan());
    assert_eq!(parsed.page, ParsedParam::NotANumber("abc".to_string()));
    assert_eq!(parsed.page.to_string(), "NaN");
    assert!(parsed.page.is_rejected());
}

#[test]
fn test_nan_falls_back_to_default_on_resolve() {
    let parsed = query("http://localhost/albums?page=abc&item=xyz");
    assert_eq!(parsed.resolve(), PageRequest::new(DEFAULT_PAGE, DEFAULT_ITEM));
}

#[test]
fn test_first_occurrence_wins() {
    let parsed = query("http://localhost/albums?page=2&page=9&item=5");
    assert_eq!(parsed.resolve(), PageRequest::new(2, 5));
}

#[test]
fn test_unrelated_parameters_are_ignored() {
    let parsed = query("http://localhost/albums?sort=year&item=12");
    assert_eq!(parsed.page, ParsedParam::Missing);
    assert_eq!(parsed.resolve(), PageRequest::new(1, 12));
}

#[test]
fn test_percent_encoded_values_are_decoded() {
    let parsed = query("http://localhost/albums?page=%204%20");
    assert_eq!(parsed.page, ParsedParam::Number(4));
}

#[test_case(None, 7 ; "missing uses default")]
#[test_case(Some("12"), 12 ; "plain number")]
#[test_case(Some(" 12 "), 12 ; "whitespace is trimmed")]
#[test_case(Some("+5"), 5 ; "leading plus")]
#[test_case(Some("12abc"), 12 ; "trailing text is ignored")]
#[test_case(Some("3.5"), 3 ; "fraction is truncated")]
#[test_case(Some("1e3"), 1 ; "exponent is not read")]
#[test_case(Some("0"), 7 ; "zero is rejected")]
#[test_case(Some("0x10"), 7 ; "hex prefix reads as zero")]
#[test_case(Some("-3"), 7 ; "negative is rejected")]
#[test_case(Some("abc"), 7 ; "no digits is rejected")]
#[test_case(Some(""), 7 ; "empty is rejected")]
#[test_case(Some("-"), 7 ; "lone sign is rejected")]
#[test_case(Some("4294967296"), 7 ; "above u32 is rejected")]
#[test_case(Some("99999999999999999999"), 7 ; "above i64 is rejected")]
fn test_or_default(raw: Option<&str>, expected: u32) {
    assert_eq!(ParsedParam::parse(raw).or_default(7), expected);
}

#[test_case("12abc", 12 ; "digits then letters")]
#[test_case("3.5", 3 ; "decimal point")]
#[test_case("  -8px", -8 ; "sign and suffix")]
#[test_case("99999999999999999999", i64::MAX ; "saturates")]
fn test_leading_digits_are_a_number(raw: &str, expected: i64) {
    let parsed = ParsedParam::parse(Some(raw));
    assert!(!parsed.is_nan());
    assert_eq!(parsed, ParsedParam::Number(expected));
}

#[test_case("abc" ; "letters")]
#[test_case("" ; "empty")]
#[test_case("   " ; "blank")]
#[test_case("+" ; "sign only")]
#[test_case(".5" ; "leading point")]
fn test_no_leading_digits_is_nan(raw: &str) {
    assert!(ParsedParam::parse(Some(raw)).is_nan());
}

#[test]
fn test_prefix_query_values_are_requested() {
    let parsed = query("http://localhost/albums?page=12abc&item=3.5");
    assert_eq!(parsed.resolve(), PageRequest::new(12, 3));
}

#[test]
fn test_rejected_distinguishes_missing() {
    assert!(!ParsedParam::Missing.is_rejected());
    assert!(!ParsedParam::Number(1).is_rejected());
    assert!(ParsedParam::Number(0).is_rejected());
    assert!(ParsedParam::parse(Some("x")).is_rejected());
}

#[test]
fn test_page_request_display() {
    assert_eq!(PageRequest::new(2, 40).to_string(), "page 2 (40 per page)");
}
