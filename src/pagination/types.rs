//! Page query types
//!
//! Parsing of the `page` and `item` query parameters shared by every listing
//! route.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Page requested when `page` is absent or unusable
pub const DEFAULT_PAGE: u32 = 1;

/// Items per page when `item` is absent or unusable
pub const DEFAULT_ITEM: u32 = 40;

/// Query parameter carrying the 1-based page number
pub const PAGE_PARAM: &str = "page";

/// Query parameter carrying the page size
pub const ITEM_PARAM: &str = "item";

/// Result of parsing one numeric query parameter
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedParam {
    /// Parameter not present in the query string
    Missing,
    /// Leading base-10 integer, not yet range checked
    Number(i64),
    /// Present but without leading digits (the not-a-number sentinel)
    NotANumber(String),
}

impl ParsedParam {
    /// Parse raw query text the way `parseInt(text, 10)` reads it
    ///
    /// Leading whitespace and one sign are skipped, then the longest run of
    /// decimal digits is taken and anything after it ignored: `12abc` is 12
    /// and `3.5` is 3. Text with no leading digits is the not-a-number
    /// sentinel. Digit runs beyond `i64` saturate.
    pub fn parse(raw: Option<&str>) -> Self {
        let Some(text) = raw else {
            return Self::Missing;
        };

        let trimmed = text.trim_start();
        let (negative, unsigned) = match trimmed.as_bytes().first() {
            Some(b'-') => (true, &trimmed[1..]),
            Some(b'+') => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };

        let mut value: Option<i64> = None;
        for digit in unsigned.bytes().take_while(u8::is_ascii_digit) {
            let acc = value.unwrap_or(0);
            value = Some(acc.saturating_mul(10).saturating_add(i64::from(digit - b'0')));
        }

        match value {
            Some(n) if negative => Self::Number(-n),
            Some(n) => Self::Number(n),
            None => Self::NotANumber(text.to_string()),
        }
    }

    /// Whether this is the not-a-number sentinel
    pub fn is_nan(&self) -> bool {
        matches!(self, Self::NotANumber(_))
    }

    /// The positive value, if there is one
    pub fn positive(&self) -> Option<u32> {
        match self {
            Self::Number(n) => u32::try_from(*n).ok().filter(|n| *n > 0),
            _ => None,
        }
    }

    /// The positive value, or `default` when missing, malformed, or out of range
    pub fn or_default(&self, default: u32) -> u32 {
        self.positive().unwrap_or(default)
    }

    /// Present but unusable, so the default will be substituted
    pub fn is_rejected(&self) -> bool {
        !matches!(self, Self::Missing) && self.positive().is_none()
    }
}

impl fmt::Display for ParsedParam {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing => f.write_str("<missing>"),
            Self::Number(n) => write!(f, "{n}"),
            Self::NotANumber(_) => f.write_str("NaN"),
        }
    }
}

/// The `page` / `item` pair as found in a navigation URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    pub page: ParsedParam,
    pub item: ParsedParam,
}

impl PageQuery {
    /// Read the parameters from a URL
    ///
    /// When a key repeats, the first occurrence wins.
    pub fn from_url(url: &Url) -> Self {
        let mut page = None;
        let mut item = None;
        for (key, value) in url.query_pairs() {
            match &*key {
                PAGE_PARAM if page.is_none() => page = Some(value),
                ITEM_PARAM if item.is_none() => item = Some(value),
                _ => {}
            }
        }

        Self {
            page: ParsedParam::parse(page.as_deref()),
            item: ParsedParam::parse(item.as_deref()),
        }
    }

    /// Substitute defaults for anything missing or unusable
    pub fn resolve(&self) -> PageRequest {
        PageRequest {
            page: self.page.or_default(DEFAULT_PAGE),
            item: self.item.or_default(DEFAULT_ITEM),
        }
    }
}

/// Validated page request passed to the retrieval capability
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// 1-based page number
    pub page: u32,
    /// Items per page
    pub item: u32,
}

impl PageRequest {
    /// Create a page request
    pub fn new(page: u32, item: u32) -> Self {
        Self { page, item }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            item: DEFAULT_ITEM,
        }
    }
}

impl fmt::Display for PageRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page {} ({} per page)", self.page, self.item)
    }
}
