//! Pagination module
//!
//! Parses the `page` / `item` query parameters of listing URLs.
//!
//! # Overview
//!
//! Parsing happens in two steps. [`PageQuery::from_url`] records what the URL
//! actually contained, keeping malformed text as the not-a-number sentinel.
//! [`PageQuery::resolve`] then produces a [`PageRequest`], substituting the
//! defaults (page 1, 40 items) for anything missing or unusable.

mod types;

pub use types::{
    PageQuery, PageRequest, ParsedParam, DEFAULT_ITEM, DEFAULT_PAGE, ITEM_PARAM, PAGE_PARAM,
};

#[cfg(test)]
mod tests;
