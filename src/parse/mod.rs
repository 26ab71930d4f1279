//! HTML parsing and meta tag extraction.
//!
//! Produces the `MetaTagSet` the scoring engine consumes. All lookups are done
//! with CSS selectors via the `scraper` crate; every value is trimmed and empty
//! values are dropped, so the engine never sees "present but empty".

mod meta;

pub use meta::{extract_meta_tags, parse_meta_tags};
