//! Item filter engine
//!
//! Maps a document and a [`FilterQuery`] to the ordered list of visible items.
//! Filtering is pure: it never touches the document, and the output is always
//! a subsequence of `document.items` in document order.
//!
//! Search matches the trimmed, lowercased query as a substring of any of:
//! - the item name
//! - the login username (items without one never match on it)
//! - the host of the first login uri, or its first 30 characters when it is
//!   not an absolute URL (items without uris never match on it)

pub mod query;

pub use query::{FilterQuery, FolderSelector, TypeSelector};

use crate::export::{Document, Item};
use url::Url;

/// Longest prefix of a non-URL uri shown and searched as its "host"
pub const RAW_URI_PREFIX_LEN: usize = 30;

/// Items of `document` that pass `query`, in document order
#[must_use]
pub fn filter<'a>(document: &'a Document, query: &FilterQuery) -> Vec<&'a Item> {
    document.items.iter().matching(query)
}

/// Does a single item pass the query
#[must_use]
pub fn matches(item: &Item, query: &FilterQuery) -> bool {
    if !query.folder.matches(item) || !query.kind.matches(item) {
        return false;
    }

    match query.needle() {
        None => true,
        Some(needle) => matches_search(item, &needle),
    }
}

fn matches_search(item: &Item, needle: &str) -> bool {
    item.name().to_lowercase().contains(needle)
        || username(item).is_some_and(|name| name.to_lowercase().contains(needle))
        || primary_host(item).is_some_and(|host| host.to_lowercase().contains(needle))
}

/// Username used for display and search
#[must_use]
pub fn username(item: &Item) -> Option<&str> {
    item.username()
}

/// Host derived from the first login uri
///
/// Absolute URLs yield their host (empty for host-less URLs such as
/// `mailto:`); anything else yields its first 30 characters.
#[must_use]
pub fn primary_host(item: &Item) -> Option<String> {
    let raw = item.primary_uri()?;
    let host = match Url::parse(raw) {
        Ok(url) => url.host_str().unwrap_or_default().to_string(),
        Err(_) => raw.chars().take(RAW_URI_PREFIX_LEN).collect(),
    };
    Some(host)
}

/// Extension trait adding query filtering to iterators of item references
pub trait ItemFilterExt<'a>: Iterator<Item = &'a Item> + Sized {
    /// Keep the items passing `query`, preserving order
    fn matching(self, query: &FilterQuery) -> Vec<&'a Item> {
        self.filter(|item| matches(item, query)).collect()
    }
}

impl<'a, I> ItemFilterExt<'a> for I where I: Iterator<Item = &'a Item> {}
