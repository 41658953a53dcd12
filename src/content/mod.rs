//! Post collection assembly and display filters.
//!
//! This module holds the content pipeline core:
//!
//! - **collection**: reverse-discovery-order post collections
//! - **filters**: pure display filters (date, reading time, URL prefix)
//! - **source**: loading posts from the input directory
//!
//! All filter logic is exported as independently-callable pure functions;
//! framework wiring lives in [`crate::registry`].

pub mod collection;
pub mod filters;
pub mod source;

pub use collection::build_collection;

use crate::utils::date::DateTimeUtc;
use serde::Serialize;

/// A single blog post, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Raw body text (may be empty)
    pub body: String,

    /// Publication date from front matter
    pub publish_date: DateTimeUtc,

    /// Site-relative location (e.g., "/posts/hello-world/")
    pub path: String,

    /// Post title from front matter
    pub title: Option<String>,
}

/// Read-only projection of a [`Document`] plus derived display fields.
///
/// Created per build, serialized to `_data/posts.json` for the host
/// templating layer, never persisted beyond that.
#[derive(Debug, Clone, Serialize)]
pub struct DocumentView {
    /// Site-relative path
    pub path: String,

    /// Prefixed URL for internal links
    pub url: String,

    /// Post title
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Publication date as ISO 8601 string (e.g., "2024-03-05")
    pub date: String,

    /// Locale long-form date (e.g., "5 марта 2024 г.")
    pub date_display: String,

    /// Reading-time label (e.g., "3 мин")
    pub reading_time: String,
}

/// An ordered sequence of documents exposed to templates for iteration.
///
/// Ordering is the deterministic reversal of discovery order; see
/// [`collection::build_collection`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Collection {
    documents: Vec<Document>,
}

impl Collection {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Document> {
        self.documents.iter()
    }

    pub const fn len(&self) -> usize {
        self.documents.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Consume the collection, yielding the ordered documents
    pub fn into_documents(self) -> Vec<Document> {
        self.documents
    }
}

impl IntoIterator for Collection {
    type Item = Document;
    type IntoIter = std::vec::IntoIter<Document>;

    fn into_iter(self) -> Self::IntoIter {
        self.documents.into_iter()
    }
}
