//! Collection assembly.
//!
//! Posts are discovered in lexicographic path order and displayed newest
//! first by reversing that order. This is NOT a date sort: with the
//! `YYYY-MM-DD-slug.md` naming convention the two coincide, but a post
//! named out of convention keeps its reversed discovery position.

use super::{Collection, Document};

/// Assemble the display collection from documents in discovery order.
///
/// Returns the same documents in exactly reversed order. No document is
/// added, removed or mutated, so `build_collection` applied twice is the
/// identity. The empty sequence maps to the empty collection.
pub fn build_collection(documents: Vec<Document>) -> Collection {
    let mut documents = documents;
    documents.reverse();
    Collection::new(documents)
}
