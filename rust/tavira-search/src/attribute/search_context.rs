//! Per-term search capability over one attribute.

use crate::attribute::attribute_vector::IntegerRange;
use crate::queryeval::match_data::TermFieldHandle;
use crate::queryeval::search_iterator::SearchIterator;

/// The per-term capability a blueprint accumulates: one context per query
/// term, created against a single attribute.
///
/// A context can estimate its hit count, hand out per-term iterators, and
/// materialize posting data on request. It also exposes the raw term so that
/// value-token mapping can be performed against the attribute's
/// representation.
pub trait SearchContext {
    /// Approximate number of documents this term matches.
    fn approximate_hits(&self) -> u32;

    /// Builds an iterator over this term's matches, bound to the given slot.
    fn create_iterator(&self, handle: TermFieldHandle, strict: bool) -> Box<dyn SearchIterator>;

    /// Materializes posting data eagerly. Called ahead of execution modes
    /// that iterate postings rather than probe per document.
    fn fetch_postings(&mut self, strict: bool);

    /// The raw term text.
    fn term_text(&self) -> &str;

    /// The term interpreted as an integer range, when it parses as one.
    fn as_integer_range(&self) -> Option<IntegerRange>;
}
