//! The uniform search-iterator contract produced by plan nodes.

use std::fmt;

use tavira_bitset::BitVector;

use crate::queryeval::match_data::MatchData;

/// Identifier of a document within an attribute's domain `[0, num_docs)`.
pub type DocId = u32;

/// Sentinel position reported by an exhausted strict iterator.
pub const END_ID: DocId = DocId::MAX;

/// An object that answers per-document match queries and, in strict mode,
/// enumerates matching document ids in ascending order.
///
/// Iterators come in two flavors distinguished at construction time:
///
/// - **Strict** iterators position themselves on the first match at or after
///   the seek target; repeated seeks with increasing targets enumerate every
///   match exactly once, ending at [`END_ID`].
/// - **Non-strict** iterators only answer membership for the exact seek
///   target and keep their position on a miss. An outer operator supplies the
///   candidate documents.
///
/// Seek targets must be non-decreasing across calls; iterators never move
/// backwards. Debug formatting serves as the introspection surface for
/// tooling and carries no behavioral contract.
pub trait SearchIterator: fmt::Debug {
    /// Returns the current position. Non-strict iterators report `0` until
    /// their first successful seek; strict iterators report the first match
    /// at or after the last seek target, or [`END_ID`] once exhausted.
    fn doc_id(&self) -> DocId;

    /// Advances to `doc_id`. Returns true iff the iterator is positioned
    /// exactly on `doc_id` afterwards.
    ///
    /// A miss is a normal outcome, not an error: most candidate documents do
    /// not match.
    fn seek(&mut self, doc_id: DocId) -> bool;

    /// Publishes match details for `doc_id` into the caller-owned match
    /// data.
    ///
    /// Only meaningful after a successful seek of the same `doc_id`; the
    /// result of unpacking any other document is unspecified (caller
    /// discipline, not validated at runtime).
    fn unpack(&mut self, doc_id: DocId, match_data: &mut MatchData);

    /// Bulk intersection fast path: clears every set bit at `>= begin_id`
    /// whose document does not match. Bits below `begin_id` are left
    /// untouched.
    fn and_hits_into(&mut self, result: &mut BitVector, begin_id: DocId) {
        result.retain_from(begin_id as usize, |position| self.seek(position as DocId));
    }
}
