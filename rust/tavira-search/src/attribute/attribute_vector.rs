//! The narrow capability interface over the attribute storage engine.

use tavira_common::error::Error;
use tavira_common::{Result, verify_arg};

use crate::queryeval::search_iterator::DocId;

/// Handle of a value in a string attribute's enumeration dictionary.
pub type EnumHandle = u32;

/// A closed interval of 64-bit integers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntegerRange {
    lower: i64,
    upper: i64,
}

impl IntegerRange {
    pub fn new(lower: i64, upper: i64) -> IntegerRange {
        IntegerRange { lower, upper }
    }

    /// The degenerate range containing exactly `value`.
    pub fn point(value: i64) -> IntegerRange {
        IntegerRange {
            lower: value,
            upper: value,
        }
    }

    #[inline]
    pub fn lower(&self) -> i64 {
        self.lower
    }

    #[inline]
    pub fn upper(&self) -> i64 {
        self.upper
    }

    /// True iff the range contains a single value.
    #[inline]
    pub fn is_point(&self) -> bool {
        self.lower == self.upper
    }

    /// Parses a term as an integer range. A plain integer literal yields a
    /// point range; anything else is rejected.
    pub fn parse(text: &str) -> Result<IntegerRange> {
        verify_arg!(text, !text.trim().is_empty());
        let value = text
            .trim()
            .parse::<i64>()
            .map_err(|_| Error::invalid_arg("text", format!("not an integer term: '{text}'")))?;
        Ok(IntegerRange::point(value))
    }
}

/// Read-only, per-document value access to one attribute.
///
/// This is the boundary to the attribute storage engine: enumeration
/// dictionaries, per-document value arrays and posting structures live behind
/// it. Implementations must support concurrent read-only access, since
/// concurrent queries share one attribute via `Arc`.
///
/// The value accessors default to the undefined value so that a concrete
/// attribute only implements the accessors of its own representation; callers
/// are expected to consult the type predicates first.
pub trait AttributeVector: Send + Sync + 'static {
    /// Number of documents covered by this attribute; document ids run in
    /// `[0, num_docs)`.
    fn num_docs(&self) -> u32;

    /// True when documents may hold more than one value.
    fn has_multi_value(&self) -> bool;

    fn is_string_type(&self) -> bool;

    /// True when string values are stored via an enumeration dictionary.
    fn has_enum(&self) -> bool;

    fn is_integer_type(&self) -> bool;

    /// Looks up a value in the enumeration dictionary.
    fn find_enum(&self, value: &str) -> Option<EnumHandle> {
        let _ = value;
        None
    }

    /// The document's enumeration handle.
    fn get_enum(&self, doc_id: DocId) -> EnumHandle {
        let _ = doc_id;
        0
    }

    /// The document's integer value.
    fn get_int(&self, doc_id: DocId) -> i64 {
        let _ = doc_id;
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let range = IntegerRange::parse("42").unwrap();
        assert!(range.is_point());
        assert_eq!(range.lower(), 42);

        let range = IntegerRange::parse(" -7 ").unwrap();
        assert_eq!(range.lower(), -7);
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        assert!(IntegerRange::parse("").is_err());
        assert!(IntegerRange::parse("  ").is_err());
        assert!(IntegerRange::parse("fast").is_err());
        assert!(IntegerRange::parse("1.5").is_err());
    }

    #[test]
    fn test_is_point() {
        assert!(IntegerRange::point(3).is_point());
        assert!(!IntegerRange::new(3, 4).is_point());
    }
}
