//! Weighted-set term search over a single attribute.
//!
//! [`WeightedSetAttributeBlueprint`] is the plan node for queries of the form
//! "field matches any of these values, each with a weight". During planning
//! it accumulates one search context per term and keeps a running hit
//! estimate. At execution time it picks one of two strategies:
//!
//! - **Strict**: per-term posting iterators merged by
//!   [`WeightedSetTermSearch`] — exhaustive and ordered, at the cost of
//!   fetching postings for every term.
//! - **Non-strict**: a token filter that maps every term to an integer token
//!   once, then answers each candidate document with a single hash lookup of
//!   the document's own token. Works for single-valued attributes only, but
//!   never touches postings and supports bulk bit-vector intersection.
//!
//! Both the enumerated-string and the integer representation reduce to the
//! same token-keyed algorithm; the representation-specific part is confined
//! to the small token-accessor strategies.

use std::fmt;
use std::sync::Arc;

use ahash::AHashMap;
use tavira_bitset::BitVector;

use crate::attribute::attribute_vector::{AttributeVector, IntegerRange};
use crate::attribute::search_context::SearchContext;
use crate::queryeval::blueprint::{Blueprint, FieldSpec, HitEstimate};
use crate::queryeval::match_data::{MatchData, MatchDataLayout, MatchPosition, TermFieldHandle};
use crate::queryeval::search_iterator::{DocId, SearchIterator};
use crate::queryeval::weighted_set_term::WeightedSetTermSearch;

/// Maps terms and documents to integer tokens for one attribute
/// representation.
///
/// Matching never branches on the representation per document: the filter is
/// generic over the accessor, so each instantiation compiles down to the
/// direct value lookup of its representation.
trait TokenAccessor {
    /// Maps a term to its token. `None` means the term can never match.
    fn map_token(&self, context: &dyn SearchContext) -> Option<i64>;

    /// The document's own value as a token.
    fn get_token(&self, doc_id: DocId) -> i64;
}

/// Token accessor for string attributes with an enumeration dictionary: the
/// enumeration handle is the token, so match time does no string comparison.
struct StringEnumTokens {
    attribute: Arc<dyn AttributeVector>,
}

impl TokenAccessor for StringEnumTokens {
    fn map_token(&self, context: &dyn SearchContext) -> Option<i64> {
        self.attribute
            .find_enum(context.term_text())
            .map(i64::from)
    }

    fn get_token(&self, doc_id: DocId) -> i64 {
        i64::from(self.attribute.get_enum(doc_id))
    }
}

/// Token accessor for integer attributes: the value itself is the token.
/// Only point ranges (equality terms) map; open ranges cannot be expressed
/// as a single token.
struct IntegerTokens {
    attribute: Arc<dyn AttributeVector>,
}

impl TokenAccessor for IntegerTokens {
    fn map_token(&self, context: &dyn SearchContext) -> Option<i64> {
        context
            .as_integer_range()
            .filter(IntegerRange::is_point)
            .map(|range| range.lower())
    }

    fn get_token(&self, doc_id: DocId) -> i64 {
        self.attribute.get_int(doc_id)
    }
}

/// Non-strict filter iterator over a token→weight mapping.
///
/// The mapping is built once at construction from all (term, weight) pairs
/// in order: terms that fail to map are dropped — they can never match — and
/// when two terms map to the same token the later-added weight wins. After
/// construction the mapping is immutable.
struct AttributeFilter<T: TokenAccessor> {
    handle: TermFieldHandle,
    tokens: T,
    map: AHashMap<i64, i32>,
    weight: i32,
    current: DocId,
}

impl<T: TokenAccessor> AttributeFilter<T> {
    fn new(
        handle: TermFieldHandle,
        tokens: T,
        weights: &[i32],
        contexts: &[Box<dyn SearchContext>],
    ) -> AttributeFilter<T> {
        let mut map = AHashMap::with_capacity(contexts.len());
        for (context, &weight) in contexts.iter().zip(weights) {
            if let Some(token) = tokens.map_token(context.as_ref()) {
                map.insert(token, weight);
            }
        }
        AttributeFilter {
            handle,
            tokens,
            map,
            weight: 0,
            current: 0,
        }
    }
}

impl<T: TokenAccessor> SearchIterator for AttributeFilter<T> {
    fn doc_id(&self) -> DocId {
        self.current
    }

    fn seek(&mut self, doc_id: DocId) -> bool {
        match self.map.get(&self.tokens.get_token(doc_id)) {
            Some(&weight) => {
                self.weight = weight;
                self.current = doc_id;
                true
            }
            None => false,
        }
    }

    fn unpack(&mut self, doc_id: DocId, match_data: &mut MatchData) {
        let term_field = match_data.term_field_mut(self.handle);
        term_field.reset(doc_id);
        term_field.append_position(MatchPosition::with_element_weight(self.weight));
    }

    fn and_hits_into(&mut self, result: &mut BitVector, begin_id: DocId) {
        let map = &self.map;
        let tokens = &self.tokens;
        result.retain_from(begin_id as usize, |position| {
            map.contains_key(&tokens.get_token(position as DocId))
        });
    }
}

impl<T: TokenAccessor> fmt::Debug for AttributeFilter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttributeFilter")
            .field("mapped_tokens", &self.map.len())
            .field("doc_id", &self.current)
            .field("weight", &self.weight)
            .finish()
    }
}

/// Plan node for weighted-set term search against one attribute.
///
/// The node exclusively owns the search contexts added to it; they are
/// released exactly once, in the order they were added, when the node drops
/// — regardless of how many terms were added or whether an iterator was ever
/// created.
pub struct WeightedSetAttributeBlueprint {
    field: FieldSpec,
    attribute: Arc<dyn AttributeVector>,
    num_docs: u32,
    est_hits: u32,
    weights: Vec<i32>,
    contexts: Vec<Box<dyn SearchContext>>,
}

impl WeightedSetAttributeBlueprint {
    /// Creates an empty node over `attribute`. The node advertises termwise
    /// (bulk) evaluation from the start, since its filter strategy supports
    /// bit-vector intersection.
    pub fn new(field: FieldSpec, attribute: Arc<dyn AttributeVector>) -> WeightedSetAttributeBlueprint {
        let num_docs = attribute.num_docs();
        WeightedSetAttributeBlueprint {
            field,
            attribute,
            num_docs,
            est_hits: 0,
            weights: Vec::new(),
            contexts: Vec::new(),
        }
    }

    /// Adds one term: the context is exclusively transferred to the node and
    /// `weight` is appended index-aligned with it. The running hit estimate
    /// grows by the context's approximate hits, clamped to the attribute's
    /// document count.
    pub fn add_term(&mut self, context: Box<dyn SearchContext>, weight: i32) {
        self.est_hits = self
            .est_hits
            .saturating_add(context.approximate_hits())
            .min(self.num_docs);
        self.weights.push(weight);
        self.contexts.push(context);
    }
}

impl Blueprint for WeightedSetAttributeBlueprint {
    fn field(&self) -> &FieldSpec {
        &self.field
    }

    fn estimate(&self) -> HitEstimate {
        HitEstimate::new(self.est_hits)
    }

    fn allows_termwise_eval(&self) -> bool {
        true
    }

    fn fetch_postings(&mut self, strict: bool) {
        // The filter strategy matches by direct value lookup; only the
        // strict merge iterates postings.
        if strict {
            for context in &mut self.contexts {
                context.fetch_postings(true);
            }
        }
    }

    /// # Panics
    ///
    /// Panics if more than one match-data slot is supplied, or — on the
    /// non-strict path — if the attribute is multi-valued or neither
    /// enumerated-string nor integer-typed. These are planner bugs, not data
    /// conditions.
    fn create_leaf_search(
        &self,
        handles: &[TermFieldHandle],
        strict: bool,
    ) -> Box<dyn SearchIterator> {
        assert_eq!(handles.len(), 1, "weighted-set node searches a single field");
        let handle = handles[0];
        if strict {
            let mut layout = MatchDataLayout::new();
            let child_handle = layout.alloc_term_field(self.field.field_id());
            let child_match = layout.create_match_data();
            let children = self
                .contexts
                .iter()
                .map(|context| context.create_iterator(child_handle, true))
                .collect();
            WeightedSetTermSearch::create(children, handle, &self.weights, child_match)
        } else {
            assert!(
                !self.attribute.has_multi_value(),
                "attribute filter requires a single-valued attribute"
            );
            if self.attribute.is_string_type() && self.attribute.has_enum() {
                Box::new(AttributeFilter::new(
                    handle,
                    StringEnumTokens {
                        attribute: Arc::clone(&self.attribute),
                    },
                    &self.weights,
                    &self.contexts,
                ))
            } else {
                assert!(
                    self.attribute.is_integer_type(),
                    "attribute filter requires an enumerated-string or integer attribute"
                );
                Box::new(AttributeFilter::new(
                    handle,
                    IntegerTokens {
                        attribute: Arc::clone(&self.attribute),
                    },
                    &self.weights,
                    &self.contexts,
                ))
            }
        }
    }
}
