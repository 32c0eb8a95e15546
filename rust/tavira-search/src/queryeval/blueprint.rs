//! The query-plan leaf-node contract.

use std::sync::Arc;

use crate::queryeval::match_data::TermFieldHandle;
use crate::queryeval::search_iterator::SearchIterator;

/// Identifies the logical field a plan node searches.
#[derive(Debug, Clone)]
pub struct FieldSpec {
    name: Arc<str>,
    field_id: u32,
}

impl FieldSpec {
    pub fn new(name: impl Into<Arc<str>>, field_id: u32) -> FieldSpec {
        FieldSpec {
            name: name.into(),
            field_id,
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn field_id(&self) -> u32 {
        self.field_id
    }
}

/// Estimated result cardinality of a plan node.
///
/// `empty` marks nodes the planner may prune: an estimate of zero means the
/// node cannot match any document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitEstimate {
    pub hits: u32,
    pub empty: bool,
}

impl HitEstimate {
    pub fn new(hits: u32) -> HitEstimate {
        HitEstimate {
            hits,
            empty: hits == 0,
        }
    }
}

/// A leaf node of the query plan: estimates cost during planning and builds
/// an executable iterator at execution time.
///
/// Lifecycle: a blueprint is created once per plan compile, mutated while
/// the planner adds terms, consulted once for posting prefetch and once for
/// iterator creation, and outlives the iterators it creates for the duration
/// of one query execution.
pub trait Blueprint {
    /// The field this node searches.
    fn field(&self) -> &FieldSpec;

    /// Current result-cardinality estimate.
    fn estimate(&self) -> HitEstimate;

    /// Whether the node's iterators support the bulk bit-vector intersection
    /// path ([`SearchIterator::and_hits_into`]) as a first-class strategy.
    fn allows_termwise_eval(&self) -> bool {
        false
    }

    /// Materializes posting data ahead of execution where the chosen
    /// evaluation mode requires it. No-op for modes that match by direct
    /// per-document lookup.
    fn fetch_postings(&mut self, strict: bool);

    /// Builds the leaf iterator for the given evaluation mode, wired to the
    /// supplied match-data slots.
    fn create_leaf_search(
        &self,
        handles: &[TermFieldHandle],
        strict: bool,
    ) -> Box<dyn SearchIterator>;
}
