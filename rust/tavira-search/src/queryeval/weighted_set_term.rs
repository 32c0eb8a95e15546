//! Strict merge iterator over weighted per-term children.

use std::fmt;

use crate::queryeval::match_data::{MatchData, MatchPosition, TermFieldHandle};
use crate::queryeval::search_iterator::{DocId, END_ID, SearchIterator};

/// Exhaustive, ordered union of per-term iterators, each carrying the weight
/// of its term.
///
/// Children must be strict. The merge enumerates every document matched by at
/// least one child in ascending id order exactly once. When several children
/// match the same document, the reported weight is the largest among them:
/// children are reordered by descending weight at construction and the first
/// child positioned on the winning document supplies the weight.
pub struct WeightedSetTermSearch {
    children: Vec<Child>,
    handle: TermFieldHandle,
    current: DocId,
    current_weight: i32,
    /// Slot storage the child iterators were laid out against; retained so
    /// their handles stay resolvable for as long as the children live.
    _child_match: MatchData,
}

struct Child {
    search: Box<dyn SearchIterator>,
    weight: i32,
}

impl WeightedSetTermSearch {
    /// Wraps per-term iterators and their index-aligned weights into a
    /// strict union targeting the `handle` slot.
    ///
    /// # Panics
    ///
    /// Panics if `children` and `weights` differ in length.
    pub fn create(
        children: Vec<Box<dyn SearchIterator>>,
        handle: TermFieldHandle,
        weights: &[i32],
        child_match: MatchData,
    ) -> Box<dyn SearchIterator> {
        assert_eq!(children.len(), weights.len());
        let mut children: Vec<Child> = children
            .into_iter()
            .zip(weights.iter().copied())
            .map(|(search, weight)| Child { search, weight })
            .collect();
        children.sort_by_key(|child| std::cmp::Reverse(child.weight));
        // Prime every child onto its first match so that each reported
        // position is a real hit before the first merge step.
        for child in &mut children {
            child.search.seek(0);
        }
        Box::new(WeightedSetTermSearch {
            children,
            handle,
            current: 0,
            current_weight: 0,
            _child_match: child_match,
        })
    }
}

impl SearchIterator for WeightedSetTermSearch {
    fn doc_id(&self) -> DocId {
        self.current
    }

    fn seek(&mut self, doc_id: DocId) -> bool {
        let mut best = END_ID;
        let mut best_weight = 0;
        for child in &mut self.children {
            if child.search.doc_id() < doc_id {
                child.search.seek(doc_id);
            }
            let candidate = child.search.doc_id();
            if candidate < best {
                best = candidate;
                best_weight = child.weight;
            }
        }
        self.current = best;
        self.current_weight = best_weight;
        best == doc_id
    }

    fn unpack(&mut self, doc_id: DocId, match_data: &mut MatchData) {
        let term_field = match_data.term_field_mut(self.handle);
        term_field.reset(doc_id);
        term_field.append_position(MatchPosition::with_element_weight(self.current_weight));
    }
}

impl fmt::Debug for WeightedSetTermSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedSetTermSearch")
            .field("children", &self.children.len())
            .field("doc_id", &self.current)
            .field("weight", &self.current_weight)
            .finish()
    }
}
