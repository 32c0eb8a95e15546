//! Per-term match-data slots and their layout.
//!
//! Query execution communicates match details through preallocated slots: at
//! plan time each term field allocates a [`TermFieldHandle`] in a
//! [`MatchDataLayout`], and at execution time the layout is instantiated into
//! a [`MatchData`] owned by the evaluation driver. Iterators carry handles,
//! never references, so slot storage stays exclusively with the driver.

use crate::queryeval::search_iterator::DocId;

/// A single occurrence entry within a matched document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatchPosition {
    element_weight: i32,
}

impl MatchPosition {
    pub fn new() -> MatchPosition {
        MatchPosition::default()
    }

    pub fn with_element_weight(element_weight: i32) -> MatchPosition {
        MatchPosition { element_weight }
    }

    #[inline]
    pub fn element_weight(&self) -> i32 {
        self.element_weight
    }
}

/// Match details of one term field for the most recently unpacked document.
#[derive(Debug, Clone)]
pub struct TermFieldMatchData {
    field_id: u32,
    doc_id: DocId,
    positions: Vec<MatchPosition>,
}

impl TermFieldMatchData {
    fn new(field_id: u32) -> TermFieldMatchData {
        TermFieldMatchData {
            field_id,
            doc_id: 0,
            positions: Vec::new(),
        }
    }

    #[inline]
    pub fn field_id(&self) -> u32 {
        self.field_id
    }

    /// The document the recorded positions belong to; `0` until the first
    /// [`reset`](TermFieldMatchData::reset).
    #[inline]
    pub fn doc_id(&self) -> DocId {
        self.doc_id
    }

    /// Stamps the slot with `doc_id` and discards previously recorded
    /// positions.
    pub fn reset(&mut self, doc_id: DocId) {
        self.doc_id = doc_id;
        self.positions.clear();
    }

    pub fn append_position(&mut self, position: MatchPosition) {
        self.positions.push(position);
    }

    #[inline]
    pub fn positions(&self) -> &[MatchPosition] {
        &self.positions
    }
}

/// Opaque reference to a term-field slot allocated in a [`MatchDataLayout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TermFieldHandle(usize);

/// Plan-time registry of term-field slots.
#[derive(Debug, Default)]
pub struct MatchDataLayout {
    field_ids: Vec<u32>,
}

impl MatchDataLayout {
    pub fn new() -> MatchDataLayout {
        MatchDataLayout::default()
    }

    /// Allocates a slot for a term occurrence in the given field and returns
    /// its handle.
    pub fn alloc_term_field(&mut self, field_id: u32) -> TermFieldHandle {
        self.field_ids.push(field_id);
        TermFieldHandle(self.field_ids.len() - 1)
    }

    /// Instantiates the layout into slot storage.
    pub fn create_match_data(&self) -> MatchData {
        MatchData {
            term_fields: self
                .field_ids
                .iter()
                .map(|&field_id| TermFieldMatchData::new(field_id))
                .collect(),
        }
    }
}

/// Slot storage created from a [`MatchDataLayout`], owned by the evaluation
/// driver and handed to iterators at unpack time.
#[derive(Debug)]
pub struct MatchData {
    term_fields: Vec<TermFieldMatchData>,
}

impl MatchData {
    /// Resolves a handle to its slot.
    ///
    /// # Panics
    ///
    /// Panics if the handle was allocated in a different layout.
    #[inline]
    pub fn term_field(&self, handle: TermFieldHandle) -> &TermFieldMatchData {
        &self.term_fields[handle.0]
    }

    #[inline]
    pub fn term_field_mut(&mut self, handle: TermFieldHandle) -> &mut TermFieldMatchData {
        &mut self.term_fields[handle.0]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_allocates_distinct_slots() {
        let mut layout = MatchDataLayout::new();
        let first = layout.alloc_term_field(7);
        let second = layout.alloc_term_field(7);
        assert_ne!(first, second);

        let mut match_data = layout.create_match_data();
        assert_eq!(match_data.term_field(first).field_id(), 7);

        match_data.term_field_mut(first).reset(12);
        match_data
            .term_field_mut(first)
            .append_position(MatchPosition::with_element_weight(42));
        assert_eq!(match_data.term_field(first).doc_id(), 12);
        assert_eq!(match_data.term_field(second).doc_id(), 0);
    }

    #[test]
    fn test_reset_discards_positions() {
        let mut layout = MatchDataLayout::new();
        let handle = layout.alloc_term_field(1);
        let mut match_data = layout.create_match_data();

        let slot = match_data.term_field_mut(handle);
        slot.reset(3);
        slot.append_position(MatchPosition::with_element_weight(10));
        slot.append_position(MatchPosition::with_element_weight(20));
        assert_eq!(slot.positions().len(), 2);

        slot.reset(4);
        assert!(slot.positions().is_empty());
        assert_eq!(slot.doc_id(), 4);
    }
}
