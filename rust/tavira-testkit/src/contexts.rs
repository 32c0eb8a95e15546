//! Posting-list search contexts with observable side effects.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use tavira_common::{Result, verify_arg};
use tavira_search::attribute::{IntegerRange, SearchContext};
use tavira_search::queryeval::{
    DocId, END_ID, MatchData, MatchPosition, SearchIterator, TermFieldHandle,
};

use crate::attributes::{IntegerAttribute, StringEnumAttribute};

/// Shared log of context release order, recorded at drop time.
pub type DropLog = Rc<RefCell<Vec<String>>>;

/// Fixture term context backed by an explicit sorted posting list.
///
/// The context reports its posting count as the hit estimate (overridable
/// with [`with_approximate_hits`](PostingSearchContext::with_approximate_hits)),
/// hands out [`PostingIterator`]s over the list, and records whether
/// postings were fetched so tests can observe prefetch decisions.
pub struct PostingSearchContext {
    term: String,
    postings: Rc<[DocId]>,
    approximate_hits: Option<u32>,
    fetched: Rc<Cell<bool>>,
    drop_log: Option<DropLog>,
}

impl PostingSearchContext {
    /// Creates a context for `term` matching exactly `postings`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `postings` is strictly increasing.
    pub fn new(term: impl Into<String>, postings: Vec<DocId>) -> Result<PostingSearchContext> {
        verify_arg!(postings, postings.windows(2).all(|pair| pair[0] < pair[1]));
        Ok(Self::from_sorted(term.into(), postings))
    }

    /// Creates a context for a string term, deriving postings by scanning
    /// the fixture attribute. Unknown values yield an empty posting list.
    pub fn for_string_value(attribute: &StringEnumAttribute, value: &str) -> PostingSearchContext {
        Self::from_sorted(value.to_string(), attribute.docs_with_value(value))
    }

    /// Creates a context for an integer term, deriving postings by scanning
    /// the fixture attribute.
    pub fn for_integer_value(attribute: &IntegerAttribute, value: i64) -> PostingSearchContext {
        Self::from_sorted(value.to_string(), attribute.docs_with_value(value))
    }

    fn from_sorted(term: String, postings: Vec<DocId>) -> PostingSearchContext {
        PostingSearchContext {
            term,
            postings: postings.into(),
            approximate_hits: None,
            fetched: Rc::new(Cell::new(false)),
            drop_log: None,
        }
    }

    /// Overrides the reported hit estimate.
    pub fn with_approximate_hits(mut self, hits: u32) -> PostingSearchContext {
        self.approximate_hits = Some(hits);
        self
    }

    /// Registers a shared log this context appends its term to when dropped.
    pub fn with_drop_log(mut self, log: DropLog) -> PostingSearchContext {
        self.drop_log = Some(log);
        self
    }

    /// Shared flag set once postings have been fetched.
    pub fn fetch_flag(&self) -> Rc<Cell<bool>> {
        Rc::clone(&self.fetched)
    }
}

impl SearchContext for PostingSearchContext {
    fn approximate_hits(&self) -> u32 {
        self.approximate_hits
            .unwrap_or(self.postings.len() as u32)
    }

    fn create_iterator(&self, handle: TermFieldHandle, strict: bool) -> Box<dyn SearchIterator> {
        Box::new(PostingIterator {
            postings: Rc::clone(&self.postings),
            cursor: 0,
            strict,
            handle,
            current: 0,
        })
    }

    fn fetch_postings(&mut self, strict: bool) {
        if strict {
            self.fetched.set(true);
        }
    }

    fn term_text(&self) -> &str {
        &self.term
    }

    fn as_integer_range(&self) -> Option<IntegerRange> {
        IntegerRange::parse(&self.term).ok()
    }
}

impl Drop for PostingSearchContext {
    fn drop(&mut self) {
        if let Some(log) = &self.drop_log {
            log.borrow_mut().push(self.term.clone());
        }
    }
}

/// Iterator over a sorted posting list supporting both evaluation modes: a
/// forward cursor when strict, a membership probe when not.
#[derive(Debug)]
pub struct PostingIterator {
    postings: Rc<[DocId]>,
    cursor: usize,
    strict: bool,
    handle: TermFieldHandle,
    current: DocId,
}

impl SearchIterator for PostingIterator {
    fn doc_id(&self) -> DocId {
        self.current
    }

    fn seek(&mut self, doc_id: DocId) -> bool {
        if self.strict {
            while self.cursor < self.postings.len() && self.postings[self.cursor] < doc_id {
                self.cursor += 1;
            }
            self.current = self.postings.get(self.cursor).copied().unwrap_or(END_ID);
            self.current == doc_id
        } else if self.postings.binary_search(&doc_id).is_ok() {
            self.current = doc_id;
            true
        } else {
            false
        }
    }

    fn unpack(&mut self, doc_id: DocId, match_data: &mut MatchData) {
        let term_field = match_data.term_field_mut(self.handle);
        term_field.reset(doc_id);
        term_field.append_position(MatchPosition::new());
    }
}
