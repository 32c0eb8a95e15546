//! In-memory fixtures for exercising attribute search: single-valued
//! attribute vectors with deterministic contents and posting-list search
//! contexts with observable side effects.

pub mod attributes;
pub mod contexts;

pub use attributes::{IntegerAttribute, StringEnumAttribute};
pub use contexts::{DropLog, PostingIterator, PostingSearchContext};
