//! Attribute-backed weighted-set term search.
//!
//! This crate implements the query-plan leaf node for weighted-set term
//! matching against an in-memory attribute (a column-like per-document value
//! store, string-enumerated or integer-typed). The node accumulates terms
//! with weights, maintains a running hit estimate, and at execution time
//! builds one of several interchangeable search-iterator strategies.
//!
//! # Overview
//!
//! The crate is split into two modules:
//!
//! - [`queryeval`]: the uniform search-iterator contract, match-data slot
//!   layout, the plan-node ([`queryeval::Blueprint`]) contract, and the
//!   generic strict weighted-set merge iterator
//! - [`attribute`]: the narrow capability traits over the attribute storage
//!   engine and the weighted-set blueprint built on top of them
//!
//! # Evaluation modes
//!
//! A leaf iterator is created in one of two modes:
//!
//! 1. **Strict**: the iterator enumerates every matching document in
//!    ascending id order, merging per-term posting iterators. Required when
//!    downstream operators consume the full match stream.
//! 2. **Non-strict (filter)**: the iterator is only consulted about candidate
//!    documents supplied from outside. Matching reduces to a single hash
//!    lookup of the document's value token, and a bulk bit-vector
//!    intersection path is available for callers that already hold a
//!    candidate set.

pub mod attribute;
pub mod queryeval;

pub use attribute::WeightedSetAttributeBlueprint;
