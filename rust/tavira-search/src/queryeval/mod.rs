//! Query evaluation primitives: iterator contract, match data, plan nodes.

pub mod blueprint;
pub mod match_data;
pub mod search_iterator;
pub mod weighted_set_term;

pub use blueprint::{Blueprint, FieldSpec, HitEstimate};
pub use match_data::{MatchData, MatchDataLayout, MatchPosition, TermFieldHandle, TermFieldMatchData};
pub use search_iterator::{DocId, END_ID, SearchIterator};
pub use weighted_set_term::WeightedSetTermSearch;
