//! Attribute capabilities and the weighted-set attribute blueprint.

pub mod attribute_vector;
pub mod search_context;
pub mod weighted_set_blueprint;

pub use attribute_vector::{AttributeVector, EnumHandle, IntegerRange};
pub use search_context::SearchContext;
pub use weighted_set_blueprint::WeightedSetAttributeBlueprint;
