pub mod actor_aggregator;
pub mod classifier;
pub mod method_extractor;
pub mod name_normalizer;
pub mod path_resolver;
pub mod promote_inline;
pub mod reachability;
pub mod spec_to_model;
pub mod type_table;

pub use spec_to_model::{TransformOptions, transform, transform_with_options};
