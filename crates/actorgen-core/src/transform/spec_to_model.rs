use crate::config::Propagation;
use crate::error::TransformError;
use crate::ir::GenerationModel;
use crate::parse::document::OpenApiSpec;
use crate::parse::ref_resolve::ComponentIndex;

use super::actor_aggregator::build_actors;
use super::reachability::attribute_types;
use super::type_table::build_type_table;

/// Options controlling type discovery and attribution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransformOptions {
    pub propagation: Propagation,
    /// Turn inline string enums on struct properties into named enums.
    pub promote_inline_enums: bool,
}

/// Transform a parsed OpenAPI document into the generation model.
pub fn transform(spec: &OpenApiSpec) -> Result<GenerationModel, TransformError> {
    transform_with_options(spec, &TransformOptions::default())
}

/// Transform with explicit options.
pub fn transform_with_options(
    spec: &OpenApiSpec,
    options: &TransformOptions,
) -> Result<GenerationModel, TransformError> {
    let index = ComponentIndex::new(spec);

    // Phase 1: actors and their methods
    let mut actors = build_actors(spec, &index)?;

    // Phase 2: global type table
    let types = build_type_table(spec, &index, options.promote_inline_enums)?;

    // Phase 3: per-actor attribution
    let mut attributed = attribute_types(&actors, &types, options.propagation);
    for actor in &mut actors {
        if let Some(defs) = attributed.remove(&actor.actor_type) {
            actor.types = defs;
        }
    }

    log::info!(
        "found {} actor type(s) and {} named type(s)",
        actors.len(),
        types.len()
    );
    Ok(GenerationModel { actors })
}
