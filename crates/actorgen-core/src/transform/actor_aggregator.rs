use std::collections::{BTreeMap, BTreeSet};

use crate::error::TransformError;
use crate::ir::{ActorInterface, Method};
use crate::parse::document::OpenApiSpec;
use crate::parse::operation::{HttpVerb, Operation};
use crate::parse::ref_resolve::ComponentIndex;

use super::method_extractor::extract_method;
use super::path_resolver::{ActorPath, resolve_actor_path};

/// An operation recognized as an actor method, not yet converted.
#[derive(Debug, Clone)]
pub struct ActorOperation<'a> {
    pub verb: HttpVerb,
    pub path: &'a str,
    pub actor_path: ActorPath,
    pub operation: &'a Operation,
}

/// Collect actor operations from every path, grouped by actor type.
pub fn collect_actor_operations(
    spec: &OpenApiSpec,
) -> Result<BTreeMap<String, Vec<ActorOperation<'_>>>, TransformError> {
    let mut grouped: BTreeMap<String, Vec<ActorOperation<'_>>> = BTreeMap::new();

    for (path, item) in &spec.paths {
        for (verb, operation) in item.actor_operations() {
            let Some(actor_path) = resolve_actor_path(path)? else {
                log::debug!("skipping non-actor path {verb} {path}");
                continue;
            };
            grouped
                .entry(actor_path.actor_type.clone())
                .or_default()
                .push(ActorOperation {
                    verb,
                    path,
                    actor_path,
                    operation,
                });
        }
    }

    if grouped.is_empty() {
        return Err(TransformError::NoActorTypes);
    }
    Ok(grouped)
}

/// Build one interface per actor type, sorted by actor type, methods sorted
/// by name. Actors left with no methods are dropped.
pub fn build_actors(
    spec: &OpenApiSpec,
    index: &ComponentIndex<'_>,
) -> Result<Vec<ActorInterface>, TransformError> {
    let grouped = collect_actor_operations(spec)?;
    let mut actors = Vec::with_capacity(grouped.len());

    for (actor_type, operations) in grouped {
        let mut seen = BTreeSet::new();
        let mut methods: Vec<Method> = Vec::with_capacity(operations.len());

        for op in operations {
            if !seen.insert(op.actor_path.method_name.clone()) {
                return Err(TransformError::DuplicateMethod {
                    actor: actor_type,
                    method: op.actor_path.method_name,
                    verb: op.verb.to_string(),
                    path: op.path.to_string(),
                });
            }
            methods.push(extract_method(&op.actor_path, op.operation, index)?);
        }

        if methods.is_empty() {
            continue;
        }
        methods.sort_by(|a, b| a.name.cmp(&b.name));
        log::debug!("actor {actor_type}: {} method(s)", methods.len());
        actors.push(ActorInterface::new(&actor_type, methods));
    }

    Ok(actors)
}
