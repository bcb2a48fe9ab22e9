use crate::error::TransformError;

use super::name_normalizer::is_exported;

/// Marker segment that separates the actor prefix from the method name.
pub const METHOD_SEGMENT: &str = "method";

/// Actor type and method name recovered from an actor-RPC path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorPath {
    pub actor_type: String,
    pub method_name: String,
}

/// Recognize `.../{actorType}/{actorId}/method/{methodName}`.
///
/// Paths outside the convention yield `Ok(None)` and are ignored. A path
/// that names an actor but has no method segment, or whose method name is
/// not exported, is an error.
pub fn resolve_actor_path(path: &str) -> Result<Option<ActorPath>, TransformError> {
    let segments: Vec<&str> = path.split('/').collect();
    if segments.len() < 4 || !segments[0].is_empty() {
        return Ok(None);
    }

    // Index 0 is the empty segment before the leading slash, so the actor
    // type needs at least index 1 and an actor id between it and `method`.
    let Some(method_index) = segments.iter().position(|s| *s == METHOD_SEGMENT) else {
        return Ok(None);
    };
    if method_index < 3 {
        return Ok(None);
    }
    let actor_type = segments[method_index - 2];
    if actor_type.is_empty() {
        return Ok(None);
    }

    let method_name = segments
        .get(method_index + 1)
        .copied()
        .filter(|name| !name.is_empty())
        .ok_or_else(|| TransformError::MissingMethodName {
            path: path.to_string(),
        })?;

    if !is_exported(method_name) {
        return Err(TransformError::InvalidMethodName {
            name: method_name.to_string(),
            path: path.to_string(),
        });
    }

    Ok(Some(ActorPath {
        actor_type: actor_type.to_string(),
        method_name: method_name.to_string(),
    }))
}
