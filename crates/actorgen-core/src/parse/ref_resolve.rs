use std::collections::HashSet;

use indexmap::IndexMap;

use super::document::{Components, OpenApiSpec};
use super::payload::{
    OrRef, Parameter, ParameterOrRef, RequestBody, RequestBodyOrRef, Response, ResponseOrRef,
};
use super::schema::{Schema, SchemaOrRef};
use crate::error::ResolveError;

const COMPONENTS_PREFIX: &str = "#/components/";

/// Read-only view over `components` that follows `$ref` pointers on demand.
///
/// Nothing is rewritten in place: schema references keep their names so the
/// classifier can record them, and bodies are only looked up where the
/// pipeline needs to look inside.
#[derive(Debug, Clone, Copy)]
pub struct ComponentIndex<'a> {
    components: Option<&'a Components>,
}

impl<'a> ComponentIndex<'a> {
    pub fn new(spec: &'a OpenApiSpec) -> Self {
        Self {
            components: spec.components.as_ref(),
        }
    }

    /// Follow a chain of schema references down to a body.
    pub fn schema(&self, schema_or_ref: &'a SchemaOrRef) -> Result<&'a Schema, ResolveError> {
        let mut seen = HashSet::new();
        let mut current = schema_or_ref;
        loop {
            let ref_path = match current {
                SchemaOrRef::Schema(body) => return Ok(body),
                SchemaOrRef::Ref { ref_path } => ref_path,
            };
            if !seen.insert(ref_path.as_str()) {
                return Err(ResolveError::CircularRef(ref_path.clone()));
            }
            let name = component_name(ref_path, "schemas")?;
            current = self
                .components
                .and_then(|c| c.schemas.get(name))
                .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))?;
        }
    }

    pub fn parameter(&self, item: &'a ParameterOrRef) -> Result<&'a Parameter, ResolveError> {
        self.lookup(item, "parameters", |c| &c.parameters)
    }

    pub fn request_body(&self, item: &'a RequestBodyOrRef) -> Result<&'a RequestBody, ResolveError> {
        self.lookup(item, "requestBodies", |c| &c.request_bodies)
    }

    pub fn response(&self, item: &'a ResponseOrRef) -> Result<&'a Response, ResolveError> {
        self.lookup(item, "responses", |c| &c.responses)
    }

    // Non-schema components resolve one hop; a ref to a ref is not followed.
    fn lookup<T>(
        &self,
        item: &'a OrRef<T>,
        section: &str,
        table: impl Fn(&'a Components) -> &'a IndexMap<String, OrRef<T>>,
    ) -> Result<&'a T, ResolveError> {
        let ref_path = match item {
            OrRef::Inline(value) => return Ok(value),
            OrRef::Ref { ref_path } => ref_path,
        };
        let name = component_name(ref_path, section)?;
        self.components
            .and_then(|c| table(c).get(name))
            .and_then(OrRef::inline)
            .ok_or_else(|| ResolveError::RefTargetNotFound(ref_path.clone()))
    }
}

/// Split `#/components/<section>/<Name>` and check the section.
fn component_name<'p>(ref_path: &'p str, section: &str) -> Result<&'p str, ResolveError> {
    let invalid = || ResolveError::InvalidRefFormat(ref_path.to_string());
    let rest = ref_path.strip_prefix(COMPONENTS_PREFIX).ok_or_else(invalid)?;
    match rest.split_once('/') {
        Some((found, name)) if found == section && !name.is_empty() => Ok(name),
        _ => Err(invalid()),
    }
}
