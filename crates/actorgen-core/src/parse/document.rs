use indexmap::IndexMap;
use serde::Deserialize;

use super::operation::PathItem;
use super::payload::{ParameterOrRef, RequestBodyOrRef, ResponseOrRef};
use super::schema::SchemaOrRef;

/// An OpenAPI 3.x document, reduced to what actor extraction reads.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpenApiSpec {
    pub openapi: String,
    pub info: Info,
    /// Declaration order is kept so regeneration is reproducible.
    #[serde(default)]
    pub paths: IndexMap<String, PathItem>,
    pub components: Option<Components>,
}

impl OpenApiSpec {
    /// Named component schemas in declaration order.
    pub fn component_schemas(&self) -> impl Iterator<Item = (&String, &SchemaOrRef)> {
        self.components.iter().flat_map(|c| c.schemas.iter())
    }

    /// Reusable parameters in declaration order.
    pub fn component_parameters(&self) -> impl Iterator<Item = (&String, &ParameterOrRef)> {
        self.components.iter().flat_map(|c| c.parameters.iter())
    }

    /// Parameters declared on path items (not on operations), path by path.
    pub fn path_parameters(&self) -> impl Iterator<Item = &ParameterOrRef> {
        self.paths.values().flat_map(|item| item.parameters.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Info {
    pub title: String,
    pub description: Option<String>,
    pub version: String,
}

/// Reusable definitions addressed by `#/components/<section>/<Name>`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Components {
    pub schemas: IndexMap<String, SchemaOrRef>,
    pub parameters: IndexMap<String, ParameterOrRef>,
    pub request_bodies: IndexMap<String, RequestBodyOrRef>,
    pub responses: IndexMap<String, ResponseOrRef>,
}
