use indexmap::IndexMap;
use serde::Deserialize;

use super::schema::SchemaOrRef;

/// The only content type whose schemas feed method signatures.
pub const APPLICATION_JSON: &str = "application/json";

/// A `$ref` pointer or the object itself.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OrRef<T> {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Inline(T),
}

impl<T> OrRef<T> {
    pub fn inline(&self) -> Option<&T> {
        match self {
            OrRef::Inline(value) => Some(value),
            OrRef::Ref { .. } => None,
        }
    }
}

pub type ParameterOrRef = OrRef<Parameter>;
pub type RequestBodyOrRef = OrRef<RequestBody>;
pub type ResponseOrRef = OrRef<Response>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParameterLocation {
    Query,
    Header,
    Path,
    Cookie,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: ParameterLocation,
    pub description: Option<String>,
    #[serde(default)]
    pub required: bool,
    pub schema: Option<SchemaOrRef>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RequestBody {
    pub description: Option<String>,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
    #[serde(default)]
    pub required: bool,
}

impl RequestBody {
    pub fn json_schema(&self) -> Option<&SchemaOrRef> {
        json_schema(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: IndexMap<String, MediaType>,
}

impl Response {
    pub fn json_schema(&self) -> Option<&SchemaOrRef> {
        json_schema(&self.content)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MediaType {
    pub schema: Option<SchemaOrRef>,
}

fn json_schema(content: &IndexMap<String, MediaType>) -> Option<&SchemaOrRef> {
    content
        .get(APPLICATION_JSON)
        .and_then(|media| media.schema.as_ref())
}
