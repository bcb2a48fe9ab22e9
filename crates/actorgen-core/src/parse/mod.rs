//! OpenAPI 3.x document model and loading.

pub mod document;
pub mod operation;
pub mod payload;
pub mod ref_resolve;
pub mod schema;

use std::path::Path;

use crate::error::ParseError;
use document::OpenApiSpec;

/// On-disk encoding of an OpenAPI document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    Yaml,
    Json,
}

impl DocumentFormat {
    /// `.json` files are JSON; anything else is read as YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => DocumentFormat::Json,
            _ => DocumentFormat::Yaml,
        }
    }
}

pub fn parse_document(input: &str, format: DocumentFormat) -> Result<OpenApiSpec, ParseError> {
    let spec: OpenApiSpec = match format {
        DocumentFormat::Yaml => serde_yaml_ng::from_str(input)?,
        DocumentFormat::Json => serde_json::from_str(input)?,
    };
    if !spec.openapi.starts_with("3.") {
        return Err(ParseError::UnsupportedVersion(spec.openapi));
    }
    Ok(spec)
}

pub fn from_yaml(input: &str) -> Result<OpenApiSpec, ParseError> {
    parse_document(input, DocumentFormat::Yaml)
}

pub fn from_json(input: &str) -> Result<OpenApiSpec, ParseError> {
    parse_document(input, DocumentFormat::Json)
}
