//! Turns an OpenAPI 3.x document describing actor endpoints
//! (`/{actorType}/{actorId}/method/{MethodName}`) into a language-neutral
//! model of actor interfaces and the named types each one uses.
//!
//! [`parse`] loads the document, [`transform`] builds the
//! [`ir::GenerationModel`], and a [`CodeGenerator`] renders it to files.

pub mod config;
pub mod error;
pub mod ir;
pub mod parse;
pub mod transform;

/// One output file, with a path relative to the output directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    pub path: String,
    pub content: String,
}

/// A target-language backend.
pub trait CodeGenerator {
    type Config;
    type Error: std::error::Error;

    fn generate(
        &self,
        model: &ir::GenerationModel,
        config: &Self::Config,
    ) -> Result<Vec<GeneratedFile>, Self::Error>;
}
