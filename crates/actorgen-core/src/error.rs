use thiserror::Error;

/// The document could not be read as OpenAPI 3.x.
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("invalid YAML document: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    #[error("invalid JSON document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected an OpenAPI 3.x document, found version {0}")]
    UnsupportedVersion(String),
}

/// A `$ref` pointer that cannot be followed inside `components`.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("reference cycle through {0}")]
    CircularRef(String),

    #[error("unsupported reference {0}: only local #/components/<section>/<name> pointers are followed")]
    InvalidRefFormat(String),

    #[error("{0} does not point at a defined component")]
    RefTargetNotFound(String),
}

/// Structural document errors. Any of these aborts the whole parse.
#[derive(Debug, Error)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error(
        "no actor types found in OpenAPI specification - paths must follow pattern: \
         .../{{actorType}}/{{actorId}}/method/{{methodName}}"
    )]
    NoActorTypes,

    #[error(
        "failed to extract method name from path '{path}': path must follow pattern \
         '/{{actorType}}/{{actorId}}/method/{{methodName}}'"
    )]
    MissingMethodName { path: String },

    #[error("method name '{name}' must start with a capital letter in path '{path}'")]
    InvalidMethodName { name: String, path: String },

    #[error("actor '{actor}' declares method '{method}' more than once (second at {verb} {path})")]
    DuplicateMethod {
        actor: String,
        method: String,
        verb: String,
        path: String,
    },
}

/// Errors raised while rendering the model into source files.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("template error: {0}")]
    Template(String),

    #[error("no actors found in the model")]
    EmptyModel,

    #[error("{0}")]
    Other(String),
}
