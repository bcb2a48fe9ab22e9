use super::schemas::TypeDefinitions;
use super::types::TypeSignature;

/// Suffix appended to the actor type to name its interface.
pub const INTERFACE_SUFFIX: &str = "API";

/// One actor-callable operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Exported identifier; always starts with an upper-case letter.
    pub name: String,
    pub comment: String,
    pub has_request: bool,
    /// Set only when the JSON request schema is a direct `$ref`.
    pub request_type: Option<String>,
    /// `Dynamic` when the 200 response could not be resolved to a named type.
    pub return_type: TypeSignature,
}

/// One actor type and everything generated for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActorInterface {
    pub actor_type: String,
    pub interface_name: String,
    pub interface_description: String,
    /// Sorted by name, names unique.
    pub methods: Vec<Method>,
    /// Copies of the global types this actor reaches.
    pub types: TypeDefinitions,
}

impl ActorInterface {
    pub fn new(actor_type: &str, methods: Vec<Method>) -> Self {
        Self {
            actor_type: actor_type.to_string(),
            interface_name: format!("{actor_type}{INTERFACE_SUFFIX}"),
            interface_description: format!(
                "defines the interface that must be implemented to satisfy the OpenAPI schema for {actor_type}"
            ),
            methods,
            types: TypeDefinitions::default(),
        }
    }

    /// Output package (and directory) name: the lower-cased actor type.
    pub fn package_name(&self) -> String {
        self.actor_type.to_lowercase()
    }

    pub fn find_method(&self, name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// The complete intermediate representation handed to generators.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationModel {
    /// Sorted by actor type.
    pub actors: Vec<ActorInterface>,
}

impl GenerationModel {
    pub fn find_actor(&self, actor_type: &str) -> Option<&ActorInterface> {
        self.actors.iter().find(|a| a.actor_type == actor_type)
    }
}
