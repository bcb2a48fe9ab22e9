use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Top-level project configuration loaded from `.actorgen.yaml`.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ActorgenConfig {
    pub input: String,
    pub output: String,
    pub generation: GenerationConfig,
    pub types: TypesConfig,
}

impl Default for ActorgenConfig {
    fn default() -> Self {
        Self {
            input: "openapi.yaml".to_string(),
            output: "generated".to_string(),
            generation: GenerationConfig::default(),
            types: TypesConfig::default(),
        }
    }
}

/// Which optional artifacts to render.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GenerationConfig {
    /// Emit implementation stubs returning not-implemented errors.
    #[serde(rename = "impl")]
    pub generate_impl: bool,
    /// Emit a runnable example application and its module manifest.
    #[serde(rename = "example")]
    pub generate_example: bool,
    pub module_name: String,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            generate_impl: false,
            generate_example: false,
            module_name: "example.com/actors".to_string(),
        }
    }
}

/// Type discovery and attribution options.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TypesConfig {
    pub propagation: Propagation,
    pub promote_inline_enums: bool,
}

/// How far type usage flows along struct field references.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Propagation {
    /// Users of a struct also use the types its fields name directly.
    #[default]
    SingleHop,
    /// Follow field references until nothing new is reached.
    Transitive,
}

/// Default config file name.
pub const CONFIG_FILE_NAME: &str = ".actorgen.yaml";

/// Load config from a YAML file. Returns `None` if the file doesn't exist.
pub fn load_config(path: &Path) -> Result<Option<ActorgenConfig>, String> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {}", path.display(), e))?;
    let config: ActorgenConfig = serde_yaml_ng::from_str(&content)
        .map_err(|e| format!("failed to parse config {}: {}", path.display(), e))?;
    Ok(Some(config))
}

/// Generate the default config file content.
pub fn default_config_content() -> &'static str {
    r#"# actorgen configuration
input: openapi.yaml
output: generated

generation:
  impl: false           # emit <actor>/impl.go stubs
  example: false        # emit main.go and go.mod at the output root
  module_name: example.com/actors

types:
  propagation: single_hop      # single_hop | transitive
  promote_inline_enums: false  # name inline string enums <Struct><Property>
"#
}
