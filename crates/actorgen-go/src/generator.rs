use actorgen_core::config::GenerationConfig;
use actorgen_core::error::GeneratorError;
use actorgen_core::ir::GenerationModel;
use actorgen_core::{CodeGenerator, GeneratedFile};

use crate::emitters;

/// Options for the Go generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GoGeneratorConfig {
    /// Also emit `impl.go` stubs.
    pub generate_impl: bool,
    /// Also emit `main.go` and `go.mod` at the output root.
    pub generate_example: bool,
    /// Go module path used by the example application.
    pub module_name: String,
}

impl Default for GoGeneratorConfig {
    fn default() -> Self {
        GenerationConfig::default().into()
    }
}

impl From<GenerationConfig> for GoGeneratorConfig {
    fn from(config: GenerationConfig) -> Self {
        Self {
            generate_impl: config.generate_impl,
            generate_example: config.generate_example,
            module_name: config.module_name,
        }
    }
}

/// Go code generator: one package per actor.
pub struct GoGenerator;

impl CodeGenerator for GoGenerator {
    type Config = GoGeneratorConfig;
    type Error = GeneratorError;

    fn generate(
        &self,
        model: &GenerationModel,
        config: &GoGeneratorConfig,
    ) -> Result<Vec<GeneratedFile>, GeneratorError> {
        if model.actors.is_empty() {
            return Err(GeneratorError::EmptyModel);
        }
        if config.generate_example && config.module_name.trim().is_empty() {
            return Err(GeneratorError::Other(
                "module_name is required to generate the example application".to_string(),
            ));
        }

        let env = emitters::environment()?;
        let mut files = Vec::new();

        for actor in &model.actors {
            let dir = actor.package_name();
            files.push(GeneratedFile {
                path: format!("{dir}/types.go"),
                content: emitters::types::emit_types(&env, actor)?,
            });
            files.push(GeneratedFile {
                path: format!("{dir}/api.go"),
                content: emitters::actor_files::emit_api(&env, actor)?,
            });
            files.push(GeneratedFile {
                path: format!("{dir}/factory.go"),
                content: emitters::actor_files::emit_factory(&env, actor)?,
            });
            if config.generate_impl {
                files.push(GeneratedFile {
                    path: format!("{dir}/impl.go"),
                    content: emitters::actor_files::emit_impl(&env, actor)?,
                });
            }
            log::debug!("rendered package {dir} for actor {}", actor.actor_type);
        }

        if config.generate_example {
            files.push(GeneratedFile {
                path: "main.go".to_string(),
                content: emitters::example::emit_main(&env, model, &config.module_name)?,
            });
            files.push(GeneratedFile {
                path: "go.mod".to_string(),
                content: emitters::example::emit_go_mod(&env, &config.module_name)?,
            });
        }

        Ok(files)
    }
}
