use actorgen_core::error::GeneratorError;
use actorgen_core::ir::GenerationModel;
use minijinja::{Environment, Value, context};

use super::{GO_MOD_TEMPLATE, MAIN_TEMPLATE, render};

/// Emit `main.go`, registering every actor factory on one Dapr service.
pub fn emit_main(
    env: &Environment<'_>,
    model: &GenerationModel,
    module_name: &str,
) -> Result<String, GeneratorError> {
    let actors: Vec<Value> = model
        .actors
        .iter()
        .map(|a| {
            context! {
                actor_type => a.actor_type.clone(),
                package => a.package_name(),
            }
        })
        .collect();
    render(
        env,
        MAIN_TEMPLATE,
        context! { module_name => module_name, actors => actors },
    )
}

/// Emit `go.mod` declaring `module_name`.
pub fn emit_go_mod(env: &Environment<'_>, module_name: &str) -> Result<String, GeneratorError> {
    render(env, GO_MOD_TEMPLATE, context! { module_name => module_name })
}
