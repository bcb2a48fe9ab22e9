use actorgen_core::error::GeneratorError;
use actorgen_core::ir::ActorInterface;
use minijinja::{Environment, Value, context};

use super::{API_TEMPLATE, FACTORY_TEMPLATE, IMPL_TEMPLATE, render};
use crate::type_mapper::{doc_line, method_signature};

fn actor_ctx(actor: &ActorInterface) -> Value {
    let methods: Vec<Value> = actor
        .methods
        .iter()
        .map(|m| {
            context! {
                name => m.name.clone(),
                doc => doc_line(&m.name, Some(m.comment.as_str())),
                signature => method_signature(m),
            }
        })
        .collect();
    context! {
        package => actor.package_name(),
        actor_type => actor.actor_type.clone(),
        interface_name => actor.interface_name.clone(),
        interface_description => actor.interface_description.clone(),
        methods => methods,
    }
}

/// Emit `<package>/api.go`: the actor type constant and the interface.
pub fn emit_api(env: &Environment<'_>, actor: &ActorInterface) -> Result<String, GeneratorError> {
    render(env, API_TEMPLATE, actor_ctx(actor))
}

/// Emit `<package>/factory.go`.
pub fn emit_factory(
    env: &Environment<'_>,
    actor: &ActorInterface,
) -> Result<String, GeneratorError> {
    render(env, FACTORY_TEMPLATE, actor_ctx(actor))
}

/// Emit `<package>/impl.go` with not-implemented method stubs.
pub fn emit_impl(env: &Environment<'_>, actor: &ActorInterface) -> Result<String, GeneratorError> {
    render(env, IMPL_TEMPLATE, actor_ctx(actor))
}
