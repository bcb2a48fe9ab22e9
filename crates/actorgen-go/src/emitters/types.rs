use actorgen_core::error::GeneratorError;
use actorgen_core::ir::{ActorInterface, EnumType, StructType, TypeAlias};
use minijinja::{Environment, Value, context};

use super::{TYPES_TEMPLATE, render};
use crate::type_mapper::{doc_line, enum_constants, go_type};

/// Emit `<package>/types.go`: structs, then aliases, then enums.
pub fn emit_types(env: &Environment<'_>, actor: &ActorInterface) -> Result<String, GeneratorError> {
    let structs: Vec<Value> = actor.types.structs.iter().map(struct_ctx).collect();
    let aliases: Vec<Value> = actor.types.aliases.iter().map(alias_ctx).collect();
    let enums: Vec<Value> = actor.types.enums.iter().map(enum_ctx).collect();

    render(
        env,
        TYPES_TEMPLATE,
        context! {
            package => actor.package_name(),
            actor_type => actor.actor_type.clone(),
            structs => structs,
            aliases => aliases,
            enums => enums,
        },
    )
}

fn struct_ctx(st: &StructType) -> Value {
    let fields: Vec<Value> = st
        .fields
        .iter()
        .map(|f| {
            context! {
                name => f.name.clone(),
                go_type => go_type(&f.field_type),
                json_tag => f.json_tag(),
                comment => f.comment.clone(),
            }
        })
        .collect();
    context! {
        name => st.name.clone(),
        doc => doc_line(&st.name, st.description.as_deref()),
        fields => fields,
    }
}

fn alias_ctx(alias: &TypeAlias) -> Value {
    context! {
        name => alias.name.clone(),
        doc => doc_line(&alias.name, alias.description.as_deref()),
        go_type => go_type(&alias.target),
    }
}

fn enum_ctx(en: &EnumType) -> Value {
    let constants: Vec<Value> = enum_constants(en)
        .into_iter()
        .map(|(name, literal)| context! { name => name, literal => literal })
        .collect();
    context! {
        name => en.name.clone(),
        doc => doc_line(&en.name, en.description.as_deref()),
        constants => constants,
    }
}
