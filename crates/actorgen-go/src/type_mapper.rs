use std::collections::HashSet;

use actorgen_core::ir::{EnumType, Method, TypeSignature};
use actorgen_core::transform::name_normalizer::unique_name;
use heck::ToUpperCamelCase;

/// Map a `TypeSignature` to its Go type expression.
pub fn go_type(signature: &TypeSignature) -> String {
    match signature {
        TypeSignature::Scalar(scalar) => scalar.as_str().to_string(),
        TypeSignature::Reference(name) => name.clone(),
        TypeSignature::ArrayOf(inner) => format!("[]{}", go_type(inner)),
        TypeSignature::MapOfStringToDynamic => "map[string]interface{}".to_string(),
        TypeSignature::Dynamic => "interface{}".to_string(),
    }
}

/// Go type of a method result. Named types come back by pointer.
pub fn go_return_type(signature: &TypeSignature) -> String {
    match signature {
        TypeSignature::Reference(name) => format!("*{name}"),
        other => go_type(other),
    }
}

/// `Name(ctx context.Context[, request T]) (R, error)`
pub fn method_signature(method: &Method) -> String {
    let mut params = String::from("ctx context.Context");
    if method.has_request {
        let request = method.request_type.as_deref().unwrap_or("interface{}");
        params.push_str(", request ");
        params.push_str(request);
    }
    format!(
        "{}({params}) ({}, error)",
        method.name,
        go_return_type(&method.return_type)
    )
}

/// Leading text of a doc comment: the name, then the description if any.
pub fn doc_line(name: &str, description: Option<&str>) -> String {
    match description.map(str::trim).filter(|d| !d.is_empty()) {
        Some(description) => format!("{name} {description}"),
        None => name.to_string(),
    }
}

/// Constant names and Go literals for each enum value, in declaration order.
///
/// `UserStatus` / `active` → `UserStatusActive`. Values that produce no
/// identifier characters fall back to `<Enum>Value<N>`; clashes get a
/// numeric suffix.
pub fn enum_constants(en: &EnumType) -> Vec<(String, String)> {
    let mut used = HashSet::new();
    en.values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            let suffix = value.to_upper_camel_case();
            let base = if suffix.is_empty() {
                format!("{}Value{}", en.name, i + 1)
            } else {
                format!("{}{suffix}", en.name)
            };
            (unique_name(&base, &mut used), go_string_literal(value))
        })
        .collect()
}

/// Interpreted Go string literal for `value`.
pub fn go_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}
