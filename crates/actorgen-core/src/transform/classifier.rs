use crate::error::ResolveError;
use crate::ir::{Field, ScalarType, TypeSignature};
use crate::parse::ref_resolve::ComponentIndex;
use crate::parse::schema::{Schema, SchemaOrRef, SchemaType};

use super::name_normalizer::capitalize_first;

/// Which kind of named definition a component schema becomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Struct,
    Alias,
    Enum,
}

/// Decide whether a schema denotes a struct, an enum, or an alias.
pub fn classify(schema: &Schema) -> TypeKind {
    if schema.is_type(SchemaType::Object) && !schema.properties.is_empty() {
        TypeKind::Struct
    } else if schema.is_type(SchemaType::String) && !schema.string_enum_values().is_empty() {
        TypeKind::Enum
    } else {
        TypeKind::Alias
    }
}

/// Type signature of a property: a direct `$ref` keeps the referenced name.
pub fn schema_or_ref_to_signature(schema_or_ref: &SchemaOrRef) -> TypeSignature {
    match schema_or_ref {
        SchemaOrRef::Ref { .. } => match schema_or_ref.ref_name() {
            Some(name) => TypeSignature::reference(name),
            None => TypeSignature::Dynamic,
        },
        SchemaOrRef::Schema(schema) => schema_to_signature(schema),
    }
}

/// Type signature derived from a schema body.
pub fn schema_to_signature(schema: &Schema) -> TypeSignature {
    let format = schema.format.as_deref();
    if schema.is_type(SchemaType::String) {
        TypeSignature::Scalar(ScalarType::String)
    } else if schema.is_type(SchemaType::Integer) {
        match format {
            Some("int32") => TypeSignature::Scalar(ScalarType::Int32),
            _ => TypeSignature::Scalar(ScalarType::Int),
        }
    } else if schema.is_type(SchemaType::Number) {
        match format {
            Some("float") => TypeSignature::Scalar(ScalarType::Float32),
            _ => TypeSignature::Scalar(ScalarType::Float64),
        }
    } else if schema.is_type(SchemaType::Boolean) {
        TypeSignature::Scalar(ScalarType::Bool)
    } else if schema.is_type(SchemaType::Array) {
        match &schema.items {
            Some(items) => TypeSignature::array_of(schema_or_ref_to_signature(items)),
            None => TypeSignature::array_of(TypeSignature::Dynamic),
        }
    } else if schema.is_type(SchemaType::Object) && schema.allows_additional_properties() {
        TypeSignature::MapOfStringToDynamic
    } else {
        TypeSignature::Dynamic
    }
}

/// Build the fields of a struct schema, in property declaration order.
///
/// A reference property takes its doc comment from the referenced schema.
pub fn build_fields<'a>(
    schema: &'a Schema,
    index: &ComponentIndex<'a>,
) -> Result<Vec<Field>, ResolveError> {
    schema
        .properties
        .iter()
        .map(|(prop_name, prop)| {
            let comment = index.schema(prop)?.description.clone();
            Ok(Field {
                name: capitalize_first(prop_name),
                field_type: schema_or_ref_to_signature(prop),
                json_name: prop_name.clone(),
                required: schema.required.contains(prop_name),
                comment,
            })
        })
        .collect()
}
