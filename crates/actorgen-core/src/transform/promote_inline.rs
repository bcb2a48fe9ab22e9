use std::collections::HashSet;

use crate::ir::{EnumType, Field, TypeSignature};
use crate::parse::schema::Schema;

use super::classifier::{TypeKind, classify};
use super::name_normalizer::{promoted_name, unique_name};

/// Promote inline string enums found on `parent`'s properties into named
/// enums, pointing the matching fields at them.
///
/// Names are `<Parent><Property>`; clashes with `used_names` get a numeric
/// suffix. Returns the newly created enums in property order.
pub fn promote_inline_enums(
    parent: &str,
    schema: &Schema,
    fields: &mut [Field],
    used_names: &mut HashSet<String>,
) -> Vec<EnumType> {
    let mut promoted = Vec::new();

    for (prop_name, prop) in &schema.properties {
        let Some(inline) = prop.as_schema() else {
            continue;
        };
        if classify(inline) != TypeKind::Enum {
            continue;
        }

        let name = unique_name(&promoted_name(parent, prop_name), used_names);
        if let Some(field) = fields.iter_mut().find(|f| &f.json_name == prop_name) {
            field.field_type = TypeSignature::reference(name.clone());
        }
        log::debug!("promoted inline enum {parent}.{prop_name} to {name}");

        promoted.push(EnumType {
            name,
            description: inline.description.clone(),
            values: inline.string_enum_values(),
        });
    }

    promoted
}
