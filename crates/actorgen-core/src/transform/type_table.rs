use std::collections::HashSet;

use crate::error::TransformError;
use crate::ir::{EnumType, StructType, TypeAlias, TypeDefinitions};
use crate::parse::document::OpenApiSpec;
use crate::parse::payload::ParameterOrRef;
use crate::parse::ref_resolve::ComponentIndex;
use crate::parse::schema::SchemaType;

use super::classifier::{TypeKind, build_fields, classify, schema_to_signature};
use super::name_normalizer::capitalize_first;
use super::promote_inline::promote_inline_enums;

/// Build the global table of named types, sorted by name.
///
/// Component schemas come first; string-typed parameters then add aliases
/// for names not already defined.
pub fn build_type_table<'a>(
    spec: &'a OpenApiSpec,
    index: &ComponentIndex<'a>,
    promote_enums: bool,
) -> Result<TypeDefinitions, TransformError> {
    let mut types = TypeDefinitions::default();
    let mut used_names: HashSet<String> =
        spec.component_schemas().map(|(name, _)| name.clone()).collect();

    for (name, schema_or_ref) in spec.component_schemas() {
        let schema = index.schema(schema_or_ref)?;
        match classify(schema) {
            TypeKind::Struct => {
                let mut fields = build_fields(schema, index)?;
                if promote_enums {
                    let promoted =
                        promote_inline_enums(name, schema, &mut fields, &mut used_names);
                    types.enums.extend(promoted);
                }
                types.structs.push(StructType {
                    name: name.clone(),
                    description: schema.description.clone(),
                    fields,
                });
            }
            TypeKind::Enum => types.enums.push(EnumType {
                name: name.clone(),
                description: schema.description.clone(),
                values: schema.string_enum_values(),
            }),
            TypeKind::Alias => types.aliases.push(TypeAlias {
                name: name.clone(),
                description: schema.description.clone(),
                target: schema_to_signature(schema),
                original_name: name.clone(),
            }),
        }
    }

    for param in spec.path_parameters() {
        add_parameter_alias(&mut types, index, param, None)?;
    }
    for (key, param) in spec.component_parameters() {
        add_parameter_alias(&mut types, index, param, Some(key))?;
    }

    types.sort(true);
    log::debug!(
        "type table: {} struct(s), {} alias(es), {} enum(s)",
        types.structs.len(),
        types.aliases.len(),
        types.enums.len()
    );
    Ok(types)
}

/// Alias a string-typed parameter to `string`.
///
/// Path-level parameters are named after the capitalized parameter name,
/// component parameters after their capitalized component key.
fn add_parameter_alias<'a>(
    types: &mut TypeDefinitions,
    index: &ComponentIndex<'a>,
    param: &'a ParameterOrRef,
    component_key: Option<&str>,
) -> Result<(), TransformError> {
    let param = index.parameter(param)?;
    let Some(schema) = &param.schema else {
        return Ok(());
    };
    let schema = index.schema(schema)?;
    if !schema.is_type(SchemaType::String) {
        return Ok(());
    }

    let name = capitalize_first(component_key.unwrap_or(&param.name));
    if types.contains(&name) {
        log::debug!("parameter alias {name} already defined, skipping");
        return Ok(());
    }

    types.aliases.push(TypeAlias {
        name,
        description: Some(format!("defines model for {}", param.name)),
        target: schema_to_signature(schema),
        original_name: param.name.clone(),
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{ScalarType, TypeSignature};
    use crate::parse;

    const DOC: &str = r##"
openapi: 3.0.3
info:
  title: Types
  version: "1.0"
paths:
  /Account/{accountId}/method/Get:
    parameters:
      - name: accountId
        in: path
        required: true
        schema:
          type: string
      - name: limit
        in: query
        schema:
          type: integer
    get:
      summary: Get
components:
  parameters:
    tenantHeader:
      name: X-Tenant
      in: header
      schema:
        type: string
    accountId:
      name: accountId
      in: path
      required: true
      schema:
        type: string
  schemas:
    Status:
      type: string
      enum: [open, closed]
    AccountEvent:
      type: object
      properties:
        eventType:
          type: string
          enum: [deposit, withdrawal]
        amount:
          type: number
    Balance:
      type: number
      format: float
    Primary:
      $ref: '#/components/schemas/Balance'
"##;

    #[test]
    fn test_component_schemas_classified() {
        let spec = parse::from_yaml(DOC).unwrap();
        let index = ComponentIndex::new(&spec);
        let types = build_type_table(&spec, &index, false).unwrap();

        let structs: Vec<_> = types.structs.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(structs, vec!["AccountEvent"]);
        let enums: Vec<_> = types.enums.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(enums, vec!["Status"]);
        assert_eq!(types.find_enum("Status").unwrap().values, vec!["open", "closed"]);

        assert_eq!(
            types.find_alias("Balance").unwrap().target,
            TypeSignature::Scalar(ScalarType::Float32)
        );
        assert_eq!(
            types.find_alias("Primary").unwrap().target,
            TypeSignature::Scalar(ScalarType::Float32)
        );

        let event = types.find_struct("AccountEvent").unwrap();
        let fields: Vec<_> = event.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(fields, vec!["Amount", "EventType"]);
        assert_eq!(
            event.fields[1].field_type,
            TypeSignature::Scalar(ScalarType::String)
        );
    }

    #[test]
    fn test_parameter_aliases() {
        let spec = parse::from_yaml(DOC).unwrap();
        let index = ComponentIndex::new(&spec);
        let types = build_type_table(&spec, &index, false).unwrap();

        let account_id = types.find_alias("AccountId").unwrap();
        assert_eq!(account_id.original_name, "accountId");
        assert_eq!(
            account_id.description.as_deref(),
            Some("defines model for accountId")
        );
        assert_eq!(
            types.aliases.iter().filter(|a| a.name == "AccountId").count(),
            1
        );

        let tenant = types.find_alias("TenantHeader").unwrap();
        assert_eq!(tenant.original_name, "X-Tenant");
        assert!(types.find_alias("Limit").is_none());

        let names: Vec<_> = types.aliases.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["AccountId", "Balance", "Primary", "TenantHeader"]);
    }

    #[test]
    fn test_promote_inline_enums() {
        let spec = parse::from_yaml(DOC).unwrap();
        let index = ComponentIndex::new(&spec);
        let types = build_type_table(&spec, &index, true).unwrap();

        let enums: Vec<_> = types.enums.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(enums, vec!["AccountEventEventType", "Status"]);
        let event = types.find_struct("AccountEvent").unwrap();
        assert_eq!(
            event.fields[1].field_type,
            TypeSignature::reference("AccountEventEventType")
        );
    }
}
