use crate::error::TransformError;
use crate::ir::{Method, TypeSignature};
use crate::parse::operation::Operation;
use crate::parse::ref_resolve::ComponentIndex;
use crate::parse::schema::{SchemaOrRef, SchemaType};

use super::path_resolver::ActorPath;

/// Comment used when an operation has neither summary nor description.
pub const DEFAULT_METHOD_COMMENT: &str = "Generated method from OpenAPI operation";

/// Status code whose JSON body becomes the method return type.
const SUCCESS_STATUS: &str = "200";

/// Build the method for one actor operation.
pub fn extract_method<'a>(
    actor_path: &ActorPath,
    op: &'a Operation,
    index: &ComponentIndex<'a>,
) -> Result<Method, TransformError> {
    let (has_request, request_type) = match &op.request_body {
        Some(body) => {
            let body = index.request_body(body)?;
            let request_type = body
                .json_schema()
                .and_then(SchemaOrRef::ref_name)
                .map(str::to_string);
            (!body.content.is_empty(), request_type)
        }
        None => (false, None),
    };

    Ok(Method {
        name: actor_path.method_name.clone(),
        comment: operation_comment(op),
        has_request,
        request_type,
        return_type: return_type(op, index)?,
    })
}

/// Summary if present, else the first line of the description, else a default.
pub fn operation_comment(op: &Operation) -> String {
    if let Some(summary) = op.summary.as_deref().filter(|s| !s.is_empty()) {
        return summary.to_string();
    }
    op.description
        .as_deref()
        .and_then(|d| d.trim().lines().next())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .unwrap_or(DEFAULT_METHOD_COMMENT)
        .to_string()
}

/// Named type of the `200` JSON response: a direct reference or an array of one.
fn return_type<'a>(
    op: &'a Operation,
    index: &ComponentIndex<'a>,
) -> Result<TypeSignature, TransformError> {
    let Some(response) = op.responses.get(SUCCESS_STATUS) else {
        return Ok(TypeSignature::Dynamic);
    };
    let Some(schema) = index.response(response)?.json_schema() else {
        return Ok(TypeSignature::Dynamic);
    };

    let signature = match schema {
        SchemaOrRef::Ref { .. } => schema.ref_name().map(TypeSignature::reference),
        SchemaOrRef::Schema(inline) if inline.is_type(SchemaType::Array) => inline
            .items
            .as_deref()
            .and_then(SchemaOrRef::ref_name)
            .map(|name| TypeSignature::array_of(TypeSignature::reference(name))),
        SchemaOrRef::Schema(_) => None,
    };
    Ok(signature.unwrap_or(TypeSignature::Dynamic))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operation(yaml: &str) -> Operation {
        serde_yaml_ng::from_str(yaml).unwrap()
    }

    fn empty_spec() -> crate::parse::document::OpenApiSpec {
        crate::parse::from_yaml("openapi: 3.0.0\ninfo:\n  title: t\n  version: '1'\npaths: {}\n")
            .unwrap()
    }

    fn actor_path() -> ActorPath {
        ActorPath {
            actor_type: "Account".into(),
            method_name: "Deposit".into(),
        }
    }

    #[test]
    fn test_comment_fallbacks() {
        assert_eq!(operation_comment(&operation("summary: Adds money")), "Adds money");
        assert_eq!(
            operation_comment(&operation("description: \"  First line \\nSecond line\"")),
            "First line"
        );
        assert_eq!(
            operation_comment(&operation("summary: ''\ndescription: Fallback")),
            "Fallback"
        );
        assert_eq!(
            operation_comment(&Operation::default()),
            DEFAULT_METHOD_COMMENT
        );
    }

    #[test]
    fn test_request_and_return_refs() {
        let spec = empty_spec();
        let index = ComponentIndex::new(&spec);
        let op = operation(
            r##"
requestBody:
  content:
    application/json:
      schema:
        $ref: '#/components/schemas/DepositRequest'
responses:
  "200":
    description: ok
    content:
      application/json:
        schema:
          $ref: '#/components/schemas/AccountState'
"##,
        );
        let method = extract_method(&actor_path(), &op, &index).unwrap();
        assert_eq!(method.name, "Deposit");
        assert!(method.has_request);
        assert_eq!(method.request_type.as_deref(), Some("DepositRequest"));
        assert_eq!(method.return_type, TypeSignature::reference("AccountState"));
    }

    #[test]
    fn test_inline_request_has_no_type() {
        let spec = empty_spec();
        let index = ComponentIndex::new(&spec);
        let op = operation(
            r#"
requestBody:
  content:
    application/json:
      schema:
        type: object
        properties:
          amount:
            type: number
"#,
        );
        let method = extract_method(&actor_path(), &op, &index).unwrap();
        assert!(method.has_request);
        assert_eq!(method.request_type, None);
        assert_eq!(method.return_type, TypeSignature::Dynamic);
    }

    #[test]
    fn test_array_return_type() {
        let spec = empty_spec();
        let index = ComponentIndex::new(&spec);
        let op = operation(
            r##"
responses:
  "200":
    description: ok
    content:
      application/json:
        schema:
          type: array
          items:
            $ref: '#/components/schemas/Transaction'
"##,
        );
        let method = extract_method(&actor_path(), &op, &index).unwrap();
        assert!(!method.has_request);
        assert_eq!(
            method.return_type,
            TypeSignature::array_of(TypeSignature::reference("Transaction"))
        );
    }

    #[test]
    fn test_non_200_and_non_json_ignored() {
        let spec = empty_spec();
        let index = ComponentIndex::new(&spec);
        let op = operation(
            r##"
responses:
  "201":
    description: created
    content:
      application/json:
        schema:
          $ref: '#/components/schemas/Created'
  "200":
    description: ok
    content:
      text/plain:
        schema:
          $ref: '#/components/schemas/Text'
"##,
        );
        let method = extract_method(&actor_path(), &op, &index).unwrap();
        assert_eq!(method.return_type, TypeSignature::Dynamic);
    }
}
