use indexmap::IndexMap;
use serde::Deserialize;

/// Values of the JSON Schema `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
    Null,
}

/// `type: string` or `type: [string, "null"]`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum TypeSet {
    Single(SchemaType),
    Multiple(Vec<SchemaType>),
}

impl TypeSet {
    /// The one non-null member, if there is exactly one.
    fn effective(&self) -> Option<SchemaType> {
        match self {
            TypeSet::Single(t) => Some(*t),
            TypeSet::Multiple(types) => {
                let mut non_null = types.iter().copied().filter(|t| *t != SchemaType::Null);
                match (non_null.next(), non_null.next()) {
                    (Some(only), None) => Some(only),
                    _ => None,
                }
            }
        }
    }
}

/// A schema position: either a pointer into `components.schemas` or an inline body.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SchemaOrRef {
    Ref {
        #[serde(rename = "$ref")]
        ref_path: String,
    },
    Schema(Box<Schema>),
}

impl SchemaOrRef {
    /// Type name a `$ref` points at, taken from its last pointer segment.
    pub fn ref_name(&self) -> Option<&str> {
        let SchemaOrRef::Ref { ref_path } = self else {
            return None;
        };
        ref_path.rsplit('/').next()
    }

    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaOrRef::Schema(schema) => Some(schema),
            SchemaOrRef::Ref { .. } => None,
        }
    }
}

/// Keywords that decide how a schema maps to a Go type. Everything else
/// in the document (`title`, `example`, validation keywords) is ignored.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: Option<TypeSet>,
    pub format: Option<String>,
    pub description: Option<String>,
    pub properties: IndexMap<String, SchemaOrRef>,
    pub required: Vec<String>,
    pub additional_properties: Option<AdditionalProperties>,
    pub items: Option<Box<SchemaOrRef>>,
    #[serde(rename = "enum")]
    pub enum_values: Vec<serde_json::Value>,
}

impl Schema {
    /// True when the effective type is `expected`; a nullable pair such as
    /// `[integer, "null"]` counts as its non-null member.
    pub fn is_type(&self, expected: SchemaType) -> bool {
        self.schema_type
            .as_ref()
            .and_then(TypeSet::effective)
            .is_some_and(|t| t == expected)
    }

    pub fn allows_additional_properties(&self) -> bool {
        matches!(
            self.additional_properties,
            Some(AdditionalProperties::Bool(true)) | Some(AdditionalProperties::Schema(_))
        )
    }

    /// String members of `enum`; numbers, booleans and nulls are dropped.
    pub fn string_enum_values(&self) -> Vec<String> {
        self.enum_values
            .iter()
            .filter_map(serde_json::Value::as_str)
            .map(str::to_owned)
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AdditionalProperties {
    Bool(bool),
    Schema(Box<SchemaOrRef>),
}
