use std::fmt;

/// Built-in scalar types a schema can map to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    String,
    /// Platform-default integer.
    Int,
    Int32,
    Float32,
    Float64,
    Bool,
}

impl ScalarType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScalarType::String => "string",
            ScalarType::Int => "int",
            ScalarType::Int32 => "int32",
            ScalarType::Float32 => "float32",
            ScalarType::Float64 => "float64",
            ScalarType::Bool => "bool",
        }
    }
}

/// The semantic type of a field, alias target, or method return value.
///
/// Kept as a tagged value throughout the pipeline and only lowered to
/// source text by a generator.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    Scalar(ScalarType),
    /// A named schema, recorded verbatim from the `$ref`.
    Reference(String),
    ArrayOf(Box<TypeSignature>),
    MapOfStringToDynamic,
    Dynamic,
}

impl TypeSignature {
    pub fn reference(name: impl Into<String>) -> Self {
        TypeSignature::Reference(name.into())
    }

    pub fn array_of(inner: TypeSignature) -> Self {
        TypeSignature::ArrayOf(Box::new(inner))
    }

    /// The named type this signature points at, looking through arrays.
    pub fn referenced_name(&self) -> Option<&str> {
        match self {
            TypeSignature::Reference(name) => Some(name),
            TypeSignature::ArrayOf(inner) => inner.referenced_name(),
            _ => None,
        }
    }

    pub fn is_dynamic(&self) -> bool {
        matches!(self, TypeSignature::Dynamic)
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Scalar(s) => f.write_str(s.as_str()),
            TypeSignature::Reference(name) => f.write_str(name),
            TypeSignature::ArrayOf(inner) => write!(f, "array-of-{inner}"),
            TypeSignature::MapOfStringToDynamic => f.write_str("map-of-string-to-dynamic"),
            TypeSignature::Dynamic => f.write_str("dynamic"),
        }
    }
}
