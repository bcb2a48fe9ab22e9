use super::types::TypeSignature;

/// One member of a generated struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Exported identifier (first letter capitalized).
    pub name: String,
    pub field_type: TypeSignature,
    /// Original property name, used as the serialization key.
    pub json_name: String,
    /// Members outside the schema's `required` list are omitted when absent.
    pub required: bool,
    pub comment: Option<String>,
}

impl Field {
    /// Serialization tag, e.g. `count` or `count,omitempty`.
    pub fn json_tag(&self) -> String {
        if self.required {
            self.json_name.clone()
        } else {
            format!("{},omitempty", self.json_name)
        }
    }
}

/// An object schema with at least one property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructType {
    pub name: String,
    pub description: Option<String>,
    /// Sorted by field name.
    pub fields: Vec<Field>,
}

/// A named redirection to another type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeAlias {
    pub name: String,
    pub description: Option<String>,
    pub target: TypeSignature,
    /// Schema or parameter name the alias was derived from.
    pub original_name: String,
}

/// A closed set of string values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumType {
    pub name: String,
    pub description: Option<String>,
    /// Declaration order from the source schema; never sorted.
    pub values: Vec<String>,
}

/// Structs, aliases and enums, each sorted by name unless noted otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeDefinitions {
    pub structs: Vec<StructType>,
    pub aliases: Vec<TypeAlias>,
    pub enums: Vec<EnumType>,
}

impl TypeDefinitions {
    pub fn is_empty(&self) -> bool {
        self.structs.is_empty() && self.aliases.is_empty() && self.enums.is_empty()
    }

    pub fn len(&self) -> usize {
        self.structs.len() + self.aliases.len() + self.enums.len()
    }

    /// Whether `name` is defined in any category.
    pub fn contains(&self, name: &str) -> bool {
        self.structs.iter().any(|s| s.name == name)
            || self.aliases.iter().any(|a| a.name == name)
            || self.enums.iter().any(|e| e.name == name)
    }

    pub fn find_struct(&self, name: &str) -> Option<&StructType> {
        self.structs.iter().find(|s| s.name == name)
    }

    pub fn find_alias(&self, name: &str) -> Option<&TypeAlias> {
        self.aliases.iter().find(|a| a.name == name)
    }

    pub fn find_enum(&self, name: &str) -> Option<&EnumType> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Sort structs, their fields, and aliases by name. Enums keep their
    /// discovery order unless `sort_enums` is set; enum values are never touched.
    pub fn sort(&mut self, sort_enums: bool) {
        self.structs.sort_by(|a, b| a.name.cmp(&b.name));
        for s in &mut self.structs {
            s.fields.sort_by(|a, b| a.name.cmp(&b.name));
        }
        self.aliases.sort_by(|a, b| a.name.cmp(&b.name));
        if sort_enums {
            self.enums.sort_by(|a, b| a.name.cmp(&b.name));
        }
    }
}
