use std::fmt;

use indexmap::IndexMap;
use serde::Deserialize;

use super::payload::{ParameterOrRef, RequestBodyOrRef, ResponseOrRef};

/// HTTP methods that can carry actor methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpVerb {
    Get,
    Post,
    Put,
    Delete,
    Patch,
}

impl HttpVerb {
    pub const ALL: [HttpVerb; 5] = [
        HttpVerb::Get,
        HttpVerb::Post,
        HttpVerb::Put,
        HttpVerb::Delete,
        HttpVerb::Patch,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HttpVerb::Get => "GET",
            HttpVerb::Post => "POST",
            HttpVerb::Put => "PUT",
            HttpVerb::Delete => "DELETE",
            HttpVerb::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operation {
    pub operation_id: Option<String>,
    pub summary: Option<String>,
    pub description: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
    pub request_body: Option<RequestBodyOrRef>,
    /// Keyed by status code as written (`"200"`, `"default"`, ...).
    #[serde(default)]
    pub responses: IndexMap<String, ResponseOrRef>,
}

/// Operations under one path. OPTIONS, HEAD and TRACE are parsed so that
/// documents using them load, but never become actor methods.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct PathItem {
    #[serde(default)]
    pub parameters: Vec<ParameterOrRef>,
    pub get: Option<Operation>,
    pub post: Option<Operation>,
    pub put: Option<Operation>,
    pub delete: Option<Operation>,
    pub patch: Option<Operation>,
    pub options: Option<Operation>,
    pub head: Option<Operation>,
    pub trace: Option<Operation>,
}

impl PathItem {
    pub fn operation(&self, verb: HttpVerb) -> Option<&Operation> {
        match verb {
            HttpVerb::Get => self.get.as_ref(),
            HttpVerb::Post => self.post.as_ref(),
            HttpVerb::Put => self.put.as_ref(),
            HttpVerb::Delete => self.delete.as_ref(),
            HttpVerb::Patch => self.patch.as_ref(),
        }
    }

    /// Declared operations that can map to actor methods, in `HttpVerb::ALL` order.
    pub fn actor_operations(&self) -> impl Iterator<Item = (HttpVerb, &Operation)> {
        HttpVerb::ALL
            .into_iter()
            .filter_map(|verb| self.operation(verb).map(|op| (verb, op)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_actor_operations_skip_other_verbs() {
        let item: PathItem = serde_yaml_ng::from_str(
            "head:\n  summary: h\npatch:\n  summary: p\nget:\n  summary: g\n",
        )
        .unwrap();
        let verbs: Vec<_> = item.actor_operations().map(|(v, _)| v.as_str()).collect();
        assert_eq!(verbs, vec!["GET", "PATCH"]);
        assert!(item.head.is_some());
    }
}
