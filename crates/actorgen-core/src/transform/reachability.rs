use std::collections::{BTreeMap, BTreeSet};

use crate::config::Propagation;
use crate::ir::{ActorInterface, TypeDefinitions};

/// Edges from each struct to the named types its fields reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DependencyGraph {
    edges: BTreeMap<String, BTreeSet<String>>,
}

impl DependencyGraph {
    /// Only references to types present in `types` become edges.
    pub fn build(types: &TypeDefinitions) -> Self {
        let mut edges: BTreeMap<String, BTreeSet<String>> = BTreeMap::new();
        for st in &types.structs {
            for field in &st.fields {
                let target = field.field_type.referenced_name();
                if let Some(target) = target.filter(|t| types.contains(t)) {
                    edges
                        .entry(st.name.clone())
                        .or_default()
                        .insert(target.to_string());
                }
            }
        }
        Self { edges }
    }

    pub fn dependencies(&self, name: &str) -> impl Iterator<Item = &str> {
        self.edges
            .get(name)
            .into_iter()
            .flat_map(|deps| deps.iter().map(String::as_str))
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &BTreeSet<String>)> {
        self.edges.iter()
    }
}

/// Which actors use each named type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeUsage {
    users: BTreeMap<String, BTreeSet<String>>,
}

impl TypeUsage {
    /// Direct usage: request types and return types named by each method.
    pub fn seed(actors: &[ActorInterface], types: &TypeDefinitions) -> Self {
        let mut usage = Self::default();
        for actor in actors {
            for method in &actor.methods {
                let request = method.request_type.as_deref().filter(|_| method.has_request);
                let response = method.return_type.referenced_name();
                for name in request.into_iter().chain(response) {
                    if types.contains(name) {
                        usage.insert(name, &actor.actor_type);
                    }
                }
            }
        }
        usage
    }

    /// Extend usage along struct dependencies.
    ///
    /// `SingleHop` copies each struct's direct users onto its immediate
    /// dependencies only, reading from the unpropagated usage so the result
    /// does not depend on iteration order. `Transitive` repeats until no
    /// new pair appears.
    pub fn propagate(&self, graph: &DependencyGraph, mode: Propagation) -> Self {
        let mut result = self.clone();
        match mode {
            Propagation::SingleHop => {
                for (parent, deps) in graph.iter() {
                    for actor in self.users_of(parent) {
                        for dep in deps {
                            result.insert(dep, actor);
                        }
                    }
                }
            }
            Propagation::Transitive => loop {
                let mut changed = false;
                for (parent, deps) in graph.iter() {
                    let actors: Vec<String> = result.users_of(parent).map(String::from).collect();
                    for actor in &actors {
                        for dep in deps {
                            changed |= result.insert(dep, actor);
                        }
                    }
                }
                if !changed {
                    break;
                }
            },
        }
        result
    }

    pub fn users_of(&self, name: &str) -> impl Iterator<Item = &str> {
        self.users
            .get(name)
            .into_iter()
            .flat_map(|actors| actors.iter().map(String::as_str))
    }

    pub fn is_used_by(&self, name: &str, actor: &str) -> bool {
        self.users.get(name).is_some_and(|a| a.contains(actor))
    }

    fn insert(&mut self, name: &str, actor: &str) -> bool {
        self.users
            .entry(name.to_string())
            .or_default()
            .insert(actor.to_string())
    }
}

/// Copy every global type into the definitions of each actor that uses it.
///
/// Structs and aliases are sorted by name; enums keep global table order.
pub fn attribute_types(
    actors: &[ActorInterface],
    types: &TypeDefinitions,
    propagation: Propagation,
) -> BTreeMap<String, TypeDefinitions> {
    let graph = DependencyGraph::build(types);
    let usage = TypeUsage::seed(actors, types).propagate(&graph, propagation);

    let mut per_actor: BTreeMap<String, TypeDefinitions> = actors
        .iter()
        .map(|a| (a.actor_type.clone(), TypeDefinitions::default()))
        .collect();

    for st in &types.structs {
        for actor in usage.users_of(&st.name) {
            if let Some(defs) = per_actor.get_mut(actor) {
                defs.structs.push(st.clone());
            }
        }
    }
    for alias in &types.aliases {
        for actor in usage.users_of(&alias.name) {
            if let Some(defs) = per_actor.get_mut(actor) {
                defs.aliases.push(alias.clone());
            }
        }
    }
    for en in &types.enums {
        for actor in usage.users_of(&en.name) {
            if let Some(defs) = per_actor.get_mut(actor) {
                defs.enums.push(en.clone());
            }
        }
    }

    for defs in per_actor.values_mut() {
        defs.sort(false);
    }
    per_actor
}
