use std::collections::HashSet;

use heck::ToUpperCamelCase;

/// Upper-case the first character, leaving the rest untouched.
///
/// `accountId` → `AccountId`, `user_id` → `User_id`.
pub fn capitalize_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Whether `name` can be used as an exported identifier.
pub fn is_exported(name: &str) -> bool {
    name.chars().next().is_some_and(char::is_uppercase)
}

/// Name for an inline schema promoted out of `parent`'s `property`.
///
/// `("AccountEvent", "event_type")` → `AccountEventEventType`.
pub fn promoted_name(parent: &str, property: &str) -> String {
    format!("{parent}{}", property.to_upper_camel_case())
}

/// Return `base`, or `base2`, `base3`, … if already taken, and reserve it.
pub fn unique_name(base: &str, used: &mut HashSet<String>) -> String {
    if used.insert(base.to_string()) {
        return base.to_string();
    }
    let mut suffix = 2;
    loop {
        let candidate = format!("{base}{suffix}");
        if used.insert(candidate.clone()) {
            return candidate;
        }
        suffix += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first() {
        assert_eq!(capitalize_first("accountId"), "AccountId");
        assert_eq!(capitalize_first("user_id"), "User_id");
        assert_eq!(capitalize_first("Already"), "Already");
        assert_eq!(capitalize_first("élan"), "Élan");
        assert_eq!(capitalize_first(""), "");
    }

    #[test]
    fn test_is_exported() {
        assert!(is_exported("GetValue"));
        assert!(!is_exported("getValue"));
        assert!(!is_exported("_Get"));
        assert!(!is_exported(""));
    }

    #[test]
    fn test_promoted_name() {
        assert_eq!(promoted_name("AccountEvent", "eventType"), "AccountEventEventType");
        assert_eq!(promoted_name("Task", "run-state"), "TaskRunState");
    }

    #[test]
    fn test_unique_name() {
        let mut used: HashSet<String> = ["Mode".to_string()].into_iter().collect();
        assert_eq!(unique_name("Mode", &mut used), "Mode2");
        assert_eq!(unique_name("Mode", &mut used), "Mode3");
        assert_eq!(unique_name("Kind", &mut used), "Kind");
    }
}
