//! Resource Registry - Load operation descriptors from JSON
//!
//! This module loads all VisionBoard Pro resource definitions from embedded
//! JSON files and provides lookup functions for the rest of the crate. The
//! tables are immutable and shared for the process lifetime; request
//! construction is driven entirely by these descriptors.

use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Embedded resource JSON files (compiled into the binary)
const RESOURCE_FILES: &[&str] = &[
    include_str!("../resources/strategy.json"),
    include_str!("../resources/targets.json"),
    include_str!("../resources/resources.json"),
    include_str!("../resources/execution.json"),
    include_str!("../resources/financial.json"),
    include_str!("../resources/collaboration.json"),
];

/// CRUD verb permitted on a resource collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verb {
    List,
    Create,
    Update,
    Delete,
}

/// Nested sub-resource definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct SubResourceDef {
    pub key: String,
    /// Path segment placed after the parent resource id
    pub path: String,
}

/// RPC-style action definition from JSON
///
/// `path` is relative to the group and may carry an `{id}` placeholder for
/// actions scoped to a single resource.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionDef {
    pub group: String,
    pub path: String,
    #[serde(default)]
    pub requires_body: bool,
}

impl ActionDef {
    /// Check if this action is scoped to a single resource id
    pub fn requires_id(&self) -> bool {
        self.path.contains("{id}")
    }
}

/// Resource definition from JSON
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceDef {
    pub group: String,
    pub collection: String,
    pub verbs: Vec<Verb>,
    /// Optional query parameter accepted by the list endpoint
    #[serde(default)]
    pub filter_param: Option<String>,
    #[serde(default)]
    pub sub_resources: Vec<SubResourceDef>,
}

impl ResourceDef {
    /// Check if a verb is permitted on this resource
    pub fn allows(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }

    /// Look up a nested sub-resource by key
    pub fn sub_resource(&self, key: &str) -> Option<&SubResourceDef> {
        self.sub_resources.iter().find(|s| s.key == key)
    }
}

/// Root structure of resources/*.json
#[derive(Debug, Clone, Deserialize)]
pub struct ResourceConfig {
    #[serde(default)]
    pub resources: HashMap<String, ResourceDef>,
    #[serde(default)]
    pub actions: HashMap<String, ActionDef>,
}

/// Global registry loaded from JSON
static REGISTRY: OnceLock<ResourceConfig> = OnceLock::new();

/// Get the resource registry (loads from embedded JSON on first access)
pub fn get_registry() -> &'static ResourceConfig {
    REGISTRY.get_or_init(|| {
        let mut final_config = ResourceConfig {
            resources: HashMap::new(),
            actions: HashMap::new(),
        };

        for content in RESOURCE_FILES {
            let partial: ResourceConfig = serde_json::from_str(content)
                .unwrap_or_else(|e| panic!("Failed to parse embedded resource JSON: {}", e));
            final_config.resources.extend(partial.resources);
            final_config.actions.extend(partial.actions);
        }

        final_config
    })
}

/// Get a resource definition by key
pub fn get_resource(key: &str) -> Option<&'static ResourceDef> {
    get_registry().resources.get(key)
}

/// Get an action definition by key
pub fn get_action(key: &str) -> Option<&'static ActionDef> {
    get_registry().actions.get(key)
}

/// Get all resource keys
pub fn get_all_resource_keys() -> Vec<&'static str> {
    get_registry()
        .resources
        .keys()
        .map(|s| s.as_str())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_loads_successfully() {
        let registry = get_registry();
        assert!(
            !registry.resources.is_empty(),
            "Registry should have resources"
        );
    }

    #[test]
    fn test_okrs_resource_exists() {
        let resource = get_resource("targets-okrs");
        assert!(resource.is_some(), "OKR resource should exist");

        let resource = resource.unwrap();
        assert_eq!(resource.group, "targets");
        assert_eq!(resource.collection, "okrs");
        assert!(resource.allows(Verb::Create));
        assert!(resource.sub_resource("key-results").is_some());
    }

    #[test]
    fn test_get_all_resource_keys() {
        let keys = get_all_resource_keys();
        assert_eq!(keys.len(), 11, "one key per declared resource");
        for key in [
            "strategy-pillars",
            "strategy-swot-entries",
            "targets-okrs",
            "targets-smart-goals",
            "resources-team-members",
            "resources-raci-entries",
            "execution-milestones",
            "execution-risks",
            "financial-budget-lines",
            "collaboration-discussions",
            "collaboration-knowledge-articles",
        ] {
            assert!(keys.contains(&key), "missing {}", key);
        }
    }

    #[test]
    fn test_all_six_groups_present() {
        let registry = get_registry();
        for group in [
            "strategy",
            "targets",
            "resources",
            "execution",
            "financial",
            "collaboration",
        ] {
            assert!(
                registry.resources.values().any(|r| r.group == group),
                "Group {} should have at least one resource",
                group
            );
        }
    }

    #[test]
    fn test_filter_params() {
        assert_eq!(
            get_resource("collaboration-discussions")
                .unwrap()
                .filter_param
                .as_deref(),
            Some("workspace")
        );
        assert_eq!(
            get_resource("collaboration-knowledge-articles")
                .unwrap()
                .filter_param
                .as_deref(),
            Some("category")
        );
        assert!(get_resource("execution-risks").unwrap().filter_param.is_none());
    }

    #[test]
    fn test_actions_exist() {
        let check_in = get_action("targets-okr-check-in").unwrap();
        assert!(check_in.requires_id());
        assert!(!check_in.requires_body);

        let forecast = get_action("financial-run-forecast").unwrap();
        assert!(!forecast.requires_id());
        assert!(forecast.requires_body);

        let coach = get_action("collaboration-ask-coach").unwrap();
        assert_eq!(coach.group, "collaboration");
        assert!(coach.requires_body);
    }
}
