use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

pub const HEALTHY: &str = "healthy";
pub const UNHEALTHY: &str = "unhealthy";

/// Tag vocabulary and the category table. Category membership is a static
/// lookup, never derived from the log; a tag may sit in zero, one, or
/// several categories.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagConfig {
    pub tags: Vec<String>,
    pub categories: BTreeMap<String, BTreeSet<String>>,
}

impl TagConfig {
    pub fn known(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

impl Default for TagConfig {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(HEALTHY.to_string(), tag_set(&["🥦", "🥘"]));
        categories.insert(UNHEALTHY.to_string(), tag_set(&["🍔", "🎂"]));
        Self {
            tags: ["🥦", "🥘", "🍔", "🎂"].iter().map(|t| t.to_string()).collect(),
            categories,
        }
    }
}

fn tag_set(tags: &[&str]) -> BTreeSet<String> {
    tags.iter().map(|t| t.to_string()).collect()
}
