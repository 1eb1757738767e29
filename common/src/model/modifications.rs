use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The property-override map applied on top of a template's defaults.
///
/// Keys are property selectors (element names, for this tool), values are the
/// override strings pushed to every preview instance. An absent key means
/// "use the template default", and writing an empty value removes the key
/// rather than storing an empty override, so clearing a field
/// restores the template's own content.
///
/// One `ModificationSet` is created per editing session and shared by
/// reference across every preview instance write. Because every push sends
/// the whole map, the last completed write wins display on each instance.
/// Serializes to the flat JSON object the preview engine expects.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationSet {
    #[serde(flatten)]
    entries: BTreeMap<String, String>,
}

impl ModificationSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores an override unconditionally.
    pub fn set(&mut self, selector: &str, value: &str) {
        self.entries.insert(selector.to_string(), value.to_string());
    }

    /// Removes an override, falling back to the template default.
    pub fn unset(&mut self, selector: &str) {
        self.entries.remove(selector);
    }

    /// The write rule used by every edit path: a non-empty value is stored,
    /// an empty value removes the key.
    pub fn apply(&mut self, selector: &str, value: &str) {
        if value.is_empty() {
            self.unset(selector);
        } else {
            self.set(selector, value);
        }
    }

    pub fn get(&self, selector: &str) -> Option<&str> {
        self.entries.get(selector).map(String::as_str)
    }

    /// A detached copy of the current overrides, safe to hold across await
    /// points while the shared set keeps changing.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.clone()
    }

    pub fn reset(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_round_trips_non_empty_values() {
        let mut mods = ModificationSet::new();
        mods.apply("Headline", "Hello");
        assert_eq!(mods.get("Headline"), Some("Hello"));
    }

    #[test]
    fn apply_with_empty_value_removes_the_key() {
        let mut mods = ModificationSet::new();
        mods.apply("Headline", "Hello");
        mods.apply("Headline", "");
        assert_eq!(mods.get("Headline"), None);
        assert!(mods.is_empty());
    }

    #[test]
    fn later_write_wins() {
        let mut mods = ModificationSet::new();
        mods.apply("Headline", "first");
        mods.apply("Headline", "second");
        assert_eq!(mods.get("Headline"), Some("second"));
        assert_eq!(mods.len(), 1);
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let mut mods = ModificationSet::new();
        mods.apply("Headline", "Hello");
        let snap = mods.snapshot();
        mods.apply("Headline", "changed");
        assert_eq!(snap.get("Headline").map(String::as_str), Some("Hello"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let mut mods = ModificationSet::new();
        mods.apply("Headline", "Hello");
        mods.apply("Front Image", "https://cdn.example/a.png");
        let json = serde_json::to_value(&mods).unwrap();
        assert_eq!(json["Headline"], "Hello");
        assert_eq!(json["Front Image"], "https://cdn.example/a.png");
    }
}
