use serde::{Deserialize, Serialize};

/// One node of the element tree a preview instance exposes for
/// personalization.
///
/// The preview engine reports its state as a tree of named slots. Only the
/// fields relevant to binding and seeking are modeled here; everything else
/// the engine sends is ignored during deserialization. Field names cross the
/// JS boundary in camelCase.
///
/// `name` is the user-assigned slot name. Elements without a name are not
/// editable and are skipped by the binding resolver. `global_time` is the
/// element's start time on the instance's own timeline, in seconds, and is
/// what the seek-before-write step targets.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Element {
    pub id: String,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: ElementKind,
    pub text: Option<String>,
    pub global_time: f64,
    pub duration: f64,
    pub children: Vec<Element>,
}

/// Element kinds as reported by the preview engine. Kinds this tool does not
/// personalize (shapes, audio, ...) all map to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Text,
    Image,
    Video,
    Composition,
    #[serde(other)]
    Other,
}

impl Default for ElementKind {
    fn default() -> Self {
        ElementKind::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_engine_state_with_defaults() {
        let json = r#"[
            {"id": "e1", "name": "Headline", "type": "text", "text": "Hi", "globalTime": 2.0},
            {"id": "e2", "type": "shape"},
            {"id": "e3", "name": "Intro", "type": "composition",
             "children": [{"id": "e4", "name": "Front Image", "type": "image"}]}
        ]"#;

        let elements: Vec<Element> = serde_json::from_str(json).unwrap();
        assert_eq!(elements.len(), 3);
        assert_eq!(elements[0].kind, ElementKind::Text);
        assert_eq!(elements[0].global_time, 2.0);
        assert_eq!(elements[1].kind, ElementKind::Other);
        assert!(elements[1].name.is_none());
        assert_eq!(elements[2].kind, ElementKind::Composition);
        assert_eq!(elements[2].children.len(), 1);
        assert_eq!(elements[2].children[0].name.as_deref(), Some("Front Image"));
        assert_eq!(elements[2].children[0].global_time, 0.0);
    }
}
