//! Binding resolver: element tree in, ordered editable field list out.
//!
//! Slot names follow the naming conventions of the template designers, so
//! classification is driven purely by the name (and, as a last resort, the
//! element kind). The rules are evaluated in a fixed priority order by a
//! single classifier function rather than scattered conditionals:
//!
//! 1. exact match against the reserved vocabulary,
//! 2. the `playerImage(\d+)` pattern capturing a player slot index,
//! 3. fallback by kind: `GenericFile` for image/video, `PlainText` for text.
//!
//! Composition elements are never editable themselves; their direct children
//! are resolved with the same rules. The resolver deliberately descends only
//! one composition level, matching the template structure the preview engine
//! actually ships.

use std::collections::HashSet;

use common::model::element::{Element, ElementKind};
use regex::Regex;

/// Closed set of editable field types a named slot can resolve to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldRole {
    PlainText,
    GenericFile,
    FrontImage,
    SponsorLogo,
    TeamLogoLeft,
    TeamLogoRight,
    Player(u32),
}

/// One editable unit of the template: a slot name and how it is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldBinding {
    pub source_name: String,
    pub role: FieldRole,
}

/// Classifies one named element. Returns `None` for elements that render no
/// control: compositions and kinds this tool does not personalize.
pub fn classify(name: &str, kind: ElementKind) -> Option<FieldRole> {
    if kind == ElementKind::Composition {
        return None;
    }

    match name {
        "Front Image" => return Some(FieldRole::FrontImage),
        "Sponsor Logo" => return Some(FieldRole::SponsorLogo),
        "teamLogoLeft" => return Some(FieldRole::TeamLogoLeft),
        "teamLogoRight" => return Some(FieldRole::TeamLogoRight),
        _ => {}
    }

    let player_slot = Regex::new(r"^playerImage(\d+)$").unwrap();
    if let Some(caps) = player_slot.captures(name) {
        if let Ok(index) = caps[1].parse::<u32>() {
            return Some(FieldRole::Player(index));
        }
    }

    match kind {
        ElementKind::Image | ElementKind::Video => Some(FieldRole::GenericFile),
        ElementKind::Text => Some(FieldRole::PlainText),
        ElementKind::Composition | ElementKind::Other => None,
    }
}

/// Resolves the editable fields of an element tree, one binding per distinct
/// slot name, in first-occurrence document order. A name appearing more than
/// once (template variants often repeat slots) still renders one control; the
/// shared modification map makes that control reach every occurrence.
pub fn resolve_bindings(elements: &[Element]) -> Vec<FieldBinding> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut bindings = Vec::new();

    for element in elements {
        push_binding(element, &mut seen, &mut bindings);
        if element.kind == ElementKind::Composition {
            for child in &element.children {
                push_binding(child, &mut seen, &mut bindings);
            }
        }
    }

    bindings
}

fn push_binding(element: &Element, seen: &mut HashSet<String>, bindings: &mut Vec<FieldBinding>) {
    let Some(name) = element.name.as_deref() else {
        return;
    };
    if seen.contains(name) {
        return;
    }
    if let Some(role) = classify(name, element.kind) {
        seen.insert(name.to_string());
        bindings.push(FieldBinding {
            source_name: name.to_string(),
            role,
        });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn named(name: &str, kind: ElementKind) -> Element {
        Element {
            name: Some(name.to_string()),
            kind,
            ..Default::default()
        }
    }

    #[test]
    fn single_text_node_resolves_to_one_plain_text_binding() {
        let tree = vec![Element {
            name: Some("Headline".into()),
            kind: ElementKind::Text,
            text: Some("Hi".into()),
            ..Default::default()
        }];
        let bindings = resolve_bindings(&tree);
        assert_eq!(
            bindings,
            vec![FieldBinding {
                source_name: "Headline".into(),
                role: FieldRole::PlainText,
            }]
        );
    }

    #[test]
    fn reserved_names_beat_kind_fallback() {
        assert_eq!(
            classify("Front Image", ElementKind::Image),
            Some(FieldRole::FrontImage)
        );
        assert_eq!(
            classify("Sponsor Logo", ElementKind::Image),
            Some(FieldRole::SponsorLogo)
        );
        assert_eq!(
            classify("teamLogoLeft", ElementKind::Image),
            Some(FieldRole::TeamLogoLeft)
        );
        assert_eq!(
            classify("teamLogoRight", ElementKind::Image),
            Some(FieldRole::TeamLogoRight)
        );
    }

    #[test]
    fn player_pattern_captures_slot_index() {
        assert_eq!(
            classify("playerImage7", ElementKind::Image),
            Some(FieldRole::Player(7))
        );
        assert_eq!(
            classify("playerImage12", ElementKind::Image),
            Some(FieldRole::Player(12))
        );
        // Near misses fall through to the kind fallback.
        assert_eq!(
            classify("playerImage", ElementKind::Image),
            Some(FieldRole::GenericFile)
        );
        assert_eq!(
            classify("playerImage7b", ElementKind::Image),
            Some(FieldRole::GenericFile)
        );
    }

    #[test]
    fn kind_fallback_covers_files_and_text() {
        assert_eq!(
            classify("Background Clip", ElementKind::Video),
            Some(FieldRole::GenericFile)
        );
        assert_eq!(
            classify("Subline", ElementKind::Text),
            Some(FieldRole::PlainText)
        );
        assert_eq!(classify("Intro", ElementKind::Composition), None);
        assert_eq!(classify("Whoosh", ElementKind::Other), None);
    }

    #[test]
    fn unnamed_nodes_are_skipped_silently() {
        let tree = vec![
            Element {
                kind: ElementKind::Text,
                ..Default::default()
            },
            named("Headline", ElementKind::Text),
        ];
        let bindings = resolve_bindings(&tree);
        assert_eq!(bindings.len(), 1);
        assert_eq!(bindings[0].source_name, "Headline");
    }

    #[test]
    fn duplicate_names_render_one_control() {
        let tree = vec![
            named("Sponsor Logo", ElementKind::Image),
            named("Headline", ElementKind::Text),
            named("Sponsor Logo", ElementKind::Image),
        ];
        let bindings = resolve_bindings(&tree);
        assert_eq!(
            bindings.iter().map(|b| b.source_name.as_str()).collect::<Vec<_>>(),
            vec!["Sponsor Logo", "Headline"]
        );
    }

    #[test]
    fn compositions_unwrap_exactly_one_level() {
        let nested = Element {
            name: Some("Deep".into()),
            kind: ElementKind::Composition,
            children: vec![named("Buried", ElementKind::Text)],
            ..Default::default()
        };
        let top = Element {
            name: Some("Intro".into()),
            kind: ElementKind::Composition,
            children: vec![named("Front Image", ElementKind::Image), nested],
            ..Default::default()
        };
        let bindings = resolve_bindings(&[top, named("Headline", ElementKind::Text)]);
        let names: Vec<_> = bindings.iter().map(|b| b.source_name.as_str()).collect();
        // "Intro" and "Deep" are compositions (never editable) and "Buried"
        // sits below the one supported nesting level.
        assert_eq!(names, vec!["Front Image", "Headline"]);
    }

    #[test]
    fn first_occurrence_order_is_preserved() {
        let tree = vec![
            named("playerImage1", ElementKind::Image),
            named("Headline", ElementKind::Text),
            named("Front Image", ElementKind::Image),
        ];
        let bindings = resolve_bindings(&tree);
        assert_eq!(
            bindings.iter().map(|b| b.role.clone()).collect::<Vec<_>>(),
            vec![
                FieldRole::Player(1),
                FieldRole::PlainText,
                FieldRole::FrontImage
            ]
        );
    }
}
