//! Seek-before-write: the engine only guarantees that a freshly pushed
//! property visibly applies to an element that is inside its active timeline
//! window at the moment the instruction lands. Writing to an element that is
//! currently off-screen can silently produce no visible change, so every
//! write is preceded by a seek onto the edited element.

use common::model::element::{Element, ElementKind};

use super::handle::{PreviewError, PreviewHandle};

/// Seconds past an element's start time the seek lands on, keeping the
/// element comfortably inside its active window.
pub const VISIBILITY_LEAD_SECONDS: f64 = 1.5;

/// Seeks `target` to the named element's timeline position plus
/// `lead_seconds`. A target that does not carry the element (aspect-ratio
/// variants omit slots) is left untouched; that is a no-op, not an error.
pub async fn ensure_visible<P: PreviewHandle>(
    target: &P,
    source_name: &str,
    lead_seconds: f64,
) -> Result<(), PreviewError> {
    let elements = target.elements().await?;
    match find_named(&elements, source_name) {
        Some(element) => target.set_time(element.global_time + lead_seconds).await,
        None => Ok(()),
    }
}

/// Finds the first element with the given name, in document order, descending
/// one level into compositions, matching the depth the binding resolver walks.
fn find_named<'a>(elements: &'a [Element], name: &str) -> Option<&'a Element> {
    for element in elements {
        if element.name.as_deref() == Some(name) {
            return Some(element);
        }
        if element.kind == ElementKind::Composition {
            if let Some(child) = element
                .children
                .iter()
                .find(|child| child.name.as_deref() == Some(name))
            {
                return Some(child);
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::super::testing::{MockCall, MockPreview};
    use super::*;

    #[test]
    fn seeks_to_element_time_plus_lead() {
        let preview = MockPreview::default().with_element("Headline", 4.0);
        block_on(ensure_visible(&preview, "Headline", VISIBILITY_LEAD_SECONDS)).unwrap();
        assert_eq!(preview.calls(), vec![MockCall::Elements, MockCall::SetTime(5.5)]);
    }

    #[test]
    fn finds_elements_inside_compositions() {
        let preview = MockPreview::default().with_composed_element("Front Image", 10.0);
        block_on(ensure_visible(&preview, "Front Image", 1.5)).unwrap();
        assert_eq!(
            preview.calls(),
            vec![MockCall::Elements, MockCall::SetTime(11.5)]
        );
    }

    #[test]
    fn missing_element_is_a_no_op() {
        let preview = MockPreview::default().with_element("Headline", 4.0);
        block_on(ensure_visible(&preview, "Sponsor Logo", 1.5)).unwrap();
        // No seek was issued for the absent slot.
        assert_eq!(preview.calls(), vec![MockCall::Elements]);
    }

    #[test]
    fn element_query_failure_propagates() {
        let preview = MockPreview::default().failing_elements();
        let result = block_on(ensure_visible(&preview, "Headline", 1.5));
        assert!(result.is_err());
    }
}
