//! One editing session: the shared modification set, the fixed target set,
//! and the pipeline a logical edit travels through.
//!
//! The session owns the only [`ModificationSet`] of the editing session,
//! shared by reference across every instance write. Every edit updates that
//! one map and then pushes the whole snapshot to the main target and to each
//! active additional target, seeking each onto the edited element first.
//! Targets settle independently: the edit resolves once every attempt has
//! finished, successes and captured failures alike, with no ordering between
//! the additional targets and no cross-target atomicity. Two overlapping
//! edits may interleave at await points; the later-completing push wins
//! display on each target.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use common::model::modifications::ModificationSet;

use super::broadcast::{broadcast, PreviewTarget, TargetOutcome};
use super::handle::{PreviewError, PreviewHandle};
use super::sequencer::{ensure_visible, VISIBILITY_LEAD_SECONDS};

pub struct PreviewSession<P> {
    main: PreviewTarget<P>,
    additional: Vec<PreviewTarget<P>>,
    modifications: Rc<RefCell<ModificationSet>>,
}

impl<P: PreviewHandle> PreviewSession<P> {
    /// Starts a session around the main preview. The main target is always
    /// active and cannot be toggled.
    pub fn new(main_key: impl Into<String>, main_handle: P) -> Self {
        Self {
            main: PreviewTarget::new(main_key, main_handle, true),
            additional: Vec::new(),
            modifications: Rc::new(RefCell::new(ModificationSet::new())),
        }
    }

    /// Attaches an additional preview. The target set is fixed before
    /// editing begins; afterwards only activation flags change.
    pub fn attach(&mut self, key: impl Into<String>, handle: P, active: bool) {
        self.additional.push(PreviewTarget::new(key, handle, active));
    }

    /// Toggles an additional target. The main target is not addressable
    /// here; unknown keys are ignored.
    pub fn set_active(&self, key: &str, active: bool) {
        if let Some(target) = self.additional.iter().find(|t| t.key == key) {
            target.set_active(active);
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        if self.main.key == key {
            return true;
        }
        self.additional
            .iter()
            .any(|t| t.key == key && t.is_active())
    }

    /// Keys of every target currently receiving writes, main first.
    pub fn active_keys(&self) -> Vec<String> {
        let mut keys = vec![self.main.key.clone()];
        keys.extend(
            self.additional
                .iter()
                .filter(|t| t.is_active())
                .map(|t| t.key.clone()),
        );
        keys
    }

    /// The current override for a selector, if any.
    pub fn value_of(&self, selector: &str) -> Option<String> {
        self.modifications.borrow().get(selector).map(str::to_string)
    }

    pub fn has_overrides(&self) -> bool {
        !self.modifications.borrow().is_empty()
    }

    /// Applies one edit: updates the shared set (empty value removes the
    /// key) and synchronizes every active target. Never fails from the
    /// caller's point of view; per-target failures are in the outcome list.
    pub async fn apply_edit(&self, selector: &str, value: &str) -> Vec<TargetOutcome> {
        // Mutate before the first await so the borrow never spans one.
        self.modifications.borrow_mut().apply(selector, value);
        let snapshot = Rc::new(self.modifications.borrow().snapshot());

        let mut outcomes = vec![TargetOutcome {
            key: self.main.key.clone(),
            result: write_target(&self.main, selector, &snapshot).await,
        }];

        let active = self.additional.iter().filter(|t| t.is_active());
        outcomes
            .extend(broadcast(active, |target| {
                let snapshot = Rc::clone(&snapshot);
                let selector = selector.to_string();
                async move { write_target(target, &selector, &snapshot).await }
            })
            .await);
        outcomes
    }

    /// Applies a derived edit list: the pairs are issued strictly in order,
    /// each fanning out before the next starts. A failure partway through
    /// does not undo earlier pairs.
    pub async fn apply_edits(&self, edits: &[(String, String)]) -> Vec<TargetOutcome> {
        let mut outcomes = Vec::new();
        for (selector, value) in edits {
            outcomes.extend(self.apply_edit(selector, value).await);
        }
        outcomes
    }

    /// Drops every override and pushes the now-empty map to all active
    /// targets, restoring template defaults everywhere.
    pub async fn reset(&self) -> Vec<TargetOutcome> {
        self.modifications.borrow_mut().reset();
        let snapshot = Rc::new(self.modifications.borrow().snapshot());

        let mut outcomes = vec![TargetOutcome {
            key: self.main.key.clone(),
            result: self.main.handle.set_modifications(&snapshot).await,
        }];

        let active = self.additional.iter().filter(|t| t.is_active());
        outcomes
            .extend(broadcast(active, |target| {
                let snapshot = Rc::clone(&snapshot);
                async move { target.handle.set_modifications(&snapshot).await }
            })
            .await);
        outcomes
    }

    /// Exports the main target's template source graph.
    pub async fn export_source(&self) -> Result<serde_json::Value, PreviewError> {
        self.main.handle.template_source().await
    }
}

/// One target's write pipeline: seek onto the edited element, then push the
/// whole override map. The seek strictly precedes the write on this target.
async fn write_target<P: PreviewHandle>(
    target: &PreviewTarget<P>,
    selector: &str,
    snapshot: &BTreeMap<String, String>,
) -> Result<(), PreviewError> {
    ensure_visible(&target.handle, selector, VISIBILITY_LEAD_SECONDS).await?;
    target.handle.set_modifications(snapshot).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::super::testing::{MockCall, MockPreview};
    use super::*;

    fn session_with_two_additional(
        second_active: bool,
    ) -> (PreviewSession<MockPreview>, MockPreview, MockPreview, MockPreview) {
        let main = MockPreview::default().with_element("Headline", 2.0);
        let first = MockPreview::default().with_element("Headline", 6.0);
        let second = MockPreview::default().with_element("Headline", 1.0);
        let mut session = PreviewSession::new("main", main.clone());
        session.attach("vertical", first.clone(), true);
        session.attach("square", second.clone(), second_active);
        (session, main, first, second)
    }

    #[test]
    fn edit_reaches_main_and_active_targets_only() {
        let (session, main, first, second) = session_with_two_additional(false);

        let outcomes = block_on(session.apply_edit("Headline", "Hello"));

        assert_eq!(outcomes.len(), 2);
        assert!(outcomes.iter().all(TargetOutcome::ok));
        assert!(!main.calls().is_empty());
        assert!(!first.calls().is_empty());
        // The inactive target never hears about the edit.
        assert_eq!(second.calls(), vec![]);
    }

    #[test]
    fn seek_strictly_precedes_write_per_target() {
        let (session, main, first, _) = session_with_two_additional(false);

        block_on(session.apply_edit("Headline", "Hello"));

        let expected_mods: std::collections::BTreeMap<String, String> =
            [("Headline".to_string(), "Hello".to_string())].into();
        assert_eq!(
            main.calls(),
            vec![
                MockCall::Elements,
                MockCall::SetTime(3.5),
                MockCall::SetModifications(expected_mods.clone()),
            ]
        );
        assert_eq!(
            first.calls(),
            vec![
                MockCall::Elements,
                MockCall::SetTime(7.5),
                MockCall::SetModifications(expected_mods),
            ]
        );
    }

    #[test]
    fn failing_target_never_blocks_its_siblings() {
        let main = MockPreview::default().with_element("Headline", 2.0);
        let broken = MockPreview::default().failing_set_modifications();
        let healthy = MockPreview::default().with_element("Headline", 1.0);
        let mut session = PreviewSession::new("main", main.clone());
        session.attach("broken", broken, true);
        session.attach("healthy", healthy.clone(), true);

        let outcomes = block_on(session.apply_edit("Headline", "Hello"));

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].ok());
        assert!(!outcomes[1].ok());
        assert!(outcomes[2].ok());
        // Both the main and the healthy sibling still received the push.
        assert!(main
            .calls()
            .iter()
            .any(|c| matches!(c, MockCall::SetModifications(_))));
        assert!(healthy
            .calls()
            .iter()
            .any(|c| matches!(c, MockCall::SetModifications(_))));
    }

    #[test]
    fn empty_value_removes_the_override_from_the_pushed_map() {
        let (session, main, ..) = session_with_two_additional(false);

        block_on(session.apply_edit("Headline", "Hello"));
        block_on(session.apply_edit("Headline", ""));

        match main.calls().last() {
            Some(MockCall::SetModifications(map)) => assert!(map.is_empty()),
            other => panic!("expected a modification push, got {other:?}"),
        }
        assert_eq!(session.value_of("Headline"), None);
    }

    #[test]
    fn edits_round_trip_through_the_shared_set() {
        let (session, ..) = session_with_two_additional(true);
        block_on(session.apply_edit("Headline", "Hello"));
        assert_eq!(session.value_of("Headline"), Some("Hello".to_string()));
        assert!(session.has_overrides());
    }

    #[test]
    fn derived_edits_apply_sequentially_and_without_rollback() {
        let main = MockPreview::default();
        let session = PreviewSession::new("main", main.clone());

        let edits = vec![
            ("teamLogoLeft".to_string(), "https://cdn/a.png".to_string()),
            ("teamNameLeft".to_string(), "FC Example".to_string()),
        ];
        let outcomes = block_on(session.apply_edits(&edits));

        assert_eq!(outcomes.len(), 2);
        // The second push already carries the first pair.
        let pushes: Vec<_> = main
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                MockCall::SetModifications(map) => Some(map),
                _ => None,
            })
            .collect();
        assert_eq!(pushes.len(), 2);
        assert_eq!(pushes[0].len(), 1);
        assert_eq!(pushes[1].len(), 2);
        assert_eq!(
            pushes[1].get("teamNameLeft").map(String::as_str),
            Some("FC Example")
        );
    }

    #[test]
    fn toggling_changes_who_receives_the_next_edit() {
        let (session, _, _, second) = session_with_two_additional(false);
        assert!(!session.is_active("square"));

        session.set_active("square", true);
        block_on(session.apply_edit("Headline", "Hello"));

        assert!(session.is_active("square"));
        assert!(!second.calls().is_empty());
        assert_eq!(
            session.active_keys(),
            vec!["main".to_string(), "vertical".to_string(), "square".to_string()]
        );
    }

    #[test]
    fn reset_clears_overrides_everywhere() {
        let (session, main, first, _) = session_with_two_additional(false);
        block_on(session.apply_edit("Headline", "Hello"));

        let outcomes = block_on(session.reset());

        assert_eq!(outcomes.len(), 2);
        assert!(!session.has_overrides());
        for handle in [&main, &first] {
            match handle.calls().last() {
                Some(MockCall::SetModifications(map)) => assert!(map.is_empty()),
                other => panic!("expected a modification push, got {other:?}"),
            }
        }
    }
}
