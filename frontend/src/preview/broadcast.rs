//! Best-effort fan-out over preview targets.
//!
//! One logical edit reaches several preview instances. The instances are
//! independent: one failing (seek rejected, push rejected, instance gone)
//! must never abort or roll back the others. [`broadcast`] runs one
//! operation against each given target concurrently and returns a per-target
//! outcome list instead of a first error.

use std::cell::Cell;
use std::future::Future;

use futures::future::join_all;

use super::handle::PreviewError;

/// One preview instance participating in a session. Exactly one target per
/// session is the main one; the rest are additional previews whose
/// activation the user toggles. Activation is interior-mutable so toggling
/// works through the shared session handle.
pub struct PreviewTarget<P> {
    pub key: String,
    pub handle: P,
    active: Cell<bool>,
}

impl<P> PreviewTarget<P> {
    pub fn new(key: impl Into<String>, handle: P, active: bool) -> Self {
        Self {
            key: key.into(),
            handle,
            active: Cell::new(active),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }

    pub(crate) fn set_active(&self, active: bool) {
        self.active.set(active);
    }
}

/// Per-target result of one broadcast operation.
#[derive(Debug)]
pub struct TargetOutcome {
    pub key: String,
    pub result: Result<(), PreviewError>,
}

impl TargetOutcome {
    pub fn ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Runs `op` against every given target concurrently and collects one
/// outcome per target, in the order the targets were given. Completion order
/// between targets is undefined; a failure is captured in that target's
/// outcome and the remaining targets run to completion regardless.
pub async fn broadcast<'a, P, F, Fut>(
    targets: impl IntoIterator<Item = &'a PreviewTarget<P>>,
    op: F,
) -> Vec<TargetOutcome>
where
    P: 'a,
    F: Fn(&'a PreviewTarget<P>) -> Fut,
    Fut: Future<Output = Result<(), PreviewError>> + 'a,
{
    let attempts = targets.into_iter().map(|target| {
        let attempt = op(target);
        async move {
            TargetOutcome {
                key: target.key.clone(),
                result: attempt.await,
            }
        }
    });
    join_all(attempts).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::super::handle::PreviewHandle;
    use super::super::testing::MockPreview;
    use super::*;

    #[test]
    fn collects_one_outcome_per_target_despite_failures() {
        let targets = vec![
            PreviewTarget::new("a", MockPreview::default(), true),
            PreviewTarget::new("b", MockPreview::default().failing_set_time(), true),
            PreviewTarget::new("c", MockPreview::default(), true),
        ];

        let outcomes = block_on(broadcast(&targets, |t| t.handle.set_time(3.0)));

        assert_eq!(outcomes.len(), 3);
        assert!(outcomes[0].ok());
        assert!(!outcomes[1].ok());
        assert!(outcomes[2].ok());
        assert_eq!(outcomes[1].key, "b");
    }
}
