// Previous/next page navigation.
// One controller per builder, parameterized by how it behaves at the ends.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::page::PageId;
use super::store::PageStore;

/// What happens when stepping past either end of the page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryPolicy {
    /// Stepping past an end does nothing.
    #[default]
    Clamped,
    /// Stepping past an end continues from the other end.
    Wrapping,
}

/// Direction of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Previous,
    Next,
}

/// Derives previous/next pages from the store's order and active pointer.
///
/// Every navigation entry point (the content panel buttons, the arrow keys,
/// per-tab controls) goes through the same controller so the policy is
/// uniform within one builder.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavigationController {
    policy: BoundaryPolicy,
}

impl NavigationController {
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Neighbor of `from` in direction `step`, or None at a clamped end or
    /// if `from` is not in the store.
    pub fn neighbor(&self, store: &PageStore, from: PageId, step: Step) -> Option<PageId> {
        let index = store.position(from)?;
        let last = store.len() - 1;

        let target = match (step, self.policy) {
            (Step::Previous, _) if index > 0 => index - 1,
            (Step::Previous, BoundaryPolicy::Wrapping) => last,
            (Step::Next, _) if index < last => index + 1,
            (Step::Next, BoundaryPolicy::Wrapping) => 0,
            (_, BoundaryPolicy::Clamped) => return None,
        };
        store.at(target).map(|page| page.id())
    }

    /// Whether stepping from the active page would move anywhere.
    pub fn can_step(&self, store: &PageStore, step: Step) -> bool {
        self.neighbor(store, store.active_id(), step)
            .is_some_and(|id| id != store.active_id())
    }

    /// Activate the page before the active one. Returns true if it moved.
    pub fn previous(&self, store: &mut PageStore) -> bool {
        self.step(store, Step::Previous)
    }

    /// Activate the page after the active one. Returns true if it moved.
    pub fn next(&self, store: &mut PageStore) -> bool {
        self.step(store, Step::Next)
    }

    /// Move the active pointer one step in `step`'s direction.
    pub fn step(&self, store: &mut PageStore, step: Step) -> bool {
        match self.neighbor(store, store.active_id(), step) {
            Some(id) if id != store.active_id() => store.set_active(id),
            _ => false,
        }
    }
}
