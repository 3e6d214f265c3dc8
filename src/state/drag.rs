// Drag gesture state machine.
// Tracks the dragged page, the hovered drop slot, and enter/leave nesting.

use super::page::PageId;
use super::store::PageStore;

/// One in-flight drag gesture, or none.
///
/// `Idle` is both the initial and the resting state; a gesture can only
/// start from it. Events are applied strictly in arrival order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragSession {
    #[default]
    Idle,
    Dragging {
        /// Page being dragged.
        source: PageId,
        /// Slot currently indicated as the drop target.
        hover: Option<usize>,
        /// Unmatched enter events over leave events within drop zones.
        depth: u32,
    },
}

/// What the presentation layer reads each render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DragSnapshot {
    pub source: Option<PageId>,
    pub hover: Option<usize>,
    /// Slot that should render the drop highlight. Never the source's own slot.
    pub highlight: Option<usize>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin dragging `source`. Ignored while another gesture is in flight.
    pub fn start(&mut self, source: PageId) -> bool {
        match self {
            DragSession::Idle => {
                *self = DragSession::Dragging {
                    source,
                    hover: None,
                    depth: 0,
                };
                true
            }
            DragSession::Dragging { .. } => false,
        }
    }

    /// Pointer is over slot `index`; always overwrites the previous target.
    pub fn over(&mut self, index: usize) {
        if let DragSession::Dragging { hover, .. } = self {
            *hover = Some(index);
        }
    }

    /// Pointer entered a drop zone (possibly nested inside another).
    pub fn enter(&mut self) {
        if let DragSession::Dragging { depth, .. } = self {
            *depth = depth.saturating_add(1);
        }
    }

    /// Pointer left a drop zone. The hover target clears only once every
    /// entered zone has been left, so crossing into a nested child and
    /// back does not flicker the highlight.
    pub fn leave(&mut self) {
        if let DragSession::Dragging { hover, depth, .. } = self {
            *depth = depth.saturating_sub(1);
            if *depth == 0 {
                *hover = None;
            }
        }
    }

    /// Drop at slot `index`: commit the move into `store` and return to
    /// `Idle` whatever the outcome. Returns true if the order changed.
    pub fn drop_at(&mut self, index: usize, store: &mut PageStore) -> bool {
        let changed = match *self {
            DragSession::Dragging { source, .. } => store.reorder(source, index),
            DragSession::Idle => false,
        };
        *self = DragSession::Idle;
        changed
    }

    /// Abandon the gesture. Overrides any nesting depth.
    pub fn end(&mut self) {
        *self = DragSession::Idle;
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, DragSession::Dragging { .. })
    }

    pub fn source(&self) -> Option<PageId> {
        match self {
            DragSession::Dragging { source, .. } => Some(*source),
            DragSession::Idle => None,
        }
    }

    pub fn hover(&self) -> Option<usize> {
        match self {
            DragSession::Dragging { hover, .. } => *hover,
            DragSession::Idle => None,
        }
    }

    pub fn depth(&self) -> u32 {
        match self {
            DragSession::Dragging { depth, .. } => *depth,
            DragSession::Idle => 0,
        }
    }

    /// Snapshot for rendering, resolved against the current page order.
    pub fn snapshot(&self, store: &PageStore) -> DragSnapshot {
        let source = self.source();
        let hover = self.hover();
        let highlight = hover.filter(|&index| {
            store
                .at(index)
                .is_some_and(|page| Some(page.id()) != source)
        });
        DragSnapshot {
            source,
            hover,
            highlight,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn abcd() -> PageStore {
        PageStore::with_pages(["A", "B", "C", "D"])
    }

    fn names(store: &PageStore) -> Vec<&str> {
        store.pages().iter().map(|p| p.name.as_str()).collect()
    }

    #[test]
    fn test_start_initializes_gesture() {
        let store = abcd();
        let mut drag = DragSession::new();
        assert!(drag.start(store.ids()[1]));
        assert_eq!(drag.source(), Some(store.ids()[1]));
        assert_eq!(drag.hover(), None);
        assert_eq!(drag.depth(), 0);
    }

    #[test]
    fn test_no_concurrent_gestures() {
        let store = abcd();
        let mut drag = DragSession::new();
        assert!(drag.start(store.ids()[0]));
        assert!(!drag.start(store.ids()[2]));
        assert_eq!(drag.source(), Some(store.ids()[0]));
    }

    #[test]
    fn test_over_overwrites_hover() {
        let store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[0]);
        drag.over(1);
        drag.over(3);
        drag.over(2);
        assert_eq!(drag.hover(), Some(2));
    }

    #[test]
    fn test_events_while_idle_are_ignored() {
        let mut store = abcd();
        let mut drag = DragSession::new();
        drag.over(2);
        drag.enter();
        drag.leave();
        assert_eq!(drag, DragSession::Idle);
        assert!(!drag.drop_at(0, &mut store));
        assert_eq!(names(&store), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_nested_enter_keeps_hover() {
        let store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[0]);
        drag.over(2);
        drag.enter();
        drag.enter();
        drag.leave();
        assert_eq!(drag.depth(), 1);
        assert_eq!(drag.hover(), Some(2));
        assert_eq!(drag.snapshot(&store).highlight, Some(2));
    }

    #[test]
    fn test_leaving_every_zone_clears_hover() {
        let store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[0]);
        drag.over(2);
        drag.enter();
        drag.leave();
        drag.leave();
        assert_eq!(drag.depth(), 0);
        assert_eq!(drag.hover(), None);
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_drop_commits_and_resets() {
        let mut store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[0]);
        drag.enter();
        drag.over(2);
        assert!(drag.drop_at(2, &mut store));
        assert_eq!(names(&store), ["B", "C", "A", "D"]);
        assert_eq!(drag, DragSession::Idle);
        assert_eq!(drag.depth(), 0);
    }

    #[test]
    fn test_drop_of_deleted_source_resets_without_change() {
        let mut store = abcd();
        let mut drag = DragSession::new();
        let b = store.ids()[1];
        drag.start(b);
        store.remove(b);
        assert!(!drag.drop_at(0, &mut store));
        assert_eq!(names(&store), ["A", "C", "D"]);
        assert!(!drag.is_dragging());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(2)]
    #[case(3)]
    fn test_self_drop_is_idempotent(#[case] index: usize) {
        let mut store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[index]);
        drag.over(index);
        assert_eq!(drag.snapshot(&store).highlight, None);
        assert!(!drag.drop_at(index, &mut store));
        assert_eq!(names(&store), ["A", "B", "C", "D"]);
    }

    #[test]
    fn test_end_overrides_depth() {
        let store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[3]);
        drag.enter();
        drag.enter();
        drag.enter();
        drag.over(0);
        drag.end();
        assert_eq!(drag, DragSession::Idle);
        assert_eq!(drag.snapshot(&store), DragSnapshot::default());

        // A fresh gesture can start afterwards.
        assert!(drag.start(store.ids()[0]));
    }

    #[test]
    fn test_highlight_ignores_out_of_range_hover() {
        let store = abcd();
        let mut drag = DragSession::new();
        drag.start(store.ids()[0]);
        drag.over(9);
        let snapshot = drag.snapshot(&store);
        assert_eq!(snapshot.hover, Some(9));
        assert_eq!(snapshot.highlight, None);
    }
}
