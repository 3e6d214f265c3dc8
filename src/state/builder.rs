// Form builder facade.
// The single entry point the presentation layer raises events into and reads state from.

use tracing::debug;

use crate::config::Settings;

use super::actions::{ActionDispatcher, ActionOutcome, Verb};
use super::drag::{DragSession, DragSnapshot};
use super::navigation::{NavigationController, Step};
use super::page::{Page, PageId};
use super::store::PageStore;

/// Everything the presentation layer needs for one render.
#[derive(Debug, Clone, Copy)]
pub struct BuilderSnapshot<'a> {
    pub pages: &'a [Page],
    pub active: PageId,
    pub drag: DragSnapshot,
}

/// Page store, drag gesture, navigation, and actions behind one event API.
///
/// Events are applied synchronously in the order they are raised. Stale
/// page ids and out-of-range indices are silently ignored.
#[derive(Debug)]
pub struct FormBuilder {
    store: PageStore,
    drag: DragSession,
    nav: NavigationController,
    actions: ActionDispatcher,
    new_page_prefix: String,
}

impl FormBuilder {
    pub fn new(
        store: PageStore,
        nav: NavigationController,
        actions: ActionDispatcher,
        new_page_prefix: impl Into<String>,
    ) -> Self {
        Self {
            store,
            drag: DragSession::new(),
            nav,
            actions,
            new_page_prefix: new_page_prefix.into(),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            PageStore::new(
                settings.initial_pages.iter().cloned(),
                settings.default_page_name.clone(),
            ),
            NavigationController::new(settings.navigation),
            ActionDispatcher::new(settings.verb_table()),
            settings.new_page_prefix.clone(),
        )
    }

    // Drag gesture.

    /// Start dragging page `id`. Ignored for unknown pages or mid-gesture.
    pub fn drag_start(&mut self, id: PageId) -> bool {
        if !self.store.contains(id) {
            return false;
        }
        let started = self.drag.start(id);
        if started {
            debug!(page = %id, "drag started");
        }
        started
    }

    pub fn drag_over(&mut self, index: usize) {
        self.drag.over(index);
    }

    pub fn drag_enter(&mut self) {
        self.drag.enter();
    }

    pub fn drag_leave(&mut self) {
        self.drag.leave();
    }

    /// Drop the dragged page at `index`. Returns true if the order changed.
    pub fn drop_at(&mut self, index: usize) -> bool {
        let source = self.drag.source();
        let moved = self.drag.drop_at(index, &mut self.store);
        if let (true, Some(page)) = (moved, source) {
            debug!(page = %page, index, "page moved by drop");
        }
        moved
    }

    pub fn drag_end(&mut self) {
        if self.drag.is_dragging() {
            debug!("drag cancelled");
        }
        self.drag.end();
    }

    // Page selection and editing.

    pub fn select_page(&mut self, id: PageId) -> bool {
        self.store.set_active(id)
    }

    /// Insert a new page at `at` and activate it. Returns its id.
    pub fn add_page(&mut self, at: usize) -> PageId {
        let name = format!("{} {}", self.new_page_prefix, self.store.len() + 1);
        let page = self.store.mint(name);
        let id = page.id();
        let index = self.store.insert(page, at);
        debug!(page = %id, index, "page added");
        id
    }

    /// Dispatch a context-menu verb by its contract name.
    pub fn context_action(&mut self, verb: &str, id: PageId) -> ActionOutcome {
        self.actions.dispatch(&mut self.store, verb, id)
    }

    /// Dispatch an already-parsed verb.
    pub fn run_action(&mut self, verb: Verb, id: PageId) -> ActionOutcome {
        self.actions.run(&mut self.store, verb, id)
    }

    pub fn rename_page(&mut self, id: PageId, name: impl Into<String>) -> bool {
        let renamed = self.store.rename(id, name);
        if renamed {
            debug!(page = %id, "page renamed");
        }
        renamed
    }

    // Navigation.

    pub fn previous(&mut self) -> bool {
        self.nav.previous(&mut self.store)
    }

    pub fn next(&mut self) -> bool {
        self.nav.next(&mut self.store)
    }

    pub fn can_step(&self, step: Step) -> bool {
        self.nav.can_step(&self.store, step)
    }

    // Read side.

    pub fn snapshot(&self) -> BuilderSnapshot<'_> {
        BuilderSnapshot {
            pages: self.store.pages(),
            active: self.store.active_id(),
            drag: self.drag.snapshot(&self.store),
        }
    }

    pub fn store(&self) -> &PageStore {
        &self.store
    }

    pub fn drag(&self) -> &DragSession {
        &self.drag
    }

    pub fn navigation(&self) -> &NavigationController {
        &self.nav
    }

    pub fn actions(&self) -> &ActionDispatcher {
        &self.actions
    }
}

impl Default for FormBuilder {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
