// Ordered page collection with the active-page pointer.
// Every mutation degrades to a no-op on stale ids and leaves at least one active page.

use tracing::debug;

use super::page::{IdAllocator, Page, PageId};

/// Name given to the page synthesized when the last page is deleted.
pub const DEFAULT_PAGE_NAME: &str = "Default";

/// Owns the display order of pages and which one is active.
///
/// Invariants, holding after every public call returns:
/// - `order` is non-empty;
/// - `active` names a page present in `order`.
#[derive(Debug)]
pub struct PageStore {
    order: Vec<Page>,
    active: PageId,
    ids: IdAllocator,
    default_name: String,
}

impl PageStore {
    /// Create a store holding one page per name, the first one active.
    /// An empty list yields a single default page.
    pub fn new<I, S>(names: I, default_name: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut ids = IdAllocator::default();
        let mut order: Vec<Page> = names
            .into_iter()
            .map(|name| Page::new(ids.allocate(), name))
            .collect();
        let default_name = default_name.into();

        if order.is_empty() {
            order.push(Page::new(ids.allocate(), default_name.clone()));
        }
        let active = order[0].id();

        Self {
            order,
            active,
            ids,
            default_name,
        }
    }

    /// Create a store using [`DEFAULT_PAGE_NAME`] for repairs.
    pub fn with_pages<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(names, DEFAULT_PAGE_NAME)
    }

    /// Mint a page with a fresh id. The page is not part of the order until inserted.
    pub fn mint(&mut self, name: impl Into<String>) -> Page {
        Page::new(self.ids.allocate(), name)
    }

    /// Insert `page` at `at` (clamped to `0..=len`) and make it active.
    /// Returns the index the page landed at.
    pub fn insert(&mut self, page: Page, at: usize) -> usize {
        debug_assert!(!self.contains(page.id()), "page ids are minted once");
        let index = at.min(self.order.len());
        self.active = page.id();
        self.order.insert(index, page);
        index
    }

    /// Remove the page with `id`. Returns false if no such page exists.
    ///
    /// If the active page goes, the page now at index 0 becomes active.
    /// If nothing remains, a default page is synthesized and made active.
    pub fn remove(&mut self, id: PageId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.order.remove(index);

        if self.order.is_empty() {
            let page = Page::new(self.ids.allocate(), self.default_name.clone());
            debug!(page = %page.id(), "last page removed, synthesized default page");
            self.active = page.id();
            self.order.push(page);
        } else if id == self.active {
            self.active = self.order[0].id();
            debug!(page = %self.active, "active page removed, promoted first page");
        }
        true
    }

    /// Move the page with `id` to `to`, with splice semantics: the index is
    /// read against the order after the page is taken out, and clamped to
    /// its end. Returns true if the order changed. Active page is untouched.
    pub fn reorder(&mut self, id: PageId, to: usize) -> bool {
        let Some(from) = self.position(id) else {
            return false;
        };
        let page = self.order.remove(from);
        let to = to.min(self.order.len());
        self.order.insert(to, page);
        from != to
    }

    /// Make `id` the active page. Returns false if no such page exists.
    pub fn set_active(&mut self, id: PageId) -> bool {
        if self.contains(id) {
            self.active = id;
            true
        } else {
            false
        }
    }

    /// Rename the page with `id`. Returns false if no such page exists.
    pub fn rename(&mut self, id: PageId, name: impl Into<String>) -> bool {
        match self.order.iter_mut().find(|page| page.id() == id) {
            Some(page) => {
                page.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Pages in display order.
    pub fn pages(&self) -> &[Page] {
        &self.order
    }

    /// Ids in display order.
    pub fn ids(&self) -> Vec<PageId> {
        self.order.iter().map(Page::id).collect()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Always false once constructed.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn active_id(&self) -> PageId {
        self.active
    }

    /// Index of the active page.
    pub fn active_index(&self) -> usize {
        self.position(self.active).unwrap_or(0)
    }

    /// The active page.
    pub fn active(&self) -> &Page {
        &self.order[self.active_index()]
    }

    pub fn position(&self, id: PageId) -> Option<usize> {
        self.order.iter().position(|page| page.id() == id)
    }

    pub fn get(&self, id: PageId) -> Option<&Page> {
        self.order.iter().find(|page| page.id() == id)
    }

    pub fn contains(&self, id: PageId) -> bool {
        self.position(id).is_some()
    }

    /// Page at `index` in display order.
    pub fn at(&self, index: usize) -> Option<&Page> {
        self.order.get(index)
    }

    /// Name of the page synthesized on total deletion.
    pub fn default_name(&self) -> &str {
        &self.default_name
    }
}
