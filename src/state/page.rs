// Page identity and display data.
// Pages are minted by the store so ids stay unique and are never reused.

use std::fmt;

/// Opaque, stable page identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageId(u64);

impl PageId {
    /// Raw numeric value (for logging and display only).
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic id source. Ids handed out are never handed out again.
#[derive(Debug, Default)]
pub(crate) struct IdAllocator {
    next: u64,
}

impl IdAllocator {
    pub(crate) fn allocate(&mut self) -> PageId {
        self.next += 1;
        PageId(self.next)
    }
}

/// A single form page.
///
/// Not `Clone`: a page value can only be inserted once, which keeps ids
/// unique within a store.
#[derive(Debug, PartialEq, Eq)]
pub struct Page {
    id: PageId,
    /// Display name; duplicates across pages are allowed.
    pub name: String,
}

impl Page {
    pub(crate) fn new(id: PageId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    pub fn id(&self) -> PageId {
        self.id
    }
}
