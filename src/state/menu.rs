// Context menu state and outside-click dismissal.
// Menus are lists of item descriptors; listeners are scoped to the menu's lifetime.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use ratatui::layout::{Position, Rect};

use super::actions::{MenuItem, VerbTable};
use super::page::PageId;

type Listeners = RefCell<Vec<(u64, Option<Rect>)>>;

/// Registry of "click outside" listeners.
///
/// A listener is acquired with [`OutsideClick::subscribe`] and removed
/// when its [`Subscription`] is dropped, so closing or tearing down the
/// owner always releases it.
#[derive(Debug, Default)]
pub struct OutsideClick {
    listeners: Rc<Listeners>,
    next_id: u64,
}

impl OutsideClick {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self) -> Subscription {
        self.next_id += 1;
        self.listeners.borrow_mut().push((self.next_id, None));
        Subscription {
            id: self.next_id,
            listeners: Rc::downgrade(&self.listeners),
        }
    }

    /// Ids of listeners whose area does not contain `pos`. Listeners that
    /// have not been laid out yet are never dismissed.
    pub fn dismissed_by(&self, pos: Position) -> Vec<u64> {
        self.listeners
            .borrow()
            .iter()
            .filter(|(_, area)| area.is_some_and(|area| !area.contains(pos)))
            .map(|(id, _)| *id)
            .collect()
    }

    /// Number of live listeners.
    pub fn len(&self) -> usize {
        self.listeners.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A live outside-click listener. Unsubscribes on drop.
#[derive(Debug)]
pub struct Subscription {
    id: u64,
    listeners: Weak<Listeners>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Record where the owner was drawn this frame.
    pub fn set_area(&self, area: Rect) {
        if let Some(listeners) = self.listeners.upgrade() {
            let mut listeners = listeners.borrow_mut();
            if let Some(entry) = listeners.iter_mut().find(|(id, _)| *id == self.id) {
                entry.1 = Some(area);
            }
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(listeners) = self.listeners.upgrade() {
            listeners.borrow_mut().retain(|(id, _)| *id != self.id);
        }
    }
}

/// An open context menu for one page.
#[derive(Debug)]
pub struct ContextMenu {
    /// Page the menu acts on.
    pub target: PageId,
    /// Entries, in verb table order.
    pub items: Vec<MenuItem>,
    /// Highlighted entry.
    pub selected: usize,
    listener: Subscription,
}

impl ContextMenu {
    /// Open a menu for `target`. Returns None when the verb table is empty.
    pub fn open(target: PageId, table: &VerbTable, outside: &mut OutsideClick) -> Option<Self> {
        let items = table.menu_items();
        if items.is_empty() {
            return None;
        }
        Some(Self {
            target,
            items,
            selected: 0,
            listener: outside.subscribe(),
        })
    }

    pub fn listener(&self) -> &Subscription {
        &self.listener
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % self.items.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = (self.selected + self.items.len() - 1) % self.items.len();
    }

    pub fn selected_item(&self) -> Option<MenuItem> {
        self.items.get(self.selected).copied()
    }

    /// Entry whose shortcut is `key`.
    pub fn item_for_shortcut(&self, key: char) -> Option<MenuItem> {
        self.items.iter().copied().find(|item| item.shortcut == key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::actions::Verb;
    use crate::state::store::PageStore;

    #[test]
    fn test_subscription_released_on_drop() {
        let mut outside = OutsideClick::new();
        let first = outside.subscribe();
        let second = outside.subscribe();
        assert_eq!(outside.len(), 2);
        assert_ne!(first.id(), second.id());

        drop(first);
        assert_eq!(outside.len(), 1);
        drop(second);
        assert!(outside.is_empty());
    }

    #[test]
    fn test_dismissed_only_outside_area() {
        let mut outside = OutsideClick::new();
        let sub = outside.subscribe();
        assert!(outside.dismissed_by(Position::new(0, 0)).is_empty());

        sub.set_area(Rect::new(10, 5, 20, 6));
        assert!(outside.dismissed_by(Position::new(12, 7)).is_empty());
        assert_eq!(outside.dismissed_by(Position::new(2, 2)), vec![sub.id()]);
    }

    #[test]
    fn test_closing_menu_releases_listener() {
        let store = PageStore::with_pages(["A", "B"]);
        let mut outside = OutsideClick::new();
        let menu = ContextMenu::open(store.ids()[0], &VerbTable::default(), &mut outside);
        assert!(menu.is_some());
        assert_eq!(outside.len(), 1);

        drop(menu);
        assert!(outside.is_empty());
    }

    #[test]
    fn test_menu_navigation_wraps() {
        let store = PageStore::with_pages(["A"]);
        let mut outside = OutsideClick::new();
        let table = VerbTable::new([Verb::Rename, Verb::Duplicate, Verb::Delete]);
        let mut menu = ContextMenu::open(store.ids()[0], &table, &mut outside).unwrap();

        menu.select_prev();
        assert_eq!(menu.selected_item().map(|i| i.verb), Some(Verb::Delete));
        menu.select_next();
        assert_eq!(menu.selected_item().map(|i| i.verb), Some(Verb::Rename));
        assert_eq!(
            menu.item_for_shortcut('d').map(|i| i.verb),
            Some(Verb::Duplicate)
        );
        assert_eq!(menu.item_for_shortcut('f'), None);
    }

    #[test]
    fn test_empty_table_opens_nothing() {
        let store = PageStore::with_pages(["A"]);
        let mut outside = OutsideClick::new();
        let menu = ContextMenu::open(store.ids()[0], &VerbTable::new([]), &mut outside);
        assert!(menu.is_none());
        assert!(outside.is_empty());
    }
}
