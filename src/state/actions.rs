// Context-menu verbs and their effect on the page store.
// A single configurable verb table drives both the menu and dispatch.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::page::PageId;
use super::store::PageStore;

/// A page action the presentation layer can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Verb {
    Rename,
    Duplicate,
    Copy,
    SetFirst,
    Delete,
}

impl Verb {
    pub const ALL: [Verb; 5] = [
        Verb::Rename,
        Verb::Duplicate,
        Verb::Copy,
        Verb::SetFirst,
        Verb::Delete,
    ];

    /// Name used on the callback contract.
    pub fn as_str(&self) -> &'static str {
        match self {
            Verb::Rename => "rename",
            Verb::Duplicate => "duplicate",
            Verb::Copy => "copy",
            Verb::SetFirst => "setFirst",
            Verb::Delete => "delete",
        }
    }

    /// Menu label.
    pub fn label(&self) -> &'static str {
        match self {
            Verb::Rename => "Rename",
            Verb::Duplicate => "Duplicate",
            Verb::Copy => "Copy",
            Verb::SetFirst => "Set as first page",
            Verb::Delete => "Delete",
        }
    }

    /// Keyboard shortcut shown next to the label.
    pub fn shortcut(&self) -> char {
        match self {
            Verb::Rename => 'r',
            Verb::Duplicate => 'd',
            Verb::Copy => 'c',
            Verb::SetFirst => 'f',
            Verb::Delete => 'x',
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, Verb::Delete)
    }
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised for verb names outside the known set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownVerb(pub String);

impl FromStr for Verb {
    type Err = UnknownVerb;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rename" => Ok(Verb::Rename),
            "duplicate" => Ok(Verb::Duplicate),
            "copy" => Ok(Verb::Copy),
            "setFirst" | "set_first" => Ok(Verb::SetFirst),
            "delete" => Ok(Verb::Delete),
            other => Err(UnknownVerb(other.to_string())),
        }
    }
}

/// Declarative descriptor for one context-menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuItem {
    pub verb: Verb,
    pub label: &'static str,
    pub shortcut: char,
    pub destructive: bool,
}

impl From<Verb> for MenuItem {
    fn from(verb: Verb) -> Self {
        Self {
            verb,
            label: verb.label(),
            shortcut: verb.shortcut(),
            destructive: verb.is_destructive(),
        }
    }
}

/// The enabled verbs, in menu order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerbTable {
    verbs: Vec<Verb>,
}

impl Default for VerbTable {
    fn default() -> Self {
        Self::new(Verb::ALL)
    }
}

impl VerbTable {
    /// Build a table; repeated verbs keep their first position.
    pub fn new(verbs: impl IntoIterator<Item = Verb>) -> Self {
        let mut table: Vec<Verb> = Vec::new();
        for verb in verbs {
            if !table.contains(&verb) {
                table.push(verb);
            }
        }
        Self { verbs: table }
    }

    pub fn contains(&self, verb: Verb) -> bool {
        self.verbs.contains(&verb)
    }

    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// Menu descriptors in table order.
    pub fn menu_items(&self) -> Vec<MenuItem> {
        self.verbs.iter().copied().map(MenuItem::from).collect()
    }
}

/// Result of dispatching a verb.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The verb's effect was applied to the store.
    Applied(Verb),
    /// The collaborator must supply a new name, then call rename.
    RenameRequested { id: PageId, current: String },
    /// Unknown or disabled verb, or the target no longer exists.
    Ignored,
}

/// Maps verbs onto store mutations.
#[derive(Debug, Clone, Default)]
pub struct ActionDispatcher {
    table: VerbTable,
}

impl ActionDispatcher {
    pub fn new(table: VerbTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &VerbTable {
        &self.table
    }

    /// Dispatch a verb by its contract name. Unknown names are logged and ignored.
    pub fn dispatch(&self, store: &mut PageStore, verb: &str, id: PageId) -> ActionOutcome {
        match verb.parse::<Verb>() {
            Ok(verb) => self.run(store, verb, id),
            Err(UnknownVerb(name)) => {
                warn!(verb = %name, page = %id, "ignoring unknown page action");
                ActionOutcome::Ignored
            }
        }
    }

    /// Run `verb` against page `id`.
    pub fn run(&self, store: &mut PageStore, verb: Verb, id: PageId) -> ActionOutcome {
        if !self.table.contains(verb) {
            warn!(%verb, page = %id, "ignoring page action not enabled in verb table");
            return ActionOutcome::Ignored;
        }
        let Some(index) = store.position(id) else {
            debug!(%verb, page = %id, "page action target is gone");
            return ActionOutcome::Ignored;
        };

        match verb {
            Verb::Rename => {
                let current = store.pages()[index].name.clone();
                return ActionOutcome::RenameRequested { id, current };
            }
            Verb::Duplicate | Verb::Copy => {
                let name = store.pages()[index].name.clone();
                let page = store.mint(name);
                let copy = page.id();
                store.insert(page, index + 1);
                debug!(%verb, page = %id, %copy, "page copied");
            }
            Verb::SetFirst => {
                store.reorder(id, 0);
                debug!(%verb, page = %id, "page moved to front");
            }
            Verb::Delete => {
                store.remove(id);
                debug!(%verb, page = %id, "page deleted");
            }
        }
        ActionOutcome::Applied(verb)
    }
}
