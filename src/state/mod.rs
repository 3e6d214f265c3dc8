// State management module.
// Page ordering engine, drag gestures, navigation, actions, and tab state.

pub mod actions;
pub mod builder;
pub mod console;
pub mod drag;
pub mod menu;
pub mod navigation;
pub mod page;
pub mod store;

pub use actions::{ActionOutcome, MenuItem, Verb, VerbTable};
pub use builder::{BuilderSnapshot, FormBuilder};
pub use console::{ConsoleLevel, ConsoleState};
pub use menu::{ContextMenu, OutsideClick};
pub use navigation::{BoundaryPolicy, Step};
pub use page::{Page, PageId};
