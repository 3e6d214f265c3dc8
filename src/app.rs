// App state and main event loop.
// Maps keyboard and mouse input onto the form builder's event API.

use std::io;
use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::prelude::*;

use crate::config::Settings;
use crate::state::{
    ActionOutcome, ContextMenu, ConsoleState, FormBuilder, MenuItem, OutsideClick, PageId, Verb,
};
use crate::ui;
use crate::ui::hit::{HitMap, HitTarget};

/// Active view in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Builder,
    Console,
}

impl View {
    pub fn title(&self) -> &'static str {
        match self {
            View::Builder => "Builder",
            View::Console => "Console",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            View::Builder => View::Console,
            View::Console => View::Builder,
        }
    }
}

/// Open rename prompt for one page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamePrompt {
    pub id: PageId,
    /// Name when the prompt opened.
    pub original: String,
    /// Text typed so far, prefilled with the original name.
    pub input: String,
}

/// Main application state.
pub struct App {
    /// Currently active view.
    pub active_view: View,
    /// Page engine.
    pub builder: FormBuilder,
    /// Activity log shown in the Console view.
    pub console: ConsoleState,
    /// Open context menu, if any.
    pub menu: Option<ContextMenu>,
    /// Open rename prompt, if any.
    pub rename: Option<RenamePrompt>,
    /// Whether the active page is being moved with the keyboard.
    pub keyboard_move: bool,
    /// Whether the help overlay is visible.
    pub show_help: bool,
    /// Whether the app should exit.
    pub should_quit: bool,
    /// Clickable regions from the last frame.
    pub hit_map: HitMap,
    outside_click: OutsideClick,
    /// Target under the pointer when the left button went down.
    pressed: Option<HitTarget>,
    /// Drop zones under the pointer during a mouse drag, outermost first.
    zones: Vec<HitTarget>,
}

impl App {
    pub fn new(settings: &Settings) -> Self {
        Self {
            active_view: View::default(),
            builder: FormBuilder::from_settings(settings),
            console: ConsoleState::new(),
            menu: None,
            rename: None,
            keyboard_move: false,
            show_help: false,
            should_quit: false,
            hit_map: HitMap::new(),
            outside_click: OutsideClick::new(),
            pressed: None,
            zones: Vec::new(),
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            self.handle_event(event);
        }
        Ok(())
    }

    /// Apply one terminal event.
    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    // Keyboard.

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if self.rename.is_some() {
            self.handle_rename_key(key.code);
            return;
        }

        if self.show_help {
            match key.code {
                KeyCode::Esc | KeyCode::Char('?') => self.show_help = false,
                KeyCode::Char('q') => self.should_quit = true,
                _ => {}
            }
            return;
        }

        if self.menu.is_some() {
            self.handle_menu_key(key.code);
            return;
        }

        if self.keyboard_move {
            self.handle_move_key(key.code);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => {
                self.show_help = true;
                self.cancel_pointer();
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.active_view = self.active_view.next();
                self.clear_console_badge_if_viewing();
            }
            code => match self.active_view {
                View::Builder => self.handle_builder_key(code),
                View::Console => self.handle_console_key(code),
            },
        }
    }

    fn handle_builder_key(&mut self, code: KeyCode) {
        let active = self.builder.store().active_id();
        match code {
            KeyCode::Left | KeyCode::Char('h') => {
                self.builder.previous();
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.builder.next();
            }
            KeyCode::Char('m') => self.start_keyboard_move(),
            KeyCode::Char('a') => self.add_page(self.builder.store().active_index() + 1),
            KeyCode::Char('A') => self.add_page(self.builder.store().len()),
            KeyCode::Char('.') => self.open_menu(active),
            KeyCode::Delete => self.run_verb(Verb::Delete, active),
            KeyCode::Char(c) => {
                if let Some(verb) = Verb::ALL.into_iter().find(|verb| verb.shortcut() == c) {
                    self.run_verb(verb, active);
                }
            }
            _ => {}
        }
    }

    fn handle_console_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.console.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.console.select_next(),
            _ => {}
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        let Some(menu) = self.menu.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => self.menu = None,
            KeyCode::Up | KeyCode::Char('k') => menu.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => menu.select_next(),
            KeyCode::Enter => {
                if let Some(item) = menu.selected_item() {
                    self.run_menu_item(item);
                }
            }
            KeyCode::Char(c) => {
                if let Some(item) = menu.item_for_shortcut(c) {
                    self.run_menu_item(item);
                }
            }
            _ => {}
        }
    }

    fn handle_rename_key(&mut self, code: KeyCode) {
        let Some(prompt) = self.rename.as_mut() else {
            return;
        };
        match code {
            KeyCode::Esc => self.rename = None,
            KeyCode::Backspace => {
                prompt.input.pop();
            }
            KeyCode::Char(c) => prompt.input.push(c),
            KeyCode::Enter => {
                if let Some(prompt) = self.rename.take() {
                    self.apply_rename(prompt);
                }
            }
            _ => {}
        }
    }

    fn start_keyboard_move(&mut self) {
        let store = self.builder.store();
        let (id, index) = (store.active_id(), store.active_index());
        if self.builder.drag_start(id) {
            self.builder.drag_enter();
            self.builder.drag_over(index);
            self.keyboard_move = true;
        }
    }

    fn handle_move_key(&mut self, code: KeyCode) {
        let last = self.builder.store().len().saturating_sub(1);
        let hover = self
            .builder
            .drag()
            .hover()
            .unwrap_or(self.builder.store().active_index());
        match code {
            KeyCode::Left | KeyCode::Char('h') => self.builder.drag_over(hover.saturating_sub(1)),
            KeyCode::Right | KeyCode::Char('l') => self.builder.drag_over((hover + 1).min(last)),
            KeyCode::Enter => {
                self.drop_dragged(hover);
                self.builder.drag_end();
                self.keyboard_move = false;
            }
            KeyCode::Esc => {
                self.builder.drag_end();
                self.keyboard_move = false;
            }
            _ => {}
        }
    }

    // Mouse.

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.rename.is_some() || self.show_help || self.keyboard_move {
            if mouse.kind == MouseEventKind::Up(MouseButton::Left) {
                self.cancel_pointer();
            }
            return;
        }
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.mouse_down(pos),
            MouseEventKind::Drag(MouseButton::Left) => self.mouse_drag(pos),
            MouseEventKind::Up(MouseButton::Left) => self.mouse_up(pos),
            MouseEventKind::ScrollUp if self.active_view == View::Console => {
                self.console.select_prev()
            }
            MouseEventKind::ScrollDown if self.active_view == View::Console => {
                self.console.select_next()
            }
            _ => {}
        }
    }

    fn mouse_down(&mut self, pos: Position) {
        if let Some(menu) = &self.menu {
            if self
                .outside_click
                .dismissed_by(pos)
                .contains(&menu.listener().id())
            {
                self.menu = None;
            }
        }
        self.pressed = self.hit_map.at(pos);
    }

    fn mouse_drag(&mut self, pos: Position) {
        if !self.builder.drag().is_dragging() {
            let Some(index) = self.pressed.and_then(|target| target.drop_index()) else {
                return;
            };
            let Some(id) = self.page_at(index) else {
                return;
            };
            if !self.builder.drag_start(id) {
                return;
            }
            self.menu = None;
            self.zones.clear();
        }
        self.track_zones(pos);
    }

    fn mouse_up(&mut self, pos: Position) {
        let pressed = self.pressed.take();

        if self.builder.drag().is_dragging() {
            self.track_zones(pos);
            if let Some(index) = self.zones.last().and_then(HitTarget::drop_index) {
                self.drop_dragged(index);
            }
            self.builder.drag_end();
            self.zones.clear();
            return;
        }

        if let Some(target) = pressed {
            if self.hit_map.at(pos) == Some(target) {
                self.click(target);
            }
        }
    }

    /// Abandon any mouse press or drag. A keyboard move is left alone.
    fn cancel_pointer(&mut self) {
        if !self.keyboard_move {
            self.builder.drag_end();
        }
        self.pressed = None;
        self.zones.clear();
    }

    /// Raise enter/leave for zone transitions, then over for the innermost zone.
    fn track_zones(&mut self, pos: Position) {
        let zones = self.hit_map.drop_zones(pos);
        let entered = zones.iter().filter(|z| !self.zones.contains(z)).count();
        let left = self.zones.iter().filter(|z| !zones.contains(z)).count();

        for _ in 0..entered {
            self.builder.drag_enter();
        }
        for _ in 0..left {
            self.builder.drag_leave();
        }
        if let Some(index) = zones.last().and_then(HitTarget::drop_index) {
            self.builder.drag_over(index);
        }
        self.zones = zones;
    }

    fn click(&mut self, target: HitTarget) {
        match target {
            HitTarget::Tab(index) => {
                if let Some(id) = self.page_at(index) {
                    self.builder.select_page(id);
                }
            }
            HitTarget::TabHandle(index) => {
                if let Some(id) = self.page_at(index) {
                    self.open_menu(id);
                }
            }
            HitTarget::AddPage(index) => self.add_page(index),
            HitTarget::Previous => {
                self.builder.previous();
            }
            HitTarget::Next => {
                self.builder.next();
            }
            HitTarget::MenuItem(index) => {
                let item = self
                    .menu
                    .as_ref()
                    .and_then(|menu| menu.items.get(index).copied());
                if let Some(item) = item {
                    self.run_menu_item(item);
                }
            }
        }
    }

    fn page_at(&self, index: usize) -> Option<PageId> {
        self.builder.store().at(index).map(|page| page.id())
    }

    // Builder operations with console reporting.

    fn add_page(&mut self, at: usize) {
        let id = self.builder.add_page(at);
        if let Some(page) = self.builder.store().get(id) {
            let message = format!("Added \"{}\"", page.name);
            self.console.log_info(message);
        }
    }

    fn drop_dragged(&mut self, index: usize) {
        let Some(source) = self.builder.drag().source() else {
            return;
        };
        if !self.builder.drop_at(index) {
            return;
        }
        let store = self.builder.store();
        if let (Some(page), Some(position)) = (store.get(source), store.position(source)) {
            let message = format!("Moved \"{}\" to position {}", page.name, position + 1);
            self.console.log_info(message);
        }
    }

    fn open_menu(&mut self, id: PageId) {
        self.menu = ContextMenu::open(id, self.builder.actions().table(), &mut self.outside_click);
    }

    /// Menu entries go through the same string contract as any other caller.
    fn run_menu_item(&mut self, item: MenuItem) {
        if let Some(menu) = self.menu.take() {
            let name = self.page_name(menu.target);
            let outcome = self.builder.context_action(item.verb.as_str(), menu.target);
            self.report(outcome, name);
        }
    }

    fn run_verb(&mut self, verb: Verb, id: PageId) {
        let name = self.page_name(id);
        let outcome = self.builder.run_action(verb, id);
        self.report(outcome, name);
    }

    fn page_name(&self, id: PageId) -> Option<String> {
        self.builder.store().get(id).map(|page| page.name.clone())
    }

    fn report(&mut self, outcome: ActionOutcome, name: Option<String>) {
        match outcome {
            ActionOutcome::Applied(verb) => {
                if let Some(name) = name {
                    self.console.log_info(describe(verb, &name));
                }
            }
            ActionOutcome::RenameRequested { id, current } => {
                self.cancel_pointer();
                self.rename = Some(RenamePrompt {
                    id,
                    input: current.clone(),
                    original: current,
                });
            }
            ActionOutcome::Ignored => {}
        }
    }

    fn apply_rename(&mut self, prompt: RenamePrompt) {
        let name = prompt.input.trim();
        if name.is_empty() {
            self.console
                .log_warn(format!("Kept \"{}\": page names cannot be blank", prompt.original));
            return;
        }
        if self.builder.rename_page(prompt.id, name) {
            self.console
                .log_info(format!("Renamed \"{}\" to \"{}\"", prompt.original, name));
        }
    }

    /// Clear console badge when viewing console view.
    fn clear_console_badge_if_viewing(&mut self) {
        if self.active_view == View::Console {
            self.console.mark_read();
        }
    }
}

fn describe(verb: Verb, name: &str) -> String {
    match verb {
        Verb::Rename => format!("Renamed \"{name}\""),
        Verb::Duplicate => format!("Duplicated \"{name}\""),
        Verb::Copy => format!("Copied \"{name}\""),
        Verb::SetFirst => format!("Moved \"{name}\" to the front"),
        Verb::Delete => format!("Deleted \"{name}\""),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    use crate::state::ConsoleLevel;

    fn app() -> App {
        App::new(&Settings::default())
    }

    fn render(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| ui::draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn names(app: &App) -> Vec<&str> {
        app.builder
            .store()
            .pages()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_event(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)));
    }

    fn mouse(app: &mut App, kind: MouseEventKind, pos: Position) {
        app.handle_event(Event::Mouse(MouseEvent {
            kind,
            column: pos.x,
            row: pos.y,
            modifiers: KeyModifiers::NONE,
        }));
    }

    fn click(app: &mut App, pos: Position) {
        mouse(app, MouseEventKind::Down(MouseButton::Left), pos);
        mouse(app, MouseEventKind::Up(MouseButton::Left), pos);
    }

    /// A point on the label of the given target.
    fn point(app: &App, target: HitTarget) -> Position {
        let area = app.hit_map.area_of(target).unwrap();
        Position::new(area.x + 1, area.y)
    }

    #[test]
    fn test_first_frame() {
        let mut app = app();
        let screen = render(&mut app);
        assert!(screen.contains("Info Content"));
        assert!(screen.contains("Page 1 of 4"));
        assert!(screen.contains("Ending"));
        assert!(app.hit_map.area_of(HitTarget::AddPage(4)).is_some());
    }

    #[test]
    fn test_mouse_drag_reorders() {
        let mut app = app();
        render(&mut app);
        let from = point(&app, HitTarget::Tab(0));
        let to = point(&app, HitTarget::Tab(2));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), from);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), from);
        assert!(app.builder.drag().is_dragging());
        assert_eq!(app.builder.snapshot().drag.highlight, None);

        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), to);
        assert_eq!(app.builder.snapshot().drag.highlight, Some(2));
        assert_eq!(app.builder.drag().depth(), 1);

        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), to);
        assert_eq!(names(&app), ["Details", "Other", "Info", "Ending"]);
        assert!(!app.builder.drag().is_dragging());
        assert_eq!(app.console.unread, 1);
    }

    #[test]
    fn test_drag_across_handle_keeps_hover() {
        let mut app = app();
        render(&mut app);
        let from = point(&app, HitTarget::Tab(3));
        let handle = app.hit_map.area_of(HitTarget::TabHandle(1)).unwrap();
        let handle = Position::new(handle.x, handle.y);
        let tab = point(&app, HitTarget::Tab(1));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), from);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), tab);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), handle);
        assert_eq!(app.builder.drag().depth(), 2);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), tab);
        assert_eq!(app.builder.drag().depth(), 1);
        assert_eq!(app.builder.snapshot().drag.highlight, Some(1));
    }

    #[test]
    fn test_release_outside_cancels_drag() {
        let mut app = app();
        render(&mut app);
        let from = point(&app, HitTarget::Tab(1));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), from);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), from);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), Position::new(0, 0));
        assert_eq!(app.builder.drag().hover(), None);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), Position::new(0, 0));

        assert_eq!(names(&app), ["Info", "Details", "Other", "Ending"]);
        assert!(!app.builder.drag().is_dragging());
        assert_eq!(app.console.unread, 0);
    }

    #[test]
    fn test_clicks_select_add_and_navigate() {
        let mut app = app();
        render(&mut app);

        let ending = point(&app, HitTarget::Tab(3));
        click(&mut app, ending);
        assert_eq!(app.builder.store().active().name, "Ending");

        render(&mut app);
        let previous = point(&app, HitTarget::Previous);
        click(&mut app, previous);
        assert_eq!(app.builder.store().active().name, "Other");

        render(&mut app);
        let add = point(&app, HitTarget::AddPage(1));
        click(&mut app, add);
        assert_eq!(names(&app)[1], "Page 5");
        assert_eq!(app.builder.store().active().name, "Page 5");
        assert_eq!(app.console.unread, 1);
    }

    #[test]
    fn test_press_and_release_on_different_targets_is_not_a_click() {
        let mut app = app();
        render(&mut app);
        let next = point(&app, HitTarget::Next);
        let previous = point(&app, HitTarget::Previous);
        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), next);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), previous);
        assert_eq!(app.builder.store().active().name, "Info");
    }

    #[test]
    fn test_help_overlay_ends_mouse_drag() {
        let mut app = app();
        render(&mut app);
        let info = point(&app, HitTarget::Tab(0));
        let other = point(&app, HitTarget::Tab(2));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), info);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), info);
        assert!(app.builder.drag().is_dragging());

        press(&mut app, KeyCode::Char('?'));
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), info);
        press(&mut app, KeyCode::Esc);
        assert!(!app.builder.drag().is_dragging());

        render(&mut app);
        click(&mut app, other);
        assert_eq!(names(&app), ["Info", "Details", "Other", "Ending"]);
        assert_eq!(app.builder.store().active().name, "Other");
    }

    #[test]
    fn test_rename_prompt_ends_mouse_drag() {
        let mut app = app();
        render(&mut app);
        let details = point(&app, HitTarget::Tab(1));
        let ending = point(&app, HitTarget::Tab(3));

        mouse(&mut app, MouseEventKind::Down(MouseButton::Left), details);
        mouse(&mut app, MouseEventKind::Drag(MouseButton::Left), ending);
        press(&mut app, KeyCode::Char('r'));
        assert!(app.rename.is_some());
        assert!(!app.builder.drag().is_dragging());

        press(&mut app, KeyCode::Esc);
        mouse(&mut app, MouseEventKind::Up(MouseButton::Left), ending);
        assert_eq!(names(&app), ["Info", "Details", "Other", "Ending"]);

        press(&mut app, KeyCode::Char('m'));
        assert!(app.keyboard_move);
    }

    #[test]
    fn test_menu_outside_click_closes_and_releases_listener() {
        let mut app = app();
        render(&mut app);
        let handle = point(&app, HitTarget::TabHandle(1));
        click(&mut app, handle);
        let details = app.builder.store().ids()[1];
        assert_eq!(app.menu.as_ref().map(|m| m.target), Some(details));
        assert_eq!(app.outside_click.len(), 1);

        render(&mut app);
        click(&mut app, Position::new(0, 0));
        assert!(app.menu.is_none());
        assert!(app.outside_click.is_empty());
    }

    #[test]
    fn test_menu_item_click_runs_verb() {
        let mut app = app();
        press(&mut app, KeyCode::Char('.'));
        render(&mut app);

        let index = app
            .menu
            .as_ref()
            .and_then(|m| m.items.iter().position(|i| i.verb == Verb::Delete))
            .unwrap();
        let item = point(&app, HitTarget::MenuItem(index));
        click(&mut app, item);

        assert!(app.menu.is_none());
        assert_eq!(names(&app), ["Details", "Other", "Ending"]);
        assert_eq!(app.console.messages.back().unwrap().message, "Deleted \"Info\"");
    }

    #[test]
    fn test_menu_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Char('.'));
        press(&mut app, KeyCode::Char('f'));
        assert!(app.menu.is_none());
        assert_eq!(names(&app), ["Details", "Info", "Other", "Ending"]);

        press(&mut app, KeyCode::Char('.'));
        press(&mut app, KeyCode::Esc);
        assert!(app.menu.is_none());
        assert!(app.outside_click.is_empty());
    }

    #[test]
    fn test_keyboard_move() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        assert!(app.keyboard_move);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.builder.snapshot().drag.highlight, Some(2));
        press(&mut app, KeyCode::Enter);

        assert!(!app.keyboard_move);
        assert!(!app.builder.drag().is_dragging());
        assert_eq!(names(&app), ["Details", "Other", "Info", "Ending"]);
        assert_eq!(app.builder.store().active().name, "Info");
    }

    #[test]
    fn test_keyboard_move_cancel_and_clamp() {
        let mut app = app();
        press(&mut app, KeyCode::Char('m'));
        press(&mut app, KeyCode::Left);
        assert_eq!(app.builder.drag().hover(), Some(0));
        press(&mut app, KeyCode::Esc);
        assert!(!app.keyboard_move);
        assert_eq!(names(&app), ["Info", "Details", "Other", "Ending"]);
    }

    #[test]
    fn test_rename_flow() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.rename.as_ref().map(|p| p.input.as_str()), Some("Info"));

        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        for c in "Intro".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);

        assert!(app.rename.is_none());
        assert_eq!(names(&app)[0], "Intro");
        assert_eq!(
            app.console.messages.back().unwrap().message,
            "Renamed \"Info\" to \"Intro\""
        );
    }

    #[test]
    fn test_blank_rename_is_cancelled() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        for _ in 0..4 {
            press(&mut app, KeyCode::Backspace);
        }
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Enter);

        assert_eq!(names(&app)[0], "Info");
        assert_eq!(app.console.messages.back().unwrap().level, ConsoleLevel::Warn);
    }

    #[test]
    fn test_rename_prompt_swallows_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('r'));
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert_eq!(names(&app)[0], "Info");
    }

    #[test]
    fn test_verb_shortcuts() {
        let mut app = app();
        press(&mut app, KeyCode::Char('d'));
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(names(&app), ["Info", "Info", "Info", "Details", "Other", "Ending"]);

        for _ in 0..6 {
            press(&mut app, KeyCode::Delete);
        }
        assert_eq!(names(&app), ["Default"]);
    }

    #[test]
    fn test_add_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(names(&app)[1], "Page 5");
        press(&mut app, KeyCode::Char('A'));
        assert_eq!(names(&app).last(), Some(&"Page 6"));
    }

    #[test]
    fn test_navigation_keys_clamp() {
        let mut app = app();
        press(&mut app, KeyCode::Right);
        assert_eq!(app.builder.store().active().name, "Details");
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.builder.store().active().name, "Info");
    }

    #[test]
    fn test_view_switch_clears_badge() {
        let mut app = app();
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.console.unread, 1);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, View::Console);
        assert_eq!(app.console.unread, 0);
        assert!(render(&mut app).contains("Added \"Page 5\""));

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.active_view, View::Builder);
    }

    #[test]
    fn test_help_and_quit() {
        let mut app = app();
        press(&mut app, KeyCode::Char('?'));
        assert!(app.show_help);
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.builder.store().len(), 4);
        press(&mut app, KeyCode::Esc);
        assert!(!app.show_help);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
