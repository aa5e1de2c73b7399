//! Main TUI application state and logic

use std::sync::Arc;

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tracing::warn;

use super::screens::list::Focus;
use super::screens::{DetailScreen, ListScreen};
use super::ui::{centered_rect, Styles};
use crate::binding::EditorEvent;
use crate::editor::ListEditor;
use crate::navigation::{Route, ShellNavigator, DETAIL_SCREEN, LIST_SCREEN, TEXT_PARAM};

/// Application screens
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    List,
    Detail,
}

/// Main TUI application state
pub struct App {
    /// Current active screen
    pub current_screen: Screen,
    /// Previous screen for navigation
    pub previous_screen: Option<Screen>,
    /// The view-model the screens bind to
    pub editor: ListEditor,

    // Screen states
    pub list: ListScreen,
    pub detail: DetailScreen,

    // Change events mirrored from the editor
    editor_events: mpsc::UnboundedReceiver<EditorEvent>,
    // Screen transitions requested through the navigator
    routes: mpsc::UnboundedReceiver<Route>,

    // Global application state
    pub should_quit: bool,
    pub show_help_popup: bool,
    pub status_message: Option<String>,
    pub error_message: Option<String>,
}

impl App {
    /// Create a new TUI application, optionally seeding the list
    pub fn new(seed_items: Vec<String>) -> Self {
        let (navigator, routes) = ShellNavigator::new(&[LIST_SCREEN, DETAIL_SCREEN]);
        let mut editor = ListEditor::new(Arc::new(navigator)).with_items(seed_items);

        let (events_tx, editor_events) = mpsc::unbounded_channel();
        editor.subscribe(move |event| {
            let _ = events_tx.send(event.clone());
        });

        let list = ListScreen::new(editor.items(), editor.draft());

        Self {
            current_screen: Screen::List,
            previous_screen: None,
            editor,
            list,
            detail: DetailScreen::new(),
            editor_events,
            routes,
            should_quit: false,
            show_help_popup: false,
            status_message: None,
            error_message: None,
        }
    }

    /// Run the main application loop
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        loop {
            self.drain_editor_events();
            self.drain_routes();

            // Draw the UI
            terminal.draw(|f| self.draw(f))?;

            // Handle events
            if let Ok(event) = crossterm::event::read() {
                if let crossterm::event::Event::Key(key) = event {
                    self.handle_key_event(key).await?;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Apply change notifications emitted by the editor since the last draw
    fn drain_editor_events(&mut self) {
        while let Ok(event) = self.editor_events.try_recv() {
            self.list.apply_event(&event);
        }
    }

    /// Apply pending screen transitions requested through the navigator
    fn drain_routes(&mut self) {
        while let Ok(route) = self.routes.try_recv() {
            self.apply_route(route);
        }
    }

    fn apply_route(&mut self, route: Route) {
        match route.screen() {
            DETAIL_SCREEN => {
                self.detail.set_text(route.param(TEXT_PARAM).unwrap_or_default());
                self.navigate_to_screen(Screen::Detail);
            }
            LIST_SCREEN => {
                self.navigate_to_screen(Screen::List);
            }
            other => {
                // The navigator validates screen names, so this is a wiring bug
                warn!(screen = other, "route for unregistered screen");
                self.set_error(format!("No screen registered for '{}'", other));
            }
        }
    }

    /// Handle keyboard input events
    pub async fn handle_key_event(&mut self, key: KeyEvent) -> Result<()> {
        // Global shortcuts; not intercepted while the input field is
        // focused, so typing '?' or 'q' still works
        let typing = self.current_screen == Screen::List && self.list.focus == Focus::Input;
        if !typing {
            match key.code {
                KeyCode::F(1) | KeyCode::Char('?') => {
                    self.show_help_popup = !self.show_help_popup;
                    return Ok(());
                }
                KeyCode::Esc if self.show_help_popup => {
                    self.show_help_popup = false;
                    return Ok(());
                }
                KeyCode::Char('q') => {
                    self.should_quit = true;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Screen-specific event handling
        if !self.show_help_popup {
            match self.current_screen {
                Screen::List => self.handle_list_event(key).await?,
                Screen::Detail => self.handle_detail_event(key).await?,
            }
        }

        Ok(())
    }

    async fn handle_list_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Tab {
            self.list.toggle_focus();
            return Ok(());
        }

        match self.list.focus {
            Focus::Input => self.handle_input_key(key),
            Focus::List => self.handle_item_key(key).await?,
        }
        Ok(())
    }

    /// Keystrokes for the input field; every edit is written through to
    /// the editor's draft (widget-to-editor half of the binding)
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if self.editor.draft().is_empty() {
                    self.set_status("Nothing to add".to_string());
                } else {
                    self.editor.add();
                    self.set_status("Item added".to_string());
                }
                return;
            }
            KeyCode::Char(c) => self.list.input.insert_char(c),
            KeyCode::Backspace => self.list.input.delete_char(),
            KeyCode::Delete => self.list.input.delete_char_forward(),
            KeyCode::Left => self.list.input.move_cursor_left(),
            KeyCode::Right => self.list.input.move_cursor_right(),
            KeyCode::Home => self.list.input.move_cursor_to_start(),
            KeyCode::End => self.list.input.move_cursor_to_end(),
            _ => return,
        }

        self.editor.set_draft(self.list.input.value().to_string());
    }

    /// Keystrokes for the item list
    async fn handle_item_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Up => self.list.select_previous(),
            KeyCode::Down => self.list.select_next(),
            KeyCode::Enter => {
                if let Some(value) = self.list.selected_item().map(str::to_string) {
                    if let Err(e) = self.editor.open_detail(&value).await {
                        self.set_error(format!("Navigation failed: {}", e));
                    }
                } else {
                    self.set_error("No item selected".to_string());
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(value) = self.list.selected_item().map(str::to_string) {
                    self.editor.delete(&value);
                    self.set_status(format!("Removed '{}'", value));
                } else {
                    self.set_error("No item selected".to_string());
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn handle_detail_event(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Esc {
            // Detail screen: ESC goes back to the list
            self.navigate_to_screen(Screen::List);
        }
        Ok(())
    }

    /// Draw the UI
    pub fn draw(&mut self, f: &mut Frame) {
        let size = f.size();

        // Main layout: status bar at bottom, content area above
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(3)])
            .split(size);

        // Draw current screen content
        match self.current_screen {
            Screen::List => self.list.draw(f, chunks[0]),
            Screen::Detail => self.detail.draw(f, chunks[0]),
        }

        // Draw status bar
        self.draw_status_bar(f, chunks[1]);

        // Draw help popup if active
        if self.show_help_popup {
            self.draw_help_popup(f, size);
        }
    }

    /// Draw status bar with current screen info and shortcuts
    fn draw_status_bar(&self, f: &mut Frame, area: Rect) {
        let status_text = if let Some(ref msg) = self.status_message {
            format!("Status: {}", msg)
        } else if let Some(ref err) = self.error_message {
            format!("Error: {}", err)
        } else {
            format!(
                "listpad - {} | Q: Quit | F1/?: Help",
                match self.current_screen {
                    Screen::List => "Items",
                    Screen::Detail => "Item Detail",
                }
            )
        };

        let style = if self.error_message.is_some() {
            Styles::error()
        } else if self.status_message.is_some() {
            Styles::success()
        } else {
            Styles::inactive()
        };

        let status_bar = Paragraph::new(status_text)
            .style(style)
            .block(Block::default().borders(Borders::ALL));

        f.render_widget(status_bar, area);
    }

    /// Draw help popup with context-sensitive shortcuts
    fn draw_help_popup(&self, f: &mut Frame, area: Rect) {
        let popup_area = centered_rect(60, 60, area);

        f.render_widget(Clear, popup_area);

        let help_popup = Paragraph::new(self.get_context_help())
            .block(
                Block::default()
                    .title("Help - Context Shortcuts")
                    .borders(Borders::ALL)
                    .border_style(Styles::title()),
            )
            .style(Styles::default());

        f.render_widget(help_popup, popup_area);
    }

    /// Get context-sensitive help content
    fn get_context_help(&self) -> String {
        let global_help = "Global Shortcuts:\n\
            Q - Quit application\n\
            F1 / ? - Toggle this help\n\n";

        let screen_help = match self.current_screen {
            Screen::List => {
                "Items:\n\
                Tab - Switch between input and list\n\
                Type + Enter - Add a new item\n\
                ↑/↓ - Move the selection\n\
                Enter - Open item detail\n\
                d / Delete - Remove selected item"
            }
            Screen::Detail => {
                "Item Detail:\n\
                ESC - Back to the list"
            }
        };

        format!("{}{}", global_help, screen_help)
    }

    /// Navigate to a specific screen
    pub fn navigate_to_screen(&mut self, screen: Screen) {
        self.previous_screen = Some(self.current_screen.clone());
        self.current_screen = screen;
        self.clear_messages();
    }

    /// Set status message
    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
        self.status_message = None;
    }

    /// Clear status and error messages
    pub fn clear_messages(&mut self) {
        self.status_message = None;
        self.error_message = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    async fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(key(code)).await.unwrap();
        app.drain_editor_events();
        app.drain_routes();
    }

    #[tokio::test]
    async fn test_typing_and_enter_adds_item() {
        let mut app = App::new(Vec::new());

        for c in "Milk".chars() {
            press(&mut app, KeyCode::Char(c)).await;
        }
        assert_eq!(app.editor.draft(), "Milk");

        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.editor.items(), &["Milk".to_string()]);
        assert_eq!(app.editor.draft(), "");
        // The bound widget was cleared through the change notification
        assert_eq!(app.list.input.value(), "");
        assert_eq!(app.list.items, vec!["Milk".to_string()]);
    }

    #[tokio::test]
    async fn test_enter_with_empty_input_adds_nothing() {
        let mut app = App::new(Vec::new());
        press(&mut app, KeyCode::Enter).await;

        assert!(app.editor.items().is_empty());
        assert!(app.list.items.is_empty());
    }

    #[tokio::test]
    async fn test_delete_key_removes_selected_item() {
        let mut app = App::new(vec!["A".to_string(), "B".to_string()]);

        press(&mut app, KeyCode::Tab).await;
        press(&mut app, KeyCode::Down).await;
        press(&mut app, KeyCode::Char('d')).await;

        assert_eq!(app.editor.items(), &["A".to_string()]);
        assert_eq!(app.list.items, vec!["A".to_string()]);
    }

    #[tokio::test]
    async fn test_enter_on_item_opens_detail_with_its_text() {
        let mut app = App::new(vec!["Milk".to_string()]);

        press(&mut app, KeyCode::Tab).await;
        press(&mut app, KeyCode::Enter).await;

        assert_eq!(app.current_screen, Screen::Detail);
        assert_eq!(app.detail.text(), Some("Milk"));
    }

    #[tokio::test]
    async fn test_esc_returns_from_detail() {
        let mut app = App::new(vec!["Milk".to_string()]);

        press(&mut app, KeyCode::Tab).await;
        press(&mut app, KeyCode::Enter).await;
        assert_eq!(app.current_screen, Screen::Detail);

        press(&mut app, KeyCode::Esc).await;
        assert_eq!(app.current_screen, Screen::List);
        assert_eq!(app.previous_screen, Some(Screen::Detail));
    }

    #[tokio::test]
    async fn test_q_quits_only_outside_input_focus() {
        let mut app = App::new(Vec::new());

        press(&mut app, KeyCode::Char('q')).await;
        assert!(!app.should_quit);
        assert_eq!(app.editor.draft(), "q");

        press(&mut app, KeyCode::Tab).await;
        press(&mut app, KeyCode::Char('q')).await;
        assert!(app.should_quit);
    }
}
