//! List screen: item input and the item list
//!
//! The screen holds a mirror of the editor's state and keeps it current by
//! applying the change events the editor emits. Keystrokes in the input
//! field are written through to the editor's draft; draft changes coming
//! back (e.g. the clear after an add) update the widget.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::binding::EditorEvent;
use crate::tui::{components::TextInput, ui::Styles};

/// Which part of the list screen receives keystrokes
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    Input,
    List,
}

/// List screen state
pub struct ListScreen {
    pub input: TextInput,
    pub items: Vec<String>,
    pub state: ListState,
    pub focus: Focus,
}

impl ListScreen {
    pub fn new(items: &[String], draft: &str) -> Self {
        let mut input = TextInput::new("New item").with_placeholder("Type and press Enter");
        input.set_value(draft);
        input.set_focus(true);

        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }

        Self {
            input,
            items: items.to_vec(),
            state,
            focus: Focus::Input,
        }
    }

    /// Mirror a change reported by the editor
    pub fn apply_event(&mut self, event: &EditorEvent) {
        match event {
            EditorEvent::ItemAdded { index, value } => {
                self.items.insert(*index, value.clone());
                if self.state.selected().is_none() {
                    self.state.select(Some(0));
                }
            }
            EditorEvent::ItemRemoved { index, .. } => {
                if *index < self.items.len() {
                    self.items.remove(*index);
                }
                // Keep the selection on a valid row
                match self.state.selected() {
                    Some(_) if self.items.is_empty() => self.state.select(None),
                    Some(selected) if selected >= self.items.len() => {
                        self.state.select(Some(self.items.len() - 1));
                    }
                    _ => {}
                }
            }
            EditorEvent::DraftChanged { value } => {
                if self.input.value() != value {
                    self.input.set_value(value);
                }
            }
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Input => Focus::List,
            Focus::List => Focus::Input,
        };
        self.input.set_focus(self.focus == Focus::Input);
    }

    pub fn selected_item(&self) -> Option<&str> {
        self.state
            .selected()
            .and_then(|i| self.items.get(i))
            .map(String::as_str)
    }

    pub fn select_next(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => (i + 1) % self.items.len(),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn select_previous(&mut self) {
        if self.items.is_empty() {
            return;
        }
        let i = match self.state.selected() {
            Some(i) => {
                if i == 0 {
                    self.items.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.state.select(Some(i));
    }

    /// Draw the list screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(area);

        self.input.render(f, chunks[0]);
        self.draw_items(f, chunks[1]);
    }

    fn draw_items(&mut self, f: &mut Frame, area: Rect) {
        let highlight = self.focus == Focus::List;

        let items: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let style = if highlight && Some(i) == self.state.selected() {
                    Styles::selected()
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(item.clone(), style)))
            })
            .collect();

        let border_style = if highlight {
            Styles::active_border()
        } else {
            Styles::inactive_border()
        };

        if items.is_empty() {
            let empty = Paragraph::new("No items yet").style(Styles::inactive()).block(
                Block::default()
                    .title("Items (0)")
                    .borders(Borders::ALL)
                    .border_style(border_style),
            );
            f.render_widget(empty, area);
            return;
        }

        let list = List::new(items).block(
            Block::default()
                .title(format!("Items ({})", self.items.len()))
                .borders(Borders::ALL)
                .border_style(border_style),
        );

        f.render_stateful_widget(list, area, &mut self.state);
    }
}
