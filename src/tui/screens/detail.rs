//! Detail screen for a single item

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::ui::Styles;

/// Detail screen state
pub struct DetailScreen {
    text: Option<String>,
}

impl DetailScreen {
    pub fn new() -> Self {
        Self { text: None }
    }

    /// Set the item text carried by the route that opened this screen
    pub fn set_text(&mut self, text: &str) {
        self.text = Some(text.to_string());
    }

    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// Draw the detail screen
    pub fn draw(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let content = match &self.text {
            Some(text) => vec![
                Line::from(""),
                Line::from(Span::styled(text.clone(), Styles::title())),
            ],
            None => vec![
                Line::from(""),
                Line::from(Span::styled("Nothing selected", Styles::inactive())),
            ],
        };

        let body = Paragraph::new(content)
            .block(
                Block::default()
                    .title("Item Detail")
                    .borders(Borders::ALL)
                    .border_style(Styles::active_border()),
            )
            .wrap(Wrap { trim: true });

        f.render_widget(body, chunks[0]);

        let hint = Paragraph::new("ESC: Back to list").style(Styles::inactive());
        f.render_widget(hint, chunks[1]);
    }
}
