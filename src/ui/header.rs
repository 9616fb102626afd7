use crate::ui::theme::{CARD_ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use crate::ui::view::ViewState;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, view: &ViewState) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let title_style = Style::default()
            .fg(CARD_ACCENT)
            .add_modifier(Modifier::BOLD);

        let status = if view.is_loading() {
            "loading…"
        } else if view.failure().is_some() {
            "failed"
        } else {
            "ready"
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("pokecard", title_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("#{}", view.requested_id), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
