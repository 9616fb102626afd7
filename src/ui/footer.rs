use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Footer;

impl Default for Footer {
    fn default() -> Self {
        Self::new()
    }
}

impl Footer {
    pub fn new() -> Self {
        Self
    }

    /// Button hints are dimmed while the id controls are disabled.
    pub fn widget(&self, area: Rect, controls_enabled: bool, can_retry: bool) -> Paragraph<'static> {
        let buttons = " ♻ R: Random │ ▲ Up │ ▼ Down";
        let extra = if can_retry {
            " │ Enter: Retry │ Q: Quit"
        } else {
            " │ Q: Quit"
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = buttons.chars().count() + extra.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT);
        let button_style = if controls_enabled {
            text_style
        } else {
            text_style.add_modifier(Modifier::DIM | Modifier::CROSSED_OUT)
        };
        let dim_style = text_style.add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(buttons, button_style),
            Span::styled(extra, dim_style),
            Span::styled(" ".repeat(padding), dim_style),
            Span::styled(version, dim_style),
        ]);

        Paragraph::new(line).alignment(Alignment::Left).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
