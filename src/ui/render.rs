use crate::api::Pokemon;
use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{card_regions, centered_rect, layout_regions};
use crate::ui::loader::LoaderTimeline;
use crate::ui::present::{stat_rows, type_chips, StatRow};
use crate::ui::theme::{
    CARD_ACCENT, CHIP_TEXT, GLOBAL_BORDER, HEADER_TEXT, LOADER_TRACK, NEUTRAL, POPUP_BORDER,
    STATUS_ERROR,
};
use crate::ui::view::ViewState;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap};
use ratatui::Frame;

/// Width of the stat label column, wide enough for "sp. defense".
const LABEL_WIDTH: usize = 12;
/// Width of the numeric value column.
const VALUE_WIDTH: usize = 4;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    draw_view(frame, app.view(), app.loader());
}

pub fn draw_view(
    frame: &mut Frame<'_>,
    view: &ViewState,
    loader: Option<&LoaderTimeline>,
) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(view), header);
    frame.render_widget(Clear, body);

    match view.record.as_deref() {
        None => {
            let ratio = loader.map(LoaderTimeline::progress).unwrap_or(0.0);
            draw_loader(frame, body, ratio);
        }
        Some(pokemon) => {
            let (sprite, stats) = card_regions(body);
            // A failed refetch leaves the previous record on the card.
            if view.show_record() || view.failure().is_some() {
                draw_info(frame, sprite, pokemon);
            } else {
                let ratio = loader.map(LoaderTimeline::progress).unwrap_or(0.0);
                draw_loader(frame, sprite, ratio);
            }
            draw_stats(frame, stats, pokemon);
        }
    }

    let can_retry = view.failure().is_some();
    frame.render_widget(
        Footer::new().widget(footer, view.controls_enabled(), can_retry),
        footer,
    );

    if let Some(reason) = view.failure() {
        draw_failure(frame, area, reason);
    }
}

fn panel(title: &str) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER))
}

fn draw_loader(frame: &mut Frame<'_>, area: Rect, ratio: f64) {
    let block = panel(" Loading ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }
    let bar = Rect {
        y: inner.y + inner.height / 2,
        height: 1,
        ..inner
    };
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(CARD_ACCENT).bg(LOADER_TRACK))
        .ratio(ratio.clamp(0.0, 1.0))
        .label("");
    frame.render_widget(gauge, bar);
}

fn draw_info(frame: &mut Frame<'_>, area: Rect, pokemon: &Pokemon) {
    let text_style = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            format!("#{}", pokemon.id),
            text_style.add_modifier(Modifier::DIM),
        )),
        Line::from(Span::styled(
            pokemon.name.clone(),
            Style::default()
                .fg(CARD_ACCENT)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    let sprite = pokemon.sprite_url().unwrap_or("(no sprite)");
    lines.push(Line::from(Span::styled(
        sprite.to_string(),
        Style::default().fg(NEUTRAL),
    )));
    lines.push(Line::from(""));

    let mut chips = Vec::new();
    for chip in type_chips(pokemon) {
        if !chips.is_empty() {
            chips.push(Span::raw(" "));
        }
        chips.push(Span::styled(
            format!(" {} ", chip.name),
            Style::default().fg(CHIP_TEXT).bg(chip.color),
        ));
    }
    lines.push(Line::from(chips));

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(panel(""));
    frame.render_widget(paragraph, area);
}

fn draw_stats(frame: &mut Frame<'_>, area: Rect, pokemon: &Pokemon) {
    let block = panel(" Stats ");
    let inner_width = block.inner(area).width as usize;
    let bar_width = inner_width.saturating_sub(LABEL_WIDTH + VALUE_WIDTH + 3);
    let lines: Vec<Line> = stat_rows(pokemon)
        .map(|row| stat_line(&row, bar_width))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// `label: value ████····` with the filled part scaled to `bar_width`.
pub fn stat_line(row: &StatRow<'_>, bar_width: usize) -> Line<'static> {
    let filled = ((row.width_percent / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);
    Line::from(vec![
        Span::styled(
            format!("{:>width$}: ", row.label, width = LABEL_WIDTH),
            Style::default().fg(HEADER_TEXT),
        ),
        Span::styled(
            format!("{:<width$}", row.value, width = VALUE_WIDTH),
            Style::default().fg(row.color),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(row.color)),
        Span::styled(
            "·".repeat(bar_width - filled),
            Style::default().fg(LOADER_TRACK),
        ),
    ])
}

fn draw_failure(frame: &mut Frame<'_>, area: Rect, reason: &str) {
    let popup = centered_rect(60, 30, area);
    frame.render_widget(Clear, popup);
    let lines = vec![
        Line::from(Span::styled(reason.to_string(), Style::default().fg(STATUS_ERROR))),
        Line::from(""),
        Line::from(Span::styled(
            "Press Enter to retry",
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM),
        )),
    ];
    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(" Fetch failed ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(POPUP_BORDER)),
        );
    frame.render_widget(paragraph, popup);
}
