//! Pure transforms from a record to the rows and chips the card draws.

use ratatui::style::Color;

use crate::api::Pokemon;
use crate::ui::theme::{stat_color, type_color};

/// Highest base stat the API reports.
pub const STAT_CEILING: f64 = 255.0;

#[derive(Debug, Clone, PartialEq)]
pub struct StatRow<'a> {
    pub label: &'a str,
    pub value: u16,
    pub width_percent: f64,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TypeChip<'a> {
    pub name: &'a str,
    pub color: Color,
}

pub fn stat_label(name: &str) -> &str {
    match name {
        "special-attack" => "sp. attack",
        "special-defense" => "sp. defense",
        other => other,
    }
}

/// Bar width as a percentage of [`STAT_CEILING`], clamped to `[0, 100]`.
pub fn stat_width(value: u16) -> f64 {
    (f64::from(value) / STAT_CEILING * 100.0).clamp(0.0, 100.0)
}

pub fn stat_rows(pokemon: &Pokemon) -> impl Iterator<Item = StatRow<'_>> {
    pokemon.stats.iter().map(|slot| StatRow {
        label: stat_label(&slot.stat.name),
        value: slot.base_stat,
        width_percent: stat_width(slot.base_stat),
        color: stat_color(&slot.stat.name),
    })
}

pub fn type_chips(pokemon: &Pokemon) -> impl Iterator<Item = TypeChip<'_>> {
    pokemon.type_names().map(|name| TypeChip {
        name,
        color: type_color(name),
    })
}
