use ratatui::style::Color;

pub const CARD_ACCENT: Color = Color::Rgb(0xef, 0x53, 0x50);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const POPUP_BORDER: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const LOADER_TRACK: Color = Color::Rgb(0x26, 0x26, 0x26);
pub const CHIP_TEXT: Color = Color::Rgb(0x10, 0x10, 0x10);
pub const NEUTRAL: Color = Color::Rgb(0x9c, 0xa3, 0xaf);

const TYPE_COLORS: &[(&str, u32)] = &[
    ("normal", 0xa8a77a),
    ("fire", 0xee8130),
    ("water", 0x6390f0),
    ("electric", 0xf7d02c),
    ("grass", 0x7ac74c),
    ("ice", 0x96d9d6),
    ("fighting", 0xc22e28),
    ("poison", 0xa33ea1),
    ("ground", 0xe2bf65),
    ("flying", 0xa98ff3),
    ("psychic", 0xf95587),
    ("bug", 0xa6b91a),
    ("rock", 0xb6a136),
    ("ghost", 0x735797),
    ("dragon", 0x6f35fc),
    ("dark", 0x705746),
    ("steel", 0xb7b7ce),
    ("fairy", 0xd685ad),
];

const STAT_COLORS: &[(&str, u32)] = &[
    ("hp", 0xff5959),
    ("attack", 0xf5ac78),
    ("defense", 0xfae078),
    ("special-attack", 0x9db7f5),
    ("special-defense", 0xa7db8d),
    ("speed", 0xfa92b2),
];

/// Chip background for a type name. Unknown types are neutral.
pub fn type_color(name: &str) -> Color {
    lookup(TYPE_COLORS, name)
}

/// Bar color for a raw stat name (before label normalization).
pub fn stat_color(name: &str) -> Color {
    lookup(STAT_COLORS, name)
}

fn lookup(table: &[(&str, u32)], name: &str) -> Color {
    table
        .iter()
        .find(|(key, _)| *key == name)
        .map(|(_, rgb)| Color::from_u32(*rgb))
        .unwrap_or(NEUTRAL)
}
