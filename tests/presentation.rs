mod common;

use common::sample_pokemon;
use pokecard::ui::present::{stat_label, stat_rows, stat_width, type_chips};
use pokecard::ui::render::stat_line;
use pokecard::ui::theme::{stat_color, type_color};

#[test]
fn width_scales_against_255() {
    assert_eq!(stat_width(0), 0.0);
    assert_eq!(stat_width(255), 100.0);
    assert!((stat_width(128) - 50.196).abs() < 0.01);
}

#[test]
fn width_is_clamped_above_ceiling() {
    assert_eq!(stat_width(300), 100.0);
}

#[test]
fn special_stats_are_abbreviated() {
    assert_eq!(stat_label("special-attack"), "sp. attack");
    assert_eq!(stat_label("special-defense"), "sp. defense");
    assert_eq!(stat_label("speed"), "speed");
    assert_eq!(stat_label("hp"), "hp");
}

#[test]
fn rows_follow_record_order() {
    let pokemon = sample_pokemon(1);
    let rows: Vec<_> = stat_rows(&pokemon).collect();
    let labels: Vec<&str> = rows.iter().map(|row| row.label).collect();
    assert_eq!(
        labels,
        vec!["hp", "attack", "defense", "sp. attack", "sp. defense", "speed"]
    );
    assert_eq!(rows[3].value, 65);
    assert_eq!(rows[3].width_percent, stat_width(65));
    assert_eq!(rows[3].color, stat_color("special-attack"));
}

#[test]
fn chips_carry_type_colors() {
    let pokemon = sample_pokemon(1);
    let chips: Vec<_> = type_chips(&pokemon).collect();
    assert_eq!(chips.len(), 2);
    assert_eq!(chips[0].name, "grass");
    assert_eq!(chips[0].color, type_color("grass"));
    assert_eq!(chips[1].name, "poison");
}

#[test]
fn stat_line_fills_bar_proportionally() {
    let pokemon = sample_pokemon(1);
    let mut rows = stat_rows(&pokemon);
    let hp = rows.next().unwrap();
    let line = stat_line(&hp, 51);
    let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
    // 45 / 255 of 51 cells is 9 cells.
    assert_eq!(text.matches('█').count(), 9);
    assert_eq!(text.matches('·').count(), 42);
    assert!(text.contains("hp: 45"));
}

#[test]
fn stat_line_with_no_room_has_no_bar() {
    let pokemon = sample_pokemon(1);
    let hp = stat_rows(&pokemon).next().unwrap();
    let text: String = stat_line(&hp, 0)
        .spans
        .iter()
        .map(|span| span.content.as_ref())
        .collect();
    assert!(!text.contains('█'));
}
