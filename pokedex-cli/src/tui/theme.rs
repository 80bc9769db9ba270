use pokedex_core::Creature;
use ratatui::style::{Color, Modifier, Style};

/// Badge color for type tags the table does not know.
pub const DEFAULT_BADGE_COLOR: Color = Color::Rgb(0x77, 0x77, 0x77);

/// Card accent when no known type matches.
pub const DEFAULT_CARD_COLOR: Color = Color::Rgb(0xF5, 0xF5, 0xF5);

/// Consistent theme for the browser
pub struct Theme {
    pub selected: Style,
    pub active_filter: Style,
    pub inactive_filter: Style,
    pub muted: Style,
    pub highlight: Style,
    pub modal_border: Style,
    pub stat_bar: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            selected: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            active_filter: Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            inactive_filter: Style::default().fg(Color::Gray),
            muted: Style::default().fg(Color::DarkGray),
            highlight: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            modal_border: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            stat_bar: Style::default().fg(Color::Cyan),
        }
    }
}

/// Fixed type -> color table, carried over from the original page's
/// palette. Unknown tags get the default badge color.
pub fn type_color(tag: &str) -> Color {
    match tag {
        "fire" => Color::Rgb(0xFD, 0xDF, 0xDF),
        "grass" => Color::Rgb(0xDE, 0xFD, 0xE0),
        "electric" => Color::Rgb(0xFC, 0xF7, 0xDE),
        "water" => Color::Rgb(0xDE, 0xF3, 0xFD),
        "ground" => Color::Rgb(0xF4, 0xE7, 0xDA),
        "rock" => Color::Rgb(0xD5, 0xD5, 0xD4),
        "fairy" => Color::Rgb(0xFC, 0xEA, 0xFF),
        "poison" => Color::Rgb(0x98, 0xD7, 0xA5),
        "bug" => Color::Rgb(0xF8, 0xD5, 0xA3),
        "dragon" => Color::Rgb(0x97, 0xB3, 0xE6),
        "psychic" => Color::Rgb(0xEA, 0xED, 0xA1),
        "flying" => Color::Rgb(0xF5, 0xF5, 0xF5),
        "fighting" => Color::Rgb(0xE6, 0xE0, 0xD4),
        "normal" => Color::Rgb(0xF5, 0xF5, 0xF5),
        "ghost" => Color::Rgb(0x8A, 0x8A, 0x9E),
        "ice" => Color::Rgb(0xC7, 0xF0, 0xFF),
        _ => DEFAULT_BADGE_COLOR,
    }
}

/// Card accent from the record's representative type.
pub fn card_color(creature: &Creature) -> Color {
    creature
        .primary_type()
        .map(type_color)
        .unwrap_or(DEFAULT_CARD_COLOR)
}

/// Style for a single type badge.
pub fn badge_style(tag: &str) -> Style {
    Style::default().fg(Color::Black).bg(type_color(tag))
}
