//! Detail overlay for a single record.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use pokedex_core::{api, Creature};

use super::theme::{badge_style, Theme};

/// Nominal stat bar width; a 200-point stat fills it exactly.
const STAT_BAR_WIDTH: usize = 24;

/// Calculate centered modal area
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Render the overlay for one record. Opening a different record goes
/// through the same path and replaces the content wholesale.
///
/// Returns the overlay's content region so mouse dismissal can tell
/// inside from outside.
pub fn render_detail(frame: &mut Frame, area: Rect, creature: &Creature, theme: &Theme) -> Rect {
    let modal_area = centered_rect(70, 80, area);

    // Clear whatever the grid drew underneath.
    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(format!(
            " {} #{} ",
            creature.display_name(),
            creature.padded_id()
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.modal_border);

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    frame.render_widget(
        Paragraph::new(detail_lines(creature, theme)),
        chunks[0],
    );

    let help = Line::from(vec![
        Span::styled("[Esc]", theme.highlight),
        Span::raw(" Close"),
    ]);
    frame.render_widget(
        Paragraph::new(help)
            .alignment(Alignment::Center)
            .style(theme.muted),
        chunks[1],
    );

    modal_area
}

fn detail_lines<'a>(creature: &'a Creature, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        api::artwork_url(creature.id),
        theme.muted,
    )));
    lines.push(Line::default());

    let mut badges = vec![Span::raw("Types: ")];
    for tag in creature.type_names() {
        badges.push(Span::styled(format!(" {tag} "), badge_style(tag)));
        badges.push(Span::raw(" "));
    }
    lines.push(Line::from(badges));

    lines.push(Line::from(format!(
        "Height: {:.1} m   Weight: {:.1} kg   Base experience: {}",
        creature.height_m(),
        creature.weight_kg(),
        creature
            .base_experience
            .map_or_else(|| "-".to_string(), |xp| xp.to_string())
    )));
    lines.push(Line::default());

    let mut abilities = vec![Span::raw("Abilities: ")];
    for slot in &creature.abilities {
        abilities.push(Span::styled(
            format!(" {} ", slot.ability.name),
            theme.highlight,
        ));
        abilities.push(Span::raw(" "));
    }
    lines.push(Line::from(abilities));
    lines.push(Line::default());

    lines.push(Line::from("Stats:"));
    for slot in &creature.stats {
        lines.push(Line::from(vec![
            Span::raw(format!("  {:<16} {:>3}  ", slot.stat.name, slot.base_stat)),
            Span::styled(stat_bar(slot.base_stat), theme.stat_bar),
        ]));
    }

    lines
}

/// Bar fill is value / 200 of the nominal width, never clamped: stats
/// above 200 overrun and are cut off only by the render area.
fn stat_bar(value: u32) -> String {
    let filled = (f64::from(value) / 200.0 * STAT_BAR_WIDTH as f64).round() as usize;
    "█".repeat(filled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_stays_inside_the_area() {
        let area = Rect::new(0, 0, 100, 40);
        let modal = centered_rect(70, 80, area);

        assert!(modal.x > area.x);
        assert!(modal.y > area.y);
        assert!(modal.right() < area.right());
        assert!(modal.bottom() < area.bottom());
    }

    #[test]
    fn stat_bar_is_unclamped() {
        assert_eq!(stat_bar(100).chars().count(), STAT_BAR_WIDTH / 2);
        assert!(stat_bar(230).chars().count() > STAT_BAR_WIDTH);
    }
}
