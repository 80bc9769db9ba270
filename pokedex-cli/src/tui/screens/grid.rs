//! Card grid screen: search bar, filter tabs, the grid itself and the
//! footer with the load-more control.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::state::BrowserState;
use crate::tui::theme::{self, Theme};

const CARD_WIDTH: u16 = 22;
const CARD_HEIGHT: u16 = 5;
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Owned snapshot of one card, so rendering can mutate the hit regions
/// without holding a borrow of the catalog.
struct Card {
    id_label: String,
    name: String,
    badges: Vec<(String, Color)>,
    accent: Color,
}

pub fn render(frame: &mut Frame, state: &mut BrowserState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Length(1), // filter tabs
            Constraint::Min(3),    // card grid
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_search_bar(frame, chunks[0], state, theme);
    render_filter_bar(frame, chunks[1], state, theme);
    render_cards(frame, chunks[2], state, theme);
    render_footer(frame, chunks[3], state, theme);
}

fn render_search_bar(frame: &mut Frame, area: Rect, state: &BrowserState, theme: &Theme) {
    let counts = format!(
        " {} / {} ",
        state.catalog.visible_len(),
        state.catalog.loaded_len()
    );

    let input = Paragraph::new(Line::from(vec![
        Span::raw(state.search_input.value().to_string()),
        Span::styled("█", theme.highlight),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search (name or id) ")
            .title(Line::from(counts).right_aligned()),
    );

    frame.render_widget(input, area);
}

fn render_filter_bar(frame: &mut Frame, area: Rect, state: &mut BrowserState, theme: &Theme) {
    state.hits.filters.clear();

    let mut spans = Vec::new();
    let mut x = area.x;
    for index in 0..BrowserState::filter_count() {
        let label = format!(" {} ", BrowserState::filter_label(index));
        let width = label.len() as u16;

        let style = if index == state.filter_index {
            theme.active_filter
        } else {
            theme.inactive_filter
        };

        // Tabs that fall off a narrow terminal are clipped and simply not
        // clickable.
        if x + width <= area.right() {
            state
                .hits
                .filters
                .push((Rect::new(x, area.y, width, 1), index));
        }

        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
        x += width + 1;
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_cards(frame: &mut Frame, area: Rect, state: &mut BrowserState, theme: &Theme) {
    state.hits.cards.clear();

    let cards: Vec<Card> = state
        .catalog
        .visible()
        .into_iter()
        .map(|creature| Card {
            id_label: format!("#{}", creature.padded_id()),
            name: creature.display_name(),
            badges: creature
                .type_names()
                .map(|tag| (tag.to_string(), theme::type_color(tag)))
                .collect(),
            accent: theme::card_color(creature),
        })
        .collect();

    let cols = (area.width / CARD_WIDTH).max(1) as usize;
    let visible_rows = (area.height / CARD_HEIGHT).max(1) as usize;
    state.grid_cols = cols;

    if cards.is_empty() {
        let empty = Paragraph::new("No records match the current filter.")
            .style(theme.muted)
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    // Keep the selection on screen.
    let selected_row = state.selected / cols;
    if selected_row < state.scroll_row {
        state.scroll_row = selected_row;
    } else if selected_row >= state.scroll_row + visible_rows {
        state.scroll_row = selected_row + 1 - visible_rows;
    }

    let first = state.scroll_row * cols;
    for (index, card) in cards
        .iter()
        .enumerate()
        .skip(first)
        .take(cols * visible_rows)
    {
        let slot = index - first;
        let col = (slot % cols) as u16;
        let row = (slot / cols) as u16;
        let rect = Rect::new(
            area.x + col * CARD_WIDTH,
            area.y + row * CARD_HEIGHT,
            CARD_WIDTH,
            CARD_HEIGHT,
        );
        state.hits.cards.push((rect, index));

        let is_selected = index == state.selected;
        let (border_type, border_style) = if is_selected {
            (BorderType::Thick, theme.selected)
        } else {
            (BorderType::Rounded, Style::default().fg(card.accent))
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        let inner = block.inner(rect);
        frame.render_widget(block, rect);

        let mut badge_spans = Vec::new();
        for (tag, color) in &card.badges {
            badge_spans.push(Span::styled(
                format!(" {tag} "),
                Style::default().fg(Color::Black).bg(*color),
            ));
            badge_spans.push(Span::raw(" "));
        }

        let lines = vec![
            Line::from(Span::styled(card.id_label.clone(), theme.muted)),
            Line::from(Span::styled(
                card.name.clone(),
                Style::default()
                    .fg(card.accent)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(badge_spans),
        ];
        frame.render_widget(Paragraph::new(lines), inner);
    }
}

fn render_footer(frame: &mut Frame, area: Rect, state: &mut BrowserState, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(14)])
        .split(area);

    let status = if state.loading {
        format!(" {} loading...", SPINNER[state.tick % SPINNER.len()])
    } else {
        format!(" {} shown", state.catalog.visible_len())
    };
    let help = "  type to search · [Tab] filter · [Enter] details · [Esc] quit";
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(status, theme.highlight),
            Span::styled(help, theme.muted),
        ])),
        chunks[0],
    );

    // Matches the page's always-present button: pressing it past the id
    // ceiling is a no-op because the watermark is already clamped.
    state.hits.load_more = Some(chunks[1]);
    let button_style = if state.loading {
        theme.muted
    } else {
        theme.active_filter
    };
    frame.render_widget(
        Paragraph::new("[ Load more ]")
            .style(button_style)
            .alignment(Alignment::Right),
        chunks[1],
    );
}
