use pokedex_cli::tui::state::{Action, BrowserState};
use pokedex_core::api::{NamedResource, TypeSlot};
use pokedex_core::{Catalog, Creature};
use pretty_assertions::assert_eq;
use ratatui::crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

fn creature(id: u32, name: &str, types: &[&str]) -> Creature {
    Creature {
        id,
        name: name.to_string(),
        types: types
            .iter()
            .map(|tag| TypeSlot {
                type_ref: NamedResource {
                    name: (*tag).to_string(),
                },
            })
            .collect(),
        stats: Vec::new(),
        abilities: Vec::new(),
        height: 0,
        weight: 0,
        base_experience: None,
    }
}

fn browser() -> BrowserState {
    let mut catalog = Catalog::new();
    catalog.absorb(Ok(creature(1, "bulbasaur", &["grass"])));
    catalog.absorb(Ok(creature(4, "charmander", &["fire"])));
    BrowserState::new(catalog)
}

fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn clicking_outside_the_overlay_dismisses_it() {
    let mut state = browser();
    state.detail = Some(1);
    state.hits.modal = Some(Rect::new(10, 5, 20, 10));

    let action = state.handle_mouse(click(0, 0));

    assert_eq!(action, Action::None);
    assert_eq!(state.detail, None);
}

#[test]
fn clicking_inside_the_overlay_keeps_it_open() {
    let mut state = browser();
    state.detail = Some(1);
    state.hits.modal = Some(Rect::new(10, 5, 20, 10));

    state.handle_mouse(click(15, 8));

    assert_eq!(state.detail, Some(1));
}

#[test]
fn clicking_a_card_selects_it_and_opens_its_detail() {
    let mut state = browser();
    state.hits.cards = vec![
        (Rect::new(0, 0, 22, 5), 0),
        (Rect::new(22, 0, 22, 5), 1),
    ];

    state.handle_mouse(click(30, 2));

    assert_eq!(state.selected, 1);
    assert_eq!(state.detail, Some(4));
}

#[test]
fn clicking_the_load_more_control_requests_a_batch() {
    let mut state = browser();
    state.hits.load_more = Some(Rect::new(60, 30, 14, 1));

    assert_eq!(state.handle_mouse(click(65, 30)), Action::LoadMore);

    // While a batch is in flight the control does nothing.
    state.loading = true;
    assert_eq!(state.handle_mouse(click(65, 30)), Action::None);
}

#[test]
fn clicking_a_filter_tab_activates_it() {
    let mut state = browser();
    state.hits.filters = vec![
        (Rect::new(0, 3, 5, 1), 0),
        (Rect::new(6, 3, 6, 1), 1),
    ];

    state.handle_mouse(click(8, 3));

    assert_eq!(state.filter_index, 1);
    assert_eq!(state.search_input.value(), "");
}

#[test]
fn only_left_button_presses_count() {
    let mut state = browser();
    state.detail = Some(1);
    state.hits.modal = Some(Rect::new(10, 5, 20, 10));

    let moved = MouseEvent {
        kind: MouseEventKind::Moved,
        column: 0,
        row: 0,
        modifiers: KeyModifiers::NONE,
    };
    state.handle_mouse(moved);

    assert_eq!(state.detail, Some(1));
}
