use pokedex_core::Creature;
use ratatui::crossterm::event::{KeyEvent, MouseEvent};

/// All events the browser loop consumes.
#[derive(Debug)]
pub enum AppEvent {
    // Input events
    Key(KeyEvent),
    Mouse(MouseEvent),
    Resize(u16, u16),

    // Async fetch results. One batch produces one event per settled
    // fetch, in completion order, then a single BatchComplete.
    CreatureLoaded(Box<Creature>),
    FetchFailed { id: u32 },
    BatchComplete,

    // UI events
    Tick, // for the loading spinner
}
