//! Screen renderers for the browser.

pub mod grid;

use ratatui::Frame;

use super::modal;
use super::state::BrowserState;
use super::theme::Theme;

/// Top-level render: the card grid, then the detail overlay when open.
/// Everything is redrawn from scratch on every frame.
pub fn render(frame: &mut Frame, state: &mut BrowserState, theme: &Theme) {
    grid::render(frame, state, theme);

    state.hits.modal = None;
    if let Some(creature) = state.detail_creature().cloned() {
        let region = modal::render_detail(frame, frame.area(), &creature, theme);
        state.hits.modal = Some(region);
    }
}
