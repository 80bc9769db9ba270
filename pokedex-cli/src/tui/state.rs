use pokedex_core::catalog::KNOWN_TYPES;
use pokedex_core::{Catalog, Creature, TypeFilter};
use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect};
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Side effect the event loop must perform after a state transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Advance the watermark and dispatch the next fetch batch.
    LoadMore,
    Quit,
}

/// Regions recorded during the last draw, for mouse hit tests.
#[derive(Debug, Default)]
pub struct HitRegions {
    /// One rect per rendered card, paired with its index into the visible
    /// set.
    pub cards: Vec<(Rect, usize)>,
    /// One rect per filter tab, paired with its filter bar index.
    pub filters: Vec<(Rect, usize)>,
    /// The "load more" footer control.
    pub load_more: Option<Rect>,
    /// Content region of the open detail overlay.
    pub modal: Option<Rect>,
}

/// Everything the browser shows, plus the pure transition handlers.
///
/// Handlers mutate state and return an [`Action`]; they never touch the
/// terminal or the network, so transitions are testable on their own.
pub struct BrowserState {
    pub catalog: Catalog,
    pub search_input: Input,
    /// Index into the filter bar: 0 = all, 1.. = KNOWN_TYPES.
    pub filter_index: usize,
    /// Selection within the visible set.
    pub selected: usize,
    /// Id of the record shown in the detail overlay, if any.
    pub detail: Option<u32>,
    /// True while a fetch batch is in flight.
    pub loading: bool,
    /// Grid scroll offset, in card rows.
    pub scroll_row: usize,
    /// Columns the grid used on the last draw; drives Up/Down movement.
    pub grid_cols: usize,
    /// Spinner frame counter.
    pub tick: usize,
    pub hits: HitRegions,
}

impl BrowserState {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            search_input: Input::default(),
            filter_index: 0,
            selected: 0,
            detail: None,
            loading: false,
            scroll_row: 0,
            grid_cols: 1,
            tick: 0,
            hits: HitRegions::default(),
        }
    }

    /// Number of filter tabs ("all" plus every known type).
    pub fn filter_count() -> usize {
        KNOWN_TYPES.len() + 1
    }

    /// Label of a filter tab.
    pub fn filter_label(index: usize) -> &'static str {
        if index == 0 {
            "all"
        } else {
            KNOWN_TYPES[index - 1]
        }
    }

    fn filter_at(index: usize) -> TypeFilter {
        if index == 0 {
            TypeFilter::All
        } else {
            TypeFilter::Only(KNOWN_TYPES[index - 1].to_string())
        }
    }

    /// Activate a filter tab: clears the search text and recomputes the
    /// view, exactly one tab active at a time.
    pub fn select_filter(&mut self, index: usize) {
        self.filter_index = index % Self::filter_count();
        self.search_input.reset();
        self.catalog.set_type_filter(Self::filter_at(self.filter_index));
        self.catalog.refresh_view("");
        self.selected = 0;
        self.scroll_row = 0;
    }

    pub fn cycle_filter(&mut self, step: isize) {
        let count = Self::filter_count() as isize;
        let next = (self.filter_index as isize + step).rem_euclid(count) as usize;
        self.select_filter(next);
    }

    /// Recompute the view for the current search text and filter.
    pub fn refresh_view(&mut self) {
        let text = self.search_input.value().to_string();
        self.catalog.refresh_view(&text);
        self.clamp_selection();
    }

    fn clamp_selection(&mut self) {
        let len = self.catalog.visible_len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    pub fn selected_creature(&self) -> Option<&Creature> {
        self.catalog.visible().get(self.selected).copied()
    }

    /// Record shown in the overlay, resolved by id so catalog growth
    /// cannot shift it.
    pub fn detail_creature(&self) -> Option<&Creature> {
        let id = self.detail?;
        self.catalog.loaded().iter().find(|c| c.id == id)
    }

    pub fn open_detail(&mut self) {
        if let Some(creature) = self.selected_creature() {
            self.detail = Some(creature.id);
        }
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }

    fn move_selection(&mut self, step: isize) {
        let len = self.catalog.visible_len();
        if len == 0 {
            return;
        }
        let next = self.selected as isize + step;
        self.selected = next.clamp(0, len as isize - 1) as usize;
    }

    fn request_load_more(&self) -> Action {
        if self.loading {
            Action::None
        } else {
            Action::LoadMore
        }
    }

    /// Key transition. Printable input falls through to the search box;
    /// every edit recomputes the view.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Ctrl+C always quits, overlay or not.
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        // The overlay swallows everything while open.
        if self.detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.close_detail();
            }
            return Action::None;
        }

        match key.code {
            KeyCode::Esc => return Action::Quit,
            KeyCode::Char('l') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return self.request_load_more();
            }
            KeyCode::Tab => self.cycle_filter(1),
            KeyCode::BackTab => self.cycle_filter(-1),
            KeyCode::Enter => self.open_detail(),
            KeyCode::Left => self.move_selection(-1),
            KeyCode::Right => self.move_selection(1),
            KeyCode::Up => self.move_selection(-(self.grid_cols as isize)),
            KeyCode::Down => self.move_selection(self.grid_cols as isize),
            _ => {
                if self.search_input.handle_event(&Event::Key(key)).is_some() {
                    self.refresh_view();
                }
            }
        }

        Action::None
    }

    /// Mouse transition, resolved against the regions of the last draw.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Action {
        if !matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)) {
            return Action::None;
        }
        let at = Position::new(mouse.column, mouse.row);

        if self.detail.is_some() {
            // Clicking the overlay content keeps it open; clicking
            // anywhere outside dismisses it.
            let inside = self.hits.modal.is_some_and(|region| region.contains(at));
            if !inside {
                self.close_detail();
            }
            return Action::None;
        }

        if let Some(&(_, index)) = self.hits.filters.iter().find(|(region, _)| region.contains(at))
        {
            self.select_filter(index);
            return Action::None;
        }

        if let Some(&(_, index)) = self.hits.cards.iter().find(|(region, _)| region.contains(at)) {
            self.selected = index;
            self.open_detail();
            return Action::None;
        }

        if self.hits.load_more.is_some_and(|region| region.contains(at)) {
            return self.request_load_more();
        }

        Action::None
    }

    pub fn on_creature_loaded(&mut self, creature: Creature) {
        self.catalog.absorb(Ok(creature));
    }

    pub fn on_batch_complete(&mut self) {
        self.loading = false;
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }
}
