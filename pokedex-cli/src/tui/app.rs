use std::time::Duration;

use anyhow::Result;
use futures::stream::{FuturesUnordered, StreamExt};
use ratatui::crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind,
};
use ratatui::DefaultTerminal;
use tokio::sync::mpsc;
use tokio::time;

use pokedex_core::{ApiClient, Catalog};

use super::events::AppEvent;
use super::screens;
use super::state::{Action, BrowserState};
use super::theme::Theme;

/// Main application struct
pub struct App {
    client: ApiClient,
    state: BrowserState,
    theme: Theme,
    should_quit: bool,
    /// Event sender handed to background fetch tasks
    event_tx: Option<mpsc::UnboundedSender<AppEvent>>,
}

impl App {
    /// Create an app whose first load requests up to `initial_limit`.
    pub fn new(client: ApiClient, initial_limit: u32) -> Self {
        Self {
            client,
            state: BrowserState::new(Catalog::with_initial_watermark(initial_limit)),
            theme: Theme::default(),
            should_quit: false,
            event_tx: None,
        }
    }

    /// Run the application
    pub async fn run(mut self) -> Result<()> {
        // Initialize terminal
        let mut terminal = ratatui::init();
        terminal.clear()?;
        ratatui::crossterm::execute!(std::io::stdout(), EnableMouseCapture)?;

        // Create event channel
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        self.event_tx = Some(event_tx.clone());

        // Spawn input handler
        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            let _ = input_tx.send(AppEvent::Key(key));
                        }
                        Event::Mouse(mouse) => {
                            let _ = input_tx.send(AppEvent::Mouse(mouse));
                        }
                        Event::Resize(width, height) => {
                            let _ = input_tx.send(AppEvent::Resize(width, height));
                        }
                        _ => {}
                    }
                }
            }
        });

        // First load, through the same path as every later "load more".
        self.dispatch_pending_fetches();

        // Main render loop
        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        // Cleanup
        let _ = ratatui::crossterm::execute!(std::io::stdout(), DisableMouseCapture);
        ratatui::restore();
        result
    }

    /// Main event loop
    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            // Draw UI
            terminal.draw(|frame| screens::render(frame, &mut self.state, &self.theme))?;

            // Handle events with timeout for the spinner
            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(event)) => self.handle_event(event),
                Ok(None) => break, // Channel closed
                Err(_) => self.handle_event(AppEvent::Tick),
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Route one event through the state transitions, then perform
    /// whatever side effect the transition asked for.
    fn handle_event(&mut self, event: AppEvent) {
        let action = match event {
            AppEvent::Key(key) => self.state.handle_key(key),
            AppEvent::Mouse(mouse) => self.state.handle_mouse(mouse),
            // The next draw adapts to the new size on its own.
            AppEvent::Resize(..) => Action::None,
            AppEvent::CreatureLoaded(creature) => {
                self.state.on_creature_loaded(*creature);
                Action::None
            }
            AppEvent::FetchFailed { id } => {
                // Already warned where it happened; the record is simply
                // absent from the grid.
                tracing::debug!(id, "record missing from batch");
                Action::None
            }
            AppEvent::BatchComplete => {
                self.state.on_batch_complete();
                Action::None
            }
            AppEvent::Tick => {
                self.state.on_tick();
                Action::None
            }
        };

        match action {
            Action::None => {}
            Action::Quit => self.should_quit = true,
            Action::LoadMore => {
                self.state.catalog.advance_watermark();
                self.dispatch_pending_fetches();
            }
        }
    }

    /// Fire one independent fetch per pending id and stream the results
    /// back as events, in completion order. Once dispatched, a batch
    /// cannot be cancelled; late arrivals still land in the catalog.
    fn dispatch_pending_fetches(&mut self) {
        let ids = self.state.catalog.pending_ids();
        if ids.is_empty() {
            return;
        }
        let Some(tx) = self.event_tx.clone() else {
            return;
        };

        self.state.loading = true;
        let client = self.client.clone();

        tokio::spawn(async move {
            let mut fetches: FuturesUnordered<_> = ids
                .into_iter()
                .map(|id| {
                    let client = client.clone();
                    async move { client.fetch_creature(id).await }
                })
                .collect();

            while let Some(result) = fetches.next().await {
                match result {
                    Ok(creature) => {
                        let _ = tx.send(AppEvent::CreatureLoaded(Box::new(creature)));
                    }
                    Err(err) => {
                        tracing::warn!(id = err.id, error = %err.source, "dropping failed fetch");
                        let _ = tx.send(AppEvent::FetchFailed { id: err.id });
                    }
                }
            }

            let _ = tx.send(AppEvent::BatchComplete);
        });
    }
}
