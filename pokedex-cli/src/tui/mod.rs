//! Interactive catalog browser: card grid, type filter bar, search box
//! and a detail overlay.

pub mod app;
pub mod events;
pub mod modal;
pub mod screens;
pub mod state;
pub mod theme;

use anyhow::Result;
use pokedex_core::ApiClient;

/// Run the browser until the user quits.
pub async fn run(client: ApiClient, initial_limit: u32) -> Result<()> {
    let app = app::App::new(client, initial_limit);
    app.run().await
}
