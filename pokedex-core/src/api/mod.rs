//! HTTP adapter for the external creature service.
//!
//! One GET per numeric identifier, JSON decoded as-is. No caching, no
//! retries, no rate limiting.

pub mod types;

use std::time::Duration;

use anyhow::Context;

use crate::error::FetchError;

pub use types::{AbilitySlot, Creature, NamedResource, StatSlot, TypeSlot};

/// Base URL of the public creature service.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Highest identifier the service answers for.
pub const MAX_CREATURE_ID: u32 = 898;

/// Fixed host serving the static creature images.
const SPRITE_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon";

/// Thin wrapper around a shared `reqwest::Client` with a configurable
/// service base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client against the given service base URL.
    pub fn new(base_url: impl Into<String>) -> anyhow::Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("pokedex/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(30))
            .build()
            .context("Failed to create HTTP client")?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    /// Fetch one creature record by identifier.
    ///
    /// Any failure along the way (request, status, body, decode) collapses
    /// into a single [`FetchError`] carrying the requested id.
    pub async fn fetch_creature(&self, id: u32) -> Result<Creature, FetchError> {
        self.fetch_inner(id)
            .await
            .map_err(|source| FetchError { id, source })
    }

    async fn fetch_inner(&self, id: u32) -> anyhow::Result<Creature> {
        let url = format!("{}/pokemon/{}", self.base_url, id);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?;

        if !response.status().is_success() {
            anyhow::bail!("HTTP {} from {}", response.status(), url);
        }

        response
            .json::<Creature>()
            .await
            .with_context(|| format!("invalid record body from {url}"))
    }

    /// Base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Summary sprite URL for a creature, derived purely from its identifier.
pub fn sprite_url(id: u32) -> String {
    format!("{SPRITE_BASE}/{id}.png")
}

/// Official artwork URL for the detail view.
pub fn artwork_url(id: u32) -> String {
    format!("{SPRITE_BASE}/other/official-artwork/{id}.png")
}
