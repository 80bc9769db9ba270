//! In-memory creature catalog: the loaded collection, the derived view,
//! the active type filter and the load watermark.
//!
//! All mutation funnels through the operations here so the view stays
//! recomputable from the other three fields at any time.

pub mod filter;

use futures::stream::{FuturesUnordered, StreamExt};

use crate::api::{ApiClient, Creature, MAX_CREATURE_ID};
use crate::error::FetchError;

pub use filter::{derive_view, TypeFilter, ViewSelection, KNOWN_TYPES};

/// How many records the first load requests.
pub const INITIAL_LOAD: u32 = 20;

/// How far one "load more" advances the watermark.
pub const LOAD_STEP: u32 = 20;

/// Single-instance store for everything the browser session holds.
#[derive(Debug)]
pub struct Catalog {
    /// Append-only, unique by id. Insertion order is fetch completion
    /// order, not identifier order.
    loaded: Vec<Creature>,
    view: ViewSelection,
    active_type: TypeFilter,
    /// Highest id requested so far; never decreases, capped at the
    /// service maximum.
    watermark: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self::with_initial_watermark(INITIAL_LOAD)
    }

    /// Start with a caller-chosen first-load watermark, clamped to the
    /// service maximum.
    pub fn with_initial_watermark(watermark: u32) -> Self {
        Self {
            loaded: Vec::new(),
            view: ViewSelection::All,
            active_type: TypeFilter::All,
            watermark: watermark.min(MAX_CREATURE_ID),
        }
    }

    pub fn loaded(&self) -> &[Creature] {
        &self.loaded
    }

    pub fn loaded_len(&self) -> usize {
        self.loaded.len()
    }

    pub fn view(&self) -> &ViewSelection {
        &self.view
    }

    pub fn active_type(&self) -> &TypeFilter {
        &self.active_type
    }

    pub fn watermark(&self) -> u32 {
        self.watermark
    }

    /// True once the watermark has reached the service's id ceiling.
    pub fn is_exhausted(&self) -> bool {
        self.watermark >= MAX_CREATURE_ID
    }

    /// Advance the watermark one step, clamped at the service maximum.
    /// Returns the new watermark.
    pub fn advance_watermark(&mut self) -> u32 {
        self.watermark = (self.watermark + LOAD_STEP).min(MAX_CREATURE_ID);
        self.watermark
    }

    /// Ids that a fetch up to `limit` would request: everything past the
    /// count of already-loaded records, up to and including `limit`.
    pub fn ids_up_to(&self, limit: u32) -> Vec<u32> {
        (self.loaded.len() as u32 + 1..=limit.min(MAX_CREATURE_ID)).collect()
    }

    /// Ids still owed under the current watermark.
    pub fn pending_ids(&self) -> Vec<u32> {
        self.ids_up_to(self.watermark)
    }

    /// Settle one fetch outcome into the store.
    ///
    /// Successes append unless the id is already present (a failed id in an
    /// earlier batch shifts later ranges over loaded ground). Failures are
    /// logged and dropped; they never abort or taint sibling fetches.
    pub fn absorb(&mut self, result: Result<Creature, FetchError>) {
        match result {
            Ok(creature) => {
                if self.loaded.iter().any(|known| known.id == creature.id) {
                    tracing::debug!(id = creature.id, "duplicate record, skipping");
                } else {
                    self.loaded.push(creature);
                }
            }
            Err(err) => {
                tracing::warn!(id = err.id, error = %err.source, "dropping failed fetch");
            }
        }
    }

    /// Fetch every id in `(loaded_len, limit]` concurrently and absorb the
    /// results as they settle, in completion order.
    ///
    /// This is an unordered join: the call returns only after every
    /// dispatched fetch has settled, and a failure for one id leaves the
    /// rest untouched.
    pub async fn fetch_up_to(&mut self, client: &ApiClient, limit: u32) {
        let ids = self.ids_up_to(limit);
        if ids.is_empty() {
            return;
        }

        tracing::debug!(count = ids.len(), limit, "dispatching record fetches");

        let mut fetches: FuturesUnordered<_> = ids
            .into_iter()
            .map(|id| client.fetch_creature(id))
            .collect();

        while let Some(result) = fetches.next().await {
            self.absorb(result);
        }
    }

    /// Recompute the view from the loaded records, the active type filter
    /// and the given search text.
    pub fn refresh_view(&mut self, search: &str) {
        self.view = derive_view(&self.loaded, &self.active_type, search);
    }

    /// Replace the active type filter. The caller is responsible for
    /// clearing its search text and calling [`Catalog::refresh_view`].
    pub fn set_type_filter(&mut self, active: TypeFilter) {
        self.active_type = active;
    }

    /// Resolve the view into records: the sentinel yields all of `loaded`,
    /// a materialized view yields its subset. Order follows `loaded`.
    pub fn visible(&self) -> Vec<&Creature> {
        match &self.view {
            ViewSelection::All => self.loaded.iter().collect(),
            ViewSelection::Filtered(indices) => indices
                .iter()
                .filter_map(|&index| self.loaded.get(index))
                .collect(),
        }
    }

    pub fn visible_len(&self) -> usize {
        match &self.view {
            ViewSelection::All => self.loaded.len(),
            ViewSelection::Filtered(indices) => indices.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{NamedResource, TypeSlot};
    use anyhow::anyhow;
    use pretty_assertions::assert_eq;

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

    #[test]
    fn starts_with_the_sentinel_view_and_initial_watermark() {
        let catalog = Catalog::new();
        assert!(catalog.view().is_sentinel());
        assert_eq!(catalog.watermark(), INITIAL_LOAD);
        assert_eq!(catalog.loaded_len(), 0);
    }

    #[test]
    fn watermark_never_exceeds_the_service_maximum() {
        let mut catalog = Catalog::new();

        // 50 "load more" presses from the initial 20 would naively reach
        // 1020; the clamp holds it at 898.
        for _ in 0..50 {
            catalog.advance_watermark();
        }
        assert_eq!(catalog.watermark(), MAX_CREATURE_ID);

        // Further presses stay put.
        catalog.advance_watermark();
        assert_eq!(catalog.watermark(), MAX_CREATURE_ID);
    }

    #[test]
    fn ids_up_to_requests_only_what_is_missing() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.ids_up_to(3), vec![1, 2, 3]);

        catalog.absorb(Ok(creature(1, "bulbasaur", &["grass"])));
        catalog.absorb(Ok(creature(2, "ivysaur", &["grass"])));
        assert_eq!(catalog.ids_up_to(4), vec![3, 4]);
        assert_eq!(catalog.ids_up_to(2), Vec::<u32>::new());
    }

    #[test]
    fn a_failed_fetch_does_not_block_siblings() {
        let mut catalog = Catalog::new();

        catalog.absorb(Ok(creature(1, "bulbasaur", &["grass"])));
        catalog.absorb(Err(FetchError {
            id: 2,
            source: anyhow!("connection reset"),
        }));
        catalog.absorb(Ok(creature(3, "venusaur", &["grass", "poison"])));

        let names: Vec<_> = catalog.loaded().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["bulbasaur", "venusaur"]);
    }

    #[test]
    fn duplicate_ids_are_absorbed_as_a_no_op() {
        let mut catalog = Catalog::new();

        catalog.absorb(Ok(creature(4, "charmander", &["fire"])));
        catalog.absorb(Ok(creature(4, "charmander", &["fire"])));

        assert_eq!(catalog.loaded_len(), 1);
    }

    #[test]
    fn insertion_order_is_completion_order_not_id_order() {
        let mut catalog = Catalog::new();

        catalog.absorb(Ok(creature(7, "squirtle", &["water"])));
        catalog.absorb(Ok(creature(1, "bulbasaur", &["grass"])));

        let ids: Vec<_> = catalog.loaded().iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![7, 1]);

        // The sentinel view presents them in that same order.
        let visible: Vec<_> = catalog.visible().iter().map(|c| c.id).collect();
        assert_eq!(visible, vec![7, 1]);
    }

    #[test]
    fn sentinel_view_sees_records_loaded_after_derivation() {
        let mut catalog = Catalog::new();
        catalog.absorb(Ok(creature(1, "bulbasaur", &["grass"])));
        catalog.refresh_view("");
        assert!(catalog.view().is_sentinel());
        assert_eq!(catalog.visible_len(), 1);

        // A record arriving later is visible without any recomputation.
        catalog.absorb(Ok(creature(4, "charmander", &["fire"])));
        assert_eq!(catalog.visible_len(), 2);
    }

    #[test]
    fn materialized_view_does_not_grow_with_the_catalog() {
        let mut catalog = Catalog::new();
        catalog.absorb(Ok(creature(4, "charmander", &["fire"])));
        catalog.set_type_filter(TypeFilter::Only("fire".into()));
        catalog.refresh_view("");
        assert_eq!(catalog.visible_len(), 1);

        // Another fire type arrives; the materialized view is stale until
        // the next refresh. That staleness is what distinguishes it from
        // the sentinel.
        catalog.absorb(Ok(creature(5, "charmeleon", &["fire"])));
        assert_eq!(catalog.visible_len(), 1);

        catalog.refresh_view("");
        assert_eq!(catalog.visible_len(), 2);
    }

    #[test]
    fn search_scenarios_from_the_browser() {
        let mut catalog = Catalog::new();
        catalog.absorb(Ok(creature(1, "bulbasaur", &["grass", "poison"])));
        catalog.absorb(Ok(creature(4, "charmander", &["fire"])));

        catalog.refresh_view("char");
        let names: Vec<_> = catalog.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["charmander"]);

        catalog.set_type_filter(TypeFilter::Only("fire".into()));
        catalog.refresh_view("");
        let names: Vec<_> = catalog.visible().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["charmander"]);

        catalog.set_type_filter(TypeFilter::Only("grass".into()));
        catalog.refresh_view("9");
        assert_eq!(catalog.visible_len(), 0);
        assert!(!catalog.view().is_sentinel());
    }
}
