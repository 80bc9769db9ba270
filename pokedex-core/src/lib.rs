//! Core library for pokedex: fetch creature records from the external
//! service, hold them in an in-memory catalog and derive filtered views.

pub mod api;
pub mod catalog;
pub mod error;

pub use api::{ApiClient, Creature, DEFAULT_BASE_URL, MAX_CREATURE_ID};
pub use catalog::{Catalog, TypeFilter, ViewSelection};
pub use error::FetchError;
