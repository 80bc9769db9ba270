use thiserror::Error;

/// The single failure mode of the data source: one creature fetch failed.
///
/// Covers connect errors, non-2xx statuses and undecodable bodies alike.
/// Callers log it and move on; there is no retry and no aggregation.
#[derive(Debug, Error)]
#[error("fetch for creature {id} failed")]
pub struct FetchError {
    /// Identifier that was requested.
    pub id: u32,
    #[source]
    pub source: anyhow::Error,
}
