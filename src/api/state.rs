use std::sync::Arc;

use crate::config::RankingStrategy;
use crate::services::{make_ranker, SentimentRanking};
use crate::snapshot::Snapshot;

/// Shared application state.
///
/// The snapshot is immutable for the process lifetime, so handlers share it
/// through a plain `Arc` with no locking. A future snapshot refresh would
/// swap the whole `Arc`, never mutate in place.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
    pub ranker: Arc<dyn SentimentRanking>,
}

impl AppState {
    /// Wraps a fully built snapshot and the configured ranking strategy.
    pub fn new(snapshot: Snapshot, strategy: RankingStrategy) -> Self {
        Self {
            snapshot: Arc::new(snapshot),
            ranker: make_ranker(strategy),
        }
    }
}
