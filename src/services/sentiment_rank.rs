use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;

use crate::{
    config::RankingStrategy,
    error::{AppError, AppResult, EntityKind},
    models::Sentiment,
    snapshot::Snapshot,
};

/// Default number of entries returned by the ranking endpoints
pub const DEFAULT_RANKING_LIMIT: usize = 3;

/// One entry of a ranked result, rank starting at 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    pub name: String,
}

/// Ranks games of a year by audience sentiment.
///
/// Two implementations exist and must agree on equivalent snapshots:
/// [`PrecomputedRanker`] slices the rankings the offline pipeline already
/// aggregated, [`LiveRanker`] joins raw reviews to games per request.
pub trait SentimentRanking: Send + Sync {
    /// Best-received games of the year: recommended reviews with neutral or
    /// positive sentiment, ranked by summed sentiment.
    fn top_games(&self, snapshot: &Snapshot, year: &str, limit: usize)
        -> AppResult<Vec<RankedEntry>>;

    /// Worst-received games of the year: not-recommended reviews with
    /// negative sentiment, ranked by review count.
    fn bottom_games(
        &self,
        snapshot: &Snapshot,
        year: &str,
        limit: usize,
    ) -> AppResult<Vec<RankedEntry>>;
}

/// Builds the ranker selected by configuration.
pub fn make_ranker(strategy: RankingStrategy) -> Arc<dyn SentimentRanking> {
    match strategy {
        RankingStrategy::Precomputed => Arc::new(PrecomputedRanker),
        RankingStrategy::Live => Arc::new(LiveRanker),
    }
}

fn ensure_year_known(snapshot: &Snapshot, year: &str) -> AppResult<()> {
    if snapshot.year_known(year) {
        Ok(())
    } else {
        Err(AppError::not_found(EntityKind::Year, year))
    }
}

/// Sorts descending by score, ties breaking to the smaller game name, and
/// labels the first `limit` entries with their rank. Fewer than `limit`
/// qualifying games is a valid short result.
fn rank_descending<S: Ord>(mut scored: Vec<(String, S)>, limit: usize) -> Vec<RankedEntry> {
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    scored
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, (name, _))| RankedEntry { rank: i + 1, name })
        .collect()
}

/// Ranking over the tables the offline pipeline precomputed per year.
pub struct PrecomputedRanker;

impl SentimentRanking for PrecomputedRanker {
    fn top_games(
        &self,
        snapshot: &Snapshot,
        year: &str,
        limit: usize,
    ) -> AppResult<Vec<RankedEntry>> {
        ensure_year_known(snapshot, year)?;
        let scored = snapshot
            .top_rankings_for_year(year)
            .into_iter()
            .map(|row| (row.app_name.clone(), row.sentiment_total))
            .collect();
        Ok(rank_descending(scored, limit))
    }

    fn bottom_games(
        &self,
        snapshot: &Snapshot,
        year: &str,
        limit: usize,
    ) -> AppResult<Vec<RankedEntry>> {
        ensure_year_known(snapshot, year)?;
        let scored = snapshot
            .bottom_rankings_for_year(year)
            .into_iter()
            .map(|row| (row.app_name.clone(), row.negative_count))
            .collect();
        Ok(rank_descending(scored, limit))
    }
}

/// Ranking computed per request by joining reviews to game metadata on
/// `item_id` and deriving the year from the game's release date.
pub struct LiveRanker;

impl SentimentRanking for LiveRanker {
    fn top_games(
        &self,
        snapshot: &Snapshot,
        year: &str,
        limit: usize,
    ) -> AppResult<Vec<RankedEntry>> {
        ensure_year_known(snapshot, year)?;

        let mut totals: HashMap<&str, i64> = HashMap::new();
        for review in snapshot.reviews() {
            if !review.recommend || review.sentiment_analysis == Sentiment::Negative {
                continue;
            }
            let Some(game) = snapshot.game_identity(&review.item_id) else {
                continue;
            };
            if game.release_year == year {
                *totals.entry(game.app_name.as_str()).or_default() +=
                    i64::from(u8::from(review.sentiment_analysis));
            }
        }

        let scored = totals
            .into_iter()
            .map(|(name, total)| (name.to_string(), total))
            .collect();
        Ok(rank_descending(scored, limit))
    }

    fn bottom_games(
        &self,
        snapshot: &Snapshot,
        year: &str,
        limit: usize,
    ) -> AppResult<Vec<RankedEntry>> {
        ensure_year_known(snapshot, year)?;

        let mut counts: HashMap<&str, u64> = HashMap::new();
        for review in snapshot.reviews() {
            if review.recommend || review.sentiment_analysis != Sentiment::Negative {
                continue;
            }
            let Some(game) = snapshot.game_identity(&review.item_id) else {
                continue;
            };
            if game.release_year == year {
                *counts.entry(game.app_name.as_str()).or_default() += 1;
            }
        }

        let scored = counts
            .into_iter()
            .map(|(name, count)| (name.to_string(), count))
            .collect();
        Ok(rank_descending(scored, limit))
    }
}
