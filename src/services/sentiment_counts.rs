use serde::Serialize;

use crate::{
    error::{AppError, AppResult, EntityKind},
    snapshot::Snapshot,
};

/// Review counts per sentiment category for one year.
/// Always carries all three categories; absent ones are zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct SentimentBreakdown {
    pub negative: u64,
    pub neutral: u64,
    pub positive: u64,
}

/// Tallies reviews of the given year per sentiment category.
///
/// A year that exists in the snapshot but has no reviews yields an all-zero
/// breakdown; a year absent from the snapshot entirely is a not-found
/// condition. The two cases are deliberately distinct.
pub fn sentiment_counts(snapshot: &Snapshot, year: &str) -> AppResult<SentimentBreakdown> {
    if !snapshot.year_known(year) {
        return Err(AppError::not_found(EntityKind::Year, year));
    }

    let [negative, neutral, positive] = snapshot.sentiment_tally(year).unwrap_or_default();
    Ok(SentimentBreakdown {
        negative,
        neutral,
        positive,
    })
}
