use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Review sentiment category produced by the offline sentiment model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Sentiment {
    Negative,
    Neutral,
    Positive,
}

impl TryFrom<u8> for Sentiment {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Sentiment::Negative),
            1 => Ok(Sentiment::Neutral),
            2 => Ok(Sentiment::Positive),
            other => Err(format!("invalid sentiment category: {}", other)),
        }
    }
}

impl From<Sentiment> for u8 {
    fn from(sentiment: Sentiment) -> Self {
        match sentiment {
            Sentiment::Negative => 0,
            Sentiment::Neutral => 1,
            Sentiment::Positive => 2,
        }
    }
}

impl Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Sentiment::Negative => write!(f, "Negative"),
            Sentiment::Neutral => write!(f, "Neutral"),
            Sentiment::Positive => write!(f, "Positive"),
        }
    }
}

/// A game from the metadata table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: String,
    pub app_name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    /// Raw release-date string from the snapshot; may be absent or unparseable
    #[serde(default)]
    pub release_date: Option<String>,
}

impl Game {
    /// Release year as a string, derived from the release date.
    /// Unparseable dates yield `None` and the game is excluded from
    /// year-based joins.
    pub fn release_year(&self) -> Option<String> {
        let date = self.release_date.as_deref()?;
        NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .ok()
            .map(|d| d.format("%Y").to_string())
    }
}

/// One row of the per-genre playtime table (aggregated upstream)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenrePlaytimeRow {
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub playtime_forever: Option<u64>,
}

/// One row of the user/genre/year playtime table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserPlaytimeRow {
    pub user_id: String,
    pub item_id: String,
    #[serde(default)]
    pub genres: Vec<String>,
    pub year: String,
    pub playtime_forever: u64,
}

/// One user review, joined to a game via `item_id`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub item_id: String,
    pub recommend: bool,
    pub sentiment_analysis: Sentiment,
}

/// Precomputed per-year ranking row for the recommended view.
/// `sentiment_total` is the sum of sentiment categories over qualifying
/// recommended reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopRankingRow {
    pub year: String,
    pub app_name: String,
    pub sentiment_total: i64,
}

/// Precomputed per-year ranking row for the not-recommended view.
/// `negative_count` is the number of negative not-recommended reviews.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BottomRankingRow {
    pub year: String,
    pub app_name: String,
    pub negative_count: u64,
}

/// Precomputed per-year, per-category review tally
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SentimentCountRow {
    pub year: String,
    pub sentiment_analysis: Sentiment,
    pub count: u64,
}

/// Similarity score between the owning row's game and one other game
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityEntry {
    pub app_name: String,
    pub score: f64,
}

/// One game's row of the precomputed game-to-game similarity matrix
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarityRow {
    pub app_name: String,
    pub scores: Vec<SimilarityEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_round_trips_through_u8() {
        for value in 0u8..=2 {
            let sentiment = Sentiment::try_from(value).unwrap();
            assert_eq!(u8::from(sentiment), value);
        }
        assert!(Sentiment::try_from(3).is_err());
    }

    #[test]
    fn release_year_is_derived_from_valid_dates_only() {
        let mut game = Game {
            id: "10".to_string(),
            app_name: "Counter-Strike".to_string(),
            genres: vec!["Action".to_string()],
            release_date: Some("2000-11-01".to_string()),
        };
        assert_eq!(game.release_year().as_deref(), Some("2000"));

        game.release_date = Some("Soon".to_string());
        assert_eq!(game.release_year(), None);

        game.release_date = None;
        assert_eq!(game.release_year(), None);
    }
}
