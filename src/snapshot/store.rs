use std::collections::{HashMap, HashSet};

use crate::models::{
    BottomRankingRow, Game, GenrePlaytimeRow, Review, SentimentCountRow, SimilarityRow,
    TopRankingRow, UserPlaytimeRow,
};

/// The raw snapshot tables as produced by the offline pipeline,
/// fully parsed but not yet indexed.
#[derive(Debug, Default)]
pub struct SnapshotTables {
    pub games: Vec<Game>,
    pub genre_playtime: Vec<GenrePlaytimeRow>,
    pub user_playtime: Vec<UserPlaytimeRow>,
    pub reviews: Vec<Review>,
    pub top_rankings: Vec<TopRankingRow>,
    pub bottom_rankings: Vec<BottomRankingRow>,
    pub sentiment_counts: Vec<SentimentCountRow>,
    pub similarity: Vec<SimilarityRow>,
}

/// Identity of a game a review joins to: display name and release year.
#[derive(Debug, Clone)]
pub struct GameIdentity {
    pub app_name: String,
    pub release_year: String,
}

/// The immutable in-memory dataset store.
///
/// Built exactly once at startup from [`SnapshotTables`] and never mutated
/// afterwards, so it is shared across request handlers behind a plain `Arc`
/// with no locking. Genre, year, and game lookups go through hash indices
/// computed here instead of re-scanning tables per request.
#[derive(Debug)]
pub struct Snapshot {
    genre_playtime: Vec<GenrePlaytimeRow>,
    user_playtime: Vec<UserPlaytimeRow>,
    reviews: Vec<Review>,
    top_rankings: Vec<TopRankingRow>,
    bottom_rankings: Vec<BottomRankingRow>,
    similarity: Vec<SimilarityRow>,

    /// genre token -> rows of the per-genre playtime table
    genre_playtime_index: HashMap<String, Vec<usize>>,
    /// genre token -> rows of the user playtime table
    user_playtime_index: HashMap<String, Vec<usize>>,
    /// year -> rows of the precomputed recommended ranking
    top_rankings_index: HashMap<String, Vec<usize>>,
    /// year -> rows of the precomputed not-recommended ranking
    bottom_rankings_index: HashMap<String, Vec<usize>>,
    /// year -> review tally indexed by sentiment category
    sentiment_tallies: HashMap<String, [u64; 3]>,
    /// game name -> its similarity row
    similarity_index: HashMap<String, usize>,
    /// item id -> name and release year, for review joins;
    /// games without a parseable release date are absent
    game_identities: HashMap<String, GameIdentity>,
    /// every year mentioned anywhere in the snapshot
    known_years: HashSet<String>,
}

impl Snapshot {
    /// Builds the store and all of its indices. Pure and infallible: schema
    /// conformance is the loader's responsibility.
    pub fn build(tables: SnapshotTables) -> Self {
        let mut genre_playtime_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut user_playtime_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut top_rankings_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut bottom_rankings_index: HashMap<String, Vec<usize>> = HashMap::new();
        let mut sentiment_tallies: HashMap<String, [u64; 3]> = HashMap::new();
        let mut similarity_index: HashMap<String, usize> = HashMap::new();
        let mut game_identities: HashMap<String, GameIdentity> = HashMap::new();
        let mut known_years: HashSet<String> = HashSet::new();

        for (i, row) in tables.genre_playtime.iter().enumerate() {
            for token in &row.genres {
                genre_playtime_index
                    .entry(token.clone())
                    .or_default()
                    .push(i);
            }
            if let Some(year) = &row.year {
                known_years.insert(year.clone());
            }
        }

        for (i, row) in tables.user_playtime.iter().enumerate() {
            for token in &row.genres {
                user_playtime_index
                    .entry(token.clone())
                    .or_default()
                    .push(i);
            }
            known_years.insert(row.year.clone());
        }

        for (i, row) in tables.top_rankings.iter().enumerate() {
            top_rankings_index
                .entry(row.year.clone())
                .or_default()
                .push(i);
            known_years.insert(row.year.clone());
        }

        for (i, row) in tables.bottom_rankings.iter().enumerate() {
            bottom_rankings_index
                .entry(row.year.clone())
                .or_default()
                .push(i);
            known_years.insert(row.year.clone());
        }

        for row in &tables.sentiment_counts {
            let tally = sentiment_tallies.entry(row.year.clone()).or_default();
            tally[u8::from(row.sentiment_analysis) as usize] += row.count;
            known_years.insert(row.year.clone());
        }

        for (i, row) in tables.similarity.iter().enumerate() {
            similarity_index.insert(row.app_name.clone(), i);
        }

        for game in &tables.games {
            if let Some(year) = game.release_year() {
                known_years.insert(year.clone());
                game_identities.insert(
                    game.id.clone(),
                    GameIdentity {
                        app_name: game.app_name.clone(),
                        release_year: year,
                    },
                );
            }
        }

        Self {
            genre_playtime: tables.genre_playtime,
            user_playtime: tables.user_playtime,
            reviews: tables.reviews,
            top_rankings: tables.top_rankings,
            bottom_rankings: tables.bottom_rankings,
            similarity: tables.similarity,
            genre_playtime_index,
            user_playtime_index,
            top_rankings_index,
            bottom_rankings_index,
            sentiment_tallies,
            similarity_index,
            game_identities,
            known_years,
        }
    }

    /// Rows of the per-genre playtime table whose genre set contains the
    /// token. `None` means the genre appears nowhere in the table.
    pub fn genre_playtime_rows(&self, genre: &str) -> Option<Vec<&GenrePlaytimeRow>> {
        self.genre_playtime_index
            .get(genre)
            .map(|rows| rows.iter().map(|&i| &self.genre_playtime[i]).collect())
    }

    /// Rows of the user playtime table whose genre set contains the token.
    pub fn user_playtime_rows(&self, genre: &str) -> Option<Vec<&UserPlaytimeRow>> {
        self.user_playtime_index
            .get(genre)
            .map(|rows| rows.iter().map(|&i| &self.user_playtime[i]).collect())
    }

    /// Whether the year appears anywhere in the snapshot. Gates the
    /// year-keyed queries: an unknown year is a not-found condition, a known
    /// year with no matching rows is a valid empty result.
    pub fn year_known(&self, year: &str) -> bool {
        self.known_years.contains(year)
    }

    /// Precomputed recommended-ranking rows for a year, unranked order.
    pub fn top_rankings_for_year(&self, year: &str) -> Vec<&TopRankingRow> {
        self.top_rankings_index
            .get(year)
            .map(|rows| rows.iter().map(|&i| &self.top_rankings[i]).collect())
            .unwrap_or_default()
    }

    /// Precomputed not-recommended-ranking rows for a year, unranked order.
    pub fn bottom_rankings_for_year(&self, year: &str) -> Vec<&BottomRankingRow> {
        self.bottom_rankings_index
            .get(year)
            .map(|rows| rows.iter().map(|&i| &self.bottom_rankings[i]).collect())
            .unwrap_or_default()
    }

    /// Per-category review tally for a year, `[negative, neutral, positive]`.
    pub fn sentiment_tally(&self, year: &str) -> Option<[u64; 3]> {
        self.sentiment_tallies.get(year).copied()
    }

    /// All review rows, for the on-the-fly ranking strategy.
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    /// Name and release year of the game a review's `item_id` joins to.
    pub fn game_identity(&self, item_id: &str) -> Option<&GameIdentity> {
        self.game_identities.get(item_id)
    }

    /// Similarity row keyed by exact game name.
    pub fn similarity_row(&self, game: &str) -> Option<&SimilarityRow> {
        self.similarity_index
            .get(game)
            .map(|&i| &self.similarity[i])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Sentiment;

    #[test]
    fn genre_index_matches_tokens_not_substrings() {
        let tables = SnapshotTables {
            genre_playtime: vec![GenrePlaytimeRow {
                genres: vec!["RPG Maker".to_string()],
                year: Some("2016".to_string()),
                playtime_forever: Some(40),
            }],
            ..Default::default()
        };
        let snapshot = Snapshot::build(tables);

        assert!(snapshot.genre_playtime_rows("RPG Maker").is_some());
        assert!(snapshot.genre_playtime_rows("RPG").is_none());
        assert!(snapshot.genre_playtime_rows("rpg maker").is_none());
    }

    #[test]
    fn known_years_cover_every_table() {
        let tables = SnapshotTables {
            games: vec![Game {
                id: "1".to_string(),
                app_name: "Portal".to_string(),
                genres: vec![],
                release_date: Some("2007-10-10".to_string()),
            }],
            sentiment_counts: vec![SentimentCountRow {
                year: "2013".to_string(),
                sentiment_analysis: Sentiment::Positive,
                count: 4,
            }],
            top_rankings: vec![TopRankingRow {
                year: "2015".to_string(),
                app_name: "Rocket League".to_string(),
                sentiment_total: 12,
            }],
            ..Default::default()
        };
        let snapshot = Snapshot::build(tables);

        for year in ["2007", "2013", "2015"] {
            assert!(snapshot.year_known(year), "{year} should be known");
        }
        assert!(!snapshot.year_known("1999"));
    }

    #[test]
    fn sentiment_tallies_accumulate_per_category() {
        let tables = SnapshotTables {
            sentiment_counts: vec![
                SentimentCountRow {
                    year: "2014".to_string(),
                    sentiment_analysis: Sentiment::Negative,
                    count: 2,
                },
                SentimentCountRow {
                    year: "2014".to_string(),
                    sentiment_analysis: Sentiment::Positive,
                    count: 7,
                },
            ],
            ..Default::default()
        };
        let snapshot = Snapshot::build(tables);

        assert_eq!(snapshot.sentiment_tally("2014"), Some([2, 0, 7]));
        assert_eq!(snapshot.sentiment_tally("2015"), None);
    }
}
