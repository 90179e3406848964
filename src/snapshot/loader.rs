use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use serde::de::DeserializeOwned;
use tracing::info;

use super::store::{Snapshot, SnapshotTables};

pub const GAMES_FILE: &str = "games.json";
pub const GENRE_PLAYTIME_FILE: &str = "genre_playtime.json";
pub const USER_PLAYTIME_FILE: &str = "user_playtime.json";
pub const REVIEWS_FILE: &str = "reviews.json";
pub const TOP_RANKINGS_FILE: &str = "top_rankings.json";
pub const BOTTOM_RANKINGS_FILE: &str = "bottom_rankings.json";
pub const SENTIMENT_COUNTS_FILE: &str = "sentiment_counts.json";
pub const SIMILARITY_FILE: &str = "similarity.json";

/// Loads every snapshot table from `dir` and builds the indexed store.
///
/// This is the only place on-disk data is parsed. Any missing or malformed
/// table is fatal: the process must not serve queries against a partial
/// snapshot.
pub fn load_snapshot(dir: &Path) -> anyhow::Result<Snapshot> {
    let tables = SnapshotTables {
        games: read_table(dir, GAMES_FILE)?,
        genre_playtime: read_table(dir, GENRE_PLAYTIME_FILE)?,
        user_playtime: read_table(dir, USER_PLAYTIME_FILE)?,
        reviews: read_table(dir, REVIEWS_FILE)?,
        top_rankings: read_table(dir, TOP_RANKINGS_FILE)?,
        bottom_rankings: read_table(dir, BOTTOM_RANKINGS_FILE)?,
        sentiment_counts: read_table(dir, SENTIMENT_COUNTS_FILE)?,
        similarity: read_table(dir, SIMILARITY_FILE)?,
    };

    info!(
        games = tables.games.len(),
        reviews = tables.reviews.len(),
        user_playtime_rows = tables.user_playtime.len(),
        similarity_rows = tables.similarity.len(),
        "snapshot tables loaded"
    );

    Ok(Snapshot::build(tables))
}

fn read_table<T: DeserializeOwned>(dir: &Path, name: &str) -> anyhow::Result<Vec<T>> {
    let path = dir.join(name);
    let file =
        File::open(&path).with_context(|| format!("missing snapshot table {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("malformed snapshot table {}", path.display()))
}
