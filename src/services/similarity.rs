use crate::{
    error::{AppError, AppResult, EntityKind},
    snapshot::Snapshot,
};

/// Default number of recommendations returned by the similarity endpoint
pub const DEFAULT_SIMILAR_COUNT: usize = 5;

/// Returns the names of the `count` games most similar to `game`, best first.
///
/// The game itself is excluded before ranking. Scores are internal ranking
/// input only and never exposed. Ties on score break to the smaller game
/// name.
pub fn similar_games(snapshot: &Snapshot, game: &str, count: usize) -> AppResult<Vec<String>> {
    let row = snapshot
        .similarity_row(game)
        .ok_or_else(|| AppError::not_found(EntityKind::Game, game))?;

    let mut neighbors: Vec<(&str, f64)> = row
        .scores
        .iter()
        .filter(|entry| entry.app_name != game)
        .map(|entry| (entry.app_name.as_str(), entry.score))
        .collect();

    neighbors.sort_by(|a, b| {
        b.1.partial_cmp(&a.1)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.cmp(b.0))
    });

    Ok(neighbors
        .into_iter()
        .take(count)
        .map(|(name, _)| name.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SimilarityEntry, SimilarityRow};
    use crate::snapshot::SnapshotTables;

    fn entry(name: &str, score: f64) -> SimilarityEntry {
        SimilarityEntry {
            app_name: name.to_string(),
            score,
        }
    }

    fn fixture() -> Snapshot {
        Snapshot::build(SnapshotTables {
            similarity: vec![SimilarityRow {
                app_name: "Half-Life".to_string(),
                scores: vec![
                    entry("Half-Life", 1.0),
                    entry("Half-Life 2", 0.97),
                    entry("Black Mesa", 0.95),
                    entry("Portal", 0.81),
                    entry("Quake", 0.74),
                    entry("Doom", 0.74),
                    entry("Stardew Valley", 0.05),
                ],
            }],
            ..Default::default()
        })
    }

    #[test]
    fn returns_top_neighbors_without_the_game_itself() {
        let similar = similar_games(&fixture(), "Half-Life", 5).unwrap();
        assert_eq!(
            similar,
            vec!["Half-Life 2", "Black Mesa", "Portal", "Doom", "Quake"]
        );
        assert!(!similar.contains(&"Half-Life".to_string()));
    }

    #[test]
    fn score_ties_break_to_the_smaller_name() {
        // Doom and Quake are tied at 0.74
        let similar = similar_games(&fixture(), "Half-Life", 5).unwrap();
        let doom = similar.iter().position(|n| n == "Doom").unwrap();
        let quake = similar.iter().position(|n| n == "Quake").unwrap();
        assert!(doom < quake);
    }

    #[test]
    fn short_rows_yield_short_results() {
        let snapshot = Snapshot::build(SnapshotTables {
            similarity: vec![SimilarityRow {
                app_name: "Factorio".to_string(),
                scores: vec![entry("Factorio", 1.0), entry("Satisfactory", 0.9)],
            }],
            ..Default::default()
        });

        assert_eq!(
            similar_games(&snapshot, "Factorio", 5).unwrap(),
            vec!["Satisfactory"]
        );
    }

    #[test]
    fn unknown_game_is_not_found_rather_than_empty() {
        let err = similar_games(&fixture(), "Portal", 5).unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound {
                kind: EntityKind::Game,
                ..
            }
        ));
    }
}
