use std::collections::HashMap;

use serde::Serialize;

use crate::{
    error::{AppError, AppResult, EntityKind},
    snapshot::Snapshot,
};

/// Playtime accumulated by one user in one year
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearPlaytime {
    pub year: String,
    pub playtime_forever: u64,
}

/// The user with the most playtime for a genre, with their per-year breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenreLeader {
    pub user_id: String,
    pub playtime_by_year: Vec<YearPlaytime>,
}

/// Finds the user with the highest summed playtime for a genre and breaks
/// their playtime down per year, ascending.
///
/// Ties on total playtime break to the smaller user id.
pub fn top_user_for_genre(snapshot: &Snapshot, genre: &str) -> AppResult<GenreLeader> {
    let rows = snapshot
        .user_playtime_rows(genre)
        .ok_or_else(|| AppError::not_found(EntityKind::Genre, genre))?;

    let mut totals: HashMap<&str, u64> = HashMap::new();
    for row in &rows {
        *totals.entry(row.user_id.as_str()).or_default() += row.playtime_forever;
    }

    let leader = totals
        .iter()
        .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(&user_id, _)| user_id)
        .ok_or_else(|| AppError::not_found(EntityKind::Genre, genre))?;

    let mut by_year: HashMap<&str, u64> = HashMap::new();
    for row in rows.iter().filter(|r| r.user_id == leader) {
        *by_year.entry(row.year.as_str()).or_default() += row.playtime_forever;
    }

    let mut playtime_by_year: Vec<YearPlaytime> = by_year
        .into_iter()
        .map(|(year, playtime_forever)| YearPlaytime {
            year: year.to_string(),
            playtime_forever,
        })
        .collect();
    playtime_by_year.sort_by(|a, b| a.year.cmp(&b.year));

    Ok(GenreLeader {
        user_id: leader.to_string(),
        playtime_by_year,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::UserPlaytimeRow;
    use crate::snapshot::SnapshotTables;

    fn row(user: &str, genre: &str, year: &str, playtime: u64) -> UserPlaytimeRow {
        UserPlaytimeRow {
            user_id: user.to_string(),
            item_id: "0".to_string(),
            genres: vec![genre.to_string()],
            year: year.to_string(),
            playtime_forever: playtime,
        }
    }

    fn fixture() -> Snapshot {
        Snapshot::build(SnapshotTables {
            user_playtime: vec![
                row("alice", "Indie", "2015", 100),
                row("alice", "Indie", "2016", 50),
                row("bob", "Indie", "2015", 120),
                row("bob", "Action", "2015", 900),
            ],
            ..Default::default()
        })
    }

    #[test]
    fn sums_across_years_before_picking_the_leader() {
        // alice: 150 total for Indie, bob: 120
        let leader = top_user_for_genre(&fixture(), "Indie").unwrap();
        assert_eq!(leader.user_id, "alice");
        assert_eq!(
            leader.playtime_by_year,
            vec![
                YearPlaytime {
                    year: "2015".to_string(),
                    playtime_forever: 100
                },
                YearPlaytime {
                    year: "2016".to_string(),
                    playtime_forever: 50
                },
            ]
        );
    }

    #[test]
    fn breakdown_only_covers_the_queried_genre() {
        let leader = top_user_for_genre(&fixture(), "Action").unwrap();
        assert_eq!(leader.user_id, "bob");
        let total: u64 = leader
            .playtime_by_year
            .iter()
            .map(|y| y.playtime_forever)
            .sum();
        assert_eq!(total, 900);
    }

    #[test]
    fn total_ties_break_to_the_smaller_user_id() {
        let snapshot = Snapshot::build(SnapshotTables {
            user_playtime: vec![
                row("zoe", "Indie", "2015", 80),
                row("ann", "Indie", "2016", 80),
            ],
            ..Default::default()
        });

        let leader = top_user_for_genre(&snapshot, "Indie").unwrap();
        assert_eq!(leader.user_id, "ann");
    }

    #[test]
    fn unknown_genre_is_not_found() {
        let err = top_user_for_genre(&fixture(), "Sports").unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound {
                kind: EntityKind::Genre,
                ..
            }
        ));
    }
}
