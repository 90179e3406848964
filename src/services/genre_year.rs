use crate::{
    error::{AppError, AppResult, EntityKind},
    snapshot::Snapshot,
};

/// Returns the year with the most playtime for a genre.
///
/// Rows missing a year or a playtime value are excluded from the ranking.
/// Ties on playtime break to the smaller year string.
pub fn peak_year_for_genre(snapshot: &Snapshot, genre: &str) -> AppResult<String> {
    let rows = snapshot
        .genre_playtime_rows(genre)
        .ok_or_else(|| AppError::not_found(EntityKind::Genre, genre))?;

    let peak = rows
        .iter()
        .filter_map(|row| match (&row.year, row.playtime_forever) {
            (Some(year), Some(playtime)) => Some((year, playtime)),
            _ => None,
        })
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)));

    match peak {
        Some((year, _)) => Ok(year.clone()),
        None => Err(AppError::NoData(format!(
            "genre {} has no rows with both a year and a playtime value",
            genre
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::GenrePlaytimeRow;
    use crate::snapshot::SnapshotTables;

    fn row(genre: &str, year: Option<&str>, playtime: Option<u64>) -> GenrePlaytimeRow {
        GenrePlaytimeRow {
            genres: vec![genre.to_string()],
            year: year.map(str::to_string),
            playtime_forever: playtime,
        }
    }

    #[test]
    fn picks_the_year_with_maximum_playtime() {
        let snapshot = Snapshot::build(SnapshotTables {
            genre_playtime: vec![
                row("Indie", Some("2015"), Some(90)),
                row("Indie", Some("2017"), Some(120)),
                row("Action", Some("2012"), Some(400)),
            ],
            ..Default::default()
        });

        assert_eq!(peak_year_for_genre(&snapshot, "Indie").unwrap(), "2017");
        assert_eq!(peak_year_for_genre(&snapshot, "Action").unwrap(), "2012");
    }

    #[test]
    fn playtime_ties_break_to_the_earlier_year() {
        let snapshot = Snapshot::build(SnapshotTables {
            genre_playtime: vec![
                row("Indie", Some("2016"), Some(120)),
                row("Indie", Some("2014"), Some(120)),
            ],
            ..Default::default()
        });

        assert_eq!(peak_year_for_genre(&snapshot, "Indie").unwrap(), "2014");
    }

    #[test]
    fn unknown_genre_is_not_found() {
        let snapshot = Snapshot::build(SnapshotTables::default());
        let err = peak_year_for_genre(&snapshot, "Indie").unwrap_err();
        assert!(matches!(
            err,
            AppError::NotFound {
                kind: EntityKind::Genre,
                ..
            }
        ));
    }

    #[test]
    fn genre_with_no_usable_rows_is_a_no_data_condition() {
        let snapshot = Snapshot::build(SnapshotTables {
            genre_playtime: vec![
                row("Indie", Some("2015"), None),
                row("Indie", None, Some(50)),
            ],
            ..Default::default()
        });

        let err = peak_year_for_genre(&snapshot, "Indie").unwrap_err();
        assert!(matches!(err, AppError::NoData(_)));
    }
}
