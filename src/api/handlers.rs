use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::services::genre_year;
use crate::services::sentiment_counts::{self, SentimentBreakdown};
use crate::services::sentiment_rank::{RankedEntry, DEFAULT_RANKING_LIMIT};
use crate::services::similarity::{self, DEFAULT_SIMILAR_COUNT};
use crate::services::user_genre::{self, YearPlaytime};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct RankingQuery {
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_RANKING_LIMIT
}

#[derive(Debug, Deserialize)]
pub struct SimilarQuery {
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    DEFAULT_SIMILAR_COUNT
}

#[derive(Debug, Serialize)]
pub struct PeakYearResponse {
    pub genre: String,
    pub peak_year: String,
}

#[derive(Debug, Serialize)]
pub struct TopUserResponse {
    pub genre: String,
    pub user_id: String,
    pub playtime_by_year: Vec<YearPlaytime>,
}

#[derive(Debug, Serialize)]
pub struct SimilarGamesResponse {
    pub game: String,
    pub similar: Vec<String>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Year with the most hours played for a genre
pub async fn peak_year_for_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<PeakYearResponse>> {
    let peak_year = genre_year::peak_year_for_genre(&state.snapshot, &genre)?;
    Ok(Json(PeakYearResponse { genre, peak_year }))
}

/// User with the most hours played for a genre, broken down per year
pub async fn top_user_for_genre(
    State(state): State<AppState>,
    Path(genre): Path<String>,
) -> AppResult<Json<TopUserResponse>> {
    let leader = user_genre::top_user_for_genre(&state.snapshot, &genre)?;
    Ok(Json(TopUserResponse {
        genre,
        user_id: leader.user_id,
        playtime_by_year: leader.playtime_by_year,
    }))
}

/// Best-received games of a year by audience sentiment
pub async fn top_games(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(query): Query<RankingQuery>,
) -> AppResult<Json<Vec<RankedEntry>>> {
    let ranked = state.ranker.top_games(&state.snapshot, &year, query.limit)?;
    Ok(Json(ranked))
}

/// Worst-received games of a year by negative review count
pub async fn bottom_games(
    State(state): State<AppState>,
    Path(year): Path<String>,
    Query(query): Query<RankingQuery>,
) -> AppResult<Json<Vec<RankedEntry>>> {
    let ranked = state
        .ranker
        .bottom_games(&state.snapshot, &year, query.limit)?;
    Ok(Json(ranked))
}

/// Review counts per sentiment category for a year
pub async fn sentiment_counts(
    State(state): State<AppState>,
    Path(year): Path<String>,
) -> AppResult<Json<SentimentBreakdown>> {
    let breakdown = sentiment_counts::sentiment_counts(&state.snapshot, &year)?;
    Ok(Json(breakdown))
}

/// Games most similar to the given game
pub async fn similar_games(
    State(state): State<AppState>,
    Path(game): Path<String>,
    Query(query): Query<SimilarQuery>,
) -> AppResult<Json<SimilarGamesResponse>> {
    let similar = similarity::similar_games(&state.snapshot, &game, query.count)?;
    Ok(Json(SimilarGamesResponse { game, similar }))
}
