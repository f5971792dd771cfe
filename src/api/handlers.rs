use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Extension, Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::middleware::request_id::RequestId;
use crate::models::{EpisodeView, Show, ShowId, SortedGroups};
use crate::services::grouping::top_rated_show;

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize, Default)]
pub struct BrowseQuery {
    /// Free-text show name filter
    #[serde(default)]
    pub q: Option<String>,
    /// Comma-separated genre labels to show
    #[serde(default)]
    pub genres: Option<String>,
}

impl BrowseQuery {
    fn selected_genres(&self) -> Option<Vec<String>> {
        let genres: Vec<String> = self
            .genres
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|g| !g.is_empty())
            .map(str::to_string)
            .collect();
        (!genres.is_empty()).then_some(genres)
    }
}

#[derive(Debug, Serialize)]
pub struct RefreshResponse {
    pub shows: usize,
    pub genres: usize,
}

#[derive(Debug, Serialize)]
pub struct RecommendedResponse {
    pub shows: Vec<Show>,
    pub top_pick: Option<Show>,
}

#[derive(Debug, Deserialize)]
pub struct AddToWatchListRequest {
    pub show_id: ShowId,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Loaded catalog, fetched on first use
pub async fn list_shows(State(state): State<AppState>) -> AppResult<Json<Vec<Show>>> {
    state.ensure_catalog().await?;
    Ok(Json(state.shows().await))
}

/// Reload the full show index from the catalog
pub async fn refresh_shows(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<RefreshResponse>> {
    let shows = state.fetch_shows().await?;
    let genres = state.genres().await.len();

    tracing::info!(request_id = %request_id, shows, genres, "Catalog refreshed");

    Ok(Json(RefreshResponse { shows, genres }))
}

/// Genre labels of the loaded catalog
pub async fn list_genres(State(state): State<AppState>) -> AppResult<Json<Vec<String>>> {
    state.ensure_catalog().await?;
    Ok(Json(state.genres().await))
}

/// Shows grouped by genre, led by the Recommended bucket
pub async fn browse(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<BrowseQuery>,
) -> AppResult<Json<SortedGroups>> {
    let query = params.q.as_deref().unwrap_or_default();
    let genres = params.selected_genres();

    tracing::info!(
        request_id = %request_id,
        query = %query,
        genre_count = genres.as_ref().map(Vec::len),
        "Processing browse request"
    );

    let groups = state.browse(query, genres).await?;

    tracing::info!(
        request_id = %request_id,
        groups = groups.len(),
        recommended = groups.recommended().len(),
        "Browse completed"
    );

    Ok(Json(groups))
}

/// Show details; the show becomes the selected show
pub async fn get_show(
    State(state): State<AppState>,
    Path(id): Path<ShowId>,
) -> AppResult<Json<Show>> {
    let show = state.fetch_show_by_id(id).await?;
    Ok(Json(show))
}

/// Episodes of a show with plain-text summaries
pub async fn get_episodes(
    State(state): State<AppState>,
    Path(id): Path<ShowId>,
) -> AppResult<Json<Vec<EpisodeView>>> {
    let episodes = state.fetch_show_episodes(id).await?;
    Ok(Json(episodes.iter().map(EpisodeView::from).collect()))
}

/// Current recommendations from the last browse
pub async fn get_recommended(State(state): State<AppState>) -> Json<RecommendedResponse> {
    let shows = state.recommended_shows().await;
    let top_pick = top_rated_show(&shows).cloned();
    Json(RecommendedResponse { shows, top_pick })
}

pub async fn get_watch_list(State(state): State<AppState>) -> Json<Vec<Show>> {
    Json(state.watch_list().await)
}

/// Bookmark a show; adding one that is already listed is a no-op
pub async fn add_to_watch_list(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<AddToWatchListRequest>,
) -> AppResult<(StatusCode, Json<Vec<Show>>)> {
    let show = state.resolve_show(request.show_id).await?;
    let added = state.add_to_watch_list(show).await;

    tracing::info!(
        request_id = %request_id,
        show_id = request.show_id,
        added,
        "Watch-list add"
    );

    let status = if added {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(state.watch_list().await)))
}

pub async fn remove_from_watch_list(
    State(state): State<AppState>,
    Path(id): Path<ShowId>,
) -> AppResult<StatusCode> {
    if state.remove_from_watch_list(id).await {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Show {} is not on the watch-list", id)))
    }
}
