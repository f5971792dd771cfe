/// TVmaze catalog provider
///
/// Public, keyless API. Endpoints used:
/// 1. Show index: /shows
/// 2. Show details: /shows/{id}
/// 3. Search: /search/shows?q= → list of `{score, show}` hits
/// 4. Episodes: /shows/{id}/episodes
use crate::{
    error::{AppError, AppResult},
    models::{Episode, SearchHit, Show, ShowId},
    services::catalog::CatalogProvider,
};
use reqwest::{Client as HttpClient, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

const PROVIDER_NAME: &str = "tvmaze";

#[derive(Clone)]
pub struct TvMazeProvider {
    http_client: HttpClient,
    api_url: String,
}

impl TvMazeProvider {
    /// Creates a provider rooted at `api_url` (e.g. `https://api.tvmaze.com`)
    pub fn new(api_url: &str, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder()
            .timeout(timeout)
            .user_agent(concat!("showboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http_client,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_url, path.trim_start_matches('/'))
    }

    /// Issues a GET and decodes the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> AppResult<T> {
        let url = self.endpoint(path);

        let response = self.http_client.get(&url).query(query).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(AppError::NotFound(format!(
                "{} has no resource at {}",
                PROVIDER_NAME, path
            )));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "TVmaze API returned status {}: {}",
                status, body
            )));
        }

        let text = response.text().await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!(
                error = %e,
                url = %url,
                "Failed to deserialize TVmaze response"
            );
            AppError::ExternalApi(format!("Failed to parse TVmaze response: {}", e))
        })
    }
}

#[async_trait::async_trait]
impl CatalogProvider for TvMazeProvider {
    async fn fetch_shows(&self) -> AppResult<Vec<Show>> {
        let shows: Vec<Show> = self.get_json("shows", &[]).await?;

        tracing::info!(
            shows = shows.len(),
            provider = PROVIDER_NAME,
            "Show index fetched"
        );

        Ok(shows)
    }

    async fn fetch_show(&self, id: ShowId) -> AppResult<Show> {
        let show: Show = self.get_json(&format!("shows/{}", id), &[]).await?;

        tracing::info!(show_id = id, provider = PROVIDER_NAME, "Show details fetched");

        Ok(show)
    }

    async fn search_shows(&self, query: &str) -> AppResult<Vec<Show>> {
        if query.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search query cannot be empty".to_string(),
            ));
        }

        let hits: Vec<SearchHit> = self.get_json("search/shows", &[("q", query)]).await?;
        let shows: Vec<Show> = hits.into_iter().map(Show::from).collect();

        tracing::info!(
            query = %query,
            results = shows.len(),
            provider = PROVIDER_NAME,
            "Show search completed"
        );

        Ok(shows)
    }

    async fn fetch_episodes(&self, id: ShowId) -> AppResult<Vec<Episode>> {
        let episodes: Vec<Episode> = self
            .get_json(&format!("shows/{}/episodes", id), &[])
            .await?;

        tracing::info!(
            show_id = id,
            episodes = episodes.len(),
            provider = PROVIDER_NAME,
            "Episodes fetched"
        );

        Ok(episodes)
    }

    fn name(&self) -> &'static str {
        PROVIDER_NAME
    }
}
