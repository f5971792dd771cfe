use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::AppResult;
use crate::models::{Episode, Show, ShowId, SortedGroups, WatchList};
use crate::services::catalog::CatalogProvider;
use crate::services::grouping::{collect_genres, group_by_genre};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<dyn CatalogProvider>,
    pub inner: Arc<RwLock<AppStateInner>>,
}

/// Inner state that can be modified
///
/// Catalog-derived fields are replaced wholesale on every fetch.
#[derive(Debug, Default)]
pub struct AppStateInner {
    pub shows: Vec<Show>,
    pub genres: Vec<String>,
    pub selected_show: Option<Show>,
    pub recommended_shows: Vec<Show>,
    pub watch_list: WatchList,
    pub show_episodes: Vec<Episode>,
    /// When `shows` was last replaced; `None` until the first successful fetch
    pub loaded_at: Option<DateTime<Utc>>,
}

impl AppState {
    /// Creates an empty state backed by `catalog`
    pub fn new(catalog: Arc<dyn CatalogProvider>) -> Self {
        Self {
            catalog,
            inner: Arc::new(RwLock::new(AppStateInner::default())),
        }
    }

    /// Replaces the loaded catalog with the provider's full show index.
    ///
    /// Returns the number of shows loaded. On failure the previous catalog
    /// stays in place.
    pub async fn fetch_shows(&self) -> AppResult<usize> {
        Ok(self.load_index().await?.len())
    }

    /// Replaces the loaded catalog with the search hits for `query`
    pub async fn search_shows(&self, query: &str) -> AppResult<usize> {
        Ok(self.load_search(query).await?.len())
    }

    async fn load_index(&self) -> AppResult<Vec<Show>> {
        let shows = self.catalog.fetch_shows().await.inspect_err(|e| {
            tracing::error!(error = %e, provider = self.catalog.name(), "Error fetching shows");
        })?;
        self.replace_shows(shows.clone()).await;
        Ok(shows)
    }

    async fn load_search(&self, query: &str) -> AppResult<Vec<Show>> {
        let shows = self.catalog.search_shows(query).await.inspect_err(|e| {
            tracing::error!(error = %e, query = %query, "Error searching shows");
        })?;
        self.replace_shows(shows.clone()).await;
        Ok(shows)
    }

    async fn replace_shows(&self, shows: Vec<Show>) {
        let mut inner = self.inner.write().await;
        inner.genres = collect_genres(&shows);
        inner.shows = shows;
        inner.loaded_at = Some(Utc::now());
    }

    /// Fetches the show index unless something has already been loaded
    pub async fn ensure_catalog(&self) -> AppResult<()> {
        if self.inner.read().await.loaded_at.is_none() {
            self.fetch_shows().await?;
        }
        Ok(())
    }

    /// Loads a show from the provider and makes it the selected show
    pub async fn fetch_show_by_id(&self, id: ShowId) -> AppResult<Show> {
        let show = self.catalog.fetch_show(id).await.inspect_err(|e| {
            tracing::error!(error = %e, show_id = id, "Error fetching show details");
        })?;
        self.inner.write().await.selected_show = Some(show.clone());
        Ok(show)
    }

    /// Loads the episode list of a show, replacing the previous one
    pub async fn fetch_show_episodes(&self, id: ShowId) -> AppResult<Vec<Episode>> {
        let episodes = self.catalog.fetch_episodes(id).await.inspect_err(|e| {
            tracing::error!(error = %e, show_id = id, "Error fetching show episodes");
        })?;
        self.inner.write().await.show_episodes = episodes.clone();
        Ok(episodes)
    }

    /// Selects a show from the loaded catalog; clears the selection when absent
    pub async fn select_show(&self, id: ShowId) -> Option<Show> {
        let mut inner = self.inner.write().await;
        inner.selected_show = inner.shows.iter().find(|s| s.id == id).cloned();
        inner.selected_show.clone()
    }

    pub async fn set_recommended_shows(&self, shows: Vec<Show>) {
        self.inner.write().await.recommended_shows = shows;
    }

    /// Returns whether the show was newly added
    pub async fn add_to_watch_list(&self, show: Show) -> bool {
        self.inner.write().await.watch_list.add(show)
    }

    /// Returns whether a show was removed
    pub async fn remove_from_watch_list(&self, id: ShowId) -> bool {
        self.inner.write().await.watch_list.remove(id)
    }

    /// Finds a show in the loaded catalog, falling back to the provider
    pub async fn resolve_show(&self, id: ShowId) -> AppResult<Show> {
        let loaded = self
            .inner
            .read()
            .await
            .shows
            .iter()
            .find(|s| s.id == id)
            .cloned();
        match loaded {
            Some(show) => Ok(show),
            None => self.catalog.fetch_show(id).await,
        }
    }

    /// Refreshes the catalog for `query` and groups it by genre.
    ///
    /// A non-blank query replaces the catalog with search hits; a blank one
    /// reloads the full index. `genres` narrows the groups shown (default:
    /// every genre in the catalog). The Recommended bucket is stored as the
    /// current recommendation list.
    pub async fn browse(
        &self,
        query: &str,
        genres: Option<Vec<String>>,
    ) -> AppResult<SortedGroups> {
        let query = query.trim();
        // Group this request's own results; the shared catalog may already
        // hold another request's fetch by now.
        let shows = if query.is_empty() {
            self.load_index().await?
        } else {
            self.load_search(query).await?
        };

        let genres = genres.unwrap_or_else(|| collect_genres(&shows));
        let groups = group_by_genre(&shows, &query.to_lowercase(), &genres);

        self.set_recommended_shows(groups.recommended().to_vec()).await;

        Ok(groups)
    }

    pub async fn shows(&self) -> Vec<Show> {
        self.inner.read().await.shows.clone()
    }

    pub async fn genres(&self) -> Vec<String> {
        self.inner.read().await.genres.clone()
    }

    pub async fn recommended_shows(&self) -> Vec<Show> {
        self.inner.read().await.recommended_shows.clone()
    }

    pub async fn watch_list(&self) -> Vec<Show> {
        self.inner.read().await.watch_list.shows().to_vec()
    }
}
