/// Catalog data source abstraction
///
/// The rest of the crate only talks to the catalog through [`CatalogProvider`],
/// so the TVmaze client can be swapped for a fake in tests.
use crate::{
    error::AppResult,
    models::{Episode, Show, ShowId},
};

pub mod tvmaze;

pub use tvmaze::TvMazeProvider;

/// Trait for show catalog providers
///
/// Every method performs a fresh request; results are never cached here.
/// Failures are returned to the caller untouched.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Full show index
    async fn fetch_shows(&self) -> AppResult<Vec<Show>>;

    /// A single show by catalog id
    async fn fetch_show(&self, id: ShowId) -> AppResult<Show>;

    /// Free-text search over show names
    async fn search_shows(&self, query: &str) -> AppResult<Vec<Show>>;

    /// Every episode of a show, in airing order
    async fn fetch_episodes(&self, id: ShowId) -> AppResult<Vec<Episode>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}
