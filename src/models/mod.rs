use serde::{Deserialize, Serialize};

pub mod episode;
pub mod groups;
pub mod show;
pub mod watch_list;

pub use episode::{Episode, EpisodeView};
pub use groups::{GenreGroup, SortedGroups, RECOMMENDED};
pub use show::{Rating, Show, ShowId, ShowImage};
pub use watch_list::WatchList;

// ============================================================================
// TVmaze API Types
// ============================================================================

/// One hit from `GET /search/shows`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchHit {
    #[serde(default)]
    pub score: Option<f64>,
    pub show: Show,
}

impl From<SearchHit> for Show {
    fn from(hit: SearchHit) -> Self {
        hit.show
    }
}
