use serde::{Deserialize, Serialize};

use super::{Show, ShowId};

/// Shows the user has bookmarked, in the order they were added
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct WatchList {
    shows: Vec<Show>,
}

impl WatchList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a show unless one with the same id is already listed.
    ///
    /// Returns whether the list changed.
    pub fn add(&mut self, show: Show) -> bool {
        if self.contains(show.id) {
            return false;
        }
        self.shows.push(show);
        true
    }

    /// Returns whether a show was removed
    pub fn remove(&mut self, show_id: ShowId) -> bool {
        let before = self.shows.len();
        self.shows.retain(|s| s.id != show_id);
        self.shows.len() != before
    }

    pub fn contains(&self, show_id: ShowId) -> bool {
        self.shows.iter().any(|s| s.id == show_id)
    }

    pub fn shows(&self) -> &[Show] {
        &self.shows
    }

    pub fn len(&self) -> usize {
        self.shows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shows.is_empty()
    }
}
