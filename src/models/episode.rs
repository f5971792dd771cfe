use serde::{Deserialize, Serialize};

use crate::services::summary::strip_markup;

/// An episode record as returned by `GET /shows/{id}/episodes`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub id: u64,
    pub name: String,
    pub season: u32,
    /// Absent for specials
    #[serde(default)]
    pub number: Option<u32>,
    #[serde(default)]
    pub airdate: Option<String>,
    #[serde(default)]
    pub runtime: Option<u32>,
    /// HTML fragment
    #[serde(default)]
    pub summary: Option<String>,
}

/// Episode shaped for display, with the summary reduced to plain text
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EpisodeView {
    pub id: u64,
    pub name: String,
    pub season: u32,
    pub number: Option<u32>,
    pub airdate: Option<String>,
    pub runtime: Option<u32>,
    pub summary: String,
}

impl From<&Episode> for EpisodeView {
    fn from(episode: &Episode) -> Self {
        Self {
            id: episode.id,
            name: episode.name.clone(),
            season: episode.season,
            number: episode.number,
            airdate: episode.airdate.clone().filter(|d| !d.is_empty()),
            runtime: episode.runtime,
            summary: episode
                .summary
                .as_deref()
                .map(strip_markup)
                .unwrap_or_default(),
        }
    }
}
