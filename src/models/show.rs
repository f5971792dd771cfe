use serde::{Deserialize, Serialize};

/// Catalog identifier of a show
pub type ShowId = u64;

/// Aggregate rating as published by the catalog
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct Rating {
    /// Missing when the show has not been rated yet
    #[serde(default)]
    pub average: Option<f64>,
}

impl Rating {
    /// Rating used for ordering; unrated shows count as zero.
    pub fn score(&self) -> f64 {
        self.average.unwrap_or(0.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ShowImage {
    #[serde(default)]
    pub medium: Option<String>,
    #[serde(default)]
    pub original: Option<String>,
}

/// A television show from the catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Show {
    pub id: ShowId,
    pub name: String,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub rating: Rating,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub premiered: Option<String>,
    #[serde(default, rename = "officialSite")]
    pub official_site: Option<String>,
    /// HTML fragment
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub image: Option<ShowImage>,
}

impl Show {
    /// Creates a bare show with only the fields the grouping pipeline reads
    pub fn new(id: ShowId, name: impl Into<String>, genres: &[&str], rating: Option<f64>) -> Self {
        Self {
            id,
            name: name.into(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            rating: Rating { average: rating },
            language: None,
            status: None,
            premiered: None,
            official_site: None,
            summary: None,
            image: None,
        }
    }

    pub fn has_genre(&self, genre: &str) -> bool {
        self.genres.iter().any(|g| g == genre)
    }
}
