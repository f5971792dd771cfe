pub mod catalog;
pub mod grouping;
pub mod summary;

pub use catalog::{CatalogProvider, TvMazeProvider};
