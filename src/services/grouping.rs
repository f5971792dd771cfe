//! Genre grouping and recommendation pipeline.
//!
//! Every function here is pure. Views are recomputed from their inputs
//! (catalog, search query, selected genres) on each request.
use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::models::{GenreGroup, Show, SortedGroups, RECOMMENDED};

/// Shows whose name contains `query` (case-insensitive) and whose genres
/// include `genre`. An empty `query` or `genre` matches everything.
pub fn filter_shows(shows: &[Show], query: &str, genre: &str) -> Vec<Show> {
    let needle = query.to_lowercase();
    shows
        .iter()
        .filter(|show| {
            let name_match = needle.is_empty() || show.name.to_lowercase().contains(&needle);
            let genre_match = genre.is_empty() || show.has_genre(genre);
            name_match && genre_match
        })
        .cloned()
        .collect()
}

/// Orders shows by descending rating, unrated shows counting as zero.
///
/// Equal ratings compare `Equal`, so a stable sort keeps their input order.
pub fn compare_by_rating(a: &Show, b: &Show) -> Ordering {
    b.rating.score().total_cmp(&a.rating.score())
}

/// Keeps the first show seen for each id.
pub fn deduplicate_shows(shows: Vec<Show>) -> Vec<Show> {
    let mut seen = HashSet::new();
    shows
        .into_iter()
        .filter(|show| seen.insert(show.id))
        .collect()
}

/// Assembles the display structure.
///
/// `recommended` is sorted in place by [`compare_by_rating`] and becomes the
/// leading `Recommended` group. Any `Recommended` entry already present in
/// `groups_by_genre` is dropped; the remaining genres follow in ascending
/// order with their shows untouched.
pub fn build_sorted_groups(
    mut groups_by_genre: HashMap<String, Vec<Show>>,
    mut recommended: Vec<Show>,
) -> SortedGroups {
    recommended.sort_by(compare_by_rating);
    groups_by_genre.remove(RECOMMENDED);

    let mut genres: Vec<(String, Vec<Show>)> = groups_by_genre.into_iter().collect();
    genres.sort_by(|(a, _), (b, _)| a.cmp(b));

    let mut groups = Vec::with_capacity(genres.len() + 1);
    groups.push(GenreGroup {
        label: RECOMMENDED.to_string(),
        shows: recommended,
    });
    groups.extend(
        genres
            .into_iter()
            .map(|(label, shows)| GenreGroup { label, shows }),
    );

    SortedGroups::from_ordered(groups)
}

/// Filters the catalog once per viewed genre and assembles the groups.
///
/// The Recommended bucket is the deduplicated union of every per-genre
/// result, sorted by rating.
pub fn group_by_genre(shows: &[Show], query: &str, genres: &[String]) -> SortedGroups {
    let mut groups_by_genre = HashMap::with_capacity(genres.len());
    let mut candidates = Vec::new();

    for genre in genres {
        let filtered = filter_shows(shows, query, genre);
        candidates.extend(filtered.iter().cloned());
        groups_by_genre.insert(genre.clone(), filtered);
    }

    build_sorted_groups(groups_by_genre, deduplicate_shows(candidates))
}

/// First entry of an already sorted list.
pub fn top_rated_show(shows: &[Show]) -> Option<&Show> {
    shows.first()
}

/// Distinct genre labels across the catalog, in first-seen order.
pub fn collect_genres(shows: &[Show]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut genres = Vec::new();
    for genre in shows.iter().flat_map(|s| s.genres.iter()) {
        if seen.insert(genre.as_str()) {
            genres.push(genre.clone());
        }
    }
    genres
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ShowId;

    fn rated(id: ShowId, name: &str, rating: Option<f64>) -> Show {
        Show::new(id, name, &[], rating)
    }

    fn names(shows: &[Show]) -> Vec<&str> {
        shows.iter().map(|s| s.name.as_str()).collect()
    }

    fn ids(shows: &[Show]) -> Vec<ShowId> {
        shows.iter().map(|s| s.id).collect()
    }

    fn catalog() -> Vec<Show> {
        vec![
            Show::new(1, "Breaking Bad", &["Drama", "Crime"], Some(9.2)),
            Show::new(2, "Stranger Things", &["Drama", "Sci-Fi"], Some(8.7)),
            Show::new(3, "The Office", &["Comedy"], Some(8.9)),
            Show::new(4, "The Crown", &["Drama", "History"], None),
        ]
    }

    #[test]
    fn test_sort_by_rating_descending() {
        let mut shows = vec![
            rated(1, "Show A", Some(7.5)),
            rated(2, "Show B", Some(9.1)),
            rated(3, "Show C", Some(8.2)),
        ];
        shows.sort_by(compare_by_rating);
        assert_eq!(names(&shows), vec!["Show B", "Show C", "Show A"]);
    }

    #[test]
    fn test_sort_treats_missing_rating_as_zero() {
        let mut shows = vec![
            rated(1, "Show A", None),
            rated(2, "Show B", Some(5.0)),
            rated(3, "Show C", Some(3.0)),
        ];
        shows.sort_by(compare_by_rating);
        assert_eq!(names(&shows), vec!["Show B", "Show C", "Show A"]);
    }

    #[test]
    fn test_missing_rating_ties_with_zero() {
        let unrated = rated(1, "Unrated", None);
        let zero = rated(2, "Zero", Some(0.0));
        assert_eq!(compare_by_rating(&unrated, &zero), Ordering::Equal);
    }

    #[test]
    fn test_sort_is_stable_for_equal_ratings() {
        let mut shows = vec![
            rated(1, "First", Some(8.0)),
            rated(2, "Unrated", None),
            rated(3, "Second", Some(8.0)),
            rated(4, "Third", Some(8.0)),
        ];
        shows.sort_by(compare_by_rating);
        assert_eq!(names(&shows), vec!["First", "Second", "Third", "Unrated"]);
    }

    #[test]
    fn test_sort_empty() {
        let mut shows: Vec<Show> = vec![];
        shows.sort_by(compare_by_rating);
        assert!(shows.is_empty());
    }

    #[test]
    fn test_filter_by_query_and_genre() {
        let result = filter_shows(&catalog(), "Stranger Things", "Drama");
        assert_eq!(names(&result), vec!["Stranger Things"]);
    }

    #[test]
    fn test_filter_by_genre_only() {
        let result = filter_shows(&catalog(), "", "Comedy");
        assert_eq!(names(&result), vec!["The Office"]);
    }

    #[test]
    fn test_filter_query_is_case_insensitive_substring() {
        let result = filter_shows(&catalog(), "tHe", "");
        assert_eq!(names(&result), vec!["The Office", "The Crown"]);
    }

    #[test]
    fn test_filter_genre_is_exact() {
        assert!(filter_shows(&catalog(), "", "drama").is_empty());
    }

    #[test]
    fn test_filter_with_empty_query_and_genre_returns_everything() {
        let shows = catalog();
        assert_eq!(filter_shows(&shows, "", ""), shows);
    }

    #[test]
    fn test_filter_without_match() {
        assert!(filter_shows(&catalog(), "Nonexistent", "Drama").is_empty());
        assert!(filter_shows(&[], "Office", "Comedy").is_empty());
    }

    #[test]
    fn test_filter_preserves_order_and_predicate() {
        let shows = catalog();
        let result = filter_shows(&shows, "e", "Drama");
        assert_eq!(ids(&result), vec![1, 2, 4]);
        assert!(result
            .iter()
            .all(|s| s.has_genre("Drama") && s.name.to_lowercase().contains('e')));
    }

    #[test]
    fn test_deduplicate_keeps_first_occurrence() {
        let shows = vec![
            rated(1, "first", None),
            rated(2, "two", None),
            rated(1, "second", None),
        ];
        let result = deduplicate_shows(shows);
        assert_eq!(ids(&result), vec![1, 2]);
        assert_eq!(result[0].name, "first");
    }

    #[test]
    fn test_deduplicate_empty_and_unique() {
        assert!(deduplicate_shows(vec![]).is_empty());
        let unique = catalog();
        assert_eq!(deduplicate_shows(unique.clone()), unique);
    }

    #[test]
    fn test_deduplicate_is_idempotent() {
        let shows = vec![
            rated(3, "c", None),
            rated(1, "a", None),
            rated(3, "c", None),
            rated(2, "b", None),
            rated(1, "a", None),
        ];
        let once = deduplicate_shows(shows);
        let twice = deduplicate_shows(once.clone());
        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec![3, 1, 2]);
    }

    #[test]
    fn test_build_sorted_groups_orders_keys_and_recommended() {
        let a = Show::new(1, "A", &["Drama"], Some(7.0));
        let b = Show::new(2, "B", &["Comedy"], Some(6.0));
        let mut groups = HashMap::new();
        groups.insert("Drama".to_string(), vec![a.clone()]);
        groups.insert("Comedy".to_string(), vec![b.clone()]);
        let recommended = vec![rated(3, "C", Some(8.5)), rated(4, "D", Some(9.0))];

        let result = build_sorted_groups(groups, recommended);

        assert_eq!(result.labels(), vec!["Recommended", "Comedy", "Drama"]);
        assert_eq!(ids(result.recommended()), vec![4, 3]);
        assert_eq!(result.get("Comedy"), Some(&[b][..]));
        assert_eq!(result.get("Drama"), Some(&[a][..]));
    }

    #[test]
    fn test_build_sorted_groups_replaces_input_recommended() {
        let mut groups = HashMap::new();
        groups.insert(RECOMMENDED.to_string(), vec![rated(9, "X", Some(10.0))]);
        groups.insert("Action".to_string(), vec![rated(10, "Y", None)]);

        let result = build_sorted_groups(groups, vec![]);

        assert_eq!(result.labels(), vec!["Recommended", "Action"]);
        assert!(result.recommended().is_empty());
        assert_eq!(ids(result.get("Action").unwrap()), vec![10]);
    }

    #[test]
    fn test_build_sorted_groups_with_no_genres() {
        let result = build_sorted_groups(HashMap::new(), vec![rated(1, "Only", Some(5.0))]);
        assert_eq!(result.labels(), vec!["Recommended"]);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn test_build_sorted_groups_leaves_genre_lists_unsorted() {
        let mut groups = HashMap::new();
        groups.insert(
            "Drama".to_string(),
            vec![rated(1, "Low", Some(2.0)), rated(2, "High", Some(9.0))],
        );
        let result = build_sorted_groups(groups, vec![]);
        assert_eq!(names(result.get("Drama").unwrap()), vec!["Low", "High"]);
    }

    #[test]
    fn test_group_by_genre_pipeline() {
        let shows = vec![
            Show::new(1, "Show 1", &["Drama"], Some(8.0)),
            Show::new(2, "Show 2", &["Comedy", "Drama"], Some(7.0)),
        ];
        let genres = vec!["Drama".to_string(), "Comedy".to_string()];

        let result = group_by_genre(&shows, "show", &genres);

        assert_eq!(result.labels(), vec!["Recommended", "Comedy", "Drama"]);
        assert_eq!(ids(result.get("Drama").unwrap()), vec![1, 2]);
        assert_eq!(ids(result.get("Comedy").unwrap()), vec![2]);
        // Show 2 appears in both genres but only once in Recommended
        assert_eq!(ids(result.recommended()), vec![1, 2]);
    }

    #[test]
    fn test_group_by_genre_applies_query_to_every_group() {
        let result = group_by_genre(
            &catalog(),
            "the",
            &["Drama".to_string(), "Comedy".to_string()],
        );
        assert_eq!(names(result.get("Drama").unwrap()), vec!["The Crown"]);
        assert_eq!(names(result.get("Comedy").unwrap()), vec!["The Office"]);
        assert_eq!(names(result.recommended()), vec!["The Office", "The Crown"]);
    }

    #[test]
    fn test_group_by_genre_keeps_empty_groups() {
        let result = group_by_genre(&catalog(), "", &["Western".to_string()]);
        assert_eq!(result.labels(), vec!["Recommended", "Western"]);
        assert!(result.get("Western").unwrap().is_empty());
        assert!(result.recommended().is_empty());
    }

    #[test]
    fn test_top_rated_show() {
        let mut shows = catalog();
        shows.sort_by(compare_by_rating);
        assert_eq!(top_rated_show(&shows).map(|s| s.id), Some(1));
        assert_eq!(top_rated_show(&[]), None);
    }

    #[test]
    fn test_collect_genres_in_first_seen_order() {
        let shows = vec![
            Show::new(1, "Show 1", &["Drama"], None),
            Show::new(2, "Show 2", &["Comedy", "Drama"], None),
        ];
        assert_eq!(collect_genres(&shows), vec!["Drama", "Comedy"]);
        assert!(collect_genres(&[]).is_empty());
    }
}
