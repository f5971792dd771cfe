use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Show;

/// Label of the derived, rating-sorted bucket that always leads the groups
pub const RECOMMENDED: &str = "Recommended";

/// A genre label and the shows shown under it
#[derive(Debug, Clone, PartialEq)]
pub struct GenreGroup {
    pub label: String,
    pub shows: Vec<Show>,
}

/// Display structure: `Recommended` first, then genres in ascending order.
///
/// Serializes as a JSON object whose keys keep that order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortedGroups {
    groups: Vec<GenreGroup>,
}

impl SortedGroups {
    /// Callers are responsible for the ordering invariant; see
    /// [`crate::services::grouping::build_sorted_groups`].
    pub(crate) fn from_ordered(groups: Vec<GenreGroup>) -> Self {
        Self { groups }
    }

    pub fn labels(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.label.as_str()).collect()
    }

    pub fn get(&self, label: &str) -> Option<&[Show]> {
        self.groups
            .iter()
            .find(|g| g.label == label)
            .map(|g| g.shows.as_slice())
    }

    pub fn recommended(&self) -> &[Show] {
        self.get(RECOMMENDED).unwrap_or(&[])
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }
}

impl Serialize for SortedGroups {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&group.label, &group.shows)?;
        }
        map.end()
    }
}
