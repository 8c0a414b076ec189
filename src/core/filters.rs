use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::models::Profile;

/// Profession categories restricting the roster.
///
/// An empty set means no filtering. Tags outside the domain taxonomy are
/// accepted and simply match nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FilterSet {
    tags: BTreeSet<String>,
}

impl FilterSet {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Add the tag if absent, remove it if present. Returns whether it is now selected.
    pub fn toggle(&mut self, tag: &str) -> bool {
        if self.tags.remove(tag) {
            false
        } else {
            self.tags.insert(tag.to_string());
            true
        }
    }

    pub fn clear(&mut self) {
        self.tags.clear();
    }

    /// Selected tags that no profile in this taxonomy can carry
    pub fn unknown_tags<'a>(&'a self, taxonomy: &[&str]) -> Vec<&'a str> {
        self.iter().filter(|tag| !taxonomy.contains(tag)).collect()
    }
}

/// Check if a profile passes the filter set
#[inline]
pub fn matches_filters(profile: &Profile, filters: &FilterSet) -> bool {
    filters.is_empty() || filters.contains(&profile.profession)
}

/// Stable filter of the roster by profession category.
///
/// Roster order is preserved; an empty filter set returns every profile.
pub fn apply_filters(roster: &[Profile], filters: &FilterSet) -> Vec<Profile> {
    roster
        .iter()
        .filter(|profile| matches_filters(profile, filters))
        .cloned()
        .collect()
}
