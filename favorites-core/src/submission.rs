//! Value-only snapshot of a submitted form

use serde::Serialize;

use crate::entry::EntryList;

/// One submitted favorite
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Favorite {
    pub name: String,
}

/// Immutable copy of the list values taken at a successful submit
///
/// Ids are dropped; only order and values survive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Submission {
    favorites: Vec<Favorite>,
}

impl Submission {
    pub fn capture(list: &EntryList) -> Self {
        Self {
            favorites: list
                .iter()
                .map(|entry| Favorite {
                    name: entry.value().to_string(),
                })
                .collect(),
        }
    }

    pub fn favorites(&self) -> &[Favorite] {
        &self.favorites
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.favorites.iter().map(|favorite| favorite.name.as_str())
    }

    /// Pretty-printed JSON dump shown on the review surface
    pub fn to_pretty_json(&self) -> String {
        // Strings and vectors only; serialization cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
