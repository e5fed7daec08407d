//! Ordered list of uniquely identified text entries

use std::fmt;

use tracing::debug;

/// Stable identifier of an entry
///
/// Issued by the owning [`EntryList`] and never reused, even after the
/// entry is removed. Positions shift under reorder and removal; the id does not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(u64);

impl EntryId {
    /// Raw counter value, mostly useful for logging
    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One row of the form: a stable id plus its text value
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entry {
    id: EntryId,
    value: String,
}

impl Entry {
    pub fn id(&self) -> EntryId {
        self.id
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Ordered collection of entries backing the form
///
/// Insertion order is display and submission order. Every mutating method
/// returns `true` when the list actually changed; unknown ids are a silent
/// no-op.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EntryList {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Default for EntryList {
    fn default() -> Self {
        Self::new()
    }
}

impl EntryList {
    /// A list holding exactly one empty entry
    pub fn new() -> Self {
        let mut list = Self::empty();
        list.append();
        list
    }

    /// A list with no entries
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// A list pre-filled with the given values, in order
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list = Self::empty();
        for value in values {
            let id = list.append();
            list.set_value(id, value);
        }
        list
    }

    fn issue_id(&mut self) -> EntryId {
        let id = EntryId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Add an empty entry at the end and return its id
    pub fn append(&mut self) -> EntryId {
        let id = self.issue_id();
        self.entries.push(Entry {
            id,
            value: String::new(),
        });
        id
    }

    /// Remove the entry with the given id
    pub fn remove(&mut self, id: EntryId) -> bool {
        match self.position(id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => {
                debug!(%id, "remove: unknown entry");
                false
            }
        }
    }

    /// Move `from` to the position currently held by `to`
    ///
    /// The entry is taken out and reinserted at the target's index, so every
    /// entry in between shifts by one toward the vacated slot.
    pub fn move_entry(&mut self, from: EntryId, to: EntryId) -> bool {
        if from == to {
            return false;
        }
        let (Some(from_index), Some(to_index)) = (self.position(from), self.position(to)) else {
            debug!(%from, %to, "move: unknown entry");
            return false;
        };
        let entry = self.entries.remove(from_index);
        self.entries.insert(to_index, entry);
        true
    }

    /// Replace the value of the entry with the given id
    pub fn set_value(&mut self, id: EntryId, value: impl Into<String>) -> bool {
        let value = value.into();
        match self.entries.iter_mut().find(|entry| entry.id == id) {
            Some(entry) if entry.value != value => {
                entry.value = value;
                true
            }
            Some(_) => false,
            None => {
                debug!(%id, "set_value: unknown entry");
                false
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn contains(&self, id: EntryId) -> bool {
        self.get(id).is_some()
    }

    /// Current index of the entry with the given id
    pub fn position(&self, id: EntryId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    /// Entry at the given index
    pub fn at(&self, index: usize) -> Option<&Entry> {
        self.entries.get(index)
    }

    pub fn first_id(&self) -> Option<EntryId> {
        self.entries.first().map(Entry::id)
    }

    pub fn last_id(&self) -> Option<EntryId> {
        self.entries.last().map(Entry::id)
    }

    /// Id of the entry `offset` rows away from `id` (negative = above)
    pub fn neighbor(&self, id: EntryId, offset: isize) -> Option<EntryId> {
        let index = self.position(id)?.checked_add_signed(offset)?;
        self.at(index).map(Entry::id)
    }

    pub fn ids(&self) -> Vec<EntryId> {
        self.entries.iter().map(Entry::id).collect()
    }

    pub fn values(&self) -> Vec<&str> {
        self.entries.iter().map(Entry::value).collect()
    }
}
