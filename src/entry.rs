use crate::red_black_tree::{Links, Node};
use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A key-value pair that can be stored in a `SortedSet`.
///
/// Entries are ordered and compared by key only. Inserting an entry whose key is already in the
/// set replaces the stored value and keeps the stored key.
///
/// Cloning an entry also clones the subtree linked below it. A clone of an entry borrowed from a
/// set therefore cannot be inserted again; build a fresh one with `Entry::new` instead.
///
/// # Examples
///
/// ```
/// use sorted_set::{Entry, SortedSet};
///
/// let mut set = SortedSet::new();
/// set.insert(Entry::new("a", 1));
/// set.insert(Entry::new("a", 2));
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.get("a"), Some(&2));
/// ```
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Entry<T, U> {
    pub key: T,
    pub value: U,
    links: Links<Entry<T, U>>,
}

impl<T, U> Entry<T, U> {
    pub fn new(key: T, value: U) -> Self {
        Entry {
            key,
            value,
            links: Links::new(),
        }
    }
}

impl<T, U> Node for Entry<T, U>
where
    T: Ord,
{
    fn compare(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }

    fn adopt(&mut self, other: Self) {
        self.value = other.value;
    }

    fn links(&self) -> &Links<Self> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links<Self> {
        &mut self.links
    }
}

impl<T, U> Ord for Entry<T, U>
where
    T: Ord,
{
    fn cmp(&self, other: &Entry<T, U>) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl<T, U> PartialOrd for Entry<T, U>
where
    T: Ord,
{
    fn partial_cmp(&self, other: &Entry<T, U>) -> Option<Ordering> {
        Some(self.key.cmp(&other.key))
    }
}

impl<T, U> PartialEq for Entry<T, U>
where
    T: Ord,
{
    fn eq(&self, other: &Entry<T, U>) -> bool {
        self.key == other.key
    }
}

impl<T, U> Eq for Entry<T, U> where T: Ord {}
