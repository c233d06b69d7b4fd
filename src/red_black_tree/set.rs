use crate::entry::Entry;
use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree::{self, Tree};
use crate::red_black_tree::{check, Result};
use log::debug;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::borrow::Borrow;

/// An ordered set implemented using a left-leaning red black tree.
///
/// A left-leaning red black tree is a binary encoding of a 2-3 tree. Each link carries a color
/// bit and red links, which glue two nodes into one 3-node, always lean left. Every path from
/// the root to an empty subtree crosses the same number of black links, so the height of the
/// tree stays logarithmic regardless of the insertion order.
///
/// Elements carry their own linkage metadata and are compared with `Node::compare`. The set is
/// not synchronized: callers that share a set across threads need to wrap it in a lock.
///
/// # Examples
///
/// ```
/// use sorted_set::{Entry, SortedSet};
///
/// let mut set = SortedSet::new();
/// set.insert(Entry::new(0, "zero"));
/// set.insert(Entry::new(3, "three"));
///
/// assert_eq!(set.len(), 2);
/// assert!(set.search(&Entry::new(3, "")).is_some());
/// assert!(set.search(&Entry::new(1, "")).is_none());
/// ```
#[derive(Clone, Debug)]
pub struct SortedSet<T> {
    root: Tree<T>,
}

impl<T> SortedSet<T>
where
    T: Node,
{
    /// Constructs a new, empty `SortedSet<T>`
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let set: SortedSet<Entry<u32, u32>> = SortedSet::new();
    /// ```
    pub fn new() -> Self {
        SortedSet { root: None }
    }

    /// Inserts a value into the set. If an equal value already exists in the set, its payload is
    /// replaced by the payload of `value` and the set keeps its size.
    ///
    /// # Panics
    ///
    /// Panics if `value` still has children linked to it. A panic raised by `Node::compare` on
    /// the insertion path leaves the set unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, 1));
    /// set.insert(Entry::new(1, 2));
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.get(&1), Some(&2));
    /// ```
    pub fn insert(&mut self, value: T) {
        assert!(
            value.links().is_empty(),
            "Expected node to be inserted to have no children."
        );
        // Runs every comparison on the insertion path before the tree is taken apart, so a
        // panicking `compare` leaves the set untouched.
        tree::search_by(&self.root, |node| value.compare(node));
        let new_node = Box::new(value);
        let mut root = match self.root.take() {
            None => {
                debug!("Inserting into an empty set");
                new_node
            },
            root => tree::insert(root, new_node),
        };
        root.links_mut().color = Color::Black;
        self.root = Some(root);
    }

    /// Returns the element of the set that compares equal to `probe`, or `None` if there is no
    /// such element. Only `Node::compare` is called on `probe`.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, "a"));
    /// assert_eq!(set.search(&Entry::new(1, "")).map(|entry| entry.value), Some("a"));
    /// assert!(set.search(&Entry::new(2, "")).is_none());
    /// ```
    pub fn search(&self, probe: &T) -> Option<&T> {
        tree::search_by(&self.root, |node| probe.compare(node))
    }

    /// Checks if an element equal to `probe` exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, ()));
    /// assert!(!set.contains(&Entry::new(0, ())));
    /// assert!(set.contains(&Entry::new(1, ())));
    /// ```
    pub fn contains(&self, probe: &T) -> bool {
        self.search(probe).is_some()
    }

    /// Returns the number of elements in the set. The elements are counted on every call.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, ()));
    /// assert_eq!(set.len(), 1);
    /// ```
    pub fn len(&self) -> usize {
        tree::len(&self.root)
    }

    /// Returns `true` if the set is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let set: SortedSet<Entry<u32, ()>> = SortedSet::new();
    /// assert!(set.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Clears the set, removing all values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, ()));
    /// set.insert(Entry::new(2, ()));
    /// set.clear();
    /// assert_eq!(set.is_empty(), true);
    /// ```
    pub fn clear(&mut self) {
        self.root = None;
    }

    /// Returns the number of nodes on the longest path from the root to a leaf.
    pub fn height(&self) -> usize {
        check::height(&self.root)
    }

    /// Returns the number of black links on every path from the root to an empty subtree, or
    /// `None` if two paths disagree.
    pub fn black_height(&self) -> Option<usize> {
        check::black_height(&self.root)
    }

    /// Returns `true` if every element is strictly greater than all elements in its left
    /// subtree and strictly less than all elements in its right subtree.
    pub fn is_bst(&self) -> bool {
        check::is_bst(&self.root)
    }

    /// Returns `true` if no node has a red right link next to a missing or black left link.
    pub fn is_left_leaning(&self) -> bool {
        check::is_left_leaning(&self.root)
    }

    /// Returns `true` if no red node has a red child.
    pub fn has_no_double_red(&self) -> bool {
        check::has_no_double_red(&self.root)
    }

    /// Checks every invariant of a left-leaning red black tree and returns the first one that
    /// does not hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// for key in 0..100 {
    ///     set.insert(Entry::new(key, ()));
    /// }
    /// assert!(set.validate().is_ok());
    /// ```
    pub fn validate(&self) -> Result<()> {
        check::validate(&self.root)
    }
}

impl<T, U> SortedSet<Entry<T, U>>
where
    T: Ord,
{
    /// Returns an immutable reference to the value associated with a particular key. It will
    /// return `None` if the key does not exist in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, 1));
    /// assert_eq!(set.get(&0), None);
    /// assert_eq!(set.get(&1), Some(&1));
    /// ```
    pub fn get<V>(&self, key: &V) -> Option<&U>
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        tree::search_by(&self.root, |entry| key.cmp(entry.key.borrow())).map(|entry| &entry.value)
    }

    /// Checks if a key exists in the set.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::{Entry, SortedSet};
    ///
    /// let mut set = SortedSet::new();
    /// set.insert(Entry::new(1, 1));
    /// assert!(!set.contains_key(&0));
    /// assert!(set.contains_key(&1));
    /// ```
    pub fn contains_key<V>(&self, key: &V) -> bool
    where
        T: Borrow<V>,
        V: Ord + ?Sized,
    {
        self.get(key).is_some()
    }
}

impl<T> Default for SortedSet<T>
where
    T: Node,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Serialize for SortedSet<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for SortedSet<T>
where
    T: Node + Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let root = Tree::<T>::deserialize(deserializer)?;
        check::validate(&root).map_err(<D::Error as de::Error>::custom)?;
        Ok(SortedSet { root })
    }
}
