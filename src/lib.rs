//! An ordered set backed by a left-leaning red-black tree.
//!
//! Values carry their own linkage metadata and participate in the set by implementing
//! [`Node`](red_black_tree::Node). The tree keeps logarithmic height regardless of insertion
//! order.
//!
//! # Examples
//!
//! ```
//! use sorted_set::{Entry, SortedSet};
//!
//! let mut set = SortedSet::new();
//! set.insert(Entry::new(1, "one"));
//! set.insert(Entry::new(2, "two"));
//! set.insert(Entry::new(1, "uno"));
//!
//! assert_eq!(set.len(), 2);
//! assert_eq!(set.get(&1), Some(&"uno"));
//! assert_eq!(set.get(&3), None);
//! ```

mod entry;
pub mod red_black_tree;

pub use crate::entry::Entry;
pub use crate::red_black_tree::{Color, Links, Node, SortedSet};
