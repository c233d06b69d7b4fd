use serde_derive::{Deserialize, Serialize};
use std::cmp::Ordering;

/// An enum representing the color of a node in a red black tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Color {
    Red,
    Black,
}

impl Color {
    pub fn flip(self) -> Color {
        match self {
            Color::Red => Color::Black,
            Color::Black => Color::Red,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Red
    }
}

/// The linkage metadata a value carries while it is stored in a `SortedSet<T>`.
///
/// Each child is exclusively owned by its parent. A freshly constructed record has no
/// children and its color is only meaningful once the owning value has been inserted. The
/// fields can only be changed by the set itself.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Links<T> {
    pub(crate) left: Option<Box<T>>,
    pub(crate) right: Option<Box<T>>,
    pub(crate) color: Color,
}

impl<T> Links<T> {
    /// Constructs an empty record with no children.
    ///
    /// # Examples
    ///
    /// ```
    /// use sorted_set::Links;
    ///
    /// let links: Links<u32> = Links::new();
    /// assert!(links.is_empty());
    /// ```
    pub fn new() -> Self {
        Links {
            left: None,
            right: None,
            color: Color::Red,
        }
    }

    /// Returns the left child, if any.
    pub fn left(&self) -> Option<&T> {
        self.left.as_ref().map(|child| &**child)
    }

    /// Returns the right child, if any.
    pub fn right(&self) -> Option<&T> {
        self.right.as_ref().map(|child| &**child)
    }

    /// Returns the color of the link from the parent to the owning value.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns `true` if the record has neither a left nor a right child.
    pub fn is_empty(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

impl<T> Default for Links<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// The capability a value needs to be stored in a `SortedSet<T>`.
///
/// Two values are the same element of the set if and only if `compare` returns
/// `Ordering::Equal`. Types that only have a partial order must map incomparable pairs to
/// `Ordering::Equal`, which makes an insert of either one update the other.
///
/// # Examples
///
/// ```
/// use sorted_set::{Links, Node, SortedSet};
/// use std::cmp::Ordering;
///
/// struct Account {
///     id: u32,
///     balance: i64,
///     links: Links<Account>,
/// }
///
/// impl Node for Account {
///     fn compare(&self, other: &Self) -> Ordering {
///         self.id.cmp(&other.id)
///     }
///
///     fn adopt(&mut self, other: Self) {
///         self.balance = other.balance;
///     }
///
///     fn links(&self) -> &Links<Self> {
///         &self.links
///     }
///
///     fn links_mut(&mut self) -> &mut Links<Self> {
///         &mut self.links
///     }
/// }
///
/// let mut set = SortedSet::new();
/// set.insert(Account { id: 7, balance: 10, links: Links::new() });
/// set.insert(Account { id: 7, balance: 25, links: Links::new() });
///
/// let probe = Account { id: 7, balance: 0, links: Links::new() };
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.search(&probe).map(|account| account.balance), Some(25));
/// ```
pub trait Node: Sized {
    /// Orders `self` relative to `other`.
    fn compare(&self, other: &Self) -> Ordering;

    /// Overwrites the payload of `self` with the payload of `other`. Must not touch the
    /// links of `self`.
    fn adopt(&mut self, other: Self);

    fn links(&self) -> &Links<Self>;

    fn links_mut(&mut self) -> &mut Links<Self>;
}
