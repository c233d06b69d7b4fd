//! Self-balancing binary search tree that uses a color bit on every link to encode a 2-3 tree
//! with binary nodes. Red links always lean left, which keeps the insertion fix-ups down to a
//! color flip and two rotations.

mod check;
mod node;
#[cfg(test)]
mod notation;
mod set;
mod tree;

pub use self::node::{Color, Links, Node};
pub use self::set::SortedSet;

use std::error;
use std::fmt;
use std::result;

/// An invariant of a red black tree that a given tree does not satisfy.
#[derive(Debug, PartialEq)]
pub enum Error {
    RedRoot,
    Unordered,
    RightLeaning,
    DoubleRed,
    Unbalanced,
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RedRoot => write!(f, "root node is red"),
            Error::Unordered => write!(f, "nodes are not in strictly increasing order"),
            Error::RightLeaning => write!(f, "right link is red while its left sibling is not"),
            Error::DoubleRed => write!(f, "path contains two consecutive red links"),
            Error::Unbalanced => write!(f, "paths from the root cross different numbers of black links"),
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
