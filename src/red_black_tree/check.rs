use crate::red_black_tree::node::{Color, Node};
use crate::red_black_tree::tree::{self, Tree};
use crate::red_black_tree::{Error, Result};
use std::cmp::Ordering;

pub fn is_bst<T>(tree: &Tree<T>) -> bool
where
    T: Node,
{
    is_bst_between(tree, None, None)
}

// Every node must lie strictly between `min` and `max` when they are present.
fn is_bst_between<'a, T>(tree: &'a Tree<T>, min: Option<&'a T>, max: Option<&'a T>) -> bool
where
    T: Node,
{
    match tree {
        None => true,
        Some(ref node) => {
            if let Some(min) = min {
                if node.compare(min) != Ordering::Greater {
                    return false;
                }
            }
            if let Some(max) = max {
                if node.compare(max) != Ordering::Less {
                    return false;
                }
            }
            let node: &T = node;
            is_bst_between(&node.links().left, min, Some(node))
                && is_bst_between(&node.links().right, Some(node), max)
        },
    }
}

pub fn is_left_leaning<T>(tree: &Tree<T>) -> bool
where
    T: Node,
{
    match tree {
        None => true,
        Some(ref node) => {
            let links = node.links();
            !(tree::is_red(&links.right) && !tree::is_red(&links.left))
                && is_left_leaning(&links.left)
                && is_left_leaning(&links.right)
        },
    }
}

pub fn has_no_double_red<T>(tree: &Tree<T>) -> bool
where
    T: Node,
{
    match tree {
        None => true,
        Some(ref node) => {
            let links = node.links();
            if links.color == Color::Red && (tree::is_red(&links.left) || tree::is_red(&links.right)) {
                return false;
            }
            has_no_double_red(&links.left) && has_no_double_red(&links.right)
        },
    }
}

// Returns `None` if two paths from the root cross a different number of black links.
pub fn black_height<T>(tree: &Tree<T>) -> Option<usize>
where
    T: Node,
{
    match tree {
        None => Some(0),
        Some(ref node) => {
            let links = node.links();
            let left_height = black_height(&links.left)?;
            let right_height = black_height(&links.right)?;
            if left_height != right_height {
                return None;
            }
            match links.color {
                Color::Black => Some(left_height + 1),
                Color::Red => Some(left_height),
            }
        },
    }
}

pub fn height<T>(tree: &Tree<T>) -> usize
where
    T: Node,
{
    match tree {
        None => 0,
        Some(ref node) => 1 + height(&node.links().left).max(height(&node.links().right)),
    }
}

pub fn validate<T>(tree: &Tree<T>) -> Result<()>
where
    T: Node,
{
    if tree::is_red(tree) {
        return Err(Error::RedRoot);
    }
    if !is_bst(tree) {
        return Err(Error::Unordered);
    }
    if !is_left_leaning(tree) {
        return Err(Error::RightLeaning);
    }
    if !has_no_double_red(tree) {
        return Err(Error::DoubleRed);
    }
    if black_height(tree).is_none() {
        return Err(Error::Unbalanced);
    }
    Ok(())
}
