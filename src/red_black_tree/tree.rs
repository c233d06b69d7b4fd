use crate::red_black_tree::node::{Color, Node};
use log::{debug, trace};
use std::cmp::Ordering;

pub type Tree<T> = Option<Box<T>>;

pub fn is_red<T>(tree: &Tree<T>) -> bool
where
    T: Node,
{
    match tree {
        None => false,
        Some(ref node) => node.links().color == Color::Red,
    }
}

// precondition: both children exist
pub fn flip_colors<T>(node: &mut T)
where
    T: Node,
{
    let links = node.links_mut();
    assert!(
        links.left.is_some() && links.right.is_some(),
        "Expected both child nodes to be `Some` for a color flip."
    );
    trace!("Flipping colors of a {:?} node", links.color);
    links.color = links.color.flip();
    if let Some(ref mut child) = links.left {
        let child_links = child.links_mut();
        child_links.color = child_links.color.flip();
    }
    if let Some(ref mut child) = links.right {
        let child_links = child.links_mut();
        child_links.color = child_links.color.flip();
    }
}

pub fn rotate_left<T>(mut node: Box<T>) -> Box<T>
where
    T: Node,
{
    let mut child = node
        .links_mut()
        .right
        .take()
        .expect("Expected right child node to be `Some`.");
    trace!("Rotating left");
    node.links_mut().right = child.links_mut().left.take();
    child.links_mut().color = node.links().color;
    node.links_mut().color = Color::Red;
    child.links_mut().left = Some(node);
    child
}

pub fn rotate_right<T>(mut node: Box<T>) -> Box<T>
where
    T: Node,
{
    let mut child = node
        .links_mut()
        .left
        .take()
        .expect("Expected left child node to be `Some`.");
    trace!("Rotating right");
    node.links_mut().left = child.links_mut().right.take();
    child.links_mut().color = node.links().color;
    node.links_mut().color = Color::Red;
    child.links_mut().right = Some(node);
    child
}

fn is_double_red_left<T>(node: &T) -> bool
where
    T: Node,
{
    match node.links().left {
        Some(ref child) => child.links().color == Color::Red && is_red(&child.links().left),
        None => false,
    }
}

// Returns the root of the subtree after `new_node` has been placed and the subtree rebalanced.
pub fn insert<T>(tree: Tree<T>, mut new_node: Box<T>) -> Box<T>
where
    T: Node,
{
    let mut node = match tree {
        Some(node) => node,
        None => {
            new_node.links_mut().color = Color::Red;
            return new_node;
        },
    };

    if is_red(&node.links().left) && is_red(&node.links().right) {
        flip_colors(&mut *node);
    }

    match new_node.compare(&node) {
        Ordering::Equal => {
            debug!("Updating an existing node in place");
            node.adopt(*new_node);
        },
        Ordering::Less => {
            let left = node.links_mut().left.take();
            node.links_mut().left = Some(insert(left, new_node));
        },
        Ordering::Greater => {
            let right = node.links_mut().right.take();
            node.links_mut().right = Some(insert(right, new_node));
        },
    }

    if is_red(&node.links().right) && !is_red(&node.links().left) {
        node = rotate_left(node);
    }

    if is_double_red_left(&*node) {
        node = rotate_right(node);
    }

    node
}

pub fn search_by<T, F>(tree: &Tree<T>, mut cmp: F) -> Option<&T>
where
    T: Node,
    F: FnMut(&T) -> Ordering,
{
    let mut curr = tree.as_deref();
    while let Some(node) = curr {
        curr = match cmp(node) {
            Ordering::Less => node.links().left.as_deref(),
            Ordering::Greater => node.links().right.as_deref(),
            Ordering::Equal => return Some(node),
        };
    }
    None
}

pub fn len<T>(tree: &Tree<T>) -> usize
where
    T: Node,
{
    match tree {
        None => 0,
        Some(ref node) => len(&node.links().left) + len(&node.links().right) + 1,
    }
}
