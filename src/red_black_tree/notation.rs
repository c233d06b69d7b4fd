//! Bracketed tree notation used to build fixtures and assert shapes in tests.
//!
//! A subtree with children is written `(left,right)name`, a leaf as `name`, and either child
//! may be left empty. Every name is a single character that may be followed by `r` or `b` to
//! give its color. The whole tree ends with `;` and the empty tree is `();`. A name without a
//! color is always followed by `,`, `)` or `;`, never by another letter, since a following `r`
//! or `b` would be read as its color.

use crate::red_black_tree::node::{Color, Links, Node};
use crate::red_black_tree::tree::Tree;
use std::cmp::Ordering;
use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug)]
pub struct Letter {
    pub key: char,
    pub tag: u32,
    links: Links<Letter>,
}

impl Letter {
    pub fn new(key: char) -> Self {
        Letter::with_tag(key, 0)
    }

    pub fn with_tag(key: char, tag: u32) -> Self {
        Letter {
            key,
            tag,
            links: Links::new(),
        }
    }
}

impl Node for Letter {
    fn compare(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }

    fn adopt(&mut self, other: Self) {
        self.tag = other.tag;
    }

    fn links(&self) -> &Links<Self> {
        &self.links
    }

    fn links_mut(&mut self) -> &mut Links<Self> {
        &mut self.links
    }
}

// Nodes without a color suffix are black.
pub fn parse(desc: &str) -> Tree<Letter> {
    if desc == "();" {
        return None;
    }
    let mut chars = desc.chars().peekable();
    let tree = parse_node(&mut chars);
    assert_eq!(chars.next(), Some(';'), "Expected `;` at the end of `{}`.", desc);
    tree
}

fn parse_subtree(chars: &mut Peekable<Chars<'_>>) -> Tree<Letter> {
    match chars.peek() {
        Some(',') | Some(')') => None,
        _ => parse_node(chars),
    }
}

fn parse_node(chars: &mut Peekable<Chars<'_>>) -> Tree<Letter> {
    let (left, right) = if chars.peek() == Some(&'(') {
        chars.next();
        let left = parse_subtree(chars);
        assert_eq!(chars.next(), Some(','));
        let right = parse_subtree(chars);
        assert_eq!(chars.next(), Some(')'));
        (left, right)
    } else {
        (None, None)
    };

    let key = chars.next().expect("Expected a node name.");
    let color = match chars.peek() {
        Some('r') => {
            chars.next();
            Color::Red
        },
        Some('b') => {
            chars.next();
            Color::Black
        },
        _ => Color::Black,
    };

    let mut node = Box::new(Letter::new(key));
    {
        let links = node.links_mut();
        links.left = left;
        links.right = right;
        links.color = color;
    }
    Some(node)
}

pub fn describe(tree: &Tree<Letter>, colors: bool) -> String {
    match tree {
        None => String::from("();"),
        Some(ref node) => {
            let mut ret = String::new();
            describe_node(node, colors, &mut ret);
            ret.push(';');
            ret
        },
    }
}

fn describe_node(node: &Letter, colors: bool, ret: &mut String) {
    let links = node.links();
    let has_children = !links.is_empty();
    if has_children {
        ret.push('(');
    }
    if let Some(left) = links.left() {
        describe_node(left, colors, ret);
    }
    if has_children {
        ret.push(',');
    }
    if let Some(right) = links.right() {
        describe_node(right, colors, ret);
    }
    if has_children {
        ret.push(')');
    }

    ret.push(node.key);
    if colors {
        ret.push(match links.color() {
            Color::Red => 'r',
            Color::Black => 'b',
        });
    }
}

#[cfg(test)]
mod tests {
    use super::{describe, parse};

    #[test]
    fn test_empty() {
        assert!(parse("();").is_none());
        assert_eq!(describe(&None, false), "();");
    }

    #[test]
    fn test_parse_describe_symmetric() {
        for desc in &["();", "b;", "(a,)b;", "((a,c)b,(e,g)f)d;"] {
            assert_eq!(describe(&parse(desc), false), *desc);
        }
    }

    #[test]
    fn test_color_letters_as_names() {
        assert_eq!(describe(&parse("(r,b)c;"), false), "(r,b)c;");
        assert_eq!(describe(&parse("(rb,br)cb;"), true), "(rb,br)cb;");
    }

    #[test]
    fn test_colors() {
        let desc = "((br,)cb,eb)db;";
        assert_eq!(describe(&parse(desc), true), desc);
        assert_eq!(describe(&parse(desc), false), "((b,)c,e)d;");
    }
}
