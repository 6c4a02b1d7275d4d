//! Tree model for parsed ASCII schematic documents.
//!
//! A document is an unnamed root [`List`] whose items are [`Node`]s: either
//! further named lists or scalar [`Atom`]s. Trees are built once by the parser
//! and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

pub mod list;
pub mod value;
pub mod walk;

pub use list::{FindAll, List};
pub use value::Atom;
pub use walk::{breadth_first, depth_first, BreadthFirst, DepthFirst};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// One child of a [`List`].
///
/// Serialized without a variant wrapper: a list is a `name`/`items` map and an
/// atom keeps its own kind tag. YAML cannot nest enum tags, so a tagged `Node`
/// would not dump.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Node {
    List(List),
    Atom(Atom),
}

/// A borrowed view of a node, yielded by traversals.
///
/// Lets a bare `&List` (such as a document root) be walked without wrapping it
/// in a [`Node`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NodeRef<'a> {
    List(&'a List),
    Atom(&'a Atom),
}

// ============================================================================
// PUBLIC API IMPLEMENTATION
// ============================================================================

impl Node {
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            Node::Atom(_) => None,
        }
    }

    pub fn as_atom(&self) -> Option<&Atom> {
        match self {
            Node::Atom(atom) => Some(atom),
            Node::List(_) => None,
        }
    }

    /// The list name, if this node is a named list.
    pub fn name(&self) -> Option<&str> {
        self.as_list().and_then(List::name)
    }

    /// `"List"` or the atom's kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::List(_) => "List",
            Node::Atom(atom) => atom.kind(),
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        self.as_atom().and_then(Atom::as_i64)
    }

    pub fn as_f64(&self) -> Option<f64> {
        self.as_atom().and_then(Atom::as_f64)
    }

    pub fn as_bool(&self) -> Option<bool> {
        self.as_atom().and_then(Atom::as_bool)
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_atom().and_then(Atom::as_str)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::List(list) => write!(f, "{}", list),
            Node::Atom(atom) => write!(f, "{}", atom),
        }
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Node::List(list)
    }
}

impl From<Atom> for Node {
    fn from(atom: Atom) -> Self {
        Node::Atom(atom)
    }
}

impl<'a> NodeRef<'a> {
    pub fn as_list(self) -> Option<&'a List> {
        match self {
            NodeRef::List(list) => Some(list),
            NodeRef::Atom(_) => None,
        }
    }

    pub fn as_atom(self) -> Option<&'a Atom> {
        match self {
            NodeRef::Atom(atom) => Some(atom),
            NodeRef::List(_) => None,
        }
    }

    pub fn name(self) -> Option<&'a str> {
        self.as_list().and_then(List::name)
    }

    pub fn kind(self) -> &'static str {
        match self {
            NodeRef::List(_) => "List",
            NodeRef::Atom(atom) => atom.kind(),
        }
    }
}

impl<'a> From<&'a Node> for NodeRef<'a> {
    fn from(node: &'a Node) -> Self {
        match node {
            Node::List(list) => NodeRef::List(list),
            Node::Atom(atom) => NodeRef::Atom(atom),
        }
    }
}

impl<'a> From<&'a List> for NodeRef<'a> {
    fn from(list: &'a List) -> Self {
        NodeRef::List(list)
    }
}

impl<'a> From<&'a Atom> for NodeRef<'a> {
    fn from(atom: &'a Atom) -> Self {
        NodeRef::Atom(atom)
    }
}

impl fmt::Display for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeRef::List(list) => write!(f, "{}", list),
            NodeRef::Atom(atom) => write!(f, "{}", atom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse_str;

    const DOC: &str = "ACCEL_ASCII (schDesignHeader (titleSheet 75%) (isVisible True) ())";

    #[test]
    fn yaml_dump_keeps_atom_kinds() {
        let doc = parse_str(DOC).unwrap();
        let yaml = serde_yaml::to_string(&doc).unwrap();
        assert!(yaml.contains("!Symbol ACCEL_ASCII"), "{yaml}");
        assert!(yaml.contains("name: titleSheet"), "{yaml}");
        assert!(yaml.contains("!Percent 75.0"), "{yaml}");
        assert!(yaml.contains("!Boolean true"), "{yaml}");
    }

    #[test]
    fn json_dump_reads_back() {
        let doc = parse_str(DOC).unwrap();
        let json = serde_json::to_string(&doc).unwrap();
        assert!(json.contains(r#"{"Percent":75.0}"#), "{json}");
        let back: List = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
