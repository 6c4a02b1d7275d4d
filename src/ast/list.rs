use super::walk::BreadthFirst;
use super::{Node, NodeRef};
use crate::errors::QueryError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;

/// A named, ordered sequence of child nodes.
///
/// Every parenthesized group in a document becomes a `List` whose name is the
/// group's first bare token. The document root is the only unnamed list.
/// Items keep their source order and may share names.
///
/// # Examples
///
/// ```rust
/// use dipascii::parse_str;
/// let doc = parse_str("(pt 10 -2.5) (pt 3 4)").unwrap();
/// assert_eq!(doc.findall("pt", false).count(), 2);
/// let pt = doc.find("pt", false).unwrap();
/// assert_eq!(pt.numeric_pair(), Some((10.0, -2.5)));
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct List {
    name: Option<String>,
    items: Vec<Node>,
}

/// Lazy iterator over the lists matched by [`List::findall`].
pub struct FindAll<'a, 'n> {
    name: &'n str,
    scan: Scan<'a>,
}

enum Scan<'a> {
    Children(std::slice::Iter<'a, Node>),
    Descendants(BreadthFirst<'a>),
}

impl List {
    pub fn new(name: Option<String>, items: Vec<Node>) -> Self {
        Self { name, items }
    }

    /// A parenthesized group.
    pub fn named(name: impl Into<String>, items: Vec<Node>) -> Self {
        Self::new(Some(name.into()), items)
    }

    /// An unnamed document root.
    pub fn root(items: Vec<Node>) -> Self {
        Self::new(None, items)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Node> {
        self.items.iter()
    }

    pub fn first(&self) -> Option<&Node> {
        self.items.first()
    }

    pub fn nth(&self, index: usize) -> Option<&Node> {
        self.items.get(index)
    }

    // ------------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------------

    /// Lists named `name` among the direct children, or, with `descendants`,
    /// anywhere in the breadth-first walk of this list (itself included).
    pub fn findall<'a, 'n>(&'a self, name: &'n str, descendants: bool) -> FindAll<'a, 'n> {
        let scan = if descendants {
            Scan::Descendants(BreadthFirst::new(NodeRef::List(self)))
        } else {
            Scan::Children(self.items.iter())
        };
        FindAll { name, scan }
    }

    pub fn find(&self, name: &str, descendants: bool) -> Option<&List> {
        self.findall(name, descendants).next()
    }

    /// The single item of the direct child `(name value)`.
    ///
    /// Fails with [`QueryError::MissingAttribute`] when there is no such
    /// child and [`QueryError::MalformedAttribute`] when it does not hold
    /// exactly one item.
    pub fn get(&self, name: &str) -> Result<&Node, QueryError> {
        self.try_get(name)?
            .ok_or_else(|| QueryError::MissingAttribute { name: name.into() })
    }

    /// Like [`List::get`], returning `default` when the child is missing.
    pub fn get_or<'a>(&'a self, name: &str, default: &'a Node) -> Result<&'a Node, QueryError> {
        Ok(self.try_get(name)?.unwrap_or(default))
    }

    /// Like [`List::get`], with a missing child reported as `Ok(None)`.
    pub fn try_get(&self, name: &str) -> Result<Option<&Node>, QueryError> {
        let Some(attr) = self.find(name, false) else {
            return Ok(None);
        };
        match attr.items.as_slice() {
            [value] => Ok(Some(value)),
            items => Err(QueryError::MalformedAttribute {
                name: name.into(),
                found: items.len(),
            }),
        }
    }

    pub fn get_i64(&self, name: &str) -> Result<i64, QueryError> {
        let value = self.get(name)?;
        value
            .as_i64()
            .ok_or_else(|| type_mismatch(name, "Integer", value))
    }

    pub fn get_f64(&self, name: &str) -> Result<f64, QueryError> {
        let value = self.get(name)?;
        value
            .as_f64()
            .ok_or_else(|| type_mismatch(name, "number", value))
    }

    pub fn get_str(&self, name: &str) -> Result<&str, QueryError> {
        let value = self.get(name)?;
        value
            .as_str()
            .ok_or_else(|| type_mismatch(name, "Text or Symbol", value))
    }

    pub fn get_bool(&self, name: &str) -> Result<bool, QueryError> {
        let value = self.get(name)?;
        value
            .as_bool()
            .ok_or_else(|| type_mismatch(name, "Boolean", value))
    }

    // ------------------------------------------------------------------------
    // Shape helpers
    // ------------------------------------------------------------------------

    /// `(x, y)` for a list of exactly two numeric atoms, such as `(pt 1 2.5)`.
    pub fn numeric_pair(&self) -> Option<(f64, f64)> {
        match self.items.as_slice() {
            [x, y] => Some((x.as_f64()?, y.as_f64()?)),
            _ => None,
        }
    }

    /// The first item as a string, for definitions like `(symbolDef "R1" ...)`.
    pub fn key(&self) -> Option<&str> {
        self.first().and_then(Node::as_str)
    }

    /// Direct children named `name`, indexed by [`List::key`].
    ///
    /// Children without a key are skipped; of several children with the same
    /// key, the last one wins.
    pub fn keyed(&self, name: &str) -> BTreeMap<&str, &List> {
        let mut index = BTreeMap::new();
        for child in self.findall(name, false) {
            if let Some(key) = child.key() {
                index.insert(key, child);
            }
        }
        index
    }
}

fn type_mismatch(name: &str, expected: &'static str, found: &Node) -> QueryError {
    QueryError::TypeMismatch {
        name: name.into(),
        expected,
        found: found.kind(),
    }
}

impl<'a> Iterator for FindAll<'a, '_> {
    type Item = &'a List;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let candidate = match &mut self.scan {
                Scan::Children(children) => NodeRef::from(children.next()?),
                Scan::Descendants(walk) => walk.next()?,
            };
            if let NodeRef::List(list) = candidate {
                if list.name() == Some(self.name) {
                    return Some(list);
                }
            }
        }
    }
}

impl Index<usize> for List {
    type Output = Node;

    fn index(&self, index: usize) -> &Node {
        &self.items[index]
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = std::slice::Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({}, [", self.name().unwrap_or("<root>"))?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", item)?;
        }
        write!(f, "])")
    }
}
