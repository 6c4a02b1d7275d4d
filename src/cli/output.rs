//! Handles all user-facing output for the CLI.
//!
//! Everything writes through [`WriteColor`] so the same code renders to a
//! colored terminal or to a plain buffer in tests.

use crate::ast::{depth_first, Atom, List, Node, NodeRef};
use crate::format::Format;
use std::io;
use termcolor::{Color, ColorSpec, WriteColor};

const INDENT: &str = "  ";

// ============================================================================
// OUTLINE
// ============================================================================

/// Writes `list` as an indented outline.
///
/// A named list prints its name followed by any leading atoms on one line;
/// the remaining items go on their own lines one level deeper. The unnamed
/// root prints only its items.
pub fn write_outline(out: &mut impl WriteColor, list: &List) -> io::Result<()> {
    match list.name() {
        Some(_) => write_list(out, list, 0),
        None => write_items(out, list.items(), 0),
    }
}

fn write_list(out: &mut impl WriteColor, list: &List, depth: usize) -> io::Result<()> {
    write!(out, "{}", INDENT.repeat(depth))?;
    out.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    match list.name() {
        Some("") => write!(out, "()")?,
        Some(name) => write!(out, "{}", name)?,
        None => write!(out, "<root>")?,
    }
    out.reset()?;

    let leading = list
        .items()
        .iter()
        .take_while(|item| matches!(item, Node::Atom(_)))
        .count();
    for item in &list.items()[..leading] {
        if let Node::Atom(atom) = item {
            write!(out, " ")?;
            write_atom(out, atom)?;
        }
    }
    writeln!(out)?;
    write_items(out, &list.items()[leading..], depth + 1)
}

fn write_items(out: &mut impl WriteColor, items: &[Node], depth: usize) -> io::Result<()> {
    for item in items {
        match item {
            Node::List(child) => write_list(out, child, depth)?,
            Node::Atom(atom) => {
                write!(out, "{}", INDENT.repeat(depth))?;
                write_atom(out, atom)?;
                writeln!(out)?;
            }
        }
    }
    Ok(())
}

pub fn write_atom(out: &mut impl WriteColor, atom: &Atom) -> io::Result<()> {
    let color = match atom {
        Atom::Integer(_) | Atom::Float(_) | Atom::Percent(_) => Some(Color::Yellow),
        Atom::Boolean(_) => Some(Color::Magenta),
        Atom::Text(_) => Some(Color::Green),
        Atom::Symbol(_) => None,
    };
    out.set_color(ColorSpec::new().set_fg(color))?;
    write!(out, "{}", atom)?;
    out.reset()
}

/// Writes a single node: atoms inline, lists as an outline.
pub fn write_node(out: &mut impl WriteColor, node: &Node) -> io::Result<()> {
    match node {
        Node::List(list) => write_list(out, list, 0),
        Node::Atom(atom) => {
            write_atom(out, atom)?;
            writeln!(out)
        }
    }
}

// ============================================================================
// SUMMARY
// ============================================================================

/// Node counts for `info`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub lists: usize,
    pub atoms: usize,
    pub top_level: Vec<String>,
}

impl Summary {
    pub fn of(doc: &List) -> Self {
        let mut summary = Summary::default();
        for node in depth_first(doc) {
            match node {
                NodeRef::List(_) => summary.lists += 1,
                NodeRef::Atom(_) => summary.atoms += 1,
            }
        }
        // The root itself is not a group of the document.
        summary.lists -= 1;
        summary.top_level = doc
            .iter()
            .filter_map(Node::name)
            .map(str::to_string)
            .collect();
        summary
    }
}

pub fn write_info(out: &mut impl WriteColor, format: Format, summary: &Summary) -> io::Result<()> {
    out.set_color(ColorSpec::new().set_bold(true))?;
    write!(out, "format:")?;
    out.reset()?;
    writeln!(out, " {}", format)?;
    writeln!(out, "lists:  {}", summary.lists)?;
    writeln!(out, "atoms:  {}", summary.atoms)?;
    if !summary.top_level.is_empty() {
        writeln!(out, "top-level: {}", summary.top_level.join(", "))?;
    }
    Ok(())
}
