//! ASCII rendering of a scanned tree.

use crate::types::{Node, SymlinkKind};
use std::io::{self, Write};

const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// A tree with its labels already computed, ready for drawing.
struct Labeled {
    label: String,
    children: Vec<Labeled>,
}

/// Renders `tree` in the style of the `tree` command.
///
/// Each node is labelled with its basename and symlinks additionally show
/// their literal target, e.g. `A -> ../A`. Every line ends with a newline.
pub fn render<A>(tree: &Node<A>) -> String {
    render_with(tree, |name, _| name.to_string())
}

/// Like [`render`], but file lines are labelled by `label_file(name, value)`.
pub fn render_with<A, F>(tree: &Node<A>, mut label_file: F) -> String
where
    F: FnMut(&str, &A) -> String,
{
    let labeled = label(tree, &mut label_file);
    let mut out = String::new();
    out.push_str(&labeled.label);
    out.push('\n');
    draw_children(&labeled.children, "", &mut out);
    out
}

/// Writes [`render`]'s output to standard output.
pub fn print_tree<A>(tree: &Node<A>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    handle.write_all(render(tree).as_bytes())?;
    handle.flush()
}

fn label<A, F>(node: &Node<A>, label_file: &mut F) -> Labeled
where
    F: FnMut(&str, &A) -> String,
{
    let name = node.name();
    let (text, children) = match node {
        Node::Directory { children, .. } => (name.into_owned(), children.as_slice()),
        Node::File { value, .. } => (label_file(&*name, value), &[][..]),
        Node::Symlink { kind, .. } => match kind {
            SymlinkKind::Internal { target, .. } => (format!("{} -> {}", name, target), &[][..]),
            SymlinkKind::External { target, children } => {
                (format!("{} -> {}", name, target), children.as_slice())
            }
        },
    };
    Labeled {
        label: text,
        children: children.iter().map(|c| label(c, label_file)).collect(),
    }
}

fn draw_children(children: &[Labeled], prefix: &str, out: &mut String) {
    for (i, child) in children.iter().enumerate() {
        let is_last = i + 1 == children.len();
        let (connector, continuation) = if is_last {
            (LAST_BRANCH, SPACE)
        } else {
            (BRANCH, VERTICAL)
        };
        out.push_str(prefix);
        out.push_str(connector);
        out.push_str(&child.label);
        out.push('\n');
        draw_children(&child.children, &format!("{}{}", prefix, continuation), out);
    }
}
