//! Path lookup inside a built tree.

use crate::types::{Node, SymlinkKind, base_name};
use std::ffi::OsStr;
use std::path::Path;

/// Finds the node at `path`, whose first segment names `tree` itself.
///
/// Segments are compared with node basenames; `..` has no special meaning.
/// External symlinks are routed through like directories, internal ones only
/// match as the final segment. An empty path has no segment to name the
/// root with and matches nothing.
pub fn walk<'t, A>(path: impl AsRef<Path>, tree: &'t Node<A>) -> Option<&'t Node<A>> {
    let segments = segments(path.as_ref());
    walk_segments(&segments, tree)
}

/// Like [`walk`], but `path` is relative to the contents of `tree`.
pub fn walk_from_contents<'t, A>(
    path: impl AsRef<Path>,
    tree: &'t Node<A>,
) -> Option<&'t Node<A>> {
    let segments = segments(path.as_ref());
    tree.children()?
        .iter()
        .find_map(|child| walk_segments(&segments, child))
}

fn segments(path: &Path) -> Vec<&OsStr> {
    path.components().map(|c| c.as_os_str()).collect()
}

fn walk_segments<'t, A>(segments: &[&OsStr], node: &'t Node<A>) -> Option<&'t Node<A>> {
    let (first, rest) = segments.split_first()?;
    if base_name(node.path()) != *first {
        return None;
    }
    if rest.is_empty() {
        return Some(node);
    }
    match node {
        Node::Directory { children, .. }
        | Node::Symlink {
            kind: SymlinkKind::External { children, .. },
            ..
        } => children.iter().find_map(|child| walk_segments(rest, child)),
        Node::File { .. }
        | Node::Symlink {
            kind: SymlinkKind::Internal { .. },
            ..
        } => None,
    }
}
