use crate::types::{Node, SymlinkKind};
use crate::walk::walk;

/// Replaces symlinks by what they point at, one level deep.
///
/// External links become plain directories holding their listed contents.
/// Internal links are looked up in `tree` and replaced by a copy of the node
/// found there; links that cannot be resolved stay as they are. Internal links
/// inside a substituted subtree are left untouched.
pub fn dereference_one_level<A: Clone>(tree: &Node<A>) -> Node<A> {
    substitute(tree, tree)
}

fn substitute<A: Clone>(node: &Node<A>, root: &Node<A>) -> Node<A> {
    match node {
        Node::Directory { path, children }
        | Node::Symlink {
            path,
            kind: SymlinkKind::External { children, .. },
        } => Node::Directory {
            path: path.clone(),
            children: children.iter().map(|c| substitute(c, root)).collect(),
        },
        Node::File { .. } => node.clone(),
        Node::Symlink {
            kind: SymlinkKind::Internal { resolved, .. },
            ..
        } => walk(resolved, root).unwrap_or(node).clone(),
    }
}
