//! Structure-preserving filtering and pruning.
//!
//! Filtering only ever drops leaves: directories and external symlinks stay
//! even when all of their children go. [`prune`] is the separate step that
//! removes directory-like nodes left empty.
//!
//! An internal symlink survives filtering only if the node it resolves to in
//! the *unfiltered* tree would survive the same filter. The link itself is
//! kept as-is, never replaced by its target.

use crate::types::{Node, SymlinkKind};
use crate::walk::walk;
use std::convert::Infallible;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

/// Filters and maps file payloads with a fallible function.
///
/// `f` runs on payloads left to right in child order; the first error aborts
/// the whole operation. `f` may also run on the targets of internal links to
/// decide whether those links survive. Returns `Ok(None)` only when the root
/// itself is dropped.
pub fn try_filter_map<A, B, E, F>(tree: &Node<A>, mut f: F) -> Result<Option<Node<B>>, E>
where
    F: FnMut(&A) -> Result<Option<B>, E>,
{
    Filter {
        root: tree,
        f: &mut f,
        _out: PhantomData,
    }
    .node(tree)
}

/// Filters and maps file payloads.
pub fn filter_map<A, B, F>(tree: &Node<A>, mut f: F) -> Option<Node<B>>
where
    F: FnMut(&A) -> Option<B>,
{
    match try_filter_map(tree, |a| Ok::<_, Infallible>(f(a))) {
        Ok(node) => node,
        Err(never) => match never {},
    }
}

/// Keeps the files whose payload satisfies `predicate`.
pub fn filter<A, F>(tree: &Node<A>, mut predicate: F) -> Option<Node<A>>
where
    A: Clone,
    F: FnMut(&A) -> bool,
{
    filter_map(tree, |a| predicate(a).then(|| a.clone()))
}

/// Drops files whose payload is `None` and unwraps the rest.
pub fn flatten<A: Clone>(tree: &Node<Option<A>>) -> Option<Node<A>> {
    filter_map(tree, |a| a.clone())
}

/// Removes directories and external symlinks that have no children left
/// after pruning their own children. Files and internal symlinks are kept.
pub fn prune<A: Clone>(tree: &Node<A>) -> Option<Node<A>> {
    match tree {
        Node::Directory { path, children } => {
            let children = prune_all(children);
            (!children.is_empty()).then(|| Node::Directory {
                path: path.clone(),
                children,
            })
        }
        Node::Symlink {
            path,
            kind: SymlinkKind::External { target, children },
        } => {
            let children = prune_all(children);
            (!children.is_empty()).then(|| Node::Symlink {
                path: path.clone(),
                kind: SymlinkKind::External {
                    target: target.clone(),
                    children,
                },
            })
        }
        Node::File { .. }
        | Node::Symlink {
            kind: SymlinkKind::Internal { .. },
            ..
        } => Some(tree.clone()),
    }
}

fn prune_all<A: Clone>(children: &[Node<A>]) -> Vec<Node<A>> {
    children.iter().filter_map(prune).collect()
}

struct Filter<'t, 'f, A, B, E, F> {
    root: &'t Node<A>,
    f: &'f mut F,
    _out: PhantomData<fn() -> Result<B, E>>,
}

impl<A, B, E, F> Filter<'_, '_, A, B, E, F>
where
    F: FnMut(&A) -> Result<Option<B>, E>,
{
    fn node(&mut self, node: &Node<A>) -> Result<Option<Node<B>>, E> {
        Ok(match node {
            Node::Directory { path, children } => Some(Node::Directory {
                path: path.clone(),
                children: self.children(children)?,
            }),
            Node::File { path, value } => (self.f)(value)?.map(|value| Node::File {
                path: path.clone(),
                value,
            }),
            Node::Symlink {
                path,
                kind: SymlinkKind::External { target, children },
            } => Some(Node::Symlink {
                path: path.clone(),
                kind: SymlinkKind::External {
                    target: target.clone(),
                    children: self.children(children)?,
                },
            }),
            Node::Symlink {
                path,
                kind: SymlinkKind::Internal { target, resolved },
            } => {
                let mut chain = Vec::new();
                self.survives(resolved, &mut chain)?.then(|| Node::Symlink {
                    path: path.clone(),
                    kind: SymlinkKind::Internal {
                        target: target.clone(),
                        resolved: resolved.clone(),
                    },
                })
            }
        })
    }

    fn children(&mut self, children: &[Node<A>]) -> Result<Vec<Node<B>>, E> {
        let mut kept = Vec::with_capacity(children.len());
        for child in children {
            if let Some(node) = self.node(child)? {
                kept.push(node);
            }
        }
        Ok(kept)
    }

    /// Whether the node `resolved` names in the unfiltered tree would be
    /// kept by this filter. Directory-like nodes are always kept, so only
    /// files and chains of internal links need evaluating. `chain` holds the
    /// links followed so far; a repeat is unresolvable.
    fn survives(&mut self, resolved: &Path, chain: &mut Vec<PathBuf>) -> Result<bool, E> {
        if chain.iter().any(|seen| seen == resolved) {
            return Ok(false);
        }
        chain.push(resolved.to_path_buf());
        let root = self.root;
        match walk(resolved, root) {
            None => Ok(false),
            Some(Node::File { value, .. }) => Ok((self.f)(value)?.is_some()),
            Some(Node::Symlink {
                kind: SymlinkKind::Internal { resolved, .. },
                ..
            }) => self.survives(resolved, chain),
            Some(_) => Ok(true),
        }
    }
}
