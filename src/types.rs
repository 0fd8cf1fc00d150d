use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// A node of a scanned directory hierarchy.
///
/// The tree is generic over the leaf payload `A`. Trees produced by the
/// builder carry each file's own path as its payload; use [`Node::map`] to
/// replace it with something else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node<A> {
    /// A real directory and its entries, in listing order.
    Directory {
        path: PathBuf,
        children: Vec<Node<A>>,
    },
    /// A file leaf.
    File { path: PathBuf, value: A },
    /// A symbolic link, classified by where it points.
    Symlink { path: PathBuf, kind: SymlinkKind<A> },
}

/// How a symbolic link relates to the hierarchy being scanned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "link", rename_all = "snake_case")]
pub enum SymlinkKind<A> {
    /// The link leads back into a path already visited on the current branch.
    ///
    /// `resolved` starts with the scan root's basename, e.g. `test/A/a`, and
    /// can be looked up with [`crate::walk`] against the full tree.
    Internal { target: String, resolved: PathBuf },
    /// The link leads somewhere not yet visited; its contents were listed as
    /// if it were a directory.
    External {
        target: String,
        children: Vec<Node<A>>,
    },
}

impl<A> Node<A> {
    /// The path used to reach this node during the scan.
    pub fn path(&self) -> &Path {
        match self {
            Node::Directory { path, .. } | Node::File { path, .. } | Node::Symlink { path, .. } => {
                path
            }
        }
    }

    /// The last component of [`Node::path`].
    pub fn name(&self) -> Cow<'_, str> {
        base_name(self.path()).to_string_lossy()
    }

    /// Children of a directory or an external symlink; `None` for leaves.
    pub fn children(&self) -> Option<&[Node<A>]> {
        match self {
            Node::Directory { children, .. }
            | Node::Symlink {
                kind: SymlinkKind::External { children, .. },
                ..
            } => Some(children),
            _ => None,
        }
    }

    /// Applies `f` to every file payload, keeping the shape of the tree.
    pub fn map<B, F>(&self, mut f: F) -> Node<B>
    where
        F: FnMut(&A) -> B,
    {
        self.map_inner(&mut f)
    }

    fn map_inner<B, F>(&self, f: &mut F) -> Node<B>
    where
        F: FnMut(&A) -> B,
    {
        match self {
            Node::Directory { path, children } => Node::Directory {
                path: path.clone(),
                children: children.iter().map(|c| c.map_inner(f)).collect(),
            },
            Node::File { path, value } => Node::File {
                path: path.clone(),
                value: f(value),
            },
            Node::Symlink { path, kind } => Node::Symlink {
                path: path.clone(),
                kind: match kind {
                    SymlinkKind::Internal { target, resolved } => SymlinkKind::Internal {
                        target: target.clone(),
                        resolved: resolved.clone(),
                    },
                    SymlinkKind::External { target, children } => SymlinkKind::External {
                        target: target.clone(),
                        children: children.iter().map(|c| c.map_inner(f)).collect(),
                    },
                },
            },
        }
    }

    /// Folds over file payloads in pre-order.
    pub fn fold<T, F>(&self, init: T, mut f: F) -> T
    where
        F: FnMut(T, &A) -> T,
    {
        self.fold_inner(init, &mut f)
    }

    fn fold_inner<T, F>(&self, acc: T, f: &mut F) -> T
    where
        F: FnMut(T, &A) -> T,
    {
        match self {
            Node::File { value, .. } => f(acc, value),
            _ => self
                .children()
                .unwrap_or_default()
                .iter()
                .fold(acc, |acc, child| child.fold_inner(acc, f)),
        }
    }

    /// All file payloads, in pre-order.
    pub fn values(&self) -> Vec<&A> {
        let mut out = Vec::new();
        self.collect_values(&mut out);
        out
    }

    fn collect_values<'a>(&'a self, out: &mut Vec<&'a A>) {
        match self {
            Node::File { value, .. } => out.push(value),
            _ => {
                for child in self.children().unwrap_or_default() {
                    child.collect_values(out);
                }
            }
        }
    }

    /// The path of every node, in pre-order, starting with this one.
    pub fn paths(&self) -> Vec<&Path> {
        let mut out = vec![self.path()];
        for child in self.children().unwrap_or_default() {
            out.extend(child.paths());
        }
        out
    }
}

/// Basename of a path, falling back to the whole path for things like `.`
/// or `/` that have no final normal component.
pub(crate) fn base_name(path: &Path) -> &OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}
