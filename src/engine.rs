use crate::error::SymtreeError;
use crate::options::ScanOptions;
use crate::provider::{FsProvider, StdFs};
use crate::types::{Node, SymlinkKind, base_name};
use globset::{Glob, GlobSet, GlobSetBuilder};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
#[cfg(feature = "logging")]
use tracing;
// canonical path -> path it was reached by, along the current branch
type Seen = HashMap<PathBuf, PathBuf>;
struct Scanner<'a, P: FsProvider + ?Sized> {
    provider: &'a P,
    root: PathBuf,
    root_name: PathBuf,
    canonical_root: PathBuf,
    sort_entries: bool,
    ignore: Option<GlobSet>,
}
fn tolerate<T>(path: &Path, result: io::Result<T>) -> Result<Option<T>, SymtreeError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            #[cfg(feature = "logging")]
            tracing::debug!("Path vanished during scan: {}", path.display());
            Ok(None)
        }
        Err(e) => Err(SymtreeError::io(path, e)),
    }
}
fn build_ignore_set(patterns: &[String]) -> Result<Option<GlobSet>, SymtreeError> {
    if patterns.is_empty() {
        return Ok(None);
    }
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        let glob = Glob::new(pattern)
            .map_err(|e| SymtreeError::Pattern(format!("'{}': {}", pattern, e)))?;
        builder.add(glob);
    }
    builder
        .build()
        .map(Some)
        .map_err(|e| SymtreeError::Pattern(format!("failed to build glob set: {}", e)))
}
impl<'a, P: FsProvider + ?Sized> Scanner<'a, P> {
    fn is_ignored(&self, path: &Path) -> bool {
        match &self.ignore {
            Some(set) => {
                let relative = path.strip_prefix(&self.root).unwrap_or(path);
                set.is_match(relative)
            }
            None => false,
        }
    }
    fn visit(&self, path: &Path, seen: &Seen) -> Result<Option<Node<PathBuf>>, SymtreeError> {
        let Some(true) = tolerate(path, self.provider.exists(path))? else {
            return Ok(None);
        };
        let Some(is_link) = tolerate(path, self.provider.is_symbolic_link(path))? else {
            return Ok(None);
        };
        if is_link {
            return self.visit_link(path, seen);
        }
        let Some(is_dir) = tolerate(path, self.provider.is_directory(path))? else {
            return Ok(None);
        };
        if !is_dir {
            return Ok(Some(Node::File {
                path: path.to_path_buf(),
                value: path.to_path_buf(),
            }));
        }
        let Some(canonical) = tolerate(path, self.provider.canonicalize(path))? else {
            return Ok(None);
        };
        Ok(self
            .visit_children(path, &canonical, seen)?
            .map(|children| Node::Directory {
                path: path.to_path_buf(),
                children,
            }))
    }
    fn visit_link(&self, path: &Path, seen: &Seen) -> Result<Option<Node<PathBuf>>, SymtreeError> {
        let Some(target) = tolerate(path, self.provider.read_symbolic_link_target(path))? else {
            return Ok(None);
        };
        let Some(canonical) = tolerate(path, self.provider.canonicalize(path))? else {
            return Ok(None);
        };
        if seen.contains_key(&canonical) {
            let resolved = self.relative_to_root(&canonical, seen);
            #[cfg(feature = "logging")]
            tracing::debug!(
                "Internal symlink {} -> {}",
                path.display(),
                resolved.display()
            );
            return Ok(Some(Node::Symlink {
                path: path.to_path_buf(),
                kind: SymlinkKind::Internal { target, resolved },
            }));
        }
        #[cfg(feature = "logging")]
        tracing::debug!("Following external symlink {} -> {}", path.display(), target);
        let Some(is_dir) = tolerate(path, self.provider.is_directory(path))? else {
            return Ok(None);
        };
        let children = if is_dir {
            match self.visit_children(path, &canonical, seen)? {
                Some(children) => children,
                None => return Ok(None),
            }
        } else {
            Vec::new()
        };
        Ok(Some(Node::Symlink {
            path: path.to_path_buf(),
            kind: SymlinkKind::External { target, children },
        }))
    }
    fn visit_children(
        &self,
        path: &Path,
        canonical: &Path,
        seen: &Seen,
    ) -> Result<Option<Vec<Node<PathBuf>>>, SymtreeError> {
        let Some(mut names) = tolerate(path, self.provider.list_directory(path))? else {
            return Ok(None);
        };
        if self.sort_entries {
            names.sort();
        }
        let entries: Vec<PathBuf> = names
            .into_iter()
            .map(|name| path.join(name))
            .filter(|entry| {
                let ignored = self.is_ignored(entry);
                #[cfg(feature = "logging")]
                if ignored {
                    tracing::trace!("Ignoring {}", entry.display());
                }
                !ignored
            })
            .collect();
        // links are left out: canonicalizing one would resolve through it
        let mut next = seen.clone();
        for entry in &entries {
            match tolerate(entry, self.provider.is_symbolic_link(entry))? {
                Some(false) => {}
                _ => continue,
            }
            if let Some(entry_canonical) = tolerate(entry, self.provider.canonicalize(entry))? {
                next.entry(entry_canonical).or_insert_with(|| entry.clone());
            }
        }
        next.entry(canonical.to_path_buf())
            .or_insert_with(|| path.to_path_buf());
        #[cfg(not(feature = "parallel"))]
        let built = entries
            .iter()
            .map(|entry| self.visit(entry, &next))
            .collect::<Result<Vec<_>, _>>()?;
        #[cfg(feature = "parallel")]
        let built = entries
            .par_iter()
            .map(|entry| self.visit(entry, &next))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Some(built.into_iter().flatten().collect()))
    }
    fn relative_to_root(&self, canonical: &Path, seen: &Seen) -> PathBuf {
        if let Ok(relative) = canonical.strip_prefix(&self.canonical_root) {
            return self.root_name.join(relative);
        }
        // target sits under an external link, name it by how it was reached
        if let Some(relative) = seen
            .get(canonical)
            .and_then(|original| original.strip_prefix(&self.root).ok())
        {
            return self.root_name.join(relative);
        }
        canonical.to_path_buf()
    }
}
pub fn scan(options: ScanOptions) -> Result<Option<Node<PathBuf>>, SymtreeError> {
    scan_with(options, &StdFs)
}
pub fn scan_with<P: FsProvider + ?Sized>(
    options: ScanOptions,
    provider: &P,
) -> Result<Option<Node<PathBuf>>, SymtreeError> {
    #[cfg(feature = "logging")]
    tracing::debug!("Starting scan with root: {}", options.root.display());
    let root = options.root;
    let Some(true) = tolerate(&root, provider.exists(&root))? else {
        return Ok(None);
    };
    let Some(canonical_root) = tolerate(&root, provider.canonicalize(&root))? else {
        return Ok(None);
    };
    let scanner = Scanner {
        provider,
        root_name: PathBuf::from(base_name(&root)),
        canonical_root,
        sort_entries: options.sort_entries,
        ignore: build_ignore_set(&options.ignore_patterns)?,
        root,
    };
    scanner.visit(&scanner.root, &Seen::new())
}
pub fn build_tree(root: impl Into<PathBuf>) -> Result<Option<Node<PathBuf>>, SymtreeError> {
    scan(ScanOptions {
        root: root.into(),
        ..Default::default()
    })
}
