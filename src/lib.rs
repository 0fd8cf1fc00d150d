//! # Symtree
//!
//! `symtree` recursively scans a directory into an in-memory tree without
//! getting lost in symbolic link cycles. Links whose target was already
//! visited on the way down are recorded as [`SymlinkKind::Internal`]; links
//! leading somewhere new are followed and recorded as
//! [`SymlinkKind::External`] with their contents.
//!
//! A built tree is immutable. Everything else ([`dereference_one_level`],
//! [`filter_map`], [`prune`]) produces a new tree, and [`walk`] and
//! [`render`] read one.
//!
//! # Features
//!
//! - `parallel`: Builds sibling subtrees in parallel using Rayon.
//! - `logging`: Enables debug logging via the `tracing` crate.
//!
//! # Example
//!
//! ```no_run
//! use symtree::{ScanBuilder, filter, prune, render, scan};
//!
//! let options = ScanBuilder::new("project")
//!     .ignore_patterns(vec!["target".into()])
//!     .build();
//!
//! let tree = scan(options)
//!     .expect("Failed to scan directory")
//!     .expect("Root does not exist");
//!
//! let sources = filter(&tree, |path| path.extension().is_some_and(|e| e == "rs"));
//! if let Some(sources) = sources.as_ref().and_then(prune) {
//!     print!("{}", render(&sources));
//! }
//! ```

mod deref;
mod engine;
mod error;
mod filter;
mod options;
pub mod output;
mod provider;
mod tree;
mod types;
mod walk;

pub use deref::dereference_one_level;
pub use engine::{build_tree, scan, scan_with};
pub use error::SymtreeError;
pub use filter::{filter, filter_map, flatten, prune, try_filter_map};
pub use options::{ScanBuilder, ScanOptions};
pub use provider::{FsProvider, StdFs};
pub use tree::{print_tree, render, render_with};
pub use types::{Node, SymlinkKind};
pub use walk::{walk, walk_from_contents};
