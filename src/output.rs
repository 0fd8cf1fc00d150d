//! Output formatting for scanned trees.
//!
//! Provides functions to format a [`Node`] as an ASCII tree or as JSON, and to
//! write the result to a file.

use crate::tree::render;
use crate::{Node, SymtreeError};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tree,
    Json,
}

impl OutputFormat {
    /// Returns the conventional file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Tree => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// Formats the tree into a string.
///
/// `pretty` only affects JSON output.
pub fn format_tree<A: Serialize>(
    tree: &Node<A>,
    format: OutputFormat,
    pretty: bool,
) -> Result<String, SymtreeError> {
    match format {
        OutputFormat::Tree => Ok(render(tree)),
        OutputFormat::Json => format_json(tree, pretty),
    }
}

/// Writes the formatted tree to a file.
pub fn write_tree_to_file<A: Serialize>(
    tree: &Node<A>,
    format: OutputFormat,
    path: impl AsRef<Path>,
    pretty: bool,
) -> Result<(), SymtreeError> {
    let content = format_tree(tree, format, pretty)?;
    fs::write(&path, content).map_err(|e| SymtreeError::io(path.as_ref(), e))?;
    Ok(())
}

fn format_json<A: Serialize>(tree: &Node<A>, pretty: bool) -> Result<String, SymtreeError> {
    let json = if pretty {
        serde_json::to_string_pretty(tree)?
    } else {
        serde_json::to_string(tree)?
    };
    Ok(json)
}
