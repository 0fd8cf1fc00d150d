use serde::{Deserialize, Serialize};
use std::path::PathBuf;
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanOptions {
    pub root: PathBuf,
    pub sort_entries: bool,
    pub ignore_patterns: Vec<String>,
}
impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            sort_entries: true,
            ignore_patterns: Vec::new(),
        }
    }
}
#[derive(Debug, Default)]
pub struct ScanBuilder {
    options: ScanOptions,
}
impl ScanBuilder {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            options: ScanOptions {
                root: root.into(),
                ..Default::default()
            },
        }
    }
    pub fn sort_entries(mut self, yes: bool) -> Self {
        self.options.sort_entries = yes;
        self
    }
    pub fn ignore_patterns(mut self, patterns: Vec<String>) -> Self {
        self.options.ignore_patterns = patterns;
        self
    }
    pub fn build(self) -> ScanOptions {
        self.options
    }
}
