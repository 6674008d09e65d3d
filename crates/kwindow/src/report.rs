//! Serializable summary of one scan, rendered as text or JSON.

use serde::{Deserialize, Serialize};

use crate::config::ScanConfig;
use crate::scanner::{WidthPolicy, WindowScan};

/// Everything the CLI prints about a scan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanReport {
    /// Where the input came from (`"argument"`, `"stdin"`, a path, ...).
    pub source: String,
    /// Number of symbols scanned.
    pub input_len: usize,
    pub k: i64,
    pub width: WidthPolicy,
    /// Best window width.
    pub length: usize,
    /// Start index of the best window, in symbols.
    pub start: usize,
    /// End index (exclusive) of the best window, in symbols.
    pub end: usize,
    /// The symbols of the best window.
    pub window: String,
}

impl ScanReport {
    /// Run `config` over `text` and collect the result.
    pub fn build(source: impl Into<String>, text: &str, config: &ScanConfig) -> Self {
        let symbols: Vec<char> = text.chars().collect();
        let scan: WindowScan = config.build_scanner().scan(&symbols);
        Self {
            source: source.into(),
            input_len: symbols.len(),
            k: config.k,
            width: config.width,
            length: scan.length,
            start: scan.start,
            end: scan.end,
            window: scan.slice(&symbols).iter().collect(),
        }
    }

    /// One-line human-readable rendering.
    pub fn to_text(&self) -> String {
        format!(
            "longest window: {} (start {}, end {}) {:?}",
            self.length, self.start, self.end, self.window
        )
    }

    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self).map_err(|e| format!("failed to format report: {e}"))
    }
}
