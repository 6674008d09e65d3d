//! Scan configuration with sensible defaults.
//!
//! [`ScanConfig`] captures the settings a scan needs and converts them into
//! a ready-to-use [`SlidingWindowScanner`] via
//! [`build_scanner`](ScanConfig::build_scanner).

use serde::{Deserialize, Serialize};

use crate::scanner::{SlidingWindowScanner, WidthPolicy};

/// Configuration for a single scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Maximum distinct symbols per window. Default: `2`.
    pub k: i64,
    /// How window widths are measured. Default: [`WidthPolicy::Exclusive`].
    pub width: WidthPolicy,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            k: 2,
            width: WidthPolicy::Exclusive,
        }
    }
}

impl ScanConfig {
    pub fn new(k: i64) -> Self {
        Self {
            k,
            ..Default::default()
        }
    }

    pub fn with_k(mut self, k: i64) -> Self {
        self.k = k;
        self
    }

    pub fn with_width(mut self, width: WidthPolicy) -> Self {
        self.width = width;
        self
    }

    /// Build a [`SlidingWindowScanner`] from this config.
    pub fn build_scanner(&self) -> SlidingWindowScanner {
        SlidingWindowScanner::new(self.k).with_policy(self.width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_behavior() {
        let config = ScanConfig::default();
        assert_eq!(config.k, 2);
        assert_eq!(config.width, WidthPolicy::Exclusive);
    }

    #[test]
    fn build_scanner_carries_settings() {
        let scanner = ScanConfig::new(5)
            .with_width(WidthPolicy::Inclusive)
            .build_scanner();
        assert_eq!(scanner.k(), 5);
        assert_eq!(scanner.policy(), WidthPolicy::Inclusive);
    }

    #[test]
    fn with_k_overrides_bound() {
        let config = ScanConfig::default().with_k(-1);
        assert_eq!(config.k, -1);
        assert_eq!(config.build_scanner().scan_str("abc").length, 0);
    }
}
