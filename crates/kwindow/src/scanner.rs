//! Two-pointer scan for the longest run with at most `k` distinct symbols.
//!
//! The window is the half-open range `[start, end)` over the input. Each
//! step admits `sequence[end]` into a frequency map, then advances `start`
//! until the map holds at most `k` keys again. Keys whose count drops to
//! zero are removed, so `counts.len()` is always the distinct-symbol count.
//!
//! Widths are measured with a [`WidthPolicy`]. The default,
//! [`WidthPolicy::Exclusive`], measures `end - start` and so never counts
//! the symbol just admitted at `end`:
//!
//! ```
//! use kwindow::{SlidingWindowScanner, WidthPolicy, longest_window_str};
//!
//! assert_eq!(longest_window_str("aaabaabaaa", 2), 9);
//!
//! let inclusive = SlidingWindowScanner::new(2).with_policy(WidthPolicy::Inclusive);
//! assert_eq!(inclusive.scan_str("eceba").length, 3);
//! ```

use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// How the width of the window `[start, end]` is measured at each step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidthPolicy {
    /// `end - start`: the symbol at `end` is not counted.
    #[default]
    Exclusive,
    /// `end - start + 1`: the symbol at `end` is counted.
    Inclusive,
}

impl WidthPolicy {
    /// Width of the window whose left edge is `start` after admitting the
    /// symbol at index `end`. Requires `start <= end`.
    pub fn width(self, start: usize, end: usize) -> usize {
        match self {
            Self::Exclusive => end - start,
            Self::Inclusive => end - start + 1,
        }
    }

    /// Lowercase name, matching the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Exclusive => "exclusive",
            Self::Inclusive => "inclusive",
        }
    }
}

/// Outcome of one scan: the best width and where it was first observed.
///
/// `start..end` always spans exactly `length` symbols of the scanned input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowScan {
    pub length: usize,
    pub start: usize,
    pub end: usize,
}

impl WindowScan {
    /// Whether no non-empty window was found.
    pub fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// The symbols covered by the best window.
    ///
    /// Returns an empty slice if `sequence` is not the input this scan ran
    /// over and the range falls outside it.
    pub fn slice<'a, T>(&self, sequence: &'a [T]) -> &'a [T] {
        sequence.get(self.start..self.end).unwrap_or(&[])
    }
}

/// Scanner for the longest window holding at most `k` distinct symbols.
///
/// Holds no per-scan state, so one scanner can be reused across inputs and
/// shared between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlidingWindowScanner {
    k: i64,
    policy: WidthPolicy,
}

impl SlidingWindowScanner {
    /// Create a scanner bounded to `k` distinct symbols. Any `k <= 0`
    /// produces empty results.
    pub fn new(k: i64) -> Self {
        Self {
            k,
            policy: WidthPolicy::default(),
        }
    }

    /// Set the width policy.
    pub fn with_policy(mut self, policy: WidthPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn k(&self) -> i64 {
        self.k
    }

    pub fn policy(&self) -> WidthPolicy {
        self.policy
    }

    /// Scan `sequence` once and return the widest window observed.
    pub fn scan<T: Eq + Hash + Clone>(&self, sequence: &[T]) -> WindowScan {
        if sequence.is_empty() || self.k <= 0 {
            return WindowScan::default();
        }
        // k > 0 here; bounds beyond usize can never be exceeded anyway.
        let bound = usize::try_from(self.k).unwrap_or(usize::MAX);

        let mut counts: HashMap<T, usize> = HashMap::new();
        let mut best = WindowScan::default();
        let mut start = 0;

        for (end, symbol) in sequence.iter().enumerate() {
            *counts.entry(symbol.clone()).or_insert(0) += 1;

            let before = start;
            while counts.len() > bound {
                let leaving = &sequence[start];
                let remaining = match counts.get_mut(leaving) {
                    Some(count) => {
                        *count -= 1;
                        *count
                    }
                    None => 0,
                };
                if remaining == 0 {
                    counts.remove(leaving);
                }
                start += 1;
            }
            if start != before {
                trace!(end, start, distinct = counts.len(), "window shrunk");
            }

            let width = self.policy.width(start, end);
            if width > best.length {
                best = WindowScan {
                    length: width,
                    start,
                    end: start + width,
                };
            }
        }

        debug!(
            symbols = sequence.len(),
            k = self.k,
            policy = self.policy.label(),
            length = best.length,
            "scan complete"
        );
        best
    }

    /// Scan the `char` sequence of `text`.
    pub fn scan_str(&self, text: &str) -> WindowScan {
        let symbols: Vec<char> = text.chars().collect();
        self.scan(&symbols)
    }
}

/// Length of the longest run of `sequence` with at most `k` distinct
/// symbols, measured with [`WidthPolicy::Exclusive`].
pub fn longest_window<T: Eq + Hash + Clone>(sequence: &[T], k: i64) -> usize {
    SlidingWindowScanner::new(k).scan(sequence).length
}

/// [`longest_window`] over the `char`s of `text`.
pub fn longest_window_str(text: &str, k: i64) -> usize {
    SlidingWindowScanner::new(k).scan_str(text).length
}
