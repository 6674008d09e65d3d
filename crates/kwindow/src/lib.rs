//! Longest contiguous run with at most `k` distinct symbols.
//!
//! `kwindow` scans a sequence once with a two-pointer sliding window and a
//! symbol frequency map, returning the widest window observed while the
//! window holds no more than `k` distinct symbols. Empty input and any
//! `k <= 0` yield `0`; the scan never fails.
//!
//! # Library usage
//!
//! ```
//! use kwindow::{ScanConfig, WidthPolicy, longest_window, longest_window_str};
//!
//! // Default width policy: `end - start`, the symbol at `end` not counted.
//! assert_eq!(longest_window_str("aaabaabaaa", 2), 9);
//! assert_eq!(longest_window(&[1, 1, 2, 3, 3, 3], 2), 3);
//!
//! // Textbook width, `end - start + 1`, is an explicit opt-in.
//! let scanner = ScanConfig::new(2)
//!     .with_width(WidthPolicy::Inclusive)
//!     .build_scanner();
//! let scan = scanner.scan_str("eceba");
//! assert_eq!((scan.length, scan.start, scan.end), (3, 0, 3));
//! ```
//!
//! # Binary
//!
//! ```sh
//! # Scan the built-in example ("aaabaabaaa", k = 2)
//! kwindow
//!
//! # Scan a literal, a file, or stdin
//! kwindow -k 3 --text abaccc
//! kwindow -k 2 --file input.txt --json
//! echo eceba | kwindow --stdin --inclusive
//! ```

pub mod config;
pub mod input;
pub mod logging;
pub mod report;
pub mod scanner;

pub use config::ScanConfig;
pub use input::InputSource;
pub use report::ScanReport;
pub use scanner::{
    SlidingWindowScanner, WidthPolicy, WindowScan, longest_window, longest_window_str,
};
