//! Human-readable rendering of counts, byte sizes, rates, and percentages,
//! plus a text-vs-binary classifier for byte content.
//!
//! All formatting routines append to a caller-supplied `String` so output
//! can be assembled without intermediate allocations:
//!
//! ```rust
//! use humanfmt::{push_size, Ratio};
//!
//! let mut out = String::from("downloaded ");
//! push_size(&mut out, 1500u64);
//! assert_eq!(out, "downloaded 1.50 kilobyte");
//!
//! let mut pct = String::new();
//! Ratio::new(50, 200).push_percent(&mut pct);
//! assert_eq!(pct, "25.00%");
//! ```
//!
//! Every operation is pure and synchronous: no shared state, no I/O, no
//! error paths. Any numeric input is accepted, and the classifier treats
//! malformed input as a classification result rather than a failure.

pub mod format;
pub mod sniff;

pub use format::{
    push_cardinal, push_int, push_quoted, push_size, push_uint, Ratio, Scalable,
};
pub use sniff::is_text;
