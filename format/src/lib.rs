//! Textual grammar and classification for plus codes.
//!
//! This crate layers the code-string format over the raw digit alphabet: the
//! pure validity grammar, the full/short/padded classification predicates,
//! and the helpers that bring a candidate string into canonical form. It
//! never constructs coordinates or areas; that is the codec's job.
//!
//! All checks work byte-wise and case-insensitively, so arbitrary UTF-8
//! input is rejected rather than panicking on non-ASCII boundaries.
//!
//! # Example
//!
//! ```
//! assert!(format::is_full("9C3XGVJG+8F"));
//! assert!(format::is_short("GVJG+8F"));
//! assert!(!format::is_valid("9C3XGVJG8F"));
//! assert_eq!(format::significant_digits("9C3X0000+"), "9C3X");
//! ```

mod clean;
mod grammar;

pub use clean::{canonicalize, significant_digits};
pub use grammar::{is_full, is_padded, is_short, is_valid, separator_position};
