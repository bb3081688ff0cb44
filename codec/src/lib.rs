//! Encode, decode, shorten and recover plus codes.
//!
//! This is the main codec crate. It ties the digit alphabet and the textual
//! grammar together into the public code type: coordinates in, validated
//! immutable codes out, and back again into exact bounding boxes.
//!
//! # Features
//!
//! - Encoding a latitude/longitude pair at 4 to 15 significant digits
//! - Decoding a full code into its bounding box and containment checks
//! - Shortening a code against a nearby reference point, and recovering it
//! - Dual arithmetic strategies (wide-integer and floating-point) that
//!   produce byte-identical codes
//!
//! # Design Principles
//!
//! - **Correctness first** - All invariants are documented and tested.
//! - **Validate before construct** - No instance ever holds an invalid code.
//! - **Deterministic** - Same inputs produce same outputs, on every host.
//!
//! # Example
//!
//! ```
//! use codec::OpenLocationCode;
//!
//! let code = OpenLocationCode::from_coordinates(51.530812, -0.123767, 10)?;
//! assert_eq!(code.as_str(), "9C3XGVJG+8F");
//!
//! let area = code.decode()?;
//! assert!(area.contains(51.530812, -0.123767));
//! # Ok::<(), codec::CodeError>(())
//! ```

mod area;
mod calc;
mod code;
mod error;

pub use area::CodeArea;
pub use calc::{
    clip_latitude, host_calculator, normalize_longitude, Calculator, FloatingPoint, WideInteger,
};
pub use code::{decode, encode, OpenLocationCode};
pub use error::{CodeError, CodeResult};
