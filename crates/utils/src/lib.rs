//! Common utility for extended `std` types
//!
//! These are left public for convenience, mostly so that every report and
//! output file prints coordinates and tolerances the same way.
#![doc = include_str!("../readme.md")]

// Alias for the format! macro
pub use std::format as f;

// Modules
mod value_ext;

// Flatten
pub use value_ext::ValueExt;
