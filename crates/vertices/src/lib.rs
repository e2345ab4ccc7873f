//! Vertex scanning and duplicate point grouping for blockMeshDict files
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod coordinate;
mod error;
mod group;

pub mod reader;

// inline the important types for a nice public API
#[doc(inline)]
pub use reader::{read_vertices, scan};

#[doc(inline)]
pub use coordinate::{Coordinate, Vertices};

#[doc(inline)]
pub use group::{Grouping, QuantizedKey, Tolerance, VertexGroup};

#[doc(inline)]
pub use error::{Error, Result};
