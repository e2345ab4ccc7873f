//! Parsers and logic for reading blockMeshDict vertices
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! ```rust, no_run
//! # use bmtools_vertices::{read_vertices, scan};
//! // Read the vertices from a file
//! let vertices = read_vertices("/path/to/system/blockMeshDict").unwrap();
//!
//! // Or from text already in memory
//! let vertices = scan("vertices ( (0 0 0) (1 0 0) );").unwrap();
//! ```
//!
//! # Implementation overview
//!
//! Scanning is done in three steps:
//!
//! 1. Every `//` and `/* */` comment is removed
//! 2. The span between `vertices (` and the next `);` is isolated
//! 3. Every `(x y z)` entry in the span is collected in order
//!
//! Comments go first so that anything that only exists inside a comment,
//! including a commented out `vertices` section, is never read.
//!
//! # Formatting notes
//!
//! **Whitespace is insignificant**
//!
//! > Any amount of spaces, tabs and newlines may sit between the keyword, the
//! > brackets, and the numbers. At least one is needed between numbers.
//!
//! **Numbers are plain decimals**
//!
//! > Optional sign, optional fraction, optional exponent. For example `2`,
//! > `+2`, `-0.5`, `.5`, and `1.5e-3` are all fine. Commas are not separators.
//!
//! **Malformed entries are skipped**
//!
//! > Entries like `(1 2)`, `(1 2 3 4)`, or `(a b c)` do not produce a vertex
//! > and do not stop the scan. Only a total absence of readable entries is an
//! > error.
//!
//! **Out of range values are skipped**
//!
//! > Something like `(1e999 0 0)` reads as infinity. These entries are skipped
//! > with a warning rather than polluting every later calculation.
//!
//! # Unsupported
//!
//! This is not a full dictionary parser. Macros (`$var`), `#include`,
//! `#calc`, and `convertToMeters` scaling are not expanded.

// reader modules
mod parsers;

// library imports
use crate::error::{Error, Result};
use crate::{Coordinate, Vertices};
use std::path::Path;

// external crates
use log::{debug, info, trace, warn};

/// Read all vertices from a blockMeshDict file
///
/// Returns a result containing the [Vertices] found in the file at `path`.
///
/// - `path` - Path to the file, can be [&str], [String], [Path], etc...
///
/// Example
/// ```rust, no_run
/// # use bmtools_vertices::read_vertices;
/// let vertices = read_vertices("path/to/blockMeshDict").unwrap();
/// println!("Found {} vertices", vertices.len());
/// ```
pub fn read_vertices<P: AsRef<Path>>(path: P) -> Result<Vertices> {
    let path: &Path = path.as_ref();
    info!("Reading {}", path.display());
    let text = std::fs::read_to_string(path)?;
    scan(&text)
}

/// Scan text for the vertices of a blockMeshDict
///
/// Fails with [Error::SectionNotFound] if there is no `vertices ( ... );`
/// section once comments are removed, or [Error::NoCoordinates] if the section
/// has no readable `(x y z)` entries.
///
/// Example
/// ```rust
/// # use bmtools_vertices::{scan, Coordinate};
/// let text = "vertices ( (0 0 0) // (9 9 9)\n(1 0 0) );";
/// let vertices = scan(text).unwrap();
///
/// assert_eq!(vertices.len(), 2);
/// assert_eq!(vertices[1], Coordinate::new(1.0, 0.0, 0.0));
/// ```
pub fn scan(text: &str) -> Result<Vertices> {
    let text = parsers::strip_comments(text);

    let (_, span) = parsers::vertices_section(&text).map_err(|_| Error::SectionNotFound)?;
    trace!("Vertex section spans {} characters", span.len());

    let mut coordinates = Vec::new();
    for values in parsers::triplets(span) {
        let coordinate = Coordinate::from(values);
        if coordinate.is_finite() {
            coordinates.push(coordinate);
        } else {
            warn!("Skipping out of range vertex entry {values:?}");
        }
    }

    debug!("Found {} vertices", coordinates.len());
    Vertices::new(coordinates)
}
