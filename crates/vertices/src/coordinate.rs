// crate modules
use crate::error::{Error, Result};
use crate::group::{Grouping, Tolerance};

// bmtools modules
use bmtools_utils::ValueExt;

// external crates
use serde::Serialize;

/// A single vertex location (x, y, z)
///
/// Coordinates are plain values with no identity of their own. The index of a
/// vertex is its position in [Vertices], which matches the vertex numbering
/// used in the `blocks` definitions of a blockMeshDict.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Coordinate {
    /// x coordinate
    pub x: f64,
    /// y coordinate
    pub y: f64,
    /// z coordinate
    pub z: f64,
}

impl Coordinate {
    /// Create a new [Coordinate] from the three axis values
    ///
    /// ```rust
    /// # use bmtools_vertices::Coordinate;
    /// let c = Coordinate::new(1.0, 2.0, 3.0);
    /// assert_eq!(c.as_array(), [1.0, 2.0, 3.0]);
    /// ```
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Axis values as a `[x, y, z]` array
    pub const fn as_array(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// True if every axis value is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Shift every axis by the same amount
    ///
    /// Used for placing labels just off the point they belong to.
    ///
    /// ```rust
    /// # use bmtools_vertices::Coordinate;
    /// let c = Coordinate::new(1.0, 0.0, -1.0).shift(0.5);
    /// assert_eq!(c, Coordinate::new(1.5, 0.5, -0.5));
    /// ```
    pub fn shift(&self, amount: f64) -> Self {
        Self {
            x: self.x + amount,
            y: self.y + amount,
            z: self.z + amount,
        }
    }
}

impl From<[f64; 3]> for Coordinate {
    fn from(value: [f64; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.x.fixed(6),
            self.y.fixed(6),
            self.z.fixed(6)
        )
    }
}

/// Ordered list of every vertex found in a file
///
/// Order is the order of first appearance in the text, so the vertex index is
/// simply the position in the list. There is always at least one vertex.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Vertices {
    coordinates: Vec<Coordinate>,
}

impl Vertices {
    /// Wrap a list of coordinates
    ///
    /// An empty list is rejected with [Error::NoCoordinates].
    ///
    /// ```rust
    /// # use bmtools_vertices::{Coordinate, Vertices};
    /// let vertices = Vertices::new(vec![Coordinate::new(0.0, 0.0, 0.0)]).unwrap();
    /// assert_eq!(vertices.len(), 1);
    ///
    /// assert!(Vertices::new(Vec::new()).is_err());
    /// ```
    pub fn new(coordinates: Vec<Coordinate>) -> Result<Self> {
        if coordinates.is_empty() {
            return Err(Error::NoCoordinates);
        }
        Ok(Self { coordinates })
    }

    /// Number of vertices
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    /// Always false, a [Vertices] list can not be constructed empty
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Coordinate of the vertex at `index`, if it exists
    pub fn get(&self, index: usize) -> Option<&Coordinate> {
        self.coordinates.get(index)
    }

    /// Iterate over the coordinates in index order
    pub fn iter(&self) -> std::slice::Iter<'_, Coordinate> {
        self.coordinates.iter()
    }

    /// View of the underlying coordinates
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.coordinates
    }

    /// Lowest value on each axis
    pub fn min(&self) -> Coordinate {
        self.fold_axes(f64::INFINITY, f64::min)
    }

    /// Highest value on each axis
    pub fn max(&self) -> Coordinate {
        self.fold_axes(f64::NEG_INFINITY, f64::max)
    }

    /// Group coincident vertices under the given tolerance
    ///
    /// Convenience for [Grouping::new()].
    ///
    /// ```rust
    /// # use bmtools_vertices::{scan, Tolerance};
    /// let vertices = scan("vertices ( (0 0 0) (1 0 0) (0 0 0) );").unwrap();
    /// let grouping = vertices.group(Tolerance::default());
    /// assert!(grouping.has_duplicates());
    /// ```
    pub fn group(&self, tolerance: Tolerance) -> Grouping {
        Grouping::new(self, tolerance)
    }

    fn fold_axes(&self, init: f64, op: fn(f64, f64) -> f64) -> Coordinate {
        self.coordinates
            .iter()
            .fold(Coordinate::new(init, init, init), |acc, c| {
                Coordinate::new(op(acc.x, c.x), op(acc.y, c.y), op(acc.z, c.z))
            })
    }
}

impl std::ops::Index<usize> for Vertices {
    type Output = Coordinate;

    fn index(&self, index: usize) -> &Self::Output {
        &self.coordinates[index]
    }
}

impl<'a> IntoIterator for &'a Vertices {
    type Item = &'a Coordinate;
    type IntoIter = std::slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.coordinates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn axis_extremes() {
        let vertices = Vertices::new(vec![
            Coordinate::new(0.0, -2.0, 5.0),
            Coordinate::new(3.0, 1.0, -1.0),
            Coordinate::new(-1.0, 0.5, 2.0),
        ])
        .unwrap();

        assert_eq!(vertices.min(), Coordinate::new(-1.0, -2.0, -1.0));
        assert_eq!(vertices.max(), Coordinate::new(3.0, 1.0, 5.0));
    }

    #[test]
    fn display_hides_negative_zero() {
        let c = Coordinate::new(-0.0, 1.25, -3.0);
        assert_eq!(c.to_string(), "(0.000000, 1.250000, -3.000000)");
    }

    #[test]
    fn empty_list_is_rejected() {
        assert!(matches!(Vertices::new(vec![]), Err(Error::NoCoordinates)));
    }
}
