// standard library
use std::collections::HashMap;

// crate modules
use crate::coordinate::{Coordinate, Vertices};
use crate::error::{Error, Result};

// bmtools modules
use bmtools_utils::ValueExt;

// external crates
use itertools::Itertools;
use log::debug;
use serde::Serialize;

/// Spatial tolerance used to decide if two vertices are the same point
///
/// Always finite and greater than zero, so grouping itself can never fail.
/// Defaults to `1e-6`.
///
/// ```rust
/// # use bmtools_vertices::Tolerance;
/// assert_eq!(Tolerance::default().value(), 1e-6);
/// assert_eq!(Tolerance::new(1e-3).unwrap().value(), 1e-3);
///
/// assert!(Tolerance::new(0.0).is_err());
/// assert!(Tolerance::new(-1e-6).is_err());
/// assert!(Tolerance::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tolerance(f64);

impl Tolerance {
    /// Tolerance used when nothing else is specified
    pub const DEFAULT: f64 = 1e-6;

    /// Checked constructor, rejects anything not finite and positive
    pub fn new(value: f64) -> Result<Self> {
        if value.is_finite() && value > 0.0 {
            Ok(Self(value))
        } else {
            Err(Error::InvalidTolerance(value))
        }
    }

    /// The raw tolerance value
    pub const fn value(&self) -> f64 {
        self.0
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self(Self::DEFAULT)
    }
}

impl std::fmt::Display for Tolerance {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0.sci(2, 2))
    }
}

/// Rounded identity of a [Coordinate] used as the grouping key
///
/// Every axis is divided by the tolerance and rounded to the nearest whole
/// step with [f64::round], so exact halves always round away from zero. Two
/// coordinates are the same point if and only if their keys are equal.
///
/// Note this is per-axis rounding rather than a distance check. Two points
/// either side of a rounding boundary land in different groups even if they
/// are closer than the tolerance, and points up to twice the tolerance apart
/// can share a key.
///
/// ```rust
/// # use bmtools_vertices::{Coordinate, QuantizedKey, Tolerance};
/// let tol = Tolerance::default();
/// let a = QuantizedKey::new(&Coordinate::new(1.0, 0.0, 0.0), tol);
/// let b = QuantizedKey::new(&Coordinate::new(1.0000001, 0.0, 0.0), tol);
/// let c = QuantizedKey::new(&Coordinate::new(1.00001, 0.0, 0.0), tol);
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QuantizedKey {
    /// Bit patterns of the rounded step counts, -0.0 already folded into 0.0
    steps: [u64; 3],
}

impl QuantizedKey {
    /// Compute the key of a coordinate for the given tolerance
    pub fn new(coordinate: &Coordinate, tolerance: Tolerance) -> Self {
        let step = |value: f64| {
            let rounded = (value / tolerance.value()).round();
            // -0.0 and 0.0 compare equal but do not share a bit pattern
            if rounded == 0.0 {
                0.0f64.to_bits()
            } else {
                rounded.to_bits()
            }
        };

        Self {
            steps: [step(coordinate.x), step(coordinate.y), step(coordinate.z)],
        }
    }

    /// Number of whole tolerance steps along each axis
    pub fn steps(&self) -> [f64; 3] {
        self.steps.map(f64::from_bits)
    }

    /// The rounded location the key stands for, i.e. `round(v/tol) * tol`
    pub fn value(&self, tolerance: Tolerance) -> Coordinate {
        let [x, y, z] = self.steps().map(|s| s * tolerance.value());
        Coordinate::new(x, y, z)
    }
}

/// Set of vertex indices that share one location
///
/// Indices are always in ascending order, and the representative coordinate
/// is the coordinate of the lowest index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VertexGroup {
    /// Member vertex indices, ascending
    indices: Vec<usize>,
    /// Coordinate of the first member
    representative: Coordinate,
}

impl VertexGroup {
    fn new(index: usize, representative: Coordinate) -> Self {
        Self {
            indices: vec![index],
            representative,
        }
    }

    /// Member vertex indices in ascending order
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Lowest member index, which owns the representative coordinate
    pub fn first_index(&self) -> usize {
        self.indices[0]
    }

    /// Location used for the group label
    pub fn representative(&self) -> Coordinate {
        self.representative
    }

    /// Number of vertices at this location
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Groups always contain at least one index
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// More than one vertex shares this location
    pub fn is_duplicate(&self) -> bool {
        self.indices.len() > 1
    }

    /// Check if a vertex index is part of the group
    pub fn contains(&self, index: usize) -> bool {
        self.indices.binary_search(&index).is_ok()
    }

    /// Identity label for the group
    ///
    /// A single vertex is labelled with its own index, while coincident
    /// vertices get one label of all indices joined by commas.
    ///
    /// ```rust
    /// # use bmtools_vertices::{scan, Tolerance};
    /// let vertices = scan("vertices ( (0 0 0) (1 1 1) (0 0 0) );").unwrap();
    /// let grouping = vertices.group(Tolerance::default());
    ///
    /// let labels: Vec<String> = grouping.iter().map(|g| g.label()).collect();
    /// assert_eq!(labels, vec!["0,2", "1"]);
    /// ```
    pub fn label(&self) -> String {
        self.indices.iter().join(",")
    }
}

/// Vertices partitioned into groups of coincident points
///
/// Every vertex index belongs to exactly one [VertexGroup]. Groups are kept in
/// the order their location first appears in the vertex list, which only
/// matters for presentation.
///
/// Membership depends only on [QuantizedKey] equality, so the result is the
/// same whatever order the vertices are visited in.
#[derive(Debug, Clone, PartialEq)]
pub struct Grouping {
    /// Tolerance the groups were built with
    tolerance: Tolerance,
    /// Groups in order of first appearance
    groups: Vec<VertexGroup>,
    /// Position of each key's group in `groups`
    lookup: HashMap<QuantizedKey, usize>,
    /// Group position for every vertex index
    membership: Vec<usize>,
}

impl Grouping {
    /// Group every vertex by its [QuantizedKey]
    ///
    /// ```rust
    /// # use bmtools_vertices::{scan, Grouping, Tolerance};
    /// let vertices = scan("vertices ( (0 0 0) (1 0 0) (1.0000001 0 0) );").unwrap();
    /// let grouping = Grouping::new(&vertices, Tolerance::default());
    ///
    /// assert_eq!(grouping.len(), 2);
    /// assert_eq!(grouping.group_of(2).unwrap().indices(), &[1, 2]);
    /// ```
    pub fn new(vertices: &Vertices, tolerance: Tolerance) -> Self {
        let mut groups: Vec<VertexGroup> = Vec::new();
        let mut lookup: HashMap<QuantizedKey, usize> = HashMap::new();
        let mut membership = Vec::with_capacity(vertices.len());

        for (index, coordinate) in vertices.iter().enumerate() {
            let key = QuantizedKey::new(coordinate, tolerance);
            let position = match lookup.get(&key) {
                Some(&position) => {
                    groups[position].indices.push(index);
                    position
                }
                None => {
                    groups.push(VertexGroup::new(index, *coordinate));
                    lookup.insert(key, groups.len() - 1);
                    groups.len() - 1
                }
            };
            membership.push(position);
        }

        debug!(
            "Grouped {} vertices into {} locations (tolerance {tolerance})",
            vertices.len(),
            groups.len()
        );

        Self {
            tolerance,
            groups,
            lookup,
            membership,
        }
    }

    /// Tolerance used to build the groups
    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// Number of distinct locations
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True only if there were no vertices to group
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Number of vertices across all groups
    pub fn n_vertices(&self) -> usize {
        self.membership.len()
    }

    /// Iterate over the groups in order of first appearance
    pub fn iter(&self) -> std::slice::Iter<'_, VertexGroup> {
        self.groups.iter()
    }

    /// All groups as a slice, in order of first appearance
    pub fn groups(&self) -> &[VertexGroup] {
        &self.groups
    }

    /// Find the group for a key, if any vertex has it
    pub fn get(&self, key: &QuantizedKey) -> Option<&VertexGroup> {
        self.lookup.get(key).map(|&position| &self.groups[position])
    }

    /// Position in [groups()](Grouping::groups) of the group holding a vertex
    pub fn group_position(&self, index: usize) -> Option<usize> {
        self.membership.get(index).copied()
    }

    /// The group holding a vertex index
    pub fn group_of(&self, index: usize) -> Option<&VertexGroup> {
        self.group_position(index)
            .map(|position| &self.groups[position])
    }

    /// Iterate over only the groups with more than one vertex
    pub fn duplicates(&self) -> impl Iterator<Item = &VertexGroup> {
        self.groups.iter().filter(|group| group.is_duplicate())
    }

    /// At least one location is shared by more than one vertex
    pub fn has_duplicates(&self) -> bool {
        self.groups.iter().any(VertexGroup::is_duplicate)
    }
}

impl<'a> IntoIterator for &'a Grouping {
    type Item = &'a VertexGroup;
    type IntoIter = std::slice::Iter<'a, VertexGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}
