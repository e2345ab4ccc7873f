// bmtools modules
use bmtools_vertices::{Coordinate, Grouping, Tolerance, Vertices};

// external crates
use serde::Serialize;

/// Everything needed to draw labelled vertices
///
/// A [Scene] is built explicitly from the vertices and their grouping. There
/// is no shared drawing state, so any number of scenes can exist at once and
/// each output format just reads what it needs.
///
/// - One [Marker] per vertex index, at the vertex location
/// - One [Label] per distinct location, nudged off the point by `offset`
/// - Cubic [Bounds] around the data so that the axes share one scale
///
/// Coincident vertices get a single [LabelKind::Stacked] label listing every
/// index, e.g. `"3,7"`, rather than several labels drawn on top of each other.
///
/// ```rust
/// # use bmtools_vertices::{scan, Tolerance};
/// # use bmtools_plot::{LabelKind, Scene};
/// let vertices = scan("vertices ( (0 0 0) (10 0 0) (0 0 0) );").unwrap();
/// let grouping = vertices.group(Tolerance::default());
/// let scene = Scene::new(&vertices, &grouping);
///
/// assert_eq!(scene.markers.len(), 3);
/// assert_eq!(scene.labels.len(), 2);
/// assert_eq!(scene.labels[0].text, "0,2");
/// assert_eq!(scene.labels[0].kind, LabelKind::Stacked);
/// assert_eq!(scene.offset, 0.3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Scene {
    /// Tolerance used to decide which vertices share a label
    pub tolerance: Tolerance,
    /// Distance labels are shifted from their point on every axis
    pub offset: f64,
    /// Equal aspect viewing box around all vertices
    pub bounds: Bounds,
    /// One marker for every vertex
    pub markers: Vec<Marker>,
    /// One label for every distinct location
    pub labels: Vec<Label>,
}

impl Scene {
    /// Fraction of the largest axis range used as the label offset
    pub const LABEL_OFFSET_FRACTION: f64 = 0.03;

    /// Build the scene for a set of vertices and their grouping
    ///
    /// The `grouping` must have been built from the same `vertices`, i.e.
    /// with `vertices.group(tolerance)`. Debug builds panic if the number of
    /// grouped vertices does not match.
    pub fn new(vertices: &Vertices, grouping: &Grouping) -> Self {
        debug_assert_eq!(
            vertices.len(),
            grouping.n_vertices(),
            "grouping was built from a different set of vertices"
        );

        let bounds = Bounds::new(vertices);
        let offset = bounds.max_range() * Self::LABEL_OFFSET_FRACTION;

        let markers = vertices
            .iter()
            .enumerate()
            .map(|(index, position)| Marker {
                index,
                position: *position,
                group: grouping.group_position(index).unwrap_or_default(),
            })
            .collect();

        let labels = grouping
            .iter()
            .map(|group| Label {
                text: group.label(),
                kind: match group.is_duplicate() {
                    true => LabelKind::Stacked,
                    false => LabelKind::Single,
                },
                indices: group.indices().to_vec(),
                anchor: group.representative(),
                position: group.representative().shift(offset),
            })
            .collect();

        Self {
            tolerance: grouping.tolerance(),
            offset,
            bounds,
            markers,
            labels,
        }
    }

    /// At least one label is stacked
    pub fn has_duplicates(&self) -> bool {
        self.labels.iter().any(Label::is_stacked)
    }

    /// Iterate over only the stacked labels
    pub fn stacked_labels(&self) -> impl Iterator<Item = &Label> {
        self.labels.iter().filter(|label| label.is_stacked())
    }
}

/// Point drawn for a single vertex
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    /// Vertex index
    pub index: usize,
    /// Vertex location
    pub position: Coordinate,
    /// Position of the vertex group in the scene labels
    pub group: usize,
}

/// Label styles, decided only by the number of vertices at a location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelKind {
    /// Only one vertex at this location
    Single,
    /// Several coincident vertices share this label
    Stacked,
}

impl std::fmt::Display for LabelKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Self::Single => "single",
            Self::Stacked => "stacked",
        };
        write!(f, "{s}")
    }
}

/// Text drawn next to a location
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Label {
    /// Label text, e.g. `"5"` or `"3,7"`
    pub text: String,
    /// Single or stacked
    pub kind: LabelKind,
    /// Every vertex index the label stands for, ascending
    pub indices: Vec<usize>,
    /// Representative coordinate of the group
    pub anchor: Coordinate,
    /// Where the text goes, i.e. `anchor` shifted by the scene offset
    pub position: Coordinate,
}

impl Label {
    /// Label stands for more than one vertex
    pub fn is_stacked(&self) -> bool {
        self.kind == LabelKind::Stacked
    }
}

/// Cube enclosing every vertex
///
/// Every axis gets the same width, the largest range of any axis, so that a
/// plot keeps the true proportions of the geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    /// Mid-point of the data on each axis
    pub centre: Coordinate,
    /// Half the largest axis range
    pub half_width: f64,
}

impl Bounds {
    /// Equal aspect bounds around a set of vertices
    pub fn new(vertices: &Vertices) -> Self {
        let min = vertices.min();
        let max = vertices.max();

        let range = [max.x - min.x, max.y - min.y, max.z - min.z];
        let max_range = range.into_iter().fold(0.0, f64::max);

        Self {
            centre: Coordinate::new(
                (max.x + min.x) * 0.5,
                (max.y + min.y) * 0.5,
                (max.z + min.z) * 0.5,
            ),
            half_width: max_range / 2.0,
        }
    }

    /// Largest range of the data on any one axis
    pub fn max_range(&self) -> f64 {
        self.half_width * 2.0
    }

    /// Lower corner of the cube
    pub fn lower(&self) -> Coordinate {
        self.centre.shift(-self.half_width)
    }

    /// Upper corner of the cube
    pub fn upper(&self) -> Coordinate {
        self.centre.shift(self.half_width)
    }
}
