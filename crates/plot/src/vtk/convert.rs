// bmtools modules
use bmtools_utils::f;

// internal modules
use crate::vtk::SceneToVtkBuilder;
use crate::Scene;

// extrenal crates
use vtkio::model::{
    Attribute, Attributes, ByteOrder, DataArray, DataSet, ElementType, IOBuffer, PolyDataPiece,
    Version, VertexNumbers, Vtk,
};

/// Convert scenes to vtk poly data for plotting
///
/// All of the logic for turning scene markers into the right VTK types and
/// formats is implemented here.
///
/// The fields remain public for direct use, but for convenience and style
/// preference a builder pattern is also implemented and recommended.
///
/// ```rust
/// # use bmtools_vertices::{scan, Tolerance};
/// # use bmtools_plot::{Scene, SceneToVtk};
/// # use vtkio::model::ByteOrder;
/// let vertices = scan("vertices ( (0 0 0) (1 0 0) (0 0 0) );").unwrap();
/// let scene = Scene::new(&vertices, &vertices.group(Tolerance::default()));
///
/// let converter = SceneToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .build();
///
/// let vtk = converter.convert(&scene);
/// assert_eq!(vtk.byte_order, ByteOrder::LittleEndian);
/// ```
#[derive(Debug, PartialEq)]
pub struct SceneToVtk {
    /// Byte ordering as big or little endian
    pub byte_order: ByteOrder,
    /// Include group, multiplicity, and representative arrays
    pub include_groups: bool,
    /// Replacement for the generated title
    pub title: Option<String>,
}

// Public API
impl SceneToVtk {
    /// Start with the default configuration
    pub fn new() -> SceneToVtk {
        Default::default()
    }

    /// Get an instance of the [SceneToVtkBuilder]
    pub fn builder() -> SceneToVtkBuilder {
        SceneToVtkBuilder::default()
    }

    /// Convert a [Scene] to a vtkio::Vtk object
    ///
    /// Once the configuration is set through either the builder or changing
    /// the fields directly, convert any [Scene] into a Vtk ready for writing.
    pub fn convert(&self, scene: &Scene) -> Vtk {
        Vtk {
            version: Version::Auto,
            title: self.title(scene),
            byte_order: self.byte_order,
            file_path: None,
            data: DataSet::inline(PolyDataPiece {
                points: Self::points(scene).into(),
                verts: Some(Self::vertex_cells(scene)),
                lines: None,
                polys: None,
                strips: None,
                data: self.collect_attributes(scene),
            }),
        }
    }
}

impl Default for SceneToVtk {
    fn default() -> Self {
        SceneToVtkBuilder::default().build()
    }
}

// Internal conversion details
impl SceneToVtk {
    /// Title in the file header
    fn title(&self, scene: &Scene) -> String {
        match &self.title {
            Some(title) => title.clone(),
            None => f!("blockMeshDict vertices (tolerance {})", scene.tolerance),
        }
    }

    /// Flat list of marker coordinates, [x0, y0, z0, x1, y1, ...]
    fn points(scene: &Scene) -> Vec<f64> {
        scene
            .markers
            .iter()
            .flat_map(|marker| marker.position.as_array())
            .collect()
    }

    /// One single-point vertex cell for every marker
    fn vertex_cells(scene: &Scene) -> VertexNumbers {
        let n = scene.markers.len() as u64;
        VertexNumbers::XML {
            connectivity: (0..n).collect(),
            offsets: (1..=n).collect(),
        }
    }

    /// Collect the point data arrays
    fn collect_attributes(&self, scene: &Scene) -> Attributes {
        let mut attributes = Attributes::new();

        let index = scene.markers.iter().map(|m| m.index).collect();
        attributes.point.push(Self::scalars("index", index));

        if self.include_groups {
            let group = scene.markers.iter().map(|m| m.group).collect();
            attributes.point.push(Self::scalars("group", group));

            let (multiplicity, representative): (Vec<usize>, Vec<usize>) = scene
                .markers
                .iter()
                .map(|m| match scene.labels.get(m.group) {
                    Some(label) => (
                        label.indices.len(),
                        label.indices.first().copied().unwrap_or(m.index),
                    ),
                    None => (1, m.index),
                })
                .unzip();
            attributes
                .point
                .push(Self::scalars("multiplicity", multiplicity));
            attributes
                .point
                .push(Self::scalars("representative", representative));
        }

        attributes
    }

    /// Unsigned integer scalar point data, wide enough for any vertex index
    fn scalars(name: &str, values: Vec<usize>) -> Attribute {
        Attribute::DataArray(DataArray {
            name: name.to_string(),
            elem: ElementType::Scalars {
                num_comp: 1,
                lookup_table: None,
            },
            data: IOBuffer::U64(values.into_iter().map(|v| v as u64).collect()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmtools_vertices::{scan, Tolerance};

    fn scene() -> Scene {
        let vertices = scan("vertices ( (0 0 0) (1 0 0) (0 0 0) (1 1 1) );").unwrap();
        let grouping = vertices.group(Tolerance::default());
        Scene::new(&vertices, &grouping)
    }

    fn array(attributes: &Attributes, name: &str) -> Vec<u64> {
        attributes
            .point
            .iter()
            .find_map(|attribute| match attribute {
                Attribute::DataArray(DataArray {
                    name: n,
                    data: IOBuffer::U64(values),
                    ..
                }) if n == name => Some(values.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    #[test]
    fn flat_points_in_index_order() {
        let points = SceneToVtk::points(&scene());
        assert_eq!(
            points,
            vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 1.0, 1.0]
        );
    }

    #[test]
    fn one_cell_per_marker() {
        match SceneToVtk::vertex_cells(&scene()) {
            VertexNumbers::XML {
                connectivity,
                offsets,
            } => {
                assert_eq!(connectivity, vec![0, 1, 2, 3]);
                assert_eq!(offsets, vec![1, 2, 3, 4]);
            }
            _ => panic!("expected xml style vertex numbers"),
        }
    }

    #[test]
    fn group_arrays() {
        let attributes = SceneToVtk::new().collect_attributes(&scene());

        assert_eq!(array(&attributes, "index"), vec![0, 1, 2, 3]);
        assert_eq!(array(&attributes, "group"), vec![0, 1, 0, 2]);
        assert_eq!(array(&attributes, "multiplicity"), vec![2, 1, 2, 1]);
        assert_eq!(array(&attributes, "representative"), vec![0, 1, 0, 3]);
    }

    #[test]
    fn index_only() {
        let converter = SceneToVtk::builder().include_groups(false).build();
        let attributes = converter.collect_attributes(&scene());

        assert_eq!(attributes.point.len(), 1);
        assert_eq!(array(&attributes, "index"), vec![0, 1, 2, 3]);
    }

    #[test]
    fn large_indices_are_not_truncated() {
        let index = i32::MAX as usize + 7;
        match SceneToVtk::scalars("index", vec![index]) {
            Attribute::DataArray(DataArray {
                data: IOBuffer::U64(values),
                ..
            }) => assert_eq!(values, vec![index as u64]),
            _ => panic!("expected unsigned point data"),
        }
    }

    #[test]
    fn titles() {
        let scene = scene();
        assert_eq!(
            SceneToVtk::new().title(&scene),
            "blockMeshDict vertices (tolerance 1.00e-06)"
        );

        let converter = SceneToVtk::builder().title("custom").build();
        assert_eq!(converter.title(&scene), "custom");
    }
}
