// internal modules
use crate::vtk::SceneToVtk;

// extrenal crates
use vtkio::model::ByteOrder;

/// Builder implementation for SceneToVtk configuration
///
/// The fields of [SceneToVtk] are left public for direct use but the module
/// also implements a builder.
///
/// To get the final [SceneToVtk] from the builder, call
/// [build()](SceneToVtkBuilder::build).
///
/// ```rust
/// # use bmtools_plot::vtk::SceneToVtk;
/// # use vtkio::model::ByteOrder;
/// // Make a new builder, change some values
/// let converter = SceneToVtk::builder()
///     .byte_order(ByteOrder::LittleEndian)
///     .include_groups(false)
///     .build();
///
/// assert_eq!(converter.include_groups, false);
/// ```
#[derive(Debug)]
pub struct SceneToVtkBuilder {
    /// Byte ordering as big or little endian
    byte_order: ByteOrder,
    /// Include group, multiplicity, and representative arrays
    include_groups: bool,
    /// Replacement for the generated title
    title: Option<String>,
}

impl SceneToVtkBuilder {
    /// Create a new instance of the builder with default parameters
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the [SceneToVtk] type
    pub fn build(self) -> SceneToVtk {
        SceneToVtk {
            byte_order: self.byte_order,
            include_groups: self.include_groups,
            title: self.title,
        }
    }

    /// Set the byte ordering
    ///
    /// Note that VisIt only reads big endian, even though most systems are
    /// little endian. Defaults to big endian for convenience.
    pub fn byte_order(mut self, order: ByteOrder) -> Self {
        self.byte_order = order;
        self
    }

    /// Include the group data arrays
    ///
    /// The `index` array is always written. The `group`, `multiplicity`, and
    /// `representative` arrays are included by default.
    pub fn include_groups(mut self, include: bool) -> Self {
        self.include_groups = include;
        self
    }

    /// Use a custom title in the file header
    ///
    /// By default this names the tolerance used for grouping.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

impl Default for SceneToVtkBuilder {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            include_groups: true,
            title: None,
        }
    }
}
