//! Convert scenes to VTK poly data for ParaView, VisIt, etc...
//!
//! Every vertex becomes a point with a single vertex cell so that it shows up
//! as a glyph without any filters. Point data arrays carry the identity of
//! each vertex:
//!
//! | Array            | Content                                           |
//! | ---------------- | ------------------------------------------------- |
//! | `index`          | vertex index                                      |
//! | `group`          | position of the vertex location in the scene      |
//! | `multiplicity`   | number of vertices sharing the location           |
//! | `representative` | lowest vertex index at the location               |
//!
//! Labelling points by `index` gives the plain vertex numbers, and filtering
//! on `multiplicity > 1` picks out every duplicate.
//!
//! ```rust, no_run
//! # use bmtools_vertices::{read_vertices, Tolerance};
//! # use bmtools_plot::Scene;
//! # use bmtools_plot::vtk::{write_vtk, SceneToVtk, VtkFormat};
//! # use vtkio::model::ByteOrder;
//! let vertices = read_vertices("system/blockMeshDict").unwrap();
//! let grouping = vertices.group(Tolerance::default());
//! let scene = Scene::new(&vertices, &grouping);
//!
//! let converter = SceneToVtk::builder()
//!     .byte_order(ByteOrder::LittleEndian)
//!     .build();
//!
//! // Writes "./vertices.vtk" as a legacy ASCII file
//! write_vtk(converter.convert(&scene), "./vertices", VtkFormat::LegacyAscii).unwrap();
//! ```

// internal modules
mod builder;
mod convert;

// re-exports for clean API + documentation
#[doc(inline)]
pub use builder::SceneToVtkBuilder;

#[doc(inline)]
pub use convert::SceneToVtk;

// standard library
use std::path::{Path, PathBuf};

// crate modules
use crate::error::Result;
use crate::Scene;

// external crates
use log::info;
use vtkio::model::Vtk;

/// Supported VTK output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum VtkFormat {
    /// Legacy ASCII text file (`.vtk`)
    #[value(name = "ascii")]
    LegacyAscii,
    /// Legacy binary file, always big endian (`.vtk`)
    #[value(name = "binary")]
    LegacyBinary,
    /// XML poly data file (`.vtp`)
    #[default]
    Xml,
}

impl VtkFormat {
    /// File extension expected by plotting software for the format
    pub fn extension(&self) -> &str {
        match self {
            Self::LegacyAscii | Self::LegacyBinary => "vtk",
            Self::Xml => "vtp",
        }
    }
}

impl std::fmt::Display for VtkFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let s = match self {
            Self::LegacyAscii => "legacy ascii",
            Self::LegacyBinary => "legacy binary",
            Self::Xml => "xml",
        };
        write!(f, "{s}")
    }
}

/// Convert a [Scene] with the default [SceneToVtk] configuration
///
/// ```rust
/// # use bmtools_vertices::{scan, Tolerance};
/// # use bmtools_plot::{scene_to_vtk, Scene};
/// let vertices = scan("vertices ( (0 0 0) (1 0 0) );").unwrap();
/// let scene = Scene::new(&vertices, &vertices.group(Tolerance::default()));
/// let vtk = scene_to_vtk(&scene);
/// ```
pub fn scene_to_vtk(scene: &Scene) -> Vtk {
    SceneToVtk::default().convert(scene)
}

/// Write a [Vtk] to file in the chosen format
///
/// The extension of `path` is replaced with the one that matches `format`
/// (see [VtkFormat::extension()]), and the final path is returned.
pub fn write_vtk<P: AsRef<Path>>(vtk: Vtk, path: P, format: VtkFormat) -> Result<PathBuf> {
    let path = path.as_ref().with_extension(format.extension());
    info!("Writing {} ({format})", path.display());

    match format {
        VtkFormat::LegacyAscii => vtk.export_ascii(&path)?,
        VtkFormat::LegacyBinary => vtk.export_be(&path)?,
        VtkFormat::Xml => vtk.export(&path)?,
    }

    Ok(path)
}
