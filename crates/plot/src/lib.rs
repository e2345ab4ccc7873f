//! Labelled output for blockMeshDict vertices
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod report;
mod scene;
mod writer;

pub mod vtk;

// inline the important types for a nice public API
#[doc(inline)]
pub use scene::{Bounds, Label, LabelKind, Marker, Scene};

#[doc(inline)]
pub use report::Report;

#[doc(inline)]
pub use writer::write_json;

#[doc(inline)]
pub use vtk::{scene_to_vtk, write_vtk, SceneToVtk, VtkFormat};

#[doc(inline)]
pub use error::{Error, Result};
