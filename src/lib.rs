//! `bmtools` is a small toolkit for inspecting the vertices of OpenFOAM
//! blockMeshDict files
//!
#![doc = include_str!("../readme.md")]
#![deny(missing_docs, missing_debug_implementations)]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]

// Re-exports of toolkit crates.
#[doc(inline)]
pub use bmtools_utils as utils;

#[doc(inline)]
pub use bmtools_vertices as vertices;

#[cfg(feature = "plot")]
#[cfg_attr(docsrs, doc(cfg(feature = "plot")))]
#[doc(inline)]
pub use bmtools_plot as plot;
