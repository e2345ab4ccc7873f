//! Write operations for scenes

// standard library
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

// crate modules
use crate::error::Result;
use crate::scene::Scene;

// external crates
use log::info;

/// Write a [Scene] to a JSON file
///
/// This is a direct serialisation of everything in the scene, including the
/// label text, so that any plotting tool can draw the same labels.
///
/// ```text
/// {
///   "tolerance": 1e-6,
///   "offset": 0.03,
///   "bounds": { "centre": { "x": 0.5, ... }, "half_width": 0.5 },
///   "markers": [ { "index": 0, "position": { ... }, "group": 0 }, ... ],
///   "labels": [ { "text": "1,8", "kind": "stacked", "indices": [1, 8], ... } ]
/// }
/// ```
///
/// ```rust, no_run
/// # use bmtools_vertices::{read_vertices, Tolerance};
/// # use bmtools_plot::{write_json, Scene};
/// let vertices = read_vertices("system/blockMeshDict").unwrap();
/// let grouping = vertices.group(Tolerance::default());
///
/// write_json(&Scene::new(&vertices, &grouping), "./vertices.json").unwrap();
/// ```
pub fn write_json<P: AsRef<Path>>(scene: &Scene, path: P) -> Result<()> {
    let path = path.as_ref();
    info!("Writing {}", path.display());
    let writer = init_writer(path)?;
    serde_json::to_writer_pretty(writer, scene)?;
    Ok(())
}

/// Initialise a buffered writer from anything that can be turned into a path
fn init_writer<P: AsRef<Path>>(path: P) -> Result<BufWriter<File>> {
    let file = File::create(path)?;
    Ok(BufWriter::new(file))
}
