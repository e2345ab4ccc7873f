//! Command line tool for labelling blockMeshDict vertices
#![doc = include_str!("../readme.md")]

mod cli;
mod error;

// standard library
use std::process::ExitCode;

// internal modules
use cli::Cli;
use error::Result;

// bmtools modules
use bmtools_plot::{scene_to_vtk, write_json, write_vtk, Report, Scene};
use bmtools_vertices::{read_vertices, Tolerance};

// external crates
use clap::Parser;
use log::{debug, info, warn};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = logging_init(&cli) {
        eprintln!("{e}");
        return ExitCode::FAILURE;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // printed directly so that --quiet can not hide it
            eprintln!("error: {}", error_chain(&e));
            ExitCode::FAILURE
        }
    }
}

/// Read, group, and present the vertices of a single file
fn run(cli: &Cli) -> Result<()> {
    let tolerance = Tolerance::new(cli.tolerance)?;
    let vertices = read_vertices(&cli.file)?;
    let grouping = vertices.group(tolerance);
    debug!("{} distinct locations", grouping.len());

    println!("{}", Report::new(&vertices, &grouping));

    if grouping.has_duplicates() {
        warn!("Duplicate vertices found in {}", cli.file.display());
    }

    if cli.vtk.is_none() && cli.json.is_none() {
        return Ok(());
    }

    let scene = Scene::new(&vertices, &grouping);

    if let Some(path) = &cli.vtk {
        let path = write_vtk(scene_to_vtk(&scene), path, cli.format)?;
        info!("VTK written to {}", path.display());
    }

    if let Some(path) = &cli.json {
        write_json(&scene, path)?;
    }

    Ok(())
}

/// Error message followed by every underlying cause
fn error_chain(e: &dyn std::error::Error) -> String {
    let mut message = e.to_string();
    let mut source = e.source();
    while let Some(cause) = source {
        message += &format!("\n  caused by: {cause}");
        source = cause.source();
    }
    message
}

/// Sets up logging at runtime to allow for multiple verbosity levels
fn logging_init(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .modules([module_path!(), "bmtools_vertices", "bmtools_plot"])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .show_level(true)
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    fn cli(args: &[&str]) -> Cli {
        let mut argv = vec!["bmplot"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn missing_section_fails() {
        let result = run(&cli(&["../vertices/data/missing_section.dict", "-q"]));
        assert!(matches!(
            result,
            Err(Error::VerticesError(bmtools_vertices::Error::SectionNotFound))
        ));
    }

    #[test]
    fn invalid_tolerance_fails() {
        let result = run(&cli(&["../vertices/data/clean.dict", "--tolerance", "-1"]));
        assert!(matches!(
            result,
            Err(Error::VerticesError(bmtools_vertices::Error::InvalidTolerance(_)))
        ));
    }

    #[test]
    fn clean_file_succeeds() {
        assert!(run(&cli(&["../vertices/data/clean.dict"])).is_ok());
    }

    #[test]
    fn chain_includes_causes() {
        let e = Error::from(bmtools_vertices::Error::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        )));
        assert_eq!(
            error_chain(&e),
            "failed input/output stream\n  caused by: no such file"
        );
    }

    #[test]
    fn chain_without_causes() {
        let e = Error::from(bmtools_vertices::Error::SectionNotFound);
        assert_eq!(error_chain(&e), "vertices section not found");
    }
}
