//! Command line arguments

// standard library
use std::path::PathBuf;

// bmtools modules
use bmtools_plot::VtkFormat;
use bmtools_vertices::Tolerance;

// external crates
use clap::Parser;

/// Label blockMeshDict vertices and check for duplicated points
///
/// Prints a summary of the vertices found, any points that share a location
/// within the tolerance, and the full coordinate listing.
#[derive(Parser, Debug)]
#[command(version, about, arg_required_else_help(true))]
pub struct Cli {
    /// Path to the blockMeshDict
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Distance within which vertices are duplicates
    #[arg(short, long, value_name = "TOL", default_value_t = Tolerance::DEFAULT)]
    #[arg(allow_negative_numbers(true))]
    pub tolerance: f64,

    /// Write the labelled points to a VTK file
    #[arg(long, value_name = "PATH")]
    pub vtk: Option<PathBuf>,

    /// VTK file format
    #[arg(short, long, value_enum, default_value_t)]
    pub format: VtkFormat,

    /// Write the labelled scene to a JSON file
    #[arg(long, value_name = "PATH")]
    pub json: Option<PathBuf>,

    /// Verbose logging (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long)]
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["bmplot", "blockMeshDict"]).unwrap();
        assert_eq!(cli.file, PathBuf::from("blockMeshDict"));
        assert_eq!(cli.tolerance, 1e-6);
        assert_eq!(cli.format, VtkFormat::Xml);
        assert!(cli.vtk.is_none());
        assert!(cli.json.is_none());
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn all_options() {
        let cli = Cli::try_parse_from([
            "bmplot", "dict", "--tolerance", "1e-3", "--vtk", "out", "--format", "ascii",
            "--json", "out.json", "-vv",
        ])
        .unwrap();
        assert_eq!(cli.tolerance, 1e-3);
        assert_eq!(cli.vtk, Some(PathBuf::from("out")));
        assert_eq!(cli.format, VtkFormat::LegacyAscii);
        assert_eq!(cli.json, Some(PathBuf::from("out.json")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn unknown_format() {
        assert!(Cli::try_parse_from(["bmplot", "dict", "--format", "png"]).is_err());
    }
}
