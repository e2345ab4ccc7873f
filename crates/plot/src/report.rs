// bmtools modules
use bmtools_utils::f;
use bmtools_vertices::{Grouping, Vertices};

/// Width of the banner lines in the duplicate check
const BANNER_WIDTH: usize = 70;

/// Console summary of the vertices and any duplicates
///
/// Borrows the vertices and grouping for as long as it is needed. Printing
/// the report gives, in order:
///
/// - the number of vertices and a preview of the first few
/// - the duplicate vertex check
/// - a listing of every vertex coordinate
///
/// Each section is also available on its own.
///
/// ```rust
/// # use bmtools_vertices::{scan, Tolerance};
/// # use bmtools_plot::Report;
/// let vertices = scan("vertices ( (0 0 0) (1 0 0) (0 0 0) );").unwrap();
/// let grouping = vertices.group(Tolerance::default());
///
/// let report = Report::new(&vertices, &grouping);
/// assert!(report.duplicate_check().contains("Vertex indices: [0, 2]"));
/// println!("{report}");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Report<'a> {
    vertices: &'a Vertices,
    grouping: &'a Grouping,
    preview: usize,
}

impl<'a> Report<'a> {
    /// Number of vertices shown in the summary preview by default
    pub const DEFAULT_PREVIEW: usize = 5;

    /// Create a report for a set of vertices and their grouping
    pub fn new(vertices: &'a Vertices, grouping: &'a Grouping) -> Self {
        Self {
            vertices,
            grouping,
            preview: Self::DEFAULT_PREVIEW,
        }
    }

    /// Change how many vertices are previewed in the summary
    pub fn preview(mut self, n: usize) -> Self {
        self.preview = n;
        self
    }

    /// Vertex count and the first few parsed vertices
    pub fn summary(&self) -> String {
        let mut s = f!("Found {} vertices\n", self.vertices.len());
        s += "First few vertices parsed:\n";
        for (i, vertex) in self.vertices.iter().enumerate().take(self.preview) {
            s += &f!("  Vertex {i}: {vertex}\n");
        }
        s
    }

    /// Every location shared by more than one vertex, or confirmation that
    /// there are none
    pub fn duplicate_check(&self) -> String {
        let banner = "=".repeat(BANNER_WIDTH);

        let mut s = f!(
            "{banner}\nDUPLICATE VERTEX CHECK (tolerance {})\n{banner}\n",
            self.grouping.tolerance()
        );

        for group in self.grouping.duplicates() {
            s += "\nWARNING: Duplicate vertices at location:\n";
            s += &f!("   Coordinates: {}\n", group.representative());
            s += &f!("   Vertex indices: {:?}\n", group.indices());
            s += &f!("   Number of duplicates: {}\n", group.len());
        }

        if self.grouping.has_duplicates() {
            s += &f!("\n{banner}\n");
            s += "DUPLICATE VERTICES DETECTED!\n";
            s += "This may indicate a problem in your blockMeshDict.\n";
            s += "Duplicates share a single stacked label, e.g. \"3,7\".\n";
            s += &f!("{banner}\n");
        } else {
            s += "\nNo duplicate vertices found - mesh topology is clean!\n";
        }

        s
    }

    /// Every vertex and its coordinates
    pub fn listing(&self) -> String {
        let mut s = "Vertex coordinates:\n".to_string();
        for (i, vertex) in self.vertices.iter().enumerate() {
            s += &f!("  {i}: {vertex}\n");
        }
        s
    }
}

impl std::fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.summary(),
            self.duplicate_check(),
            self.listing()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bmtools_vertices::{scan, Tolerance};

    #[test]
    fn summary_previews_first_vertices() {
        let vertices = scan("vertices ( (0 0 0) (1 0 0) (2 0 0) (3 0 0) );").unwrap();
        let grouping = vertices.group(Tolerance::default());
        let report = Report::new(&vertices, &grouping).preview(2);

        let summary = report.summary();
        assert!(summary.starts_with("Found 4 vertices\n"));
        assert!(summary.contains("  Vertex 1: (1.000000, 0.000000, 0.000000)\n"));
        assert!(!summary.contains("Vertex 2:"));
    }

    #[test]
    fn clean_duplicate_check() {
        let vertices = scan("vertices ( (0 0 0) (1 0 0) );").unwrap();
        let grouping = vertices.group(Tolerance::default());
        let check = Report::new(&vertices, &grouping).duplicate_check();

        assert!(check.contains("No duplicate vertices found"));
        assert!(!check.contains("WARNING"));
    }

    #[test]
    fn duplicates_are_listed() {
        let vertices = scan("vertices ( (0 0 0) (1 0.5 0) (2 0 0) (1 0.5 0) (1 0.5 0) );").unwrap();
        let grouping = vertices.group(Tolerance::default());
        let check = Report::new(&vertices, &grouping).duplicate_check();

        assert!(check.contains("   Coordinates: (1.000000, 0.500000, 0.000000)\n"));
        assert!(check.contains("   Vertex indices: [1, 3, 4]\n"));
        assert!(check.contains("   Number of duplicates: 3\n"));
        assert!(check.contains("DUPLICATE VERTICES DETECTED!"));
        assert_eq!(check.matches("WARNING").count(), 1);
    }

    #[test]
    fn full_report_lists_every_vertex() {
        let vertices = scan("vertices ( (0 0 0) (1 0 0) (2 0 0) (3 0 0) (4 0 0) (5 0 0) (6 0 0) );").unwrap();
        let grouping = vertices.group(Tolerance::default());
        let report = Report::new(&vertices, &grouping).to_string();

        assert!(report.contains("  6: (6.000000, 0.000000, 0.000000)\n"));
        assert!(!report.contains("Vertex 5:"));
        assert!(report.contains("DUPLICATE VERTEX CHECK (tolerance 1.00e-06)"));
    }
}
