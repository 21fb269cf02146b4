//! Reader and writer for the OFF family of polygon mesh formats.
//!
//! Four ASCII variants are supported, selected by the header token:
//!
//! | Token   | Per-vertex fields after `x y z` |
//! |---------|---------------------------------|
//! | `OFF`   | none                            |
//! | `NOFF`  | `nx ny nz`                      |
//! | `COFF`  | `r g b [a]` (0-255)             |
//! | `NCOFF` | `nx ny nz r g b [a]`            |
//!
//! The reader is tolerant of real-world files: blank lines and `#` comments
//! may appear anywhere, and vertex or face lines that do not fit the declared
//! variant are skipped rather than rejected. Structural problems (unknown
//! header, bad counts, a truncated section, an index past the vertex list)
//! are fatal, so a successful decode always yields an index-valid mesh.
//!
//! Some tolerances go further than a literal field count would:
//!
//! - Everything from `#` to the end of a line is a comment, so
//!   `0 0 0 # apex` is a valid `OFF` vertex and not a four-field line.
//! - Bytes that are not valid UTF-8 are replaced, so a Latin-1 comment
//!   does not abort the decode.
//! - A face record may carry fields after its indices. An `r g b [a]` tail
//!   (0-255) becomes the face color; any other tail is ignored. Face colors
//!   take precedence over vertex colors, and each vertex keeps the color of
//!   the first face that references it.
//!
//! # Layer 0 Crate
//!
//! Only `mesh-types`, `nalgebra`, `thiserror` and `tracing` are required.
//! A host application drives the codec through [`read_off`] / [`write_off`]
//! (or the path-based [`MeshOperator`] adapters) and converts the resulting
//! [`PolyMesh`](mesh_types::PolyMesh) into its own scene objects.
//!
//! # Three-index records
//!
//! By default a face record `3 a b c` is read as the loose edge `[a, b]`,
//! matching legacy importers. Use [`ImportParams::triangles_as_faces`] to
//! read such records as triangles.
//!
//! # Example
//!
//! ```
//! use mesh_off::{decode_str, encode_string, ExportParams};
//!
//! let mesh = decode_str("OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n").unwrap();
//! assert_eq!(mesh.vertices.len(), 4);
//! assert_eq!(mesh.faces[0].indices(), &[0, 1, 2, 3]);
//!
//! let text = encode_string(&mesh, &ExportParams::colors()).unwrap();
//! assert!(text.starts_with("COFF\n4 1 0\n"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod assemble;
mod axis;
mod body;
mod decode;
mod encode;
mod error;
mod header;
mod lines;
mod operator;
mod params;
mod variant;

pub use axis::{Axis, AxisRemap};
pub use body::DecodeStats;
pub use decode::{OffDocument, decode_str, load_off, read_off};
pub use encode::{encode_string, save_off, write_off};
pub use error::{FormatError, IoError, IoResult};
pub use operator::{ExportOperator, ImportOperator, MeshOperator};
pub use params::{ExportParams, ImportParams, TrianglePolicy};
pub use variant::FormatVariant;

use std::path::Path;

/// Canonical file extension for OFF documents.
pub const EXTENSION: &str = "off";

/// True if `path` has an `.off` extension (any case).
///
/// # Example
///
/// ```
/// use mesh_off::is_off_path;
///
/// assert!(is_off_path("model.off"));
/// assert!(is_off_path("MODEL.OFF"));
/// assert!(!is_off_path("model.obj"));
/// assert!(!is_off_path("off"));
/// ```
#[must_use]
pub fn is_off_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(EXTENSION))
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::{MeshTopology, VertexColor};

    #[test]
    fn square_example() {
        let mesh = decode_str("OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n").unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.faces[0].indices(), &[0, 1, 2, 3]);
    }

    #[test]
    fn colored_vertex_example() {
        let mesh = decode_str("COFF\n1 0 0\n0 0 0 255 0 0\n").unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.colors[0], VertexColor::new(1.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn color_channels_survive_round_trip() {
        let mesh = decode_str("COFF\n2 0 0\n0 0 0 255 0 0\n1 1 1 0 255 0 128\n").unwrap();
        let text = encode_string(&mesh, &ExportParams::colors()).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[2].ends_with(" 255 0 0 255"));
        // Alpha is always written opaque
        assert!(lines[3].ends_with(" 0 255 0 255"));
    }

    #[test]
    fn detects_off_paths() {
        assert!(is_off_path("a/b/mesh.off"));
        assert!(is_off_path("mesh.Off"));
        assert!(!is_off_path("mesh.off.bak"));
        assert!(!is_off_path("mesh"));
    }
}
