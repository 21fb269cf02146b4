//! OFF import: header, body, assembly.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use mesh_types::{MeshBounds, PolyMesh};
use tracing::{debug, info, warn};

use crate::assemble::assemble;
use crate::body::{DecodeStats, read_records, read_vertices};
use crate::error::IoResult;
use crate::header::read_header;
use crate::lines::LineSource;
use crate::params::ImportParams;
use crate::variant::FormatVariant;

/// A decoded OFF document.
#[derive(Debug, Clone, PartialEq)]
pub struct OffDocument {
    /// Display name supplied by the caller (the file stem for [`load_off`]).
    pub name: String,
    /// Variant declared by the header.
    pub variant: FormatVariant,
    /// The assembled mesh.
    pub mesh: PolyMesh,
    /// Lines skipped while decoding.
    pub stats: DecodeStats,
}

/// Decode an OFF document from a buffered reader.
///
/// Blank lines and `#` comments are ignored anywhere. Vertex and face lines
/// that do not parse for the declared variant are skipped; see
/// [`OffDocument::stats`] for how many.
///
/// # Errors
///
/// Returns [`IoError::Format`](crate::IoError::Format) if the header is not
/// recognised, the counts are malformed, either section ends early, or a
/// record references a missing vertex. Read failures are returned as
/// [`IoError::Io`](crate::IoError::Io).
///
/// # Example
///
/// ```
/// use mesh_off::{read_off, ImportParams};
/// use mesh_types::MeshTopology;
///
/// let text = "OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n";
/// let doc = read_off(text.as_bytes(), "square", &ImportParams::default()).unwrap();
///
/// assert_eq!(doc.mesh.vertex_count(), 4);
/// assert_eq!(doc.mesh.faces[0].indices(), &[0, 1, 2, 3]);
/// ```
pub fn read_off<R: BufRead>(reader: R, name: &str, params: &ImportParams) -> IoResult<OffDocument> {
    let mut lines = LineSource::new(reader);
    let header = read_header(&mut lines)?;

    let mut stats = DecodeStats {
        declared_edges: header.edge_count,
        ..DecodeStats::default()
    };

    let vertices = read_vertices(&mut lines, header.variant, header.vertex_count, &mut stats)?;
    let records = read_records(
        &mut lines,
        header.face_count,
        params.triangle_policy,
        &mut stats,
    )?;
    let mut mesh = assemble(vertices, records, header.variant)?;

    if !params.axis_remap.is_identity() {
        mesh.transform(params.axis_remap.matrix());
    }

    if stats.skipped_lines() > 0 {
        warn!(
            document = name,
            skipped_vertex_lines = stats.skipped_vertex_lines,
            skipped_face_lines = stats.skipped_face_lines,
            "Skipped malformed lines while decoding OFF"
        );
    }

    Ok(OffDocument {
        name: name.to_string(),
        variant: header.variant,
        mesh,
        stats,
    })
}

/// Load an OFF file.
///
/// The document name is the file stem.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`](crate::IoError::FileNotFound) if the
/// file does not exist, plus everything [`read_off`] can return.
///
/// # Example
///
/// ```no_run
/// use mesh_off::{load_off, ImportParams};
///
/// let doc = load_off("model.off", &ImportParams::default()).unwrap();
/// println!("{}: {} vertices", doc.name, doc.mesh.vertices.len());
/// ```
pub fn load_off<P: AsRef<Path>>(path: P, params: &ImportParams) -> IoResult<OffDocument> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| crate::IoError::from_open(e, path))?;

    let name = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();

    let doc = read_off(BufReader::new(file), &name, params)?;

    info!(
        "Loaded {:?} ({}): {} vertices, {} faces, {} edges",
        path,
        doc.variant,
        doc.mesh.vertices.len(),
        doc.mesh.faces.len(),
        doc.mesh.edges.len()
    );
    if let Some(bounds) = doc.mesh.bounds_opt() {
        debug!(
            "Bounding box: [{:.3}, {:.3}, {:.3}] to [{:.3}, {:.3}, {:.3}]",
            bounds.min.x, bounds.min.y, bounds.min.z, bounds.max.x, bounds.max.y, bounds.max.z
        );
    }

    Ok(doc)
}

/// Decode an OFF document held in memory, with default parameters.
///
/// # Errors
///
/// See [`read_off`].
///
/// # Example
///
/// ```
/// use mesh_off::decode_str;
/// use mesh_types::VertexColor;
///
/// let mesh = decode_str("COFF\n1 0 0\n0 0 0 255 0 0\n").unwrap();
/// assert_eq!(mesh.colors, vec![VertexColor::RED]);
/// ```
pub fn decode_str(text: &str) -> IoResult<PolyMesh> {
    read_off(text.as_bytes(), "", &ImportParams::default()).map(|doc| doc.mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisRemap;
    use crate::error::{FormatError, IoError};
    use crate::params::TrianglePolicy;
    use mesh_types::{Face, MeshTopology, Point3, Vector3, VertexColor};

    const SQUARE: &str = "OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n";

    #[test]
    fn decodes_square() {
        let mesh = decode_str(SQUARE).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.edge_count(), 0);
        assert_eq!(mesh.faces[0], Face::from([0, 1, 2, 3]));
        assert_eq!(mesh.vertices[2], Point3::new(1.0, 1.0, 0.0));
    }

    #[test]
    fn decodes_single_colored_vertex() {
        let mesh = decode_str("COFF\n1 0 0\n0 0 0 255 0 0\n").unwrap();
        assert_eq!(mesh.vertex_count(), 1);
        assert_eq!(mesh.colors, vec![VertexColor::new(1.0, 0.0, 0.0, 1.0)]);
    }

    #[test]
    fn decodes_normals() {
        let text = "NOFF\n3 0 0\n0 0 0 0 0 1\n1 0 0 0 0 1\n0 1 0 0 0 1\n";
        let mesh = decode_str(text).unwrap();
        assert_eq!(mesh.normals, vec![Vector3::z(); 3]);
        assert!(mesh.colors.is_empty());
    }

    #[test]
    fn document_metadata() {
        let text = "\n# exported by hand\nOFF\n4 1 6\n0 0 0\n1 0 0\n1 1\n1 1 0\n0 1 0\n4 0 1 2 3\n";
        let doc = read_off(text.as_bytes(), "square", &ImportParams::default()).unwrap();
        assert_eq!(doc.name, "square");
        assert_eq!(doc.variant, FormatVariant::Plain);
        assert_eq!(doc.stats.skipped_vertex_lines, 1);
        assert_eq!(doc.stats.skipped_face_lines, 0);
        assert_eq!(doc.stats.declared_edges, 6);
    }

    #[test]
    fn triangle_policy_controls_three_index_records() {
        let text = "OFF\n3 1 0\n0 0 0\n1 0 0\n0 1 0\n3 0 1 2\n";

        let legacy = decode_str(text).unwrap();
        assert!(legacy.faces.is_empty());
        assert_eq!(legacy.edges, vec![[0, 1]]);

        let doc = read_off(
            text.as_bytes(),
            "tri",
            &ImportParams::default().with_triangle_policy(TrianglePolicy::Face),
        )
        .unwrap();
        assert_eq!(doc.mesh.faces, vec![Face::from([0, 1, 2])]);
        assert!(doc.mesh.edges.is_empty());
    }

    #[test]
    fn applies_axis_remap() {
        let params = ImportParams::default().with_axis_remap(AxisRemap::y_up_to_z_up());
        let doc = read_off("OFF\n1 0 0\n0 1 0\n".as_bytes(), "", &params).unwrap();
        assert_eq!(doc.mesh.vertices[0], Point3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn out_of_range_index_fails() {
        let text = "OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 4\n";
        let err = decode_str(text).unwrap_err();
        assert!(matches!(
            err.as_format(),
            Some(FormatError::IndexOutOfRange { index: 4, vertex_count: 4, .. })
        ));
    }

    #[test]
    fn truncated_sections_fail() {
        let err = decode_str("OFF\n4 1 0\n0 0 0\n1 0 0\n").unwrap_err();
        assert!(matches!(
            err.as_format(),
            Some(FormatError::TruncatedVertexSection { expected: 4, found: 2 })
        ));

        let err = decode_str("OFF\n4 2 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n").unwrap_err();
        assert!(matches!(
            err.as_format(),
            Some(FormatError::TruncatedFaceSection { expected: 2, found: 1 })
        ));
    }

    #[test]
    fn latin1_comment_does_not_abort() {
        let bytes: &[u8] = b"OFF\n# cr\xe9\xe9 par moi\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3\n";
        let doc = read_off(bytes, "latin1", &ImportParams::default()).unwrap();
        assert_eq!(doc.mesh.vertex_count(), 4);
        assert_eq!(doc.mesh.faces, vec![Face::from([0, 1, 2, 3])]);
        assert_eq!(doc.stats.skipped_lines(), 0);

        // A stray byte inside a data line only costs that line
        let bytes: &[u8] = b"OFF\n2 0 0\n0 \xe9 0\n0 0 0\n1 0 0\n";
        let doc = read_off(bytes, "latin1", &ImportParams::default()).unwrap();
        assert_eq!(doc.stats.skipped_vertex_lines, 1);
        assert_eq!(doc.mesh.vertices[1], Point3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn trailing_comment_does_not_count_as_a_field() {
        let mesh = decode_str("OFF\n1 0 0\n0 0 2 # apex\n").unwrap();
        assert_eq!(mesh.vertices, vec![Point3::new(0.0, 0.0, 2.0)]);
    }

    #[test]
    fn face_with_trailing_color() {
        let mesh = decode_str("OFF\n4 1 0\n0 0 0\n1 0 0\n1 1 0\n0 1 0\n4 0 1 2 3 255 0 0\n").unwrap();
        assert_eq!(mesh.faces, vec![Face::from([0, 1, 2, 3])]);
        assert_eq!(mesh.colors, vec![VertexColor::RED; 4]);
        assert_eq!(mesh.corner_colors, vec![VertexColor::RED; 4]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn load_missing_file() {
        let result = load_off("nonexistent_file_12345.off", &ImportParams::default());
        assert!(matches!(result, Err(IoError::FileNotFound { path }) if path.to_string_lossy().contains("nonexistent")));
    }
}
