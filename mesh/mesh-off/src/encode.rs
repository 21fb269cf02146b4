//! OFF export.

use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use mesh_types::{PolyMesh, Vector3, VertexColor};
use tracing::{debug, info, warn};

use crate::error::{IoError, IoResult};
use crate::params::ExportParams;

/// Alpha written for every colored vertex.
const EXPORT_ALPHA: u8 = 255;

/// Write a mesh as an OFF document.
///
/// The variant follows the flags in `params`. Normals that the mesh does not
/// carry are computed from its faces; colors it does not carry are resolved
/// from its corner colors, or default to white. Loose edges are not written.
///
/// # Errors
///
/// Returns [`IoError::InvalidMesh`] if a face or edge references a missing
/// vertex or an attribute array has the wrong length, and [`IoError::Io`] if
/// the writer fails.
///
/// # Example
///
/// ```
/// use mesh_off::{write_off, ExportParams};
/// use mesh_types::unit_cube;
///
/// let mut out = Vec::new();
/// write_off(&unit_cube(), &mut out, &ExportParams::plain()).unwrap();
///
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.starts_with("OFF\n8 6 0\n"));
/// ```
pub fn write_off<W: Write>(mesh: &PolyMesh, mut writer: W, params: &ExportParams) -> IoResult<()> {
    mesh.validate()?;

    let variant = params.variant();
    let remap = params.axis_remap;

    if !mesh.edges.is_empty() {
        warn!(
            edges = mesh.edges.len(),
            "OFF export does not write loose edges; they will be dropped"
        );
    }

    let normals: Cow<'_, [Vector3<f64>]> = if !params.emit_normals {
        Cow::Borrowed(&[])
    } else if mesh.has_normals() {
        Cow::Borrowed(&mesh.normals)
    } else {
        debug!("Mesh has no normals, computing them from faces");
        Cow::Owned(mesh.compute_vertex_normals())
    };

    let colors: Vec<VertexColor> = if params.emit_colors {
        mesh.resolve_vertex_colors()
    } else {
        Vec::new()
    };

    writeln!(writer, "{}", variant.token())?;
    writeln!(writer, "{} {} 0", mesh.vertices.len(), mesh.faces.len())?;

    for (i, position) in mesh.vertices.iter().enumerate() {
        let p = remap.apply_point(position);
        write!(writer, "{:.16} {:.16} {:.16}", p.x, p.y, p.z)?;

        if let Some(normal) = normals.get(i) {
            let n = remap.apply_vector(normal);
            write!(writer, " {:.16} {:.16} {:.16}", n.x, n.y, n.z)?;
        }

        if let Some(color) = colors.get(i) {
            let [r, g, b, _] = color.to_channels();
            write!(writer, " {r} {g} {b} {EXPORT_ALPHA}")?;
        }

        writeln!(writer)?;
    }

    for face in &mesh.faces {
        write!(writer, "{}", face.len())?;
        for index in face {
            write!(writer, " {index}")?;
        }
        writeln!(writer)?;
    }

    Ok(())
}

/// Save a mesh to an OFF file.
///
/// # Errors
///
/// Returns an error if the mesh is invalid, the file cannot be created
/// (a missing parent directory gives [`IoError::FileNotFound`]), or writing
/// fails.
///
/// # Example
///
/// ```no_run
/// use mesh_off::{save_off, ExportParams};
/// use mesh_types::unit_cube;
///
/// save_off(&unit_cube(), "cube.off", &ExportParams::normals()).unwrap();
/// ```
pub fn save_off<P: AsRef<Path>>(mesh: &PolyMesh, path: P, params: &ExportParams) -> IoResult<()> {
    let path = path.as_ref();
    let file = File::create(path).map_err(|e| IoError::from_open(e, path))?;
    let mut writer = BufWriter::new(file);

    write_off(mesh, &mut writer, params)?;
    writer.flush()?;

    info!(
        "Saved {:?} ({}): {} vertices, {} faces",
        path,
        params.variant(),
        mesh.vertices.len(),
        mesh.faces.len()
    );

    Ok(())
}

/// Encode a mesh into an in-memory OFF document.
///
/// # Errors
///
/// See [`write_off`].
pub fn encode_string(mesh: &PolyMesh, params: &ExportParams) -> IoResult<String> {
    let mut buf = Vec::new();
    write_off(mesh, &mut buf, params)?;
    Ok(String::from_utf8(buf)?)
}
