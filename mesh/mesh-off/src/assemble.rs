//! Mesh assembly from decoded records.

use mesh_types::{Face, PolyMesh, Vector3, Vertex};
use tracing::debug;

use crate::body::FaceRecord;
use crate::error::FormatError;
use crate::variant::FormatVariant;

/// Build a [`PolyMesh`] from decoded vertices and face-section records.
///
/// Every face and edge index is checked against the vertex count.
///
/// When any face carries a color, every corner gets a color sample: the face
/// color, else the vertex color, else white. Vertex colors are then resolved
/// from those samples, the first referencing corner in face order winning.
/// Without face colors, vertex colors are only spread onto the corners.
pub(crate) fn assemble(
    vertices: Vec<Vertex>,
    records: Vec<FaceRecord>,
    variant: FormatVariant,
) -> Result<PolyMesh, FormatError> {
    let vertex_count = vertices.len();
    let mut mesh = PolyMesh::with_capacity(vertex_count, records.len());
    let mut face_colors = Vec::with_capacity(records.len());

    for (record_idx, record) in records.into_iter().enumerate() {
        let check = |index: i64| {
            u32::try_from(index)
                .ok()
                .filter(|&i| (i as usize) < vertex_count)
                .ok_or(FormatError::IndexOutOfRange {
                    record: record_idx,
                    index,
                    vertex_count,
                })
        };

        match record {
            FaceRecord::Face { indices, color } => {
                let indices = indices
                    .into_iter()
                    .map(check)
                    .collect::<Result<Vec<u32>, _>>()?;
                mesh.faces.push(Face::new(indices));
                face_colors.push(color);
            }
            FaceRecord::Edge([a, b]) => {
                mesh.edges.push([check(a)?, check(b)?]);
            }
        }
    }

    if variant.has_normals() {
        mesh.normals = vertices
            .iter()
            .map(|v| v.normal().unwrap_or_else(Vector3::zeros))
            .collect();
    }
    if variant.has_colors() {
        mesh.colors = vertices
            .iter()
            .map(|v| v.color().unwrap_or_default())
            .collect();
    }
    mesh.vertices = vertices.into_iter().map(|v| v.position).collect();

    if face_colors.iter().any(Option::is_some) {
        let vertex_colors = &mesh.colors;
        mesh.corner_colors = mesh
            .faces
            .iter()
            .zip(&face_colors)
            .flat_map(|(face, &color)| {
                face.indices().iter().map(move |&i| {
                    color
                        .or_else(|| vertex_colors.get(i as usize).copied())
                        .unwrap_or_default()
                })
            })
            .collect();
        mesh.colors = mesh.resolve_vertex_colors();
    } else if variant.has_colors() {
        mesh.spread_colors_to_corners();
    }

    debug!(
        vertices = mesh.vertices.len(),
        faces = mesh.faces.len(),
        edges = mesh.edges.len(),
        corners = mesh.corner_count(),
        "Assembled OFF mesh"
    );

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mesh_types::VertexColor;

    fn face(indices: Vec<i64>) -> FaceRecord {
        FaceRecord::Face {
            indices,
            color: None,
        }
    }

    fn colored_face(indices: Vec<i64>, color: VertexColor) -> FaceRecord {
        FaceRecord::Face {
            indices,
            color: Some(color),
        }
    }

    fn square() -> Vec<Vertex> {
        vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
        ]
    }

    #[test]
    fn builds_faces_and_edges() {
        let records = vec![
            face(vec![0, 1, 2, 3]),
            FaceRecord::Edge([3, 0]),
        ];
        let mesh = assemble(square(), records, FormatVariant::Plain).unwrap();
        assert_eq!(mesh.faces, vec![Face::from([0, 1, 2, 3])]);
        assert_eq!(mesh.edges, vec![[3, 0]]);
        assert!(mesh.normals.is_empty());
        assert!(mesh.colors.is_empty());
        assert!(mesh.corner_colors.is_empty());
    }

    #[test]
    fn rejects_index_equal_to_vertex_count() {
        let records = vec![
            face(vec![0, 1, 2, 3]),
            face(vec![0, 1, 2, 4]),
        ];
        assert_eq!(
            assemble(square(), records, FormatVariant::Plain),
            Err(FormatError::IndexOutOfRange {
                record: 1,
                index: 4,
                vertex_count: 4
            })
        );
    }

    #[test]
    fn rejects_negative_and_edge_indices() {
        let err = assemble(square(), vec![face(vec![0, -1, 2, 3])], FormatVariant::Plain)
            .unwrap_err();
        assert!(matches!(err, FormatError::IndexOutOfRange { index: -1, .. }));

        let err = assemble(square(), vec![FaceRecord::Edge([0, 10])], FormatVariant::Plain)
            .unwrap_err();
        assert!(matches!(err, FormatError::IndexOutOfRange { index: 10, .. }));
    }

    #[test]
    fn attaches_normals_and_colors() {
        let vertices: Vec<Vertex> = square()
            .into_iter()
            .map(|v| v.with_normal(Vector3::z()).with_color(VertexColor::RED))
            .collect();
        let mesh = assemble(
            vertices,
            vec![face(vec![0, 1, 2, 3])],
            FormatVariant::NormalColor,
        )
        .unwrap();

        assert_eq!(mesh.normals, vec![Vector3::z(); 4]);
        assert_eq!(mesh.colors, vec![VertexColor::RED; 4]);
        assert_eq!(mesh.corner_colors.len(), 4);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn vertex_only_document_keeps_colors() {
        let vertices = vec![Vertex::from_coords(0.0, 0.0, 0.0).with_color(VertexColor::BLUE)];
        let mesh = assemble(vertices, Vec::new(), FormatVariant::Color).unwrap();
        assert_eq!(mesh.colors, vec![VertexColor::BLUE]);
        assert!(mesh.corner_colors.is_empty());
    }

    #[test]
    fn first_face_color_wins_at_shared_vertices() {
        let records = vec![
            colored_face(vec![0, 1, 2], VertexColor::RED),
            colored_face(vec![0, 2, 3], VertexColor::BLUE),
        ];
        let mesh = assemble(square(), records, FormatVariant::Plain).unwrap();

        assert_eq!(mesh.corner_colors.len(), 6);
        assert_eq!(mesh.corner_colors[3], VertexColor::BLUE);
        assert_eq!(
            mesh.colors,
            vec![
                VertexColor::RED,
                VertexColor::RED,
                VertexColor::RED,
                VertexColor::BLUE
            ]
        );
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn uncolored_face_falls_back_to_vertex_color() {
        let vertices: Vec<Vertex> = square()
            .into_iter()
            .map(|v| v.with_color(VertexColor::GREEN))
            .collect();
        let records = vec![
            face(vec![0, 1, 2]),
            colored_face(vec![0, 2, 3], VertexColor::BLUE),
        ];
        let mesh = assemble(vertices, records, FormatVariant::Color).unwrap();

        assert_eq!(&mesh.corner_colors[..3], &[VertexColor::GREEN; 3]);
        assert_eq!(mesh.colors[0], VertexColor::GREEN);
        assert_eq!(mesh.colors[3], VertexColor::BLUE);
    }

    #[test]
    fn face_colors_on_plain_document_default_to_white() {
        let vertices = vec![
            Vertex::from_coords(0.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 0.0, 0.0),
            Vertex::from_coords(1.0, 1.0, 0.0),
            Vertex::from_coords(0.0, 1.0, 0.0),
            Vertex::from_coords(5.0, 5.0, 5.0),
        ];
        let records = vec![
            colored_face(vec![0, 1, 2], VertexColor::RED),
            face(vec![0, 2, 3]),
        ];
        let mesh = assemble(vertices, records, FormatVariant::Plain).unwrap();

        assert_eq!(mesh.colors[3], VertexColor::WHITE);
        // unreferenced
        assert_eq!(mesh.colors[4], VertexColor::WHITE);
        assert_eq!(mesh.colors[0], VertexColor::RED);
    }
}
