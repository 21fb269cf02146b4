//! Polygon mesh with loose edges and per-vertex attributes.

use crate::{Aabb, Face, MeshBounds, MeshTopology, Vertex, VertexColor};
use nalgebra::{Matrix3, Point3, Vector3};
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A structural problem found by [`PolyMesh::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A face references a vertex that does not exist.
    #[error("index out of range: face {face} references vertex {index}, mesh has {vertex_count} vertices")]
    FaceIndex {
        /// Position of the face in the face list.
        face: usize,
        /// The offending vertex index.
        index: i64,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// An edge references a vertex that does not exist.
    #[error("index out of range: edge {edge} references vertex {index}, mesh has {vertex_count} vertices")]
    EdgeIndex {
        /// Position of the edge in the edge list.
        edge: usize,
        /// The offending vertex index.
        index: i64,
        /// Number of vertices in the mesh.
        vertex_count: usize,
    },

    /// An attribute array is neither empty nor sized to match its elements.
    #[error("attribute `{attribute}` has {len} entries, expected 0 or {expected}")]
    AttributeLength {
        /// Attribute name.
        attribute: &'static str,
        /// Actual number of entries.
        len: usize,
        /// Required number of entries.
        expected: usize,
    },
}

/// A polygon mesh as read from, or written to, an OFF file.
///
/// # Layout
///
/// - `vertices`: positions, index = position in the list (0-based)
/// - `faces`: polygons of any arity referencing `vertices`
/// - `edges`: loose two-vertex edges
/// - `normals`: per-vertex normals, empty or `vertices.len()` long
/// - `colors`: per-vertex colors, empty or `vertices.len()` long
/// - `corner_colors`: per-face-corner colors in face order, empty or
///   [`corner_count`](Self::corner_count) long
///
/// Every face and edge index must be smaller than `vertices.len()`;
/// [`validate`](Self::validate) checks this.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PolyMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3<f64>>,

    /// Polygon faces.
    pub faces: Vec<Face>,

    /// Loose edges as vertex index pairs.
    pub edges: Vec<[u32; 2]>,

    /// Per-vertex normals (empty when absent).
    pub normals: Vec<Vector3<f64>>,

    /// Per-vertex colors (empty when absent).
    pub colors: Vec<VertexColor>,

    /// Per-face-corner colors (empty when absent).
    pub corner_colors: Vec<VertexColor>,
}

impl PolyMesh {
    /// Create a new empty mesh.
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vertices: Vec::new(),
            faces: Vec::new(),
            edges: Vec::new(),
            normals: Vec::new(),
            colors: Vec::new(),
            corner_colors: Vec::new(),
        }
    }

    /// Create a mesh with pre-allocated vertex and face storage.
    #[must_use]
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            ..Self::new()
        }
    }

    /// Create a mesh from positions and faces, without attributes.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Face, MeshTopology, Point3, PolyMesh};
    ///
    /// let mesh = PolyMesh::from_parts(
    ///     vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0), Point3::new(0.0, 1.0, 0.0)],
    ///     vec![Face::from([0, 1, 2])],
    /// );
    /// assert_eq!(mesh.vertex_count(), 3);
    /// ```
    #[must_use]
    pub fn from_parts(vertices: Vec<Point3<f64>>, faces: Vec<Face>) -> Self {
        Self {
            vertices,
            faces,
            ..Self::new()
        }
    }

    /// Resolved view of one vertex with whatever attributes are present.
    #[must_use]
    pub fn vertex(&self, index: usize) -> Option<Vertex> {
        let mut vertex = Vertex::new(*self.vertices.get(index)?);
        vertex.attributes.normal = self.normals.get(index).copied();
        vertex.attributes.color = self.colors.get(index).copied();
        Some(vertex)
    }

    /// Total number of face corners (sum of face arities).
    #[must_use]
    pub fn corner_count(&self) -> usize {
        self.faces.iter().map(Face::len).sum()
    }

    /// True if per-vertex normals are present.
    #[inline]
    #[must_use]
    pub fn has_normals(&self) -> bool {
        !self.normals.is_empty()
    }

    /// True if per-vertex or per-corner colors are present.
    #[inline]
    #[must_use]
    pub fn has_colors(&self) -> bool {
        !self.colors.is_empty() || !self.corner_colors.is_empty()
    }

    /// Check the structural invariants of the mesh.
    ///
    /// # Errors
    ///
    /// Returns the first face or edge that references a missing vertex, or
    /// the first attribute array whose length does not match.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let vertex_count = self.vertices.len();

        for (face_idx, face) in self.faces.iter().enumerate() {
            if let Some(&index) = face.indices().iter().find(|&&i| i as usize >= vertex_count) {
                return Err(ValidationError::FaceIndex {
                    face: face_idx,
                    index: i64::from(index),
                    vertex_count,
                });
            }
        }

        for (edge_idx, edge) in self.edges.iter().enumerate() {
            if let Some(&index) = edge.iter().find(|&&i| i as usize >= vertex_count) {
                return Err(ValidationError::EdgeIndex {
                    edge: edge_idx,
                    index: i64::from(index),
                    vertex_count,
                });
            }
        }

        check_len("normals", self.normals.len(), vertex_count)?;
        check_len("colors", self.colors.len(), vertex_count)?;
        check_len("corner_colors", self.corner_colors.len(), self.corner_count())?;

        Ok(())
    }

    /// Compute area-weighted vertex normals from the faces.
    ///
    /// Each polygon contributes its Newell normal (length proportional to
    /// its area) to every vertex it touches. Vertices referenced by no face
    /// get a zero vector.
    ///
    /// Out-of-range face indices are ignored.
    #[must_use]
    pub fn compute_vertex_normals(&self) -> Vec<Vector3<f64>> {
        let mut normals = vec![Vector3::zeros(); self.vertices.len()];

        for face in &self.faces {
            let Some(face_normal) = self.newell_normal(face) else {
                continue;
            };
            for &i in face {
                if let Some(n) = normals.get_mut(i as usize) {
                    *n += face_normal;
                }
            }
        }

        for n in &mut normals {
            let len = n.norm();
            if len > f64::EPSILON {
                *n /= len;
            }
        }

        normals
    }

    /// Newell normal of a polygon; its length is twice the polygon area.
    fn newell_normal(&self, face: &Face) -> Option<Vector3<f64>> {
        let mut normal = Vector3::zeros();
        for [a, b] in face.edges() {
            let pa = self.vertices.get(a as usize)?;
            let pb = self.vertices.get(b as usize)?;
            normal += pa.coords.cross(&pb.coords);
        }
        Some(normal)
    }

    /// One color per vertex, resolving per-corner colors if present.
    ///
    /// For each vertex, the color of the first face corner that references
    /// it (faces visited in order) wins. Vertices no face references fall
    /// back to their per-vertex color, then to white.
    ///
    /// When faces disagree about a shared vertex the result depends on face
    /// order.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::{Face, Point3, PolyMesh, VertexColor};
    ///
    /// let mut mesh = PolyMesh::from_parts(
    ///     vec![Point3::origin(); 4],
    ///     vec![Face::from([0, 1, 2, 3])],
    /// );
    /// mesh.corner_colors = vec![VertexColor::RED; 4];
    ///
    /// assert_eq!(mesh.resolve_vertex_colors(), vec![VertexColor::RED; 4]);
    /// ```
    #[must_use]
    pub fn resolve_vertex_colors(&self) -> Vec<VertexColor> {
        let mut resolved: Vec<VertexColor> = if self.colors.len() == self.vertices.len() {
            self.colors.clone()
        } else {
            vec![VertexColor::default(); self.vertices.len()]
        };

        if self.corner_colors.is_empty() || self.corner_colors.len() != self.corner_count() {
            return resolved;
        }

        let mut assigned = vec![false; self.vertices.len()];
        let corners = self.faces.iter().flat_map(|f| f.indices().iter().copied());
        for (vertex, &color) in corners.zip(&self.corner_colors) {
            let v = vertex as usize;
            if v < resolved.len() && !assigned[v] {
                resolved[v] = color;
                assigned[v] = true;
            }
        }

        resolved
    }

    /// Spread per-vertex colors onto face corners.
    ///
    /// Replaces `corner_colors` with one entry per face corner, taken from
    /// the corner's vertex. Does nothing if per-vertex colors are absent.
    pub fn spread_colors_to_corners(&mut self) {
        if self.colors.len() != self.vertices.len() || self.colors.is_empty() {
            return;
        }
        self.corner_colors = self
            .faces
            .iter()
            .flat_map(|f| f.indices().iter())
            .map(|&i| self.colors.get(i as usize).copied().unwrap_or_default())
            .collect();
    }

    /// Apply a linear transform to positions and normals.
    ///
    /// Intended for orthonormal axis remaps, so normals are transformed by
    /// the same matrix.
    pub fn transform(&mut self, matrix: &Matrix3<f64>) {
        for p in &mut self.vertices {
            *p = Point3::from(matrix * p.coords);
        }
        for n in &mut self.normals {
            *n = matrix * *n;
        }
    }

    /// Fan-triangulate every face, for hosts that only accept triangles.
    ///
    /// Faces with fewer than three corners produce nothing.
    #[must_use]
    pub fn triangulate_fan(&self) -> Vec<[u32; 3]> {
        let mut triangles = Vec::with_capacity(self.corner_count());
        for face in &self.faces {
            let idx = face.indices();
            if idx.len() < 3 {
                continue;
            }
            for i in 1..idx.len() - 1 {
                triangles.push([idx[0], idx[i], idx[i + 1]]);
            }
        }
        triangles
    }
}

fn check_len(attribute: &'static str, len: usize, expected: usize) -> Result<(), ValidationError> {
    if len == 0 || len == expected {
        Ok(())
    } else {
        Err(ValidationError::AttributeLength {
            attribute,
            len,
            expected,
        })
    }
}

impl MeshTopology for PolyMesh {
    #[inline]
    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    fn face_count(&self) -> usize {
        self.faces.len()
    }

    #[inline]
    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn face(&self, index: usize) -> Option<&Face> {
        self.faces.get(index)
    }

    fn position(&self, index: usize) -> Option<&Point3<f64>> {
        self.vertices.get(index)
    }
}

impl MeshBounds for PolyMesh {
    fn bounds(&self) -> Aabb {
        Aabb::from_points(self.vertices.iter())
    }
}

/// Unit cube from (0,0,0) to (1,1,1) as six outward-facing quads.
///
/// # Example
///
/// ```
/// use mesh_types::{unit_cube, MeshTopology};
///
/// let cube = unit_cube();
/// assert_eq!(cube.vertex_count(), 8);
/// assert_eq!(cube.face_count(), 6);
/// ```
#[must_use]
pub fn unit_cube() -> PolyMesh {
    let vertices = vec![
        Point3::new(0.0, 0.0, 0.0),
        Point3::new(1.0, 0.0, 0.0),
        Point3::new(1.0, 1.0, 0.0),
        Point3::new(0.0, 1.0, 0.0),
        Point3::new(0.0, 0.0, 1.0),
        Point3::new(1.0, 0.0, 1.0),
        Point3::new(1.0, 1.0, 1.0),
        Point3::new(0.0, 1.0, 1.0),
    ];

    // CCW when viewed from outside
    let faces = vec![
        Face::from([0, 3, 2, 1]), // bottom
        Face::from([4, 5, 6, 7]), // top
        Face::from([0, 1, 5, 4]), // front
        Face::from([2, 3, 7, 6]), // back
        Face::from([0, 4, 7, 3]), // left
        Face::from([1, 2, 6, 5]), // right
    ];

    PolyMesh::from_parts(vertices, faces)
}
