//! Traits for mesh types.

use crate::{Aabb, Face};
use nalgebra::Point3;

/// Read-only topology queries over a polygon mesh.
pub trait MeshTopology {
    /// Number of vertices.
    fn vertex_count(&self) -> usize;

    /// Number of polygon faces.
    fn face_count(&self) -> usize;

    /// Number of loose edges (edges stored outside any face).
    fn edge_count(&self) -> usize;

    /// True if the mesh has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Get a face by index.
    fn face(&self, index: usize) -> Option<&Face>;

    /// Get a vertex position by index.
    fn position(&self, index: usize) -> Option<&Point3<f64>>;
}

/// Trait for types that can compute a bounding box.
pub trait MeshBounds {
    /// Compute the axis-aligned bounding box.
    ///
    /// Returns an empty AABB if the mesh has no vertices.
    fn bounds(&self) -> Aabb;

    /// Compute the bounding box, returning `None` if empty.
    fn bounds_opt(&self) -> Option<Aabb> {
        let b = self.bounds();
        if b.is_empty() { None } else { Some(b) }
    }
}
