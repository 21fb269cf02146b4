//! Core polygon mesh types for the OFF codec.
//!
//! This crate provides the in-memory model that the OFF reader builds and the
//! OFF writer consumes:
//!
//! - [`PolyMesh`] - Vertex positions, polygon faces, edges and optional
//!   per-vertex / per-corner attributes
//! - [`Face`] - An ordered polygon of vertex indices
//! - [`Vertex`] - A resolved view of one vertex with its optional attributes
//! - [`VertexColor`] - RGBA color with channels in `[0, 1]`
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This crate has no dependencies beyond `nalgebra` (and optionally `serde`).
//! It can be used in CLI tools, servers, or embedded into a host application
//! that turns a [`PolyMesh`] into its own scene object.
//!
//! # Units
//!
//! This library is **unit-agnostic**. All coordinates are `f64`.
//!
//! # Example
//!
//! ```
//! use mesh_types::{Face, MeshTopology, Point3, PolyMesh};
//!
//! let mut mesh = PolyMesh::new();
//! mesh.vertices.push(Point3::new(0.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 0.0, 0.0));
//! mesh.vertices.push(Point3::new(1.0, 1.0, 0.0));
//! mesh.vertices.push(Point3::new(0.0, 1.0, 0.0));
//! mesh.faces.push(Face::from([0, 1, 2, 3]));
//!
//! assert_eq!(mesh.face_count(), 1);
//! assert!(mesh.validate().is_ok());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

mod bounds;
mod face;
mod mesh;
mod traits;
mod vertex;

pub use bounds::Aabb;
pub use face::Face;
pub use mesh::{PolyMesh, ValidationError, unit_cube};
pub use traits::{MeshBounds, MeshTopology};
pub use vertex::{Vertex, VertexAttributes, VertexColor};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
