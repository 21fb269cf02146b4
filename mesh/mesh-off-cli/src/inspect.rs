//! The `inspect` command.

use std::path::Path;

use anyhow::{Context, Result};
use mesh_off::{ImportParams, OffDocument, load_off};
use mesh_types::{Aabb, MeshBounds};
use serde::Serialize;

/// What `inspect` reports about a file.
#[derive(Debug, Serialize)]
pub struct Summary {
    pub name: String,
    pub variant: String,
    pub vertices: usize,
    pub faces: usize,
    pub edges: usize,
    pub corners: usize,
    pub declared_edges: usize,
    pub skipped_vertex_lines: usize,
    pub skipped_face_lines: usize,
    pub has_normals: bool,
    pub has_colors: bool,
    pub bounds: Option<Aabb>,
}

impl Summary {
    pub fn new(doc: &OffDocument) -> Self {
        let mesh = &doc.mesh;
        Self {
            name: doc.name.clone(),
            variant: doc.variant.to_string(),
            vertices: mesh.vertices.len(),
            faces: mesh.faces.len(),
            edges: mesh.edges.len(),
            corners: mesh.corner_count(),
            declared_edges: doc.stats.declared_edges,
            skipped_vertex_lines: doc.stats.skipped_vertex_lines,
            skipped_face_lines: doc.stats.skipped_face_lines,
            has_normals: mesh.has_normals(),
            has_colors: mesh.has_colors(),
            bounds: mesh.bounds_opt(),
        }
    }

    fn print(&self) {
        println!("{} ({})", self.name, self.variant);
        println!("  vertices:  {}", self.vertices);
        println!("  faces:     {} ({} corners)", self.faces, self.corners);
        println!("  edges:     {}", self.edges);
        if self.declared_edges > 0 {
            println!("  declared edges (ignored): {}", self.declared_edges);
        }
        println!("  normals:   {}", if self.has_normals { "yes" } else { "no" });
        println!("  colors:    {}", if self.has_colors { "yes" } else { "no" });
        if self.skipped_vertex_lines + self.skipped_face_lines > 0 {
            println!(
                "  skipped:   {} vertex lines, {} face lines",
                self.skipped_vertex_lines, self.skipped_face_lines
            );
        }
        if let Some(b) = &self.bounds {
            let size = b.size();
            println!(
                "  bounds:    [{:.4}, {:.4}, {:.4}] to [{:.4}, {:.4}, {:.4}]",
                b.min.x, b.min.y, b.min.z, b.max.x, b.max.y, b.max.z
            );
            println!("  size:      {:.4} x {:.4} x {:.4}", size.x, size.y, size.z);
        }
    }
}

pub fn run(path: &Path, params: &ImportParams, json: bool) -> Result<()> {
    let doc = load_off(path, params).with_context(|| format!("failed to load {}", path.display()))?;
    let summary = Summary::new(&doc);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        summary.print();
    }

    Ok(())
}
