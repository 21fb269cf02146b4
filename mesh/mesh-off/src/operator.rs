//! Path-driven import/export adapters for host applications.
//!
//! A host (a modelling tool, a batch converter) usually exposes "import file"
//! and "export file" actions. [`MeshOperator`] is that capability: give it a
//! path, get a result. The codec itself never sees host state.

use std::path::Path;

use mesh_types::PolyMesh;

use crate::decode::{OffDocument, load_off};
use crate::encode::save_off;
use crate::error::{IoError, IoResult};
use crate::is_off_path;
use crate::params::{ExportParams, ImportParams};

/// A file action a host can run against a path.
pub trait MeshOperator {
    /// What a successful run produces.
    type Output;

    /// Run the action against `path`.
    ///
    /// # Errors
    ///
    /// Implementation specific; see the implementors.
    fn run(&self, path: &Path) -> IoResult<Self::Output>;
}

/// Imports an OFF file.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImportOperator {
    /// Parameters passed to the decoder.
    pub params: ImportParams,
}

impl ImportOperator {
    /// Create an import operator with the given parameters.
    #[must_use]
    pub const fn new(params: ImportParams) -> Self {
        Self { params }
    }
}

impl MeshOperator for ImportOperator {
    type Output = OffDocument;

    /// # Errors
    ///
    /// Returns [`IoError::UnknownFormat`] if `path` is not an `.off` file,
    /// plus everything [`load_off`] can return.
    fn run(&self, path: &Path) -> IoResult<OffDocument> {
        check_extension(path)?;
        load_off(path, &self.params)
    }
}

/// Exports a mesh to an OFF file.
#[derive(Debug, Clone, Copy)]
pub struct ExportOperator<'a> {
    /// The mesh to write.
    pub mesh: &'a PolyMesh,
    /// Parameters passed to the encoder.
    pub params: ExportParams,
}

impl<'a> ExportOperator<'a> {
    /// Create an export operator for `mesh`.
    #[must_use]
    pub const fn new(mesh: &'a PolyMesh, params: ExportParams) -> Self {
        Self { mesh, params }
    }
}

impl MeshOperator for ExportOperator<'_> {
    type Output = ();

    /// # Errors
    ///
    /// Returns [`IoError::UnknownFormat`] if `path` is not an `.off` file,
    /// plus everything [`save_off`] can return.
    fn run(&self, path: &Path) -> IoResult<()> {
        check_extension(path)?;
        save_off(self.mesh, path, &self.params)
    }
}

fn check_extension(path: &Path) -> IoResult<()> {
    if is_off_path(path) {
        Ok(())
    } else {
        Err(IoError::UnknownFormat {
            extension: path
                .extension()
                .and_then(|e| e.to_str())
                .unwrap_or("(none)")
                .to_string(),
        })
    }
}
