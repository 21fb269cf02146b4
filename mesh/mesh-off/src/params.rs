//! Parameters for OFF import and export.

use crate::axis::AxisRemap;
use crate::variant::FormatVariant;

/// How a face record with exactly three indices is interpreted.
///
/// Legacy OFF importers classify a `3 a b c` record as the loose edge
/// `[a, b]` and drop `c`. That is surprising, since such a record is a
/// triangle under any reading of the format, but files produced for those
/// importers rely on it, so it stays the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TrianglePolicy {
    /// `3 a b c` becomes the edge `[a, b]`; `c` is discarded.
    #[default]
    LegacyEdge,
    /// `3 a b c` becomes a triangular face.
    Face,
}

/// Parameters for reading OFF documents.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ImportParams {
    /// Interpretation of three-index face records. Default: `LegacyEdge`.
    pub triangle_policy: TrianglePolicy,

    /// Applied to positions and normals after assembly. Default: identity.
    pub axis_remap: AxisRemap,
}

impl ImportParams {
    /// Params that read three-index records as triangles.
    #[must_use]
    pub fn triangles_as_faces() -> Self {
        Self {
            triangle_policy: TrianglePolicy::Face,
            ..Default::default()
        }
    }

    /// Set the triangle policy.
    #[must_use]
    pub const fn with_triangle_policy(mut self, policy: TrianglePolicy) -> Self {
        self.triangle_policy = policy;
        self
    }

    /// Set the axis remap.
    #[must_use]
    pub const fn with_axis_remap(mut self, remap: AxisRemap) -> Self {
        self.axis_remap = remap;
        self
    }
}

/// Parameters for writing OFF documents.
///
/// The flags select the variant: neither gives `OFF`, normals give `NOFF`,
/// colors give `COFF`, both give `NCOFF`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ExportParams {
    /// Write per-vertex normals. Default: false.
    pub emit_normals: bool,

    /// Write per-vertex colors. Default: false.
    pub emit_colors: bool,

    /// Applied to positions and normals before formatting. Default: identity.
    pub axis_remap: AxisRemap,
}

impl ExportParams {
    /// Positions and faces only (`OFF`).
    #[must_use]
    pub fn plain() -> Self {
        Self::default()
    }

    /// Positions, normals and faces (`NOFF`).
    #[must_use]
    pub fn normals() -> Self {
        Self::for_variant(FormatVariant::Normal)
    }

    /// Positions, colors and faces (`COFF`).
    #[must_use]
    pub fn colors() -> Self {
        Self::for_variant(FormatVariant::Color)
    }

    /// Everything (`NCOFF`).
    #[must_use]
    pub fn full() -> Self {
        Self::for_variant(FormatVariant::NormalColor)
    }

    /// Params that write the given variant.
    #[must_use]
    pub fn for_variant(variant: FormatVariant) -> Self {
        Self {
            emit_normals: variant.has_normals(),
            emit_colors: variant.has_colors(),
            ..Default::default()
        }
    }

    /// The variant these params write.
    #[must_use]
    pub const fn variant(&self) -> FormatVariant {
        FormatVariant::from_flags(self.emit_normals, self.emit_colors)
    }

    /// Set whether normals are written.
    #[must_use]
    pub const fn with_emit_normals(mut self, emit: bool) -> Self {
        self.emit_normals = emit;
        self
    }

    /// Set whether colors are written.
    #[must_use]
    pub const fn with_emit_colors(mut self, emit: bool) -> Self {
        self.emit_colors = emit;
        self
    }

    /// Set the axis remap.
    #[must_use]
    pub const fn with_axis_remap(mut self, remap: AxisRemap) -> Self {
        self.axis_remap = remap;
        self
    }
}
