//! OFF format variants.

use std::fmt;

/// The attribute layout declared by an OFF header token.
///
/// | Variant | Token | Fields after the position |
/// |---|---|---|
/// | [`Plain`](Self::Plain) | `OFF` | none |
/// | [`Normal`](Self::Normal) | `NOFF` | `nx ny nz` |
/// | [`Color`](Self::Color) | `COFF` | `r g b [a]` |
/// | [`NormalColor`](Self::NormalColor) | `NCOFF` | `nx ny nz r g b [a]` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FormatVariant {
    /// Positions only.
    #[default]
    Plain,
    /// Positions and normals.
    Normal,
    /// Positions and colors.
    Color,
    /// Positions, normals and colors.
    NormalColor,
}

impl FormatVariant {
    /// Look up a variant by its header token (exact, case-sensitive).
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_off::FormatVariant;
    ///
    /// assert_eq!(FormatVariant::from_token("NCOFF"), Some(FormatVariant::NormalColor));
    /// assert_eq!(FormatVariant::from_token("ply"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "OFF" => Some(Self::Plain),
            "NOFF" => Some(Self::Normal),
            "COFF" => Some(Self::Color),
            "NCOFF" => Some(Self::NormalColor),
            _ => None,
        }
    }

    /// The header token written for this variant.
    #[must_use]
    pub const fn token(self) -> &'static str {
        match self {
            Self::Plain => "OFF",
            Self::Normal => "NOFF",
            Self::Color => "COFF",
            Self::NormalColor => "NCOFF",
        }
    }

    /// Pick the variant carrying the requested attributes.
    #[must_use]
    pub const fn from_flags(normals: bool, colors: bool) -> Self {
        match (normals, colors) {
            (false, false) => Self::Plain,
            (true, false) => Self::Normal,
            (false, true) => Self::Color,
            (true, true) => Self::NormalColor,
        }
    }

    /// True if vertex lines carry a normal.
    #[must_use]
    pub const fn has_normals(self) -> bool {
        matches!(self, Self::Normal | Self::NormalColor)
    }

    /// True if vertex lines carry a color.
    #[must_use]
    pub const fn has_colors(self) -> bool {
        matches!(self, Self::Color | Self::NormalColor)
    }

    /// Accepted numbers of fields on a vertex line, without and with alpha.
    ///
    /// Variants without color accept a single count.
    #[must_use]
    pub const fn vertex_field_counts(self) -> (usize, usize) {
        match self {
            Self::Plain => (3, 3),
            Self::Normal => (6, 6),
            Self::Color => (6, 7),
            Self::NormalColor => (9, 10),
        }
    }

    /// Index of the first color field on a vertex line.
    #[must_use]
    pub(crate) const fn color_offset(self) -> usize {
        if self.has_normals() { 6 } else { 3 }
    }
}

impl fmt::Display for FormatVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}
