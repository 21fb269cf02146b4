//! Vertex types and attributes.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// RGBA color with floating point channels in `[0, 1]`.
///
/// OFF files store colors on the 0-255 scale; [`VertexColor::from_channels`]
/// and [`VertexColor::to_channels`] convert between the two.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexColor {
    /// Red component (0.0-1.0).
    pub r: f32,
    /// Green component (0.0-1.0).
    pub g: f32,
    /// Blue component (0.0-1.0).
    pub b: f32,
    /// Alpha component (0.0-1.0).
    pub a: f32,
}

impl VertexColor {
    /// Create a new color from RGBA components in `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let red = VertexColor::new(1.0, 0.0, 0.0, 1.0);
    /// assert_eq!(red, VertexColor::RED);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from channels on the 0-255 scale.
    ///
    /// Each channel is divided by 255 and clamped to `[0, 1]`.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// let color = VertexColor::from_channels(255.0, 0.0, 0.0, 255.0);
    /// assert_eq!(color, VertexColor::RED);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    // Truncation to f32 is fine: channels are clamped to [0, 1]
    pub fn from_channels(r: f64, g: f64, b: f64, a: f64) -> Self {
        let scale = |c: f64| (c / 255.0).clamp(0.0, 1.0) as f32;
        Self {
            r: scale(r),
            g: scale(g),
            b: scale(b),
            a: scale(a),
        }
    }

    /// Convert to integer channels on the 0-255 scale.
    ///
    /// Each channel is multiplied by 255 and truncated; values outside
    /// `[0, 1]` are clamped first.
    ///
    /// # Example
    ///
    /// ```
    /// use mesh_types::VertexColor;
    ///
    /// assert_eq!(VertexColor::WHITE.to_channels(), [255, 255, 255, 255]);
    /// assert_eq!(VertexColor::new(0.5, 0.0, 0.0, 1.0).to_channels(), [127, 0, 0, 255]);
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    // Truncation and sign loss are safe: values are clamped to [0.0, 1.0] before * 255.0
    pub fn to_channels(self) -> [u8; 4] {
        let scale = |c: f32| (c.clamp(0.0, 1.0) * 255.0) as u8;
        [scale(self.r), scale(self.g), scale(self.b), scale(self.a)]
    }

    /// Opaque black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Opaque white.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Opaque red.
    pub const RED: Self = Self::new(1.0, 0.0, 0.0, 1.0);

    /// Opaque green.
    pub const GREEN: Self = Self::new(0.0, 1.0, 0.0, 1.0);

    /// Opaque blue.
    pub const BLUE: Self = Self::new(0.0, 0.0, 1.0, 1.0);
}

impl Default for VertexColor {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Optional attributes that can be attached to a vertex.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VertexAttributes {
    /// Vertex normal as stored in the file (not necessarily unit length).
    pub normal: Option<Vector3<f64>>,

    /// Vertex color (RGBA).
    pub color: Option<VertexColor>,
}

impl VertexAttributes {
    /// Create empty attributes with no values set.
    #[inline]
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            normal: None,
            color: None,
        }
    }

    /// Check if any attributes are set.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.normal.is_none() && self.color.is_none()
    }
}

/// A vertex in 3D space with optional attributes.
///
/// [`PolyMesh`](crate::PolyMesh) stores attributes as parallel arrays; a
/// `Vertex` is the per-record view produced while decoding and returned by
/// [`PolyMesh::vertex`](crate::PolyMesh::vertex).
///
/// # Example
///
/// ```
/// use mesh_types::{Point3, Vertex};
///
/// let v1 = Vertex::new(Point3::new(1.0, 2.0, 3.0));
/// let v2 = Vertex::from_coords(1.0, 2.0, 3.0);
///
/// assert_eq!(v1.position, v2.position);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Vertex {
    /// 3D position.
    pub position: Point3<f64>,

    /// Optional attributes (normal, color).
    pub attributes: VertexAttributes,
}

impl Vertex {
    /// Create a new vertex with only position set.
    #[inline]
    #[must_use]
    pub const fn new(position: Point3<f64>) -> Self {
        Self {
            position,
            attributes: VertexAttributes::empty(),
        }
    }

    /// Create a vertex from raw coordinates.
    #[inline]
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn from_coords(x: f64, y: f64, z: f64) -> Self {
        Self::new(Point3::new(x, y, z))
    }

    /// Set the normal, returning the updated vertex.
    #[inline]
    #[must_use]
    pub fn with_normal(mut self, normal: Vector3<f64>) -> Self {
        self.attributes.normal = Some(normal);
        self
    }

    /// Set the color, returning the updated vertex.
    #[inline]
    #[must_use]
    pub fn with_color(mut self, color: VertexColor) -> Self {
        self.attributes.color = Some(color);
        self
    }

    /// Get the normal if set.
    #[inline]
    #[must_use]
    pub const fn normal(&self) -> Option<Vector3<f64>> {
        self.attributes.normal
    }

    /// Get the color if set.
    #[inline]
    #[must_use]
    pub const fn color(&self) -> Option<VertexColor> {
        self.attributes.color
    }
}

impl From<Point3<f64>> for Vertex {
    fn from(position: Point3<f64>) -> Self {
        Self::new(position)
    }
}

impl From<[f64; 3]> for Vertex {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Self::from_coords(x, y, z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_from_coords() {
        let v = Vertex::from_coords(1.0, 2.0, 3.0);
        assert!((v.position.x - 1.0).abs() < f64::EPSILON);
        assert!((v.position.y - 2.0).abs() < f64::EPSILON);
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);
        assert!(v.attributes.is_empty());
    }

    #[test]
    fn vertex_builders() {
        let v = Vertex::from_coords(0.0, 0.0, 0.0)
            .with_normal(Vector3::z())
            .with_color(VertexColor::BLUE);
        assert_eq!(v.normal(), Some(Vector3::z()));
        assert_eq!(v.color(), Some(VertexColor::BLUE));
        assert!(!v.attributes.is_empty());
    }

    #[test]
    fn vertex_from_array() {
        let v: Vertex = [1.0, 2.0, 3.0].into();
        assert!((v.position.z - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn color_extremes_scale_exactly() {
        let c = VertexColor::from_channels(255.0, 0.0, 0.0, 255.0);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!(c.g.abs() < f32::EPSILON);
        assert!((c.a - 1.0).abs() < f32::EPSILON);
        assert_eq!(c.to_channels(), [255, 0, 0, 255]);
    }

    #[test]
    fn color_from_channels_clamps() {
        let c = VertexColor::from_channels(300.0, -5.0, 127.5, 255.0);
        assert!((c.r - 1.0).abs() < f32::EPSILON);
        assert!(c.g.abs() < f32::EPSILON);
        assert!((c.b - 0.5).abs() < 1e-6);
    }

    #[test]
    fn color_to_channels_truncates() {
        let c = VertexColor::new(0.999, 0.5, 0.001, 2.0);
        assert_eq!(c.to_channels(), [254, 127, 0, 255]);
    }

    #[test]
    fn default_color_is_white() {
        assert_eq!(VertexColor::default(), VertexColor::WHITE);
    }
}
