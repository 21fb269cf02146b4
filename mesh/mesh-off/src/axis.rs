//! Axis conventions and remapping.
//!
//! OFF files carry no coordinate-system information. Hosts disagree about
//! which axis is "up", so import and export accept an [`AxisRemap`] that
//! rotates positions and normals between the file's convention and the
//! host's right-handed, +Z up, +Y forward frame.

use std::fmt;
use std::str::FromStr;

use nalgebra::{Matrix3, Point3, Vector3};

use crate::error::{IoError, IoResult};

/// A signed coordinate axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// +X
    X,
    /// +Y
    Y,
    /// +Z
    Z,
    /// -X
    NegX,
    /// -Y
    NegY,
    /// -Z
    NegZ,
}

impl Axis {
    /// Unit vector along this axis.
    #[must_use]
    pub fn vector(self) -> Vector3<f64> {
        match self {
            Self::X => Vector3::x(),
            Self::Y => Vector3::y(),
            Self::Z => Vector3::z(),
            Self::NegX => -Vector3::x(),
            Self::NegY => -Vector3::y(),
            Self::NegZ => -Vector3::z(),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
            Self::NegX => "-X",
            Self::NegY => "-Y",
            Self::NegZ => "-Z",
        })
    }
}

impl FromStr for Axis {
    type Err = IoError;

    fn from_str(s: &str) -> IoResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "X" | "+X" => Ok(Self::X),
            "Y" | "+Y" => Ok(Self::Y),
            "Z" | "+Z" => Ok(Self::Z),
            "-X" => Ok(Self::NegX),
            "-Y" => Ok(Self::NegY),
            "-Z" => Ok(Self::NegZ),
            other => Err(IoError::invalid_params(format!("unknown axis {other:?}"))),
        }
    }
}

/// An orthonormal change of basis applied to positions and normals.
///
/// # Example
///
/// ```
/// use mesh_off::{Axis, AxisRemap};
/// use nalgebra::Point3;
///
/// // File is Y-up with -Z forward; bring it into the Z-up frame.
/// let remap = AxisRemap::from_forward_up(Axis::NegZ, Axis::Y).unwrap();
/// assert_eq!(remap.apply_point(&Point3::new(0.0, 1.0, 0.0)), Point3::new(0.0, 0.0, 1.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRemap {
    matrix: Matrix3<f64>,
}

impl AxisRemap {
    /// The remap that changes nothing.
    #[must_use]
    pub fn identity() -> Self {
        Self {
            matrix: Matrix3::identity(),
        }
    }

    /// Remap whose source frame has the given forward and up axes.
    ///
    /// `forward` is sent to +Y and `up` to +Z; the remaining axis follows
    /// from the right-hand rule.
    ///
    /// # Errors
    ///
    /// Returns [`IoError::InvalidParams`] if the two axes are parallel.
    pub fn from_forward_up(forward: Axis, up: Axis) -> IoResult<Self> {
        let f = forward.vector();
        let u = up.vector();
        let right = f.cross(&u);
        if right.norm_squared() < 0.5 {
            return Err(IoError::invalid_params(format!(
                "forward axis {forward} and up axis {up} must be perpendicular"
            )));
        }
        Ok(Self {
            matrix: Matrix3::from_rows(&[right.transpose(), f.transpose(), u.transpose()]),
        })
    }

    /// Y-up (-Z forward) files into the Z-up frame.
    #[must_use]
    pub fn y_up_to_z_up() -> Self {
        Self {
            matrix: Matrix3::new(1.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 1.0, 0.0),
        }
    }

    /// Z-up data into a Y-up (-Z forward) file.
    #[must_use]
    pub fn z_up_to_y_up() -> Self {
        Self::y_up_to_z_up().inverse()
    }

    /// The inverse remap. The matrix is orthonormal, so this is its transpose.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            matrix: self.matrix.transpose(),
        }
    }

    /// The underlying rotation matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix3<f64> {
        &self.matrix
    }

    /// True if applying this remap is a no-op.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.matrix == Matrix3::identity()
    }

    /// Remap a position.
    #[must_use]
    pub fn apply_point(&self, p: &Point3<f64>) -> Point3<f64> {
        Point3::from(self.matrix * p.coords)
    }

    /// Remap a direction (normals).
    #[must_use]
    pub fn apply_vector(&self, v: &Vector3<f64>) -> Vector3<f64> {
        self.matrix * v
    }
}

impl Default for AxisRemap {
    fn default() -> Self {
        Self::identity()
    }
}
