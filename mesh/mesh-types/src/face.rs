//! Polygon faces.

use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A polygon face: an ordered loop of vertex indices.
///
/// Faces read from OFF files have any arity; winding follows the order in
/// which the indices appear in the file.
///
/// # Example
///
/// ```
/// use mesh_types::Face;
///
/// let quad = Face::from([0, 1, 2, 3]);
/// assert_eq!(quad.len(), 4);
/// assert_eq!(quad.edges().count(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Face {
    indices: Vec<u32>,
}

impl Face {
    /// Create a face from its vertex indices.
    #[inline]
    #[must_use]
    pub const fn new(indices: Vec<u32>) -> Self {
        Self { indices }
    }

    /// Number of corners (vertex references).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// True if the face references no vertices.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Vertex indices in winding order.
    #[inline]
    #[must_use]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Iterate over the boundary edges of the polygon, closing the loop.
    pub fn edges(&self) -> impl Iterator<Item = [u32; 2]> + '_ {
        let n = self.indices.len();
        (0..n).map(move |i| [self.indices[i], self.indices[(i + 1) % n]])
    }

    /// Largest vertex index referenced by this face.
    #[must_use]
    pub fn max_index(&self) -> Option<u32> {
        self.indices.iter().copied().max()
    }

    /// The same polygon with opposite winding.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            indices: self.indices.iter().rev().copied().collect(),
        }
    }

    /// Consume the face, returning its indices.
    #[inline]
    #[must_use]
    pub fn into_indices(self) -> Vec<u32> {
        self.indices
    }
}

impl Index<usize> for Face {
    type Output = u32;

    fn index(&self, index: usize) -> &u32 {
        &self.indices[index]
    }
}

impl From<Vec<u32>> for Face {
    fn from(indices: Vec<u32>) -> Self {
        Self::new(indices)
    }
}

impl<const N: usize> From<[u32; N]> for Face {
    fn from(indices: [u32; N]) -> Self {
        Self::new(indices.to_vec())
    }
}

impl<'a> IntoIterator for &'a Face {
    type Item = &'a u32;
    type IntoIter = std::slice::Iter<'a, u32>;

    fn into_iter(self) -> Self::IntoIter {
        self.indices.iter()
    }
}
