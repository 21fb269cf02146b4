//! Vertex and face record decoding.
//!
//! Both sections are read leniently: a line that does not parse for the
//! declared variant is skipped and does not use up a slot. Only running out
//! of input before the declared count is reached is an error.

use std::io::BufRead;

use mesh_types::{Vertex, VertexColor};
use nalgebra::{Point3, Vector3};
use tracing::trace;

use crate::error::{FormatError, IoResult};
use crate::lines::LineSource;
use crate::params::TrianglePolicy;
use crate::variant::FormatVariant;

/// Most fields any vertex line may carry (`NCOFF` with alpha).
const MAX_VERTEX_FIELDS: usize = 10;

/// Upper bound on up-front allocation driven by header counts.
const PREALLOC_LIMIT: usize = 1 << 20;

/// Alpha assumed when a color has only three channels (0-255 scale).
const DEFAULT_ALPHA: f64 = 255.0;

/// One decoded record from the face section.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum FaceRecord {
    /// A polygon; indices are unchecked.
    Face {
        indices: Vec<i64>,
        /// Color trailing the indices, if the tail parsed as one.
        color: Option<VertexColor>,
    },
    /// A loose edge; indices are unchecked.
    Edge([i64; 2]),
}

/// Counters for lines skipped while decoding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeStats {
    /// Vertex-section lines that did not parse for the variant.
    pub skipped_vertex_lines: usize,
    /// Face-section lines that did not parse as a record.
    pub skipped_face_lines: usize,
    /// Edge count declared in the header (not used).
    pub declared_edges: usize,
}

impl DecodeStats {
    /// Total number of skipped lines.
    #[must_use]
    pub const fn skipped_lines(&self) -> usize {
        self.skipped_vertex_lines + self.skipped_face_lines
    }
}

/// Read `expected` vertices, skipping lines that do not parse.
pub(crate) fn read_vertices<R: BufRead>(
    lines: &mut LineSource<R>,
    variant: FormatVariant,
    expected: usize,
    stats: &mut DecodeStats,
) -> IoResult<Vec<Vertex>> {
    let mut vertices = Vec::with_capacity(expected.min(PREALLOC_LIMIT));

    while vertices.len() < expected {
        let Some(line) = lines.next_content()? else {
            return Err(FormatError::TruncatedVertexSection {
                expected,
                found: vertices.len(),
            }
            .into());
        };

        if let Some(vertex) = parse_vertex(line, variant) {
            vertices.push(vertex);
        } else {
            stats.skipped_vertex_lines += 1;
            trace!(line = lines.line_number(), %variant, "Skipping malformed vertex line");
        }
    }

    Ok(vertices)
}

/// Read `expected` face/edge records, skipping lines that do not parse.
pub(crate) fn read_records<R: BufRead>(
    lines: &mut LineSource<R>,
    expected: usize,
    policy: TrianglePolicy,
    stats: &mut DecodeStats,
) -> IoResult<Vec<FaceRecord>> {
    let mut records = Vec::with_capacity(expected.min(PREALLOC_LIMIT));

    while records.len() < expected {
        let Some(line) = lines.next_content()? else {
            return Err(FormatError::TruncatedFaceSection {
                expected,
                found: records.len(),
            }
            .into());
        };

        if let Some(record) = parse_record(line, policy) {
            records.push(record);
        } else {
            stats.skipped_face_lines += 1;
            trace!(line = lines.line_number(), "Skipping malformed face line");
        }
    }

    Ok(records)
}

/// Parse one vertex line for the given variant.
///
/// Returns `None` if the field count is wrong for the variant or any field
/// is not a finite number.
pub(crate) fn parse_vertex(line: &str, variant: FormatVariant) -> Option<Vertex> {
    let mut fields = [0.0_f64; MAX_VERTEX_FIELDS];
    let mut count = 0;

    for token in line.split_whitespace() {
        if count == MAX_VERTEX_FIELDS {
            return None;
        }
        let value: f64 = token.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        fields[count] = value;
        count += 1;
    }

    let (min_fields, max_fields) = variant.vertex_field_counts();
    if count < min_fields || count > max_fields {
        return None;
    }

    let mut vertex = Vertex::new(Point3::new(fields[0], fields[1], fields[2]));

    if variant.has_normals() {
        vertex = vertex.with_normal(Vector3::new(fields[3], fields[4], fields[5]));
    }

    if variant.has_colors() {
        let c = variant.color_offset();
        let alpha = if count == max_fields {
            fields[c + 3]
        } else {
            DEFAULT_ALPHA
        };
        vertex = vertex.with_color(VertexColor::from_channels(
            fields[c],
            fields[c + 1],
            fields[c + 2],
            alpha,
        ));
    }

    Some(vertex)
}

/// Parse one face-section line: an arity `n` followed by at least `n` indices.
///
/// - `n > 3`: a polygon
/// - `n == 3`: per `policy`, the edge of the first two indices or a triangle
/// - `n == 2`: an edge
///
/// Fields past the `n` indices are kept as the face color when they read as
/// `r g b [a]` on the 0-255 scale and ignored otherwise. Fewer than `n`
/// indices, or any other arity, is `None`.
pub(crate) fn parse_record(line: &str, policy: TrianglePolicy) -> Option<FaceRecord> {
    let mut fields = line.split_whitespace();
    let arity = usize::try_from(fields.next()?.parse::<i64>().ok()?).ok()?;
    let indices = fields
        .by_ref()
        .take(arity)
        .map(str::parse::<i64>)
        .collect::<Result<Vec<_>, _>>()
        .ok()?;

    if indices.len() < arity {
        return None;
    }

    match (arity, policy) {
        (2, _) | (3, TrianglePolicy::LegacyEdge) => {
            Some(FaceRecord::Edge([indices[0], indices[1]]))
        }
        (n, _) if n >= 3 => Some(FaceRecord::Face {
            indices,
            color: parse_face_color(fields),
        }),
        _ => None,
    }
}

/// Three or four finite channels, else `None`.
fn parse_face_color<'a>(tail: impl Iterator<Item = &'a str>) -> Option<VertexColor> {
    let mut channels = [0.0, 0.0, 0.0, DEFAULT_ALPHA];
    let mut count = 0;

    for token in tail {
        if count == channels.len() {
            return None;
        }
        let value: f64 = token.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        channels[count] = value;
        count += 1;
    }

    (count >= 3).then(|| {
        VertexColor::from_channels(channels[0], channels[1], channels[2], channels[3])
    })
}
