//! Header parsing: variant token and element counts.

use std::io::BufRead;

use tracing::debug;

use crate::error::{FormatError, IoResult};
use crate::lines::LineSource;
use crate::variant::FormatVariant;

/// Variant and counts declared at the top of an OFF document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Header {
    /// Attribute layout of the vertex lines.
    pub(crate) variant: FormatVariant,
    /// Declared number of vertices.
    pub(crate) vertex_count: usize,
    /// Declared number of face records.
    pub(crate) face_count: usize,
    /// Declared edge count. Read but not used.
    pub(crate) edge_count: usize,
}

/// Read the variant line and the count line.
pub(crate) fn read_header<R: BufRead>(lines: &mut LineSource<R>) -> IoResult<Header> {
    let variant = match lines.next_content()? {
        Some(token) => FormatVariant::from_token(token).ok_or_else(|| {
            FormatError::UnrecognizedHeader {
                found: token.to_string(),
            }
        })?,
        None => {
            return Err(FormatError::UnrecognizedHeader {
                found: String::new(),
            }
            .into());
        }
    };

    let counts = lines
        .next_content()?
        .map(|text| parse_counts(text).ok_or_else(|| text.to_string()));
    let [vertex_count, face_count, edge_count] = match counts {
        Some(Ok(counts)) => counts,
        Some(Err(text)) => {
            return Err(FormatError::MalformedCounts {
                line: lines.line_number(),
                text,
            }
            .into());
        }
        None => {
            return Err(FormatError::MalformedCounts {
                line: 0,
                text: String::new(),
            }
            .into());
        }
    };

    debug!(
        %variant,
        vertices = vertex_count,
        faces = face_count,
        edges = edge_count,
        "Parsed OFF header"
    );

    Ok(Header {
        variant,
        vertex_count,
        face_count,
        edge_count,
    })
}

/// Parse exactly three non-negative integers.
fn parse_counts(text: &str) -> Option<[usize; 3]> {
    let mut fields = text.split_whitespace().map(str::parse::<usize>);
    let counts = [
        fields.next()?.ok()?,
        fields.next()?.ok()?,
        fields.next()?.ok()?,
    ];
    if fields.next().is_some() {
        return None;
    }
    Some(counts)
}
