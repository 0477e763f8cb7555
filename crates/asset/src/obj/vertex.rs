//! Decoder for `v`, `vn`, `vp` and `vt` statements.

use corelib::{DecodeResult, Vertex, VertexKind};

use super::fields::parse_floats;

/// Decode the fields following a vertex keyword.
pub fn decode_vertex(kind: VertexKind, remainder: &str) -> DecodeResult<Vertex> {
    let coords = parse_floats(remainder.split_whitespace())?;
    Vertex::new(kind, coords)
}
