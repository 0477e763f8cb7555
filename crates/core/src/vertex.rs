//! Vertex records of the four OBJ vertex kinds.

use std::fmt;

use glam::{DVec3, DVec4};

use crate::error::{Arity, DecodeError, DecodeResult};

/// Which vertex statement produced a [`Vertex`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum VertexKind {
    /// `v x y z [w]`
    Geometric,
    /// `vn i j k`
    Normal,
    /// `vp u v [w]`
    Parameter,
    /// `vt u [v] [w]`
    Texture,
}

impl VertexKind {
    pub const ALL: [VertexKind; 4] = [
        VertexKind::Geometric,
        VertexKind::Normal,
        VertexKind::Parameter,
        VertexKind::Texture,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            VertexKind::Geometric => "v",
            VertexKind::Normal => "vn",
            VertexKind::Parameter => "vp",
            VertexKind::Texture => "vt",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            VertexKind::Geometric => "v x y z [w]",
            VertexKind::Normal => "vn i j k",
            VertexKind::Parameter => "vp u v [w]",
            VertexKind::Texture => "vt u [v] [w]",
        }
    }

    /// Fewest fields the statement may carry.
    pub fn min_fields(self) -> usize {
        match self {
            VertexKind::Geometric | VertexKind::Normal => 3,
            VertexKind::Parameter => 2,
            VertexKind::Texture => 1,
        }
    }

    /// Default values for the optional trailing coordinates, in order.
    /// A vertex is padded from these up to `min_fields + defaults.len()`.
    fn defaults(self) -> &'static [f64] {
        match self {
            VertexKind::Geometric => &[1.0],
            VertexKind::Normal => &[],
            VertexKind::Parameter => &[1.0],
            VertexKind::Texture => &[0.0, 0.0],
        }
    }

    /// Number of coordinates every vertex of this kind ends up with (at least).
    pub fn canonical_len(self) -> usize {
        self.min_fields() + self.defaults().len()
    }
}

impl fmt::Display for VertexKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Immutable vertex: coordinates with defaults already applied.
#[derive(Clone, Debug, PartialEq)]
pub struct Vertex {
    kind: VertexKind,
    coords: Vec<f64>,
}

impl Vertex {
    /// Build a vertex from the parsed fields of its statement.
    ///
    /// Fails if fewer than [`VertexKind::min_fields`] values are given. Missing
    /// optional coordinates are filled with the kind's defaults; values past the
    /// canonical length are kept as-is.
    pub fn new(kind: VertexKind, mut coords: Vec<f64>) -> DecodeResult<Self> {
        let min = kind.min_fields();
        if coords.len() < min {
            return Err(DecodeError::arity(
                kind.keyword(),
                Arity::AtLeast(min),
                kind.usage(),
                coords.len(),
            ));
        }
        let defaults = kind.defaults();
        let missing = kind.canonical_len().saturating_sub(coords.len());
        coords.extend_from_slice(&defaults[defaults.len() - missing..]);
        Ok(Self { kind, coords })
    }

    #[inline]
    pub fn kind(&self) -> VertexKind {
        self.kind
    }

    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// First three coordinates (x y z, i j k or u v w).
    pub fn to_dvec3(&self) -> DVec3 {
        DVec3::new(self.coords[0], self.coords[1], self.coords[2])
    }

    /// First four coordinates, when the vertex has them (geometric vertices always do).
    pub fn to_dvec4(&self) -> Option<DVec4> {
        match self.coords.as_slice() {
            [x, y, z, w, ..] => Some(DVec4::new(*x, *y, *z, *w)),
            _ => None,
        }
    }
}

/// Renders the statement line with every coordinate spelled out.
impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.kind.keyword())?;
        for c in &self.coords {
            write!(f, " {c}")?;
        }
        Ok(())
    }
}

/// The four vertex lists of a shape, in file order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct VertexData {
    pub geometric: Vec<Vertex>,
    pub normals: Vec<Vertex>,
    pub parameters: Vec<Vertex>,
    pub textures: Vec<Vertex>,
}

impl VertexData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a vertex to the list matching its kind.
    pub fn push(&mut self, vertex: Vertex) {
        self.list_mut(vertex.kind()).push(vertex);
    }

    pub fn list(&self, kind: VertexKind) -> &[Vertex] {
        match kind {
            VertexKind::Geometric => &self.geometric,
            VertexKind::Normal => &self.normals,
            VertexKind::Parameter => &self.parameters,
            VertexKind::Texture => &self.textures,
        }
    }

    fn list_mut(&mut self, kind: VertexKind) -> &mut Vec<Vertex> {
        match kind {
            VertexKind::Geometric => &mut self.geometric,
            VertexKind::Normal => &mut self.normals,
            VertexKind::Parameter => &mut self.parameters,
            VertexKind::Texture => &mut self.textures,
        }
    }

    /// Total number of vertices across all kinds.
    pub fn len(&self) -> usize {
        VertexKind::ALL.iter().map(|k| self.list(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
