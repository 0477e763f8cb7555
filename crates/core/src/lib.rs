//! Core shared types and errors (parser-agnostic): vertices, curve/surface
//! attributes and the scene they are collected into.

pub use glam::{DVec3, DVec4};

pub mod attributes;
pub mod error;
pub mod scene;
pub mod vertex;

pub use attributes::{
    AttributeRecord, BasisMatrix, CsAttributes, CsType, CsTypeName, Direction, PolynomialDegree,
    Rationality, StepPattern,
};
pub use error::{Arity, DecodeError, DecodeResult, NumberKind, ObjError, ObjResult};
pub use scene::{Scene, Shape};
pub use vertex::{Vertex, VertexData, VertexKind};
