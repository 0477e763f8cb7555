//! Scene: the fully materialized result of one parse.

use std::collections::BTreeMap;

use crate::attributes::{AttributeRecord, CsAttributes};
use crate::vertex::{Vertex, VertexData};

/// Vertex lists plus the curve/surface attributes that apply to them.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    pub vertices: VertexData,
    pub attributes: CsAttributes,
}

/// Everything decoded from a single input.
///
/// Only one aggregate shape is modeled; grouping statements are not split out.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scene {
    pub shape: Shape,
    /// Statements the parser does not model, counted by leading keyword.
    pub ignored: BTreeMap<String, usize>,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_vertex(&mut self, vertex: Vertex) {
        self.shape.vertices.push(vertex);
    }

    pub fn apply_attribute(&mut self, record: AttributeRecord) {
        self.shape.attributes.apply(record);
    }

    pub fn record_ignored(&mut self, keyword: &str) {
        *self.ignored.entry(keyword.to_owned()).or_insert(0) += 1;
    }

    /// Number of skipped statements of any kind.
    pub fn ignored_count(&self) -> usize {
        self.ignored.values().sum()
    }

    /// `true` if nothing was decoded.
    pub fn is_empty(&self) -> bool {
        self.shape.vertices.is_empty() && self.shape.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::VertexKind;

    #[test]
    fn empty_scene() {
        let scene = Scene::new();
        assert!(scene.is_empty());
        assert_eq!(scene.ignored_count(), 0);
    }

    #[test]
    fn ignored_statements_are_counted_per_keyword() {
        let mut scene = Scene::new();
        scene.record_ignored("f");
        scene.record_ignored("g");
        scene.record_ignored("f");
        assert_eq!(scene.ignored.get("f"), Some(&2));
        assert_eq!(scene.ignored_count(), 3);
        assert!(scene.is_empty());
    }

    #[test]
    fn pushed_vertices_land_in_the_shape() {
        let mut scene = Scene::new();
        scene.push_vertex(Vertex::new(VertexKind::Normal, vec![0.0, 1.0, 0.0]).expect("vn"));
        assert_eq!(scene.shape.vertices.normals.len(), 1);
        assert!(!scene.is_empty());
    }
}
