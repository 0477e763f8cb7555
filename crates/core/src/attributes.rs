//! Free-form curve/surface attributes: `cstype`, `deg`, `bmat`, `step`.

use std::fmt;

/// Whether control points carry a weight.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub enum Rationality {
    Rational,
    #[default]
    NonRational,
}

impl Rationality {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "rat" => Some(Rationality::Rational),
            "non-rat" => Some(Rationality::NonRational),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Rationality::Rational => "rat",
            Rationality::NonRational => "non-rat",
        }
    }
}

/// Basis function family.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum CsTypeName {
    BasisMatrix,
    Bezier,
    BSpline,
    Cardinal,
    Taylor,
    /// Name outside the known family, only produced by lenient parsing.
    Other(String),
}

impl CsTypeName {
    /// Look up one of the known families; `None` for anything else.
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "bmatrix" => Some(CsTypeName::BasisMatrix),
            "bezier" => Some(CsTypeName::Bezier),
            "bspline" => Some(CsTypeName::BSpline),
            "cardinal" => Some(CsTypeName::Cardinal),
            "taylor" => Some(CsTypeName::Taylor),
            _ => None,
        }
    }

    pub fn keyword(&self) -> &str {
        match self {
            CsTypeName::BasisMatrix => "bmatrix",
            CsTypeName::Bezier => "bezier",
            CsTypeName::BSpline => "bspline",
            CsTypeName::Cardinal => "cardinal",
            CsTypeName::Taylor => "taylor",
            CsTypeName::Other(name) => name,
        }
    }
}

impl fmt::Display for CsTypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// `cstype [rat] type`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CsType {
    pub rationality: Rationality,
    pub name: CsTypeName,
}

impl CsType {
    pub fn new(rationality: Rationality, name: CsTypeName) -> Self {
        Self { rationality, name }
    }
}

impl fmt::Display for CsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.rationality.keyword(), self.name)
    }
}

/// `deg degu degv`
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PolynomialDegree {
    pub u: u32,
    pub v: u32,
}

impl PolynomialDegree {
    pub fn along(self, direction: Direction) -> u32 {
        match direction {
            Direction::U => self.u,
            Direction::V => self.v,
        }
    }
}

/// `step stepu stepv`
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct StepPattern {
    pub u: u32,
    pub v: u32,
}

/// Parametric direction of a basis matrix.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Direction {
    U,
    V,
}

impl Direction {
    pub fn from_keyword(s: &str) -> Option<Self> {
        match s {
            "u" => Some(Direction::U),
            "v" => Some(Direction::V),
            _ => None,
        }
    }
}

/// Rectangular table of basis coefficients, stored row by row.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BasisMatrix {
    rows: Vec<Vec<f64>>,
}

impl BasisMatrix {
    /// Wrap rows of coefficients. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        debug_assert!(rows.windows(2).all(|w| w[0].len() == w[1].len()));
        Self { rows }
    }

    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    pub fn cols(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn row_slices(&self) -> impl Iterator<Item = &[f64]> {
        self.rows.iter().map(Vec::as_slice)
    }
}

/// One decoded curve/surface statement.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeRecord {
    Type(CsType),
    Degree(PolynomialDegree),
    BasisMatrix(Direction, BasisMatrix),
    Step(StepPattern),
}

/// Curve/surface state of one shape. Nothing is mandatory; each field stays
/// `None` until its statement appears, and a repeated statement replaces the
/// previous value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CsAttributes {
    pub cs_type: Option<CsType>,
    pub degree: Option<PolynomialDegree>,
    pub bmat_u: Option<BasisMatrix>,
    pub bmat_v: Option<BasisMatrix>,
    pub step: Option<StepPattern>,
}

impl CsAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply(&mut self, record: AttributeRecord) {
        match record {
            AttributeRecord::Type(t) => self.cs_type = Some(t),
            AttributeRecord::Degree(d) => self.degree = Some(d),
            AttributeRecord::BasisMatrix(Direction::U, m) => self.bmat_u = Some(m),
            AttributeRecord::BasisMatrix(Direction::V, m) => self.bmat_v = Some(m),
            AttributeRecord::Step(s) => self.step = Some(s),
        }
    }

    /// `true` if no curve/surface statement has been applied.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_statements_overwrite_earlier_ones() {
        let mut attrs = CsAttributes::new();
        assert!(attrs.is_empty());
        attrs.apply(AttributeRecord::Degree(PolynomialDegree { u: 1, v: 1 }));
        attrs.apply(AttributeRecord::Type(CsType::new(
            Rationality::Rational,
            CsTypeName::Bezier,
        )));
        attrs.apply(AttributeRecord::Degree(PolynomialDegree { u: 3, v: 2 }));
        assert_eq!(attrs.degree, Some(PolynomialDegree { u: 3, v: 2 }));
        assert_eq!(
            attrs.cs_type.as_ref().map(|t| t.rationality),
            Some(Rationality::Rational)
        );
        assert!(attrs.step.is_none());
    }

    #[test]
    fn basis_matrix_is_routed_by_direction() {
        let m = BasisMatrix::from_rows(vec![vec![1.0, 0.0], vec![0.0, 1.0]]);
        let mut attrs = CsAttributes::new();
        attrs.apply(AttributeRecord::BasisMatrix(Direction::V, m.clone()));
        assert_eq!(attrs.bmat_v, Some(m));
        assert!(attrs.bmat_u.is_none());
    }

    #[test]
    fn basis_matrix_shape() {
        let m = BasisMatrix::from_rows(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!((m.rows(), m.cols()), (2, 3));
        assert_eq!(m.get(1, 0), Some(4.0));
        assert_eq!(m.get(2, 0), None);
        assert_eq!(BasisMatrix::default().cols(), 0);
    }

    #[test]
    fn degree_along_direction() {
        let d = PolynomialDegree { u: 3, v: 1 };
        assert_eq!(d.along(Direction::U), 3);
        assert_eq!(d.along(Direction::V), 1);
    }

    #[test]
    fn type_keywords() {
        assert_eq!(CsTypeName::from_keyword("bspline"), Some(CsTypeName::BSpline));
        assert_eq!(CsTypeName::from_keyword("Bezier"), None);
        assert_eq!(Rationality::default(), Rationality::NonRational);
        let t = CsType::new(Rationality::Rational, CsTypeName::Taylor);
        assert_eq!(t.to_string(), "rat taylor");
    }
}
