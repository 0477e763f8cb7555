//! Decoder for the curve/surface attribute statements.

use corelib::{
    Arity, AttributeRecord, BasisMatrix, CsType, CsTypeName, DecodeError, DecodeResult, Direction,
    PolynomialDegree, Rationality, StepPattern,
};

use super::classify::CsStatement;
use super::fields::{parse_floats, parse_uint};
use super::options::CsTypeValidation;

const CSTYPE_USAGE: &str = "cstype [rat] type";
const DEG_USAGE: &str = "deg degu degv";
const BMAT_USAGE: &str = "bmat u|v matrix";
const STEP_USAGE: &str = "step stepu stepv";

/// Decode the fields following a curve/surface keyword.
///
/// `degree` is the shape's current `deg`, used to lay out `bmat` coefficients.
pub fn decode_attribute(
    statement: CsStatement,
    remainder: &str,
    cstype: CsTypeValidation,
    degree: Option<PolynomialDegree>,
) -> DecodeResult<AttributeRecord> {
    let tokens: Vec<&str> = remainder.split_whitespace().collect();
    match statement {
        CsStatement::Type => decode_cstype(&tokens, cstype).map(AttributeRecord::Type),
        CsStatement::Degree => {
            let (u, v) = decode_pair(statement, DEG_USAGE, &tokens)?;
            Ok(AttributeRecord::Degree(PolynomialDegree { u, v }))
        }
        CsStatement::BasisMatrix => {
            let (direction, matrix) = decode_bmat(&tokens, degree)?;
            Ok(AttributeRecord::BasisMatrix(direction, matrix))
        }
        CsStatement::Step => {
            let (u, v) = decode_pair(statement, STEP_USAGE, &tokens)?;
            Ok(AttributeRecord::Step(StepPattern { u, v }))
        }
    }
}

fn decode_cstype(tokens: &[&str], validation: CsTypeValidation) -> DecodeResult<CsType> {
    let (rationality, name) = match tokens {
        [name] => (Rationality::NonRational, *name),
        [marker, name] => {
            let rationality = Rationality::from_keyword(marker)
                .ok_or_else(|| DecodeError::UnknownRationality((*marker).to_owned()))?;
            (rationality, *name)
        }
        _ => {
            return Err(DecodeError::arity(
                CsStatement::Type.keyword(),
                Arity::Between(1, 2),
                CSTYPE_USAGE,
                tokens.len(),
            ));
        }
    };

    let name = match (CsTypeName::from_keyword(name), validation) {
        (Some(known), _) => known,
        (None, CsTypeValidation::Lenient) => CsTypeName::Other(name.to_owned()),
        (None, CsTypeValidation::Strict) => return Err(DecodeError::UnknownType(name.to_owned())),
    };
    Ok(CsType::new(rationality, name))
}

fn decode_pair(
    statement: CsStatement,
    usage: &'static str,
    tokens: &[&str],
) -> DecodeResult<(u32, u32)> {
    match tokens {
        [u, v] => Ok((parse_uint(u)?, parse_uint(v)?)),
        _ => Err(DecodeError::arity(
            statement.keyword(),
            Arity::Exactly(2),
            usage,
            tokens.len(),
        )),
    }
}

/// `bmat u|v m00 m01 ...`, coefficients row-major.
///
/// A row holds `deg + 1` coefficients for the matrix's direction when a degree
/// is known and divides the count evenly; otherwise all coefficients form one row.
fn decode_bmat(
    tokens: &[&str],
    degree: Option<PolynomialDegree>,
) -> DecodeResult<(Direction, BasisMatrix)> {
    let [marker, coefficients @ ..] = tokens else {
        return Err(bmat_arity(0));
    };
    let direction = Direction::from_keyword(marker)
        .ok_or_else(|| DecodeError::UnknownDirection((*marker).to_owned()))?;
    if coefficients.is_empty() {
        return Err(bmat_arity(tokens.len()));
    }

    let values = parse_floats(coefficients.iter().copied())?;
    let cols = degree
        .map(|d| d.along(direction) as usize + 1)
        .filter(|cols| values.len() % cols == 0)
        .unwrap_or(values.len());
    let rows = values.chunks(cols).map(<[f64]>::to_vec).collect();
    Ok((direction, BasisMatrix::from_rows(rows)))
}

fn bmat_arity(actual: usize) -> DecodeError {
    DecodeError::arity(
        CsStatement::BasisMatrix.keyword(),
        Arity::AtLeast(2),
        BMAT_USAGE,
        actual,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use corelib::NumberKind;

    fn strict(statement: CsStatement, remainder: &str) -> DecodeResult<AttributeRecord> {
        decode_attribute(statement, remainder, CsTypeValidation::Strict, None)
    }

    #[test]
    fn cstype_defaults_to_non_rational() {
        let rec = strict(CsStatement::Type, "bspline").expect("cstype");
        assert_eq!(
            rec,
            AttributeRecord::Type(CsType::new(Rationality::NonRational, CsTypeName::BSpline))
        );
    }

    #[test]
    fn cstype_with_rationality() {
        let rec = strict(CsStatement::Type, "rat bezier").expect("cstype");
        assert_eq!(
            rec,
            AttributeRecord::Type(CsType::new(Rationality::Rational, CsTypeName::Bezier))
        );
        let rec = strict(CsStatement::Type, "non-rat taylor").expect("cstype");
        assert_eq!(
            rec,
            AttributeRecord::Type(CsType::new(Rationality::NonRational, CsTypeName::Taylor))
        );
    }

    #[test]
    fn cstype_arity() {
        for remainder in ["", "rat bezier extra"] {
            let err = strict(CsStatement::Type, remainder).unwrap_err();
            assert!(
                matches!(err, DecodeError::Arity { usage: CSTYPE_USAGE, .. }),
                "{remainder:?}: {err}"
            );
        }
    }

    #[test]
    fn cstype_bad_marker() {
        let err = strict(CsStatement::Type, "rational bezier").unwrap_err();
        assert_eq!(err, DecodeError::UnknownRationality("rational".into()));
    }

    #[test]
    fn cstype_unknown_name_depends_on_validation() {
        let err = strict(CsStatement::Type, "nurbs").unwrap_err();
        assert_eq!(err, DecodeError::UnknownType("nurbs".into()));

        let rec = decode_attribute(CsStatement::Type, "rat nurbs", CsTypeValidation::Lenient, None)
            .expect("lenient cstype");
        assert_eq!(
            rec,
            AttributeRecord::Type(CsType::new(
                Rationality::Rational,
                CsTypeName::Other("nurbs".into())
            ))
        );
    }

    #[test]
    fn deg_and_step_take_two_integers() {
        assert_eq!(
            strict(CsStatement::Degree, "3 3"),
            Ok(AttributeRecord::Degree(PolynomialDegree { u: 3, v: 3 }))
        );
        assert_eq!(
            strict(CsStatement::Step, " 1   2 "),
            Ok(AttributeRecord::Step(StepPattern { u: 1, v: 2 }))
        );
        assert_eq!(
            strict(CsStatement::Degree, "3"),
            Err(DecodeError::arity("deg", Arity::Exactly(2), DEG_USAGE, 1))
        );
        assert_eq!(
            strict(CsStatement::Step, "1 2 3"),
            Err(DecodeError::arity("step", Arity::Exactly(2), STEP_USAGE, 3))
        );
        assert_eq!(
            strict(CsStatement::Degree, "3 x"),
            Err(DecodeError::numeric("x", NumberKind::Integer))
        );
    }

    #[test]
    fn bmat_rows_follow_the_degree() {
        let cubic = Some(PolynomialDegree { u: 3, v: 1 });
        let rec = decode_attribute(
            CsStatement::BasisMatrix,
            "u 1 -3 3 -1 0 3 -6 3 0 0 3 -3 0 0 0 1",
            CsTypeValidation::Strict,
            cubic,
        )
        .expect("bmat");
        let AttributeRecord::BasisMatrix(direction, matrix) = rec else {
            panic!("expected a basis matrix, got {rec:?}");
        };
        assert_eq!(direction, Direction::U);
        assert_eq!((matrix.rows(), matrix.cols()), (4, 4));
        assert_eq!(matrix.get(0, 1), Some(-3.0));
        assert_eq!(matrix.get(1, 2), Some(-6.0));
        assert_eq!(matrix.get(3, 3), Some(1.0));

        let rec = decode_attribute(
            CsStatement::BasisMatrix,
            "v 1 -1 0 1 5 6",
            CsTypeValidation::Strict,
            cubic,
        )
        .expect("bmat v");
        let AttributeRecord::BasisMatrix(Direction::V, matrix) = rec else {
            panic!("expected a v basis matrix, got {rec:?}");
        };
        assert_eq!((matrix.rows(), matrix.cols()), (3, 2));
    }

    #[test]
    fn bmat_without_matching_degree_is_one_row() {
        for degree in [None, Some(PolynomialDegree { u: 1, v: 1 })] {
            let rec = decode_attribute(
                CsStatement::BasisMatrix,
                "u 1 2 3",
                CsTypeValidation::Strict,
                degree,
            )
            .expect("bmat");
            let AttributeRecord::BasisMatrix(_, matrix) = rec else {
                panic!("expected a basis matrix, got {rec:?}");
            };
            assert_eq!((matrix.rows(), matrix.cols()), (1, 3), "{degree:?}");
            assert_eq!(matrix.get(0, 2), Some(3.0));
        }
    }

    #[test]
    fn bmat_errors() {
        assert_eq!(strict(CsStatement::BasisMatrix, ""), Err(bmat_arity(0)));
        assert_eq!(strict(CsStatement::BasisMatrix, "v"), Err(bmat_arity(1)));
        assert_eq!(
            strict(CsStatement::BasisMatrix, "w 1"),
            Err(DecodeError::UnknownDirection("w".into()))
        );
        assert_eq!(
            strict(CsStatement::BasisMatrix, "v 1 0 oops 1"),
            Err(DecodeError::numeric("oops", NumberKind::Float))
        );
    }
}
