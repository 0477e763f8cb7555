//! Numeric field conversion shared by the decoders.

use corelib::{DecodeError, DecodeResult, NumberKind};

pub(crate) fn parse_float(token: &str) -> DecodeResult<f64> {
    token
        .parse::<f64>()
        .map_err(|_| DecodeError::numeric(token, NumberKind::Float))
}

pub(crate) fn parse_uint(token: &str) -> DecodeResult<u32> {
    token
        .parse::<u32>()
        .map_err(|_| DecodeError::numeric(token, NumberKind::Integer))
}

/// Parse every token as `f64`, stopping at the first bad one.
pub(crate) fn parse_floats<'a>(tokens: impl IntoIterator<Item = &'a str>) -> DecodeResult<Vec<f64>> {
    tokens.into_iter().map(parse_float).collect()
}
