//! Statement classification by leading keyword.

use corelib::VertexKind;

/// Curve/surface attribute statements.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum CsStatement {
    Type,
    Degree,
    BasisMatrix,
    Step,
}

impl CsStatement {
    pub fn keyword(self) -> &'static str {
        match self {
            CsStatement::Type => "cstype",
            CsStatement::Degree => "deg",
            CsStatement::BasisMatrix => "bmat",
            CsStatement::Step => "step",
        }
    }
}

/// A statement the decoder understands.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum RecordKind {
    Vertex(VertexKind),
    Attribute(CsStatement),
}

/// Keyword table. Where keywords share a prefix the longer one comes first.
const KEYWORDS: &[(&str, RecordKind)] = &[
    ("vn", RecordKind::Vertex(VertexKind::Normal)),
    ("vp", RecordKind::Vertex(VertexKind::Parameter)),
    ("vt", RecordKind::Vertex(VertexKind::Texture)),
    ("v", RecordKind::Vertex(VertexKind::Geometric)),
    ("cstype", RecordKind::Attribute(CsStatement::Type)),
    ("deg", RecordKind::Attribute(CsStatement::Degree)),
    ("bmat", RecordKind::Attribute(CsStatement::BasisMatrix)),
    ("step", RecordKind::Attribute(CsStatement::Step)),
];

/// Result of classifying one trimmed line.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Line<'a> {
    /// Blank line or comment.
    Skip,
    /// Statement outside the keyword table; carries its leading token.
    Unrecognized(&'a str),
    /// Known statement and the text after its keyword.
    Record(RecordKind, &'a str),
}

/// Classify a line that has already been trimmed.
pub fn classify(line: &str) -> Line<'_> {
    if line.is_empty() || line.starts_with('#') {
        return Line::Skip;
    }

    for &(keyword, kind) in KEYWORDS {
        if let Some(rest) = line.strip_prefix(keyword) {
            if rest.chars().next().is_none_or(char::is_whitespace) {
                return Line::Record(kind, rest);
            }
        }
    }

    Line::Unrecognized(line.split_whitespace().next().unwrap_or(line))
}
