//! Parser configuration.

/// How `cstype` names outside the known family are treated.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum CsTypeValidation {
    /// Reject unknown names with `DecodeError::UnknownType`.
    #[default]
    Strict,
    /// Keep unknown names as `CsTypeName::Other`.
    Lenient,
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ParseOptions {
    pub cstype: CsTypeValidation,
}

impl ParseOptions {
    pub fn with_cstype_validation(mut self, cstype: CsTypeValidation) -> Self {
        self.cstype = cstype;
        self
    }
}
