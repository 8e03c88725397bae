use thiserror::Error;

use crate::LogicOp;

/// Errors produced when compiling rule text.
///
/// Lenient compilation only ever fails on [`ParseError::TooDeep`]; the other
/// variants are raised in strict mode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("parse error: rule text is empty")]
    Empty,

    #[error("parse error: empty condition next to '{op}'")]
    EmptySegment { op: LogicOp },

    #[error("parse error: rule nesting exceeds the limit of {limit}")]
    TooDeep { limit: usize },
}
