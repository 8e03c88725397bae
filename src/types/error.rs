use thiserror::Error;

use super::{Comparator, ValueKind};

/// Errors produced while evaluating a compiled rule against a record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("cannot compare {left} field '{field}' {comparator} {right} literal")]
    ComparisonType {
        field: String,
        comparator: Comparator,
        left: ValueKind,
        right: ValueKind,
    },

    /// Only raised in strict mode; lenient evaluation yields `false`.
    #[error("malformed condition '{condition}': expected 'field comparator literal'")]
    MalformedCondition { condition: String },

    /// Only raised in strict mode; lenient evaluation yields `false`.
    #[error("unknown comparator '{token}' in condition '{condition}'")]
    UnknownComparator { condition: String, token: String },
}
