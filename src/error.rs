use thiserror::Error;

use crate::{EvalError, ParseError};

/// Unified error type covering compilation, evaluation and rule lookup.
///
/// Returned by convenience methods like [`RuleEngine::matches()`](crate::RuleEngine::matches)
/// and [`RuleBook::evaluate()`](crate::RuleBook::evaluate).
#[derive(Debug, Error)]
pub enum RuleError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Eval(#[from] EvalError),

    #[error("no rule named '{name}'")]
    UnknownRule { name: String },
}
