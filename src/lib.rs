//! A small boolean rule language.
//!
//! Rule text such as `age > 30 AND department = 'Sales'` is compiled once into
//! a [`RuleNode`] tree and then evaluated against any number of [`Record`]s.
//!
//! ```
//! use rulekit::{Record, compile, evaluate};
//!
//! let rule = compile("age > 30 AND department = 'Sales'").unwrap();
//!
//! let alice = Record::new().set("age", 35_i64).set("department", "Sales");
//! let bob = Record::new().set("age", 20_i64).set("department", "Sales");
//!
//! assert!(evaluate(&rule, &alice).unwrap());
//! assert!(!evaluate(&rule, &bob).unwrap());
//! ```
//!
//! The free functions use the default lenient [`RuleEngine`]; build an engine
//! to turn on strict mode, pick a [`SplitStrategy`] or cap nesting depth.

mod engine;
mod error;
mod evaluate;
mod parse;
mod rulebook;
mod types;

pub use engine::{RuleEngine, RuleEngineBuilder};
pub use error::RuleError;
pub use parse::{ParseError, SplitStrategy};
pub use rulebook::{RuleBook, StoredRule};
pub use types::{Comparator, EvalError, LogicOp, Record, RuleNode, Value, ValueKind};

/// Compile rule text with the default lenient engine.
///
/// # Errors
///
/// The default engine accepts any text; the `Result` mirrors
/// [`RuleEngine::compile`].
pub fn compile(text: &str) -> Result<RuleNode, ParseError> {
    RuleEngine::default().compile(text)
}

/// Evaluate a compiled rule with the default lenient engine.
///
/// # Errors
///
/// Returns [`EvalError::ComparisonType`] when an ordering comparator meets
/// values of different kinds.
pub fn evaluate(rule: &RuleNode, record: &Record) -> Result<bool, EvalError> {
    RuleEngine::default().evaluate(rule, record)
}
