mod comparator;
mod error;
mod node;
mod record;
mod value;

pub use comparator::Comparator;
pub use error::EvalError;
pub use node::{LogicOp, RuleNode};
pub use record::Record;
pub(crate) use value::DigitRun;
pub use value::{Value, ValueKind};
