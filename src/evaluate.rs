use crate::parse::{parse_comparator, split_condition, unquote};
use crate::types::DigitRun;
use crate::{EvalError, LogicOp, Record, RuleNode, Value};

/// Evaluate a compiled tree against a record.
///
/// Both children of an operator are always evaluated, left first; an error in
/// the left child is returned before the right one runs.
pub(crate) fn evaluate(node: &RuleNode, record: &Record, strict: bool) -> Result<bool, EvalError> {
    match node {
        RuleNode::Operator { op, left, right } => {
            let left = evaluate(left, record, strict)?;
            let right = evaluate(right, record, strict)?;
            Ok(match op {
                LogicOp::And => left && right,
                LogicOp::Or => left || right,
            })
        }
        RuleNode::Operand(condition) => eval_condition(condition, record, strict),
    }
}

fn eval_condition(condition: &str, record: &Record, strict: bool) -> Result<bool, EvalError> {
    let Some(parts) = split_condition(condition) else {
        if strict {
            return Err(EvalError::MalformedCondition {
                condition: condition.to_owned(),
            });
        }
        tracing::debug!(condition, "condition is not three tokens; evaluating to false");
        return Ok(false);
    };

    let Some(comparator) = parse_comparator(parts.comparator) else {
        if strict {
            return Err(EvalError::UnknownComparator {
                condition: condition.to_owned(),
                token: parts.comparator.to_owned(),
            });
        }
        tracing::debug!(
            condition,
            comparator = parts.comparator,
            "unknown comparator; evaluating to false"
        );
        return Ok(false);
    };

    let Some(actual) = record.get(parts.field) else {
        tracing::trace!(field = parts.field, "field missing from record");
        return Ok(false);
    };

    let literal = unquote(parts.literal);
    // Two digit runs compare as integers of any length.
    if let (Some(left), Some(right)) = (actual.as_digit_run(), DigitRun::parse(literal)) {
        return Ok(comparator.holds(left.cmp(&right)));
    }

    let right = Value::String(literal.to_owned());
    actual
        .compare(comparator, &right)
        .ok_or_else(|| EvalError::ComparisonType {
            field: parts.field.to_owned(),
            comparator,
            left: actual.kind(),
            right: right.kind(),
        })
}
