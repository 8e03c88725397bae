mod condition;
mod error;
mod split;

pub(crate) use condition::{parse_comparator, split_condition, unquote};
pub use error::ParseError;

use crate::{LogicOp, RuleEngine, RuleNode};

/// How a same-precedence chain of more than two segments becomes binary nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SplitStrategy {
    /// Keep only the first two segments of a chain; later ones are dropped.
    /// `a OR b OR c` compiles to `Or(a, b)`.
    #[default]
    FirstPair,
    /// Keep every segment, folding left: `a OR b OR c` compiles to
    /// `Or(Or(a, b), c)`.
    LeftFold,
}

/// Compile rule text into a [`RuleNode`] tree using the engine's settings.
pub(crate) fn compile(text: &str, engine: &RuleEngine) -> Result<RuleNode, ParseError> {
    tracing::trace!(rule = text, "compiling rule");
    compile_segment(text, engine, 0)
}

// `depth` is the number of operator levels above the node being built.
fn compile_segment(text: &str, engine: &RuleEngine, depth: usize) -> Result<RuleNode, ParseError> {
    let mut text = split::normalize(text);
    if let Some(inner) = split::strip_outer_parens(&text) {
        text = split::normalize(inner);
    }

    if engine.strict && text.is_empty() {
        return Err(ParseError::Empty);
    }

    // OR binds loosest, so it is split first.
    for op in [LogicOp::Or, LogicOp::And] {
        let segments = split::split_top_level(&text, op.keyword());
        if segments.len() > 1 {
            return build_operator(op, segments, engine, depth);
        }
    }

    Ok(RuleNode::Operand(text))
}

fn build_operator(
    op: LogicOp,
    mut segments: Vec<String>,
    engine: &RuleEngine,
    depth: usize,
) -> Result<RuleNode, ParseError> {
    if engine.split == SplitStrategy::FirstPair && segments.len() > 2 {
        tracing::debug!(
            operator = %op,
            dropped = segments.len() - 2,
            "keeping the first two segments of a chain"
        );
        segments.truncate(2);
    }

    if engine.strict && segments.iter().any(String::is_empty) {
        return Err(ParseError::EmptySegment { op });
    }

    // A left fold of n segments stacks n - 1 operators.
    let levels = segments.len() - 1;
    if let Some(limit) = engine.max_depth {
        if depth + levels > limit {
            return Err(ParseError::TooDeep { limit });
        }
    }

    let mut segments = segments.into_iter();
    let (Some(first), Some(second)) = (segments.next(), segments.next()) else {
        return Err(ParseError::Empty);
    };

    let mut node = RuleNode::operator(
        op,
        compile_segment(&first, engine, depth + levels)?,
        compile_segment(&second, engine, depth + levels)?,
    );
    for (i, segment) in segments.enumerate() {
        let child_depth = depth + levels - 1 - i;
        node = RuleNode::operator(op, node, compile_segment(&segment, engine, child_depth)?);
    }
    Ok(node)
}
