use std::fmt;
use std::fmt::Write as _;

/// Boolean combinator held by an operator node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicOp {
    And,
    Or,
}

impl LogicOp {
    /// The keyword that introduces this operator in rule text.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            LogicOp::And => "AND",
            LogicOp::Or => "OR",
        }
    }
}

impl fmt::Display for LogicOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Compiled rule tree.
///
/// Operator nodes own both children; operand leaves hold the raw condition
/// text (`field comparator literal`), which is only interpreted at evaluation
/// time. A tree is immutable once built and is `Send + Sync`, so a single
/// compiled rule can be shared behind `Arc` and evaluated from many threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleNode {
    Operator {
        op: LogicOp,
        left: Box<RuleNode>,
        right: Box<RuleNode>,
    },
    Operand(String),
}

impl RuleNode {
    #[must_use]
    pub fn operator(op: LogicOp, left: RuleNode, right: RuleNode) -> Self {
        RuleNode::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub fn and(self, other: RuleNode) -> Self {
        Self::operator(LogicOp::And, self, other)
    }

    #[must_use]
    pub fn or(self, other: RuleNode) -> Self {
        Self::operator(LogicOp::Or, self, other)
    }

    #[must_use]
    pub fn operand(condition: impl Into<String>) -> Self {
        RuleNode::Operand(condition.into())
    }

    /// Number of operator levels above the deepest leaf. A lone operand has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        match self {
            RuleNode::Operator { left, right, .. } => 1 + left.depth().max(right.depth()),
            RuleNode::Operand(_) => 0,
        }
    }

    /// Leaf conditions in left-to-right order.
    #[must_use]
    pub fn conditions(&self) -> Vec<&str> {
        let mut out = Vec::new();
        self.collect_conditions(&mut out);
        out
    }

    fn collect_conditions<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            RuleNode::Operator { left, right, .. } => {
                left.collect_conditions(out);
                right.collect_conditions(out);
            }
            RuleNode::Operand(condition) => out.push(condition),
        }
    }

    /// Render the tree one node per line, children indented under their parent.
    ///
    /// ```
    /// let tree = rulekit::compile("age > 30 AND department = 'Sales'").unwrap();
    /// assert_eq!(
    ///     tree.render_tree(),
    ///     "└─ AND\n   └─ age > 30\n   └─ department = 'Sales'\n"
    /// );
    /// ```
    #[must_use]
    pub fn render_tree(&self) -> String {
        TreeView(self).to_string()
    }

    fn render_into(&self, out: &mut impl fmt::Write, prefix: &str) -> fmt::Result {
        match self {
            RuleNode::Operator { op, left, right } => {
                writeln!(out, "{prefix}└─ {op}")?;
                let child_prefix = format!("{prefix}   ");
                left.render_into(out, &child_prefix)?;
                right.render_into(out, &child_prefix)
            }
            RuleNode::Operand(condition) => writeln!(out, "{prefix}└─ {condition}"),
        }
    }
}

/// Renders a [`RuleNode`] in the indented layout of [`RuleNode::render_tree`].
struct TreeView<'a>(&'a RuleNode);

impl fmt::Display for TreeView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render_into(f, "")
    }
}

impl fmt::Display for RuleNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleNode::Operator { op, left, right } => write!(f, "({left} {op} {right})"),
            RuleNode::Operand(condition) => f.write_str(condition),
        }
    }
}
