use std::cmp::Ordering;
use std::fmt;

/// Comparison tokens recognised inside a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
}

impl Comparator {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Comparator::Eq => "=",
            Comparator::Neq => "!=",
            Comparator::Gt => ">",
            Comparator::Gte => ">=",
            Comparator::Lt => "<",
            Comparator::Lte => "<=",
        }
    }

    /// Whether this comparator needs an ordering between its operands.
    #[must_use]
    pub fn is_ordering(self) -> bool {
        !matches!(self, Comparator::Eq | Comparator::Neq)
    }

    /// Whether `left.cmp(right) == ord` satisfies this comparator.
    #[must_use]
    pub fn holds(self, ord: Ordering) -> bool {
        match self {
            Comparator::Eq => ord == Ordering::Equal,
            Comparator::Neq => ord != Ordering::Equal,
            Comparator::Gt => ord == Ordering::Greater,
            Comparator::Gte => ord != Ordering::Less,
            Comparator::Lt => ord == Ordering::Less,
            Comparator::Lte => ord != Ordering::Greater,
        }
    }
}

impl fmt::Display for Comparator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
