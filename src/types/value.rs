use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

use super::comparator::Comparator;

/// Runtime value of a record field, or of a literal taken from rule text.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit floating-point number.
    Float(f64),
    /// A UTF-8 string.
    String(String),
}

/// The kind of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Bool,
    Int,
    Float,
    String,
}

impl Value {
    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::String(_) => ValueKind::String,
        }
    }

    /// Compare this value to another using the given comparator.
    ///
    /// `Eq` and `Neq` compare the stringified forms, so values of different
    /// kinds can be equal (`Int(35)` equals `String("35")`). Ordering
    /// comparators require both sides to be the same kind and return `None`
    /// otherwise. A NaN operand orders as `false`.
    #[must_use]
    pub fn compare(&self, op: Comparator, other: &Value) -> Option<bool> {
        if !op.is_ordering() {
            let equal = self.to_string() == other.to_string();
            return Some(equal == (op == Comparator::Eq));
        }

        let ord = match (self, other) {
            (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
            (Value::Float(a), Value::Float(b)) => a.partial_cmp(b),
            (Value::String(a), Value::String(b)) => Some(a.cmp(b)),
            (Value::Bool(a), Value::Bool(b)) => Some(a.cmp(b)),
            _ => return None,
        };
        Some(ord.is_some_and(|ord| op.holds(ord)))
    }

    /// The value as a digit run, if its stringified form is a plain run of
    /// ASCII digits (no sign, no decimal point).
    pub(crate) fn as_digit_run(&self) -> Option<DigitRun<'_>> {
        match self {
            Value::Int(v) if *v >= 0 => {
                let digits = v.to_string();
                DigitRun::parse(&digits).map(DigitRun::into_owned)
            }
            Value::String(s) => DigitRun::parse(s),
            _ => None,
        }
    }
}

/// A non-negative integer spelled as ASCII digits, of unbounded length.
///
/// Only the significant digits are kept, so `007` and `7` are equal and zero
/// is the empty run. Ordering is numeric: a longer run is larger, runs of the
/// same length compare digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DigitRun<'a>(Cow<'a, str>);

impl<'a> DigitRun<'a> {
    /// Parse `s` only if it is a non-empty run of ASCII digits.
    pub(crate) fn parse(s: &'a str) -> Option<Self> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Some(DigitRun(Cow::Borrowed(s.trim_start_matches('0'))))
    }

    fn into_owned(self) -> DigitRun<'static> {
        DigitRun(Cow::Owned(self.0.into_owned()))
    }
}

impl Ord for DigitRun<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for DigitRun<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// Renders the stringified form used by `=` and `!=`.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v:?}"),
            Value::String(v) => f.write_str(v),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "boolean",
            ValueKind::Int => "integer",
            ValueKind::Float => "float",
            ValueKind::String => "string",
        };
        f.write_str(name)
    }
}
