use crate::{EvalError, ParseError, Record, RuleError, RuleNode, SplitStrategy};

/// Compiles and evaluates rules under a fixed set of options.
///
/// The default engine is lenient: degenerate rule text still compiles, and
/// malformed conditions or unknown comparators evaluate to `false`. A strict
/// engine reports those cases as errors instead.
///
/// # Example
///
/// ```
/// use rulekit::{Record, RuleEngine, SplitStrategy};
///
/// let engine = RuleEngine::builder()
///     .strict(true)
///     .split(SplitStrategy::LeftFold)
///     .max_depth(16)
///     .build();
///
/// let rule = engine.compile("a = '1' OR a = '2' OR a = '3'").unwrap();
/// let record = Record::new().set("a", "3");
/// assert!(engine.evaluate(&rule, &record).unwrap());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleEngine {
    pub(crate) strict: bool,
    pub(crate) split: SplitStrategy,
    pub(crate) max_depth: Option<usize>,
}

/// Builder for a [`RuleEngine`].
#[derive(Debug, Clone, Default)]
pub struct RuleEngineBuilder {
    engine: RuleEngine,
}

impl RuleEngine {
    /// A lenient engine with the [`SplitStrategy::FirstPair`] split and no depth cap.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn builder() -> RuleEngineBuilder {
        RuleEngineBuilder::default()
    }

    #[must_use]
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    #[must_use]
    pub fn split_strategy(&self) -> SplitStrategy {
        self.split
    }

    #[must_use]
    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Compile rule text into a reusable tree.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] when the tree would exceed the depth cap, or in
    /// strict mode when the text or one of its segments is empty.
    pub fn compile(&self, text: &str) -> Result<RuleNode, ParseError> {
        crate::parse::compile(text, self)
    }

    /// Evaluate a compiled tree against a record.
    ///
    /// # Errors
    ///
    /// Returns [`EvalError::ComparisonType`] when an ordering comparator meets
    /// values of different kinds. Strict engines also return
    /// [`EvalError::MalformedCondition`] and [`EvalError::UnknownComparator`].
    pub fn evaluate(&self, rule: &RuleNode, record: &Record) -> Result<bool, EvalError> {
        tracing::trace!(%rule, "evaluating rule");
        crate::evaluate::evaluate(rule, record, self.strict)
    }

    /// Compile `text` and evaluate it once.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError`] on compile or evaluation failure.
    pub fn matches(&self, text: &str, record: &Record) -> Result<bool, RuleError> {
        let rule = self.compile(text)?;
        Ok(self.evaluate(&rule, record)?)
    }
}

impl RuleEngineBuilder {
    /// Report malformed input as errors instead of evaluating it to `false`.
    #[must_use]
    pub fn strict(mut self, strict: bool) -> Self {
        self.engine.strict = strict;
        self
    }

    #[must_use]
    pub fn split(mut self, split: SplitStrategy) -> Self {
        self.engine.split = split;
        self
    }

    /// Reject rules whose operators nest deeper than `limit`.
    #[must_use]
    pub fn max_depth(mut self, limit: usize) -> Self {
        self.engine.max_depth = Some(limit);
        self
    }

    #[must_use]
    pub fn build(self) -> RuleEngine {
        self.engine
    }
}
