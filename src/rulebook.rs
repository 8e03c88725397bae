use std::collections::BTreeMap;
use std::fmt;

use crate::{ParseError, Record, RuleEngine, RuleError, RuleNode};

/// A named rule: its source text, an optional description and the compiled tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredRule {
    name: String,
    description: Option<String>,
    text: String,
    tree: RuleNode,
}

impl StoredRule {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The rule text exactly as it was saved.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn tree(&self) -> &RuleNode {
        &self.tree
    }
}

/// In-memory collection of rules keyed by unique name.
///
/// Text is compiled before it is stored, so a rule that fails to compile is
/// never saved. Iteration is in name order.
///
/// # Example
///
/// ```
/// use rulekit::{Record, RuleBook};
///
/// let mut book = RuleBook::new();
/// book.save("senior_sales", "age > 30 AND department = 'Sales'", None)
///     .unwrap();
///
/// let alice = Record::new().set("age", 35_i64).set("department", "Sales");
/// assert!(book.evaluate("senior_sales", &alice).unwrap());
/// ```
#[derive(Debug, Clone, Default)]
pub struct RuleBook {
    engine: RuleEngine,
    rules: BTreeMap<String, StoredRule>,
}

impl RuleBook {
    /// An empty book using the default lenient engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// An empty book that compiles and evaluates with `engine`.
    #[must_use]
    pub fn with_engine(engine: RuleEngine) -> Self {
        Self {
            engine,
            rules: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn engine(&self) -> &RuleEngine {
        &self.engine
    }

    /// Compile and store a rule, replacing any rule with the same name.
    ///
    /// Returns the rule previously stored under `name`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if `text` does not compile; the book is unchanged.
    pub fn save(
        &mut self,
        name: &str,
        text: &str,
        description: Option<&str>,
    ) -> Result<Option<StoredRule>, ParseError> {
        let tree = self.engine.compile(text)?;
        let rule = StoredRule {
            name: name.to_owned(),
            description: description.map(str::to_owned),
            text: text.to_owned(),
            tree,
        };
        let previous = self.rules.insert(name.to_owned(), rule);
        tracing::debug!(rule = name, replaced = previous.is_some(), "saved rule");
        Ok(previous)
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&StoredRule> {
        self.rules.get(name)
    }

    /// Remove a rule by name, returning it if it was present.
    pub fn remove(&mut self, name: &str) -> Option<StoredRule> {
        let removed = self.rules.remove(name);
        if removed.is_none() {
            tracing::debug!(rule = name, "no rule to remove");
        }
        removed
    }

    /// Stored rules in name order.
    pub fn iter(&self) -> impl Iterator<Item = &StoredRule> {
        self.rules.values()
    }

    /// Stored rule names in order.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        self.rules.keys().map(String::as_str).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Evaluate the named rule against a record.
    ///
    /// # Errors
    ///
    /// Returns [`RuleError::UnknownRule`] if no rule has that name, or
    /// [`RuleError::Eval`] if evaluation fails.
    pub fn evaluate(&self, name: &str, record: &Record) -> Result<bool, RuleError> {
        let rule = self.get(name).ok_or_else(|| RuleError::UnknownRule {
            name: name.to_owned(),
        })?;
        Ok(self.engine.evaluate(&rule.tree, record)?)
    }
}

impl fmt::Display for RuleBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RuleBook ({} rules):", self.rules.len())?;
        for rule in self.rules.values() {
            write!(f, "  {}: {}", rule.name, rule.text)?;
            if let Some(description) = &rule.description {
                write!(f, "  # {description}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
