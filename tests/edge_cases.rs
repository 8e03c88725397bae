use rulekit::{
    Comparator, EvalError, ParseError, Record, RuleEngine, RuleNode, SplitStrategy, Value,
    ValueKind, compile, evaluate,
};

fn matches(text: &str, record: &Record) -> Result<bool, EvalError> {
    evaluate(&compile(text).unwrap(), record)
}

fn strict() -> RuleEngine {
    RuleEngine::builder().strict(true).build()
}

#[test]
fn and_rule_against_two_records() {
    let rule = compile("age > 30 AND department = 'Sales'").unwrap();
    let older = Record::new().set("age", 35_i64).set("department", "Sales");
    let younger = Record::new().set("age", 20_i64).set("department", "Sales");
    assert_eq!(evaluate(&rule, &older), Ok(true));
    assert_eq!(evaluate(&rule, &younger), Ok(false));
}

#[test]
fn missing_field_is_false_not_error() {
    assert_eq!(matches("age > 30", &Record::new()), Ok(false));
}

#[test]
fn three_way_or_chain_drops_third_clause() {
    let rule = compile("a = '1' OR a = '2' OR a = '3'").unwrap();
    assert_eq!(
        rule,
        RuleNode::operand("a = '1'").or(RuleNode::operand("a = '2'"))
    );

    let record = Record::new().set("a", "3");
    // Only the first two clauses survive compilation.
    assert_eq!(evaluate(&rule, &record), Ok(false));
    assert_eq!(evaluate(&rule, &Record::new().set("a", "2")), Ok(true));
}

#[test]
fn three_way_or_chain_with_left_fold() {
    let engine = RuleEngine::builder().split(SplitStrategy::LeftFold).build();
    let rule = engine.compile("a = '1' OR a = '2' OR a = '3'").unwrap();
    assert_eq!(engine.evaluate(&rule, &Record::new().set("a", "3")), Ok(true));
    assert_eq!(engine.evaluate(&rule, &Record::new().set("a", "4")), Ok(false));
}

#[test]
fn digit_string_field_is_coerced() {
    assert_eq!(matches("age < 100", &Record::new().set("age", "99")), Ok(true));
}

#[test]
fn cross_kind_ordering_fails() {
    assert_eq!(
        matches("age > 'old'", &Record::new().set("age", 5_i64)),
        Err(EvalError::ComparisonType {
            field: "age".into(),
            comparator: Comparator::Gt,
            left: ValueKind::Int,
            right: ValueKind::String,
        })
    );
}

#[test]
fn unknown_comparator_is_false() {
    assert_eq!(matches("age ~ 5", &Record::new().set("age", 5_i64)), Ok(false));
}

#[test]
fn recompiled_rules_agree() {
    let text = "(age > 25 AND salary >= 50000) OR department = 'Marketing'";
    let first = compile(text).unwrap();
    let second = compile(text).unwrap();
    assert_eq!(first, second);

    let records = [
        Record::new().set("age", 30_i64).set("salary", 60_000_i64),
        Record::new().set("department", "Marketing"),
        Record::new().set("age", "26").set("salary", "49999"),
        Record::new(),
    ];
    for record in &records {
        assert_eq!(evaluate(&first, record), evaluate(&second, record));
    }
}

#[test]
fn digit_literal_beyond_i64_still_compares() {
    let record = Record::new().set("id", 5_i64);
    assert_eq!(matches("id < 99999999999999999999", &record), Ok(true));
    assert_eq!(
        matches("id < 10000000000000000000", &Record::new().set("id", "5")),
        Ok(true)
    );
}

#[test]
fn quoted_digits_still_coerce() {
    let record = Record::new().set("age", 35_i64);
    assert_eq!(matches("age >= '35'", &record), Ok(true));
    assert_eq!(matches("age = '35'", &record), Ok(true));
    assert_eq!(matches("age = 035", &record), Ok(true));
}

#[test]
fn equality_against_string_field_keeps_text() {
    let record = Record::new().set("code", "A1");
    assert_eq!(matches("code = A1", &record), Ok(true));
    assert_eq!(matches("code = 'A1'", &record), Ok(true));
    assert_eq!(matches("code != 'a1'", &record), Ok(true));
}

#[test]
fn literal_with_space_is_unrepresentable() {
    let record = Record::new().set("city", "New York");
    assert_eq!(matches("city = 'New York'", &record), Ok(false));
    assert!(matches!(
        strict().matches("city = 'New York'", &record),
        Err(rulekit::RuleError::Eval(EvalError::MalformedCondition { .. }))
    ));
}

#[test]
fn empty_quoted_literal() {
    let record = Record::new().set("note", "");
    assert_eq!(matches("note = ''", &record), Ok(true));
    assert_eq!(matches("note != ''", &record), Ok(false));
}

#[test]
fn boolean_fields() {
    let record = Record::new().set("active", true);
    assert_eq!(matches("active = True", &record), Ok(true));
    assert_eq!(matches("active = 'True'", &record), Ok(true));
    assert_eq!(matches("active = true", &record), Ok(false));
    assert_eq!(matches("active != False", &record), Ok(true));
    assert!(matches!(
        matches("active > False", &record),
        Err(EvalError::ComparisonType {
            left: ValueKind::Bool,
            ..
        })
    ));
}

#[test]
fn nan_float_orders_false() {
    let record = Record::new().set("x", f64::NAN);
    // The literal is a string, so ordering a float field is a kind error.
    assert!(matches!(
        matches("x > 1", &record),
        Err(EvalError::ComparisonType { .. })
    ));
    assert_eq!(
        Value::Float(f64::NAN).compare(Comparator::Gt, &Value::Float(0.0)),
        Some(false)
    );
}

#[test]
fn lowercase_keywords_are_not_operators() {
    assert_eq!(
        compile("a = 1 and b = 2").unwrap(),
        RuleNode::operand("a = 1 and b = 2")
    );
    assert_eq!(
        matches("a = 1 and b = 2", &Record::new().set("a", 1_i64)),
        Ok(false)
    );
}

#[test]
fn unbalanced_parens_are_accepted() {
    let rule = compile("( a = 1 OR b = 2").unwrap();
    // The open paren is never closed, so OR never sits at depth zero.
    assert_eq!(rule, RuleNode::operand("( a = 1 OR b = 2"));
    assert_eq!(matches("( a = 1 OR b = 2", &Record::new().set("a", 1_i64)), Ok(false));
}

#[test]
fn attached_parens_do_not_group() {
    // `(a` is not a standalone paren token, so OR splits first.
    assert_eq!(
        compile("(a = 1 OR b = 2) AND c = 3").unwrap(),
        RuleNode::operand("(a = 1").or(
            RuleNode::operand("b = 2)").and(RuleNode::operand("c = 3"))
        )
    );
}

#[test]
fn outer_parens_on_both_groups_are_mangled() {
    // Only the first and last characters are checked before stripping.
    assert_eq!(
        compile("( a = 1 ) AND ( b = 2 )").unwrap(),
        RuleNode::operand("a = 1 ) AND ( b = 2")
    );
}

#[test]
fn strict_mode_errors() {
    let engine = strict();
    assert_eq!(engine.compile(""), Err(ParseError::Empty));
    assert!(matches!(
        engine.compile("a = 1 OR OR b = 2"),
        Err(ParseError::EmptySegment { .. })
    ));

    let rule = engine.compile("age ~ 5").unwrap();
    assert_eq!(
        engine.evaluate(&rule, &Record::new().set("age", 5_i64)),
        Err(EvalError::UnknownComparator {
            condition: "age ~ 5".into(),
            token: "~".into(),
        })
    );
    // A missing field stays a plain `false` even in strict mode.
    let rule = engine.compile("age > 5").unwrap();
    assert_eq!(engine.evaluate(&rule, &Record::new()), Ok(false));
}

#[test]
fn depth_cap_bounds_nesting() {
    let engine = RuleEngine::builder().max_depth(3).build();
    let mut text = String::from("x = 0");
    for i in 1..=3 {
        text = format!("( {text} OR x = {i} ) AND y = {i}");
    }
    assert_eq!(
        engine.compile(&text),
        Err(ParseError::TooDeep { limit: 3 })
    );
    assert_eq!(compile(&text).unwrap().depth(), 6);
}

#[test]
fn whitespace_is_normalized() {
    assert_eq!(
        compile("\tage\n>   30   AND\r\ndepartment = 'Sales'  ").unwrap(),
        compile("age > 30 AND department = 'Sales'").unwrap()
    );
}
