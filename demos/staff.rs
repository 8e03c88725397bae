use rulekit::{Record, RuleBook};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut book = RuleBook::new();
    let rules = [
        ("Simple AND rule", "age > 30 AND department = 'Sales'"),
        ("Simple OR rule", "age < 25 OR department = 'Marketing'"),
        (
            "Complex rule",
            "(age > 25 AND salary >= 50000) OR department = 'Marketing'",
        ),
    ];
    for (name, text) in rules {
        book.save(name, text, None).expect("failed to compile rule");
    }

    let staff = [
        ("Alice", 35_i64, "Sales", 60_000_i64),
        ("Bob", 22, "Engineering", 45_000),
        ("Charlie", 28, "Marketing", 50_000),
    ];

    println!("{book}");

    for rule in book.iter() {
        println!("Testing {}: {}", rule.name(), rule.text());
        print!("{}", rule.tree().render_tree());

        for (name, age, department, salary) in staff {
            let record = Record::new()
                .set("name", name)
                .set("age", age)
                .set("department", department)
                .set("salary", salary);
            match book.evaluate(rule.name(), &record) {
                Ok(result) => println!(
                    "  {name} (Age: {age}, Dept: {department}, Salary: {salary}): {result}"
                ),
                Err(e) => println!("  {name}: {e}"),
            }
        }
        println!();
    }
}
