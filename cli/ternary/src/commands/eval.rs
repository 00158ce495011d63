//! `ternary eval`: evaluate one rule.

use anyhow::Result;
use ternary_core::{DecisionRecord, Engine, Trit};

/// Evaluate `rule` on `inputs` and print the decision.
pub fn run(engine: &Engine, rule: &str, inputs: &[Trit], json: bool) -> Result<()> {
    let record = engine.evaluate(rule, inputs);
    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", format_record(&record));
    }
    Ok(())
}

/// One-line human-readable rendering of a decision.
pub fn format_record(record: &DecisionRecord) -> String {
    format!(
        "{}  confidence={:.2}  {}  [{} @ {}]",
        record.value().describe(),
        record.confidence(),
        record.reason(),
        &record.id().to_string()[..8],
        record.timestamp().format("%Y-%m-%dT%H:%M:%SZ"),
    )
}
