//! `ternary rules`: list registered rules.

use anyhow::Result;
use ternary_core::Engine;

/// Print each registered rule with its algorithm and weight.
pub fn run(engine: &Engine) -> Result<()> {
    println!("{:<16}  {:<10}  {:>6}", "NAME", "KIND", "WEIGHT");
    println!("{}", "-".repeat(36));
    for name in engine.rule_names() {
        if let Some(rule) = engine.rule(&name) {
            println!("{:<16}  {:<10}  {:>6.2}", name, rule.kind, rule.weight);
        }
    }
    Ok(())
}
