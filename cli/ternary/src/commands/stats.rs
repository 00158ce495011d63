//! `ternary stats`: show engine counters.

use anyhow::Result;
use ternary_core::Engine;

/// Print the engine's counters. The CLI passes a freshly built engine, so
/// only the registry size and retention reflect configuration.
pub fn run(engine: &Engine, json: bool) -> Result<()> {
    let stats = engine.stats();
    if json {
        println!("{}", serde_json::to_string_pretty(&stats.to_map())?);
    } else {
        println!("Engine stats:");
        println!("  Evaluations:       {:>8}", stats.total_evaluations);
        println!("  Decisions:         {:>8}", stats.total_decisions);
        println!("  Retained:          {:>8}", stats.retained_decisions);
        println!("  Registered rules:  {:>8}", stats.registered_rules);
        println!("  Log retention:     {:>8}", engine.retention());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_both_formats() {
        let engine = Engine::new();
        run(&engine, false).unwrap();
        run(&engine, true).unwrap();
    }
}
