//! `ternary truth-table`: tabulate a rule over every pair of trits.

use anyhow::{bail, Result};
use ternary_core::{Engine, Trit};

/// Build the 3x3 table of `rule(a, b)`; rows are `a`, columns are `b`.
pub fn table(engine: &Engine, rule: &str) -> Result<[[Trit; 3]; 3]> {
    if engine.rule(rule).is_none() {
        bail!("rule '{rule}' is not registered");
    }
    let mut out = [[Trit::Unknown; 3]; 3];
    for (i, a) in Trit::ALL.into_iter().enumerate() {
        for (j, b) in Trit::ALL.into_iter().enumerate() {
            out[i][j] = engine.evaluate(rule, &[a, b]).value();
        }
    }
    Ok(out)
}

/// Print the truth table for `rule`.
pub fn run(engine: &Engine, rule: &str) -> Result<()> {
    let rows = table(engine, rule)?;
    print!("{rule:<10}");
    for b in Trit::ALL {
        print!("{:<10}", b.to_string());
    }
    println!();
    for (a, row) in Trit::ALL.into_iter().zip(rows) {
        print!("{:<10}", a.to_string());
        for v in row {
            print!("{:<10}", v.to_string());
        }
        println!();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use Trit::{False as F, True as T, Unknown as U};

    #[test]
    fn kleene_and_table() {
        let engine = Engine::new();
        let t = table(&engine, "AND").unwrap();
        assert_eq!(t, [[F, F, F], [F, U, U], [F, U, T]]);
        assert_eq!(engine.stats().total_decisions, 9);
    }

    #[test]
    fn kleene_or_table() {
        let engine = Engine::new();
        let t = table(&engine, "OR").unwrap();
        assert_eq!(t, [[F, U, T], [U, U, T], [T, T, T]]);
    }

    #[test]
    fn unknown_rule_is_an_error() {
        let engine = Engine::new();
        assert!(table(&engine, "XOR").is_err());
        assert_eq!(engine.stats().total_evaluations, 0);
    }

    #[test]
    fn print_table() {
        run(&Engine::new(), "CONSENSUS").unwrap();
    }
}
