//! `ternary batch`: evaluate a file of rule invocations on one engine.
//!
//! Each non-blank line is `RULE trit trit ...`; `#` starts a comment.

use std::path::Path;

use anyhow::{Context, Result};
use ternary_core::{Engine, Trit};

use crate::commands::eval::format_record;

/// A parsed batch line.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub rule: String,
    pub inputs: Vec<Trit>,
}

/// Parse one line. Returns `None` for blank lines and comments.
pub fn parse_line(line: &str) -> Result<Option<Invocation>> {
    let line = match line.split_once('#') {
        Some((before, _)) => before,
        None => line,
    };
    let mut tokens = line.split_whitespace();
    let Some(rule) = tokens.next() else {
        return Ok(None);
    };
    let inputs = tokens
        .map(|tok| tok.parse::<Trit>())
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Some(Invocation {
        rule: rule.to_string(),
        inputs,
    }))
}

/// Parse a whole batch file's contents.
pub fn parse(content: &str) -> Result<Vec<Invocation>> {
    let mut out = Vec::new();
    for (n, line) in content.lines().enumerate() {
        if let Some(inv) = parse_line(line).with_context(|| format!("line {}", n + 1))? {
            out.push(inv);
        }
    }
    Ok(out)
}

/// Run every invocation in `path` and print decisions followed by stats.
pub fn run(engine: &Engine, path: &Path, json: bool) -> Result<()> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let invocations = parse(&content).with_context(|| format!("parsing {}", path.display()))?;

    let records: Vec<_> = invocations
        .iter()
        .map(|inv| engine.evaluate(&inv.rule, &inv.inputs))
        .collect();
    let stats = engine.stats();

    if json {
        let out = serde_json::json!({
            "decisions": records,
            "stats": stats.to_map(),
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for record in &records {
            println!("{}", format_record(record));
        }
        println!();
        println!(
            "{} evaluations, {} logged decisions",
            stats.total_evaluations, stats.total_decisions
        );
    }
    Ok(())
}
