//! `ternary.toml` manifest parsing and engine configuration.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use ternary_core::{Engine, EngineConfig, LogRetention, Rule, RuleKind};

/// Manifest file name searched for upward from the working directory.
pub const MANIFEST_FILE: &str = "ternary.toml";

/// The top-level manifest structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TernaryManifest {
    /// Decision log settings.
    #[serde(default)]
    pub log: LogConfig,
    /// Extra rules built from the built-in algorithms.
    #[serde(default)]
    pub rules: Vec<RuleConfig>,
}

/// Decision log section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LogConfig {
    /// Retained decisions; `0` keeps everything.
    #[serde(default)]
    pub retention: Option<usize>,
}

/// A `[[rules]]` entry: a built-in algorithm under a name and weight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Registry name; replaces an existing rule with the same name.
    pub name: String,
    /// Built-in algorithm (AND, OR, NOT, CONSENSUS, EVOLVE).
    pub kind: String,
    /// Confidence weight (defaults to the algorithm's default weight).
    #[serde(default)]
    pub weight: Option<f64>,
}

impl TernaryManifest {
    /// Search upward from `start_dir` for a `ternary.toml` file, parse and
    /// return it along with the path it was found at.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(MANIFEST_FILE);
            if candidate.is_file() {
                let manifest = Self::load(&candidate)?;
                return Ok(Some((manifest, candidate)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a manifest at an explicit path.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a manifest from a TOML string.
    #[cfg(test)]
    pub fn parse(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing ternary.toml")
    }

    /// Engine configuration described by the manifest.
    pub fn engine_config(&self) -> EngineConfig {
        match self.log.retention {
            Some(n) => EngineConfig::default().with_retention(LogRetention::from(n)),
            None => EngineConfig::default(),
        }
    }

    /// Resolve every `[[rules]]` entry into a rule.
    pub fn extra_rules(&self) -> Result<Vec<Rule>> {
        self.rules
            .iter()
            .map(|cfg| {
                let kind: RuleKind = cfg
                    .kind
                    .parse()
                    .with_context(|| format!("rule '{}'", cfg.name))?;
                let weight = cfg.weight.unwrap_or_else(|| kind.default_weight());
                Ok(Rule::new(cfg.name.clone(), weight, kind))
            })
            .collect()
    }

    /// Build an engine with the manifest's configuration and extra rules.
    pub fn build_engine(&self, retention_override: Option<LogRetention>) -> Result<Engine> {
        let mut config = self.engine_config();
        if let Some(retention) = retention_override {
            config = config.with_retention(retention);
        }
        let engine = Engine::with_config(config);
        for rule in self.extra_rules()? {
            engine.add_rule(rule.name.clone(), rule);
        }
        Ok(engine)
    }

    /// Generate the default template written by `ternary init`.
    pub fn template() -> String {
        r#"[log]
# Decisions kept in memory; 0 keeps everything.
retention = 100000

# Register built-in algorithms under new names or weights.
# [[rules]]
# name = "MAJORITY"
# kind = "CONSENSUS"
# weight = 1.2
"#
        .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ternary_core::Trit;

    #[test]
    fn parse_full_manifest() {
        let toml_str = r#"
[log]
retention = 16

[[rules]]
name = "MAJORITY"
kind = "consensus"
weight = 1.2

[[rules]]
name = "ALL"
kind = "AND"
"#;
        let manifest = TernaryManifest::parse(toml_str).unwrap();
        assert_eq!(manifest.log.retention, Some(16));
        assert_eq!(manifest.rules.len(), 2);

        let rules = manifest.extra_rules().unwrap();
        assert_eq!(rules[0].name, "MAJORITY");
        assert_eq!(rules[0].weight, 1.2);
        assert_eq!(rules[1].weight, 1.0);
        assert_eq!(
            manifest.engine_config().retention.capacity(),
            Some(16)
        );
    }

    #[test]
    fn parse_empty_manifest() {
        let manifest = TernaryManifest::parse("").unwrap();
        assert!(manifest.rules.is_empty());
        assert_eq!(manifest.engine_config(), EngineConfig::default());
    }

    #[test]
    fn zero_retention_is_unbounded() {
        let manifest = TernaryManifest::parse("[log]\nretention = 0\n").unwrap();
        assert_eq!(manifest.engine_config().retention, LogRetention::Unbounded);
    }

    #[test]
    fn reject_unknown_kind() {
        let manifest = TernaryManifest::parse(
            "[[rules]]\nname = \"X\"\nkind = \"XOR\"\n",
        )
        .unwrap();
        let err = manifest.extra_rules().unwrap_err();
        assert!(format!("{err:#}").contains("XOR"));
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(TernaryManifest::parse("this is not valid toml [[[").is_err());
    }

    #[test]
    fn build_engine_registers_rules() {
        let manifest = TernaryManifest::parse(
            "[[rules]]\nname = \"AND\"\nkind = \"OR\"\n\n[[rules]]\nname = \"MAJORITY\"\nkind = \"CONSENSUS\"\nweight = 0.5\n",
        )
        .unwrap();
        let engine = manifest.build_engine(None).unwrap();
        assert_eq!(engine.stats().registered_rules, 6);
        // AND now runs the OR algorithm.
        assert_eq!(
            engine.evaluate("AND", &[Trit::True, Trit::False]).value(),
            Trit::True
        );
        assert_eq!(
            engine.evaluate("MAJORITY", &[Trit::True]).confidence(),
            0.5
        );
    }

    #[test]
    fn retention_override_wins() {
        let manifest = TernaryManifest::parse("[log]\nretention = 5\n").unwrap();
        let engine = manifest
            .build_engine(Some(LogRetention::Unbounded))
            .unwrap();
        assert_eq!(engine.retention(), LogRetention::Unbounded);
    }

    #[test]
    fn template_is_valid_toml() {
        let manifest = TernaryManifest::parse(&TernaryManifest::template()).unwrap();
        assert_eq!(manifest.log.retention, Some(100_000));
        assert!(manifest.rules.is_empty());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(MANIFEST_FILE), "[log]\nretention = 3\n").unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (manifest, path) = TernaryManifest::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(manifest.log.retention, Some(3));
        assert_eq!(path, dir.path().join(MANIFEST_FILE));
    }
}
