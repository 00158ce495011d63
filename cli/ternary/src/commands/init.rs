//! `ternary init`: write a starter `ternary.toml`.

use std::path::Path;

use anyhow::{Context, Result};

use crate::manifest::{TernaryManifest, MANIFEST_FILE};

/// Create `ternary.toml` in `dir` unless one already exists.
pub fn run(dir: &Path) -> Result<()> {
    let path = dir.join(MANIFEST_FILE);
    if path.exists() {
        println!("{MANIFEST_FILE} already exists at {}", path.display());
        return Ok(());
    }
    std::fs::write(&path, TernaryManifest::template())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_creates_manifest() {
        let dir = tempfile::tempdir().unwrap();
        run(dir.path()).unwrap();
        let manifest = TernaryManifest::load(&dir.path().join(MANIFEST_FILE)).unwrap();
        assert_eq!(manifest.log.retention, Some(100_000));
    }

    #[test]
    fn init_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(MANIFEST_FILE);
        std::fs::write(&path, "[log]\nretention = 1\n").unwrap();
        run(dir.path()).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "[log]\nretention = 1\n"
        );
    }
}
