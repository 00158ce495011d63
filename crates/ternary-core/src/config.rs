//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::log::LogRetention;

/// Settings applied when an [`Engine`](crate::Engine) is constructed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Retention bound for the decision log.
    #[serde(default)]
    pub retention: LogRetention,
}

impl EngineConfig {
    /// Builder: set log retention.
    pub fn with_retention(mut self, retention: LogRetention) -> Self {
        self.retention = retention;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::log::DEFAULT_RETENTION;

    #[test]
    fn default_is_bounded() {
        let config = EngineConfig::default();
        assert_eq!(config.retention.capacity(), Some(DEFAULT_RETENTION));
    }

    #[test]
    fn deserialize_retention_count() {
        let config: EngineConfig = serde_json::from_str(r#"{"retention": 0}"#).unwrap();
        assert_eq!(config.retention, LogRetention::Unbounded);

        let config: EngineConfig = serde_json::from_str(r#"{"retention": 64}"#).unwrap();
        assert_eq!(config.retention.capacity(), Some(64));

        let config: EngineConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, EngineConfig::default());
    }
}
