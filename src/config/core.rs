use crate::config::{gameplay::GameplayConfig, worldgen::WorldGenConfig};
use crate::utils::error::{Result, SandboxError};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SandboxConfig {
    pub log_level: String,
    pub worldgen: WorldGenConfig,
    pub gameplay: GameplayConfig,
}

impl Default for SandboxConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            worldgen: WorldGenConfig::default(),
            gameplay: GameplayConfig::default(),
        }
    }
}

impl SandboxConfig {
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| SandboxError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Unknown level names fall back to `Info`.
    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SandboxConfig::from_toml_str(
            r#"
            [worldgen]
            seed = 42
            amplitude = 12.0

            [gameplay]
            gravity = 0.02
            "#,
        )
        .unwrap();

        assert_eq!(config.worldgen.seed, 42);
        assert_eq!(config.worldgen.amplitude, 12.0);
        assert_eq!(config.worldgen.world_size, WorldGenConfig::default().world_size);
        assert_eq!(config.gameplay.gravity, 0.02);
        assert_eq!(config.gameplay.player_height, 1.7);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = SandboxConfig::from_toml_str("[worldgen]\nseed = \"abc\"").unwrap_err();
        assert!(matches!(err, SandboxError::ConfigParse(_)));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "log_level = \"debug\"\n[gameplay]\ninteraction_distance = 8.0").unwrap();

        let config = SandboxConfig::load(file.path()).unwrap();
        assert_eq!(config.level_filter(), LevelFilter::Debug);
        assert_eq!(config.gameplay.interaction_distance, 8.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SandboxConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, SandboxError::Io { .. }));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = SandboxConfig::default();
        let text = config.to_toml_string().unwrap();
        assert_eq!(SandboxConfig::from_toml_str(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_log_level_falls_back() {
        let config = SandboxConfig {
            log_level: "chatty".into(),
            ..Default::default()
        };
        assert_eq!(config.level_filter(), LevelFilter::Info);
    }
}
