use std::path::Path;

use crate::error::ConfigError;
use crate::game::{ControllerKind, DEFAULT_COLS, DEFAULT_ROWS};

/// Game configuration, loadable from TOML. The defaults reproduce the
/// reference game: a 9x10 board, a human playing Cross against the
/// lookahead AI playing Circle.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    pub cross: ControllerKind,
    pub circle: ControllerKind,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cross: ControllerKind::Human,
            circle: ControllerKind::Lookahead,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if
    /// the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows < 3 {
            return Err(ConfigError::Validation("rows must be >= 3".into()));
        }
        if self.cols < 3 {
            return Err(ConfigError::Validation("cols must be >= 3".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for
    /// creating an example config file).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = GameConfig::default();
        config.validate().expect("default config should be valid");
        assert_eq!(config.rows, 9);
        assert_eq!(config.cols, 10);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let toml_str = r#"
rows = 6
circle = "greedy"
"#;
        let config: GameConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.rows, 6);
        assert_eq!(config.cols, 10);
        assert_eq!(config.cross, ControllerKind::Human);
        assert_eq!(config.circle, ControllerKind::Greedy);
    }

    #[test]
    fn test_empty_toml_uses_all_defaults() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.rows, GameConfig::default().rows);
        assert_eq!(config.circle, ControllerKind::Lookahead);
    }

    #[test]
    fn test_validation_rejects_small_board() {
        let mut config = GameConfig::default();
        config.rows = 2;
        assert!(config.validate().is_err());

        let mut config = GameConfig::default();
        config.cols = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let config = GameConfig::load_or_default(Path::new("nonexistent_game.toml")).unwrap();
        assert_eq!(config.rows, 9);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(
            f,
            r#"
rows = 4
cols = 5
cross = "random"
"#
        )
        .unwrap();

        let config = GameConfig::load(&path).unwrap();
        assert_eq!(config.rows, 4);
        assert_eq!(config.cols, 5);
        assert_eq!(config.cross, ControllerKind::Random);
        assert_eq!(config.circle, ControllerKind::Lookahead);
    }

    #[test]
    fn test_load_rejects_invalid_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "rows = 1\n").unwrap();

        assert!(matches!(
            GameConfig::load(&path),
            Err(ConfigError::Validation(_))
        ));
    }

    #[test]
    fn test_default_toml_roundtrips() {
        let toml_str = GameConfig::default_toml();
        let config: GameConfig = toml::from_str(&toml_str).unwrap();
        config.validate().expect("roundtripped config should be valid");
    }
}
