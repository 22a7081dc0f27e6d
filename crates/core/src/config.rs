//! Generation constants as a validated, TOML-loadable configuration value.

use std::error::Error;
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use toml::de;

use crate::types::NodeType;

/// Relative odds of each randomly assigned room type.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypeWeights {
    pub enemy: f32,
    pub wenny: f32,
    pub shelter: f32,
}

impl Default for TypeWeights {
    fn default() -> Self {
        Self { enemy: 10.0, wenny: 2.5, shelter: 4.0 }
    }
}

impl TypeWeights {
    pub fn weight_of(&self, node_type: NodeType) -> f32 {
        match node_type {
            NodeType::Enemy => self.enemy,
            NodeType::Wenny => self.wenny,
            NodeType::Shelter => self.shelter,
            _ => 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    /// Number of floors, boss row included.
    pub height: usize,
    pub width: usize,
    pub paths: usize,
    pub x_dist: f32,
    pub y_dist: f32,
    pub placement_randomness: f32,
    pub max_connections: usize,
    /// Floor that always becomes a shelter when something passes through it.
    pub rest_floor: usize,
    /// First floor on which a shelter may be rolled.
    pub shelter_min_row: usize,
    pub weights: TypeWeights,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            height: 15,
            width: 7,
            paths: 6,
            x_dist: 30.0,
            y_dist: 25.0,
            placement_randomness: 30.0,
            max_connections: 3,
            rest_floor: 8,
            shelter_min_row: 3,
            weights: TypeWeights::default(),
        }
    }
}

impl MapConfig {
    pub fn node_count(&self) -> usize {
        self.height * self.width
    }

    pub fn boss_row(&self) -> usize {
        self.height - 1
    }

    pub fn boss_column(&self) -> usize {
        self.width / 2
    }

    /// Rows whose active nodes are always shelters.
    pub fn is_fixed_shelter_row(&self, row: usize) -> bool {
        row == self.rest_floor || row + 2 == self.height
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < 2 {
            return Err(ConfigError::TooNarrow { width: self.width });
        }
        if self.height < 3 {
            return Err(ConfigError::TooShort { height: self.height });
        }
        if self.paths < 2 {
            return Err(ConfigError::TooFewPaths { paths: self.paths });
        }
        if self.max_connections < 3 {
            return Err(ConfigError::ConnectionCapacity { max_connections: self.max_connections });
        }
        for (name, value) in [
            ("x_dist", self.x_dist),
            ("y_dist", self.y_dist),
            ("placement_randomness", self.placement_randomness),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidDistance { name, value });
            }
        }
        for (name, value) in [
            ("enemy", self.weights.enemy),
            ("wenny", self.weights.wenny),
            ("shelter", self.weights.shelter),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight { name, value });
            }
        }
        // Enemy is the fallback when every other type is excluded.
        if self.weights.enemy <= 0.0 {
            return Err(ConfigError::InvalidWeight { name: "enemy", value: self.weights.enemy });
        }
        if self.rest_floor + 3 == self.height {
            return Err(ConfigError::RestFloorBeforeFinalShelter { rest_floor: self.rest_floor });
        }
        Ok(())
    }

    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
        Self::from_toml_str(&content)
    }
}

#[derive(Debug)]
pub enum ConfigError {
    /// Starting columns need at least two distinct values.
    TooNarrow { width: usize },
    /// Needs a boss row, a converging row and one content row.
    TooShort { height: usize },
    TooFewPaths { paths: usize },
    /// Edges may reach three distinct columns, so fewer slots would drop targets.
    ConnectionCapacity { max_connections: usize },
    InvalidDistance { name: &'static str, value: f32 },
    InvalidWeight { name: &'static str, value: f32 },
    /// Two fixed shelter rows back to back would break the shelter adjacency rule.
    RestFloorBeforeFinalShelter { rest_floor: usize },
    Io(io::Error),
    Parse(de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TooNarrow { width } => {
                write!(f, "map width {width} is too narrow, at least 2 columns are required")
            }
            Self::TooShort { height } => {
                write!(f, "map height {height} is too short, at least 3 floors are required")
            }
            Self::TooFewPaths { paths } => {
                write!(f, "path count {paths} is too small, at least 2 paths are required")
            }
            Self::ConnectionCapacity { max_connections } => {
                write!(f, "max_connections {max_connections} must be at least 3")
            }
            Self::InvalidDistance { name, value } => {
                write!(f, "{name} must be a finite non-negative number, got {value}")
            }
            Self::InvalidWeight { name, value } => {
                write!(f, "weight for {name} is invalid: {value}")
            }
            Self::RestFloorBeforeFinalShelter { rest_floor } => {
                write!(f, "rest floor {rest_floor} sits directly before the final shelter row")
            }
            Self::Io(e) => write!(f, "config I/O error: {e}"),
            Self::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = MapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.node_count(), 105);
        assert_eq!((config.boss_row(), config.boss_column()), (14, 3));
    }

    #[test]
    fn single_column_is_rejected_instead_of_hanging() {
        let config = MapConfig { width: 1, ..MapConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::TooNarrow { width: 1 })));
    }

    #[test]
    fn two_floor_map_is_rejected() {
        let config = MapConfig { height: 2, ..MapConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::TooShort { height: 2 })));
    }

    #[test]
    fn rest_floor_next_to_final_shelter_row_is_rejected() {
        let config = MapConfig { height: 11, ..MapConfig::default() };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::RestFloorBeforeFinalShelter { rest_floor: 8 })
        ));
    }

    #[test]
    fn negative_weight_is_rejected() {
        let config = MapConfig {
            weights: TypeWeights { wenny: -1.0, ..TypeWeights::default() },
            ..MapConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidWeight { name: "wenny", .. })));
    }

    #[test]
    fn fixed_shelter_rows_cover_rest_floor_and_penultimate_row() {
        let config = MapConfig::default();
        let rows: Vec<usize> =
            (0..config.height).filter(|&row| config.is_fixed_shelter_row(row)).collect();
        assert_eq!(rows, vec![8, 13]);
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config = MapConfig::from_toml_str(
            r#"
            width = 5
            paths = 4

            [weights]
            wenny = 0.0
            "#,
        )
        .expect("partial config should parse");

        assert_eq!(config.width, 5);
        assert_eq!(config.paths, 4);
        assert_eq!(config.height, 15);
        assert_eq!(config.weights, TypeWeights { enemy: 10.0, wenny: 0.0, shelter: 4.0 });
    }

    #[test]
    fn toml_with_invalid_values_fails_validation() {
        let err = MapConfig::from_toml_str("width = 1").expect_err("width 1 must be rejected");
        assert!(err.to_string().contains("too narrow"), "unexpected message: {err}");
    }

    #[test]
    fn malformed_toml_reports_parse_error() {
        let err = MapConfig::from_toml_str("width = \"wide\"").expect_err("type mismatch");
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
