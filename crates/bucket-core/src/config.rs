//! App Configuration
//!
//! Every field has a default, so a partial (or empty) JSON document is
//! enough to build a complete config.

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// Home screen image grid geometry, in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
    pub image_size: f64,
    pub gap: f64,
    /// Upward shift of the grid to leave room for the bottom buttons
    pub vertical_offset: f64,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            rows: 3,
            columns: 3,
            image_size: 80.0,
            gap: 10.0,
            vertical_offset: 30.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub grid: GridConfig,
    /// Hold time before the "-" button forces remove mode
    pub long_press_ms: u32,
    /// Start the bucket list with example goals
    pub seed_examples: bool,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid: GridConfig::default(),
            long_press_ms: 2000,
            seed_examples: true,
            log_level: LevelFilter::Info,
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> DomainResult<Self> {
        let config: AppConfig =
            serde_json::from_str(raw).map_err(|e| DomainError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DomainResult<()> {
        if self.grid.rows == 0 || self.grid.columns == 0 {
            return Err(DomainError::Config("grid needs at least one row and column".to_string()));
        }
        if self.grid.image_size <= 0.0 || self.grid.gap < 0.0 {
            return Err(DomainError::Config("grid sizes must be positive".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document_gives_defaults() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_document_keeps_other_defaults() {
        let config = AppConfig::from_json(
            r#"{ "grid": { "columns": 4 }, "seed_examples": false, "log_level": "debug" }"#,
        )
        .unwrap();
        assert_eq!(config.grid.columns, 4);
        assert_eq!(config.grid.rows, 3);
        assert_eq!(config.grid.image_size, 80.0);
        assert!(!config.seed_examples);
        assert_eq!(config.long_press_ms, 2000);
        assert_eq!(config.log_level, LevelFilter::Debug);
    }

    #[test]
    fn test_malformed_document() {
        assert!(matches!(AppConfig::from_json("not json"), Err(DomainError::Config(_))));
    }

    #[test]
    fn test_invalid_grid_rejected() {
        let err = AppConfig::from_json(r#"{ "grid": { "rows": 0 } }"#).unwrap_err();
        assert!(err.to_string().starts_with("Config error:"));
    }
}
