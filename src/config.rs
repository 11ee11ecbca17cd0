// Tue Jan 13 2026 - Alex

use crate::types::{PointerWidth, DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub pointer_width: u32,
    pub max_depth: usize,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pointer_width: PointerWidth::host().bytes(),
            max_depth: DEFAULT_MAX_DEPTH,
            use_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pointer_width(mut self, pointer_width: u32) -> Self {
        self.pointer_width = pointer_width;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {}", path.display(), e))?;
        let config: Config = serde_json::from_str(&text)
            .map_err(|e| format!("Failed to parse config {}: {}", path.display(), e))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        PointerWidth::try_from(self.pointer_width).map_err(|e| e.to_string())?;
        if self.max_depth == 0 || self.max_depth > MAX_DEPTH_LIMIT {
            return Err(format!("max_depth must be between 1 and {}, got {}", MAX_DEPTH_LIMIT, self.max_depth));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.max_depth, 100);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(Config::new().with_pointer_width(2).validate().is_err());
        assert!(Config::new().with_pointer_width(0).validate().is_err());
        assert!(Config::new().with_max_depth(0).validate().is_err());
        assert!(Config::new().with_max_depth(MAX_DEPTH_LIMIT + 1).validate().is_err());
        assert!(Config::new().with_pointer_width(4).with_max_depth(10).validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{ "pointer_width": 4 }"#).unwrap();
        assert_eq!(config.pointer_width, 4);
        assert_eq!(config.max_depth, DEFAULT_MAX_DEPTH);
        assert!(config.use_color);
    }
}
