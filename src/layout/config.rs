//! Configuration for scenes

use serde::Deserialize;

use super::side::EdgeInsets;

/// Configuration of the root view of a [`Scene`](super::Scene)
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the root view
    pub width: f64,

    /// Height of the root view
    pub height: f64,

    /// Safe-area insets of the root view (status bar, home indicator, ...)
    pub safe_area: EdgeInsets,

    /// Name given to the root view
    pub root_name: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 390.0,
            height: 844.0,
            safe_area: EdgeInsets::ZERO,
            root_name: "root".to_string(),
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the root view size
    pub fn with_canvas(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set the root view's safe-area insets
    pub fn with_safe_area(mut self, insets: EdgeInsets) -> Self {
        self.safe_area = insets;
        self
    }

    /// Set the root view's name
    pub fn with_root_name(mut self, name: impl Into<String>) -> Self {
        self.root_name = name.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.width, 390.0);
        assert_eq!(config.height, 844.0);
        assert_eq!(config.safe_area, EdgeInsets::ZERO);
        assert_eq!(config.root_name, "root");
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_canvas(320.0, 480.0)
            .with_safe_area(EdgeInsets::new(20.0, 0.0, 0.0, 0.0))
            .with_root_name("window");

        assert_eq!((config.width, config.height), (320.0, 480.0));
        assert_eq!(config.safe_area.top, 20.0);
        assert_eq!(config.root_name, "window");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: LayoutConfig = toml::from_str("width = 320.0\nsafe_area = { top = 47.0 }").unwrap();
        assert_eq!(config.width, 320.0);
        assert_eq!(config.height, 844.0);
        assert_eq!(config.safe_area.top, 47.0);
    }
}
