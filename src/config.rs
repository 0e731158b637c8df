use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::SketchResult;
use crate::form::FormState;
use crate::tools::Tool;

/// Startup settings, read from an optional JSON file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)] // missing keys fall back to the defaults below
pub struct SketchConfig {
    /// Width and height of the drawing canvas
    pub canvas_size: [f32; 2],
    /// Tool active when the app starts
    pub initial_tool: Tool,
    /// Initial contents of the sidebar form
    pub form: FormState,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            canvas_size: [800.0, 600.0],
            initial_tool: Tool::Select,
            form: FormState::default(),
        }
    }
}

impl SketchConfig {
    pub fn from_json(json: &str) -> SketchResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> SketchResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Load `path` if given, falling back to defaults on any error
    pub fn load_or_default(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            return Self::default();
        };
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded config from {}", path.display());
                config
            }
            Err(err) => {
                log::warn!("Using default config, {}: {}", path.display(), err);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let config = SketchConfig::from_json(
            r##"{ "initial_tool": "rect", "form": { "color": "#ff0000", "stSize": "3" } }"##,
        )
        .unwrap();

        assert_eq!(config.initial_tool, Tool::Rect);
        assert_eq!(config.canvas_size, [800.0, 600.0]);
        assert_eq!(config.form.color, "#ff0000");
        assert_eq!(config.form.st_size, "3");
        assert_eq!(config.form.width, "100");
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(SketchConfig::from_json("{ not json").is_err());
        assert!(SketchConfig::from_json(r#"{ "initial_tool": "eraser" }"#).is_err());
    }

    #[test]
    fn missing_file_falls_back() {
        let config = SketchConfig::load_or_default(Some(Path::new("/nonexistent/sketch.json")));
        assert_eq!(config, SketchConfig::default());
    }
}
