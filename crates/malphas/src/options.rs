//! Export configuration.

use serde::{Deserialize, Serialize};

use crate::convert::Optimize;

/// Default identifier for the emitted array.
pub const DEFAULT_MODEL_NAME: &str = "model_data";

/// Options controlling conversion and emission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// Optimization policy for the converter.
    pub optimize: Optimize,

    /// Identifier for the emitted array; the size constant is named
    /// `<model_name>_size`. Must be a valid C identifier — the caller's
    /// responsibility, not validated here.
    pub model_name: String,

    /// Emit the grouped multi-line hex layout instead of a single line.
    pub pretty_print: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            optimize: Optimize::default(),
            model_name: DEFAULT_MODEL_NAME.to_string(),
            pretty_print: false,
        }
    }
}

impl ExportOptions {
    /// Create options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the optimization policy.
    pub fn with_optimize(mut self, optimize: Optimize) -> Self {
        self.optimize = optimize;
        self
    }

    /// Set the emitted identifier name.
    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Enable or disable the grouped hex layout.
    pub fn with_pretty_print(mut self, pretty_print: bool) -> Self {
        self.pretty_print = pretty_print;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.optimize, Optimize::Enabled);
        assert_eq!(options.model_name, "model_data");
        assert!(!options.pretty_print);
    }

    #[test]
    fn test_builder_methods() {
        let options = ExportOptions::new()
            .with_optimize(Optimize::Disabled)
            .with_model_name("gesture_net")
            .with_pretty_print(true);
        assert_eq!(options.optimize, Optimize::Disabled);
        assert_eq!(options.model_name, "gesture_net");
        assert!(options.pretty_print);
    }
}
