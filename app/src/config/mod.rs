//! Configuration: defaults, validation, loading from environment + CLI overrides.

pub mod app_config;
pub mod validation;

pub use app_config::AppConfig;
pub use validation::validate_setting;

/// Environment key for the bounding box width.
pub const KEY_MAX_WIDTH: &str = "PANEL_MAX_WIDTH";
/// Environment key for the bounding box height.
pub const KEY_MAX_HEIGHT: &str = "PANEL_MAX_HEIGHT";
/// Environment key for the black/white threshold.
pub const KEY_THRESHOLD: &str = "MONO_THRESHOLD";
