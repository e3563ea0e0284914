use crate::console_warn;
use std::sync::OnceLock;

/// Editor settings. There is no environment configuration; everything is a
/// compiled default.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    /// Largest image accepted by the welcome-screen photo upload
    pub max_photo_bytes: u64,
    /// Value of the file input's `accept` attribute
    pub accepted_photo_types: String,
    /// Whether the "Add Field" picker is expanded on startup
    pub picker_starts_open: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorConfig {
    pub fn new() -> Self {
        Self {
            max_photo_bytes: 64 * 1024 * 1024, // 64MB, only guards against runaway reads
            accepted_photo_types: "image/*".to_string(),
            picker_starts_open: false,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.max_photo_bytes == 0 {
            return Err("max_photo_bytes must be greater than 0".to_string());
        }

        if !self.accepted_photo_types.starts_with("image/") {
            return Err(format!(
                "accepted_photo_types must be an image type, got {}",
                self.accepted_photo_types
            ));
        }

        Ok(())
    }
}

static GLOBAL_CONFIG: OnceLock<EditorConfig> = OnceLock::new();

/// Get the global configuration, initialized with defaults
pub fn get_global_config() -> EditorConfig {
    GLOBAL_CONFIG
        .get_or_init(|| {
            let config = EditorConfig::new();
            if let Err(e) = config.validate() {
                console_warn!("Invalid configuration: {}", e);
                EditorConfig::default()
            } else {
                config
            }
        })
        .clone()
}
