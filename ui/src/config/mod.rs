// Application configuration, deserialized from the embedded default JSON.
// Hosts can also parse a user-supplied document through `from_json`.

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub version: String,
    pub app: AppSettings,
    pub toast: ToastSettings,
    pub export: ExportSettings,
    pub shortcuts: Shortcuts,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AppSettings {
    pub theme: String, // "dark" or "light"
    pub language: String,
    pub auto_save: bool,
    /// Auto-save interval in seconds.
    pub auto_save_interval: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ToastSettings {
    pub duration_ms: u64,
    pub max_visible: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportSettings {
    /// Directory the file download sink writes into.
    pub directory: String,
    /// chrono format string for dated export filenames.
    pub filename_date_format: String,
}

/// Shortcut bindings as "Ctrl+S"-style strings; parsed by the shortcut
/// registry at startup.
#[derive(Debug, Deserialize, Clone)]
pub struct Shortcuts {
    pub save_form: String,
    pub export_csv: String,
    pub search: String,
    pub close_dialog: String,
}

impl AppConfig {
    /// Loads the defaults embedded in the binary.
    pub fn load_default() -> Result<Self, anyhow::Error> {
        let config_str = include_str!("../../assets/config/default.json");
        let config: AppConfig = serde_json::from_str(config_str)?;
        Ok(config)
    }

    pub fn from_json(json: &str) -> Result<Self, anyhow::Error> {
        let config: AppConfig = serde_json::from_str(json)?;
        Ok(config)
    }
}
