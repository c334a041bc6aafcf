//! Evo Services Layer
//!
//! Platform-facing services for the viewer. Currently just settings.

pub mod settings;

pub use settings::{Settings, SettingsError};

use std::path::PathBuf;

/// Environment variable naming a settings file.
pub const SETTINGS_ENV: &str = "EVO_SETTINGS";

/// Resolve and load settings.
///
/// An explicit path wins over [`SETTINGS_ENV`]; with neither, defaults are used.
pub fn init_services(explicit_path: Option<PathBuf>) -> Result<Settings, SettingsError> {
    let path = explicit_path.or_else(|| std::env::var_os(SETTINGS_ENV).map(PathBuf::from));

    let settings = match path {
        Some(path) => {
            tracing::info!("Loading settings from {}", path.display());
            Settings::load(&path)?
        }
        None => {
            tracing::info!("No settings file given, using defaults");
            Settings::default()
        }
    };

    settings.validate()?;
    Ok(settings)
}
