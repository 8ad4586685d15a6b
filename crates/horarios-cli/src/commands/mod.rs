pub mod config;
pub mod inspect;
pub mod label;
pub mod list;

use std::path::Path;

use horarios_core::HorariosConfig;

/// Load the configuration from `--config`, the user config file, or defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<HorariosConfig> {
    if let Some(path) = config_path {
        return Ok(HorariosConfig::from_file(Path::new(path))?);
    }

    let default_path = config::default_config_path();
    if default_path.exists() {
        Ok(HorariosConfig::from_file(&default_path)?)
    } else {
        Ok(HorariosConfig::default())
    }
}

/// Status line shown when a category document cannot be loaded.
pub fn load_failure_message(category: horarios_core::Category) -> String {
    format!(
        "Could not load the {} document. Check the file path and try again.",
        category
    )
}
