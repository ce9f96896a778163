//! Configuration file loader with multi-source merging

use super::file_config::{ConfigError, FileConfig};
use figment::{
    Figment,
    providers::{Format, Serialized, Toml},
};
use std::path::PathBuf;

/// Configuration loader that handles file discovery and merging
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from all sources with proper priority
    ///
    /// Priority (highest to lowest):
    /// 1. Explicit config path (if provided)
    /// 2. Project root: `./consilium.toml` or `./.consilium.toml`
    /// 3. XDG config: `$XDG_CONFIG_HOME/consilium/config.toml`
    /// 4. Default values (the two-specialist reference deployment)
    pub fn load(config_path: Option<&PathBuf>) -> Result<FileConfig, ConfigError> {
        let mut figment = Figment::new().merge(Serialized::defaults(FileConfig::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(&global_path));
        }

        if let Some(path) = Self::project_config_path() {
            figment = figment.merge(Toml::file(&path));
        }

        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        figment.extract().map_err(Box::new).map_err(ConfigError::Load)
    }

    /// Load only default configuration (for --no-config)
    pub fn load_defaults() -> FileConfig {
        FileConfig::default()
    }

    /// Get the global config file path
    pub fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("consilium").join("config.toml"))
    }

    /// Get the project-level config file path (if it exists)
    pub fn project_config_path() -> Option<PathBuf> {
        for filename in &["consilium.toml", ".consilium.toml"] {
            let path = PathBuf::from(filename);
            if path.exists() {
                return Some(path);
            }
        }
        None
    }

    /// Print the config file locations being used (for debugging)
    pub fn print_config_sources() {
        println!("Configuration sources (in priority order):");

        if let Some(path) = Self::project_config_path() {
            println!("  [FOUND] Project: {}", path.display());
        } else {
            println!("  [     ] Project: ./consilium.toml or ./.consilium.toml");
        }

        if let Some(path) = Self::global_config_path() {
            if path.exists() {
                println!("  [FOUND] Global:  {}", path.display());
            } else {
                println!("  [     ] Global:  {}", path.display());
            }
        }

        println!("  [     ] Default: built-in defaults");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_defaults() {
        let config = ConfigLoader::load_defaults();
        assert_eq!(config.specialists.len(), 2);
        assert_eq!(config.consultation.max_question_chars, 4096);
    }

    #[test]
    fn test_global_config_path_returns_some() {
        // Should return a path (even if the file doesn't exist)
        let path = ConfigLoader::global_config_path();
        assert!(path.is_some());
        assert!(path.unwrap().to_string_lossy().contains("consilium"));
    }

    #[test]
    fn test_explicit_path_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("override.toml");
        std::fs::write(
            &path,
            r#"
[consultation]
max_question_chars = 64

[[specialists]]
name = "kidney"
endpoint = "http://localhost:8005"
"#,
        )
        .unwrap();

        let config = ConfigLoader::load(Some(&path)).unwrap();
        assert_eq!(config.consultation.max_question_chars, 64);
        assert_eq!(config.specialists.len(), 1);
        assert_eq!(config.specialists[0].name, "kidney");
    }
}
