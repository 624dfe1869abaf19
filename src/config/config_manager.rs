use std::fs;
use std::path::{Path, PathBuf};
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, MAX_TEMPERATURE};
use crate::errors::{LinkscanError, LinkscanResult, ResultExt};
use crate::structs::config::ai_config::AiConfig;
use crate::structs::config::config::Config;

const SAMPLE_CONFIG: &str = r#"# Linkscan Configuration

[ai]
# Only "gemini" is supported
provider = "gemini"
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"

# Low temperature keeps verdicts stable across repeated scans
temperature = 0.1

# Environment variable holding the API key
api_key_env = "API_KEY"

# Requests per minute sent to the model
rate_limit_per_minute = 10

[scan]
# Give up on the model after this many seconds (0 waits forever)
timeout_secs = 30

# Minimum time before a result is shown
min_display_ms = 2000
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    pub fn load() -> LinkscanResult<Config> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> LinkscanResult<Config> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path).with_operation("reading config file")?;
        toml::from_str(&content)
            .map_err(|e| LinkscanError::config_file_error(&path.display().to_string(), e.message()))
    }

    pub fn create_sample_config() -> LinkscanResult<PathBuf> {
        let path = Self::config_path();
        Self::create_sample_config_at(&path)?;
        Ok(path)
    }

    pub fn create_sample_config_at(path: &Path) -> LinkscanResult<()> {
        if path.exists() {
            return Err(LinkscanError::config_file_error(
                &path.display().to_string(),
                "file already exists, remove it first to regenerate",
            ));
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_operation("creating config directory")?;
        }
        fs::write(path, SAMPLE_CONFIG).with_operation("writing config file")?;
        log::info!("✅ Created sample config at: {}", path.display());
        Ok(())
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<LinkscanError>> {
        let mut errors = Vec::new();
        let ai = &config.ai;

        if ai.provider != "gemini" {
            errors.push(LinkscanError::validation_error(
                "ai.provider",
                &ai.provider,
                "must be \"gemini\"",
                None,
            ));
        }

        if ai.model.trim().is_empty() {
            errors.push(LinkscanError::validation_error("ai.model", &ai.model, "must not be empty", Some("use \"gemini-2.5-flash\"")));
        }

        if !ai.base_url.starts_with("http://") && !ai.base_url.starts_with("https://") {
            errors.push(LinkscanError::validation_error("ai.base_url", &ai.base_url, "must be an http(s) URL", None));
        }

        if !(0.0..=MAX_TEMPERATURE).contains(&ai.temperature) {
            errors.push(LinkscanError::validation_error(
                "ai.temperature",
                &ai.temperature.to_string(),
                "must be between 0.0 and 2.0",
                Some("keep it low (0.1) for repeatable verdicts"),
            ));
        }

        if ai.rate_limit_per_minute == 0 {
            errors.push(LinkscanError::validation_error("ai.rate_limit_per_minute", "0", "must be greater than zero", None));
        }

        if ai.api_key_env.trim().is_empty() {
            errors.push(LinkscanError::validation_error("ai.api_key_env", &ai.api_key_env, "must name an environment variable", None));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Reads the API key named by `ai.api_key_env`. Called before any scan so a
    /// missing key surfaces as a configuration error, not as a failed scan.
    pub fn resolve_api_key(ai: &AiConfig) -> LinkscanResult<String> {
        match std::env::var(&ai.api_key_env) {
            Ok(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(LinkscanError::config_error(
                &format!("API key environment variable {} is not set", ai.api_key_env),
                Some("ai.api_key_env"),
                Some(&format!("export {}=<your Gemini API key>", ai.api_key_env)),
            )),
        }
    }
}
