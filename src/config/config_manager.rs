use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;
use crate::config::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};
use crate::errors::{ViaError, ViaResult};
use crate::structs::config::config::Config;

pub const SAMPLE_CONFIG: &str = r#"# VIA Screen Configuration

[gateway]
# Image-classification endpoint. The image is POSTed as raw bytes.
model_url = "https://api-inference.huggingface.co/models/KhanyiTapiwa00/medsiglip-diagnosis"

# Upper bound for one classification call, in seconds
timeout_secs = 30

# Environment variables checked for the bearer token, first non-empty wins
api_key_env = ["HF_TOKEN", "VITE_HF_TOKEN", "API_KEY"]

# Keyword table used to derive the suspicion level from a model label.
# Matching is case-insensitive substring; High is checked first, then Medium, then Low.
[rules]
high = ["positive", "cancer", "high grade", "cin2", "cin3", "hsil", "abnormal"]
medium = ["suspicious", "low grade", "cin1", "lsil"]
low = ["negative", "normal", "benign"]

# Treat an ungraded "cin" mention as High (checked after all lists above)
bare_cin_is_high = false

[assistant]
model = "gemini-2.5-flash"
base_url = "https://generativelanguage.googleapis.com/v1beta"
api_key_env = "API_KEY"
"#;

pub struct ConfigManager;

impl ConfigManager {
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|d| d.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// An explicit path must exist; the default location falls back to defaults.
    pub fn load(path: Option<&Path>) -> ViaResult<Config> {
        if let Some(path) = path {
            if !path.exists() {
                return Err(ViaError::config_file_error(&path.display().to_string(), "file does not exist"));
            }
            return Self::load_from(path);
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => Self::load_from(&default_path),
            _ => {
                log::debug!("No configuration file found, using defaults");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> ViaResult<Config> {
        log::info!("📋 Loading config from: {}", path.display());
        let content = fs::read_to_string(path)
            .map_err(|e| ViaError::config_file_error(&path.display().to_string(), &e.to_string()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn create_sample_config(path: Option<&Path>) -> ViaResult<PathBuf> {
        let config_file_path = match path {
            Some(path) => path.to_path_buf(),
            None => Self::default_path().ok_or_else(|| {
                ViaError::config_error("could not determine home directory", None, Some("pass --config <PATH>"))
            })?,
        };

        if config_file_path.exists() {
            return Err(ViaError::config_error(
                "configuration file already exists",
                Some(&config_file_path.display().to_string()),
                Some("edit the existing file or remove it first"),
            ));
        }

        if let Some(parent) = config_file_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ViaError::file_error(&parent.display().to_string(), "create directory", &e.to_string()))?;
        }

        fs::write(&config_file_path, SAMPLE_CONFIG)
            .map_err(|e| ViaError::file_error(&config_file_path.display().to_string(), "write", &e.to_string()))?;

        log::info!("✅ Created sample config at: {}", config_file_path.display());
        Ok(config_file_path)
    }

    pub fn validate_config(config: &Config) -> Result<(), Vec<ViaError>> {
        let mut errors = Vec::new();

        Self::validate_url("gateway.model_url", &config.gateway.model_url, &mut errors);
        Self::validate_url("assistant.base_url", &config.assistant.base_url, &mut errors);

        if config.gateway.timeout_secs == 0 {
            errors.push(ViaError::validation_error(
                "gateway.timeout_secs",
                "0",
                "must be greater than zero",
                Some("30 seconds is a sensible default"),
            ));
        }

        if config.gateway.api_key_env.iter().all(|name| name.trim().is_empty()) {
            errors.push(ViaError::validation_error(
                "gateway.api_key_env",
                "[]",
                "must name at least one environment variable",
                Some("use [\"HF_TOKEN\"]"),
            ));
        }

        if config.assistant.model.trim().is_empty() {
            errors.push(ViaError::validation_error("assistant.model", "", "must not be empty", None));
        }

        let buckets = [
            ("rules.high", &config.rules.high),
            ("rules.medium", &config.rules.medium),
            ("rules.low", &config.rules.low),
        ];

        let mut seen: HashMap<String, &str> = HashMap::new();
        for (field, keywords) in buckets {
            if keywords.iter().all(|k| k.trim().is_empty()) {
                errors.push(ViaError::validation_error(field, "[]", "must contain at least one keyword", None));
            }

            for keyword in keywords.iter().map(|k| k.trim().to_lowercase()).filter(|k| !k.is_empty()) {
                if let Some(previous) = seen.get(&keyword) {
                    if *previous != field {
                        errors.push(ViaError::validation_error(
                            field,
                            &keyword,
                            &format!("keyword already listed in {}", previous),
                            Some("each keyword may belong to one bucket only"),
                        ));
                    }
                    continue;
                }
                seen.insert(keyword, field);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    fn validate_url(field: &str, value: &str, errors: &mut Vec<ViaError>) {
        match Url::parse(value) {
            Ok(url) if url.scheme() == "https" || url.scheme() == "http" => {}
            Ok(url) => errors.push(ViaError::validation_error(
                field,
                value,
                &format!("unsupported scheme '{}'", url.scheme()),
                Some("use an https:// URL"),
            )),
            Err(e) => errors.push(ViaError::validation_error(field, value, &e.to_string(), None)),
        }
    }
}
