use crate::error::{FarmGptError, Result};
use crate::i18n::Language;
use dialoguer::{Input, Select};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

const DEFAULT_BACKEND_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub farm: FarmConfig,
    pub location: Option<LocationConfig>,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FarmConfig {
    /// Name shown on community posts; a stock farmer name is used when unset
    pub farmer_name: Option<String>,
    /// Starting language until one is chosen in the app
    #[serde(default)]
    pub language: Language,
}

/// Device position. The terminal has no positioning hardware, so it is configured.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    pub latitude: f64,
    pub longitude: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BackendConfig {
    #[serde(default = "default_backend_url")]
    pub url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: default_backend_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load(config_override: Option<PathBuf>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => p,
            None => Self::find_config_path()?,
        };

        if !config_path.exists() {
            return Err(FarmGptError::Config(format!(
                "Config file not found at {:?}. Run `farmgpt init` to set up.",
                config_path
            )));
        }

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| FarmGptError::Config(format!("Failed to read config: {}", e)))?;

        Self::parse(&config_str)
    }

    /// Parse YAML after `${VAR}` substitution and validate it.
    pub fn parse(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content);

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| FarmGptError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(loc) = &self.location {
            if !(-90.0..=90.0).contains(&loc.latitude) {
                return Err(FarmGptError::Config(format!(
                    "latitude {} is out of range",
                    loc.latitude
                )));
            }
            if !(-180.0..=180.0).contains(&loc.longitude) {
                return Err(FarmGptError::Config(format!(
                    "longitude {} is out of range",
                    loc.longitude
                )));
            }
        }
        if self.backend.url.trim().is_empty() {
            return Err(FarmGptError::Config("backend.url must not be empty".into()));
        }
        Ok(())
    }

    /// Search for config.yaml in standard locations.
    /// Returns the path of the first found config, or the XDG default path if none found.
    fn find_config_path() -> Result<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Ok(local_config);
        }

        let default_path = Self::default_config_path()?;
        Ok(default_path)
    }

    /// Returns true if a config file can be found in any standard location.
    pub fn exists(config_override: Option<&PathBuf>) -> bool {
        match config_override {
            Some(p) => p.exists(),
            None => Self::find_config_path()
                .map(|p| p.exists())
                .unwrap_or(false),
        }
    }

    /// Default path for writing new config files (~/.config/farmgpt/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| FarmGptError::Config("Cannot determine config directory".into()))?
            .join("farmgpt");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the loaded Config and the path it was written to.
    pub fn setup_interactive() -> Result<(Self, PathBuf)> {
        println!();
        println!("No configuration found. Let's set up FarmGPT!");
        println!();

        println!("Farmer");
        let farmer_name: String = Input::new()
            .with_prompt("  Your name (blank for none)")
            .default(String::new())
            .allow_empty(true)
            .interact_text()
            .map_err(input_error)?;

        let languages: Vec<String> = Language::all()
            .iter()
            .map(|l| l.native_name().to_string())
            .collect();
        let choice = Select::new()
            .with_prompt("  Language")
            .items(&languages)
            .default(0)
            .interact()
            .map_err(input_error)?;
        let language = Language::all()
            .get(choice)
            .copied()
            .unwrap_or_default();

        println!();

        println!("Farm location");
        let latitude: f64 = Input::new()
            .with_prompt("  Latitude")
            .default(26.85)
            .interact_text()
            .map_err(input_error)?;

        let longitude: f64 = Input::new()
            .with_prompt("  Longitude")
            .default(80.95)
            .interact_text()
            .map_err(input_error)?;

        println!();

        println!("Weather backend");
        let backend_url: String = Input::new()
            .with_prompt("  URL")
            .default(DEFAULT_BACKEND_URL.into())
            .interact_text()
            .map_err(input_error)?;

        println!();

        let config = Config {
            farm: FarmConfig {
                farmer_name: Some(farmer_name.trim().to_string()).filter(|n| !n.is_empty()),
                language,
            },
            location: Some(LocationConfig {
                latitude,
                longitude,
            }),
            backend: BackendConfig {
                url: backend_url,
                ..BackendConfig::default()
            },
        };
        config.validate()?;

        let config_path = Self::default_config_path()?;
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(&config)
            .map_err(|e| FarmGptError::Config(format!("Failed to serialize config: {}", e)))?;

        let content = format!(
            "# FarmGPT Configuration\n# Generated by `farmgpt init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(&config_path, content)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    fn substitute_env_vars(content: &str) -> String {
        let Ok(re) = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}") else {
            return content.to_string();
        };

        let mut result = content.to_string();
        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        result
    }

    pub fn data_dir(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        // CLI override takes priority
        if let Some(dir) = data_dir_override {
            std::fs::create_dir_all(dir)?;
            return Ok(dir.clone());
        }

        if let Ok(dir) = std::env::var("FARMGPT_DATA_DIR") {
            let p = PathBuf::from(dir);
            std::fs::create_dir_all(&p)?;
            return Ok(p);
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| FarmGptError::Config("Cannot determine data directory".into()))?
            .join("farmgpt");

        std::fs::create_dir_all(&data_dir)?;
        Ok(data_dir)
    }

    pub fn db_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("farmgpt.db"))
    }

    pub fn log_path(data_dir_override: Option<&PathBuf>) -> Result<PathBuf> {
        Ok(Self::data_dir(data_dir_override)?.join("farmgpt.log"))
    }
}

fn input_error(e: dialoguer::Error) -> FarmGptError {
    FarmGptError::Config(format!("Input error: {}", e))
}
