use clap::ValueEnum;
use serde::Deserialize;
use std::path::Path;

/// How `encode` interprets its input.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum InputFormat {
    /// A non-negative decimal integer of any size
    #[default]
    Decimal,
    /// Big-endian hex digits
    Hex,
    /// The raw bytes of the input text
    Text,
}

/// How `decode` renders its result.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Decimal,
    Hex,
    /// Minimal big-endian bytes written as-is
    Raw,
}

/// Integer type targeted by decimal decoding.
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum DecodeWidth {
    I32,
    I64,
    /// Arbitrary precision
    #[default]
    Big,
}

/// Global settings. Unset fields fall back to the defaults.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    #[serde(default)]
    pub input: Option<InputFormat>,
    #[serde(default)]
    pub output: Option<OutputFormat>,
    #[serde(default)]
    pub width: Option<DecodeWidth>,
}

impl Settings {
    pub fn input(&self) -> InputFormat {
        self.input.unwrap_or_default()
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or_default()
    }

    pub fn width(&self) -> DecodeWidth {
        self.width.unwrap_or_default()
    }

    /// Fields set in `other` win.
    pub fn merge(&mut self, other: Settings) {
        if other.input.is_some() {
            self.input = other.input;
        }
        if other.output.is_some() {
            self.output = other.output;
        }
        if other.width.is_some() {
            self.width = other.width;
        }
    }
}

/// Configuration loaded from TOML files.
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct Opb58Config {
    #[serde(default)]
    pub settings: Settings,
}

impl Opb58Config {
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    pub fn load_default() -> Result<Self, Box<dyn std::error::Error>> {
        let content = include_str!("../../opb58.toml");
        Ok(Self::from_toml(content)?)
    }

    /// Load configuration from custom file path
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_toml(&content)?)
    }

    /// Load configuration with user overrides from standard locations
    /// 1. Start with built-in settings
    /// 2. Override with ~/.config/opb58/config.toml if it exists
    /// 3. Override with ./opb58.toml if it exists in current directory
    /// 4. Override with `explicit`, which must exist if given
    pub fn load_with_overrides(explicit: Option<&Path>) -> Result<Self, Box<dyn std::error::Error>> {
        let mut config = Self::load_default()?;

        if let Some(config_dir) = dirs::config_dir() {
            let user_config_path = config_dir.join("opb58").join("config.toml");
            config.merge_optional(&user_config_path);
        }

        config.merge_optional(Path::new("opb58.toml"));

        if let Some(path) = explicit {
            let explicit_config = Self::load_from_file(path)
                .map_err(|e| format!("Failed to load config from {:?}: {}", path, e))?;
            tracing::debug!(?path, "loaded config");
            config.merge(explicit_config);
        }

        Ok(config)
    }

    fn merge_optional(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }
        match Self::load_from_file(path) {
            Ok(other) => {
                tracing::debug!(?path, "loaded config");
                self.merge(other);
            }
            Err(e) => {
                tracing::warn!(?path, error = %e, "failed to load config, ignoring");
            }
        }
    }

    /// Merge another config into this one, overriding set fields
    pub fn merge(&mut self, other: Opb58Config) {
        self.settings.merge(other.settings);
    }
}
