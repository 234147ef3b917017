use crate::error::{CropWiseError, Result};
use crate::logic::DEFAULT_TOP_N;
use crate::models::{FieldProfile, SoilType, UNKNOWN_SOIL};
use dialoguer::Input;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub field: FieldConfig,
    #[serde(default)]
    pub advisor: AdvisorConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct FieldConfig {
    pub name: String,
    #[serde(default = "default_soil_type")]
    pub soil_type: String,
}

fn default_soil_type() -> String {
    UNKNOWN_SOIL.to_string()
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            name: "Main Field".into(),
            soil_type: default_soil_type(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AdvisorConfig {
    #[serde(default = "default_top_n")]
    pub top_n: usize,
    #[serde(default)]
    pub output: OutputFormat,
}

fn default_top_n() -> usize {
    DEFAULT_TOP_N
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            top_n: default_top_n(),
            output: OutputFormat::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Config {
    /// Load config from an explicit path, or search the standard locations.
    /// Without an explicit path and with no file found, defaults apply.
    pub fn load(config_override: Option<&Path>) -> Result<Self> {
        let config_path = match config_override {
            Some(p) => {
                if !p.exists() {
                    return Err(CropWiseError::Config(format!(
                        "Config file not found at {:?}",
                        p
                    )));
                }
                p.to_path_buf()
            }
            None => match Self::find_config_path() {
                Some(p) => p,
                None => {
                    tracing::debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        tracing::debug!("Loading config from {}", config_path.display());

        let config_str = std::fs::read_to_string(&config_path)
            .map_err(|e| CropWiseError::Config(format!("Failed to read config: {}", e)))?;

        Self::from_yaml_str(&config_str)
    }

    /// Parse YAML after `${VAR}` substitution, then validate.
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let content = Self::substitute_env_vars(content)?;

        let config: Config = serde_yaml::from_str(&content)
            .map_err(|e| CropWiseError::Config(format!("Failed to parse config: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.advisor.top_n == 0 {
            return Err(CropWiseError::Config(
                "advisor.top_n must be at least 1".into(),
            ));
        }
        if self.field.name.trim().is_empty() {
            return Err(CropWiseError::Config("field.name must not be empty".into()));
        }
        Ok(())
    }

    pub fn field_profile(&self) -> FieldProfile {
        FieldProfile::new(self.field.name.clone(), self.field.soil_type.clone())
    }

    /// First existing config.yaml in `./config/` or the XDG config directory.
    fn find_config_path() -> Option<PathBuf> {
        let local_config = PathBuf::from("config/config.yaml");
        if local_config.exists() {
            return Some(local_config);
        }

        dirs::config_dir()
            .map(|dir| dir.join("cropwise").join("config.yaml"))
            .filter(|p| p.exists())
    }

    /// Default path for writing new config files (~/.config/cropwise/config.yaml).
    pub fn default_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CropWiseError::Config("Cannot determine config directory".into()))?
            .join("cropwise");
        Ok(config_dir.join("config.yaml"))
    }

    /// Run interactive setup prompts and write config to disk.
    /// Returns the new Config and the path it was written to.
    pub fn setup_interactive(target: Option<&Path>) -> Result<(Self, PathBuf)> {
        println!();
        println!("Let's set up CropWise!");
        println!();

        println!("Field Profile");
        let name: String = Input::new()
            .with_prompt("  Field name")
            .default("Main Field".into())
            .interact_text()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        let known: Vec<&str> = SoilType::ALL.iter().map(|s| s.as_str()).collect();
        let soil_type: String = Input::new()
            .with_prompt(format!("  Soil type ({}, or Unknown)", known.join(", ")))
            .default(UNKNOWN_SOIL.into())
            .interact_text()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        if soil_type != UNKNOWN_SOIL && SoilType::from_str(&soil_type).is_none() {
            println!(
                "  Note: '{}' matches no crop in the knowledge base and will earn no soil points.",
                soil_type
            );
        }

        println!();

        println!("Advisor");
        let top_n: usize = Input::new()
            .with_prompt("  Crops to recommend")
            .default(DEFAULT_TOP_N)
            .validate_with(|n: &usize| {
                if *n >= 1 {
                    Ok(())
                } else {
                    Err("must be at least 1")
                }
            })
            .interact_text()
            .map_err(|e| CropWiseError::Config(format!("Input error: {}", e)))?;

        println!();

        let config = Config {
            field: FieldConfig { name, soil_type },
            advisor: AdvisorConfig {
                top_n,
                output: OutputFormat::Text,
            },
        };

        let config_path = match target {
            Some(p) => p.to_path_buf(),
            None => Self::default_config_path()?,
        };
        config.write_to(&config_path)?;

        println!("Configuration saved to {}", config_path.display());
        println!();

        Ok((config, config_path))
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let yaml = serde_yaml::to_string(self)?;

        let content = format!(
            "# CropWise Configuration\n# Generated by `cropwise init`\n# Environment variable substitution (${{VAR}}) is supported.\n\n{}",
            yaml
        );
        std::fs::write(path, content)?;
        Ok(())
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        let mut result = content.to_string();

        let re = regex_lite::Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| CropWiseError::Config(format!("Invalid substitution pattern: {}", e)))?;

        for cap in re.captures_iter(content) {
            let var_name = &cap[1];
            let placeholder = &cap[0];
            if let Ok(value) = std::env::var(var_name) {
                result = result.replace(placeholder, &value);
            }
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_config() {
        let config = Config::from_yaml_str(
            "field:\n  name: North Paddy\n  soil_type: Clay\nadvisor:\n  top_n: 5\n  output: json\n",
        )
        .unwrap();
        assert_eq!(config.field.name, "North Paddy");
        assert_eq!(config.field.soil_type, "Clay");
        assert_eq!(config.advisor.top_n, 5);
        assert_eq!(config.advisor.output, OutputFormat::Json);
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config = Config::from_yaml_str("field:\n  name: Orchard\n").unwrap();
        assert_eq!(config.field.soil_type, "Unknown");
        assert_eq!(config.advisor.top_n, 3);
        assert_eq!(config.advisor.output, OutputFormat::Text);
    }

    #[test]
    fn rejects_zero_top_n() {
        let err = Config::from_yaml_str("advisor:\n  top_n: 0\n").unwrap_err();
        assert!(err.to_string().contains("top_n"));
    }

    #[test]
    fn rejects_malformed_yaml() {
        let err = Config::from_yaml_str("field: [unterminated").unwrap_err();
        assert!(matches!(err, CropWiseError::Config(_)));
    }

    #[test]
    fn substitutes_environment_variables() {
        std::env::set_var("CROPWISE_TEST_SOIL", "Peaty");
        let config = Config::from_yaml_str(
            "field:\n  name: Fen\n  soil_type: ${CROPWISE_TEST_SOIL}\n",
        )
        .unwrap();
        assert_eq!(config.field.soil_type, "Peaty");
    }

    #[test]
    fn unset_variables_are_left_in_place() {
        let out = Config::substitute_env_vars("soil: ${CROPWISE_TEST_NEVER_SET}").unwrap();
        assert_eq!(out, "soil: ${CROPWISE_TEST_NEVER_SET}");
    }

    #[test]
    fn explicit_missing_path_is_an_error() {
        let err = Config::load(Some(Path::new("/nonexistent/cropwise.yaml"))).unwrap_err();
        assert!(matches!(err, CropWiseError::Config(_)));
    }

    #[test]
    fn write_then_load() {
        let path = std::env::temp_dir()
            .join(format!("cropwise-test-{}", std::process::id()))
            .join("config.yaml");
        let config = Config {
            field: FieldConfig {
                name: "Test Plot".into(),
                soil_type: "Sandy".into(),
            },
            advisor: AdvisorConfig {
                top_n: 4,
                output: OutputFormat::Json,
            },
        };

        config.write_to(&path).unwrap();
        let loaded = Config::load(Some(&path)).unwrap();
        assert_eq!(loaded, config);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn field_profile_from_config() {
        let field = Config::default().field_profile();
        assert_eq!(field, FieldProfile::default());
    }
}
