use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::domain::{Strictness, CPF_LEN};
use crate::engine::FormRules;
use crate::error::{RaizError, Result};
use crate::output::RedactionConfig;

pub const CONFIG_FILE: &str = "raiz.toml";

#[derive(Debug, Clone, Deserialize, Default)]
pub struct RaizConfig {
    #[serde(default)]
    pub cpf: CpfConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub profiles: HashMap<String, ProfileOverrides>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct CpfConfig {
    #[serde(default)]
    pub strictness: Strictness,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub redact: bool,
    #[serde(default = "default_visible_digits")]
    pub redact_visible_digits: usize,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProfileOverrides {
    #[serde(default)]
    pub cpf: Option<PartialCpfConfig>,
    #[serde(default)]
    pub output: Option<PartialOutputConfig>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialCpfConfig {
    pub strictness: Option<Strictness>,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PartialOutputConfig {
    pub color: Option<bool>,
    pub redact: Option<bool>,
    pub redact_visible_digits: Option<usize>,
}

fn default_true() -> bool {
    true
}

fn default_visible_digits() -> usize {
    2
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: default_true(),
            redact: false,
            redact_visible_digits: default_visible_digits(),
        }
    }
}

impl RaizConfig {
    /// Load `raiz.toml` from the working directory, or defaults when absent.
    ///
    /// # Errors
    /// Fails when the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        let config_path = Path::new(CONFIG_FILE);
        if !config_path.exists() {
            return Ok(Self::default());
        }
        Self::load_from(config_path)
    }

    /// # Errors
    /// Fails on I/O errors, malformed TOML, or out-of-range values.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(config_path)?;
        let config: RaizConfig =
            toml::from_str(&content).map_err(|e| RaizError::Toml(e.to_string()))?;
        config.check_ranges()?;
        tracing::debug!(path = %config_path.display(), "configuration loaded");
        Ok(config)
    }

    fn check_ranges(&self) -> Result<()> {
        let visible = std::iter::once(self.output.redact_visible_digits).chain(
            self.profiles
                .values()
                .filter_map(|p| p.output.as_ref()?.redact_visible_digits),
        );
        for v in visible {
            if v >= CPF_LEN {
                return Err(RaizError::Config(format!(
                    "redact_visible_digits must be below {CPF_LEN}, got {v}"
                )));
            }
        }
        Ok(())
    }

    /// Apply the overrides of `profile_name`. Unknown profiles change nothing.
    #[must_use]
    pub fn with_profile(mut self, profile_name: &str) -> Self {
        let Some(overrides) = self.profiles.get(profile_name).cloned() else {
            tracing::warn!(profile = profile_name, "unknown configuration profile");
            return self;
        };
        if let Some(cpf) = overrides.cpf {
            if let Some(v) = cpf.strictness {
                self.cpf.strictness = v;
            }
        }
        if let Some(output) = overrides.output {
            if let Some(v) = output.color {
                self.output.color = v;
            }
            if let Some(v) = output.redact {
                self.output.redact = v;
            }
            if let Some(v) = output.redact_visible_digits {
                self.output.redact_visible_digits = v;
            }
        }
        self
    }

    #[must_use]
    pub fn form_rules(&self) -> FormRules {
        FormRules {
            strictness: self.cpf.strictness,
        }
    }

    #[must_use]
    pub fn redaction(&self) -> RedactionConfig {
        RedactionConfig {
            enabled: self.output.redact,
            visible_digits: self.output.redact_visible_digits,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, std::path::PathBuf) {
        let temp = tempfile::TempDir::new().unwrap();
        let config_path = temp.path().join(CONFIG_FILE);
        std::fs::write(&config_path, contents).unwrap();
        (temp, config_path)
    }

    #[test]
    fn test_default_config() {
        let config = RaizConfig::default();
        assert_eq!(config.cpf.strictness, Strictness::Strict);
        assert!(config.output.color);
        assert!(!config.output.redact);
        assert_eq!(config.form_rules(), FormRules::default());
    }

    #[test]
    fn test_load_from_valid_toml() {
        let (_temp, path) = write_config(
            r#"
[cpf]
strictness = "strict"

[output]
color = false

[profiles.dev.cpf]
strictness = "length_only"
"#,
        );
        let config = RaizConfig::load_from(&path).unwrap();
        assert!(!config.output.color);
        assert_eq!(config.cpf.strictness, Strictness::Strict);
        assert!(config.profiles.contains_key("dev"));
    }

    #[test]
    fn test_load_from_fails_on_unknown_strictness() {
        let (_temp, path) = write_config("[cpf]\nstrictness = \"lenient\"\n");
        let result = RaizConfig::load_from(&path);
        assert!(matches!(result, Err(RaizError::Toml(_))));
    }

    #[test]
    fn test_load_from_fails_on_visible_digits_out_of_range() {
        let (_temp, path) = write_config("[profiles.ci.output]\nredact_visible_digits = 11\n");
        let result = RaizConfig::load_from(&path);
        assert!(matches!(result, Err(RaizError::Config(_))));
    }

    #[test]
    fn test_load_from_missing_file_is_io_error() {
        let temp = tempfile::TempDir::new().unwrap();
        let result = RaizConfig::load_from(&temp.path().join("absent.toml"));
        assert!(matches!(result, Err(RaizError::Io(_))));
    }

    #[test]
    fn test_with_profile_applies_overrides() {
        let mut config = RaizConfig::default();
        config.profiles.insert(
            "dev".to_string(),
            ProfileOverrides {
                cpf: Some(PartialCpfConfig {
                    strictness: Some(Strictness::LengthOnly),
                }),
                output: Some(PartialOutputConfig {
                    color: Some(false),
                    redact: Some(true),
                    redact_visible_digits: Some(4),
                }),
            },
        );
        config = config.with_profile("dev");
        assert_eq!(config.form_rules().strictness, Strictness::LengthOnly);
        assert!(!config.output.color);
        let redaction = config.redaction();
        assert!(redaction.enabled);
        assert_eq!(redaction.visible_digits, 4);
    }

    #[test]
    fn test_with_profile_unknown_no_change() {
        let config = RaizConfig::default();
        let after = config.clone().with_profile("nonexistent");
        assert_eq!(after.cpf.strictness, config.cpf.strictness);
        assert_eq!(after.output.color, config.output.color);
    }
}
