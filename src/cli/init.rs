use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::presets::PRESET_DEFAULT;
use raiz::config::CONFIG_FILE;

pub fn run_init(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{CONFIG_FILE} already exists. Use --force to overwrite the existing configuration."
        );
    }

    fs::write(config_path, PRESET_DEFAULT)
        .with_context(|| format!("Failed to write configuration to {}", config_path.display()))?;

    println!("{CONFIG_FILE} created at {}", config_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use raiz::RaizConfig;

    use super::PRESET_DEFAULT;

    #[test]
    fn test_preset_parses_with_dev_profile() {
        let config: RaizConfig = toml::from_str(PRESET_DEFAULT).unwrap();
        assert_eq!(config.cpf.strictness, raiz::Strictness::Strict);
        let dev = config.with_profile("dev");
        assert_eq!(dev.cpf.strictness, raiz::Strictness::LengthOnly);
    }
}
