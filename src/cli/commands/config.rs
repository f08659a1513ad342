use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

/// Inspect the configuration file.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config, check } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("{}", content);
            } else {
                warning(format!("No config file at {:?}; using defaults.", path));
                let yaml = serde_yaml::to_string(cfg)
                    .map_err(|e| AppError::Config(e.to_string()))?;
                println!("{}", yaml);
            }
            return Ok(());
        }

        if *check {
            let path = Config::config_file();
            if !path.exists() {
                warning("No config file found. Run `habitrack init` to create one.");
                return Ok(());
            }
            let content = fs::read_to_string(&path)?;
            match serde_yaml::from_str::<Config>(&content) {
                Ok(_) => success("Configuration file is valid."),
                Err(e) => return Err(AppError::Config(e.to_string())),
            }
        }
    }
    Ok(())
}
