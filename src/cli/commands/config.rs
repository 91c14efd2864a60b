use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
    } = cmd
    {
        let path = Config::config_file();

        //
        // 1) PRINT
        //
        if *print_config {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                println!("# {}\n", path.display());
                println!("{}", content);
            } else {
                warning(format!(
                    "No config file at {} — using defaults.",
                    path.display()
                ));
                println!("{}", serde_yaml::to_string(cfg).expect("serializable config"));
            }
        }

        //
        // 2) CHECK
        //
        if *check {
            if !path.exists() {
                warning("No config file found. Run `schedseed init` to create one.");
                return Ok(());
            }

            let content = fs::read_to_string(&path)?;
            let parsed: Config = serde_yaml::from_str(&content)
                .map_err(|e| AppError::Config(format!("Invalid config file: {}", e)))?;

            if parsed.database.trim().is_empty() {
                return Err(AppError::Config("database path is empty".into()));
            }
            if parsed.schedules_per_student == 0 {
                warning("schedules_per_student is 0 — seed runs will generate nothing.");
            }

            success("Configuration file is valid.");
        }
    }

    Ok(())
}
