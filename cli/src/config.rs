use common::config::{ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "tictactoe_ai_config.yaml";
const MAX_TRIALS: u32 = 1000;

pub fn default_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager(
    path: &str,
) -> ConfigManager<FileContentConfigProvider, AppConfig, YamlConfigSerializer> {
    ConfigManager::from_yaml_file(path)
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct BenchmarkConfig {
    pub trials: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self { trials: 5 }
    }
}

impl Validate for BenchmarkConfig {
    fn validate(&self) -> Result<(), String> {
        if self.trials == 0 || self.trials > MAX_TRIALS {
            return Err(format!(
                "Benchmark trials must be between 1 and {}, got {}",
                MAX_TRIALS, self.trials
            ));
        }
        Ok(())
    }
}

impl BenchmarkConfig {
    /// Applies a command-line trial count on top of the configured one,
    /// under the same bounds as the config file.
    pub fn with_override(&self, trials: Option<u32>) -> Result<BenchmarkConfig, String> {
        let config = BenchmarkConfig {
            trials: trials.unwrap_or(self.trials),
        };
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize, Clone)]
pub struct AppConfig {
    #[serde(default)]
    pub benchmark: BenchmarkConfig,
    #[serde(default)]
    pub log_prefix: bool,
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        self.benchmark.validate()
    }
}
