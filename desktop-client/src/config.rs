use serde::{Deserialize, Serialize};
use tictactoe_engine::config::{
    ConfigManager, FileContentConfigProvider, Validate, YamlConfigSerializer,
};
use tictactoe_engine::game::FirstPlayerMode;

const CONFIG_FILE_NAME: &str = "tictactoe_config.yaml";

fn get_config_path() -> String {
    if let Ok(exe_path) = std::env::current_exe()
        && let Some(exe_dir) = exe_path.parent()
    {
        return exe_dir.join(CONFIG_FILE_NAME).to_string_lossy().into_owned();
    }
    CONFIG_FILE_NAME.to_string()
}

pub fn get_config_manager() -> ConfigManager<FileContentConfigProvider, Config, YamlConfigSerializer>
{
    ConfigManager::from_yaml_file(&get_config_path())
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct Config {
    pub game: GameConfig,
    pub ui: UiConfig,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct GameConfig {
    pub first_player: FirstPlayerMode,
    pub random_opening: bool,
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
pub struct UiConfig {
    pub computer_delay_ms: u64,
    pub blink_interval_ms: u64,
}

impl Validate for Config {
    fn validate(&self) -> Result<(), String> {
        self.ui.validate()?;
        Ok(())
    }
}

impl Validate for UiConfig {
    fn validate(&self) -> Result<(), String> {
        if self.blink_interval_ms == 0 || self.blink_interval_ms > 10_000 {
            return Err("blink_interval_ms must be between 1 and 10000".to_string());
        }
        if self.computer_delay_ms > 10_000 {
            return Err("computer_delay_ms must not exceed 10000".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            game: GameConfig {
                first_player: FirstPlayerMode::Random,
                random_opening: true,
            },
            ui: UiConfig {
                computer_delay_ms: 500,
                blink_interval_ms: 700,
            },
        }
    }
}
