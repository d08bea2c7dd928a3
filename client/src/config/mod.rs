mod config;
mod game_config;
mod log_config;

pub use config::{Config, get_config_manager};
pub use game_config::{FirstPlayer, GameConfig};
pub use log_config::LogConfig;
