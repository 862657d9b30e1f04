mod game_mode;
pub use game_mode::GameMode;

mod game_mode_config;
pub use game_mode_config::GameModeConfig;
