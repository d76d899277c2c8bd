pub mod bot_config;

pub use bot_config::{BotConfig, CommandKind};
