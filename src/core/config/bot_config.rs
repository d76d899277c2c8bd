// Bot configuration, read once at startup.
//
// Values come from the process environment (a `.env` file is loaded first by
// `main`). Parsing goes through a lookup function so the rules can be tested
// without touching the real environment.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_PREFIX: &str = "!";
pub const DEFAULT_ACTIVITY: &str = "Going through Infinity";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_WEATHER_API_URL: &str = "https://api.weatherapi.com";
pub const DEFAULT_OPENAI_API_URL: &str = "https://api.openai.com";

/// Every command the bot knows how to register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandKind {
    Hello,
    Add,
    Roll,
    Choose,
    Repeat,
    Image,
    Weather,
    Help,
}

impl CommandKind {
    pub const ALL: [CommandKind; 8] = [
        CommandKind::Hello,
        CommandKind::Add,
        CommandKind::Roll,
        CommandKind::Choose,
        CommandKind::Repeat,
        CommandKind::Image,
        CommandKind::Weather,
        CommandKind::Help,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommandKind::Hello => "hello",
            CommandKind::Add => "add",
            CommandKind::Roll => "roll",
            CommandKind::Choose => "choose",
            CommandKind::Repeat => "repeat",
            CommandKind::Image => "image",
            CommandKind::Weather => "weather",
            CommandKind::Help => "help",
        }
    }
}

impl FromStr for CommandKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        CommandKind::ALL
            .into_iter()
            .find(|kind| kind.name() == wanted)
            .ok_or_else(|| ConfigError::UnknownCommand(s.trim().to_string()))
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing {0} environment variable!")]
    Missing(&'static str),
    #[error("Unknown command '{0}' in BOT_COMMANDS")]
    UnknownCommand(String),
    #[error("Invalid value '{value}' for {key}")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Clone)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

#[derive(Clone)]
pub struct ImageApiConfig {
    pub api: ApiConfig,
    /// Sent as `model` when set; the endpoint picks its default otherwise.
    pub model: Option<String>,
}

#[derive(Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub prefix: String,
    pub activity: String,
    pub commands: Vec<CommandKind>,
    pub http_timeout: Duration,
    /// Present only when the `weather` command is enabled.
    pub weather: Option<ApiConfig>,
    /// Present only when the `image` command is enabled.
    pub image: Option<ImageApiConfig>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let discord_token =
            get("DISCORD_BOT_TOKEN").ok_or(ConfigError::Missing("DISCORD_BOT_TOKEN"))?;

        let commands = match get("BOT_COMMANDS") {
            Some(list) => parse_command_list(&list)?,
            None => CommandKind::ALL.to_vec(),
        };

        let http_timeout = match get("HTTP_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw
                    .trim()
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or(ConfigError::InvalidValue {
                        key: "HTTP_TIMEOUT_SECS",
                        value: raw.clone(),
                    })?;
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_HTTP_TIMEOUT_SECS),
        };

        let weather = if commands.contains(&CommandKind::Weather) {
            Some(ApiConfig {
                api_key: get("WEATHER_KEY").ok_or(ConfigError::Missing("WEATHER_KEY"))?,
                base_url: base_url(get("WEATHER_API_URL"), DEFAULT_WEATHER_API_URL),
            })
        } else {
            None
        };

        let image = if commands.contains(&CommandKind::Image) {
            Some(ImageApiConfig {
                api: ApiConfig {
                    api_key: get("OPENAI_KEY").ok_or(ConfigError::Missing("OPENAI_KEY"))?,
                    base_url: base_url(get("OPENAI_API_URL"), DEFAULT_OPENAI_API_URL),
                },
                model: get("OPENAI_IMAGE_MODEL"),
            })
        } else {
            None
        };

        Ok(Self {
            discord_token,
            prefix: get("BOT_PREFIX").unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            activity: get("BOT_ACTIVITY").unwrap_or_else(|| DEFAULT_ACTIVITY.to_string()),
            commands,
            http_timeout,
            weather,
            image,
        })
    }
}

fn parse_command_list(list: &str) -> Result<Vec<CommandKind>, ConfigError> {
    let mut commands = Vec::new();
    for name in list.split(',').filter(|n| !n.trim().is_empty()) {
        let kind: CommandKind = name.parse()?;
        if !commands.contains(&kind) {
            commands.push(kind);
        }
    }
    if commands.is_empty() {
        return Err(ConfigError::InvalidValue {
            key: "BOT_COMMANDS",
            value: list.to_string(),
        });
    }
    Ok(commands)
}

fn base_url(value: Option<String>, default: &str) -> String {
    value
        .unwrap_or_else(|| default.to_string())
        .trim_end_matches('/')
        .to_string()
}

// Secrets stay out of logs and panic messages.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl fmt::Debug for ImageApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImageApiConfig")
            .field("api", &self.api)
            .field("model", &self.model)
            .finish()
    }
}

impl fmt::Debug for BotConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BotConfig")
            .field("discord_token", &"<redacted>")
            .field("prefix", &self.prefix)
            .field("activity", &self.activity)
            .field("commands", &self.commands)
            .field("http_timeout", &self.http_timeout)
            .field("weather", &self.weather)
            .field("image", &self.image)
            .finish()
    }
}
