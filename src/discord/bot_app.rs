// The bot application object.
//
// `BotApp::new` wires services from an explicit `BotConfig`; `BotApp::run`
// owns the gateway connection for its whole lifetime and returns once the
// client stops (Ctrl-C or a fatal gateway error).

use crate::core::config::BotConfig;
use crate::core::imaging::{ImageError, ImageService};
use crate::core::weather::{WeatherError, WeatherService};
use crate::discord::commands::{self, presence};
use crate::discord::channel_queue::ChannelQueue;
use crate::discord::{error_handler, Data};
use crate::infra::imaging::OpenAiImageClient;
use crate::infra::weather::WeatherApiClient;
use ::serenity::gateway::GatewayError;
use poise::serenity_prelude as serenity;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum BotError {
    #[error("Failed to build weather client: {0}")]
    Weather(#[from] WeatherError),
    #[error("Failed to build image client: {0}")]
    Image(#[from] ImageError),
    #[error("Login failure - {0}")]
    LoginFailure(::serenity::Error),
    #[error("Unexpected exception - {0}")]
    Client(::serenity::Error),
}

impl From<::serenity::Error> for BotError {
    fn from(error: ::serenity::Error) -> Self {
        if matches!(
            error,
            ::serenity::Error::Gateway(GatewayError::InvalidAuthentication)
        ) {
            BotError::LoginFailure(error)
        } else {
            BotError::Client(error)
        }
    }
}

pub struct BotApp {
    config: BotConfig,
    data: Data,
}

impl BotApp {
    pub fn new(config: BotConfig) -> Result<Self, BotError> {
        let weather = match &config.weather {
            Some(api) => {
                let client = WeatherApiClient::new(
                    api.api_key.clone(),
                    api.base_url.clone(),
                    config.http_timeout,
                )?;
                Some(Arc::new(WeatherService::new(client)))
            }
            None => None,
        };

        let images = match &config.image {
            Some(image) => {
                let client = OpenAiImageClient::new(
                    image.api.api_key.clone(),
                    image.api.base_url.clone(),
                    image.model.clone(),
                    config.http_timeout,
                )?;
                Some(Arc::new(ImageService::new(client)))
            }
            None => None,
        };

        let data = Data {
            weather,
            images,
            activity: config.activity.clone(),
            channels: ChannelQueue::default(),
        };

        Ok(Self { config, data })
    }

    pub fn commands(&self) -> Vec<commands::Command> {
        commands::registered_commands(&self.config.commands)
    }

    /// Connects to the gateway and serves commands until shutdown.
    pub async fn run(self) -> Result<(), BotError> {
        let commands = self.commands();
        let BotApp { config, data } = self;

        tracing::info!(
            prefix = %config.prefix,
            commands = ?commands.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            "Starting bot"
        );

        let intents = serenity::GatewayIntents::GUILD_MESSAGES
            | serenity::GatewayIntents::DIRECT_MESSAGES
            | serenity::GatewayIntents::MESSAGE_CONTENT; // Required to read prefix commands

        let framework = poise::Framework::builder()
            .options(poise::FrameworkOptions {
                commands,
                prefix_options: poise::PrefixFrameworkOptions {
                    prefix: Some(config.prefix.clone()),
                    ..Default::default()
                },
                on_error: |error| Box::pin(error_handler::on_error(error)),
                pre_command: |ctx| {
                    Box::pin(async move {
                        tracing::info!(
                            command = %ctx.command().qualified_name,
                            author = %ctx.author().name,
                            channel_id = ctx.channel_id().get(),
                            "Running command"
                        );
                    })
                },
                ..Default::default()
            })
            .setup(move |ctx, ready, _framework| {
                Box::pin(async move {
                    presence::on_ready(ctx, ready, &data.activity);
                    Ok(data)
                })
            })
            .build();

        let mut client = serenity::ClientBuilder::new(&config.discord_token, intents)
            .framework(framework)
            .await?;

        let shard_manager = client.shard_manager.clone();
        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    tracing::info!("Shutdown requested, closing gateway connections");
                    shard_manager.shutdown_all().await;
                }
                Err(e) => tracing::warn!("Could not listen for Ctrl-C: {}", e),
            }
        });

        client.start().await?;

        tracing::info!("Bot stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::CommandKind;
    use std::collections::HashMap;

    fn config(pairs: &[(&str, &str)]) -> BotConfig {
        let env: HashMap<&str, &str> = pairs.iter().copied().collect();
        BotConfig::from_lookup(|key| env.get(key).map(|v| v.to_string())).unwrap()
    }

    #[test]
    fn test_full_app_wires_lookup_services() {
        let app = BotApp::new(config(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("WEATHER_KEY", "weather"),
            ("OPENAI_KEY", "openai"),
        ]))
        .unwrap();

        assert!(app.data.weather.is_some());
        assert!(app.data.images.is_some());
        assert_eq!(app.data.activity, "Going through Infinity");
        assert_eq!(app.commands().len(), CommandKind::ALL.len());
    }

    #[test]
    fn test_variant_without_lookups() {
        let app = BotApp::new(config(&[
            ("DISCORD_BOT_TOKEN", "token"),
            ("BOT_COMMANDS", "hello,add,roll,choose,repeat"),
        ]))
        .unwrap();

        assert!(app.data.weather.is_none());
        assert!(app.data.images.is_none());
        let names: Vec<String> = app.commands().into_iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["hello", "add", "roll", "choose", "repeat"]);
    }

    #[test]
    fn test_invalid_authentication_is_login_failure() {
        let error = ::serenity::Error::Gateway(GatewayError::InvalidAuthentication);
        assert!(matches!(BotError::from(error), BotError::LoginFailure(_)));

        let error = ::serenity::Error::Other("boom");
        assert!(matches!(BotError::from(error), BotError::Client(_)));
    }
}
