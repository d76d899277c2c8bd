// Discord layer - commands, reply rendering and the bot lifecycle.
//
// Everything that touches poise or serenity lives under here. Commands pull
// primitive values out of the invocation, hand them to the core and send
// back whatever `Reply` the core produced.

#[path = "commands/command_catalog.rs"]
pub mod commands;

pub mod bot_app;
pub mod channel_queue;
pub mod error_handler;
pub mod replies;

use crate::core::imaging::ImageService;
use crate::core::weather::WeatherService;
use crate::infra::imaging::OpenAiImageClient;
use crate::infra::weather::WeatherApiClient;
use channel_queue::ChannelQueue;
use std::sync::Arc;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Shared state handed to every command.
///
/// Lookup services are only present when their command is enabled.
pub struct Data {
    pub weather: Option<Arc<WeatherService<WeatherApiClient>>>,
    pub images: Option<Arc<ImageService<OpenAiImageClient>>>,
    pub activity: String,
    /// Keeps replies in arrival order within each channel.
    pub channels: ChannelQueue,
}
