use super::arguments::rest_or_empty;
use crate::discord::replies::send_reply;
use crate::discord::{Context, Error};

/// Get the current weather condition for a city
///
/// Example: !weather London
#[poise::command(prefix_command)]
pub async fn weather(ctx: Context<'_>, #[rest] city: Option<String>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    let service = ctx
        .data()
        .weather
        .as_ref()
        .ok_or("weather command is registered without a weather service")?;

    let reply = service.weather_reply(rest_or_empty(&city)).await;
    send_reply(ctx, reply).await
}
