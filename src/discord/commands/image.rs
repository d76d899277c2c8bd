use super::arguments::rest_or_empty;
use crate::discord::replies::send_reply;
use crate::discord::{Context, Error};

/// Generate an image according to prompt provided
///
/// Example: !image Mango
#[poise::command(prefix_command, aliases("img"))]
pub async fn image(ctx: Context<'_>, #[rest] prompt: Option<String>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    let service = ctx
        .data()
        .images
        .as_ref()
        .ok_or("image command is registered without an image service")?;

    // Generation takes a while, show the typing indicator meanwhile.
    let _ = ctx.defer_or_broadcast().await;

    let reply = service.image_reply(rest_or_empty(&prompt)).await;
    send_reply(ctx, reply).await
}
