// Turns core `Reply` values into poise/serenity builders and sends them.

use crate::core::replies::{EmbedReply, Reply};
use crate::discord::{Context, Error};
use poise::serenity_prelude as serenity;

pub fn build_embed(embed: &EmbedReply) -> serenity::CreateEmbed {
    let mut builder = serenity::CreateEmbed::new()
        .title(&embed.title)
        .description(&embed.description)
        .color(embed.color);

    if let Some(url) = &embed.thumbnail {
        builder = builder.thumbnail(url);
    }
    if let Some(url) = &embed.image {
        builder = builder.image(url);
    }

    for (name, value) in &embed.fields {
        builder = builder.field(name, value, embed.inline_fields);
    }

    builder
}

pub fn build_reply(reply: &Reply) -> poise::CreateReply {
    match reply {
        Reply::Text(content) => poise::CreateReply::default().content(content),
        Reply::Embed(embed) => poise::CreateReply::default().embed(build_embed(embed)),
    }
}

pub async fn send_reply(ctx: Context<'_>, reply: Reply) -> Result<(), Error> {
    ctx.send(build_reply(&reply)).await?;
    Ok(())
}
