// Small utility commands: hello, add, roll, choose, repeat.
//
// Each command only translates the invocation into core calls and sends the
// result. Randomness comes from the thread-local RNG and is dropped before
// the reply is sent.

use super::arguments::{rest_or_empty, unquote};
use crate::core::fun;
use crate::discord::replies::send_reply;
use crate::discord::{Context, Error};

/// The bot will respond with the message 'Hi there!'
///
/// Example: !hello
#[poise::command(prefix_command)]
pub async fn hello(ctx: Context<'_>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    send_reply(ctx, fun::hello_reply()).await
}

/// Adds given numbers in N N format.
///
/// Example: !add 1 2 3
#[poise::command(prefix_command)]
pub async fn add(ctx: Context<'_>, numbers: Vec<String>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    send_reply(ctx, fun::add_reply(&numbers)).await
}

/// Rolls a dice in N N format.
///
/// Example: !roll 2 6 (or !roll 2d6)
#[poise::command(prefix_command)]
pub async fn roll(ctx: Context<'_>, #[rest] dice: Option<String>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    let reply = fun::roll_reply(rest_or_empty(&dice), &mut rand::thread_rng());
    send_reply(ctx, reply).await
}

/// Chooses between multiple choices.
///
/// Example: !choose option1 option2
#[poise::command(prefix_command)]
pub async fn choose(ctx: Context<'_>, choices: Vec<String>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    let reply = fun::choose_reply(&choices, &mut rand::thread_rng());
    send_reply(ctx, reply).await
}

/// Repeats a message multiple times.
///
/// Example: !repeat 3 this is a repeating message
#[poise::command(prefix_command)]
pub async fn repeat(
    ctx: Context<'_>,
    times: i64,
    #[rest] content: Option<String>,
) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    let plan = match fun::repeat_plan(times, content.as_deref().map(unquote)) {
        Ok(plan) => plan,
        Err(e) => {
            ctx.say(e.to_string()).await?;
            return Ok(());
        }
    };

    for message in plan.messages() {
        ctx.say(message).await?;
    }

    Ok(())
}
