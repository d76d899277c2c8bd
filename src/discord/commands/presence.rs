// Startup hook: presence and connectivity logging.
//
// poise runs `setup` once, on the first Ready event, so this never fires
// again on reconnect.

use poise::serenity_prelude as serenity;

/// Shows `Playing <activity>` as the bot's status.
pub fn set_activity(ctx: &serenity::Context, activity: &str) {
    let activity = serenity::ActivityData::playing(activity);
    ctx.set_presence(Some(activity), serenity::OnlineStatus::Online);
}

/// Called once the bot is connected.
pub fn on_ready(ctx: &serenity::Context, ready: &serenity::Ready, activity: &str) {
    set_activity(ctx, activity);
    tracing::info!(
        user_id = ready.user.id.get(),
        guilds = ready.guilds.len(),
        "Connected to bot: {}",
        ready.user.tag()
    );
}
