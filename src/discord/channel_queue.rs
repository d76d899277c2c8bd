// Per-channel command ordering.
//
// serenity runs every incoming message on its own task, so two commands in
// the same channel can race once one of them awaits an HTTP call. Each
// command takes its channel's turn before doing anything and keeps it until
// its last reply is sent. Tokio's mutex hands the lock out in the order it
// was requested, so replies come back in the order the commands arrived.

use dashmap::DashMap;
use poise::serenity_prelude::ChannelId;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Held for the lifetime of one invocation.
pub type ChannelTurn = OwnedMutexGuard<()>;

#[derive(Default)]
pub struct ChannelQueue {
    locks: DashMap<ChannelId, Arc<Mutex<()>>>,
}

impl ChannelQueue {
    /// Waits until every earlier command in `channel` has finished.
    pub async fn turn(&self, channel: ChannelId) -> ChannelTurn {
        // Clone the Arc out so the map shard isn't locked across the await.
        let lock = self.locks.entry(channel).or_default().clone();
        lock.lock_owned().await
    }
}
