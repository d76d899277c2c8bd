// The infra module contains implementations of core traits.
// Each external API gets its own submodule.

#[path = "weather/mod.rs"]
pub mod weather;

#[path = "imaging/mod.rs"]
pub mod imaging;
