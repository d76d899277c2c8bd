// The core module contains all platform-agnostic logic.
// Each feature gets its own submodule.

#[path = "config/mod.rs"]
pub mod config;

#[path = "replies/mod.rs"]
pub mod replies;

#[path = "fun/mod.rs"]
pub mod fun;

#[path = "weather/mod.rs"]
pub mod weather;

#[path = "imaging/mod.rs"]
pub mod imaging;
