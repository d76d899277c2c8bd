pub mod reply_models;

pub use reply_models::{EmbedReply, Reply};
