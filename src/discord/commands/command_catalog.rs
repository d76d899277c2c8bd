// Discord commands module.
// Each feature gets its own command file; `registered_commands` composes the
// enabled set at startup.

pub mod arguments;

pub mod fun;

pub mod help;

pub mod image;

// Bot presence and startup hook
pub mod presence;

pub mod weather;

use crate::core::config::CommandKind;
use crate::discord::{Data, Error};

pub type Command = poise::Command<Data, Error>;

pub fn command_for(kind: CommandKind) -> Command {
    match kind {
        CommandKind::Hello => fun::hello(),
        CommandKind::Add => fun::add(),
        CommandKind::Roll => fun::roll(),
        CommandKind::Choose => fun::choose(),
        CommandKind::Repeat => fun::repeat(),
        CommandKind::Image => image::image(),
        CommandKind::Weather => weather::weather(),
        CommandKind::Help => help::help(),
    }
}

/// Builds the command list for the enabled kinds, in the given order.
pub fn registered_commands(enabled: &[CommandKind]) -> Vec<Command> {
    enabled.iter().map(|kind| command_for(*kind)).collect()
}
