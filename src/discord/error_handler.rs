// Framework error policy.
//
// Nothing that goes wrong inside a single invocation may take the bot down.
// Malformed arguments and unknown commands get no reply at all, handler
// failures are logged, and everything else falls back to poise's default
// behaviour.

use crate::discord::{Data, Error};

/// The framework failures this bot treats differently.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    UnknownCommand,
    BadArguments,
    CommandFailed,
    SetupFailed,
    Other,
}

impl FailureKind {
    pub fn of(error: &poise::FrameworkError<'_, Data, Error>) -> Self {
        match error {
            poise::FrameworkError::UnknownCommand { .. } => FailureKind::UnknownCommand,
            poise::FrameworkError::ArgumentParse { .. } => FailureKind::BadArguments,
            poise::FrameworkError::Command { .. } => FailureKind::CommandFailed,
            poise::FrameworkError::Setup { .. } => FailureKind::SetupFailed,
            _ => FailureKind::Other,
        }
    }

    /// Whether the user should see anything in the channel.
    pub fn replies_to_user(self) -> bool {
        matches!(self, FailureKind::Other)
    }
}

pub async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    if FailureKind::of(&error).replies_to_user() {
        if let Err(e) = poise::builtins::on_error(error).await {
            tracing::error!("Error while handling framework error: {}", e);
        }
        return;
    }

    match error {
        poise::FrameworkError::ArgumentParse {
            error, input, ctx, ..
        } => {
            tracing::debug!(
                command = %ctx.command().name,
                input = ?input,
                "Ignoring invocation with unparsable arguments: {}",
                error
            );
        }
        poise::FrameworkError::UnknownCommand { msg_content, .. } => {
            tracing::debug!(content = %msg_content, "Ignoring unknown command");
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            tracing::error!(
                command = %ctx.command().name,
                author = %ctx.author().name,
                "Command failed: {}",
                error
            );
        }
        poise::FrameworkError::Setup { error, .. } => {
            tracing::error!("Failed during setup: {}", error);
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_commands_and_bad_arguments_stay_silent() {
        assert!(!FailureKind::UnknownCommand.replies_to_user());
        assert!(!FailureKind::BadArguments.replies_to_user());
    }

    #[test]
    fn test_handler_failures_are_only_logged() {
        assert!(!FailureKind::CommandFailed.replies_to_user());
        assert!(!FailureKind::SetupFailed.replies_to_user());
    }

    #[test]
    fn test_other_failures_use_framework_default() {
        assert!(FailureKind::Other.replies_to_user());
    }
}
