use thiserror::Error;

/// Most dice a single `roll` may throw. Keeps the reply under Discord's
/// 2000 character message limit even for large faces.
pub const MAX_ROLLS: u32 = 100;

/// User-input errors for the small utility commands.
///
/// The `Display` text is exactly what gets sent back to the channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FunError {
    #[error("Please input only numbers!")]
    NotANumber,
    #[error("Format has to be in NdN!")]
    BadDiceFormat,
    #[error("You can roll at most {max} dice at once!")]
    TooManyDice { max: u32 },
    #[error("Please provide at least one choice!")]
    NoChoices,
    #[error("Cannot repeat a negative number of times!")]
    NegativeRepeat,
}

/// A validated dice request: `rolls` dice with faces `1..=limit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiceSpec {
    pub rolls: u32,
    pub limit: u64,
}

/// A validated repeat request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepeatPlan {
    pub times: u64,
    pub content: String,
}

impl RepeatPlan {
    /// The messages to send, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::repeat(self.content.as_str()).take(self.times as usize)
    }
}
