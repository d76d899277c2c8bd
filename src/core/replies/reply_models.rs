// Outbound reply model.
//
// Handlers in the core never talk to Discord directly. They describe what
// should be sent and the Discord layer turns it into a `CreateReply`.

/// A single message the bot wants to send back to the invoking channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Embed(EmbedReply),
}

impl Reply {
    pub fn text(content: impl Into<String>) -> Self {
        Reply::Text(content.into())
    }

    /// Returns the plain text of a text reply, `None` for embeds.
    #[cfg(test)]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Reply::Text(content) => Some(content),
            Reply::Embed(_) => None,
        }
    }
}

/// Rich reply rendered as a Discord embed.
///
/// Fields keep their insertion order so the rendered embed matches the
/// order handlers add them in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedReply {
    pub title: String,
    pub description: String,
    pub color: u32,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub fields: Vec<(String, String)>,
    /// Side-by-side fields (the default) or one field per row.
    pub inline_fields: bool,
}

impl EmbedReply {
    pub fn new(title: impl Into<String>, description: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            color,
            thumbnail: None,
            image: None,
            fields: Vec::new(),
            inline_fields: true,
        }
    }

    pub fn stacked(mut self) -> Self {
        self.inline_fields = false;
        self
    }

    pub fn thumbnail(mut self, url: impl Into<String>) -> Self {
        self.thumbnail = Some(url.into());
        self
    }

    pub fn image(mut self, url: impl Into<String>) -> Self {
        self.image = Some(url.into());
        self
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }
}

impl From<EmbedReply> for Reply {
    fn from(embed: EmbedReply) -> Self {
        Reply::Embed(embed)
    }
}
