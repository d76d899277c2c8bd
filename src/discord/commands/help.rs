use crate::core::replies::{EmbedReply, Reply};
use crate::discord::replies::send_reply;
use crate::discord::{Context, Error};
use std::collections::HashMap;

const HELP_COLOR: u32 = 0x5865F2;

// Category definitions with emojis and order
const CATEGORY_ORDER: &[&str] = &["Quick Start", "Fun", "Lookups"];

fn get_category_emoji(category: &str) -> &'static str {
    match category {
        "Quick Start" => "🚀",
        "Fun" => "🎲",
        "Lookups" => "🔎",
        _ => "•",
    }
}

struct CommandMetadata {
    category: &'static str,
    priority: i32,
}

fn get_command_metadata(name: &str) -> CommandMetadata {
    match name {
        "hello" => CommandMetadata {
            category: "Quick Start",
            priority: 100,
        },
        "roll" => CommandMetadata {
            category: "Fun",
            priority: 90,
        },
        "choose" => CommandMetadata {
            category: "Fun",
            priority: 80,
        },
        "add" => CommandMetadata {
            category: "Fun",
            priority: 70,
        },
        "repeat" => CommandMetadata {
            category: "Fun",
            priority: 60,
        },
        "weather" => CommandMetadata {
            category: "Lookups",
            priority: 90,
        },
        "image" => CommandMetadata {
            category: "Lookups",
            priority: 80,
        },
        _ => CommandMetadata {
            category: "Quick Start",
            priority: 0,
        },
    }
}

/// What the help listing needs to know about a registered command.
#[derive(Debug, Clone)]
pub struct HelpEntry {
    pub name: String,
    pub brief: Option<String>,
    pub help: Option<String>,
    pub aliases: Vec<String>,
}

impl HelpEntry {
    fn from_command(command: &poise::Command<crate::discord::Data, Error>) -> Self {
        Self {
            name: command.name.clone(),
            brief: command.description.clone(),
            help: command.help_text.clone(),
            aliases: command.aliases.clone(),
        }
    }
}

/// Show the available commands, or details for one command.
///
/// Example: !help roll
#[poise::command(prefix_command)]
pub async fn help(ctx: Context<'_>, command: Option<String>) -> Result<(), Error> {
    let _turn = ctx.data().channels.turn(ctx.channel_id()).await;
    let entries: Vec<HelpEntry> = ctx
        .framework()
        .options()
        .commands
        .iter()
        .filter(|c| !c.hide_in_help)
        .map(HelpEntry::from_command)
        .collect();

    let prefix = ctx.prefix();
    let reply = match command {
        Some(name) => command_help(&entries, prefix, &name),
        None => build_help_embed(&entries, prefix).into(),
    };

    send_reply(ctx, reply).await
}

/// Details for a single command, looked up by name or alias.
pub fn command_help(entries: &[HelpEntry], prefix: &str, name: &str) -> Reply {
    let wanted = name.trim().trim_start_matches(prefix).to_lowercase();
    let Some(entry) = entries
        .iter()
        .find(|e| e.name == wanted || e.aliases.iter().any(|a| *a == wanted))
    else {
        return Reply::text(format!("No command named '{}'.", name.trim()));
    };

    let mut embed = EmbedReply::new(
        format!("{}{}", prefix, entry.name),
        entry
            .brief
            .clone()
            .unwrap_or_else(|| "No description provided.".to_string()),
        HELP_COLOR,
    )
    .stacked();

    if let Some(help) = &entry.help {
        embed = embed.field("Usage", help.clone());
    }
    if !entry.aliases.is_empty() {
        let aliases: Vec<String> = entry
            .aliases
            .iter()
            .map(|a| format!("{}{}", prefix, a))
            .collect();
        embed = embed.field("Aliases", aliases.join(", "));
    }

    embed.into()
}

pub fn build_help_embed(entries: &[HelpEntry], prefix: &str) -> EmbedReply {
    let mut categories: HashMap<&str, Vec<(i32, String)>> = HashMap::new();

    for entry in entries {
        if entry.name == "help" {
            continue;
        }

        let metadata = get_command_metadata(&entry.name);
        let description = entry.brief.as_deref().unwrap_or("No description provided.");

        let mut line = format!("• **{}{}** — {}", prefix, entry.name, description);
        if let Some(help) = &entry.help {
            line.push_str(&format!("\n  ⤷ {}", help));
        }

        categories
            .entry(metadata.category)
            .or_default()
            .push((metadata.priority, line));
    }

    let mut embed = EmbedReply::new(
        "Infinity Bot Commands",
        format!(
            "Use commands with `{0}`. Try `{0}help <command>` for details on one command.",
            prefix
        ),
        HELP_COLOR,
    )
    .stacked();

    // Sort categories based on defined order, then alphabetically for others
    let mut sorted_categories: Vec<_> = categories.keys().cloned().collect();
    sorted_categories.sort_by(|a, b| {
        let pos_a = CATEGORY_ORDER.iter().position(|&x| x == *a).unwrap_or(999);
        let pos_b = CATEGORY_ORDER.iter().position(|&x| x == *b).unwrap_or(999);
        pos_a.cmp(&pos_b).then(a.cmp(b))
    });

    for category in sorted_categories {
        if let Some(entries) = categories.get_mut(category) {
            // Sort by priority (descending), then name (ascending)
            entries.sort_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));

            let title = format!("{} {}", get_category_emoji(category), category);
            let lines: Vec<String> = entries.iter().map(|(_, s)| s.clone()).collect();

            for (i, chunk) in chunk_entries(&lines).iter().enumerate() {
                let field_name = if i == 0 {
                    title.clone()
                } else {
                    format!("{} (cont.)", title)
                };
                embed = embed.field(field_name, chunk.join("\n"));
            }
        }
    }

    embed
}

fn chunk_entries(entries: &[String]) -> Vec<Vec<String>> {
    let mut chunks = Vec::new();
    let mut current_chunk = Vec::new();
    let mut current_length = 0;

    for entry in entries {
        let entry_len = entry.len();
        // Discord field value limit is 1024. We leave a bit of buffer.
        if !current_chunk.is_empty() && current_length + entry_len + 1 > 1000 {
            chunks.push(current_chunk);
            current_chunk = Vec::new();
            current_length = 0;
        }

        current_chunk.push(entry.clone());
        current_length += entry_len + 1;
    }

    if !current_chunk.is_empty() {
        chunks.push(current_chunk);
    }

    chunks
}
