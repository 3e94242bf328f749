//! Configuration for a bot instance.

use serde::{Deserialize, Serialize};

/// The message sent when the bot disconnects.
pub const DEFAULT_QUIT_MESSAGE: &str =
    "We want the Demon, you see, to extract from the dance of atoms only information that is genuine.";

/// Configuration for a bot instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// The bot's own nick; messages addressed to it are answered privately.
    pub nick: String,
    /// The identity allowed to stop the bot.
    pub owner: Option<String>,
    /// Identities allowed to join and leave channels.
    pub admins: Vec<String>,
    /// Channels joined at startup.
    pub channels: Vec<String>,
    /// Prefix that marks a chat line as a command.
    pub command_marker: char,
    /// Prefix that turns the rest of a command line into one parameter.
    pub escape_marker: char,
    /// Sent when the bot stops.
    pub quit_message: String,
    /// RNG seed for reproducible rolls; random when unset.
    pub seed: Option<u64>,
    /// Keep running after the console closes.
    pub ignore_eof: bool,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            nick: "trurl".to_string(),
            owner: None,
            admins: Vec::new(),
            channels: Vec::new(),
            command_marker: '!',
            escape_marker: '/',
            quit_message: DEFAULT_QUIT_MESSAGE.to_string(),
            seed: None,
            ignore_eof: false,
        }
    }
}

impl BotConfig {
    /// Set the bot's nick.
    pub fn with_nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = nick.into();
        self
    }

    /// Set the owner.
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Add an admin.
    pub fn with_admin(mut self, admin: impl Into<String>) -> Self {
        self.admins.push(admin.into());
        self
    }

    /// Add a channel to join at startup.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channels.push(channel.into());
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}
