//! Command layer for the Trurl dice bot.
//!
//! Parses chat lines into commands, checks owner and admin privileges,
//! routes each command to its handler inside a failure boundary, and
//! replies through a [`Transport`]. The transport itself lives outside
//! this crate.

pub mod commands;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod parser;
pub mod privilege;
pub mod registry;
pub mod transport;
#[cfg(test)]
pub(crate) mod testing;

pub use config::BotConfig;
pub use dispatch::{Context, Dispatch, Dispatcher};
pub use error::{CommandError, CommandResult, Tier};
pub use parser::{ParsedCommand, parse_command};
pub use privilege::Privileges;
pub use registry::{Command, Registry};
pub use transport::{InboundMessage, Sender, Target, Transport};
