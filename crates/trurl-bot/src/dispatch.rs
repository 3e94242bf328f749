//! Routing chat lines to command handlers.
//!
//! The [`Dispatcher`] owns the registry, the privilege lists and the random
//! source. Each inbound message is handled to completion before the next
//! one: parse, look up, run the handler inside a failure boundary, reply.

use std::str::FromStr;

use rand::SeedableRng;
use rand::rngs::StdRng;
use trurl_dice::DieSource;
use trurl_dice::report::RollOutcome;

use crate::commands;
use crate::config::BotConfig;
use crate::error::{CommandError, CommandResult, Tier};
use crate::parser::parse_command;
use crate::privilege::Privileges;
use crate::registry::Registry;
use crate::transport::{InboundMessage, Sender, Target, Transport};

/// What happened to an inbound message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// The message was not a command.
    Ignored,
    /// The command name is not registered.
    Unknown(String),
    /// The handler completed.
    Handled,
    /// The handler failed; the sender may have been told.
    Failed(CommandError),
}

/// Everything a handler can see and use while it runs.
pub struct Context<'a> {
    /// The command name as typed.
    pub command: &'a str,
    /// Positional parameters.
    pub params: &'a [String],
    /// Who invoked the command.
    pub sender: &'a Sender,
    /// Where replies go.
    pub reply_to: &'a [Target],
    /// All registered commands.
    pub registry: &'a Registry,
    /// Owner and admin lists.
    pub privileges: &'a Privileges,
    /// Bot configuration.
    pub config: &'a BotConfig,
    /// The random source for rolls.
    pub rng: &'a mut dyn DieSource,
    /// The chat transport.
    pub transport: &'a mut dyn Transport,
}

impl Context<'_> {
    /// Fail unless the parameter count is within `min..=max`.
    pub fn check_params(&self, min: usize, max: Option<usize>) -> CommandResult<()> {
        let count = self.params.len();
        if count < min || max.is_some_and(|max| count > max) {
            return Err(CommandError::ParameterCount { min, max });
        }
        Ok(())
    }

    /// Fail unless the sender holds `required`.
    pub fn require(&self, required: Tier) -> CommandResult<()> {
        self.privileges.require(&self.sender.name, required)
    }

    /// Parse parameter `index`.
    pub fn param<T>(&self, index: usize) -> CommandResult<T>
    where
        T: FromStr,
        CommandError: From<T::Err>,
    {
        let raw = self
            .params
            .get(index)
            .ok_or(CommandError::ParameterCount {
                min: index + 1,
                max: None,
            })?;
        Ok(raw.parse()?)
    }

    /// Send a message to the default reply target.
    pub fn reply(&mut self, text: &str) {
        self.transport.send_message(self.reply_to, text);
    }

    /// Announce a roll: a headline naming the sender, then every die.
    pub fn reply_roll(&mut self, outcome: &RollOutcome) {
        let headline = format!(
            "{} rolls {}: {}",
            self.sender.name, outcome.description, outcome.summary
        );
        self.reply(&headline);
        self.reply(&outcome.verbose);
    }
}

/// Routes inbound messages to registered commands.
pub struct Dispatcher<R = StdRng> {
    registry: Registry,
    privileges: Privileges,
    config: BotConfig,
    rng: R,
}

impl Dispatcher<StdRng> {
    /// Create a dispatcher with the built-in commands, seeding the RNG from the config.
    pub fn new(config: BotConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: DieSource> Dispatcher<R> {
    /// Create a dispatcher with the built-in commands and the given random source.
    pub fn with_rng(config: BotConfig, rng: R) -> Self {
        let privileges = Privileges::new(config.owner.as_deref(), &config.admins);
        Self {
            registry: commands::registry(),
            privileges,
            config,
            rng,
        }
    }

    /// The configuration this dispatcher was built with.
    pub fn config(&self) -> &BotConfig {
        &self.config
    }

    /// The registered commands.
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Handle one inbound message.
    pub fn dispatch(
        &mut self,
        message: &InboundMessage,
        transport: &mut dyn Transport,
    ) -> Dispatch {
        let marker = self.config.command_marker;
        let Some(parsed) = parse_command(&message.text, marker, self.config.escape_marker) else {
            return Dispatch::Ignored;
        };

        let sender = &message.sender;
        let reply_to = self.reply_targets(message);
        let private = sender.addressable && reply_to.iter().all(|t| !t.is_broadcast());

        let Some(command) = self.registry.get(&parsed.name) else {
            tracing::debug!(sender = %sender.name, command = %parsed.name, "unknown command");
            if private {
                let mut notice = format!("Command '{}' not recognized.", parsed.name);
                if let Some(suggestion) = self.registry.suggest(&parsed.name) {
                    notice.push_str(&format!(" Did you mean {marker}{suggestion}?"));
                }
                transport.send_notice(&reply_to, &notice);
            }
            return Dispatch::Unknown(parsed.name);
        };

        tracing::debug!(
            sender = %sender.name,
            command = command.name,
            params = ?parsed.params,
            "dispatching command"
        );

        let mut ctx = Context {
            command: &parsed.name,
            params: &parsed.params,
            sender,
            reply_to: &reply_to,
            registry: &self.registry,
            privileges: &self.privileges,
            config: &self.config,
            rng: &mut self.rng,
            transport,
        };

        match (command.handler)(&mut ctx) {
            Ok(()) => Dispatch::Handled,
            Err(err) if err.is_domain() => {
                tracing::warn!(
                    sender = %sender.name,
                    command = %parsed.name,
                    error = %err,
                    "command rejected"
                );
                ctx.transport
                    .send_notice(&reply_to, &err.notice(&parsed.name, marker));
                Dispatch::Failed(err)
            }
            Err(err) => {
                tracing::error!(
                    sender = %sender.name,
                    command = %parsed.name,
                    error = %err,
                    "command failed"
                );
                if sender.addressable {
                    ctx.transport
                        .send_notice(&reply_to, &err.notice(&parsed.name, marker));
                }
                Dispatch::Failed(err)
            }
        }
    }

    /// Direct messages from an addressable sender are answered privately;
    /// everything else is answered where it was said.
    fn reply_targets(&self, message: &InboundMessage) -> Vec<Target> {
        let direct = message.targets.iter().any(|t| t.is(&self.config.nick));
        if direct && message.sender.addressable {
            vec![Target::new(message.sender.name.clone())]
        } else {
            message.targets.clone()
        }
    }
}
