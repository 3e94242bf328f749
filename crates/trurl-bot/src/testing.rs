//! Test doubles for the transport.

use crate::transport::{InboundMessage, Sender, Target, Transport};

/// One thing the bot asked the transport to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outbound {
    Message { targets: Vec<String>, text: String },
    Notice { targets: Vec<String>, text: String },
    Join(String),
    Leave(String),
}

/// A transport that records every call.
#[derive(Debug, Default)]
pub struct RecordingTransport {
    pub sent: Vec<Outbound>,
    pub stopped: Option<String>,
}

impl RecordingTransport {
    /// Message and notice texts, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.sent
            .iter()
            .filter_map(|o| match o {
                Outbound::Message { text, .. } | Outbound::Notice { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    /// Targets of the `index`th recorded call.
    pub fn targets_of(&self, index: usize) -> Vec<&str> {
        match &self.sent[index] {
            Outbound::Message { targets, .. } | Outbound::Notice { targets, .. } => {
                targets.iter().map(String::as_str).collect()
            }
            other => panic!("not a message: {other:?}"),
        }
    }
}

fn names(targets: &[Target]) -> Vec<String> {
    targets.iter().map(|t| t.name().to_string()).collect()
}

impl Transport for RecordingTransport {
    fn send_message(&mut self, targets: &[Target], text: &str) {
        self.sent.push(Outbound::Message {
            targets: names(targets),
            text: text.to_string(),
        });
    }

    fn send_notice(&mut self, targets: &[Target], text: &str) {
        self.sent.push(Outbound::Notice {
            targets: names(targets),
            text: text.to_string(),
        });
    }

    fn join(&mut self, channel: &str) {
        self.sent.push(Outbound::Join(channel.to_string()));
    }

    fn leave(&mut self, channel: &str) {
        self.sent.push(Outbound::Leave(channel.to_string()));
    }

    fn request_stop(&mut self, quit_message: &str) {
        self.stopped = Some(quit_message.to_string());
    }
}

/// A user message to a channel.
pub fn channel_message(sender: &str, channel: &str, text: &str) -> InboundMessage {
    InboundMessage::new(Sender::user(sender), vec![Target::new(channel)], text)
}

/// A user message sent straight to the bot's nick.
pub fn direct_message(sender: &str, nick: &str, text: &str) -> InboundMessage {
    InboundMessage::new(Sender::user(sender), vec![Target::new(nick)], text)
}
