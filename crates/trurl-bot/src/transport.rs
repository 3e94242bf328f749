//! The contract between the dispatcher and a chat transport.

/// A place a message can be sent: a channel or a single user.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target(String);

impl Target {
    /// Create a target from its name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The target's name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Whether this target reaches several listeners (a channel).
    pub fn is_broadcast(&self) -> bool {
        self.0.starts_with(['#', '&'])
    }

    /// Whether this target is `name`, compared case-insensitively.
    pub fn is(&self, name: &str) -> bool {
        self.0.to_lowercase() == name.to_lowercase()
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who sent a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sender {
    /// The sender's identity.
    pub name: String,
    /// Whether the sender can be replied to directly (false for servers).
    pub addressable: bool,
}

impl Sender {
    /// A user who can receive private replies.
    pub fn user(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            addressable: true,
        }
    }
}

/// A chat message delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// Who sent it.
    pub sender: Sender,
    /// Where it was sent.
    pub targets: Vec<Target>,
    /// The raw text.
    pub text: String,
}

impl InboundMessage {
    /// Create a message from `sender` to `targets`.
    pub fn new(sender: Sender, targets: Vec<Target>, text: impl Into<String>) -> Self {
        Self {
            sender,
            targets,
            text: text.into(),
        }
    }
}

/// Outbound operations the dispatcher and its handlers need from a chat transport.
pub trait Transport {
    /// Send a public message.
    fn send_message(&mut self, targets: &[Target], text: &str);

    /// Send a notice, used for errors and other private feedback.
    fn send_notice(&mut self, targets: &[Target], text: &str);

    /// Join a channel.
    fn join(&mut self, channel: &str);

    /// Leave a channel.
    fn leave(&mut self, channel: &str);

    /// Ask whoever runs the service to stop it.
    fn request_stop(&mut self, quit_message: &str);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn broadcast_targets() {
        assert!(Target::new("#aurora").is_broadcast());
        assert!(Target::new("&local").is_broadcast());
        assert!(!Target::new("trurl").is_broadcast());
    }

    #[test]
    fn target_names_compare_case_insensitively() {
        assert!(Target::new("Trurl").is("trurl"));
        assert!(!Target::new("Trurl").is("klapaucius"));
    }
}
