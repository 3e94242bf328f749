//! A chat transport backed by the terminal.
//!
//! Console lines of the form `SENDER TARGET TEXT` are fed to the bot as
//! chat messages. Replies are printed with an arrow naming their targets,
//! and highlight markup is shown as ANSI color or stripped.

use std::io::Write;
use std::sync::mpsc::Sender as EventSender;

use colored::{Color, Colorize};
use trurl_bot::{InboundMessage, Sender, Target, Transport};
use trurl_dice::report::markup::{self, GREEN, GREY, RED};

use crate::supervisor::Event;

/// How highlight markup is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Translate markup to ANSI escapes.
    Ansi,
    /// Drop markup.
    Plain,
}

/// Prints bot output to a writer and forwards stop requests to the supervisor.
pub struct ConsoleTransport<W: Write> {
    out: W,
    style: Style,
    events: EventSender<Event>,
}

impl<W: Write> ConsoleTransport<W> {
    pub fn new(out: W, style: Style, events: EventSender<Event>) -> Self {
        Self { out, style, events }
    }

    /// Print a line from the service itself.
    pub fn status(&mut self, text: &str) {
        self.emit(text.to_string());
    }

    /// Print the parting message.
    pub fn disconnect(&mut self, quit_message: &str) {
        self.emit(format!("Disconnected: {quit_message}"));
    }

    fn emit(&mut self, line: String) {
        if let Err(e) = writeln!(self.out, "{line}") {
            tracing::warn!(error = %e, "console write failed");
        }
    }

    fn render(&self, text: &str) -> String {
        match self.style {
            Style::Plain => markup::strip(text),
            Style::Ansi => markup::segments(text)
                .into_iter()
                .map(|seg| {
                    let mut styled = seg.text.normal();
                    if let Some(color) = seg.color.and_then(palette) {
                        styled = styled.color(color);
                    }
                    if seg.bold {
                        styled = styled.bold();
                    }
                    styled.to_string()
                })
                .collect(),
        }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Transport for ConsoleTransport<W> {
    fn send_message(&mut self, targets: &[Target], text: &str) {
        let line = format!("-> {}: {}", join_targets(targets), self.render(text));
        self.emit(line);
    }

    fn send_notice(&mut self, targets: &[Target], text: &str) {
        let line = format!("-notice-> {}: {}", join_targets(targets), self.render(text));
        self.emit(line);
    }

    fn join(&mut self, channel: &str) {
        self.emit(format!("Joined '{channel}'."));
    }

    fn leave(&mut self, channel: &str) {
        self.emit(format!("Left '{channel}'."));
    }

    fn request_stop(&mut self, quit_message: &str) {
        if self.events.send(Event::Stop(quit_message.to_string())).is_err() {
            tracing::warn!("stop requested after the supervisor exited");
        }
    }
}

/// Parse `SENDER TARGET[,TARGET...] TEXT`.
///
/// Senders with a dot in their name are treated as servers, which cannot
/// receive private replies.
pub fn parse_console_line(line: &str) -> Option<InboundMessage> {
    let (sender, rest) = line.trim().split_once(char::is_whitespace)?;
    let (targets, text) = rest.trim_start().split_once(char::is_whitespace)?;
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let targets: Vec<Target> = targets
        .split(',')
        .filter(|t| !t.is_empty())
        .map(Target::new)
        .collect();
    if targets.is_empty() {
        return None;
    }

    let sender = Sender {
        name: sender.to_string(),
        addressable: !sender.contains('.'),
    };
    Some(InboundMessage::new(sender, targets, text))
}

fn join_targets(targets: &[Target]) -> String {
    targets
        .iter()
        .map(Target::name)
        .collect::<Vec<_>>()
        .join(",")
}

fn palette(code: u8) -> Option<Color> {
    match code {
        0 | 15 => Some(Color::White),
        1 => Some(Color::Black),
        2 => Some(Color::Blue),
        GREEN => Some(Color::Green),
        RED => Some(Color::Red),
        5 | 6 => Some(Color::Magenta),
        7 => Some(Color::Yellow),
        8 => Some(Color::BrightYellow),
        9 => Some(Color::BrightGreen),
        10 => Some(Color::Cyan),
        11 => Some(Color::BrightCyan),
        12 => Some(Color::BrightBlue),
        13 => Some(Color::BrightMagenta),
        GREY => Some(Color::BrightBlack),
        _ => None,
    }
}
