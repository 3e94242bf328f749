//! The service run loop.
//!
//! Console input and stop requests arrive on one channel and are handled in
//! order. The supervisor owns the run state; the dispatcher never learns how
//! a stop was triggered.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{Receiver, Sender};
use std::thread;

use trurl_bot::{BotConfig, Dispatcher, Transport};

use crate::console::{ConsoleTransport, parse_console_line};

/// Something the supervisor must react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A line typed on the console.
    Console(String),
    /// The console closed.
    Eof,
    /// A command asked the service to stop.
    Stop(String),
}

/// Why the run loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shutdown {
    /// `exit` was typed on the console.
    Exit,
    /// The owner issued the quit command.
    Quit,
    /// The console closed, or the event channel hung up.
    Eof,
}

/// Feed stdin lines into `events` from a background thread, then [`Event::Eof`].
pub fn spawn_stdin_reader(events: Sender<Event>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if events.send(Event::Console(line)).is_err() {
                        return;
                    }
                }
                Err(e) => {
                    tracing::warn!(error = %e, "console read failed");
                    break;
                }
            }
        }
        // The supervisor may already be gone.
        let _ = events.send(Event::Eof);
    })
}

/// Drives a dispatcher from console events until something stops it.
pub struct Supervisor<W: Write> {
    dispatcher: Dispatcher,
    transport: ConsoleTransport<W>,
    events: Receiver<Event>,
}

impl<W: Write> Supervisor<W> {
    pub fn new(config: BotConfig, transport: ConsoleTransport<W>, events: Receiver<Event>) -> Self {
        Self {
            dispatcher: Dispatcher::new(config),
            transport,
            events,
        }
    }

    /// Join the configured channels, then process events until stopped.
    pub fn run(&mut self) -> Shutdown {
        let config = self.dispatcher.config().clone();
        for channel in &config.channels {
            tracing::info!(channel = %channel, "joining channel");
            self.transport.join(channel);
        }
        self.transport
            .status("bot running - type 'exit' or send !quit to exit");

        let (reason, quit_message) = loop {
            let Ok(event) = self.events.recv() else {
                break (Shutdown::Eof, config.quit_message.clone());
            };
            match event {
                Event::Console(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    if line == "exit" {
                        break (Shutdown::Exit, config.quit_message.clone());
                    }
                    match parse_console_line(line) {
                        Some(message) => {
                            self.dispatcher.dispatch(&message, &mut self.transport);
                        }
                        None => self
                            .transport
                            .status("unrecognised command (use 'exit' to quit)"),
                    }
                }
                Event::Eof => {
                    self.transport.status("EOF");
                    if !config.ignore_eof {
                        break (Shutdown::Eof, config.quit_message.clone());
                    }
                }
                Event::Stop(message) => break (Shutdown::Quit, message),
            }
        };

        tracing::info!(reason = ?reason, "stopping");
        self.transport.disconnect(&quit_message);
        reason
    }

    #[cfg(test)]
    fn into_transport(self) -> ConsoleTransport<W> {
        self.transport
    }
}
