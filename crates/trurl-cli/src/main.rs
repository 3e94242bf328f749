//! Console front end for the Trurl dice bot.

mod console;
mod logging;
mod supervisor;

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::mpsc;

use clap::Parser;
use trurl_bot::BotConfig;

use console::{ConsoleTransport, Style};
use supervisor::{Supervisor, spawn_stdin_reader};

#[derive(Parser)]
#[command(
    name = "trurl",
    about = "Trurl, a dice bot for tabletop chat",
    long_about = "Reads chat lines of the form `SENDER TARGET TEXT` from stdin and \
                  answers dice commands such as `!roll 2 6` or `!wod 5 rote`. \
                  Type `exit` to stop.",
    version
)]
struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// The bot's nick
    #[arg(long)]
    nick: Option<String>,

    /// Identity allowed to stop the bot
    #[arg(long)]
    owner: Option<String>,

    /// Identity allowed to join and leave channels (repeatable)
    #[arg(long = "admin")]
    admins: Vec<String>,

    /// Channel to join at startup (repeatable)
    #[arg(long = "channel")]
    channels: Vec<String>,

    /// RNG seed for reproducible rolls
    #[arg(short, long)]
    seed: Option<u64>,

    /// Keep running after stdin closes
    #[arg(long)]
    ignore_eof: bool,

    /// Print replies without color
    #[arg(long)]
    plain: bool,

    /// Emit logs as JSON
    #[arg(long)]
    log_json: bool,
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.log_json);

    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(&cli)?;
    tracing::info!(nick = %config.nick, channels = ?config.channels, "starting bot");

    let style = if cli.plain { Style::Plain } else { Style::Ansi };
    let (tx, rx) = mpsc::channel();
    spawn_stdin_reader(tx.clone());

    let transport = ConsoleTransport::new(io::stdout(), style, tx);
    let reason = Supervisor::new(config, transport, rx).run();
    tracing::info!(reason = ?reason, "bot stopped");
    Ok(())
}

/// Start from the config file, if any, then apply command-line overrides.
fn load_config(cli: &Cli) -> Result<BotConfig, String> {
    let mut config = match &cli.config {
        Some(path) => read_config(path)?,
        None => BotConfig::default(),
    };

    if let Some(nick) = &cli.nick {
        config = config.with_nick(nick.as_str());
    }
    if let Some(owner) = &cli.owner {
        config = config.with_owner(owner.as_str());
    }
    for admin in &cli.admins {
        config = config.with_admin(admin.as_str());
    }
    for channel in &cli.channels {
        config = config.with_channel(channel.as_str());
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if cli.ignore_eof {
        config.ignore_eof = true;
    }
    Ok(config)
}

fn read_config(path: &Path) -> Result<BotConfig, String> {
    let text = fs::read_to_string(path)
        .map_err(|e| format!("failed to read {}: {e}", path.display()))?;
    serde_json::from_str(&text).map_err(|e| format!("invalid config {}: {e}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("trurl").chain(args.iter().copied()))
    }

    #[test]
    fn defaults_without_flags() {
        let config = load_config(&cli(&[])).unwrap();
        assert_eq!(config, BotConfig::default());
    }

    #[test]
    fn flags_override_and_extend() {
        let config = load_config(&cli(&[
            "--nick",
            "klapaucius",
            "--owner",
            "trurl",
            "--admin",
            "pugg",
            "--admin",
            "gargantius",
            "--channel",
            "#aurora",
            "--seed",
            "9",
            "--ignore-eof",
        ]))
        .unwrap();
        assert_eq!(config.nick, "klapaucius");
        assert_eq!(config.owner.as_deref(), Some("trurl"));
        assert_eq!(config.admins, vec!["pugg", "gargantius"]);
        assert_eq!(config.channels, vec!["#aurora"]);
        assert_eq!(config.seed, Some(9));
        assert!(config.ignore_eof);
    }

    #[test]
    fn missing_config_file_is_an_error() {
        let err = load_config(&cli(&["--config", "/nonexistent/trurl.json"])).unwrap_err();
        assert!(err.starts_with("failed to read /nonexistent/trurl.json"));
    }
}
