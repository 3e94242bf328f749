//! The built-in command set.

pub mod admin;
pub mod dice;
pub mod flags;

use crate::registry::{Command, Registry};

/// The built-in commands, in the order `help` lists them.
pub const COMMANDS: &[Command] = &[
    Command::new("help", admin::help, &["self-explanatory"]),
    Command::new("join", admin::join, &["join <channel-name>: join a channel"]),
    Command::new("leave", admin::leave, &["leave <channel-name>: leave a channel"]),
    Command::new("quit", admin::quit, &["quit: disconnect from irc"]),
    Command::new("rights", admin::rights, &["rights: check your privilege"]),
    Command::new(
        "roll",
        dice::roll,
        &[
            "roll <count> <sides>: roll dice and sum them",
            "roll <count> <sides> <target>: roll dice and test against target numbers",
        ],
    ),
    Command::new("fate", dice::fate, &["fate: roll 4 FATE/FUDGE dice"]),
    Command::new(
        "wod",
        dice::wod,
        &[
            "wod <count> [<n=10>] [rote] [a<x>] [d<x>] [e<x>] [t<x>]: roll n-again Storyteller dice and report successes",
            "'rote' applies the rote quality",
            "'eX' sets the exceptional success threshold to X (default 5; 0 will disable it)",
            "'aX' adds X successes ('a2' adds 2, etc)",
            "'dX' adds X extra successes only when a success is rolled (for weapon damage)",
            "'tX' sets the target number to X (default 8)",
        ],
    ),
    Command::new(
        "chance",
        dice::chance,
        &["chance: roll a Storyteller chance die (TN 10, 1 is dramatic failure)"],
    ),
    Command::new(
        "scion",
        dice::scion,
        &[
            "scion <count> [<n=10>] [a<x>] [e<x>] [t<x>]: roll n-again dice and report successes",
            "'aX' adds X successes ('a2' adds 2, etc)",
            "'eX' adds X extra successes only when a success is rolled (for enhancements)",
            "'tX' sets the target number to X (default 8)",
        ],
    ),
];

/// Build a registry of the built-in commands.
pub fn registry() -> Registry {
    Registry::new(COMMANDS.iter().copied())
}
