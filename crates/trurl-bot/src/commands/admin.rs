//! Help, channel membership, shutdown and privilege reporting.

use crate::dispatch::Context;
use crate::error::{CommandResult, Tier};

/// `help [name]`: list the commands, or print one command's help lines.
pub fn help(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(0, Some(1))?;

    let lines: Vec<String> = match ctx.params.first().and_then(|name| ctx.registry.get(name)) {
        Some(command) => command.help.iter().map(|l| l.to_string()).collect(),
        None => {
            let marker = ctx.config.command_marker;
            let names = ctx
                .registry
                .commands()
                .iter()
                .map(|c| format!("{marker}{}", c.name))
                .collect::<Vec<_>>()
                .join(", ");
            vec!["I know these commands:".to_string(), names]
        }
    };

    for line in &lines {
        ctx.reply(line);
    }
    Ok(())
}

/// `join <channel>`: admin only.
pub fn join(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(1, None)?;
    ctx.require(Tier::Admin)?;

    let channel = &ctx.params[0];
    tracing::info!(sender = %ctx.sender.name, channel = %channel, "joining channel");
    ctx.transport.join(channel);
    Ok(())
}

/// `leave <channel>`: admin only.
pub fn leave(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.check_params(1, None)?;
    ctx.require(Tier::Admin)?;

    let channel = &ctx.params[0];
    tracing::info!(sender = %ctx.sender.name, channel = %channel, "leaving channel");
    ctx.transport.leave(channel);
    Ok(())
}

/// `quit`: owner only. Asks the transport to stop the service.
pub fn quit(ctx: &mut Context<'_>) -> CommandResult<()> {
    ctx.require(Tier::Owner)?;

    tracing::info!(sender = %ctx.sender.name, "stop requested");
    ctx.transport.request_stop(&ctx.config.quit_message);
    Ok(())
}

/// `rights`: report the sender's tier.
pub fn rights(ctx: &mut Context<'_>) -> CommandResult<()> {
    let text = match ctx.privileges.tier(&ctx.sender.name) {
        Tier::Owner => "you are an owner, and may execute any command".to_string(),
        Tier::Admin => format!(
            "you are an admin, and may execute any command except {}quit",
            ctx.config.command_marker
        ),
        Tier::Anyone => "you have no rights".to_string(),
    };
    ctx.reply(&text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use crate::BotConfig;
    use crate::dispatch::{Dispatch, Dispatcher};
    use crate::error::{CommandError, Tier};
    use crate::testing::{Outbound, RecordingTransport, channel_message};
    use trurl_dice::testing::SequenceSource;

    fn run(sender: &str, line: &str) -> (Dispatch, RecordingTransport) {
        let config = BotConfig::default()
            .with_owner("Klapaucius")
            .with_admin("Trurl");
        let mut dispatcher = Dispatcher::with_rng(config, SequenceSource::new(vec![]));
        let mut transport = RecordingTransport::default();
        let result = dispatcher.dispatch(&channel_message(sender, "#aurora", line), &mut transport);
        (result, transport)
    }

    #[test]
    fn help_lists_every_command() {
        let (_, t) = run("gargantius", "!help");
        insta::assert_snapshot!(t.texts().join("\n"), @r"
        I know these commands:
        !help, !join, !leave, !quit, !rights, !roll, !fate, !wod, !chance, !scion
        ");
    }

    #[test]
    fn help_for_one_command() {
        let (_, t) = run("gargantius", "!help ROLL");
        insta::assert_snapshot!(t.texts().join("\n"), @r"
        roll <count> <sides>: roll dice and sum them
        roll <count> <sides> <target>: roll dice and test against target numbers
        ");
    }

    #[test]
    fn help_for_an_unknown_command_lists_everything() {
        let (_, unknown) = run("gargantius", "!help dance");
        let (_, plain) = run("gargantius", "!help");
        assert_eq!(unknown.sent, plain.sent);
    }

    #[test]
    fn help_takes_at_most_one_name() {
        let (result, _) = run("gargantius", "!help roll wod");
        assert_eq!(
            result,
            Dispatch::Failed(CommandError::ParameterCount {
                min: 0,
                max: Some(1)
            })
        );
    }

    #[test]
    fn admins_join_and_leave() {
        let (result, t) = run("trurl", "!join #au-ooc");
        assert_eq!(result, Dispatch::Handled);
        assert_eq!(t.sent, vec![Outbound::Join("#au-ooc".to_string())]);

        let (_, t) = run("TRURL", "!leave #au-ooc");
        assert_eq!(t.sent, vec![Outbound::Leave("#au-ooc".to_string())]);
    }

    #[test]
    fn owner_passes_the_admin_gate() {
        let (result, _) = run("klapaucius", "!join #au-ooc");
        assert_eq!(result, Dispatch::Handled);
    }

    #[test]
    fn others_cannot_join() {
        let (result, t) = run("gargantius", "!join #au-ooc");
        assert_eq!(
            result,
            Dispatch::Failed(CommandError::InsufficientPrivilege {
                required: Tier::Admin
            })
        );
        assert_eq!(t.texts(), vec!["command !join requires admin"]);
    }

    #[test]
    fn join_needs_a_channel() {
        let (_, t) = run("trurl", "!join");
        assert_eq!(
            t.texts(),
            vec!["command !join takes 1 param(s) - try !help join"]
        );
    }

    #[test]
    fn owner_quits_with_the_configured_message() {
        let (result, t) = run("Klapaucius", "!quit");
        assert_eq!(result, Dispatch::Handled);
        assert_eq!(t.stopped.as_deref(), Some(crate::config::DEFAULT_QUIT_MESSAGE));
    }

    #[test]
    fn admins_cannot_quit() {
        let (_, t) = run("trurl", "!quit");
        assert!(t.stopped.is_none());
        assert_eq!(t.texts(), vec!["command !quit requires owner"]);
    }

    #[test]
    fn rights_by_tier() {
        let (_, t) = run("klapaucius", "!rights");
        assert_eq!(t.texts(), vec!["you are an owner, and may execute any command"]);
        let (_, t) = run("trurl", "!rights");
        assert_eq!(
            t.texts(),
            vec!["you are an admin, and may execute any command except !quit"]
        );
        let (_, t) = run("gargantius", "!rights extra words");
        assert_eq!(t.texts(), vec!["you have no rights"]);
    }

    #[test]
    fn rights_names_quit_with_the_configured_marker() {
        let config = BotConfig {
            command_marker: '.',
            ..BotConfig::default().with_admin("Trurl")
        };
        let mut dispatcher = Dispatcher::with_rng(config, SequenceSource::new(vec![]));
        let mut t = RecordingTransport::default();
        dispatcher.dispatch(&channel_message("trurl", "#aurora", ".rights"), &mut t);
        assert_eq!(
            t.texts(),
            vec!["you are an admin, and may execute any command except .quit"]
        );
    }
}
