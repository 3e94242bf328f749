//! Command parsing for chat input.

/// A chat line split into a command name and its parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The command name as typed.
    pub name: String,
    /// Positional parameters.
    pub params: Vec<String>,
}

/// Parse a chat line into a command.
///
/// Returns `None` unless the line starts with `marker` followed by a
/// command name. Parameters are split on whitespace until one starts with
/// `escape`; from there the rest of the line is a single parameter, with
/// `escape` stripped from the front of each space-separated piece.
pub fn parse_command(line: &str, marker: char, escape: char) -> Option<ParsedCommand> {
    let body = line.strip_prefix(marker)?;
    if body.starts_with(char::is_whitespace) {
        return None;
    }

    let tokens = tokenize(body, escape);
    let (name, params) = tokens.split_first()?;
    Some(ParsedCommand {
        name: name.clone(),
        params: params.to_vec(),
    })
}

fn tokenize(body: &str, escape: char) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut rest = body.trim_end();

    loop {
        rest = rest.trim_start();
        if rest.is_empty() {
            break;
        }

        if !tokens.is_empty() && rest.starts_with(escape) {
            let combined = rest
                .split(' ')
                .map(|piece| piece.trim_start_matches(escape))
                .collect::<Vec<_>>()
                .join(" ");
            tokens.push(combined);
            break;
        }

        let end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        let (token, tail) = rest.split_at(end);
        tokens.push(token.to_string());
        rest = tail;
    }

    tokens
}
