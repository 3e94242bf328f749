//! Error types for command handling.

use std::num::ParseIntError;

use thiserror::Error;
use trurl_dice::DiceError;

/// Privilege tiers, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Tier {
    /// Any sender.
    Anyone,
    /// A configured admin.
    Admin,
    /// The configured owner.
    Owner,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Anyone => write!(f, "anyone"),
            Self::Admin => write!(f, "admin"),
            Self::Owner => write!(f, "owner"),
        }
    }
}

/// Result type for command handlers.
pub type CommandResult<T> = Result<T, CommandError>;

/// Errors a command handler can return.
///
/// The first three variants are domain errors: expected misuse that is
/// reported back to the sender. [`CommandError::Unexpected`] covers
/// everything else.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    /// The number of parameters is outside the accepted range.
    #[error("wrong number of parameters (min {min}, max {max:?})")]
    ParameterCount {
        /// Fewest accepted parameters.
        min: usize,
        /// Most accepted parameters; `None` for no upper bound.
        max: Option<usize>,
    },

    /// The sender's tier is too low.
    #[error("requires {required}")]
    InsufficientPrivilege {
        /// The tier the command needs.
        required: Tier,
    },

    /// A bound on dice, sides, rerolls or explode threshold was violated.
    #[error("exceeded permitted {limit} (max {max})")]
    LimitExceeded {
        /// Name of the violated limit.
        limit: &'static str,
        /// The bound that applies.
        max: u32,
    },

    /// Anything else, such as a malformed number.
    #[error("{0}")]
    Unexpected(String),
}

impl CommandError {
    /// Returns true for the recoverable domain errors.
    pub fn is_domain(&self) -> bool {
        !matches!(self, Self::Unexpected(_))
    }

    /// The one-line notice shown to the sender for a failure of `command`.
    pub fn notice(&self, command: &str, marker: char) -> String {
        match self {
            Self::ParameterCount { min: 0, max: Some(0) } => {
                format!("command {marker}{command} takes no params - try {marker}help {command}")
            }
            Self::ParameterCount { min, max: None } => format!(
                "command {marker}{command} takes {min} param(s) - try {marker}help {command}"
            ),
            Self::ParameterCount { min, max: Some(max) } => format!(
                "command {marker}{command} takes {min} to {max} param(s) - try {marker}help {command}"
            ),
            Self::InsufficientPrivilege { required } => {
                format!("command {marker}{command} requires {required}")
            }
            Self::LimitExceeded { .. } => self.to_string(),
            Self::Unexpected(detail) => format!("Error processing '{command}' command: {detail}"),
        }
    }
}

impl From<DiceError> for CommandError {
    fn from(err: DiceError) -> Self {
        match err {
            DiceError::LimitExceeded { limit, max } => Self::LimitExceeded { limit, max },
            other => Self::Unexpected(other.to_string()),
        }
    }
}

impl From<ParseIntError> for CommandError {
    fn from(err: ParseIntError) -> Self {
        Self::Unexpected(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tier_order() {
        assert!(Tier::Owner > Tier::Admin);
        assert!(Tier::Admin > Tier::Anyone);
    }

    #[test]
    fn parameter_notices() {
        let none = CommandError::ParameterCount {
            min: 0,
            max: Some(0),
        };
        assert_eq!(
            none.notice("fate", '!'),
            "command !fate takes no params - try !help fate"
        );

        let open = CommandError::ParameterCount { min: 1, max: None };
        assert_eq!(
            open.notice("wod", '!'),
            "command !wod takes 1 param(s) - try !help wod"
        );

        let range = CommandError::ParameterCount {
            min: 2,
            max: Some(3),
        };
        assert_eq!(
            range.notice("roll", '!'),
            "command !roll takes 2 to 3 param(s) - try !help roll"
        );
    }

    #[test]
    fn privilege_notice() {
        let err = CommandError::InsufficientPrivilege {
            required: Tier::Owner,
        };
        assert_eq!(err.notice("quit", '!'), "command !quit requires owner");
    }

    #[test]
    fn limit_notice_ignores_command() {
        let err = CommandError::LimitExceeded {
            limit: "dice",
            max: 100,
        };
        assert_eq!(err.notice("roll", '!'), "exceeded permitted dice (max 100)");
    }

    #[test]
    fn unexpected_notice() {
        let err: CommandError = "x".parse::<u32>().unwrap_err().into();
        assert!(!err.is_domain());
        assert_eq!(
            err.notice("roll", '!'),
            "Error processing 'roll' command: invalid digit found in string"
        );
    }

    #[test]
    fn dice_errors_convert() {
        assert_eq!(
            CommandError::from(DiceError::limit("sides", 10_000)),
            CommandError::LimitExceeded {
                limit: "sides",
                max: 10_000
            }
        );
        assert!(!CommandError::from(DiceError::InvalidDie { sides: 0 }).is_domain());
    }
}
