//! Owner and admin privilege checks.

use crate::error::{CommandError, CommandResult, Tier};

/// The fixed owner and admin identities, compared case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct Privileges {
    owner: Option<String>,
    admins: Vec<String>,
}

impl Privileges {
    /// Create privileges from an optional owner and a list of admins.
    pub fn new<I, S>(owner: Option<&str>, admins: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            owner: owner.map(normalize),
            admins: admins.into_iter().map(|a| normalize(a.as_ref())).collect(),
        }
    }

    /// The tier of `identity`. The owner outranks the admin list.
    pub fn tier(&self, identity: &str) -> Tier {
        let identity = normalize(identity);
        if self.owner.as_deref() == Some(identity.as_str()) {
            Tier::Owner
        } else if self.admins.contains(&identity) {
            Tier::Admin
        } else {
            Tier::Anyone
        }
    }

    /// Fail with [`CommandError::InsufficientPrivilege`] unless `identity` holds `required`.
    pub fn require(&self, identity: &str, required: Tier) -> CommandResult<()> {
        if self.tier(identity) >= required {
            Ok(())
        } else {
            tracing::debug!(identity, %required, "privilege check failed");
            Err(CommandError::InsufficientPrivilege { required })
        }
    }
}

fn normalize(identity: &str) -> String {
    identity.trim().to_lowercase()
}
