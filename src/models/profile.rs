use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{ModelError, Plan};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    #[default]
    User,
    Admin,
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            "super_admin" => Ok(Role::SuperAdmin),
            _ => Err(ModelError::UnknownRole(s.to_string())),
        }
    }
}

/// Profile record as the account service hands it over.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub plan: Option<String>,
    pub role: Option<String>,
    #[serde(default)]
    pub super_admin: bool,
}

impl UserProfile {
    /// Resolve the profile into the context every entitlement query runs against.
    ///
    /// A missing plan means free. An unknown plan also means free but is
    /// reported, since it points at bad account data. Unknown roles get the
    /// least privileged role.
    pub fn context(&self) -> EntitlementContext {
        let plan = match self.plan.as_deref() {
            None | Some("") => Plan::Free,
            Some(raw) => raw.parse().unwrap_or_else(|err: ModelError| {
                tracing::warn!(plan = %raw, error = %err, "Unrecognized plan on profile, falling back to free");
                Plan::Free
            }),
        };

        let role = if self.super_admin {
            Role::SuperAdmin
        } else {
            match self.role.as_deref() {
                None => Role::User,
                Some(raw) => raw.parse().unwrap_or_else(|err: ModelError| {
                    tracing::warn!(role = %raw, error = %err, "Unrecognized role on profile, treating as user");
                    Role::User
                }),
            }
        };

        EntitlementContext { plan, role }
    }
}

/// Who is asking. Resolved once per request and never mutated afterwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementContext {
    pub plan: Plan,
    pub role: Role,
}

impl EntitlementContext {
    pub fn new(plan: Plan, role: Role) -> Self {
        Self { plan, role }
    }

    /// Privileged callers pass every plan gate. This is the only place the
    /// bypass is decided.
    pub fn is_privileged(&self) -> bool {
        self.role == Role::SuperAdmin
    }

    /// Whether this caller may use something gated behind `required`.
    /// `None` means the thing is not gated at all.
    pub fn satisfies(&self, required: Option<Plan>) -> bool {
        match required {
            None => true,
            Some(_) if self.is_privileged() => true,
            Some(required) => self.plan.at_least(required),
        }
    }
}
