//! Operator roles, as recorded in the `team` table.

use serde::{Deserialize, Serialize};

/// Role of the signed-in operator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[default]
    Admin,
    SlotTech,
    /// Read-only access to the floor map.
    SystemSupport,
    Other(String),
}

impl Role {
    /// Returns true if the role may reposition machines.
    pub fn can_edit(&self) -> bool {
        !matches!(self, Role::SystemSupport)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::SlotTech => "Slot Tech",
            Role::SystemSupport => "System Support",
            Role::Other(name) => name,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "admin" => Role::Admin,
            "slot tech" => Role::SlotTech,
            "system support" => Role::SystemSupport,
            _ => Role::Other(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::from(value.to_string())
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_support_is_read_only() {
        assert!(!Role::from("System Support").can_edit());
        assert!(Role::from("admin").can_edit());
        assert!(Role::from("Floor Manager").can_edit());
    }

    #[test]
    fn test_role_serde_uses_plain_strings() {
        let role: Role = serde_json::from_str("\"Slot Tech\"").unwrap();
        assert_eq!(role, Role::SlotTech);
        assert_eq!(serde_json::to_string(&Role::SystemSupport).unwrap(), "\"System Support\"");
    }
}
