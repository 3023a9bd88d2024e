//! Role-to-column mapping.

use serde::{Deserialize, Serialize};

/// A semantic meaning assigned to a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Contact display name.
    Name,
    /// Contact phone number.
    Phone,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Name => write!(f, "name"),
            Role::Phone => write!(f, "phone"),
        }
    }
}

/// Partial assignment of roles to column indices.
///
/// Indices are not validated here: anything out of range for a row is read
/// as "no value" by the consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mapping {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<usize>,
    /// Operator-chosen columns captured into a contact's extras.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extras: Vec<usize>,
}

impl Mapping {
    /// An empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name column.
    pub fn with_name(mut self, index: usize) -> Self {
        self.name = Some(index);
        self
    }

    /// Set the phone column.
    pub fn with_phone(mut self, index: usize) -> Self {
        self.phone = Some(index);
        self
    }

    /// Add an extra column.
    pub fn with_extra(mut self, index: usize) -> Self {
        self.extras.push(index);
        self
    }

    /// Column assigned to a built-in role.
    pub fn get(&self, role: Role) -> Option<usize> {
        match role {
            Role::Name => self.name,
            Role::Phone => self.phone,
        }
    }

    /// Assign a built-in role.
    pub fn set(&mut self, role: Role, index: Option<usize>) {
        match role {
            Role::Name => self.name = index,
            Role::Phone => self.phone = index,
        }
    }

    /// Overlay operator choices: every role set in `edits` replaces ours,
    /// and non-empty extras replace ours.
    pub fn overridden_by(&self, edits: &Mapping) -> Mapping {
        Mapping {
            name: edits.name.or(self.name),
            phone: edits.phone.or(self.phone),
            extras: if edits.extras.is_empty() {
                self.extras.clone()
            } else {
                edits.extras.clone()
            },
        }
    }

    /// Parse a mapping from JSON such as `{"name": 0, "phone": 1, "extras": [2]}`.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
