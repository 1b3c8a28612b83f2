//! Core role and membership types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique role identifier, assigned by the administrative process that owns
/// role lifecycle
pub type RoleId = i64;

/// Principal identifier (e.g., "user:alice@example.com", "agent:shopping-bot")
pub type PrincipalId = String;

/// A named role with a precedence level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Numeric identifier
    pub id: RoleId,

    /// Human-facing identifier, unique across roles and matched
    /// case-insensitively on lookup (seeded lower-case by convention)
    pub slug: String,

    /// Precedence level; a higher value outranks a lower one
    pub level: i32,
}

impl Role {
    /// Create a new role
    pub fn new(id: RoleId, slug: impl Into<String>, level: i32) -> Self {
        Self {
            id,
            slug: slug.into(),
            level,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.slug)
    }
}

/// Membership edge linking a principal to a role
///
/// At most one edge exists per (principal, role) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Membership {
    /// Principal holding the role
    pub principal_id: PrincipalId,

    /// Role held
    pub role_id: RoleId,

    /// When the edge was created
    pub created_at: DateTime<Utc>,
}

impl Membership {
    /// Create a new membership edge stamped with the current time
    pub fn new(principal_id: impl Into<PrincipalId>, role_id: RoleId) -> Self {
        Self {
            principal_id: principal_id.into(),
            role_id,
            created_at: Utc::now(),
        }
    }
}

/// Reference to a role for attach/detach calls
///
/// Ids and slugs are resolved against the repository before any mutation;
/// an already-resolved [`Role`] passes through as-is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleRef {
    /// Reference by numeric id
    Id(RoleId),
    /// Reference by slug (looked up case-insensitively)
    Slug(String),
    /// Already-resolved role
    Resolved(Role),
}

impl From<RoleId> for RoleRef {
    fn from(id: RoleId) -> Self {
        RoleRef::Id(id)
    }
}

impl From<&str> for RoleRef {
    fn from(slug: &str) -> Self {
        RoleRef::Slug(slug.to_string())
    }
}

impl From<String> for RoleRef {
    fn from(slug: String) -> Self {
        RoleRef::Slug(slug)
    }
}

impl From<Role> for RoleRef {
    fn from(role: Role) -> Self {
        RoleRef::Resolved(role)
    }
}

impl From<&Role> for RoleRef {
    fn from(role: &Role) -> Self {
        RoleRef::Resolved(role.clone())
    }
}

impl fmt::Display for RoleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoleRef::Id(id) => write!(f, "{}", id),
            RoleRef::Slug(slug) => write!(f, "{}", slug),
            RoleRef::Resolved(role) => write!(f, "{}", role.slug),
        }
    }
}
