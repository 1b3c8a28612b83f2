//! Error types for the role engine

use thiserror::Error;

/// Role engine errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// Role reference did not resolve to a stored role
    #[error("Role \"{0}\" does not exist")]
    RoleNotFound(String),

    /// Check mode string was neither ANY nor ALL
    #[error("Invalid check mode \"{0}\": expected \"any\" or \"all\"")]
    InvalidMode(String),

    /// Principal holds no roles, so the effective level is undefined
    #[error("Principal \"{0}\" has no role assigned")]
    NoRoleAssigned(String),

    /// Persistence collaborator failed
    #[error("Role store unavailable: {0}")]
    StoreUnavailable(String),
}

/// Result type for role operations
pub type Result<T> = std::result::Result<T, RoleError>;
