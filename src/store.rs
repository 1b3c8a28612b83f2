//! Role store trait and implementations
//!
//! The store is the persistence collaborator: it owns the role table and the
//! membership join table and reproduces their constraints. Everything above
//! it (repository, membership manager, evaluator) is store-agnostic.

use crate::error::Result;
use crate::types::{Membership, Role, RoleId};
use async_trait::async_trait;

pub mod memory;

pub use memory::MemoryRoleStore;

/// Role store trait
///
/// # Contract
///
/// * `add_membership` is atomic and enforces (principal, role) uniqueness:
///   inserting an edge that already exists is a successful no-op reported as
///   `Ok(false)`, so callers never need to serialize attaches themselves.
/// * `memberships` returns a consistent snapshot in edge-creation order; it
///   never observes a partially-written edge.
/// * Each operation is a single store call; a cancelled call leaves no
///   partial state behind.
/// * Failures surface as [`RoleError::StoreUnavailable`]; this crate never
///   retries or swallows them.
///
/// [`RoleError::StoreUnavailable`]: crate::error::RoleError::StoreUnavailable
#[async_trait]
pub trait RoleStore: Send + Sync {
    /// Get a role by numeric id
    async fn role_by_id(&self, id: RoleId) -> Result<Option<Role>>;

    /// Get a role by exact slug match
    ///
    /// Callers are expected to pass the normalized (lower-case) form; the
    /// store itself does not fold case.
    async fn role_by_slug(&self, slug: &str) -> Result<Option<Role>>;

    /// List all roles in ascending id order
    async fn roles(&self) -> Result<Vec<Role>>;

    /// List all roles ordered by level descending, ties broken by ascending id
    async fn roles_by_level(&self) -> Result<Vec<Role>>;

    /// Create a membership edge; `Ok(false)` if it already existed
    async fn add_membership(&self, principal: &str, role_id: RoleId) -> Result<bool>;

    /// Remove a membership edge; `Ok(false)` if it was not present
    async fn remove_membership(&self, principal: &str, role_id: RoleId) -> Result<bool>;

    /// Remove every membership edge for a principal, returning how many
    async fn clear_memberships(&self, principal: &str) -> Result<usize>;

    /// Snapshot of a principal's membership edges in creation order
    async fn memberships(&self, principal: &str) -> Result<Vec<Membership>>;
}
