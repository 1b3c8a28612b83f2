//! Membership management: granting and revoking roles

use crate::error::Result;
use crate::repository::RoleRepository;
use crate::store::RoleStore;
use crate::types::{Role, RoleRef};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Grants and revokes role memberships for principals
///
/// Every mutation resolves its role reference through the injected
/// [`RoleRepository`] first, then applies the change as a single store call.
/// Operations are idempotent: attaching a role the principal already holds,
/// and detaching one it does not, are successes rather than errors.
#[derive(Clone)]
pub struct MembershipManager {
    store: Arc<dyn RoleStore>,
    roles: RoleRepository,
}

impl MembershipManager {
    /// Create a manager over the given store and role repository
    pub fn new(store: Arc<dyn RoleStore>, roles: RoleRepository) -> Self {
        Self { store, roles }
    }

    /// Grant a role to a principal
    ///
    /// Success leaves exactly one edge for the pair, whether or not it
    /// already existed; the store's uniqueness guarantee makes concurrent
    /// attaches of the same pair safe. An unresolvable reference fails with
    /// `RoleNotFound` before anything is written.
    pub async fn attach(&self, principal: &str, role: impl Into<RoleRef>) -> Result<()> {
        let role = self.roles.resolve(role).await?;
        let created = self.store.add_membership(principal, role.id).await?;

        if created {
            info!("Attached role '{}' to principal '{}'", role.slug, principal);
        } else {
            debug!("Principal '{}' already holds role '{}'", principal, role.slug);
        }

        Ok(())
    }

    /// Revoke a role from a principal
    ///
    /// An absent edge is a success no-op. The reference must still resolve:
    /// detaching a role that does not exist fails with `RoleNotFound`.
    pub async fn detach(&self, principal: &str, role: impl Into<RoleRef>) -> Result<()> {
        let role = self.roles.resolve(role).await?;
        let removed = self.store.remove_membership(principal, role.id).await?;

        if removed {
            info!("Detached role '{}' from principal '{}'", role.slug, principal);
        } else {
            debug!("Principal '{}' does not hold role '{}'", principal, role.slug);
        }

        Ok(())
    }

    /// Revoke every role from a principal, returning how many edges were
    /// removed
    ///
    /// A principal with nothing to remove is a valid, successful outcome.
    pub async fn detach_all(&self, principal: &str) -> Result<usize> {
        let removed = self.store.clear_memberships(principal).await?;
        info!("Detached {} role(s) from principal '{}'", removed, principal);
        Ok(removed)
    }

    /// Current roles of a principal, in attachment order
    ///
    /// Reads one consistent snapshot of the membership edges, then resolves
    /// each edge's role. Edges whose role was destroyed underneath them are
    /// skipped, mirroring join semantics.
    pub async fn current_roles(&self, principal: &str) -> Result<Vec<Role>> {
        let edges = self.store.memberships(principal).await?;

        let mut roles = Vec::with_capacity(edges.len());
        for edge in edges {
            match self.roles.find_by_id(edge.role_id).await? {
                Some(role) => roles.push(role),
                None => warn!(
                    "Membership of principal '{}' references missing role {}; skipping",
                    principal, edge.role_id
                ),
            }
        }

        Ok(roles)
    }
}
