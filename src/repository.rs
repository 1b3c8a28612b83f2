//! Read-only role lookup and reference resolution

use crate::error::{Result, RoleError};
use crate::store::RoleStore;
use crate::types::{Role, RoleId, RoleRef};
use std::sync::Arc;

/// Read-only view over the role table
///
/// Slug lookups normalize their input to lower-case before the exact store
/// match, so `find_by_slug("Admin")` finds a role seeded as `admin`. No
/// method mutates anything.
#[derive(Clone)]
pub struct RoleRepository {
    store: Arc<dyn RoleStore>,
}

impl RoleRepository {
    /// Create a repository over the given store
    pub fn new(store: Arc<dyn RoleStore>) -> Self {
        Self { store }
    }

    /// Find a role by numeric id
    pub async fn find_by_id(&self, id: RoleId) -> Result<Option<Role>> {
        self.store.role_by_id(id).await
    }

    /// Find a role by slug, case-insensitively
    pub async fn find_by_slug(&self, slug: &str) -> Result<Option<Role>> {
        self.store.role_by_slug(&slug.to_lowercase()).await
    }

    /// List all roles in ascending id order
    pub async fn list(&self) -> Result<Vec<Role>> {
        self.store.roles().await
    }

    /// List all roles ordered by level descending, ties broken by ascending id
    pub async fn list_by_level(&self) -> Result<Vec<Role>> {
        self.store.roles_by_level().await
    }

    /// Resolve a role reference to a stored role
    ///
    /// An id or slug that does not resolve fails with
    /// [`RoleError::RoleNotFound`] carrying the identifier exactly as it was
    /// supplied. An already-resolved [`Role`] passes through untouched.
    pub async fn resolve(&self, role: impl Into<RoleRef>) -> Result<Role> {
        match role.into() {
            RoleRef::Resolved(role) => Ok(role),
            RoleRef::Id(id) => self
                .find_by_id(id)
                .await?
                .ok_or_else(|| RoleError::RoleNotFound(id.to_string())),
            RoleRef::Slug(slug) => match self.find_by_slug(&slug).await? {
                Some(role) => Ok(role),
                None => Err(RoleError::RoleNotFound(slug)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryRoleStore;

    fn repository() -> RoleRepository {
        let store = Arc::new(MemoryRoleStore::with_roles([
            Role::new(1, "admin", 10),
            Role::new(2, "editor", 5),
            Role::new(3, "viewer", 1),
        ]));
        RoleRepository::new(store)
    }

    #[tokio::test]
    async fn test_find_by_slug_is_case_insensitive() {
        let repo = repository();

        let role = repo.find_by_slug("ADMIN").await.unwrap();
        assert_eq!(role.unwrap().id, 1);

        let role = repo.find_by_slug("Editor").await.unwrap();
        assert_eq!(role.unwrap().id, 2);

        assert!(repo.find_by_slug("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_ordering() {
        let repo = repository();

        let ids: Vec<RoleId> = repo.list().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);

        let roles = repo.list_by_level().await.unwrap();
        let by_level: Vec<&str> = roles.iter().map(|r| r.slug.as_str()).collect();
        assert_eq!(by_level, vec!["admin", "editor", "viewer"]);
    }

    #[tokio::test]
    async fn test_resolve_by_id_and_slug() {
        let repo = repository();

        assert_eq!(repo.resolve(2).await.unwrap().slug, "editor");
        assert_eq!(repo.resolve("Viewer").await.unwrap().id, 3);
    }

    #[tokio::test]
    async fn test_resolve_passes_resolved_roles_through() {
        let repo = repository();

        // Not in the store at all; a resolved role is trusted as-is
        let external = Role::new(42, "external", 7);
        assert_eq!(repo.resolve(external.clone()).await.unwrap(), external);
    }

    #[tokio::test]
    async fn test_resolve_miss_keeps_identifier_verbatim() {
        let repo = repository();

        let err = repo.resolve("Ghost").await.unwrap_err();
        assert_eq!(err, RoleError::RoleNotFound("Ghost".to_string()));

        let err = repo.resolve(99).await.unwrap_err();
        assert_eq!(err, RoleError::RoleNotFound("99".to_string()));
    }
}
