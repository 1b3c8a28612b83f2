//! In-memory role store implementation

use crate::error::Result;
use crate::store::RoleStore;
use crate::types::{Membership, Role, RoleId};
use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-memory role store
///
/// A single lock covers both tables, so membership reads are consistent
/// snapshots and edge creation checks uniqueness atomically. Intended for
/// tests and embedded use. The seeding surface (`insert_role`,
/// `remove_role`, `with_roles`) stands in for the external administrative
/// process that owns role lifecycle.
pub struct MemoryRoleStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    roles: HashMap<RoleId, Role>,
    memberships: Vec<Membership>,
}

impl MemoryRoleStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner::default()),
        }
    }

    /// Create a store seeded with the given roles
    pub fn with_roles(roles: impl IntoIterator<Item = Role>) -> Self {
        let roles = roles.into_iter().map(|role| (role.id, role)).collect();
        Self {
            inner: RwLock::new(Inner {
                roles,
                memberships: Vec::new(),
            }),
        }
    }

    /// Insert or replace a role
    ///
    /// Slug uniqueness is the seeder's responsibility, as it is the schema's
    /// in a persistent store. Seed slugs lower-case so normalized lookups
    /// find them.
    pub async fn insert_role(&self, role: Role) {
        let mut inner = self.inner.write().await;
        inner.roles.insert(role.id, role);
    }

    /// Remove a role, leaving any membership edges that point at it dangling
    pub async fn remove_role(&self, id: RoleId) -> Option<Role> {
        let mut inner = self.inner.write().await;
        inner.roles.remove(&id)
    }
}

impl Default for MemoryRoleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RoleStore for MemoryRoleStore {
    async fn role_by_id(&self, id: RoleId) -> Result<Option<Role>> {
        let inner = self.inner.read().await;
        Ok(inner.roles.get(&id).cloned())
    }

    async fn role_by_slug(&self, slug: &str) -> Result<Option<Role>> {
        let inner = self.inner.read().await;
        Ok(inner.roles.values().find(|role| role.slug == slug).cloned())
    }

    async fn roles(&self) -> Result<Vec<Role>> {
        let inner = self.inner.read().await;
        let mut all: Vec<Role> = inner.roles.values().cloned().collect();
        all.sort_by_key(|role| role.id);
        Ok(all)
    }

    async fn roles_by_level(&self) -> Result<Vec<Role>> {
        let inner = self.inner.read().await;
        let mut all: Vec<Role> = inner.roles.values().cloned().collect();
        all.sort_by(|a, b| b.level.cmp(&a.level).then(a.id.cmp(&b.id)));
        Ok(all)
    }

    async fn add_membership(&self, principal: &str, role_id: RoleId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let exists = inner
            .memberships
            .iter()
            .any(|edge| edge.principal_id == principal && edge.role_id == role_id);
        if exists {
            return Ok(false);
        }

        inner.memberships.push(Membership::new(principal, role_id));
        Ok(true)
    }

    async fn remove_membership(&self, principal: &str, role_id: RoleId) -> Result<bool> {
        let mut inner = self.inner.write().await;
        let before = inner.memberships.len();
        inner
            .memberships
            .retain(|edge| !(edge.principal_id == principal && edge.role_id == role_id));
        Ok(inner.memberships.len() < before)
    }

    async fn clear_memberships(&self, principal: &str) -> Result<usize> {
        let mut inner = self.inner.write().await;
        let before = inner.memberships.len();
        inner.memberships.retain(|edge| edge.principal_id != principal);
        Ok(before - inner.memberships.len())
    }

    async fn memberships(&self, principal: &str) -> Result<Vec<Membership>> {
        let inner = self.inner.read().await;
        Ok(inner
            .memberships
            .iter()
            .filter(|edge| edge.principal_id == principal)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded() -> MemoryRoleStore {
        MemoryRoleStore::with_roles([
            Role::new(1, "admin", 10),
            Role::new(2, "editor", 5),
            Role::new(3, "viewer", 1),
        ])
    }

    #[tokio::test]
    async fn test_role_lookup() {
        let store = seeded();

        let admin = store.role_by_id(1).await.unwrap();
        assert_eq!(admin.unwrap().slug, "admin");
        assert!(store.role_by_id(99).await.unwrap().is_none());

        let editor = store.role_by_slug("editor").await.unwrap();
        assert_eq!(editor.unwrap().id, 2);
        // Exact match only; normalization happens above the store
        assert!(store.role_by_slug("Editor").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_roles_ordering() {
        let store = seeded();
        store.insert_role(Role::new(4, "auditor", 5)).await;

        let by_id: Vec<RoleId> = store.roles().await.unwrap().iter().map(|r| r.id).collect();
        assert_eq!(by_id, vec![1, 2, 3, 4]);

        // Level descending; the level-5 tie breaks by ascending id
        let by_level: Vec<RoleId> = store
            .roles_by_level()
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(by_level, vec![1, 2, 4, 3]);
    }

    #[tokio::test]
    async fn test_membership_uniqueness() {
        let store = seeded();

        assert!(store.add_membership("user:alice", 1).await.unwrap());
        assert!(!store.add_membership("user:alice", 1).await.unwrap());

        let edges = store.memberships("user:alice").await.unwrap();
        assert_eq!(edges.len(), 1);
        assert_eq!(edges[0].role_id, 1);
    }

    #[tokio::test]
    async fn test_remove_and_clear() {
        let store = seeded();
        store.add_membership("user:alice", 1).await.unwrap();
        store.add_membership("user:alice", 2).await.unwrap();
        store.add_membership("user:bob", 2).await.unwrap();

        assert!(store.remove_membership("user:alice", 1).await.unwrap());
        assert!(!store.remove_membership("user:alice", 1).await.unwrap());

        assert_eq!(store.clear_memberships("user:alice").await.unwrap(), 1);
        assert_eq!(store.clear_memberships("user:alice").await.unwrap(), 0);

        // Other principals untouched
        assert_eq!(store.memberships("user:bob").await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_memberships_keep_creation_order() {
        let store = seeded();
        store.add_membership("user:alice", 3).await.unwrap();
        store.add_membership("user:alice", 1).await.unwrap();
        store.add_membership("user:alice", 2).await.unwrap();

        let order: Vec<RoleId> = store
            .memberships("user:alice")
            .await
            .unwrap()
            .iter()
            .map(|e| e.role_id)
            .collect();
        assert_eq!(order, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_remove_role_leaves_edge_dangling() {
        let store = seeded();
        store.add_membership("user:alice", 2).await.unwrap();

        assert!(store.remove_role(2).await.is_some());
        assert!(store.role_by_id(2).await.unwrap().is_none());
        assert_eq!(store.memberships("user:alice").await.unwrap().len(), 1);
    }
}
