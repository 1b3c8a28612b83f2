//! # Roleset
//!
//! Role membership and evaluation engine with leveled, slug-addressed roles.
//!
//! ## Features
//!
//! - **Async-first design** using the Tokio runtime
//! - **Pluggable storage** behind the [`RoleStore`] trait, with an
//!   in-memory reference store for tests and embedding
//! - **Idempotent grants and revokes**: already-granted and already-revoked
//!   are successes, never errors
//! - **ANY / ALL containment checks** over comma- or pipe-separated role
//!   specs mixing slugs and numeric ids
//! - **Effective level**: the highest precedence level across a principal's
//!   current roles
//!
//! ## Example
//!
//! ```rust
//! use roleset::{
//!     AuthorizationEvaluator, CheckMode, MembershipManager, MemoryRoleStore, Role,
//!     RoleRepository,
//! };
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> roleset::Result<()> {
//!     let store = Arc::new(MemoryRoleStore::with_roles([
//!         Role::new(1, "admin", 10),
//!         Role::new(2, "editor", 5),
//!     ]));
//!
//!     let roles = RoleRepository::new(store.clone());
//!     let memberships = MembershipManager::new(store, roles);
//!     let evaluator = AuthorizationEvaluator::new(memberships.clone());
//!
//!     memberships.attach("user:alice", "editor").await?;
//!
//!     assert!(evaluator.has("user:alice", "admin|editor", CheckMode::Any).await?);
//!     assert_eq!(evaluator.effective_level("user:alice").await?, 5);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod evaluator;
pub mod membership;
pub mod repository;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{Result, RoleError};
pub use evaluator::{AuthorizationEvaluator, CheckMode, EvaluatorConfig, RoleMatch, RoleSpec};
pub use membership::MembershipManager;
pub use repository::RoleRepository;
pub use store::{MemoryRoleStore, RoleStore};
pub use types::{Membership, PrincipalId, Role, RoleId, RoleRef};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
