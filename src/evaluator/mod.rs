//! Role containment and level evaluation
//!
//! Stateless by design: every call reads a fresh snapshot of the
//! principal's roles through the membership manager, so a check observes
//! any attach or detach that completed before it. Nothing is cached
//! between calls.

pub mod mode;
pub mod spec;


pub use mode::CheckMode;
pub use spec::{RoleMatch, RoleSpec};

use crate::error::{Result, RoleError};
use crate::membership::MembershipManager;
use tracing::debug;

/// Evaluator configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluatorConfig {
    /// Fold ASCII case when matching slugs in containment checks
    ///
    /// Off by default: containment matching is case-sensitive against the
    /// stored slug even though repository lookups fold case. Turning this
    /// on unifies the two rules.
    pub case_insensitive_slugs: bool,
}

/// Answers role containment and precedence-level queries for a principal
#[derive(Clone)]
pub struct AuthorizationEvaluator {
    memberships: MembershipManager,
    config: EvaluatorConfig,
}

impl AuthorizationEvaluator {
    /// Create an evaluator with the default configuration
    pub fn new(memberships: MembershipManager) -> Self {
        Self::with_config(memberships, EvaluatorConfig::default())
    }

    /// Create an evaluator with an explicit configuration
    pub fn with_config(memberships: MembershipManager, config: EvaluatorConfig) -> Self {
        Self {
            memberships,
            config,
        }
    }

    /// Check role containment under the given mode
    ///
    /// ANY passes when at least one matcher matches a held role; ALL passes
    /// when every matcher does. An empty spec is false under ANY and
    /// vacuously true under ALL. A principal with no memberships simply
    /// holds no roles; that is not an error.
    pub async fn has(
        &self,
        principal: &str,
        spec: impl Into<RoleSpec>,
        mode: CheckMode,
    ) -> Result<bool> {
        let spec = spec.into();
        let held = self.memberships.current_roles(principal).await?;

        let fold = self.config.case_insensitive_slugs;
        let granted = match mode {
            CheckMode::Any => spec
                .matchers()
                .iter()
                .any(|matcher| held.iter().any(|role| matcher.matches_with(role, fold))),
            CheckMode::All => spec
                .matchers()
                .iter()
                .all(|matcher| held.iter().any(|role| matcher.matches_with(role, fold))),
        };

        debug!(
            "Containment check: principal='{}', mode={}, held={}, granted={}",
            principal,
            mode,
            held.len(),
            granted
        );

        Ok(granted)
    }

    /// Check role containment with the mode given as a string
    ///
    /// The mode matches `any`/`all` case-insensitively; anything else fails
    /// with `InvalidMode` before the principal's roles are read.
    pub async fn check(
        &self,
        principal: &str,
        spec: impl Into<RoleSpec>,
        mode: &str,
    ) -> Result<bool> {
        let mode: CheckMode = mode.parse()?;
        self.has(principal, spec, mode).await
    }

    /// Highest level across the principal's current roles
    ///
    /// Fails with `NoRoleAssigned` when the principal holds no roles; with
    /// none held the level is undefined rather than zero.
    pub async fn effective_level(&self, principal: &str) -> Result<i32> {
        let held = self.memberships.current_roles(principal).await?;

        held.iter()
            .map(|role| role.level)
            .max()
            .ok_or_else(|| RoleError::NoRoleAssigned(principal.to_string()))
    }
}
