//! Role spec parsing and matching

use crate::types::{Role, RoleId};

/// A single role matcher inside a spec
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoleMatch {
    /// Match a held role by numeric id
    Id(RoleId),
    /// Match a held role by slug
    Slug(String),
}

impl RoleMatch {
    /// Classify one token: trimmed, purely numeric tokens match by id,
    /// everything else by slug; empty tokens are dropped
    fn from_token(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            return None;
        }

        match token.parse::<RoleId>() {
            Ok(id) => Some(RoleMatch::Id(id)),
            Err(_) => Some(RoleMatch::Slug(token.to_string())),
        }
    }

    /// Does this matcher match the given role?
    ///
    /// Slug comparison is case-sensitive against the stored slug.
    pub fn matches(&self, role: &Role) -> bool {
        self.matches_with(role, false)
    }

    pub(crate) fn matches_with(&self, role: &Role, fold_case: bool) -> bool {
        match self {
            RoleMatch::Id(id) => role.id == *id,
            RoleMatch::Slug(slug) => {
                if fold_case {
                    role.slug.eq_ignore_ascii_case(slug)
                } else {
                    role.slug == *slug
                }
            }
        }
    }
}

/// A parsed set of role matchers for containment checks
///
/// A single string splits on `,` and `|` with tokens trimmed and empty
/// tokens dropped; collection elements are taken as one token each.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RoleSpec {
    matchers: Vec<RoleMatch>,
}

impl RoleSpec {
    /// Parse a delimited spec string, e.g. `"admin|editor"` or `"admin, 3"`
    pub fn parse(input: &str) -> Self {
        input
            .split([',', '|'])
            .filter_map(RoleMatch::from_token)
            .collect()
    }

    /// True when the spec has no matchers
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }

    /// The individual matchers
    pub fn matchers(&self) -> &[RoleMatch] {
        &self.matchers
    }
}

impl FromIterator<RoleMatch> for RoleSpec {
    fn from_iter<I: IntoIterator<Item = RoleMatch>>(iter: I) -> Self {
        Self {
            matchers: iter.into_iter().collect(),
        }
    }
}

impl From<&str> for RoleSpec {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<String> for RoleSpec {
    fn from(input: String) -> Self {
        Self::parse(&input)
    }
}

impl From<RoleId> for RoleSpec {
    fn from(id: RoleId) -> Self {
        Self {
            matchers: vec![RoleMatch::Id(id)],
        }
    }
}

impl From<&[&str]> for RoleSpec {
    fn from(tokens: &[&str]) -> Self {
        tokens
            .iter()
            .copied()
            .filter_map(RoleMatch::from_token)
            .collect()
    }
}

impl From<Vec<&str>> for RoleSpec {
    fn from(tokens: Vec<&str>) -> Self {
        Self::from(tokens.as_slice())
    }
}

impl From<Vec<String>> for RoleSpec {
    fn from(tokens: Vec<String>) -> Self {
        tokens
            .iter()
            .map(String::as_str)
            .filter_map(RoleMatch::from_token)
            .collect()
    }
}

impl From<Vec<RoleId>> for RoleSpec {
    fn from(ids: Vec<RoleId>) -> Self {
        ids.into_iter().map(RoleMatch::Id).collect()
    }
}
