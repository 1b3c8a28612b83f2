//! Containment check modes

use crate::error::RoleError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How a multi-role spec is combined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CheckMode {
    /// At least one requested role must be held
    Any,
    /// Every requested role must be held
    All,
}

impl FromStr for CheckMode {
    type Err = RoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("any") {
            Ok(CheckMode::Any)
        } else if s.eq_ignore_ascii_case("all") {
            Ok(CheckMode::All)
        } else {
            Err(RoleError::InvalidMode(s.to_string()))
        }
    }
}

impl fmt::Display for CheckMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckMode::Any => write!(f, "ANY"),
            CheckMode::All => write!(f, "ALL"),
        }
    }
}
