//! Bump strategy trait.

use std::fmt;
use std::str::FromStr;

use czjira_commit::ParsedCommit;
use semver::Version;
use serde::{Deserialize, Serialize};

use super::Plugin;
use crate::PluginError;

/// Version increment.
///
/// Variants are declared from smallest to largest, so the derived ordering
/// ranks increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum BumpType {
    /// No version bump needed.
    None,
    /// Patch version bump (bug fixes).
    Patch,
    /// Minor version bump (new features).
    Minor,
    /// Major version bump (breaking changes).
    Major,
}

impl BumpType {
    /// Returns `version` with this increment applied.
    ///
    /// Pre-release and build metadata are dropped; [`BumpType::None`] keeps
    /// the version as is.
    #[must_use]
    pub fn apply(self, version: &Version) -> Version {
        match self {
            Self::Major => Version::new(version.major + 1, 0, 0),
            Self::Minor => Version::new(version.major, version.minor + 1, 0),
            Self::Patch => Version::new(version.major, version.minor, version.patch + 1),
            Self::None => version.clone(),
        }
    }
}

impl fmt::Display for BumpType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Major => write!(f, "major"),
            Self::Minor => write!(f, "minor"),
            Self::Patch => write!(f, "patch"),
            Self::None => write!(f, "none"),
        }
    }
}

/// Parses the bump-map notation: `MAJOR`, `MINOR` or `PATCH`, any case.
impl FromStr for BumpType {
    type Err = PluginError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_uppercase().as_str() {
            "MAJOR" => Ok(Self::Major),
            "MINOR" => Ok(Self::Minor),
            "PATCH" => Ok(Self::Patch),
            _ => Err(PluginError::IncorrectConfig(format!(
                "invalid increment `{value}`, expected one of MAJOR, MINOR, PATCH"
            ))),
        }
    }
}

/// Determines version bump type from parsed commits.
pub trait BumpStrategy: Plugin {
    /// Determines the bump type based on the given commits.
    fn determine(&self, commits: &[ParsedCommit]) -> BumpType;
}
