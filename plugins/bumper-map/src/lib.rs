//! Bump-map driven bump strategy plugin.

use std::collections::BTreeMap;

use czjira_commit::ParsedCommit;
use czjira_plugin::{BumpStrategy, BumpType, Plugin};

/// Bump strategy that looks change types up in a bump map.
///
/// - Breaking changes → Major
/// - Otherwise the largest increment mapped for any change type
/// - Unmapped types → None
pub struct MapBumper {
    bump_map: BTreeMap<String, BumpType>,
}

impl MapBumper {
    /// Creates a bumper over the given change type → increment map.
    #[must_use]
    pub fn new(bump_map: BTreeMap<String, BumpType>) -> Self {
        Self { bump_map }
    }
}

impl Plugin for MapBumper {
    fn name(&self) -> &'static str {
        "bump-map"
    }

    fn version(&self) -> &'static str {
        env!("CARGO_PKG_VERSION")
    }

    fn description(&self) -> &'static str {
        "Determines version bump from a change type to increment map"
    }
}

impl BumpStrategy for MapBumper {
    fn determine(&self, commits: &[ParsedCommit]) -> BumpType {
        let mut bump = BumpType::None;

        for commit in commits {
            if commit.breaking {
                return BumpType::Major;
            }

            if let Some(mapped) = self.bump_map.get(&commit.change_type) {
                bump = bump.max(*mapped);
            }
        }

        bump
    }
}
