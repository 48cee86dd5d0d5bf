//! Scenario file loader.

use std::path::Path;

use anyhow::Context;

use crate::loaders::{LoadResult, read_file};
use crate::scenario::Scenario;

/// Loader for recorded encounter scenarios.
///
/// File format:
///
/// ```toml
/// [variables.scalars]
/// rotation = 3
///
/// [variables.lists]
/// party = ["1001", "1002", "1003", "1004", "1005", "1006", "1007", "1008"]
/// statuses = [1, 2, 3, 4, 5, 6, 7, 8]
///
/// [variables.maps.markers]
/// "4000" = 0
///
/// [[entities]]
/// id = "1001"
/// name = "Player One"
/// job = "WAR"
/// x = 100.0
/// y = 100.0
/// ```
pub struct ScenarioLoader;

impl ScenarioLoader {
    pub fn load(path: &Path) -> LoadResult<Scenario> {
        let content = read_file(path)?;
        Self::parse(&content).with_context(|| format!("in scenario {}", path.display()))
    }

    /// Parses scenario TOML and checks that every entity id is well formed.
    pub fn parse(content: &str) -> LoadResult<Scenario> {
        let scenario: Scenario = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse scenario TOML: {}", e))?;
        scenario
            .snapshots()
            .map_err(|e| anyhow::anyhow!("Invalid entity: {}", e))?;
        Ok(scenario)
    }
}
