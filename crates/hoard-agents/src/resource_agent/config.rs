// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Settings for the [`ResourceManager`](super::ResourceManager).

use anyhow::{Context, Result};
use hoard_core::resource::ResourceType;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunables of the resource manager.
///
/// Missing fields fall back to their defaults, so an empty RON struct `()` is a
/// valid configuration.
///
/// ```
/// use hoard_agents::ManagerConfig;
/// use hoard_core::resource::ResourceType;
///
/// let config = ManagerConfig::from_ron_str("(sync_types: [Sound, Custom(\"music\")])").unwrap();
/// assert!(config.requires_sync(&ResourceType::Custom("music".into())));
/// assert!(config.track_initial_phase);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ManagerConfig {
    /// Types whose loads are routed through the synchronous load queue.
    pub sync_types: Vec<ResourceType>,
    /// When `false`, loads are never counted and phase completion never fires.
    pub track_initial_phase: bool,
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            sync_types: vec![ResourceType::Sound],
            track_initial_phase: true,
        }
    }
}

impl ManagerConfig {
    /// Parses a configuration from RON text.
    pub fn from_ron_str(text: &str) -> Result<Self> {
        ron::from_str(text).context("Failed to parse resource manager configuration")
    }

    /// Reads and parses a RON configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read configuration file {}", path.display()))?;
        Self::from_ron_str(&text)
            .with_context(|| format!("Invalid configuration in {}", path.display()))
    }

    /// Returns `true` if loads of `kind` must be serialized.
    pub fn requires_sync(&self, kind: &ResourceType) -> bool {
        self.sync_types.contains(kind)
    }
}
