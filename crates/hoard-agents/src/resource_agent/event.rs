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

//! Lifecycle events published by the resource manager.

use hoard_core::resource::ResourceHandle;

/// A snapshot of the manager's counters taken when the initial phase completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSummary {
    /// Cumulative successful loads counted during the phase.
    pub num_loaded: u64,
    /// Handles in the in-use registry at that moment, across all types.
    pub in_use: usize,
    /// Handles registered at that moment, across all types.
    pub registered: usize,
}

/// An event describing a change in the resource lifecycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceEvent {
    /// A handle was registered.
    Added(ResourceHandle),
    /// Every load counted during the initial phase has resolved.
    AllLoaded(LoadSummary),
}
