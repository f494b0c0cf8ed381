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

//! Counters for the loads issued during the host's initial phase.

use std::fmt;

/// Whether load outcomes currently count towards phase completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadPhase {
    /// The host is still in its initial phase. Loads are counted.
    Tracking,
    /// The initial phase is over, or tracking is disabled. Loads are not counted.
    Untracked,
}

impl fmt::Display for LoadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoadPhase::Tracking => f.write_str("tracking"),
            LoadPhase::Untracked => f.write_str("untracked"),
        }
    }
}

/// What happened to the counters when a tracked load resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Other loads are still outstanding.
    Pending,
    /// This was the last outstanding load: the count just crossed into zero.
    Drained,
    /// Nothing was outstanding. The counters were left untouched.
    Underflow,
}

/// Outstanding and completed load counters.
///
/// Completion is edge-triggered: only the resolution that takes `num_to_load`
/// from one to zero reports [`Resolution::Drained`]. An idle counter sitting at
/// zero never does.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LoadAccounting {
    num_to_load: u64,
    num_loaded: u64,
}

impl LoadAccounting {
    /// Creates counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a newly started load.
    pub fn begin(&mut self) {
        self.num_to_load += 1;
    }

    /// Records the outcome of a started load.
    pub fn resolve(&mut self, succeeded: bool) -> Resolution {
        if self.num_to_load == 0 {
            return Resolution::Underflow;
        }

        self.num_to_load -= 1;
        if succeeded {
            self.num_loaded += 1;
        }

        if self.num_to_load == 0 {
            Resolution::Drained
        } else {
            Resolution::Pending
        }
    }

    /// Loads started but not yet resolved.
    pub fn num_to_load(&self) -> u64 {
        self.num_to_load
    }

    /// Cumulative count of successful tracked loads.
    pub fn num_loaded(&self) -> u64 {
        self.num_loaded
    }
}
