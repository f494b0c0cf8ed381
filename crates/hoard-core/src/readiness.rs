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

//! The contract between the resource manager and the host that owns it.
//!
//! The host decides when its initial loading phase is over. While that phase is
//! running, the manager counts outstanding loads and tells the host, through
//! [`ReadinessProvider::on_phase_resources_loaded`], when the last one resolved.

use std::fmt;

/// Lifecycle hooks a host passes to the resource manager.
pub trait ReadinessProvider {
    /// Returns `true` while the host is still in its initial load phase.
    ///
    /// Loads are only counted towards phase completion while this holds.
    fn is_initial_phase(&self) -> bool;

    /// Returns `true` while a higher-level loading operation is in progress.
    ///
    /// Phase completion is held back while this is set.
    fn is_batch_in_progress(&self) -> bool {
        false
    }

    /// Called once each time the count of outstanding phase loads drops to zero.
    fn on_phase_resources_loaded(&mut self);
}

/// A [`ReadinessProvider`] that ends the initial phase the first time it completes.
///
/// An optional callback runs at that moment, which is usually where a host
/// kicks off whatever was waiting on its resources.
#[derive(Default)]
pub struct InitialPhase {
    finished: bool,
    on_loaded: Option<Box<dyn FnOnce()>>,
}

impl InitialPhase {
    /// Creates a provider that starts inside the initial phase.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a callback to run when the initial phase completes.
    pub fn with_callback(mut self, callback: impl FnOnce() + 'static) -> Self {
        self.on_loaded = Some(Box::new(callback));
        self
    }

    /// Returns `true` once the phase has completed.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl ReadinessProvider for InitialPhase {
    fn is_initial_phase(&self) -> bool {
        !self.finished
    }

    fn on_phase_resources_loaded(&mut self) {
        self.finished = true;
        if let Some(callback) = self.on_loaded.take() {
            callback();
        }
    }
}

impl fmt::Debug for InitialPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitialPhase")
            .field("finished", &self.finished)
            .field("has_callback", &self.on_loaded.is_some())
            .finish()
    }
}
