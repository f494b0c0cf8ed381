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

//! The LIFO backlog for resource types that must not load concurrently.

use hoard_core::resource::ResourceHandle;

/// Handles waiting for a serialized load.
///
/// The most recently enqueued handle is loaded next. `is_sync_loading` is set by
/// the manager for the duration of each forced load.
#[derive(Debug, Default)]
pub struct SyncLoadQueue {
    pending: Vec<ResourceHandle>,
    is_sync_loading: bool,
}

impl SyncLoadQueue {
    /// Creates an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues a handle.
    pub fn push(&mut self, handle: ResourceHandle) {
        self.pending.push(handle);
    }

    /// Removes the most recently enqueued handle.
    pub fn pop(&mut self) -> Option<ResourceHandle> {
        self.pending.pop()
    }

    /// The number of waiting handles.
    pub fn len(&self) -> usize {
        self.pending.len()
    }

    /// Returns `true` if nothing is waiting.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Returns `true` while a dequeued handle is being loaded.
    pub fn is_sync_loading(&self) -> bool {
        self.is_sync_loading
    }

    pub(crate) fn set_sync_loading(&mut self, loading: bool) {
        self.is_sync_loading = loading;
    }
}
