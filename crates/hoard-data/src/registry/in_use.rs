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

use hoard_core::resource::{ResourceHandle, ResourceType};
use std::collections::HashMap;

/// Handles that finished loading and are ready to be consumed, grouped by type.
///
/// Buckets are created lazily and only ever grow. Entries keep the order in which
/// their loads completed.
#[derive(Debug, Default)]
pub struct InUseRegistry {
    buckets: HashMap<ResourceType, Vec<ResourceHandle>>,
}

impl InUseRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Appends `handle` to the bucket of its type.
    ///
    /// Returns `false` without modifying anything if this exact handle was
    /// already promoted, so every handle appears at most once.
    pub fn promote(&mut self, handle: &ResourceHandle) -> bool {
        let bucket = self.buckets.entry(handle.kind().clone()).or_default();
        if bucket.iter().any(|existing| existing.ptr_eq(handle)) {
            return false;
        }
        bucket.push(handle.clone());
        true
    }

    /// The handles of `kind` that are in use, in promotion order.
    pub fn of_kind(&self, kind: &ResourceType) -> &[ResourceHandle] {
        self.buckets.get(kind).map(Vec::as_slice).unwrap_or(&[])
    }

    /// The number of promoted handles across all types.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing has been promoted yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
