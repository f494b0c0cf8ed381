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

use hoard_core::resource::{ResourceError, ResourceHandle, ResourceType};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// A per-type index from name to registered handle.
///
/// Names are unique within a type. Inserting a second handle under an existing
/// `(type, name)` pair is rejected and the original entry is kept untouched.
/// Removing an entry frees its name for reuse immediately.
#[derive(Debug, Default)]
pub struct TypeRegistry {
    buckets: HashMap<ResourceType, HashMap<String, ResourceHandle>>,
}

impl TypeRegistry {
    /// Creates a new, empty registry.
    pub fn new() -> Self {
        Self {
            buckets: HashMap::new(),
        }
    }

    /// Stores `handle` under its type and name.
    ///
    /// The type bucket is created on first use, even when the insert is rejected.
    ///
    /// # Errors
    /// Returns [`ResourceError::DuplicateName`] if the name is already taken.
    pub fn insert(&mut self, handle: ResourceHandle) -> Result<&ResourceHandle, ResourceError> {
        let bucket = self.buckets.entry(handle.kind().clone()).or_default();
        match bucket.entry(handle.name().to_string()) {
            Entry::Occupied(_) => Err(ResourceError::DuplicateName {
                kind: handle.kind().clone(),
                name: handle.name().to_string(),
            }),
            Entry::Vacant(slot) => {
                log::trace!(
                    "Stored {} '{}' (id {}).",
                    handle.kind(),
                    handle.name(),
                    handle.id()
                );
                Ok(slot.insert(handle))
            }
        }
    }

    /// Removes the entry occupied by `handle`.
    ///
    /// Only the exact handle that was registered is removed. A stale handle whose
    /// name has since been taken by a newer registration leaves that one in place.
    ///
    /// # Errors
    /// Returns [`ResourceError::NotRegistered`] if the type bucket or the entry is
    /// missing, or if the entry holds a different handle.
    pub fn remove(&mut self, handle: &ResourceHandle) -> Result<ResourceHandle, ResourceError> {
        let not_registered = || ResourceError::NotRegistered {
            kind: handle.kind().clone(),
            name: handle.name().to_string(),
        };

        let bucket = self.buckets.get_mut(handle.kind()).ok_or_else(not_registered)?;
        let occupied_by_handle = bucket
            .get(handle.name())
            .is_some_and(|stored| stored.ptr_eq(handle));
        if !occupied_by_handle {
            return Err(not_registered());
        }
        bucket.remove(handle.name()).ok_or_else(not_registered)
    }

    /// Looks up the handle registered under `kind` and `name`.
    ///
    /// # Errors
    /// Returns [`ResourceError::MissingName`] for an empty name and
    /// [`ResourceError::NotRegistered`] when nothing matches.
    pub fn get(&self, kind: &ResourceType, name: &str) -> Result<&ResourceHandle, ResourceError> {
        if name.is_empty() {
            return Err(ResourceError::MissingName { kind: kind.clone() });
        }

        self.buckets
            .get(kind)
            .and_then(|bucket| bucket.get(name))
            .ok_or_else(|| ResourceError::NotRegistered {
                kind: kind.clone(),
                name: name.to_string(),
            })
    }

    /// The number of handles registered under `kind`.
    pub fn count(&self, kind: &ResourceType) -> usize {
        self.buckets.get(kind).map_or(0, HashMap::len)
    }

    /// The number of handles registered across all types.
    pub fn len(&self) -> usize {
        self.buckets.values().map(HashMap::len).sum()
    }

    /// Returns `true` if no handle is registered at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over every type that has a bucket, including empty ones.
    pub fn kinds(&self) -> impl Iterator<Item = &ResourceType> {
        self.buckets.keys()
    }
}
