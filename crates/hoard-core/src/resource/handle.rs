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

use super::{Resource, ResourceType};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// The placeholder name a descriptor carries until one is given or derived.
pub const UNKNOWN_NAME: &str = "unknown";

/// Derives a resource name from a source locator.
///
/// The last path segment is taken (both `/` and `\` separate segments) and its
/// extension, if any, is stripped. Returns `None` when the locator ends in a
/// separator and there is no segment to use.
///
/// ```
/// use hoard_core::resource::derive_name;
///
/// assert_eq!(derive_name("a/b/c.png").as_deref(), Some("c"));
/// assert_eq!(derive_name("a/b/readme").as_deref(), Some("readme"));
/// ```
pub fn derive_name(source: &str) -> Option<String> {
    let segment = source.rsplit(['/', '\\']).next().unwrap_or(source);
    if segment.is_empty() {
        return None;
    }

    let stem = match segment.rfind('.') {
        // A leading dot marks a hidden file, not an extension.
        Some(dot) if dot > 0 => &segment[..dot],
        _ => segment,
    };
    Some(stem.to_string())
}

/// A resource that has been created but not yet registered.
///
/// Producers build one of these, adjust it freely, and then hand it to the
/// manager. Registration consumes the descriptor, which is what keeps the
/// identity of a registered handle immutable.
pub struct ResourceDescriptor {
    kind: ResourceType,
    name: String,
    source: Option<String>,
    resource: Box<dyn Resource>,
}

impl ResourceDescriptor {
    /// Creates a descriptor named [`UNKNOWN_NAME`] with no source.
    pub fn new(kind: ResourceType, resource: impl Resource) -> Self {
        Self {
            kind,
            name: UNKNOWN_NAME.to_string(),
            source: None,
            resource: Box::new(resource),
        }
    }

    /// Sets an explicit name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the locator the resource is loaded from.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The category of the resource.
    pub fn kind(&self) -> &ResourceType {
        &self.kind
    }

    /// The current name, possibly still [`UNKNOWN_NAME`].
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The locator, if any.
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Replaces the placeholder name with one derived from the source.
    ///
    /// Does nothing when a real name was given, when there is no source, or
    /// when no name can be derived from it.
    pub fn resolve_name(&mut self) {
        if self.name != UNKNOWN_NAME {
            return;
        }
        if let Some(derived) = self.source.as_deref().and_then(derive_name) {
            self.name = derived;
        }
    }

    /// Turns the descriptor into a shareable handle with the given identifier.
    pub fn into_handle(self, id: u64) -> ResourceHandle {
        ResourceHandle(Arc::new(HandleInner {
            id,
            kind: self.kind,
            name: self.name,
            source: self.source,
            is_loading: AtomicBool::new(false),
            in_use: AtomicBool::new(false),
            resource: self.resource,
        }))
    }
}

impl fmt::Debug for ResourceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceDescriptor")
            .field("kind", &self.kind)
            .field("name", &self.name)
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}

struct HandleInner {
    id: u64,
    kind: ResourceType,
    name: String,
    source: Option<String>,
    is_loading: AtomicBool,
    in_use: AtomicBool,
    resource: Box<dyn Resource>,
}

/// A thread-safe, reference-counted handle to a registered resource.
///
/// Cloning a handle is cheap and every clone refers to the same resource and the
/// same load flags. Two handles compare equal only if they are clones of each other.
#[derive(Clone)]
pub struct ResourceHandle(Arc<HandleInner>);

impl ResourceHandle {
    /// The unique identifier assigned at registration.
    pub fn id(&self) -> u64 {
        self.0.id
    }

    /// The category of the resource.
    pub fn kind(&self) -> &ResourceType {
        &self.0.kind
    }

    /// The name, unique within [`kind`](Self::kind).
    pub fn name(&self) -> &str {
        &self.0.name
    }

    /// The locator the resource is loaded from, if any.
    pub fn source(&self) -> Option<&str> {
        self.0.source.as_deref()
    }

    /// `true` while an asynchronous load is outstanding.
    pub fn is_loading(&self) -> bool {
        self.0.is_loading.load(Ordering::Acquire)
    }

    /// `true` once the resource loaded successfully and was promoted.
    pub fn is_in_use(&self) -> bool {
        self.0.in_use.load(Ordering::Acquire)
    }

    /// Flags the handle as having a load in flight.
    pub fn mark_loading(&self) {
        self.0.is_loading.store(true, Ordering::Release);
    }

    /// Flags a completed, successful load.
    pub fn mark_in_use(&self) {
        self.0.is_loading.store(false, Ordering::Release);
        self.0.in_use.store(true, Ordering::Release);
    }

    /// Flags a completed, failed load.
    pub fn mark_failed(&self) {
        self.0.is_loading.store(false, Ordering::Release);
    }

    /// Asks the underlying resource to load itself.
    pub fn force_load(&self, synchronous: bool) -> anyhow::Result<()> {
        self.0.resource.force_load(synchronous)
    }

    /// The underlying resource object.
    pub fn resource(&self) -> &dyn Resource {
        self.0.resource.as_ref()
    }

    /// Attempts to view the underlying resource as a concrete type.
    pub fn downcast_ref<R: Resource>(&self) -> Option<&R> {
        self.0.resource.as_any().downcast_ref::<R>()
    }

    /// Returns `true` if both handles refer to the same registration.
    pub fn ptr_eq(&self, other: &ResourceHandle) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl PartialEq for ResourceHandle {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ResourceHandle {}

impl fmt::Debug for ResourceHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceHandle")
            .field("id", &self.0.id)
            .field("kind", &self.0.kind)
            .field("name", &self.0.name)
            .field("source", &self.0.source)
            .field("is_loading", &self.is_loading())
            .field("in_use", &self.is_in_use())
            .finish()
    }
}
