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

//! Provides the foundational traits and primitive types for Hoard's resource tracking.
//!
//! This module defines the "common language" for every resource-related operation.
//! It contains the contracts that concrete resource types implement, but it has no
//! knowledge of how resources are decoded or where they are stored.
//!
//! The key components are:
//! - The [`Resource`] trait: the behavior contract of a loadable resource object.
//! - [`ResourceType`]: the open-ended category a resource belongs to.
//! - [`ResourceDescriptor`] and [`ResourceHandle`]: a resource before and after registration.
//! - A process-wide identifier generator, see [`next_id`].

mod error;
mod handle;
mod id;

pub use error::*;
pub use handle::*;
pub use id::*;

use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;

/// The category of a tracked resource.
///
/// The well-known categories get their own variant. Anything else can be
/// expressed with [`ResourceType::Custom`] without touching this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResourceType {
    /// A decoded image usable for drawing.
    Texture,
    /// A decoded audio buffer.
    Sound,
    /// A font face or bitmap font.
    Font,
    /// A shader program.
    Shader,
    /// A parsed JSON document.
    Json,
    /// A category defined by the host application.
    Custom(String),
}

impl ResourceType {
    /// Returns the lower-case label used in diagnostics.
    pub fn label(&self) -> &str {
        match self {
            ResourceType::Texture => "texture",
            ResourceType::Sound => "sound",
            ResourceType::Font => "font",
            ResourceType::Shader => "shader",
            ResourceType::Json => "json",
            ResourceType::Custom(label) => label,
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The behavior contract every concrete resource object fulfils.
///
/// The manager treats resources as opaque. The only thing it ever asks of one is
/// to load itself, which it does when draining the synchronous load queue.
///
/// The supertraits mirror those of handles: resources are shared behind an `Arc`
/// and may be observed from other threads through the event channel.
///
/// # Examples
///
/// ```
/// use hoard_core::resource::Resource;
///
/// struct Beep;
///
/// impl Resource for Beep {
///     fn force_load(&self, _synchronous: bool) -> anyhow::Result<()> {
///         Ok(())
///     }
///
///     fn as_any(&self) -> &dyn std::any::Any {
///         self
///     }
/// }
/// ```
pub trait Resource: Send + Sync + 'static {
    /// Starts loading the resource.
    ///
    /// When `synchronous` is `true` the call must not return before the load has
    /// finished, successfully or not.
    fn force_load(&self, synchronous: bool) -> anyhow::Result<()>;

    /// Returns `self` as `&dyn Any` so callers can recover the concrete type.
    fn as_any(&self) -> &dyn Any;
}
