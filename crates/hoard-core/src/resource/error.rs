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

use super::ResourceType;
use thiserror::Error;

/// The non-fatal failures of the resource registries.
///
/// None of these leave the manager in an inconsistent state. The manager reports
/// them through the log and hands callers an empty result instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// A resource with the same type and name is already registered.
    #[error("a {kind} named '{name}' is already registered")]
    DuplicateName {
        /// The type bucket the collision happened in.
        kind: ResourceType,
        /// The colliding name.
        name: String,
    },
    /// Nothing is registered under this type and name.
    #[error("no {kind} named '{name}' is registered")]
    NotRegistered {
        /// The type bucket that was searched.
        kind: ResourceType,
        /// The name that was not found.
        name: String,
    },
    /// A lookup was attempted with an empty name.
    #[error("cannot look up a {kind} without a name")]
    MissingName {
        /// The type bucket that was searched.
        kind: ResourceType,
    },
}
