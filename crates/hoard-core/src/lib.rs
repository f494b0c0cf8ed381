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

//! # Hoard Core
//!
//! Foundational crate containing the resource contracts, core types, and event
//! primitives shared by the rest of the resource management stack.

#![warn(missing_docs)]

pub mod event;
pub mod readiness;
pub mod resource;

pub use readiness::{InitialPhase, ReadinessProvider};
pub use resource::{Resource, ResourceDescriptor, ResourceError, ResourceHandle, ResourceType};
