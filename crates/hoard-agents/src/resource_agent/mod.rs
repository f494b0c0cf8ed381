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

//! Acts as the **[A]gent** for the resource subsystem.
//!
//! This module provides the public-facing API for registering resources, reporting
//! load outcomes and querying what is ready. Decoding itself stays with the
//! concrete [`Resource`](hoard_core::resource::Resource) implementations.
//!
//! The pieces are:
//! - [`ResourceManager`]: the facade owning every registry and counter.
//! - [`LoadAccounting`]: outstanding/complete counters for the initial phase.
//! - [`SyncLoadQueue`]: the one-at-a-time backlog for serialized types.
//! - [`ManagerConfig`]: the RON-loadable settings.

pub mod accounting;
pub mod agent;
pub mod config;
pub mod event;
pub mod sync_queue;

pub use accounting::{LoadAccounting, LoadPhase, Resolution};
pub use agent::{LoadRoute, ManagerStatus, ResourceManager};
pub use config::ManagerConfig;
pub use event::{LoadSummary, ResourceEvent};
pub use sync_queue::SyncLoadQueue;
