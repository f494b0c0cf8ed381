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

//! Loads a small set of fake resources the way a host application would:
//! textures decode on worker threads and report back, sounds go through the
//! serialized queue, and the host leaves its initial phase once everything resolved.

use anyhow::Result;
use hoard_agents::{LoadRoute, ResourceEvent, ResourceManager};
use hoard_core::resource::{Resource, ResourceDescriptor, ResourceHandle, ResourceType};
use hoard_core::InitialPhase;
use std::any::Any;
use std::collections::HashMap;
use std::thread;
use std::time::Duration;

/// Pretends to decode a file. Files whose name starts with `missing` fail.
struct FakeFile {
    path: String,
    cost: Duration,
}

impl FakeFile {
    fn decode(&self) -> Result<()> {
        thread::sleep(self.cost);
        anyhow::ensure!(!self.path.contains("missing"), "no such file: {}", self.path);
        Ok(())
    }
}

impl Resource for FakeFile {
    fn force_load(&self, _synchronous: bool) -> Result<()> {
        self.decode()
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

fn describe(kind: ResourceType, path: &str, cost_ms: u64) -> ResourceDescriptor {
    ResourceDescriptor::new(
        kind,
        FakeFile {
            path: path.to_string(),
            cost: Duration::from_millis(cost_ms),
        },
    )
    .with_source(path)
}

fn main() -> Result<()> {
    use env_logger::{Builder, Env};

    Builder::from_env(Env::default().default_filter_or("info")).init();

    let host = InitialPhase::new()
        .with_callback(|| log::info!("Host: initial resources ready, starting."));
    let mut manager = ResourceManager::new(host);
    let events = manager.subscribe();

    let manifest = [
        describe(ResourceType::Texture, "textures/hero.png", 30),
        describe(ResourceType::Texture, "textures/tiles.png", 10),
        describe(ResourceType::Texture, "textures/missing_sky.png", 5),
        describe(ResourceType::Sound, "sounds/jump.ogg", 5),
        describe(ResourceType::Sound, "sounds/theme.ogg", 15),
        describe(ResourceType::Font, "fonts/mono.ttf", 20),
    ];

    let (done_tx, done_rx) = flume::unbounded::<(u64, bool)>();
    let mut in_flight: HashMap<u64, ResourceHandle> = HashMap::new();

    for descriptor in manifest {
        let Some(handle) = manager.add(descriptor) else {
            continue;
        };
        if manager.request_load(&handle) == LoadRoute::Async {
            let worker_handle = handle.clone();
            let done = done_tx.clone();
            thread::spawn(move || {
                let ok = match worker_handle.force_load(false) {
                    Ok(()) => true,
                    Err(e) => {
                        log::error!("Worker: {e:#}");
                        false
                    }
                };
                let _ = done.send((worker_handle.id(), ok));
            });
            in_flight.insert(handle.id(), handle);
        }
    }
    drop(done_tx);

    log::info!("Draining {} serialized load(s).", manager.queue_len());
    manager.drain_queue();

    for (id, ok) in done_rx.iter() {
        let Some(handle) = in_flight.remove(&id) else {
            continue;
        };
        if ok {
            manager.load_success(&handle);
        } else {
            manager.load_failed(&handle);
        }
    }

    for event in events.try_iter() {
        match event {
            ResourceEvent::Added(handle) => {
                log::debug!("Event: added {} '{}'.", handle.kind(), handle.name())
            }
            ResourceEvent::AllLoaded(summary) => log::info!("Event: all loaded {summary:?}."),
        }
    }

    log::info!("Status: {}", manager.status().message);
    Ok(())
}
