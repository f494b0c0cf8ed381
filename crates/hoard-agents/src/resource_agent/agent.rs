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

//! The resource manager facade.

use hoard_core::event::EventBus;
use hoard_core::readiness::ReadinessProvider;
use hoard_core::resource::{
    next_id, ResourceDescriptor, ResourceHandle, ResourceType, UNKNOWN_NAME,
};
use hoard_data::registry::{InUseRegistry, TypeRegistry};
use std::collections::HashMap;

use super::accounting::{LoadAccounting, LoadPhase, Resolution};
use super::config::ManagerConfig;
use super::event::{LoadSummary, ResourceEvent};
use super::sync_queue::SyncLoadQueue;

/// Where [`ResourceManager::request_load`] sent a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadRoute {
    /// The handle waits in the synchronous load queue.
    Queued,
    /// The caller is expected to start the load and report its outcome.
    Async,
    /// The handle already finished loading and was left untouched.
    AlreadyInUse,
}

/// A point-in-time report of the manager's state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagerStatus {
    /// Handles registered across all types.
    pub registered: usize,
    /// Handles registered per type. Types whose bucket emptied report `0`.
    pub registered_by_kind: HashMap<ResourceType, usize>,
    /// Handles promoted to the in-use registry across all types.
    pub in_use: usize,
    /// Counted loads still outstanding.
    pub num_to_load: u64,
    /// Counted loads that succeeded.
    pub num_loaded: u64,
    /// Handles waiting in the synchronous load queue.
    pub queued: usize,
    /// Whether loads are currently counted.
    pub phase: LoadPhase,
    /// A human-readable one-line summary.
    pub message: String,
}

/// Tracks named, typed resources from registration to use.
///
/// The manager is meant to be driven from a single logical thread: every mutating
/// operation takes `&mut self`, and asynchronous loads report back through
/// [`load_success`](Self::load_success) or [`load_failed`](Self::load_failed).
/// Non-fatal problems such as duplicate names or lookup misses are logged and
/// surface as `None`.
pub struct ResourceManager {
    config: ManagerConfig,
    registry: TypeRegistry,
    in_use: InUseRegistry,
    accounting: LoadAccounting,
    queue: SyncLoadQueue,
    events: EventBus<ResourceEvent>,
    readiness: Box<dyn ReadinessProvider>,
}

impl ResourceManager {
    /// Creates a manager with the default configuration.
    pub fn new(readiness: impl ReadinessProvider + 'static) -> Self {
        Self::with_config(ManagerConfig::default(), readiness)
    }

    /// Creates a manager with an explicit configuration.
    pub fn with_config(config: ManagerConfig, readiness: impl ReadinessProvider + 'static) -> Self {
        log::info!(
            "ResourceManager initialized (serialized types: {}, phase tracking: {}).",
            config
                .sync_types
                .iter()
                .map(ResourceType::label)
                .collect::<Vec<_>>()
                .join(", "),
            config.track_initial_phase
        );

        Self {
            config,
            registry: TypeRegistry::new(),
            in_use: InUseRegistry::new(),
            accounting: LoadAccounting::new(),
            queue: SyncLoadQueue::new(),
            events: EventBus::new(),
            readiness: Box::new(readiness),
        }
    }

    /// Returns a receiver for every event published from now on.
    pub fn subscribe(&mut self) -> flume::Receiver<ResourceEvent> {
        self.events.subscribe()
    }

    /// Whether loads are currently counted towards phase completion.
    pub fn phase(&self) -> LoadPhase {
        if self.config.track_initial_phase && self.readiness.is_initial_phase() {
            LoadPhase::Tracking
        } else {
            LoadPhase::Untracked
        }
    }
}

// Registration
impl ResourceManager {
    /// Registers a resource and returns its handle.
    ///
    /// A placeholder name is replaced by one derived from the source. If the
    /// `(type, name)` pair is taken, the call is rejected: the existing entry is
    /// kept, a warning is logged, no event is published and `None` is returned.
    pub fn add(&mut self, mut descriptor: ResourceDescriptor) -> Option<ResourceHandle> {
        descriptor.resolve_name();
        if descriptor.name() == UNKNOWN_NAME {
            log::debug!(
                "Registering {} without a name or usable source as '{UNKNOWN_NAME}'.",
                descriptor.kind()
            );
        }

        let handle = descriptor.into_handle(next_id());
        match self.registry.insert(handle) {
            Ok(stored) => {
                let stored = stored.clone();
                log::debug!(
                    "Added {} '{}' (id {}).",
                    stored.kind(),
                    stored.name(),
                    stored.id()
                );
                self.events.publish(ResourceEvent::Added(stored.clone()));
                Some(stored)
            }
            Err(e) => {
                log::warn!("Rejected resource registration: {e}.");
                None
            }
        }
    }

    /// Unregisters `handle`.
    ///
    /// Only the slot holding this exact handle is cleared: a stale handle whose
    /// name was since registered again is logged as not registered and leaves the
    /// newer entry alone. The handle stays in the in-use registry if it was promoted.
    pub fn remove(&mut self, handle: &ResourceHandle) {
        match self.registry.remove(handle) {
            Ok(removed) => {
                log::debug!(
                    "Removed {} '{}' (id {}).",
                    removed.kind(),
                    removed.name(),
                    removed.id()
                );
            }
            Err(e) => log::warn!("Cannot remove resource: {e}."),
        }
    }

    /// Looks up a registered resource by type and name.
    ///
    /// Returns `None`, with a log entry, for an empty name or a miss.
    pub fn get_by_name(&self, kind: &ResourceType, name: &str) -> Option<ResourceHandle> {
        match self.registry.get(kind, name) {
            Ok(handle) => Some(handle.clone()),
            Err(e) => {
                log::warn!("Resource lookup failed: {e}.");
                None
            }
        }
    }

    /// Looks up a texture by name.
    pub fn get_texture(&self, name: &str) -> Option<ResourceHandle> {
        self.get_by_name(&ResourceType::Texture, name)
    }

    /// Looks up a sound by name.
    pub fn get_sound(&self, name: &str) -> Option<ResourceHandle> {
        self.get_by_name(&ResourceType::Sound, name)
    }

    /// Looks up a font by name.
    pub fn get_font(&self, name: &str) -> Option<ResourceHandle> {
        self.get_by_name(&ResourceType::Font, name)
    }

    /// The handles of `kind` whose load succeeded, in completion order.
    pub fn in_use(&self, kind: &ResourceType) -> &[ResourceHandle] {
        self.in_use.of_kind(kind)
    }
}

// Load accounting
impl ResourceManager {
    /// Flags a handle as loading and, while tracking, counts it as outstanding.
    ///
    /// A handle that already finished loading is rejected with a warning, so a
    /// handle is never loading and in use at once. Returns `true` if the handle
    /// was flagged.
    pub fn add_to_load(&mut self, handle: &ResourceHandle) -> bool {
        if handle.is_in_use() {
            log::warn!(
                "{} '{}' is already in use; not loading it again.",
                handle.kind(),
                handle.name()
            );
            return false;
        }

        handle.mark_loading();
        if self.phase() == LoadPhase::Tracking {
            self.accounting.begin();
            log::trace!(
                "Counting load of {} '{}' ({} outstanding).",
                handle.kind(),
                handle.name(),
                self.accounting.num_to_load()
            );
        }
        true
    }

    /// Reports a successful load and promotes the handle to the in-use registry.
    ///
    /// Promotion happens whether or not the load was counted.
    pub fn load_success(&mut self, handle: &ResourceHandle) {
        if !self.in_use.promote(handle) {
            log::debug!("{} '{}' was already in use.", handle.kind(), handle.name());
        }
        handle.mark_in_use();
        log::debug!("Loaded {} '{}'.", handle.kind(), handle.name());

        self.resolve_tracked_load(handle, true);
    }

    /// Reports a failed load. The handle is not promoted.
    pub fn load_failed(&mut self, handle: &ResourceHandle) {
        handle.mark_failed();
        log::debug!("Failed to load {} '{}'.", handle.kind(), handle.name());

        self.resolve_tracked_load(handle, false);
    }

    /// Flags a handle as loading and routes it according to its type.
    ///
    /// Types listed in [`ManagerConfig::sync_types`] are enqueued for a
    /// serialized load. Anything else is left for the caller to load. Handles
    /// that already finished loading are left untouched.
    pub fn request_load(&mut self, handle: &ResourceHandle) -> LoadRoute {
        if !self.add_to_load(handle) {
            return LoadRoute::AlreadyInUse;
        }
        if self.config.requires_sync(handle.kind()) {
            self.add_to_queue(handle.clone());
            LoadRoute::Queued
        } else {
            LoadRoute::Async
        }
    }

    fn resolve_tracked_load(&mut self, handle: &ResourceHandle, succeeded: bool) {
        if self.phase() != LoadPhase::Tracking {
            return;
        }

        match self.accounting.resolve(succeeded) {
            Resolution::Pending => {}
            Resolution::Drained if self.readiness.is_batch_in_progress() => {
                log::debug!("All counted loads resolved while a batch is still in progress.");
            }
            Resolution::Drained => self.complete_phase(),
            Resolution::Underflow => {
                log::warn!(
                    "Load of {} '{}' resolved with no counted load outstanding; ignoring.",
                    handle.kind(),
                    handle.name()
                );
            }
        }
    }

    fn complete_phase(&mut self) {
        let summary = LoadSummary {
            num_loaded: self.accounting.num_loaded(),
            in_use: self.in_use.len(),
            registered: self.registry.len(),
        };
        log::info!(
            "All phase resources loaded ({} succeeded, {} in use).",
            summary.num_loaded,
            summary.in_use
        );

        self.readiness.on_phase_resources_loaded();
        self.events.publish(ResourceEvent::AllLoaded(summary));
    }

    /// Counted loads still outstanding.
    pub fn num_to_load(&self) -> u64 {
        self.accounting.num_to_load()
    }

    /// Counted loads that succeeded.
    pub fn num_loaded(&self) -> u64 {
        self.accounting.num_loaded()
    }
}

// Synchronous load queue
impl ResourceManager {
    /// Enqueues a handle for a serialized load.
    pub fn add_to_queue(&mut self, handle: ResourceHandle) {
        log::trace!(
            "Queued {} '{}' for a serialized load.",
            handle.kind(),
            handle.name()
        );
        self.queue.push(handle);
    }

    /// Loads the most recently enqueued handle to completion.
    ///
    /// The outcome is reported through [`load_success`](Self::load_success) or
    /// [`load_failed`](Self::load_failed) before this returns. Returns the handle
    /// that was loaded, or `None` if the queue was empty.
    pub fn load_next_from_queue(&mut self) -> Option<ResourceHandle> {
        self.queue.set_sync_loading(false);
        let handle = self.queue.pop()?;

        self.queue.set_sync_loading(true);
        match handle.force_load(true) {
            Ok(()) => self.load_success(&handle),
            Err(e) => {
                log::error!(
                    "Serialized load of {} '{}' failed: {e:#}",
                    handle.kind(),
                    handle.name()
                );
                self.load_failed(&handle);
            }
        }
        self.queue.set_sync_loading(false);

        Some(handle)
    }

    /// Loads queued handles one at a time until the queue is empty.
    ///
    /// Returns the number of handles processed.
    pub fn drain_queue(&mut self) -> usize {
        std::iter::from_fn(|| self.load_next_from_queue()).count()
    }

    /// Handles waiting in the synchronous load queue.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    /// Returns `true` while a queued handle is being force-loaded.
    pub fn is_sync_loading(&self) -> bool {
        self.queue.is_sync_loading()
    }
}

// Introspection
impl ResourceManager {
    /// The configuration the manager was built with.
    pub fn config(&self) -> &ManagerConfig {
        &self.config
    }

    /// Reports the current state of every registry and counter.
    pub fn status(&self) -> ManagerStatus {
        let registered = self.registry.len();
        let registered_by_kind = self
            .registry
            .kinds()
            .map(|kind| (kind.clone(), self.registry.count(kind)))
            .collect();
        let in_use = self.in_use.len();
        let phase = self.phase();

        ManagerStatus {
            registered,
            registered_by_kind,
            in_use,
            num_to_load: self.accounting.num_to_load(),
            num_loaded: self.accounting.num_loaded(),
            queued: self.queue.len(),
            phase,
            message: format!(
                "registered={} in_use={} to_load={} loaded={} queued={} phase={}",
                registered,
                in_use,
                self.accounting.num_to_load(),
                self.accounting.num_loaded(),
                self.queue.len(),
                phase
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoard_core::resource::Resource;
    use std::any::Any;
    use std::cell::Cell;
    use std::rc::Rc;
    use std::sync::{Arc, Mutex};

    // --- Test doubles ---

    /// Records every forced load into a shared journal.
    struct Recorder {
        label: &'static str,
        fail: bool,
        journal: Arc<Mutex<Vec<&'static str>>>,
    }

    impl Resource for Recorder {
        fn force_load(&self, synchronous: bool) -> anyhow::Result<()> {
            assert!(synchronous, "queued loads must be forced synchronously");
            self.journal.lock().unwrap().push(self.label);
            if self.fail {
                anyhow::bail!("decoder rejected {}", self.label);
            }
            Ok(())
        }

        fn as_any(&self) -> &dyn Any {
            self
        }
    }

    /// A host that stays in its initial phase until told otherwise.
    #[derive(Clone, Default)]
    struct Host {
        ready: Rc<Cell<bool>>,
        busy: Rc<Cell<bool>>,
        completions: Rc<Cell<u32>>,
        ready_on_completion: bool,
    }

    impl ReadinessProvider for Host {
        fn is_initial_phase(&self) -> bool {
            !self.ready.get()
        }

        fn is_batch_in_progress(&self) -> bool {
            self.busy.get()
        }

        fn on_phase_resources_loaded(&mut self) {
            self.completions.set(self.completions.get() + 1);
            if self.ready_on_completion {
                self.ready.set(true);
            }
        }
    }

    fn journal() -> Arc<Mutex<Vec<&'static str>>> {
        Arc::new(Mutex::new(Vec::new()))
    }

    fn recorder(label: &'static str, journal: &Arc<Mutex<Vec<&'static str>>>) -> Recorder {
        Recorder {
            label,
            fail: false,
            journal: journal.clone(),
        }
    }

    fn texture(name: &'static str) -> ResourceDescriptor {
        named(ResourceType::Texture, name, &journal())
    }

    fn named(
        kind: ResourceType,
        label: &'static str,
        journal: &Arc<Mutex<Vec<&'static str>>>,
    ) -> ResourceDescriptor {
        ResourceDescriptor::new(kind, recorder(label, journal)).with_name(label)
    }

    fn count_all_loaded(receiver: &flume::Receiver<ResourceEvent>) -> usize {
        receiver
            .try_iter()
            .filter(|event| matches!(event, ResourceEvent::AllLoaded(_)))
            .count()
    }

    // --- Registration ---

    #[test]
    fn add_then_get_returns_same_handle() {
        let mut manager = ResourceManager::new(Host::default());
        let hero = manager.add(texture("hero")).expect("unique name must register");

        let found = manager.get_texture("hero").expect("registered texture must be found");
        assert!(found.ptr_eq(&hero));
        assert!(hero.id() >= 1);
    }

    #[test]
    fn duplicate_add_keeps_first_and_emits_nothing() {
        let mut manager = ResourceManager::new(Host::default());
        let events = manager.subscribe();

        let first = manager.add(texture("coin")).unwrap();
        assert!(manager.add(texture("coin")).is_none());

        assert!(manager.get_texture("coin").unwrap().ptr_eq(&first));
        let added: Vec<_> = events.try_iter().collect();
        assert_eq!(added, vec![ResourceEvent::Added(first)]);
    }

    #[test]
    fn add_derives_name_from_source() {
        let mut manager = ResourceManager::new(Host::default());
        let png = manager
            .add(
                ResourceDescriptor::new(ResourceType::Texture, recorder("c", &journal()))
                    .with_source("a/b/c.png"),
            )
            .unwrap();
        let readme = manager
            .add(
                ResourceDescriptor::new(ResourceType::Json, recorder("r", &journal()))
                    .with_source("a/b/readme"),
            )
            .unwrap();

        assert_eq!(png.name(), "c");
        assert_eq!(readme.name(), "readme");
        assert!(manager.get_by_name(&ResourceType::Json, "readme").is_some());
    }

    #[test]
    fn lookups_with_bad_input_return_none() {
        let mut manager = ResourceManager::new(Host::default());
        manager.add(texture("hero")).unwrap();

        assert!(manager.get_texture("").is_none());
        assert!(manager.get_texture("villain").is_none());
        assert!(manager.get_sound("hero").is_none());
        assert!(manager.get_font("hero").is_none());
    }

    #[test]
    fn remove_unregistered_is_harmless_and_names_are_reusable() {
        let mut manager = ResourceManager::new(Host::default());
        let stray = texture("stray").into_handle(next_id());
        manager.remove(&stray);

        let first = manager.add(texture("hero")).unwrap();
        manager.remove(&first);
        assert!(manager.get_texture("hero").is_none());

        let second = manager.add(texture("hero")).unwrap();
        assert!(!second.ptr_eq(&first));
        assert!(manager.get_texture("hero").unwrap().ptr_eq(&second));
    }

    #[test]
    fn stale_handle_does_not_remove_newer_registration() {
        let mut manager = ResourceManager::new(Host::default());
        let old = manager.add(texture("hero")).unwrap();
        manager.remove(&old);

        let new = manager.add(texture("hero")).unwrap();
        manager.remove(&old);

        let found = manager.get_texture("hero").expect("newer registration must survive");
        assert!(found.ptr_eq(&new));
    }

    // --- Load accounting ---

    #[test]
    fn success_promotes_once_even_without_add_to_load() {
        let mut manager = ResourceManager::new(Host::default());
        let hero = manager.add(texture("hero")).unwrap();

        manager.load_success(&hero);
        manager.load_success(&hero);

        assert_eq!(manager.in_use(&ResourceType::Texture).len(), 1);
        assert!(hero.is_in_use());
        assert!(!hero.is_loading());
        assert_eq!(manager.num_to_load(), 0);
    }

    #[test]
    fn failure_is_not_promoted() {
        let mut manager = ResourceManager::new(Host::default());
        let hero = manager.add(texture("hero")).unwrap();

        manager.add_to_load(&hero);
        assert!(hero.is_loading());
        manager.load_failed(&hero);

        assert!(!hero.is_loading());
        assert!(!hero.is_in_use());
        assert!(manager.in_use(&ResourceType::Texture).is_empty());
    }

    #[test]
    fn add_to_load_rejects_handles_already_in_use() {
        let mut manager = ResourceManager::new(Host::default());
        let hero = manager.add(texture("hero")).unwrap();
        manager.load_success(&hero);

        assert!(!manager.add_to_load(&hero));
        assert!(!hero.is_loading());
        assert!(hero.is_in_use());
        assert_eq!(manager.num_to_load(), 0);
        assert_eq!(manager.request_load(&hero), LoadRoute::AlreadyInUse);
        assert_eq!(manager.queue_len(), 0);
    }

    #[test]
    fn phase_completes_once_after_every_load_resolves() {
        let host = Host::default();
        let completions = host.completions.clone();
        let mut manager = ResourceManager::new(host);
        let events = manager.subscribe();

        let a = manager.add(texture("a")).unwrap();
        let b = manager.add(texture("b")).unwrap();
        let c = manager.add(texture("c")).unwrap();
        for handle in [&a, &b, &c] {
            manager.add_to_load(handle);
        }
        assert_eq!(manager.num_to_load(), 3);

        manager.load_success(&c);
        manager.load_failed(&a);
        assert_eq!(completions.get(), 0);
        assert_eq!(count_all_loaded(&events), 0);

        manager.load_success(&b);
        assert_eq!(completions.get(), 1);
        assert_eq!(manager.num_loaded(), 2);

        let summary = events
            .try_iter()
            .find_map(|event| match event {
                ResourceEvent::AllLoaded(summary) => Some(summary),
                ResourceEvent::Added(_) => None,
            })
            .expect("phase completion must publish AllLoaded");
        assert_eq!(
            summary,
            LoadSummary {
                num_loaded: 2,
                in_use: 2,
                registered: 3
            }
        );
    }

    #[test]
    fn idle_manager_never_completes() {
        let host = Host::default();
        let completions = host.completions.clone();
        let mut manager = ResourceManager::new(host);
        let events = manager.subscribe();

        manager.add(texture("idle")).unwrap();
        assert_eq!(manager.num_to_load(), 0);
        assert_eq!(completions.get(), 0);
        assert_eq!(count_all_loaded(&events), 0);
    }

    #[test]
    fn unmatched_completion_is_clamped() {
        let host = Host::default();
        let completions = host.completions.clone();
        let mut manager = ResourceManager::new(host);
        let hero = manager.add(texture("hero")).unwrap();

        manager.load_success(&hero);
        manager.load_failed(&hero);

        assert_eq!(manager.num_to_load(), 0);
        assert_eq!(manager.num_loaded(), 0);
        assert_eq!(completions.get(), 0);
    }

    #[test]
    fn loads_after_readiness_are_untracked() {
        let host = Host {
            ready_on_completion: true,
            ..Host::default()
        };
        let completions = host.completions.clone();
        let mut manager = ResourceManager::new(host);

        let first = manager.add(texture("first")).unwrap();
        manager.add_to_load(&first);
        manager.load_success(&first);
        assert_eq!(completions.get(), 1);
        assert_eq!(manager.phase(), LoadPhase::Untracked);

        let late = manager.add(texture("late")).unwrap();
        manager.add_to_load(&late);
        assert_eq!(manager.num_to_load(), 0);
        manager.load_success(&late);

        assert_eq!(completions.get(), 1);
        assert_eq!(manager.in_use(&ResourceType::Texture).len(), 2);
    }

    #[test]
    fn batch_in_progress_holds_back_completion() {
        let host = Host::default();
        host.busy.set(true);
        let completions = host.completions.clone();
        let busy = host.busy.clone();
        let mut manager = ResourceManager::new(host);

        let a = manager.add(texture("a")).unwrap();
        manager.add_to_load(&a);
        manager.load_success(&a);
        assert_eq!(completions.get(), 0);

        busy.set(false);
        let b = manager.add(texture("b")).unwrap();
        manager.add_to_load(&b);
        manager.load_success(&b);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn disabled_tracking_never_counts() {
        let config = ManagerConfig {
            track_initial_phase: false,
            ..ManagerConfig::default()
        };
        let host = Host::default();
        let completions = host.completions.clone();
        let mut manager = ResourceManager::with_config(config, host);

        let a = manager.add(texture("a")).unwrap();
        manager.add_to_load(&a);
        manager.load_success(&a);

        assert_eq!(manager.phase(), LoadPhase::Untracked);
        assert_eq!(manager.num_to_load(), 0);
        assert_eq!(completions.get(), 0);
    }

    // --- Synchronous load queue ---

    #[test]
    fn queue_drains_in_lifo_order() {
        let log = journal();
        let mut manager = ResourceManager::new(Host::default());

        for label in ["A", "B", "C"] {
            let handle = manager.add(named(ResourceType::Sound, label, &log)).unwrap();
            manager.add_to_queue(handle);
        }
        assert_eq!(manager.queue_len(), 3);

        let first = manager.load_next_from_queue().expect("queue holds three handles");
        assert_eq!(first.name(), "C");
        assert_eq!(manager.drain_queue(), 2);
        assert!(manager.load_next_from_queue().is_none());

        assert_eq!(*log.lock().unwrap(), vec!["C", "B", "A"]);
        assert!(!manager.is_sync_loading());
        assert_eq!(manager.in_use(&ResourceType::Sound).len(), 3);
    }

    #[test]
    fn failed_queued_load_is_reported_as_failure() {
        let log = journal();
        let host = Host::default();
        let completions = host.completions.clone();
        let mut manager = ResourceManager::new(host);

        let broken = manager
            .add(
                ResourceDescriptor::new(
                    ResourceType::Sound,
                    Recorder {
                        label: "broken",
                        fail: true,
                        journal: log.clone(),
                    },
                )
                .with_name("broken"),
            )
            .unwrap();

        assert_eq!(manager.request_load(&broken), LoadRoute::Queued);
        assert_eq!(manager.num_to_load(), 1);

        let loaded = manager.load_next_from_queue().unwrap();
        assert!(loaded.ptr_eq(&broken));
        assert!(!broken.is_loading());
        assert!(!broken.is_in_use());
        assert_eq!(manager.num_to_load(), 0);
        assert_eq!(completions.get(), 1);
    }

    #[test]
    fn request_load_routes_by_type() {
        let mut manager = ResourceManager::new(Host::default());
        let hero = manager.add(texture("hero")).unwrap();
        let jump = manager
            .add(named(ResourceType::Sound, "jump", &journal()))
            .unwrap();

        assert_eq!(manager.request_load(&hero), LoadRoute::Async);
        assert_eq!(manager.request_load(&jump), LoadRoute::Queued);
        assert_eq!(manager.queue_len(), 1);
        assert_eq!(manager.num_to_load(), 2);
        assert!(hero.is_loading() && jump.is_loading());
    }

    // --- Introspection ---

    #[test]
    fn status_reflects_counters() {
        let mut manager = ResourceManager::new(Host::default());
        let a = manager.add(texture("a")).unwrap();
        let b = manager.add(texture("b")).unwrap();
        let font = manager
            .add(named(ResourceType::Font, "mono", &journal()))
            .unwrap();
        manager.remove(&font);
        manager.add_to_load(&a);
        manager.add_to_load(&b);
        manager.load_success(&a);

        let status = manager.status();
        assert_eq!(status.registered, 2);
        assert_eq!(status.registered_by_kind.get(&ResourceType::Texture), Some(&2));
        assert_eq!(status.registered_by_kind.get(&ResourceType::Font), Some(&0));
        assert_eq!(status.registered_by_kind.get(&ResourceType::Sound), None);
        assert_eq!(status.in_use, 1);
        assert_eq!(status.num_to_load, 1);
        assert_eq!(status.num_loaded, 1);
        assert_eq!(status.queued, 0);
        assert_eq!(status.phase, LoadPhase::Tracking);
        assert!(status.message.contains("to_load=1"));
    }
}
