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

/// Manages a generic fan-out event channel.
///
/// Every subscriber owns its own unbounded `flume` channel. Publishing clones the
/// event into each of them immediately, so observers see events in exactly the
/// order they were emitted, even if they drain their receiver much later.
///
/// This EventBus is generic over the type `T` of event it transports. This ensures
/// that `hoard-core` remains decoupled from specific event types defined in higher-level crates.
#[derive(Debug)]
pub struct EventBus<T: Clone + Send + Sync + 'static> {
    subscribers: Vec<flume::Sender<T>>,
}

impl<T: Clone + Send + Sync + 'static> EventBus<T> {
    /// Creates a new EventBus with no subscribers.
    ///
    /// ## Returns
    /// A new instance of the EventBus struct.
    pub fn new() -> Self {
        log::debug!("Generic EventBus initialized.");
        Self {
            subscribers: Vec::new(),
        }
    }

    /// Registers a new observer and returns the receiving end of its channel.
    ///
    /// Only events published after this call are delivered to the new receiver.
    /// Dropping the receiver unsubscribes it on the next publish.
    pub fn subscribe(&mut self) -> flume::Receiver<T> {
        let (sender, receiver) = flume::unbounded();
        self.subscribers.push(sender);
        receiver
    }

    /// Delivers `event` to every live subscriber.
    ///
    /// Subscribers whose receiver has been dropped are pruned.
    ///
    /// ## Arguments
    /// * `event` - The event to be fanned out.
    ///
    /// ## Returns
    /// The number of subscribers the event was delivered to.
    pub fn publish(&mut self, event: T) -> usize {
        // `T` carries no `Debug` bound, so only the fan-out width is logged.
        log::trace!(
            "Publishing an event to {} subscriber(s).",
            self.subscribers.len()
        );

        let before = self.subscribers.len();
        self.subscribers.retain(|sender| sender.send(event.clone()).is_ok());

        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            log::debug!("Pruned {dropped} disconnected subscriber(s).");
        }
        self.subscribers.len()
    }

    /// Returns the number of currently registered subscribers.
    ///
    /// Disconnected receivers are only noticed on the next publish.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}

impl<T: Clone + Send + Sync + 'static> Default for EventBus<T> {
    fn default() -> Self {
        Self::new()
    }
}
