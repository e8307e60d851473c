//! Ordered observer lists.
//!
//! One small utility serves two consumers: the command store's tap pipeline
//! (observers that rewrite a transient command copy before it is handed out)
//! and the dispatcher's global key event channels. Observers run in
//! registration order and are removed by handle, since boxed closures carry
//! no usable identity of their own.

use std::fmt;

use tracing::trace;

use crate::events::InputEvent;

/// Opaque subscription handle returned by [`Hooks::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct HookHandle(u64);

type Callback<T> = Box<dyn Fn(&mut T) + Send + Sync>;

/// Insertion-ordered list of observer callbacks over a mutable `T`.
pub struct Hooks<T> {
    entries: Vec<(HookHandle, Callback<T>)>,
    next_id: u64,
}

impl<T> Hooks<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            next_id: 0,
        }
    }

    /// Register an observer. It runs after every observer registered before it.
    pub fn subscribe(&mut self, callback: impl Fn(&mut T) + Send + Sync + 'static) -> HookHandle {
        let handle = HookHandle(self.next_id);
        self.next_id += 1;
        self.entries.push((handle, Box::new(callback)));
        handle
    }

    /// Remove a previously registered observer. Returns false for a handle
    /// that is unknown or already removed.
    pub fn remove(&mut self, handle: HookHandle) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry, _)| *entry != handle);
        self.entries.len() != before
    }

    /// Run every observer over `value`, in registration order.
    pub fn notify(&self, value: &mut T) {
        for (_, callback) in &self.entries {
            callback(value);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Hooks<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Hooks<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hooks").field("len", &self.len()).finish()
    }
}

// ===== Dispatcher broadcast channels =====

/// The fixed channels the dispatcher broadcasts input events on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HookChannel {
    /// Every key-down and pointer-down fed to the dispatcher, before any
    /// command matching and regardless of the disable flags.
    GlobalKeyDown,
    /// Every key-up fed to the dispatcher.
    GlobalKeyUp,
}

impl HookChannel {
    /// Stable channel name used in traces.
    pub fn name(self) -> &'static str {
        match self {
            HookChannel::GlobalKeyDown => "global key-down",
            HookChannel::GlobalKeyUp => "global key-up",
        }
    }
}

impl fmt::Display for HookChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One observer list per [`HookChannel`].
#[derive(Debug, Default)]
pub struct GlobalHooks {
    key_down: Hooks<InputEvent>,
    key_up: Hooks<InputEvent>,
}

impl GlobalHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &mut self,
        channel: HookChannel,
        observer: impl Fn(&mut InputEvent) + Send + Sync + 'static,
    ) -> HookHandle {
        self.channel_mut(channel).subscribe(observer)
    }

    pub fn unsubscribe(&mut self, channel: HookChannel, handle: HookHandle) -> bool {
        self.channel_mut(channel).remove(handle)
    }

    pub fn broadcast(&self, channel: HookChannel, event: &mut InputEvent) {
        let observers = self.channel(channel);
        if !observers.is_empty() {
            trace!(channel = %channel, observers = observers.len(), "broadcasting input event");
        }
        observers.notify(event);
    }

    pub fn observer_count(&self, channel: HookChannel) -> usize {
        self.channel(channel).len()
    }

    fn channel(&self, channel: HookChannel) -> &Hooks<InputEvent> {
        match channel {
            HookChannel::GlobalKeyDown => &self.key_down,
            HookChannel::GlobalKeyUp => &self.key_up,
        }
    }

    fn channel_mut(&mut self, channel: HookChannel) -> &mut Hooks<InputEvent> {
        match channel {
            HookChannel::GlobalKeyDown => &mut self.key_down,
            HookChannel::GlobalKeyUp => &mut self.key_up,
        }
    }
}
