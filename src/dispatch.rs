//! Global key-down/key-up dispatch.
//!
//! [`Dispatcher`] is the context object the host shell owns: command store,
//! key-state, hook channels, platform, action resolver and the two disable
//! flags all live on it. Nothing here is global, so tests and embedded shells
//! can run as many independent dispatchers as they like.
//!
//! Key-down flow, in order:
//! 1. record the key in the key-state (keyboard events only)
//! 2. broadcast on the global key-down channel, disabled or not
//! 3. bail if dispatch is disabled
//! 4. scan commands in ascending id order, re-fetching each through the
//!    store so taps apply, until one matches and its guard accepts
//! 5. mark the event consumed and invoke the handler
//!
//! Key-up wipes the key-state and broadcasts; it never dispatches.

use std::fmt;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::actions::ActionResolver;
use crate::commands::{Command, CommandConflict, CommandHandler, CommandStore};
use crate::config::Config;
use crate::events::{EventKind, InputEvent};
use crate::hooks::{GlobalHooks, HookChannel, HookHandle};
use crate::keymatch;
use crate::keystate::KeyState;
use crate::labels;
use crate::logging;
use crate::platform::Platform;

pub struct Dispatcher {
    store: CommandStore,
    key_state: KeyState,
    hooks: GlobalHooks,
    platform: Platform,
    resolver: Option<Arc<dyn ActionResolver + Send + Sync>>,
    /// Frozen at construction from config or environment.
    static_disabled: bool,
    /// Runtime toggle; OR-combined with the static flag.
    runtime_disabled: bool,
}

impl Dispatcher {
    /// Dispatcher for the given platform with dispatch enabled.
    pub fn new(platform: Platform) -> Self {
        Self {
            store: CommandStore::new(),
            key_state: KeyState::new(),
            hooks: GlobalHooks::new(),
            platform,
            resolver: None,
            static_disabled: false,
            runtime_disabled: false,
        }
    }

    /// Dispatcher configured from a loaded [`Config`]. The config's disable
    /// flag is frozen in here; [`enable_shortcuts`](Self::enable_shortcuts)
    /// cannot clear it.
    pub fn from_config(config: &Config) -> Self {
        let platform = config.platform.unwrap_or_else(Platform::current);
        let mut dispatcher = Self::new(platform);
        dispatcher.static_disabled = config.disable_shortcuts;
        dispatcher
    }

    /// Attach the resolver used for [`CommandHandler::ByName`] commands.
    pub fn with_resolver(mut self, resolver: Arc<dyn ActionResolver + Send + Sync>) -> Self {
        self.resolver = Some(resolver);
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    // ===== Command registration =====

    /// Register a command, overwriting any previous one with the same id.
    /// Returns a copy of what was stored.
    pub fn register_command(&mut self, command: Command) -> Command {
        self.store.register(command)
    }

    /// Remove a command by id. Silent when absent.
    pub fn remove_command(&mut self, id: &str) {
        self.store.remove(id);
    }

    /// Tap-filtered copy of a command, as dispatch would see it.
    pub fn get_command(&self, id: &str) -> Option<Command> {
        self.store.get(id)
    }

    /// Raw copies of every registered command in ascending id order.
    /// Taps are not applied here; use [`Dispatcher::get_command`] for the
    /// tap-filtered view.
    pub fn raw_commands(&self) -> Vec<Command> {
        self.store.get_all()
    }

    /// Register a tap over command lookup. See [`CommandStore::tap`].
    pub fn tap_command(
        &mut self,
        tap: impl Fn(&mut Command) + Send + Sync + 'static,
    ) -> HookHandle {
        self.store.tap(tap)
    }

    pub fn remove_command_tap(&mut self, handle: HookHandle) -> bool {
        self.store.remove_tap(handle)
    }

    /// Commands registered against identical combinations. Diagnostic only.
    pub fn find_conflicts(&self) -> Vec<CommandConflict> {
        self.store.find_conflicts()
    }

    // ===== Disable flags =====

    /// Suppress dispatch at runtime. Key-state tracking and hook broadcasts
    /// keep working while disabled.
    pub fn disable_shortcuts(&mut self) {
        self.runtime_disabled = true;
        debug!("shortcut dispatch disabled");
    }

    /// Clear the runtime disable flag. Has no effect on a dispatcher whose
    /// config froze the flag on.
    pub fn enable_shortcuts(&mut self) {
        self.runtime_disabled = false;
        debug!("shortcut dispatch enabled");
    }

    /// Whether dispatch is currently suppressed by either flag.
    pub fn shortcuts_disabled(&self) -> bool {
        self.static_disabled || self.runtime_disabled
    }

    // ===== Hooks and key-state =====

    /// Observe a broadcast channel. Observers may raise the event's
    /// consumption flags; the shell sees those after dispatch returns.
    pub fn subscribe(
        &mut self,
        channel: HookChannel,
        observer: impl Fn(&mut InputEvent) + Send + Sync + 'static,
    ) -> HookHandle {
        self.hooks.subscribe(channel, observer)
    }

    pub fn unsubscribe(&mut self, channel: HookChannel, handle: HookHandle) -> bool {
        self.hooks.unsubscribe(channel, handle)
    }

    /// Keys currently believed held down.
    pub fn key_state(&self) -> &KeyState {
        &self.key_state
    }

    // ===== Labels =====

    /// Display label for a registered command's combination, formatted for
    /// this dispatcher's platform. `None` for unknown ids.
    pub fn command_keys_label(&self, id: &str) -> Option<String> {
        let command = self.store.get(id)?;
        Some(labels::keys_label(&command.keys, self.platform))
    }

    // ===== Entry points =====

    /// Feed one key-down or pointer-down event through dispatch.
    ///
    /// Returns the id of the invoked command, or `None` when nothing fired.
    /// At most one command fires per event; on a match the event's
    /// `stop_propagation` and `prevent_default` flags are raised before the
    /// handler runs.
    pub fn on_key_down(&mut self, event: &mut InputEvent) -> Option<String> {
        if let EventKind::Key(key_event) = event.kind() {
            logging::log_key_event(&key_event.key, &key_event.modifiers, "down");
            self.key_state.record_down(&key_event.key);
        }

        self.hooks.broadcast(HookChannel::GlobalKeyDown, event);

        if self.shortcuts_disabled() {
            debug!("key-down ignored, dispatch disabled");
            return None;
        }

        for id in self.store.ids() {
            let command = match self.store.get(&id) {
                Some(command) => command,
                None => continue,
            };
            if !keymatch::matches(event, &command.keys, self.platform) {
                continue;
            }
            if let Some(guard) = &command.guard {
                if !guard() {
                    debug!(command = %id, "guard declined, continuing scan");
                    continue;
                }
            }

            event.stop_propagation();
            event.prevent_default();
            self.invoke(&command);
            return Some(id);
        }

        None
    }

    /// Feed one key-up event through dispatch. Wipes the key-state and
    /// broadcasts; never invokes a command.
    pub fn on_key_up(&mut self, event: &mut InputEvent) {
        if let EventKind::Key(key_event) = event.kind() {
            logging::log_key_event(&key_event.key, &key_event.modifiers, "up");
        }
        self.key_state.reset();
        self.hooks.broadcast(HookChannel::GlobalKeyUp, event);
    }

    fn invoke(&self, command: &Command) {
        match &command.handler {
            Some(CommandHandler::Direct(handler)) => {
                debug!(command = %command.id, "invoking command");
                handler();
            }
            Some(CommandHandler::ByName(name)) => {
                let resolved = self
                    .resolver
                    .as_ref()
                    .and_then(|resolver| resolver.resolve(name));
                match resolved {
                    Some(handler) => {
                        debug!(command = %command.id, action = %name, "invoking command by action name");
                        handler();
                    }
                    None => {
                        warn!(command = %command.id, action = %name, "no handler registered for action");
                    }
                }
            }
            None => {
                debug!(command = %command.id, "command has no handler");
            }
        }
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("platform", &self.platform)
            .field("commands", &self.store.len())
            .field("disabled", &self.shortcuts_disabled())
            .field("has_resolver", &self.resolver.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
