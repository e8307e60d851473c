//! Named action handlers.
//!
//! Commands may carry their handler inline or refer to one by name
//! (`CommandHandler::ByName`). Named handlers live in a registry the shell
//! owns and hands to the dispatcher as an [`ActionResolver`]; registering the
//! same name twice replaces the handler, which is how shells rebind actions
//! at runtime without touching the commands that reference them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::debug;

/// A zero-argument invocable an action name resolves to.
pub type ActionFn = Arc<dyn Fn() + Send + Sync>;

/// Lookup interface the dispatcher consumes. Implemented by
/// [`ActionRegistry`]; shells with their own action system implement it
/// directly.
pub trait ActionResolver {
    /// Resolve an action name to its invocable, if one is registered.
    fn resolve(&self, name: &str) -> Option<ActionFn>;
}

/// Shared registry of named action handlers.
///
/// Interior locking so the shell can hand an `Arc<ActionRegistry>` to the
/// dispatcher and keep registering handlers afterwards.
#[derive(Default)]
pub struct ActionRegistry {
    handlers: RwLock<HashMap<String, ActionFn>>,
}

impl ActionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the handler for `name`, replacing any previous one.
    pub fn register(&self, name: impl Into<String>, handler: impl Fn() + Send + Sync + 'static) {
        let name = name.into();
        debug!(action = %name, "registered action handler");
        self.handlers.write().insert(name, Arc::new(handler));
    }

    /// Remove the handler for `name`. Silent when absent.
    pub fn unregister(&self, name: &str) {
        if self.handlers.write().remove(name).is_some() {
            debug!(action = name, "removed action handler");
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.handlers.read().contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.read().is_empty()
    }
}

impl ActionResolver for ActionRegistry {
    fn resolve(&self, name: &str) -> Option<ActionFn> {
        self.handlers.read().get(name).cloned()
    }
}

impl fmt::Debug for ActionRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ActionRegistry")
            .field("len", &self.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn register_resolve_invoke() {
        let registry = ActionRegistry::new();
        let calls = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&calls);
        registry.register("open-palette", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert!(registry.contains("open-palette"));
        let handler = registry.resolve("open-palette").unwrap();
        handler();
        handler();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn reregistering_replaces_the_handler() {
        let registry = ActionRegistry::new();
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&first);
        registry.register("save", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let counter = Arc::clone(&second);
        registry.register("save", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        assert_eq!(registry.len(), 1);
        registry.resolve("save").unwrap()();
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn unregister_is_silent_for_unknown_names() {
        let registry = ActionRegistry::new();
        registry.register("save", || {});
        registry.unregister("save");
        registry.unregister("save");
        assert!(registry.is_empty());
        assert!(registry.resolve("save").is_none());
    }

    #[test]
    fn resolves_through_a_shared_arc() {
        let registry = Arc::new(ActionRegistry::new());
        registry.register("quit", || {});

        let resolver: Arc<dyn ActionResolver + Send + Sync> = registry.clone();
        assert!(resolver.resolve("quit").is_some());
        assert!(resolver.resolve("missing").is_none());
    }
}
