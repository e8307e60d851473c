//! Best-effort tracking of which keys are currently held down.

use std::collections::HashSet;

/// Set of keys currently believed to be held, keyed by uppercased key value.
///
/// Key-up wipes the whole set instead of removing one key: window systems do
/// not deliver key-up reliably for every key in a combination, so a per-key
/// clear would leave phantom entries behind. Treat the contents as a hint,
/// not ground truth.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    down: HashSet<String>,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down for the given logical key value.
    pub fn record_down(&mut self, key: &str) {
        self.down.insert(key.to_uppercase());
    }

    /// Forget every tracked key. Called on every key-up.
    pub fn reset(&mut self) {
        self.down.clear();
    }

    /// Whether the given key is believed to be down. Case-insensitive.
    pub fn is_down(&self, key: &str) -> bool {
        self.down.contains(&key.to_uppercase())
    }

    /// Sorted snapshot of the tracked keys.
    pub fn pressed(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.down.iter().cloned().collect();
        keys.sort();
        keys
    }

    pub fn len(&self) -> usize {
        self.down.len()
    }

    pub fn is_empty(&self) -> bool {
        self.down.is_empty()
    }
}
