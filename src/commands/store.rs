//! The command store: registration, ordered listing, tap-filtered lookup.

use std::collections::BTreeMap;

use tracing::debug;

use super::types::Command;
use crate::hooks::{HookHandle, Hooks};

/// Two commands whose key combinations collide token-for-token. `winner` is
/// the one dispatch will pick (identifiers sort ascending).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandConflict {
    pub winner: String,
    pub loser: String,
}

/// Owns every registered command plus the tap pipeline applied on lookup.
///
/// Commands live in a `BTreeMap` keyed by identifier; its ascending iteration
/// order is what makes dispatch deterministic when combinations collide.
#[derive(Debug, Default)]
pub struct CommandStore {
    commands: BTreeMap<String, Command>,
    taps: Hooks<Command>,
}

impl CommandStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite by identifier. Returns a copy of what was stored.
    pub fn register(&mut self, command: Command) -> Command {
        debug!(command = %command.id, keys = command.keys.len(), "registered command");
        let stored = command.clone();
        self.commands.insert(command.id.clone(), command);
        stored
    }

    /// Delete by identifier. Silent when absent.
    pub fn remove(&mut self, id: &str) {
        let removed = self.commands.remove(id).is_some();
        debug!(command = id, removed, "remove command");
    }

    /// Copy of the command with every tap applied, in tap registration order.
    /// Taps see a transient copy; the stored command is never mutated.
    pub fn get(&self, id: &str) -> Option<Command> {
        let mut copy = self.commands.get(id)?.clone();
        self.taps.notify(&mut copy);
        Some(copy)
    }

    /// Raw copies of every command in ascending identifier order. Taps are
    /// not applied here.
    pub fn get_all(&self) -> Vec<Command> {
        self.commands.values().cloned().collect()
    }

    /// Identifiers in ascending order, the order dispatch scans in.
    pub fn ids(&self) -> Vec<String> {
        self.commands.keys().cloned().collect()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.commands.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Register a tap that rewrites the transient copy [`get`](Self::get)
    /// returns. Taps run after every tap registered before them.
    pub fn tap(&mut self, tap: impl Fn(&mut Command) + Send + Sync + 'static) -> HookHandle {
        self.taps.subscribe(tap)
    }

    /// Remove a tap. Returns false for an unknown handle.
    pub fn remove_tap(&mut self, handle: HookHandle) -> bool {
        self.taps.remove(handle)
    }

    /// Pairs of commands registered against the same combination. Purely
    /// diagnostic; dispatch resolves these collisions by ascending id.
    pub fn find_conflicts(&self) -> Vec<CommandConflict> {
        let entries: Vec<(&String, &Command)> = self.commands.iter().collect();
        let mut conflicts = Vec::new();
        for (index, (winner, command)) in entries.iter().enumerate() {
            if command.keys.is_empty() {
                continue;
            }
            for (loser, other) in entries.iter().skip(index + 1) {
                if command.keys == other.keys {
                    conflicts.push(CommandConflict {
                        winner: (*winner).clone(),
                        loser: (*loser).clone(),
                    });
                }
            }
        }
        conflicts
    }
}
