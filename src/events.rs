//! Input events as the dispatcher sees them.
//!
//! The host shell translates whatever its window system delivers into these
//! types once, at the edge. Keyboard and pointer events are tagged here, so
//! nothing downstream has to duck-type an opaque payload, and the two
//! consumption flags (`stop_propagation`, `prevent_default`) travel with the
//! event so the shell can honor them after dispatch.

use serde::{Deserialize, Serialize};

// ===== Modifiers =====

/// Raw modifier flags as reported by the event source.
///
/// These are the physical bits; mapping logical names like `CtrlCmd` onto
/// them is the matcher's job.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Modifiers {
    #[serde(default)]
    pub alt: bool,
    #[serde(default)]
    pub ctrl: bool,
    #[serde(default)]
    pub meta: bool,
    #[serde(default)]
    pub shift: bool,
}

impl Modifiers {
    pub fn alt() -> Self {
        Self::default().with_alt()
    }

    pub fn ctrl() -> Self {
        Self::default().with_ctrl()
    }

    pub fn meta() -> Self {
        Self::default().with_meta()
    }

    pub fn shift() -> Self {
        Self::default().with_shift()
    }

    pub fn with_alt(mut self) -> Self {
        self.alt = true;
        self
    }

    pub fn with_ctrl(mut self) -> Self {
        self.ctrl = true;
        self
    }

    pub fn with_meta(mut self) -> Self {
        self.meta = true;
        self
    }

    pub fn with_shift(mut self) -> Self {
        self.shift = true;
        self
    }

    /// True if any modifier bit is set.
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.meta || self.shift
    }

    /// True if no modifier bits are set.
    pub fn none(&self) -> bool {
        !self.any()
    }
}

// ===== Keyboard and pointer events =====

/// A keyboard event: logical key value plus physical code.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// Logical key value, layout-dependent: `"k"`, `"1"`, `"ArrowUp"`.
    pub key: String,
    /// Physical code, layout-independent: `"KeyK"`, `"Digit1"`, `"Numpad1"`.
    pub code: String,
    pub modifiers: Modifiers,
}

impl KeyEvent {
    pub fn new(key: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            code: code.into(),
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

/// A pointer event, carrying the numeric button code the windowing layer
/// reported (0 = primary, 1 = middle, 2 = secondary).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    pub button: u16,
    pub modifiers: Modifiers,
}

impl PointerEvent {
    pub fn new(button: u16) -> Self {
        Self {
            button,
            modifiers: Modifiers::default(),
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }
}

// ===== The dispatch envelope =====

/// Keyboard or pointer payload of an [`InputEvent`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EventKind {
    Key(KeyEvent),
    Pointer(PointerEvent),
}

/// One input event flowing through dispatch, with its consumption flags.
///
/// The flags start cleared and are only ever raised, by the dispatcher when a
/// command fires or by hook observers that want to swallow the event.
#[derive(Clone, Debug)]
pub struct InputEvent {
    kind: EventKind,
    propagation_stopped: bool,
    default_prevented: bool,
}

impl InputEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            propagation_stopped: false,
            default_prevented: false,
        }
    }

    pub fn kind(&self) -> &EventKind {
        &self.kind
    }

    pub fn as_key(&self) -> Option<&KeyEvent> {
        match &self.kind {
            EventKind::Key(key_event) => Some(key_event),
            EventKind::Pointer(_) => None,
        }
    }

    pub fn as_pointer(&self) -> Option<&PointerEvent> {
        match &self.kind {
            EventKind::Key(_) => None,
            EventKind::Pointer(pointer_event) => Some(pointer_event),
        }
    }

    /// Modifier flags of the underlying event, whichever kind it is.
    pub fn modifiers(&self) -> Modifiers {
        match &self.kind {
            EventKind::Key(key_event) => key_event.modifiers,
            EventKind::Pointer(pointer_event) => pointer_event.modifiers,
        }
    }

    /// Ask the shell not to deliver this event to further listeners.
    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Ask the shell to suppress the platform's default reaction.
    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

impl From<KeyEvent> for InputEvent {
    fn from(event: KeyEvent) -> Self {
        Self::new(EventKind::Key(event))
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::new(EventKind::Pointer(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifiers_builders_compose() {
        let mods = Modifiers::ctrl().with_shift();
        assert!(mods.ctrl);
        assert!(mods.shift);
        assert!(!mods.alt);
        assert!(!mods.meta);
        assert!(mods.any());
        assert!(!mods.none());
        assert!(Modifiers::default().none());
    }

    #[test]
    fn flags_start_cleared_and_latch() {
        let mut event = InputEvent::from(KeyEvent::new("k", "KeyK"));
        assert!(!event.propagation_stopped());
        assert!(!event.default_prevented());

        event.stop_propagation();
        event.prevent_default();
        assert!(event.propagation_stopped());
        assert!(event.default_prevented());
    }

    #[test]
    fn modifiers_accessor_covers_both_kinds() {
        let key = InputEvent::from(KeyEvent::new("k", "KeyK").with_modifiers(Modifiers::meta()));
        assert!(key.modifiers().meta);

        let pointer = InputEvent::from(PointerEvent::new(2).with_modifiers(Modifiers::ctrl()));
        assert!(pointer.modifiers().ctrl);
        assert!(pointer.as_pointer().is_some());
        assert!(pointer.as_key().is_none());
    }
}
