//! Key-combination matching.
//!
//! Decides whether a single input event satisfies exactly one combination:
//! every listed token present, and no unlisted modifier held. Platform enters
//! through the modifier table only; literal keys compare the same everywhere.

use crate::commands::KeyToken;
use crate::events::{EventKind, InputEvent, KeyEvent, Modifiers};
use crate::platform::Platform;

/// Logical modifier names recognized in key combinations. Spelled exactly as
/// written in a combination; anything else is a literal key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierToken {
    /// The platform accelerator: Cmd on Mac-like platforms, Ctrl elsewhere.
    CtrlCmd,
    Ctrl,
    Alt,
    Meta,
    Cmd,
    Win,
    Shift,
}

/// One raw modifier bit on an event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierFlag {
    Alt,
    Ctrl,
    Meta,
    Shift,
}

impl ModifierFlag {
    fn is_set(self, modifiers: Modifiers) -> bool {
        match self {
            ModifierFlag::Alt => modifiers.alt,
            ModifierFlag::Ctrl => modifiers.ctrl,
            ModifierFlag::Meta => modifiers.meta,
            ModifierFlag::Shift => modifiers.shift,
        }
    }

    fn set(self, modifiers: &mut Modifiers) {
        match self {
            ModifierFlag::Alt => modifiers.alt = true,
            ModifierFlag::Ctrl => modifiers.ctrl = true,
            ModifierFlag::Meta => modifiers.meta = true,
            ModifierFlag::Shift => modifiers.shift = true,
        }
    }
}

/// What one modifier token demands of an event on a given platform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ModifierRule {
    /// Bit that must be set on the event, on every platform.
    pub required: ModifierFlag,
    /// Bit accumulated into the expected set for the final exactness check.
    /// `None` marks a token foreign to this platform: the required bit still
    /// has to be present, so the exactness check can never balance and the
    /// combination is unmatchable here.
    pub expected: Option<ModifierFlag>,
}

impl ModifierToken {
    /// Classify a named token. `None` means the token is a literal key.
    pub fn classify(token: &str) -> Option<Self> {
        match token {
            "CtrlCmd" => Some(ModifierToken::CtrlCmd),
            "Ctrl" => Some(ModifierToken::Ctrl),
            "Alt" => Some(ModifierToken::Alt),
            "Meta" => Some(ModifierToken::Meta),
            "Cmd" => Some(ModifierToken::Cmd),
            "Win" => Some(ModifierToken::Win),
            "Shift" => Some(ModifierToken::Shift),
            _ => None,
        }
    }

    /// The (token, platform) modifier table, kept as data rather than nested
    /// branching so each row can be checked on its own.
    pub fn rule(self, platform: Platform) -> ModifierRule {
        use ModifierFlag::{Alt, Ctrl, Meta, Shift};
        match (self, platform) {
            (ModifierToken::CtrlCmd, Platform::MacLike) => ModifierRule {
                required: Meta,
                expected: Some(Meta),
            },
            (ModifierToken::CtrlCmd, _) => ModifierRule {
                required: Ctrl,
                expected: Some(Ctrl),
            },
            (ModifierToken::Ctrl, _) => ModifierRule {
                required: Ctrl,
                expected: Some(Ctrl),
            },
            (ModifierToken::Alt, _) => ModifierRule {
                required: Alt,
                expected: Some(Alt),
            },
            (ModifierToken::Shift, _) => ModifierRule {
                required: Shift,
                expected: Some(Shift),
            },
            // Meta means the bare meta key, which only Other-platform
            // keyboards expose directly; Cmd and Win are the same bit under
            // its Mac and Windows names.
            (ModifierToken::Meta, Platform::Other) => ModifierRule {
                required: Meta,
                expected: Some(Meta),
            },
            (ModifierToken::Meta, _) => ModifierRule {
                required: Meta,
                expected: None,
            },
            (ModifierToken::Cmd, Platform::MacLike) => ModifierRule {
                required: Meta,
                expected: Some(Meta),
            },
            (ModifierToken::Cmd, _) => ModifierRule {
                required: Meta,
                expected: None,
            },
            (ModifierToken::Win, Platform::Windows) => ModifierRule {
                required: Meta,
                expected: Some(Meta),
            },
            (ModifierToken::Win, _) => ModifierRule {
                required: Meta,
                expected: None,
            },
        }
    }
}

/// Physical-code prefixes folded away when comparing literal tokens, so `"K"`
/// matches `KeyK`, `"1"` matches `Digit1` and `Numpad1`, `"Up"` matches
/// `ArrowUp`.
const CODE_PREFIXES: [&str; 4] = ["KEY", "DIGIT", "NUMPAD", "ARROW"];

/// Whether `event` satisfies exactly the combination `keys`.
///
/// An empty combination never matches. Token order is irrelevant to the
/// result; evaluation short-circuits on the first failing token. Once every
/// token passes, the event's modifiers must equal the accumulated
/// expectation, so holding an unlisted modifier fails the match.
pub fn matches(event: &InputEvent, keys: &[KeyToken], platform: Platform) -> bool {
    if keys.is_empty() {
        return false;
    }

    let actual = event.modifiers();
    let mut expected = Modifiers::default();

    for token in keys {
        match token {
            KeyToken::Named(name) => {
                if let Some(modifier) = ModifierToken::classify(name) {
                    let rule = modifier.rule(platform);
                    if let Some(flag) = rule.expected {
                        flag.set(&mut expected);
                    }
                    if !rule.required.is_set(actual) {
                        return false;
                    }
                } else {
                    let key_event = match event.kind() {
                        EventKind::Key(key_event) => key_event,
                        EventKind::Pointer(_) => return false,
                    };
                    if !literal_matches(name, key_event) {
                        return false;
                    }
                }
            }
            KeyToken::Button(button) => {
                let pointer = match event.kind() {
                    EventKind::Pointer(pointer) => pointer,
                    EventKind::Key(_) => return false,
                };
                if pointer.button != *button {
                    return false;
                }
            }
        }
    }

    actual == expected
}

/// Case-folded comparison of a literal token against the logical key value,
/// the physical code, and the code with a known prefix stripped.
fn literal_matches(token: &str, event: &KeyEvent) -> bool {
    let token = token.to_uppercase();
    if event.key.to_uppercase() == token {
        return true;
    }
    let code = event.code.to_uppercase();
    if code == token {
        return true;
    }
    CODE_PREFIXES
        .iter()
        .any(|prefix| code.strip_prefix(prefix) == Some(token.as_str()))
}

#[cfg(test)]
#[path = "keymatch_tests.rs"]
mod tests;
