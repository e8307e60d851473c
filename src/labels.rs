//! Human-readable labels for key combinations.
//!
//! Mac-like platforms get the native glyphs (⌘ ⌥ ⇧ ⌃) joined with spaces;
//! everything else gets words joined with `+`. Purely cosmetic: nothing here
//! feeds back into matching.

use crate::commands::KeyToken;
use crate::platform::Platform;

/// Display label for a single key token.
pub fn key_label(token: &KeyToken, platform: Platform) -> String {
    match token {
        KeyToken::Named(name) => named_label(name, platform),
        KeyToken::Button(button) => button_label(*button),
    }
}

/// Joined label for a whole combination.
pub fn keys_label(keys: &[KeyToken], platform: Platform) -> String {
    let separator = if platform.is_mac_like() { " " } else { "+" };
    keys.iter()
        .map(|token| key_label(token, platform))
        .collect::<Vec<_>>()
        .join(separator)
}

fn named_label(name: &str, platform: Platform) -> String {
    let mac = platform.is_mac_like();
    let label = match name {
        "CtrlCmd" => {
            if mac {
                "⌘"
            } else {
                "Ctrl"
            }
        }
        "Cmd" => {
            if mac {
                "⌘"
            } else {
                "Cmd"
            }
        }
        // The bare meta key is "Super" in Linux parlance.
        "Meta" => {
            if mac {
                "⌘"
            } else {
                "Super"
            }
        }
        "Win" => "Win",
        "Ctrl" => {
            if mac {
                "⌃"
            } else {
                "Ctrl"
            }
        }
        "Alt" => {
            if mac {
                "⌥"
            } else {
                "Alt"
            }
        }
        "Shift" => {
            if mac {
                "⇧"
            } else {
                "Shift"
            }
        }
        "Up" | "ArrowUp" => "↑",
        "Down" | "ArrowDown" => "↓",
        "Left" | "ArrowLeft" => "←",
        "Right" | "ArrowRight" => "→",
        "Enter" | "Return" => {
            if mac {
                "↵"
            } else {
                "Enter"
            }
        }
        "Escape" => {
            if mac {
                "⎋"
            } else {
                "Esc"
            }
        }
        "Tab" => {
            if mac {
                "⇥"
            } else {
                "Tab"
            }
        }
        "Space" => {
            if mac {
                "␣"
            } else {
                "Space"
            }
        }
        "Backspace" => {
            if mac {
                "⌫"
            } else {
                "Backspace"
            }
        }
        "Delete" => {
            if mac {
                "⌦"
            } else {
                "Delete"
            }
        }
        "Home" => {
            if mac {
                "↖"
            } else {
                "Home"
            }
        }
        "End" => {
            if mac {
                "↘"
            } else {
                "End"
            }
        }
        "PageUp" => {
            if mac {
                "⇞"
            } else {
                "PgUp"
            }
        }
        "PageDown" => {
            if mac {
                "⇟"
            } else {
                "PgDn"
            }
        }
        "BracketLeft" => "[",
        "BracketRight" => "]",
        "Semicolon" => ";",
        "Quote" => "'",
        "Backquote" => "`",
        "Comma" => ",",
        "Period" => ".",
        "Slash" => "/",
        "Backslash" => "\\",
        "Minus" => "-",
        "Equal" => "=",
        other => return other.to_uppercase(),
    };
    label.to_string()
}

fn button_label(button: u16) -> String {
    match button {
        0 => "Click".to_string(),
        1 => "MiddleClick".to_string(),
        2 => "RightClick".to_string(),
        other => format!("Button{}", other),
    }
}
