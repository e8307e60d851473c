//! Key tokens and the textual key-sequence parser.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One element of a command's key combination.
///
/// A named token is either a logical modifier name (`CtrlCmd`, `Ctrl`, `Alt`,
/// `Meta`, `Cmd`, `Win`, `Shift`, matched case-sensitively) or a literal key
/// such as `"K"`, `"1"`, `"Up"`. Mouse buttons are carried as the numeric
/// button code the pointer event reports.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyToken {
    Named(String),
    Button(u16),
}

impl KeyToken {
    pub fn named(name: impl Into<String>) -> Self {
        KeyToken::Named(name.into())
    }

    pub fn button(code: u16) -> Self {
        KeyToken::Button(code)
    }

    pub fn as_named(&self) -> Option<&str> {
        match self {
            KeyToken::Named(name) => Some(name),
            KeyToken::Button(_) => None,
        }
    }

    pub fn as_button(&self) -> Option<u16> {
        match self {
            KeyToken::Named(_) => None,
            KeyToken::Button(code) => Some(*code),
        }
    }
}

impl From<&str> for KeyToken {
    fn from(name: &str) -> Self {
        KeyToken::named(name)
    }
}

impl From<String> for KeyToken {
    fn from(name: String) -> Self {
        KeyToken::Named(name)
    }
}

impl From<u16> for KeyToken {
    fn from(code: u16) -> Self {
        KeyToken::Button(code)
    }
}

impl fmt::Display for KeyToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyToken::Named(name) => f.write_str(name),
            KeyToken::Button(code) => write!(f, "Button{}", code),
        }
    }
}

/// Errors from [`parse_keys`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeysParseError {
    #[error("key sequence is empty")]
    Empty,
    #[error("empty token at position {0} in key sequence")]
    EmptyToken(usize),
}

/// Parse a `+`-separated key sequence such as `"CtrlCmd+Shift+K"`.
///
/// Whitespace around tokens is trimmed; token spelling is otherwise kept as
/// written. Mouse buttons have no textual form, build those combinations with
/// [`KeyToken::button`].
pub fn parse_keys(sequence: &str) -> Result<Vec<KeyToken>, KeysParseError> {
    if sequence.trim().is_empty() {
        return Err(KeysParseError::Empty);
    }
    let mut keys = Vec::new();
    for (position, part) in sequence.split('+').enumerate() {
        let part = part.trim();
        if part.is_empty() {
            return Err(KeysParseError::EmptyToken(position));
        }
        keys.push(KeyToken::named(part));
    }
    Ok(keys)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_modifier_chain() {
        let keys = parse_keys("CtrlCmd+Shift+K").unwrap();
        assert_eq!(
            keys,
            vec![
                KeyToken::named("CtrlCmd"),
                KeyToken::named("Shift"),
                KeyToken::named("K"),
            ]
        );
    }

    #[test]
    fn trims_whitespace_around_tokens() {
        let keys = parse_keys(" Ctrl + K ").unwrap();
        assert_eq!(keys, vec![KeyToken::named("Ctrl"), KeyToken::named("K")]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(parse_keys(""), Err(KeysParseError::Empty));
        assert_eq!(parse_keys("   "), Err(KeysParseError::Empty));
    }

    #[test]
    fn rejects_empty_tokens_with_position() {
        assert_eq!(parse_keys("Ctrl++K"), Err(KeysParseError::EmptyToken(1)));
        assert_eq!(parse_keys("Ctrl+"), Err(KeysParseError::EmptyToken(1)));
        assert_eq!(parse_keys("+K"), Err(KeysParseError::EmptyToken(0)));
    }

    #[test]
    fn conversions_and_display() {
        assert_eq!(KeyToken::from("K"), KeyToken::named("K"));
        assert_eq!(KeyToken::from(2u16), KeyToken::button(2));
        assert_eq!(KeyToken::named("Up").to_string(), "Up");
        assert_eq!(KeyToken::button(0).to_string(), "Button0");
        assert_eq!(KeyToken::named("K").as_named(), Some("K"));
        assert_eq!(KeyToken::button(1).as_button(), Some(1));
        assert_eq!(KeyToken::named("K").as_button(), None);
    }

    #[test]
    fn serde_mixes_names_and_button_codes() {
        let keys: Vec<KeyToken> = serde_json::from_str(r#"["CtrlCmd", 0]"#).unwrap();
        assert_eq!(keys, vec![KeyToken::named("CtrlCmd"), KeyToken::button(0)]);
        assert_eq!(
            serde_json::to_string(&keys).unwrap(),
            r#"["CtrlCmd",0]"#
        );
    }
}
