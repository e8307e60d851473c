//! Tests for combination matching: the modifier table, exactness, literal
//! key normalization, and pointer buttons.

use super::*;
use crate::commands::parse_keys;
use crate::events::{KeyEvent, PointerEvent};

fn combo(sequence: &str) -> Vec<KeyToken> {
    parse_keys(sequence).unwrap()
}

fn key(key: &str, code: &str, modifiers: Modifiers) -> InputEvent {
    InputEvent::from(KeyEvent::new(key, code).with_modifiers(modifiers))
}

fn pointer(button: u16, modifiers: Modifiers) -> InputEvent {
    InputEvent::from(PointerEvent::new(button).with_modifiers(modifiers))
}

#[test]
fn empty_combination_never_matches() {
    let event = key("k", "KeyK", Modifiers::ctrl());
    assert!(!matches(&event, &[], Platform::Other));
    assert!(!matches(&event, &[], Platform::MacLike));
}

#[test]
fn ctrlcmd_is_meta_on_mac() {
    let tokens = combo("CtrlCmd+K");
    assert!(matches(
        &key("k", "KeyK", Modifiers::meta()),
        &tokens,
        Platform::MacLike
    ));
    // The ctrl key is not the accelerator there.
    assert!(!matches(
        &key("k", "KeyK", Modifiers::ctrl()),
        &tokens,
        Platform::MacLike
    ));
}

#[test]
fn ctrlcmd_is_ctrl_elsewhere() {
    let tokens = combo("CtrlCmd+K");
    for platform in [Platform::Windows, Platform::Other] {
        assert!(matches(&key("k", "KeyK", Modifiers::ctrl()), &tokens, platform));
        assert!(!matches(&key("k", "KeyK", Modifiers::meta()), &tokens, platform));
    }
}

#[test]
fn unlisted_modifiers_break_the_match() {
    let tokens = combo("CtrlCmd+K");
    let event = key("k", "KeyK", Modifiers::ctrl().with_shift());
    assert!(!matches(&event, &tokens, Platform::Other));

    // Same for a bare literal with any modifier held.
    let tokens = combo("K");
    assert!(!matches(&key("k", "KeyK", Modifiers::ctrl()), &tokens, Platform::Other));
    assert!(matches(&key("k", "KeyK", Modifiers::default()), &tokens, Platform::Other));
}

#[test]
fn listed_modifiers_must_all_be_held() {
    let tokens = combo("CtrlCmd+Shift+K");
    assert!(matches(
        &key("K", "KeyK", Modifiers::ctrl().with_shift()),
        &tokens,
        Platform::Other
    ));
    assert!(!matches(
        &key("k", "KeyK", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn cmd_only_matches_on_mac() {
    let tokens = combo("Cmd+K");
    assert!(matches(
        &key("k", "KeyK", Modifiers::meta()),
        &tokens,
        Platform::MacLike
    ));
    // Off Mac the required meta bit leaves the expectation unbalanced, so
    // the combination is unmatchable with or without meta held.
    for platform in [Platform::Windows, Platform::Other] {
        assert!(!matches(&key("k", "KeyK", Modifiers::meta()), &tokens, platform));
        assert!(!matches(&key("k", "KeyK", Modifiers::default()), &tokens, platform));
    }
}

#[test]
fn win_only_matches_on_windows() {
    let tokens = combo("Win+K");
    assert!(matches(
        &key("k", "KeyK", Modifiers::meta()),
        &tokens,
        Platform::Windows
    ));
    for platform in [Platform::MacLike, Platform::Other] {
        assert!(!matches(&key("k", "KeyK", Modifiers::meta()), &tokens, platform));
    }
}

#[test]
fn meta_only_matches_on_other() {
    let tokens = combo("Meta+K");
    assert!(matches(
        &key("k", "KeyK", Modifiers::meta()),
        &tokens,
        Platform::Other
    ));
    for platform in [Platform::MacLike, Platform::Windows] {
        assert!(!matches(&key("k", "KeyK", Modifiers::meta()), &tokens, platform));
    }
}

#[test]
fn literal_matches_logical_key_value() {
    let tokens = combo("K");
    assert!(matches(&key("k", "", Modifiers::default()), &tokens, Platform::Other));
    assert!(matches(&key("K", "", Modifiers::default()), &tokens, Platform::Other));
}

#[test]
fn literal_matches_physical_code_across_layouts() {
    // AZERTY reports key "a" for the physical KeyQ position.
    let tokens = combo("CtrlCmd+Q");
    assert!(matches(
        &key("a", "KeyQ", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn digit_tokens_match_digit_and_numpad_codes() {
    let tokens = combo("CtrlCmd+1");
    assert!(matches(
        &key("&", "Digit1", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
    assert!(matches(
        &key("1", "Numpad1", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn arrow_tokens_match_with_and_without_prefix() {
    let tokens = combo("Alt+Up");
    let event = key("ArrowUp", "ArrowUp", Modifiers::alt());
    assert!(matches(&event, &tokens, Platform::Other));

    let tokens = combo("Alt+ArrowUp");
    assert!(matches(&event, &tokens, Platform::Other));
}

#[test]
fn literal_comparison_is_case_insensitive() {
    let tokens = combo("CtrlCmd+k");
    assert!(matches(
        &key("K", "KeyK", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn wrong_literal_key_fails() {
    let tokens = combo("CtrlCmd+K");
    assert!(!matches(
        &key("j", "KeyJ", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn pointer_buttons_match_by_code() {
    let tokens = vec![KeyToken::button(2)];
    assert!(matches(&pointer(2, Modifiers::default()), &tokens, Platform::Other));
    assert!(!matches(&pointer(0, Modifiers::default()), &tokens, Platform::Other));
}

#[test]
fn modified_pointer_combinations() {
    let tokens = vec![KeyToken::named("CtrlCmd"), KeyToken::button(0)];
    assert!(matches(&pointer(0, Modifiers::ctrl()), &tokens, Platform::Other));
    assert!(matches(&pointer(0, Modifiers::meta()), &tokens, Platform::MacLike));
    assert!(!matches(&pointer(0, Modifiers::default()), &tokens, Platform::Other));
    assert!(!matches(
        &pointer(0, Modifiers::ctrl().with_shift()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn event_kind_must_fit_the_token() {
    // A literal key token cannot be satisfied by a pointer event.
    let tokens = combo("CtrlCmd+K");
    assert!(!matches(&pointer(0, Modifiers::ctrl()), &tokens, Platform::Other));

    // A button token cannot be satisfied by a keyboard event.
    let tokens = vec![KeyToken::button(0)];
    assert!(!matches(
        &key("0", "Digit0", Modifiers::default()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn modifier_names_are_case_sensitive() {
    // "ctrl" is not a modifier name; it falls through to literal matching
    // and can never equal the "k" key, while the held ctrl bit stays
    // unexpected.
    let tokens = combo("ctrl+K");
    assert!(!matches(
        &key("k", "KeyK", Modifiers::ctrl()),
        &tokens,
        Platform::Other
    ));
}

#[test]
fn modifier_rule_table() {
    use ModifierFlag::{Alt, Ctrl, Meta, Shift};

    let rows = [
        (ModifierToken::CtrlCmd, Platform::MacLike, Meta, Some(Meta)),
        (ModifierToken::CtrlCmd, Platform::Windows, Ctrl, Some(Ctrl)),
        (ModifierToken::CtrlCmd, Platform::Other, Ctrl, Some(Ctrl)),
        (ModifierToken::Ctrl, Platform::MacLike, Ctrl, Some(Ctrl)),
        (ModifierToken::Alt, Platform::Windows, Alt, Some(Alt)),
        (ModifierToken::Shift, Platform::Other, Shift, Some(Shift)),
        (ModifierToken::Meta, Platform::Other, Meta, Some(Meta)),
        (ModifierToken::Meta, Platform::MacLike, Meta, None),
        (ModifierToken::Meta, Platform::Windows, Meta, None),
        (ModifierToken::Cmd, Platform::MacLike, Meta, Some(Meta)),
        (ModifierToken::Cmd, Platform::Windows, Meta, None),
        (ModifierToken::Cmd, Platform::Other, Meta, None),
        (ModifierToken::Win, Platform::Windows, Meta, Some(Meta)),
        (ModifierToken::Win, Platform::MacLike, Meta, None),
        (ModifierToken::Win, Platform::Other, Meta, None),
    ];

    for (token, platform, required, expected) in rows {
        let rule = token.rule(platform);
        assert_eq!(rule.required, required, "{:?} on {:?}", token, platform);
        assert_eq!(rule.expected, expected, "{:?} on {:?}", token, platform);
    }
}

#[test]
fn classify_recognizes_exact_names_only() {
    assert_eq!(ModifierToken::classify("CtrlCmd"), Some(ModifierToken::CtrlCmd));
    assert_eq!(ModifierToken::classify("Shift"), Some(ModifierToken::Shift));
    assert_eq!(ModifierToken::classify("shift"), None);
    assert_eq!(ModifierToken::classify("K"), None);
    assert_eq!(ModifierToken::classify("Button0"), None);
}
