//! Tests for keyboard dispatch

use proptest::prelude::*;

use super::*;
use crate::control::Group;
use crate::test_utils::test_helpers::*;
use crossterm::event::KeyModifiers;

// =========================================================================
// Down / Up
// =========================================================================

#[test]
fn test_down_with_no_selection_seeds_first_item_but_is_not_consumed() {
    let mut control = control(vec![], &["s0"], vec![action_item("search")]);

    let consumed = control.handle_key_down(key(KeyCode::Down));
    assert!(!consumed);
    assert_eq!(control.store().current_index(), Some(0));
}

#[test]
fn test_down_with_selection_advances_and_is_consumed() {
    let mut control = control(vec![], &["s0"], vec![action_item("search")]);
    control.handle_key_down(key(KeyCode::Down));

    // Single suggestion, so the next stop is the footer action.
    let consumed = control.handle_key_down(key(KeyCode::Down));
    assert!(consumed);
    assert_eq!(control.selected_footer_index(), Some(0));

    // Footer exhausted and the header is empty: wraps back to the
    // suggestion list.
    let consumed = control.handle_key_down(key(KeyCode::Down));
    assert!(consumed);
    assert_eq!(control.store().current_index(), Some(0));
}

#[test]
fn test_up_with_no_selection_seeds_last_item_but_is_not_consumed() {
    let mut control = control(vec![action_item("h0")], &["s0", "s1"], vec![]);

    let consumed = control.handle_key_down(key(KeyCode::Up));
    assert!(!consumed);
    assert_eq!(control.store().current_index(), Some(1));
}

#[test]
fn test_up_with_selection_moves_backward_and_is_consumed() {
    let mut control = control(vec![action_item("h0")], &["s0", "s1"], vec![]);
    control.handle_key_down(key(KeyCode::Up));

    let consumed = control.handle_key_down(key(KeyCode::Up));
    assert!(consumed);
    assert_eq!(control.store().current_index(), Some(0));

    let consumed = control.handle_key_down(key(KeyCode::Up));
    assert!(consumed);
    assert_eq!(control.selected_header_index(), Some(0));
}

#[test]
fn test_down_dispatches_on_the_group_holding_the_selection() {
    let mut control = control(
        vec![action_item("h0")],
        &["s0"],
        vec![action_item("f0"), action_item("f1")],
    );
    control.select_first_item();
    control.select_next_item(Group::Header);
    control.select_next_item(Group::Suggestion);
    assert_eq!(control.selected_footer_index(), Some(0));

    control.handle_key_down(key(KeyCode::Down));
    assert_eq!(control.selected_footer_index(), Some(1));
}

// =========================================================================
// Enter / Tab
// =========================================================================

#[test]
fn test_enter_with_no_selection_is_not_consumed_and_has_no_effect() {
    let (header, count) = counted_item("resolve");
    let mut control = control(vec![header], &["s0"], vec![]);

    let consumed = control.handle_key_down(key(KeyCode::Enter));
    assert!(!consumed);
    assert!(!control.has_selection());
    assert_eq!(count.get(), 0);
}

#[test]
fn test_enter_with_selection_executes_and_is_consumed() {
    let (footer, count) = counted_item("search");
    let mut control = control(vec![], &[], vec![footer]);
    control.select_first_item();

    let consumed = control.handle_key_down(key(KeyCode::Enter));
    assert!(consumed);
    assert_eq!(count.get(), 1);
}

#[test]
fn test_tab_executes_like_enter() {
    let (footer, count) = counted_item("search");
    let mut control = control(vec![], &[], vec![footer]);
    control.select_first_item();

    let consumed = control.handle_key_down(key(KeyCode::Tab));
    assert!(consumed);
    assert_eq!(count.get(), 1);
}

// =========================================================================
// Everything else
// =========================================================================

#[test]
fn test_unrelated_keys_are_not_consumed() {
    let mut control = control(vec![], &["s0"], vec![]);
    control.select_first_item();

    for code in [
        KeyCode::Char('x'),
        KeyCode::Esc,
        KeyCode::Left,
        KeyCode::Right,
        KeyCode::Backspace,
    ] {
        let consumed = control.handle_key_down(key(code));
        assert!(!consumed, "{code:?} should not be consumed");
        assert_eq!(control.store().current_index(), Some(0));
    }
}

#[test]
fn test_modifiers_are_ignored() {
    let mut control = control(vec![], &["s0", "s1"], vec![]);
    control.select_first_item();

    let consumed =
        control.handle_key_down(KeyEvent::new(KeyCode::Down, KeyModifiers::SHIFT));
    assert!(consumed);
    assert_eq!(control.store().current_index(), Some(1));
}

// =========================================================================
// Property-Based Tests
// =========================================================================

// Property: arrow keys are consumed exactly when a selection already
// existed before the press; Enter/Tab exactly when one exists at press
// time.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_arrow_keys_consumed_iff_selection_existed(
        suggestion_count in 0usize..4,
        footer_actions in 0usize..3,
        keys in prop::collection::vec(0u8..2, 1..16),
    ) {
        let suggestions: Vec<&'static str> = vec!["s0", "s1", "s2"];
        let footer = (0..footer_actions).map(|i| action_item(&format!("f{i}"))).collect();
        let mut control = control(vec![], &suggestions[..suggestion_count], footer);

        for k in keys {
            let had_selection = control.has_selection();
            let code = if k == 0 { KeyCode::Down } else { KeyCode::Up };
            let consumed = control.handle_key_down(key(code));
            prop_assert_eq!(consumed, had_selection);
        }
    }

    #[test]
    fn prop_enter_consumed_iff_selection_exists(
        suggestion_count in 0usize..3,
        seed_selection in any::<bool>(),
    ) {
        let suggestions: Vec<&'static str> = vec!["s0", "s1"];
        let mut control = control(vec![], &suggestions[..suggestion_count], vec![]);
        if seed_selection {
            control.select_first_item();
        }

        let expected = control.has_selection();
        prop_assert_eq!(control.handle_key_down(key(KeyCode::Enter)), expected);
    }
}
