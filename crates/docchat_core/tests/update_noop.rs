use std::sync::Once;

use docchat_core::{update, AppState, Msg};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

#[test]
fn tick_changes_nothing() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (next, effects) = update(state, Msg::Tick);

    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
}

#[test]
fn noop_changes_nothing() {
    init_logging();
    let state = AppState::new();
    let before = state.view();

    let (next, effects) = update(state, Msg::NoOp);

    assert_eq!(next.view(), before);
    assert!(effects.is_empty());
}

#[test]
fn unchanged_draft_does_not_mark_dirty() {
    init_logging();
    let (mut state, _) = update(AppState::new(), Msg::DraftChanged("abc".to_string()));
    assert!(state.consume_dirty());

    let (mut state, _) = update(state, Msg::DraftChanged("abc".to_string()));
    assert!(!state.consume_dirty());
}

#[test]
fn completion_for_unknown_placeholder_still_appends_answer() {
    init_logging();
    let (state, effects) = update(
        AppState::new(),
        Msg::QueryFinished {
            placeholder_id: 42,
            result: Ok("late answer".to_string()),
        },
    );

    assert!(effects.is_empty());
    let view = state.view();
    assert_eq!(view.messages.len(), 1);
    assert_eq!(view.messages[0].text, "late answer");
}
