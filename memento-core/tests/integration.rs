//! Integration Tests — End-to-End Save/Restore Flows
//!
//! Exercises the public API the way a caller would: config-driven
//! caretakers, interleaved saves and restores, and several independent
//! originator/caretaker pairs.

use memento_core::{
    Caretaker, MementoConfig, Originator, RestoreOutcome, SharedCaretaker, SharedOriginator,
    Snapshot,
};

// ---------------------------------------------------------------------------
// Literal three-state walkthrough
// ---------------------------------------------------------------------------

#[test]
fn three_states_roll_back_newest_first() {
    let mut originator: Originator<String> = Originator::default();
    let mut caretaker = Caretaker::new();
    let mut observed = Vec::new();

    for label in ["State 1", "State 2", "State 3"] {
        originator.set_state(label.to_string());
        observed.push(originator.to_string());
        caretaker.save_memento(originator.save_state());
    }
    for _ in 0..3 {
        caretaker.restore_last_state(&mut originator);
        observed.push(originator.to_string());
    }

    assert_eq!(
        observed,
        ["State 1", "State 2", "State 3", "State 3", "State 2", "State 1"]
    );

    let fourth = caretaker.restore_last_state(&mut originator);
    assert_eq!(fourth, RestoreOutcome::NothingToRestore);
    assert_eq!(originator.state(), "State 1");
}

// ---------------------------------------------------------------------------
// Restore applies the value at save time, not the value before it
// ---------------------------------------------------------------------------

#[test]
fn restore_applies_snapshot_value_not_previous_value() {
    let mut originator = Originator::new("before".to_string());
    let mut caretaker = Caretaker::new();

    originator.set_state("saved".to_string());
    caretaker.save_memento(originator.save_state());
    originator.set_state("after".to_string());

    caretaker.restore_last_state(&mut originator);
    assert_eq!(originator.state(), "saved");
}

// ---------------------------------------------------------------------------
// Interleaving saves and restores keeps LIFO discipline
// ---------------------------------------------------------------------------

#[test]
fn interleaved_saves_and_restores() {
    let mut originator = Originator::new(0_u32);
    let mut caretaker = Caretaker::new();

    originator.set_state(1);
    caretaker.save_memento(originator.save_state());
    originator.set_state(2);
    caretaker.save_memento(originator.save_state());

    caretaker.restore_last_state(&mut originator);
    assert_eq!(*originator.state(), 2);

    originator.set_state(3);
    caretaker.save_memento(originator.save_state());
    assert_eq!(caretaker.len(), 2);

    caretaker.restore_last_state(&mut originator);
    assert_eq!(*originator.state(), 3);
    caretaker.restore_last_state(&mut originator);
    assert_eq!(*originator.state(), 1);
    assert!(caretaker.is_empty());
}

// ---------------------------------------------------------------------------
// Independent pairs do not share history
// ---------------------------------------------------------------------------

#[test]
fn caretakers_are_independent() {
    let mut doc_a = Originator::new("a0".to_string());
    let mut doc_b = Originator::new("b0".to_string());
    let mut history_a = Caretaker::new();
    let mut history_b = Caretaker::new();

    history_a.save_memento(doc_a.save_state());
    doc_a.set_state("a1".to_string());

    assert_eq!(
        history_b.restore_last_state(&mut doc_b),
        RestoreOutcome::NothingToRestore
    );
    assert!(history_a.restore_last_state(&mut doc_a).is_restored());
    assert_eq!(doc_a.state(), "a0");
    assert_eq!(doc_b.state(), "b0");
}

// ---------------------------------------------------------------------------
// Structured payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
struct Cursor {
    line: usize,
    column: usize,
    text: String,
}

#[test]
fn struct_payloads_round_trip() {
    let mut editor = Originator::new(Cursor {
        line: 0,
        column: 0,
        text: String::new(),
    });
    let mut caretaker = Caretaker::new();

    let typed = Cursor {
        line: 2,
        column: 5,
        text: "hello".to_string(),
    };
    editor.set_state(typed.clone());
    caretaker.save_memento(editor.save_state());
    editor.set_state(Cursor {
        line: 9,
        column: 0,
        text: "oops".to_string(),
    });

    caretaker.restore_last_state(&mut editor);
    assert_eq!(editor.into_state(), typed);
}

// ---------------------------------------------------------------------------
// Config-driven construction
// ---------------------------------------------------------------------------

#[test]
fn config_bounds_history_depth() {
    let config = MementoConfig::from_toml("[history]\nmax_depth = 2").expect("valid config");
    let mut originator = Originator::new(String::new());
    let mut caretaker = Caretaker::from_config(&config.history);

    for label in &config.demo.labels {
        originator.set_state(label.clone());
        caretaker.save_memento(originator.save_state());
    }
    assert_eq!(caretaker.len(), 2);

    caretaker.restore_last_state(&mut originator);
    caretaker.restore_last_state(&mut originator);
    assert_eq!(originator.state(), "State 2");
    assert!(!caretaker.restore_last_state(&mut originator).is_restored());
}

// ---------------------------------------------------------------------------
// Shared handles across threads
// ---------------------------------------------------------------------------

#[test]
fn shared_pair_across_threads() {
    let originator = SharedOriginator::new(String::new());
    let caretaker = SharedCaretaker::new();

    let writer = {
        let originator = originator.clone();
        let caretaker = caretaker.clone();
        std::thread::spawn(move || {
            for label in ["State 1", "State 2", "State 3"] {
                originator.set_state(label.to_string());
                caretaker.save_from(&originator);
            }
        })
    };
    writer.join().expect("writer panicked");

    assert_eq!(caretaker.len(), 3);
    for expected in ["State 3", "State 2", "State 1"] {
        assert!(caretaker.restore_last_state(&originator).is_restored());
        assert_eq!(originator.state(), expected);
    }

    caretaker.save_memento(Snapshot::new("manual".to_string()));
    caretaker.restore_last_state(&originator);
    assert_eq!(originator.state(), "manual");
}
