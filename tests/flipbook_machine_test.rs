// Navigation state machine tests over the public API

use flipbook_wasm::{FlipEffect, FlipbookMachine, NavDirection};

fn last_button_state(effects: &[FlipEffect]) -> (bool, bool) {
    match effects.last() {
        Some(FlipEffect::SetButtons {
            prev_disabled,
            next_disabled,
        }) => (*prev_disabled, *next_disabled),
        other => panic!("expected trailing button state, got {:?}", other),
    }
}

#[test]
fn six_next_calls_on_five_pages_stop_at_the_back_cover() {
    let mut machine = FlipbookMachine::new(5, 300);

    let mut last_effects = Vec::new();
    for _ in 0..6 {
        let effects = machine.go_next_page();
        if !effects.is_empty() {
            last_effects = effects;
        }
    }

    assert_eq!(machine.current_location(), 6);
    assert_eq!(machine.current_location(), machine.max_location());
    let (_, next_disabled) = last_button_state(&last_effects);
    assert!(next_disabled);

    // A seventh call is a no-op.
    assert!(machine.go_next_page().is_empty());
    assert_eq!(machine.current_location(), 6);
}

#[test]
fn next_then_prev_round_trips_location_and_stacking() {
    let mut machine = FlipbookMachine::new(5, 300);
    machine.go_next_page();
    machine.go_next_page();
    let before = machine.current_location();

    machine.go_next_page();
    let effects = machine.go_prev_page();

    assert_eq!(machine.current_location(), before);
    // Page 2 was flipped and turned back; it regains its original slot
    // in the descending stack (5 - 2 = 3) once the transition clears.
    assert!(effects.contains(&FlipEffect::SetStackingDelayed {
        page: 2,
        z_index: 3,
        delay_ms: 300,
    }));
}

#[test]
fn full_forward_and_back_traversal_returns_to_the_front_cover() {
    let mut machine = FlipbookMachine::new(4, 300);
    for _ in 0..4 {
        machine.go_next_page();
    }
    assert_eq!(machine.current_location(), 5);

    for _ in 0..4 {
        machine.go_prev_page();
    }
    assert_eq!(machine.current_location(), 1);
    assert!(!machine.is_open());
    assert!(machine.go_prev_page().is_empty());
}

#[test]
fn click_position_picks_the_direction() {
    assert_eq!(FlipbookMachine::resolve_click(10.0, 640.0), NavDirection::Prev);
    assert_eq!(FlipbookMachine::resolve_click(320.0, 640.0), NavDirection::Next);
    assert_eq!(FlipbookMachine::resolve_click(600.0, 640.0), NavDirection::Next);
}

#[test]
fn effects_serialize_for_the_js_contract() {
    let mut machine = FlipbookMachine::new(2, 300);
    let effects = machine.go_next_page();
    let json = serde_json::to_string(&effects).unwrap();

    assert!(json.contains("OpenBook"));
    assert!(json.contains("MarkFlipped"));
    assert!(json.contains("SetButtons"));
}
