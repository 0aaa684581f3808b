use std::sync::Once;

use packdesk_core::{update, AppState, Effect, Msg, OperationStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(console_logging::initialize_for_tests);
}

/// Builds a form by replaying the user actions that would produce it.
fn form_with_entries(raw: &[&str]) -> AppState {
    let mut state = AppState::new();
    for (position, text) in raw.iter().enumerate() {
        let (next, _) = update(state, Msg::EntryAdded);
        let (next, _) = update(
            next,
            Msg::EntryEdited {
                position,
                text: text.to_string(),
            },
        );
        state = next;
    }
    state
}

#[test]
fn load_request_goes_in_flight_and_fetches() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::LoadRequested);

    assert_eq!(state.load_status(), &OperationStatus::InFlight);
    assert_eq!(effects, vec![Effect::FetchPackSizes]);
}

#[test]
fn load_success_populates_form_with_three_entries() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LoadRequested);
    let (state, effects) = update(state, Msg::PackSizesLoaded(Ok(vec![250, 500, 1000])));

    let view = state.view();
    assert_eq!(view.pack_entries, vec!["250", "500", "1000"]);
    assert_eq!(
        state.load_status(),
        &OperationStatus::Succeeded("Loaded 3 pack sizes.".to_string())
    );
    assert!(effects.is_empty());
}

#[test]
fn load_success_with_zero_sizes_reports_unconfigured() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::LoadRequested);
    let (state, _) = update(state, Msg::PackSizesLoaded(Ok(Vec::new())));

    assert!(state.view().pack_entries.is_empty());
    assert_eq!(
        state.load_status(),
        &OperationStatus::Succeeded("No pack sizes configured yet.".to_string())
    );
}

#[test]
fn load_failure_keeps_known_configuration() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::PackSizesLoaded(Ok(vec![250, 500])));
    let (state, _) = update(state, Msg::LoadRequested);
    let (state, _) = update(
        state,
        Msg::PackSizesLoaded(Err("service unavailable".to_string())),
    );

    assert_eq!(state.view().pack_entries, vec!["250", "500"]);
    assert_eq!(
        state.load_status(),
        &OperationStatus::Failed("service unavailable".to_string())
    );
}

#[test]
fn form_mutations_clear_the_save_message() {
    init_logging();
    let state = form_with_entries(&["250"]);
    let (state, _) = update(state, Msg::PackSizesSaved(Ok(vec![250])));
    assert!(matches!(
        state.save_status(),
        OperationStatus::Succeeded(_)
    ));

    // Each mutation makes the data unsaved again.
    let (state, _) = update(state, Msg::EntryAdded);
    assert_eq!(state.save_status(), &OperationStatus::Idle);

    let (state, _) = update(state, Msg::PackSizesSaved(Err("boom".to_string())));
    let (state, _) = update(
        state,
        Msg::EntryEdited {
            position: 1,
            text: "500".to_string(),
        },
    );
    assert_eq!(state.save_status(), &OperationStatus::Idle);

    let (state, _) = update(state, Msg::PackSizesSaved(Err("boom".to_string())));
    let (state, _) = update(state, Msg::EntryDeleted { position: 1 });
    assert_eq!(state.save_status(), &OperationStatus::Idle);
}

#[test]
fn duplicate_form_is_rejected_without_a_network_call() {
    init_logging();
    let state = form_with_entries(&["250", "250"]);
    let (state, effects) = update(state, Msg::SaveRequested);

    assert!(effects.is_empty());
    assert_eq!(
        state.save_status(),
        &OperationStatus::Failed("Pack size 250 is duplicated.".to_string())
    );
    // The pending form keeps the user's values for correction.
    assert_eq!(state.view().pack_entries, vec!["250", "250"]);
}

#[test]
fn empty_form_is_rejected_without_a_network_call() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::SaveRequested);

    assert!(effects.is_empty());
    assert_eq!(
        state.save_status(),
        &OperationStatus::Failed("Add at least one pack size before saving.".to_string())
    );
}

#[test]
fn save_emits_replace_and_adopts_the_canonical_echo() {
    init_logging();
    let state = form_with_entries(&["500", "250"]);
    let (state, effects) = update(state, Msg::SaveRequested);

    assert_eq!(state.save_status(), &OperationStatus::InFlight);
    assert_eq!(
        effects,
        vec![Effect::ReplacePackSizes {
            pack_sizes: vec![500, 250],
        }]
    );

    // The server may normalize ordering; its echo wins.
    let (state, _) = update(state, Msg::PackSizesSaved(Ok(vec![250, 500])));
    assert_eq!(state.view().pack_entries, vec!["250", "500"]);
    assert_eq!(
        state.save_status(),
        &OperationStatus::Succeeded("Saved 2 pack sizes.".to_string())
    );
}

#[test]
fn saving_twice_against_an_echoing_remote_is_idempotent() {
    init_logging();
    let mut state = form_with_entries(&["250", "500", "1000"]);
    let mut seen = Vec::new();

    for _ in 0..2 {
        let (next, effects) = update(std::mem::take(&mut state), Msg::SaveRequested);
        let [Effect::ReplacePackSizes { pack_sizes }] = effects.as_slice() else {
            panic!("expected a single replace effect, got {effects:?}");
        };
        let (next, _) = update(next, Msg::PackSizesSaved(Ok(pack_sizes.clone())));
        seen.push((next.view().pack_entries, next.save_status().clone()));
        state = next;
    }

    assert_eq!(seen[0], seen[1]);
    assert_eq!(seen[0].0, vec!["250", "500", "1000"]);
}

#[test]
fn save_failure_keeps_the_pending_form() {
    init_logging();
    let state = form_with_entries(&["250", "777"]);
    let (state, _) = update(state, Msg::SaveRequested);
    let (state, _) = update(
        state,
        Msg::PackSizesSaved(Err("Failed to save pack sizes.".to_string())),
    );

    // No rollback to server truth; the user corrects and retries.
    assert_eq!(state.view().pack_entries, vec!["250", "777"]);
    assert_eq!(
        state.save_status(),
        &OperationStatus::Failed("Failed to save pack sizes.".to_string())
    );
}

#[test]
fn out_of_range_positions_are_ignored() {
    init_logging();
    let state = form_with_entries(&["250"]);
    let (state, _) = update(
        state,
        Msg::EntryEdited {
            position: 9,
            text: "500".to_string(),
        },
    );
    assert_eq!(state.view().pack_entries, vec!["250"]);

    let (state, _) = update(state, Msg::EntryDeleted { position: 9 });
    assert_eq!(state.view().pack_entries, vec!["250"]);
}
