use std::sync::Once;

use packdesk_core::{update, AppState, BreakdownEntry, Effect, Msg, OperationStatus};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(console_logging::initialize_for_tests);
}

fn submit_amount(state: AppState, raw: &str) -> (AppState, Vec<Effect>) {
    let (state, _) = update(state, Msg::AmountEdited(raw.to_string()));
    update(state, Msg::CalculateRequested)
}

fn breakdown_751() -> Vec<BreakdownEntry> {
    vec![
        BreakdownEntry {
            size: 500,
            count: 1,
        },
        BreakdownEntry {
            size: 250,
            count: 2,
        },
    ]
}

#[test]
fn valid_amount_goes_in_flight_and_queries() {
    init_logging();
    let (state, effects) = submit_amount(AppState::new(), "751");

    assert_eq!(state.calculate_status(), &OperationStatus::InFlight);
    assert_eq!(effects, vec![Effect::ComputeBreakdown { amount: 751 }]);
}

#[test]
fn success_stores_breakdown_and_names_the_amount() {
    init_logging();
    let (state, _) = submit_amount(AppState::new(), "751");
    let (state, effects) = update(
        state,
        Msg::BreakdownComputed {
            amount: 751,
            result: Ok(breakdown_751()),
        },
    );

    let view = state.view();
    assert_eq!(view.breakdown.len(), 2);
    assert_eq!(view.breakdown[0].units, 500);
    assert_eq!(view.breakdown[1].units, 500);
    assert_eq!(view.totals.total_packs, 3);
    assert_eq!(view.totals.total_units_shipped, 1000);
    assert_eq!(
        state.calculate_status(),
        &OperationStatus::Succeeded("Calculated breakdown for amount 751.".to_string())
    );
    assert!(effects.is_empty());
}

#[test]
fn remote_failure_clears_the_breakdown() {
    init_logging();
    let (state, _) = submit_amount(AppState::new(), "751");
    let (state, _) = update(
        state,
        Msg::BreakdownComputed {
            amount: 751,
            result: Ok(breakdown_751()),
        },
    );
    let (state, _) = submit_amount(state, "900");
    let (state, _) = update(
        state,
        Msg::BreakdownComputed {
            amount: 900,
            result: Err("service unavailable".to_string()),
        },
    );

    let view = state.view();
    assert!(view.breakdown.is_empty());
    assert_eq!(view.totals.total_packs, 0);
    assert_eq!(view.totals.total_units_shipped, 0);
    assert_eq!(
        state.calculate_status(),
        &OperationStatus::Failed("service unavailable".to_string())
    );
}

#[test]
fn local_rejection_keeps_the_previous_breakdown() {
    init_logging();
    let (state, _) = submit_amount(AppState::new(), "751");
    let (state, _) = update(
        state,
        Msg::BreakdownComputed {
            amount: 751,
            result: Ok(breakdown_751()),
        },
    );

    let (state, effects) = submit_amount(state, "-5");

    assert!(effects.is_empty());
    assert_eq!(
        state.calculate_status(),
        &OperationStatus::Failed("Amount must be a positive integer.".to_string())
    );
    // No network call, so the displayed breakdown is still the 751 result.
    assert_eq!(state.view().totals.total_packs, 3);
}

#[test]
fn blank_amount_is_rejected_locally() {
    init_logging();
    let (state, effects) = submit_amount(AppState::new(), "   ");

    assert!(effects.is_empty());
    assert_eq!(
        state.calculate_status(),
        &OperationStatus::Failed("Amount is required.".to_string())
    );
}

#[test]
fn later_response_silently_overwrites_the_earlier_one() {
    init_logging();
    // Two back-to-back calculations with no epoch check: the response that
    // arrives last wins, whatever its order of issue.
    let (state, _) = submit_amount(AppState::new(), "751");
    let (state, _) = submit_amount(state, "250");
    let (state, _) = update(
        state,
        Msg::BreakdownComputed {
            amount: 250,
            result: Ok(vec![BreakdownEntry {
                size: 250,
                count: 1,
            }]),
        },
    );
    let (state, _) = update(
        state,
        Msg::BreakdownComputed {
            amount: 751,
            result: Ok(breakdown_751()),
        },
    );

    assert_eq!(state.view().totals.total_packs, 3);
    assert_eq!(
        state.calculate_status(),
        &OperationStatus::Succeeded("Calculated breakdown for amount 751.".to_string())
    );
}
