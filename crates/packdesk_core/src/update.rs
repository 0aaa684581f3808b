use crate::validate::{validate_amount, validate_pack_sizes};
use crate::{AppState, Effect, Msg, OperationStatus};

/// Pure update function: applies a message to state and returns any effects.
///
/// Statuses of the three operations (load, save, calculate) are independent
/// slots. Re-entry while a slot is InFlight is not guarded here: the shell
/// disables the triggering action instead, and if two responses for the same
/// slot do arrive, the later one silently wins.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested => {
            state.set_load_status(OperationStatus::InFlight);
            vec![Effect::FetchPackSizes]
        }
        Msg::PackSizesLoaded(Ok(sizes)) => {
            let message = loaded_message(sizes.len());
            state.adopt_pack_sizes(&sizes);
            state.set_load_status(OperationStatus::Succeeded(message));
            Vec::new()
        }
        Msg::PackSizesLoaded(Err(message)) => {
            // The previously known configuration stays in the form.
            state.set_load_status(OperationStatus::Failed(message));
            Vec::new()
        }
        Msg::EntryAdded => {
            // Any edit makes the form unsaved again; drop the stale save
            // message, success and error alike.
            state.set_save_status(OperationStatus::Idle);
            state.add_blank_entry();
            Vec::new()
        }
        Msg::EntryEdited { position, text } => {
            state.set_save_status(OperationStatus::Idle);
            state.edit_entry(position, text);
            Vec::new()
        }
        Msg::EntryDeleted { position } => {
            state.set_save_status(OperationStatus::Idle);
            state.delete_entry(position);
            Vec::new()
        }
        Msg::SaveRequested => match validate_pack_sizes(state.pack_inputs()) {
            Ok(pack_sizes) => {
                state.set_save_status(OperationStatus::InFlight);
                vec![Effect::ReplacePackSizes { pack_sizes }]
            }
            Err(reason) => {
                state.set_save_status(OperationStatus::Failed(reason.to_string()));
                Vec::new()
            }
        },
        Msg::PackSizesSaved(Ok(sizes)) => {
            let message = format!("Saved {} pack sizes.", sizes.len());
            state.adopt_pack_sizes(&sizes);
            state.set_save_status(OperationStatus::Succeeded(message));
            Vec::new()
        }
        Msg::PackSizesSaved(Err(message)) => {
            // No rollback to server truth: the pending values stay editable.
            state.set_save_status(OperationStatus::Failed(message));
            Vec::new()
        }
        Msg::AmountEdited(text) => {
            state.set_amount_input(text);
            Vec::new()
        }
        Msg::CalculateRequested => match validate_amount(state.amount_input()) {
            Ok(amount) => {
                state.set_calculate_status(OperationStatus::InFlight);
                vec![Effect::ComputeBreakdown { amount }]
            }
            Err(reason) => {
                // Local rejection leaves any previous breakdown on screen.
                state.set_calculate_status(OperationStatus::Failed(reason.to_string()));
                Vec::new()
            }
        },
        Msg::BreakdownComputed {
            amount,
            result: Ok(entries),
        } => {
            state.replace_breakdown(entries);
            state.set_calculate_status(OperationStatus::Succeeded(format!(
                "Calculated breakdown for amount {amount}."
            )));
            Vec::new()
        }
        Msg::BreakdownComputed {
            result: Err(message),
            ..
        } => {
            // A stale breakdown next to a fresh error would misreport the
            // current query, so the table is emptied on remote failure.
            state.clear_breakdown();
            state.set_calculate_status(OperationStatus::Failed(message));
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn loaded_message(count: usize) -> String {
    if count == 0 {
        "No pack sizes configured yet.".to_string()
    } else {
        format!("Loaded {count} pack sizes.")
    }
}
