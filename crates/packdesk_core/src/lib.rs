//! Packdesk core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod validate;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{AppState, BreakdownEntry, OperationStatus};
pub use update::update;
pub use validate::{validate_amount, validate_pack_sizes, RejectionReason};
pub use view_model::{breakdown_totals, AppViewModel, BreakdownRowView, BreakdownTotals};
