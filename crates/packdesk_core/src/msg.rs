use crate::BreakdownEntry;

/// Remote results cross into the core as `Result<_, String>` carrying only
/// the displayable failure message; the core never sees transport shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Kick off the initial pack-size fetch. Sent once at interface startup.
    LoadRequested,
    /// Remote read of the configured pack sizes finished.
    PackSizesLoaded(Result<Vec<u64>, String>),
    /// User clicked "Add size": append a blank form slot.
    EntryAdded,
    /// User edited one pack-size slot (0-based position).
    EntryEdited { position: usize, text: String },
    /// User deleted one pack-size slot.
    EntryDeleted { position: usize },
    /// User submitted the pending form for saving.
    SaveRequested,
    /// Remote replace of the configured pack sizes finished.
    PackSizesSaved(Result<Vec<u64>, String>),
    /// User edited the amount input box.
    AmountEdited(String),
    /// User submitted the current amount for calculation.
    CalculateRequested,
    /// Remote breakdown query finished for the named amount.
    BreakdownComputed {
        amount: u64,
        result: Result<Vec<BreakdownEntry>, String>,
    },
    /// Fallback for placeholder wiring.
    NoOp,
}
