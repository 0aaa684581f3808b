use crate::state::{BreakdownEntry, OperationStatus};

/// Display-only totals over the current breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BreakdownTotals {
    pub total_packs: u64,
    pub total_units_shipped: u64,
}

/// Σ count and Σ size·count over a breakdown, saturating at u64::MAX.
pub fn breakdown_totals(breakdown: &[BreakdownEntry]) -> BreakdownTotals {
    breakdown
        .iter()
        .fold(BreakdownTotals::default(), |totals, entry| BreakdownTotals {
            total_packs: totals.total_packs.saturating_add(entry.count),
            total_units_shipped: totals
                .total_units_shipped
                .saturating_add(entry.size.saturating_mul(entry.count)),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRowView {
    pub size: u64,
    pub count: u64,
    /// size × count, precomputed for the table's per-row column.
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub pack_entries: Vec<String>,
    pub amount_input: String,
    pub load: OperationStatus,
    pub save: OperationStatus,
    pub calculate: OperationStatus,
    pub breakdown: Vec<BreakdownRowView>,
    pub totals: BreakdownTotals,
    pub dirty: bool,
}

impl AppViewModel {
    /// True while the matching action should be disabled in the interface.
    pub fn loading(&self) -> bool {
        self.load.is_in_flight()
    }

    pub fn saving(&self) -> bool {
        self.save.is_in_flight()
    }

    pub fn calculating(&self) -> bool {
        self.calculate.is_in_flight()
    }
}
