use crate::view_model::{breakdown_totals, AppViewModel, BreakdownRowView};

/// One line of the remote optimizer's answer for a queried amount.
///
/// The remote service owns correctness of the breakdown; no uniqueness or
/// ordering invariant is enforced locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub size: u64,
    pub count: u64,
}

/// Lifecycle of one asynchronous operation (load, save, or calculate).
///
/// `Idle → InFlight → {Succeeded, Failed} → InFlight → …`; there is no
/// cancelled state. Terminal variants carry the user-facing message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OperationStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded(String),
    Failed(String),
}

impl OperationStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, OperationStatus::InFlight)
    }

    /// The displayable message of a terminal status, if any.
    pub fn message(&self) -> Option<&str> {
        match self {
            OperationStatus::Succeeded(message) | OperationStatus::Failed(message) => {
                Some(message)
            }
            OperationStatus::Idle | OperationStatus::InFlight => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    pack_inputs: Vec<String>,
    amount_input: String,
    breakdown: Vec<BreakdownEntry>,
    load: OperationStatus,
    save: OperationStatus,
    calculate: OperationStatus,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel {
            pack_entries: self.pack_inputs.clone(),
            amount_input: self.amount_input.clone(),
            load: self.load.clone(),
            save: self.save.clone(),
            calculate: self.calculate.clone(),
            breakdown: self
                .breakdown
                .iter()
                .map(|entry| BreakdownRowView {
                    size: entry.size,
                    count: entry.count,
                    units: entry.size.saturating_mul(entry.count),
                })
                .collect(),
            totals: breakdown_totals(&self.breakdown),
            dirty: self.dirty,
        }
    }

    /// Returns and resets the redraw flag; the shell re-renders only when set.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub fn pack_inputs(&self) -> &[String] {
        &self.pack_inputs
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn breakdown(&self) -> &[BreakdownEntry] {
        &self.breakdown
    }

    pub fn load_status(&self) -> &OperationStatus {
        &self.load
    }

    pub fn save_status(&self) -> &OperationStatus {
        &self.save
    }

    pub fn calculate_status(&self) -> &OperationStatus {
        &self.calculate
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Replaces the pending form with server-canonical sizes, stringified for
    /// editing. Server order is authoritative after any read or write.
    pub(crate) fn adopt_pack_sizes(&mut self, sizes: &[u64]) {
        self.pack_inputs = sizes.iter().map(u64::to_string).collect();
        self.mark_dirty();
    }

    pub(crate) fn add_blank_entry(&mut self) {
        self.pack_inputs.push(String::new());
        self.mark_dirty();
    }

    /// Out-of-range positions are ignored; the form cannot grow through edits.
    pub(crate) fn edit_entry(&mut self, position: usize, text: String) {
        if let Some(slot) = self.pack_inputs.get_mut(position) {
            *slot = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn delete_entry(&mut self, position: usize) {
        if position < self.pack_inputs.len() {
            self.pack_inputs.remove(position);
            self.mark_dirty();
        }
    }

    pub(crate) fn set_amount_input(&mut self, text: String) {
        self.amount_input = text;
        self.mark_dirty();
    }

    pub(crate) fn set_load_status(&mut self, status: OperationStatus) {
        self.load = status;
        self.mark_dirty();
    }

    pub(crate) fn set_save_status(&mut self, status: OperationStatus) {
        self.save = status;
        self.mark_dirty();
    }

    pub(crate) fn set_calculate_status(&mut self, status: OperationStatus) {
        self.calculate = status;
        self.mark_dirty();
    }

    pub(crate) fn replace_breakdown(&mut self, entries: Vec<BreakdownEntry>) {
        self.breakdown = entries;
        self.mark_dirty();
    }

    pub(crate) fn clear_breakdown(&mut self) {
        if !self.breakdown.is_empty() {
            self.breakdown.clear();
            self.mark_dirty();
        }
    }
}
