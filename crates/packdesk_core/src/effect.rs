/// Requested remote interactions, executed outside the pure core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchPackSizes,
    ReplacePackSizes { pack_sizes: Vec<u64> },
    ComputeBreakdown { amount: u64 },
}
