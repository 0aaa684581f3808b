use std::collections::HashSet;
use std::fmt;

/// Why local validation refused input before any network call.
///
/// Positions are 1-based because they name form slots shown to the user.
/// `position` is `None` for the single amount field, which has no slot index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectionReason {
    EmptyCollection,
    BlankEntry { position: Option<usize> },
    NotAPositiveInteger { position: Option<usize> },
    DuplicateValue { value: u64 },
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectionReason::EmptyCollection => {
                write!(f, "Add at least one pack size before saving.")
            }
            RejectionReason::BlankEntry {
                position: Some(position),
            } => write!(f, "Pack size {position} is empty."),
            RejectionReason::BlankEntry { position: None } => write!(f, "Amount is required."),
            RejectionReason::NotAPositiveInteger {
                position: Some(position),
            } => write!(f, "Pack size {position} must be a positive integer."),
            RejectionReason::NotAPositiveInteger { position: None } => {
                write!(f, "Amount must be a positive integer.")
            }
            RejectionReason::DuplicateValue { value } => {
                write!(f, "Pack size {value} is duplicated.")
            }
        }
    }
}

/// Validates the pending pack-size form into an ordered set of sizes.
///
/// Single pass, left to right: the first offending entry wins, so a duplicate
/// is always reported by its value at the second occurrence. Input order is
/// preserved on success.
pub fn validate_pack_sizes(raw_entries: &[String]) -> Result<Vec<u64>, RejectionReason> {
    if raw_entries.is_empty() {
        return Err(RejectionReason::EmptyCollection);
    }

    let mut seen = HashSet::new();
    let mut sizes = Vec::with_capacity(raw_entries.len());
    for (index, raw) in raw_entries.iter().enumerate() {
        let position = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RejectionReason::BlankEntry {
                position: Some(position),
            });
        }
        let size = parse_positive(trimmed).ok_or(RejectionReason::NotAPositiveInteger {
            position: Some(position),
        })?;
        if !seen.insert(size) {
            return Err(RejectionReason::DuplicateValue { value: size });
        }
        sizes.push(size);
    }
    Ok(sizes)
}

/// Validates a raw order amount into a positive integer.
pub fn validate_amount(raw: &str) -> Result<u64, RejectionReason> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(RejectionReason::BlankEntry { position: None });
    }
    parse_positive(trimmed).ok_or(RejectionReason::NotAPositiveInteger { position: None })
}

/// Accepts only all-digit text parsing to a non-zero u64.
///
/// Signs, whitespace, separators and anything overflowing u64 all fail here,
/// so "-5" and "18446744073709551616" are rejected alike.
fn parse_positive(text: &str) -> Option<u64> {
    if !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    match text.parse::<u64>() {
        Ok(value) if value > 0 => Some(value),
        _ => None,
    }
}
