use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Uniform failure shape for every remote operation.
///
/// The message is always displayable as-is: either the server-supplied
/// `error.message` or a fixed per-operation fallback. Transport and parser
/// internals never leak into it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct RemoteError {
    pub message: String,
}

impl RemoteError {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One wire entry of a computed breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub size: u64,
    pub count: u64,
}

/// Body of `GET /pack-sizes`, `PUT /pack-sizes` and its echo response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct PackSizesPayload {
    pub pack_sizes: Vec<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct CalculateRequest {
    pub amount: u64,
}

/// Optional envelope carried by non-2xx responses.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorEnvelope {
    #[serde(default)]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    #[allow(dead_code)]
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
