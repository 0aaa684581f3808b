//! Packdesk client: narrow interface to the remote pack optimizer.
mod api;
mod handle;
mod types;

pub use api::{ClientSettings, HttpOptimizerClient, OptimizerApi};
pub use handle::{ClientEvent, ClientHandle};
pub use types::{BreakdownEntry, RemoteError};
