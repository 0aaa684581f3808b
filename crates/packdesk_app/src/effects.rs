use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use console_logging::{console_info, console_warn};
use packdesk_client::{ClientEvent, ClientHandle, ClientSettings, RemoteError};
use packdesk_core::{BreakdownEntry, Effect, Msg};

/// Executes core effects against the remote client and feeds the resolved
/// results back into the message pump.
pub struct EffectRunner {
    client: ClientHandle,
}

impl EffectRunner {
    pub fn new(settings: ClientSettings, msg_tx: mpsc::Sender<Msg>) -> Result<Self, RemoteError> {
        let client = ClientHandle::new(settings)?;
        let runner = Self { client };
        runner.spawn_event_loop(msg_tx);
        Ok(runner)
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPackSizes => {
                    console_info!("FetchPackSizes");
                    self.client.fetch_pack_sizes();
                }
                Effect::ReplacePackSizes { pack_sizes } => {
                    console_info!("ReplacePackSizes count={}", pack_sizes.len());
                    self.client.replace_pack_sizes(pack_sizes);
                }
                Effect::ComputeBreakdown { amount } => {
                    console_info!("ComputeBreakdown amount={}", amount);
                    self.client.compute_breakdown(amount);
                }
            }
        }
    }

    fn spawn_event_loop(&self, msg_tx: mpsc::Sender<Msg>) {
        let client = self.client.clone();
        thread::spawn(move || loop {
            if let Some(event) = client.try_recv() {
                if msg_tx.send(map_event(event)).is_err() {
                    break;
                }
            } else {
                thread::sleep(Duration::from_millis(20));
            }
        });
    }
}

/// The core only sees displayable messages, never transport error shapes.
fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::PackSizesFetched(result) => {
            Msg::PackSizesLoaded(strip_error("load", result))
        }
        ClientEvent::PackSizesReplaced(result) => {
            Msg::PackSizesSaved(strip_error("save", result))
        }
        ClientEvent::BreakdownComputed { amount, result } => Msg::BreakdownComputed {
            amount,
            result: strip_error("calculate", result.map(map_entries)),
        },
    }
}

fn strip_error<T>(operation: &str, result: Result<T, RemoteError>) -> Result<T, String> {
    result.map_err(|err| {
        console_warn!("{operation} failed: {err}");
        err.message
    })
}

fn map_entries(entries: Vec<packdesk_client::BreakdownEntry>) -> Vec<BreakdownEntry> {
    entries
        .into_iter()
        .map(|entry| BreakdownEntry {
            size: entry.size,
            count: entry.count,
        })
        .collect()
}
