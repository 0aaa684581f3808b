use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use crate::api::{ClientSettings, HttpOptimizerClient, OptimizerApi};
use crate::types::{BreakdownEntry, RemoteError};

enum ClientCommand {
    FetchPackSizes,
    ReplacePackSizes { pack_sizes: Vec<u64> },
    ComputeBreakdown { amount: u64 },
}

/// Resolved remote operation, one event per issued command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientEvent {
    PackSizesFetched(Result<Vec<u64>, RemoteError>),
    PackSizesReplaced(Result<Vec<u64>, RemoteError>),
    BreakdownComputed {
        amount: u64,
        result: Result<Vec<BreakdownEntry>, RemoteError>,
    },
}

/// Bridge between the synchronous message pump and the async HTTP client.
///
/// Commands are queued from any thread; a dedicated thread drives a tokio
/// runtime and emits one `ClientEvent` per command. Commands are never
/// cancelled: once sent, each resolves to exactly one event, however late.
#[derive(Clone)]
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<ClientEvent>>>,
}

impl ClientHandle {
    pub fn new(settings: ClientSettings) -> Result<Self, RemoteError> {
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();
        let api = Arc::new(HttpOptimizerClient::new(settings)?);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = run_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch_pack_sizes(&self) {
        let _ = self.cmd_tx.send(ClientCommand::FetchPackSizes);
    }

    pub fn replace_pack_sizes(&self, pack_sizes: Vec<u64>) {
        let _ = self.cmd_tx.send(ClientCommand::ReplacePackSizes { pack_sizes });
    }

    pub fn compute_breakdown(&self, amount: u64) {
        let _ = self.cmd_tx.send(ClientCommand::ComputeBreakdown { amount });
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }
}

async fn run_command(api: &dyn OptimizerApi, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::FetchPackSizes => {
            ClientEvent::PackSizesFetched(api.fetch_pack_sizes().await)
        }
        ClientCommand::ReplacePackSizes { pack_sizes } => {
            ClientEvent::PackSizesReplaced(api.replace_pack_sizes(&pack_sizes).await)
        }
        ClientCommand::ComputeBreakdown { amount } => ClientEvent::BreakdownComputed {
            amount,
            result: api.compute_breakdown(amount).await,
        },
    }
}
