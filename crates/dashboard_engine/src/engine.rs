use std::io;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;
use std::time::Duration;

use dashboard_logging::{dashboard_info, dashboard_warn};

use crate::client::InsightsApi;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    FetchInsights {
        request_id: RequestId,
        name: String,
        location: String,
    },
    RegenerateHeadline {
        request_id: RequestId,
        name: String,
        location: String,
    },
}

/// Runs backend calls on a tokio runtime owned by a worker thread.
///
/// Every command produces exactly one `EngineEvent` carrying its request id.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_rx: Arc<Mutex<mpsc::Receiver<EngineEvent>>>,
}

impl EngineHandle {
    pub fn new(api: Arc<dyn InsightsApi>) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let api = api.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = handle_command(api.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
        })
    }

    pub fn fetch_insights(
        &self,
        request_id: RequestId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::FetchInsights {
            request_id,
            name: name.into(),
            location: location.into(),
        });
    }

    pub fn regenerate_headline(
        &self,
        request_id: RequestId,
        name: impl Into<String>,
        location: impl Into<String>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::RegenerateHeadline {
            request_id,
            name: name.into(),
            location: location.into(),
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.try_recv().ok()
    }

    pub fn recv_timeout(&self, timeout: Duration) -> Option<EngineEvent> {
        self.event_rx.lock().ok()?.recv_timeout(timeout).ok()
    }
}

async fn handle_command(api: &dyn InsightsApi, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::FetchInsights {
            request_id,
            name,
            location,
        } => {
            let result = api.fetch_insights(&name, &location).await;
            match &result {
                Ok(_) => dashboard_info!("Business data request_id={} ok", request_id),
                Err(err) => dashboard_warn!("Business data request_id={} failed: {}", request_id, err),
            }
            EngineEvent::InsightsFetched { request_id, result }
        }
        EngineCommand::RegenerateHeadline {
            request_id,
            name,
            location,
        } => {
            let result = api.regenerate_headline(&name, &location).await;
            match &result {
                Ok(_) => dashboard_info!("Headline request_id={} ok", request_id),
                Err(err) => dashboard_warn!("Headline request_id={} failed: {}", request_id, err),
            }
            EngineEvent::HeadlineRegenerated { request_id, result }
        }
    }
}
