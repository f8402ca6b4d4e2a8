use std::collections::HashMap;
use std::future::Future;
use std::sync::{mpsc, Arc, Mutex, PoisonError};
use std::thread;

use jobby_logging::{jobby_debug, jobby_info};
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use crate::api::{ApiSettings, JobsApi, ReqwestApi};
use crate::{ApiError, EngineEvent, RequestId, ViewId};

/// Receives completions from the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[from] std::io::Error),
    #[error("failed to build api client: {0}")]
    Client(#[from] ApiError),
}

enum EngineCommand {
    Login {
        request: RequestId,
        view: ViewId,
        username: String,
        password: String,
    },
    Profile {
        request: RequestId,
        view: ViewId,
        authorization: String,
    },
    Jobs {
        request: RequestId,
        view: ViewId,
        authorization: String,
        query: Vec<(String, String)>,
    },
    JobDetails {
        request: RequestId,
        view: ViewId,
        authorization: String,
        job_id: String,
    },
    CancelView(ViewId),
}

/// One cancellation token per view, dropped once the view has nothing left in
/// flight.
#[derive(Default)]
struct ViewRegistry {
    views: Mutex<HashMap<ViewId, ViewEntry>>,
}

struct ViewEntry {
    token: CancellationToken,
    outstanding: usize,
}

impl ViewRegistry {
    fn register(&self, view: ViewId) -> CancellationToken {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = views.entry(view).or_insert_with(|| ViewEntry {
            token: CancellationToken::new(),
            outstanding: 0,
        });
        entry.outstanding += 1;
        entry.token.clone()
    }

    fn release(&self, view: ViewId) {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(entry) = views.get_mut(&view) {
            entry.outstanding = entry.outstanding.saturating_sub(1);
            if entry.outstanding == 0 {
                views.remove(&view);
            }
        }
    }

    /// Returns how many requests were aborted.
    fn cancel(&self, view: ViewId) -> usize {
        let mut views = self.views.lock().unwrap_or_else(PoisonError::into_inner);
        match views.remove(&view) {
            Some(entry) => {
                entry.token.cancel();
                entry.outstanding
            }
            None => 0,
        }
    }

    #[cfg(test)]
    fn tracked(&self) -> usize {
        self.views
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }
}

/// Runs API requests on a background tokio runtime. Commands are queued from
/// the UI thread; results come back through the [`EventSink`].
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api = Arc::new(ReqwestApi::new(settings)?);
        Self::with_api(api, sink)
    }

    pub fn with_api(api: Arc<dyn JobsApi>, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let runtime = tokio::runtime::Runtime::new()?;
        let registry = Arc::new(ViewRegistry::default());

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                dispatch(&runtime, &api, &sink, &registry, command);
            }
            jobby_debug!("engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn login(&self, request: RequestId, view: ViewId, username: String, password: String) {
        self.send(EngineCommand::Login {
            request,
            view,
            username,
            password,
        });
    }

    pub fn profile(&self, request: RequestId, view: ViewId, authorization: String) {
        self.send(EngineCommand::Profile {
            request,
            view,
            authorization,
        });
    }

    pub fn jobs(
        &self,
        request: RequestId,
        view: ViewId,
        authorization: String,
        query: Vec<(String, String)>,
    ) {
        self.send(EngineCommand::Jobs {
            request,
            view,
            authorization,
            query,
        });
    }

    pub fn job_details(
        &self,
        request: RequestId,
        view: ViewId,
        authorization: String,
        job_id: String,
    ) {
        self.send(EngineCommand::JobDetails {
            request,
            view,
            authorization,
            job_id,
        });
    }

    /// Aborts everything still running for `view`; no completion is emitted
    /// for aborted requests.
    pub fn cancel_view(&self, view: ViewId) {
        self.send(EngineCommand::CancelView(view));
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

fn dispatch(
    runtime: &tokio::runtime::Runtime,
    api: &Arc<dyn JobsApi>,
    sink: &Arc<dyn EventSink>,
    registry: &Arc<ViewRegistry>,
    command: EngineCommand,
) {
    let api = api.clone();
    match command {
        EngineCommand::Login {
            request,
            view,
            username,
            password,
        } => spawn_tracked(runtime, registry, sink, view, request, async move {
            let result = api.login(&username, &password).await;
            EngineEvent::LoginCompleted { request, result }
        }),
        EngineCommand::Profile {
            request,
            view,
            authorization,
        } => spawn_tracked(runtime, registry, sink, view, request, async move {
            let result = api.profile(&authorization).await;
            EngineEvent::ProfileCompleted {
                request,
                view,
                result,
            }
        }),
        EngineCommand::Jobs {
            request,
            view,
            authorization,
            query,
        } => spawn_tracked(runtime, registry, sink, view, request, async move {
            let result = api.jobs(&authorization, &query).await;
            EngineEvent::JobsCompleted {
                request,
                view,
                result,
            }
        }),
        EngineCommand::JobDetails {
            request,
            view,
            authorization,
            job_id,
        } => spawn_tracked(runtime, registry, sink, view, request, async move {
            let result = api.job_details(&authorization, &job_id).await;
            EngineEvent::JobDetailsCompleted {
                request,
                view,
                result,
            }
        }),
        EngineCommand::CancelView(view) => {
            let aborted = registry.cancel(view);
            jobby_info!("Cancelled view {} ({} request(s) in flight)", view, aborted);
        }
    }
}

fn spawn_tracked<F>(
    runtime: &tokio::runtime::Runtime,
    registry: &Arc<ViewRegistry>,
    sink: &Arc<dyn EventSink>,
    view: ViewId,
    request: RequestId,
    work: F,
) where
    F: Future<Output = EngineEvent> + Send + 'static,
{
    let token = registry.register(view);
    let registry = registry.clone();
    let sink = sink.clone();
    runtime.spawn(async move {
        tokio::select! {
            _ = token.cancelled() => {
                jobby_debug!("request {} of view {} aborted", request, view);
            }
            event = work => {
                // A cancelled view was already dropped from the registry.
                if token.is_cancelled() {
                    jobby_debug!("request {} of view {} finished after cancel", request, view);
                } else {
                    registry.release(view);
                    sink.emit(event);
                }
            }
        }
    });
}
