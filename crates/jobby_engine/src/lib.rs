//! Jobby engine: REST client, request execution and credential storage.
mod api;
mod engine;
mod session_store;
mod types;
pub mod wire;

pub use api::{ApiSettings, JobsApi, ReqwestApi, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineError, EngineHandle, EventSink};
pub use session_store::{
    ensure_data_dir, CredentialStore, FileCredentialStore, StoreError, SESSION_FILENAME,
};
pub use types::{ApiError, EngineEvent, FailureKind, RequestId, ViewId};
