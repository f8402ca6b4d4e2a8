use std::io::{self, Write};
use std::sync::{mpsc, Arc, Mutex, PoisonError};

use jobby_engine::wire::{JobDetailsResponse, JobDto, ProfileDto};
use jobby_engine::{
    ApiError, ChannelEventSink, CredentialStore, EngineEvent, EngineHandle, FailureKind, JobsApi,
    StoreError,
};

use super::effects::EffectRunner;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    Load,
    Save(String),
    Clear,
}

/// Credential store that records every call.
#[derive(Clone, Default)]
pub struct RecordingStore {
    pub calls: Arc<Mutex<Vec<StoreCall>>>,
    pub corrupt: bool,
}

impl RecordingStore {
    pub fn recorded(&self) -> Vec<StoreCall> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn record(&self, call: StoreCall) {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(call);
    }
}

impl CredentialStore for RecordingStore {
    fn load(&self) -> Result<Option<String>, StoreError> {
        self.record(StoreCall::Load);
        if self.corrupt {
            Err(StoreError::Corrupt("not json".to_string()))
        } else {
            Ok(None)
        }
    }

    fn save(&self, token: &str) -> Result<(), StoreError> {
        self.record(StoreCall::Save(token.to_string()));
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.record(StoreCall::Clear);
        Ok(())
    }
}

/// Answers immediately and remembers the arguments of job-list calls.
#[derive(Default)]
pub struct RecordingApi {
    pub jobs_calls: Arc<Mutex<Vec<(String, Vec<(String, String)>)>>>,
}

#[async_trait::async_trait]
impl JobsApi for RecordingApi {
    async fn login(&self, _username: &str, _password: &str) -> Result<String, ApiError> {
        Ok("issued-token".to_string())
    }

    async fn profile(&self, _authorization: &str) -> Result<ProfileDto, ApiError> {
        Ok(ProfileDto {
            name: "Rahul".to_string(),
            profile_image_url: String::new(),
            short_bio: String::new(),
        })
    }

    async fn jobs(
        &self,
        authorization: &str,
        query: &[(String, String)],
    ) -> Result<Vec<JobDto>, ApiError> {
        self.jobs_calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((authorization.to_string(), query.to_vec()));
        Ok(Vec::new())
    }

    async fn job_details(
        &self,
        _authorization: &str,
        _job_id: &str,
    ) -> Result<JobDetailsResponse, ApiError> {
        Err(ApiError {
            kind: FailureKind::Network,
            message: "unused".to_string(),
        })
    }
}

/// Runner backed by the recording fakes; engine completions arrive on the
/// returned receiver.
pub fn runner(
    api: RecordingApi,
    store: RecordingStore,
) -> (EffectRunner, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::with_api(Arc::new(api), Arc::new(ChannelEventSink::new(tx)))
        .expect("engine starts");
    (EffectRunner::from_parts(engine, Box::new(store)), rx)
}

/// `Write` target that can be read back after a logger took ownership of it.
#[derive(Clone, Default)]
pub struct SharedBuffer(pub Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        let bytes = self.0.lock().unwrap_or_else(PoisonError::into_inner);
        String::from_utf8_lossy(&bytes).into_owned()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
