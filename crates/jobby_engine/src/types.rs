use std::fmt;

use thiserror::Error;

use crate::wire::{JobDetailsResponse, JobDto, ProfileDto};

pub type RequestId = u64;
pub type ViewId = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    LoginCompleted {
        request: RequestId,
        result: Result<String, ApiError>,
    },
    ProfileCompleted {
        request: RequestId,
        view: ViewId,
        result: Result<ProfileDto, ApiError>,
    },
    JobsCompleted {
        request: RequestId,
        view: ViewId,
        result: Result<Vec<JobDto>, ApiError>,
    },
    JobDetailsCompleted {
        request: RequestId,
        view: ViewId,
        result: Result<JobDetailsResponse, ApiError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ApiError {
    pub kind: FailureKind,
    pub message: String,
}

impl ApiError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Message accompanying a non-2xx status: the server's `error_msg` when it
    /// sent one, the status line otherwise.
    pub fn server_message(&self) -> Option<&str> {
        match self.kind {
            FailureKind::HttpStatus(_) => Some(&self.message),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "malformed response"),
        }
    }
}
