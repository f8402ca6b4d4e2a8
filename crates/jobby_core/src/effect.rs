use crate::{Credential, JobId, JobsQuery, Password, RequestId};

/// Identifies one mounted screen instance. Requests are cancelled per view.
pub type ViewId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    SubmitLogin {
        request: RequestId,
        view: ViewId,
        username: String,
        password: Password,
    },
    FetchProfile {
        request: RequestId,
        view: ViewId,
        credential: Credential,
    },
    FetchJobs {
        request: RequestId,
        view: ViewId,
        credential: Credential,
        query: JobsQuery,
    },
    FetchJobDetails {
        request: RequestId,
        view: ViewId,
        credential: Credential,
        job_id: JobId,
    },
    /// Abort anything still in flight for a screen that was left.
    CancelView(ViewId),
    StoreCredential(Credential),
    ClearCredential,
}
