use crate::{
    Credential, EmploymentType, FetchFailure, JobDetailsPayload, JobId, JobSummary, LoginFailure,
    Password, ProfileDetails, RequestId, Route, SalaryRange,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// App booted with whatever credential the store still holds.
    Started {
        credential: Option<Credential>,
        path: String,
    },
    /// Link or typed path; pushes a history entry.
    Navigate(Route),
    /// Browser-style back.
    BackClicked,

    /// Login form.
    UsernameChanged(String),
    PasswordChanged(Password),
    LoginSubmitted,
    LoginFinished {
        request: RequestId,
        result: Result<Credential, LoginFailure>,
    },

    /// Header.
    LogoutClicked,

    /// Jobs screen.
    EmploymentTypeToggled {
        kind: EmploymentType,
        checked: bool,
    },
    SalaryRangeSelected(SalaryRange),
    SearchInputChanged(String),
    SearchSubmitted,
    RetryProfileClicked,
    RetryJobsClicked,
    JobClicked(JobId),
    ProfileLoaded {
        request: RequestId,
        result: Result<ProfileDetails, FetchFailure>,
    },
    JobsLoaded {
        request: RequestId,
        result: Result<Vec<JobSummary>, FetchFailure>,
    },

    /// Job details screen.
    RetryJobDetailsClicked,
    JobDetailsLoaded {
        request: RequestId,
        result: Result<JobDetailsPayload, FetchFailure>,
    },
}
