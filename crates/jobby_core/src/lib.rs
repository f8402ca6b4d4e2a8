//! Jobby core: pure state machine and view-model helpers.
mod effect;
mod filters;
mod model;
mod msg;
mod remote;
mod route;
mod session;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, ViewId};
pub use filters::{EmploymentType, FilterState, JobsQuery, SalaryRange};
pub use model::{
    FetchFailure, JobDetail, JobDetailsPayload, JobId, JobSummary, LifeAtCompany, LoginFailure,
    ProfileDetails, SimilarJob, Skill, LOGIN_UNAVAILABLE_MESSAGE,
};
pub use msg::Msg;
pub use remote::{RemoteEvent, RemoteResource, RequestId};
pub use route::{History, NavigationMode, Route};
pub use session::{Credential, Password, Session, CREDENTIAL_TTL_DAYS};
pub use state::{AppState, JobDetailsScreen, JobsScreen, LoginScreen, Screen};
pub use update::update;
pub use view_model::{
    AppViewModel, FilterOption, HeaderView, JobDetailsView, JobsPanel, JobsView, LoginView,
    NavLink, ProfilePanel, ScreenView, FAILURE_DESCRIPTION, FAILURE_HEADING, HOME_BLURB, HOME_HEADING,
    NOT_FOUND_HEADING, NO_JOBS_DESCRIPTION, NO_JOBS_HEADING,
};
