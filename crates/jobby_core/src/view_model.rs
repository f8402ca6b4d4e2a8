use crate::remote::RemoteResource;
use crate::state::{JobDetailsScreen, JobsScreen, LoginScreen};
use crate::{
    EmploymentType, History, JobDetail, JobSummary, ProfileDetails, Route, SalaryRange, Screen,
    SimilarJob,
};

pub const HOME_HEADING: &str = "Find The Job That Fits Your Life";
pub const HOME_BLURB: &str =
    "Millions of people are searching for jobs, salary information, company reviews. Find the job that fits your abilities and potential.";
pub const FAILURE_HEADING: &str = "Oops! Something Went Wrong";
pub const FAILURE_DESCRIPTION: &str = "We cannot seem to find the page you are looking for";
pub const NO_JOBS_HEADING: &str = "No Jobs Found";
pub const NO_JOBS_DESCRIPTION: &str = "We could not find any jobs. Try other filters";
pub const NOT_FOUND_HEADING: &str = "Page Not Found";

#[derive(Debug, Clone, PartialEq)]
pub struct AppViewModel {
    pub route: Route,
    /// Present on every screen except login and not-found.
    pub header: Option<HeaderView>,
    pub screen: ScreenView,
    pub can_go_back: bool,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderView {
    pub links: Vec<NavLink>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub route: Route,
}

impl HeaderView {
    fn standard() -> Self {
        Self {
            links: vec![
                NavLink {
                    label: "Home",
                    route: Route::Home,
                },
                NavLink {
                    label: "Jobs",
                    route: Route::Jobs,
                },
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ScreenView {
    Login(LoginView),
    Home,
    Jobs(JobsView),
    JobDetails(JobDetailsView),
    NotFound { path: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginView {
    pub username: String,
    /// Number of characters typed; the password itself is never rendered.
    pub password_len: usize,
    pub submitting: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobsView {
    pub profile: ProfilePanel,
    pub jobs: JobsPanel,
    pub employment_types: Vec<FilterOption>,
    pub salary_ranges: Vec<FilterOption>,
    pub search_text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    pub id: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProfilePanel {
    Blank,
    Loading,
    /// Shows a retry button.
    Failed,
    Ready(ProfileDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobsPanel {
    Blank,
    Loading,
    Failed,
    NoJobs,
    Listing(Vec<JobSummary>),
}

#[derive(Debug, Clone, PartialEq)]
pub enum JobDetailsView {
    Blank,
    Loading,
    Failed,
    Ready {
        job: JobDetail,
        similar_jobs: Vec<SimilarJob>,
    },
}

impl AppViewModel {
    pub(crate) fn build(history: &History, screen: &Screen, dirty: bool) -> Self {
        let (header, screen) = match screen {
            Screen::Login(login) => (None, ScreenView::Login(login_view(login))),
            Screen::Home { .. } => (Some(HeaderView::standard()), ScreenView::Home),
            Screen::Jobs(jobs) => (Some(HeaderView::standard()), ScreenView::Jobs(jobs_view(jobs))),
            Screen::JobDetails(details) => (
                Some(HeaderView::standard()),
                ScreenView::JobDetails(job_details_view(details)),
            ),
            Screen::NotFound { path, .. } => (None, ScreenView::NotFound { path: path.clone() }),
        };
        Self {
            route: history.current().clone(),
            header,
            screen,
            can_go_back: history.can_go_back(),
            dirty,
        }
    }
}

fn login_view(screen: &LoginScreen) -> LoginView {
    LoginView {
        username: screen.username.clone(),
        password_len: screen.password.char_count(),
        submitting: screen.submission.is_loading(),
        error: screen
            .last_failure
            .as_ref()
            .map(|failure| failure.message().to_string()),
    }
}

fn jobs_view(screen: &JobsScreen) -> JobsView {
    let profile = match &screen.profile {
        RemoteResource::Idle => ProfilePanel::Blank,
        RemoteResource::Loading { .. } => ProfilePanel::Loading,
        RemoteResource::Failure(_) => ProfilePanel::Failed,
        RemoteResource::Success(profile) => ProfilePanel::Ready(profile.clone()),
    };
    let jobs = match &screen.jobs {
        RemoteResource::Idle => JobsPanel::Blank,
        RemoteResource::Loading { .. } => JobsPanel::Loading,
        RemoteResource::Failure(_) => JobsPanel::Failed,
        RemoteResource::Success(jobs) if jobs.is_empty() => JobsPanel::NoJobs,
        RemoteResource::Success(jobs) => JobsPanel::Listing(jobs.clone()),
    };
    let filters = &screen.filters;
    JobsView {
        profile,
        jobs,
        employment_types: EmploymentType::ALL
            .into_iter()
            .map(|kind| FilterOption {
                id: kind.id(),
                label: kind.label(),
                selected: filters.employment_types.contains(&kind),
            })
            .collect(),
        salary_ranges: SalaryRange::ALL
            .into_iter()
            .map(|range| FilterOption {
                id: range.id(),
                label: range.label(),
                selected: filters.salary_range == Some(range),
            })
            .collect(),
        search_text: filters.search_text.clone(),
    }
}

fn job_details_view(screen: &JobDetailsScreen) -> JobDetailsView {
    // Loading wins over failure, failure wins over data.
    match &screen.details {
        RemoteResource::Idle => JobDetailsView::Blank,
        RemoteResource::Loading { .. } => JobDetailsView::Loading,
        RemoteResource::Failure(_) => JobDetailsView::Failed,
        RemoteResource::Success(payload) => JobDetailsView::Ready {
            job: payload.job.clone(),
            similar_jobs: payload.similar_jobs.clone(),
        },
    }
}
