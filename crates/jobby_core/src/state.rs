use crate::remote::{RemoteEvent, RemoteResource};
use crate::view_model::AppViewModel;
use crate::{
    Credential, Effect, FetchFailure, FilterState, History, JobDetailsPayload, JobId, JobSummary,
    JobsQuery, LoginFailure, NavigationMode, Password, ProfileDetails, RequestId, Route, Session,
    ViewId,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoginScreen {
    pub(crate) view: ViewId,
    pub(crate) username: String,
    pub(crate) password: Password,
    pub(crate) submission: RemoteResource<(), LoginFailure>,
    /// Most recent failure; stays visible through resubmits until a login
    /// succeeds.
    pub(crate) last_failure: Option<LoginFailure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobsScreen {
    pub(crate) view: ViewId,
    pub(crate) filters: FilterState,
    /// Parameters of the most recent job-list request; retries resend these.
    pub(crate) last_query: JobsQuery,
    pub(crate) profile: RemoteResource<ProfileDetails, FetchFailure>,
    pub(crate) jobs: RemoteResource<Vec<JobSummary>, FetchFailure>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsScreen {
    pub(crate) view: ViewId,
    pub(crate) job_id: JobId,
    pub(crate) details: RemoteResource<JobDetailsPayload, FetchFailure>,
}

/// The mounted screen. Its state is dropped when another screen mounts.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login(LoginScreen),
    Home { view: ViewId },
    Jobs(JobsScreen),
    JobDetails(JobDetailsScreen),
    NotFound { view: ViewId, path: String },
}

impl Screen {
    fn view_id(&self) -> ViewId {
        match self {
            Screen::Login(screen) => screen.view,
            Screen::Home { view } | Screen::NotFound { view, .. } => *view,
            Screen::Jobs(screen) => screen.view,
            Screen::JobDetails(screen) => screen.view,
        }
    }

    fn has_requests_in_flight(&self) -> bool {
        match self {
            Screen::Login(screen) => screen.submission.is_loading(),
            Screen::Jobs(screen) => screen.profile.is_loading() || screen.jobs.is_loading(),
            Screen::JobDetails(screen) => screen.details.is_loading(),
            Screen::Home { .. } | Screen::NotFound { .. } => false,
        }
    }
}

impl Default for Screen {
    fn default() -> Self {
        Screen::Login(LoginScreen::default())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    session: Session,
    history: History,
    screen: Screen,
    next_request: RequestId,
    next_view: ViewId,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            session: Session::anonymous(),
            history: History::new(Route::Login),
            screen: Screen::default(),
            next_request: 0,
            next_view: 0,
            dirty: false,
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::build(&self.history, &self.screen, self.dirty)
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn route(&self) -> &Route {
        self.history.current()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Whether the mounted screen still waits for a response.
    pub fn has_requests_in_flight(&self) -> bool {
        self.screen.has_requests_in_flight()
    }

    /// Returns and clears the re-render flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn allocate_request(&mut self) -> RequestId {
        self.next_request += 1;
        self.next_request
    }

    fn allocate_view(&mut self) -> ViewId {
        self.next_view += 1;
        self.next_view
    }

    pub(crate) fn boot(&mut self, credential: Option<Credential>, path: &str) -> Vec<Effect> {
        self.session = match credential {
            Some(credential) => Session::authenticated(credential),
            None => Session::anonymous(),
        };
        let route = self.guard(Route::parse(path));
        self.history = History::new(route.clone());
        let mut effects = self.leave();
        effects.extend(self.mount(route));
        effects
    }

    /// Moves to `route`, applying the session guard. Navigating to the
    /// current route is a no-op.
    pub(crate) fn navigate(&mut self, route: Route, mode: NavigationMode) -> Vec<Effect> {
        let route = self.guard(route);
        if &route == self.history.current() {
            return Vec::new();
        }
        self.history.navigate(route.clone(), mode);
        let mut effects = self.leave();
        effects.extend(self.mount(route));
        effects
    }

    pub(crate) fn go_back(&mut self) -> Vec<Effect> {
        if !self.history.back() {
            return Vec::new();
        }
        let current = self.history.current().clone();
        let route = self.guard(current.clone());
        if route != current {
            self.history.navigate(route.clone(), NavigationMode::Replace);
        }
        let mut effects = self.leave();
        effects.extend(self.mount(route));
        effects
    }

    fn guard(&self, route: Route) -> Route {
        if route.is_protected() && !self.session.is_authenticated() {
            Route::Login
        } else if route == Route::Login && self.session.is_authenticated() {
            Route::Home
        } else {
            route
        }
    }

    fn leave(&mut self) -> Vec<Effect> {
        if self.screen.has_requests_in_flight() {
            vec![Effect::CancelView(self.screen.view_id())]
        } else {
            Vec::new()
        }
    }

    fn mount(&mut self, route: Route) -> Vec<Effect> {
        let view = self.allocate_view();
        self.mark_dirty();
        match route {
            Route::Login => {
                self.screen = Screen::Login(LoginScreen {
                    view,
                    ..LoginScreen::default()
                });
                Vec::new()
            }
            Route::Home => {
                self.screen = Screen::Home { view };
                Vec::new()
            }
            Route::Jobs => {
                self.screen = Screen::Jobs(JobsScreen {
                    view,
                    filters: FilterState::default(),
                    last_query: JobsQuery::default(),
                    profile: RemoteResource::Idle,
                    jobs: RemoteResource::Idle,
                });
                let mut effects = Vec::with_capacity(2);
                effects.extend(self.fetch_profile());
                effects.extend(self.apply_filters());
                effects
            }
            Route::JobDetails(job_id) => {
                self.screen = Screen::JobDetails(JobDetailsScreen {
                    view,
                    job_id,
                    details: RemoteResource::Idle,
                });
                self.fetch_job_details().into_iter().collect()
            }
            Route::NotFound(path) => {
                self.screen = Screen::NotFound { view, path };
                Vec::new()
            }
        }
    }

    pub(crate) fn set_username(&mut self, username: String) {
        if let Screen::Login(screen) = &mut self.screen {
            screen.username = username;
            self.dirty = true;
        }
    }

    pub(crate) fn set_password(&mut self, password: Password) {
        if let Screen::Login(screen) = &mut self.screen {
            screen.password = password;
            self.dirty = true;
        }
    }

    pub(crate) fn submit_login(&mut self) -> Option<Effect> {
        let idle = matches!(&self.screen, Screen::Login(screen) if !screen.submission.is_loading());
        if !idle {
            return None;
        }
        let request = self.allocate_request();
        let Screen::Login(screen) = &mut self.screen else {
            return None;
        };
        screen.submission.apply(RemoteEvent::Started(request));
        self.dirty = true;
        Some(Effect::SubmitLogin {
            request,
            view: screen.view,
            username: screen.username.clone(),
            password: screen.password.clone(),
        })
    }

    pub(crate) fn finish_login(
        &mut self,
        request: RequestId,
        result: Result<Credential, LoginFailure>,
    ) -> Vec<Effect> {
        let Screen::Login(screen) = &mut self.screen else {
            return Vec::new();
        };
        if screen.submission.in_flight() != Some(request) {
            return Vec::new();
        }
        match result {
            Ok(credential) => {
                screen.submission.apply(RemoteEvent::Resolved {
                    request,
                    outcome: Ok(()),
                });
                self.session.sign_in(credential.clone());
                let mut effects = vec![Effect::StoreCredential(credential)];
                effects.extend(self.navigate(Route::Home, NavigationMode::Replace));
                effects
            }
            Err(failure) => {
                screen.last_failure = Some(failure.clone());
                screen.submission.apply(RemoteEvent::Resolved {
                    request,
                    outcome: Err(failure),
                });
                self.dirty = true;
                Vec::new()
            }
        }
    }

    pub(crate) fn logout(&mut self) -> Vec<Effect> {
        if matches!(self.screen, Screen::Login(_)) {
            return Vec::new();
        }
        let mut effects = self.leave();
        effects.push(Effect::ClearCredential);
        self.session.sign_out();
        self.history.navigate(Route::Login, NavigationMode::Replace);
        effects.extend(self.mount(Route::Login));
        effects
    }

    pub(crate) fn jobs_screen_mut(&mut self) -> Option<&mut JobsScreen> {
        match &mut self.screen {
            Screen::Jobs(screen) => Some(screen),
            _ => None,
        }
    }

    /// Snapshots the edited filters and reloads the job list with them.
    pub(crate) fn apply_filters(&mut self) -> Option<Effect> {
        let query = self.jobs_screen_mut()?.filters.to_query();
        self.fetch_jobs(query)
    }

    pub(crate) fn retry_jobs(&mut self) -> Option<Effect> {
        let query = self.jobs_screen_mut()?.last_query.clone();
        self.fetch_jobs(query)
    }

    fn fetch_jobs(&mut self, query: JobsQuery) -> Option<Effect> {
        let credential = self.session.credential()?.clone();
        let request = self.allocate_request();
        let screen = self.jobs_screen_mut()?;
        screen.last_query = query.clone();
        screen.jobs.apply(RemoteEvent::Started(request));
        let view = screen.view;
        self.dirty = true;
        Some(Effect::FetchJobs {
            request,
            view,
            credential,
            query,
        })
    }

    pub(crate) fn fetch_profile(&mut self) -> Option<Effect> {
        let credential = self.session.credential()?.clone();
        let request = self.allocate_request();
        let screen = self.jobs_screen_mut()?;
        screen.profile.apply(RemoteEvent::Started(request));
        let view = screen.view;
        self.dirty = true;
        Some(Effect::FetchProfile {
            request,
            view,
            credential,
        })
    }

    pub(crate) fn resolve_profile(
        &mut self,
        request: RequestId,
        result: Result<ProfileDetails, FetchFailure>,
    ) {
        let Some(screen) = self.jobs_screen_mut() else {
            return;
        };
        if screen.profile.apply(RemoteEvent::Resolved {
            request,
            outcome: result,
        }) {
            self.dirty = true;
        }
    }

    pub(crate) fn resolve_jobs(
        &mut self,
        request: RequestId,
        result: Result<Vec<JobSummary>, FetchFailure>,
    ) {
        let Some(screen) = self.jobs_screen_mut() else {
            return;
        };
        if screen.jobs.apply(RemoteEvent::Resolved {
            request,
            outcome: result,
        }) {
            self.dirty = true;
        }
    }

    pub(crate) fn fetch_job_details(&mut self) -> Option<Effect> {
        let credential = self.session.credential()?.clone();
        let request = self.allocate_request();
        let Screen::JobDetails(screen) = &mut self.screen else {
            return None;
        };
        screen.details.apply(RemoteEvent::Started(request));
        self.dirty = true;
        Some(Effect::FetchJobDetails {
            request,
            view: screen.view,
            credential,
            job_id: screen.job_id.clone(),
        })
    }

    pub(crate) fn resolve_job_details(
        &mut self,
        request: RequestId,
        result: Result<JobDetailsPayload, FetchFailure>,
    ) {
        let Screen::JobDetails(screen) = &mut self.screen else {
            return;
        };
        if screen.details.apply(RemoteEvent::Resolved {
            request,
            outcome: result,
        }) {
            self.dirty = true;
        }
    }
}
