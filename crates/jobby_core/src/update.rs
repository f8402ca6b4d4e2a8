use crate::{AppState, Effect, Msg, NavigationMode, Route, Screen};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started { credential, path } => state.boot(credential, &path),
        Msg::Navigate(route) => state.navigate(route, NavigationMode::Push),
        Msg::BackClicked => state.go_back(),
        Msg::UsernameChanged(username) => {
            state.set_username(username);
            Vec::new()
        }
        Msg::PasswordChanged(password) => {
            state.set_password(password);
            Vec::new()
        }
        Msg::LoginSubmitted => state.submit_login().into_iter().collect(),
        Msg::LoginFinished { request, result } => state.finish_login(request, result),
        Msg::LogoutClicked => state.logout(),
        Msg::EmploymentTypeToggled { kind, checked } => {
            let Some(screen) = state.jobs_screen_mut() else {
                return (state, Vec::new());
            };
            screen.filters.set_employment_type(kind, checked);
            state.apply_filters().into_iter().collect()
        }
        Msg::SalaryRangeSelected(range) => {
            let Some(screen) = state.jobs_screen_mut() else {
                return (state, Vec::new());
            };
            screen.filters.salary_range = Some(range);
            state.apply_filters().into_iter().collect()
        }
        Msg::SearchInputChanged(text) => {
            // Typing only edits the filter; the list reloads on SearchSubmitted.
            if let Some(screen) = state.jobs_screen_mut() {
                screen.filters.search_text = text;
                state.mark_dirty();
            }
            Vec::new()
        }
        Msg::SearchSubmitted => state.apply_filters().into_iter().collect(),
        // Retry is only offered for a failed fetch.
        Msg::RetryProfileClicked => match state.screen() {
            Screen::Jobs(screen) if screen.profile.failure().is_some() => {
                state.fetch_profile().into_iter().collect()
            }
            _ => Vec::new(),
        },
        Msg::RetryJobsClicked => match state.screen() {
            Screen::Jobs(screen) if screen.jobs.failure().is_some() => {
                state.retry_jobs().into_iter().collect()
            }
            _ => Vec::new(),
        },
        Msg::JobClicked(job_id) => {
            if state.jobs_screen_mut().is_none() {
                return (state, Vec::new());
            }
            state.navigate(Route::JobDetails(job_id), NavigationMode::Push)
        }
        Msg::ProfileLoaded { request, result } => {
            state.resolve_profile(request, result);
            Vec::new()
        }
        Msg::JobsLoaded { request, result } => {
            state.resolve_jobs(request, result);
            Vec::new()
        }
        Msg::RetryJobDetailsClicked => match state.screen() {
            Screen::JobDetails(screen) if screen.details.failure().is_some() => {
                state.fetch_job_details().into_iter().collect()
            }
            _ => Vec::new(),
        },
        Msg::JobDetailsLoaded { request, result } => {
            state.resolve_job_details(request, result);
            Vec::new()
        }
    };

    (state, effects)
}
