use jobby_core::{
    update, AppState, Credential, Effect, FetchFailure, JobDetail, JobDetailsPayload,
    JobDetailsView, LifeAtCompany, Msg, Route, ScreenView, SimilarJob, Skill,
};

fn open_details(path: &str) -> (AppState, Vec<Effect>) {
    update(
        AppState::new(),
        Msg::Started {
            credential: Some(Credential::new("jwt")),
            path: path.to_string(),
        },
    )
}

fn details_view(state: &AppState) -> JobDetailsView {
    match state.view().screen {
        ScreenView::JobDetails(view) => view,
        other => panic!("expected job details screen, got {other:?}"),
    }
}

fn payload() -> JobDetailsPayload {
    JobDetailsPayload {
        job: JobDetail {
            id: "123".to_string(),
            title: "Devops Engineer".to_string(),
            company_logo_url: "https://assets.example.com/netflix.png".to_string(),
            company_website_url: "https://about.netflix.com/en".to_string(),
            rating: 4.0,
            location: "Delhi".to_string(),
            employment_type: "Internship".to_string(),
            package_per_annum: "10 LPA".to_string(),
            job_description: "We are looking for a DevOps Engineer".to_string(),
            skills: vec![Skill {
                name: "Docker".to_string(),
                image_url: "https://assets.example.com/docker.png".to_string(),
            }],
            life_at_company: LifeAtCompany {
                description: "Our core philosophy is people over process".to_string(),
                image_url: "https://assets.example.com/life.png".to_string(),
            },
        },
        similar_jobs: vec![SimilarJob {
            id: "456".to_string(),
            title: "Frontend Engineer".to_string(),
            company_logo_url: "https://assets.example.com/logo.png".to_string(),
            rating: 4.5,
            location: "Mumbai".to_string(),
            employment_type: "Freelance".to_string(),
            job_description: "React work".to_string(),
        }],
    }
}

#[test]
fn detail_route_fetches_by_id_and_shows_loading() {
    let (state, effects) = open_details("/jobs/123");
    assert_eq!(state.route(), &Route::JobDetails("123".to_string()));
    assert_eq!(
        effects,
        vec![Effect::FetchJobDetails {
            request: 1,
            view: 1,
            credential: Credential::new("jwt"),
            job_id: "123".to_string(),
        }]
    );
    assert_eq!(details_view(&state), JobDetailsView::Loading);
    assert!(state.view().header.is_some());
}

#[test]
fn success_renders_detail_and_similar_jobs() {
    let (state, _) = open_details("/jobs/123");
    let (state, _) = update(
        state,
        Msg::JobDetailsLoaded {
            request: 1,
            result: Ok(payload()),
        },
    );
    let expected = payload();
    assert_eq!(
        details_view(&state),
        JobDetailsView::Ready {
            job: expected.job,
            similar_jobs: expected.similar_jobs,
        }
    );
}

#[test]
fn failure_then_retry_refetches_same_id() {
    let (state, _) = open_details("/jobs/123");
    let (state, _) = update(
        state,
        Msg::JobDetailsLoaded {
            request: 1,
            result: Err(FetchFailure::new("http status 404")),
        },
    );
    assert_eq!(details_view(&state), JobDetailsView::Failed);

    let (state, effects) = update(state, Msg::RetryJobDetailsClicked);
    assert_eq!(
        effects,
        vec![Effect::FetchJobDetails {
            request: 2,
            view: 1,
            credential: Credential::new("jwt"),
            job_id: "123".to_string(),
        }]
    );
    // Loading takes priority over the earlier error.
    assert_eq!(details_view(&state), JobDetailsView::Loading);

    let (state, _) = update(
        state,
        Msg::JobDetailsLoaded {
            request: 2,
            result: Ok(payload()),
        },
    );
    assert!(matches!(details_view(&state), JobDetailsView::Ready { .. }));
}

#[test]
fn retry_while_loading_is_ignored() {
    let (state, _) = open_details("/jobs/123");
    let (_state, effects) = update(state, Msg::RetryJobDetailsClicked);
    assert!(effects.is_empty());
}

#[test]
fn encoded_ids_are_decoded_from_the_path() {
    let (_state, effects) = open_details("/jobs/a%20b");
    assert!(matches!(
        effects.as_slice(),
        [Effect::FetchJobDetails { job_id, .. }] if job_id == "a b"
    ));
}
