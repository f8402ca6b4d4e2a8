use std::sync::{mpsc, Arc};

use chrono::Duration;
use jobby_core::{
    Credential, Effect, FetchFailure, JobDetail, JobDetailsPayload, JobSummary, LifeAtCompany,
    LoginFailure, Msg, ProfileDetails, SimilarJob, Skill, CREDENTIAL_TTL_DAYS,
};
use jobby_engine::wire::{JobDetailsResponse, JobDto, ProfileDto, SimilarJobDto};
use jobby_engine::{
    ApiError, CredentialStore, EngineError, EngineEvent, EngineHandle, EventSink,
    FileCredentialStore,
};
use jobby_logging::{jobby_info, jobby_warn, redact};

use super::app::AppEvent;
use super::config::AppConfig;

/// Forwards engine completions into the app loop as messages.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Msg(map_event(event)));
    }
}

pub struct EffectRunner {
    engine: EngineHandle,
    store: Box<dyn CredentialStore>,
}

impl EffectRunner {
    pub fn new(config: &AppConfig, tx: mpsc::Sender<AppEvent>) -> Result<Self, EngineError> {
        let sink: Arc<dyn EventSink> = Arc::new(MsgSink { tx });
        let engine = EngineHandle::new(config.api_settings(), sink)?;
        let store = FileCredentialStore::new(
            config.data_dir.clone(),
            Duration::days(CREDENTIAL_TTL_DAYS),
        );
        Ok(Self::from_parts(engine, Box::new(store)))
    }

    pub fn from_parts(engine: EngineHandle, store: Box<dyn CredentialStore>) -> Self {
        Self { engine, store }
    }

    /// Credential left by a previous run, if it is still valid. An unreadable
    /// store is treated as signed out.
    pub fn restore_credential(&self) -> Option<Credential> {
        match self.store.load() {
            Ok(token) => token.map(Credential::new),
            Err(err) => {
                jobby_warn!("Discarding stored session: {}", err);
                if let Err(err) = self.store.clear() {
                    jobby_warn!("Could not clear stored session: {}", err);
                }
                None
            }
        }
    }

    pub fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitLogin {
                    request,
                    view,
                    username,
                    password,
                } => {
                    jobby_info!("SubmitLogin request={} user={}", request, username);
                    self.engine
                        .login(request, view, username, password.expose().to_string());
                }
                Effect::FetchProfile {
                    request,
                    view,
                    credential,
                } => {
                    self.engine
                        .profile(request, view, credential.authorization());
                }
                Effect::FetchJobs {
                    request,
                    view,
                    credential,
                    query,
                } => {
                    jobby_info!("FetchJobs request={} query={}", request, query.to_query_string());
                    let pairs = query
                        .pairs()
                        .iter()
                        .map(|(key, value)| (key.to_string(), value.to_string()))
                        .collect();
                    self.engine
                        .jobs(request, view, credential.authorization(), pairs);
                }
                Effect::FetchJobDetails {
                    request,
                    view,
                    credential,
                    job_id,
                } => {
                    jobby_info!("FetchJobDetails request={} job_id={}", request, job_id);
                    self.engine
                        .job_details(request, view, credential.authorization(), job_id);
                }
                Effect::CancelView(view) => self.engine.cancel_view(view),
                Effect::StoreCredential(credential) => {
                    jobby_info!("Storing session token {}", redact(credential.token()));
                    if let Err(err) = self.store.save(credential.token()) {
                        jobby_warn!("Could not store session: {}", err);
                    }
                }
                Effect::ClearCredential => {
                    if let Err(err) = self.store.clear() {
                        jobby_warn!("Could not clear stored session: {}", err);
                    }
                }
            }
        }
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::LoginCompleted { request, result } => Msg::LoginFinished {
            request,
            result: result.map(Credential::new).map_err(login_failure),
        },
        EngineEvent::ProfileCompleted {
            request, result, ..
        } => Msg::ProfileLoaded {
            request,
            result: result.map(map_profile).map_err(fetch_failure),
        },
        EngineEvent::JobsCompleted {
            request, result, ..
        } => Msg::JobsLoaded {
            request,
            result: result
                .map(|jobs| jobs.into_iter().map(map_job).collect())
                .map_err(fetch_failure),
        },
        EngineEvent::JobDetailsCompleted {
            request, result, ..
        } => Msg::JobDetailsLoaded {
            request,
            result: result.map(map_job_details).map_err(fetch_failure),
        },
    }
}

fn login_failure(error: ApiError) -> LoginFailure {
    jobby_warn!("Login failed: {}", error);
    match error.server_message() {
        Some(message) => LoginFailure::Rejected(message.to_string()),
        None => LoginFailure::Unavailable,
    }
}

fn fetch_failure(error: ApiError) -> FetchFailure {
    jobby_warn!("Fetch failed: {}", error);
    FetchFailure::new(error.to_string())
}

fn map_profile(dto: ProfileDto) -> ProfileDetails {
    ProfileDetails {
        name: dto.name,
        profile_image_url: dto.profile_image_url,
        short_bio: dto.short_bio,
    }
}

fn map_job(dto: JobDto) -> JobSummary {
    JobSummary {
        id: dto.id,
        title: dto.title,
        company_logo_url: dto.company_logo_url,
        rating: dto.rating,
        location: dto.location,
        employment_type: dto.employment_type,
        package_per_annum: dto.package_per_annum,
        job_description: dto.job_description,
    }
}

fn map_similar_job(dto: SimilarJobDto) -> SimilarJob {
    SimilarJob {
        id: dto.id,
        title: dto.title,
        company_logo_url: dto.company_logo_url,
        rating: dto.rating,
        location: dto.location,
        employment_type: dto.employment_type,
        job_description: dto.job_description,
    }
}

fn map_job_details(response: JobDetailsResponse) -> JobDetailsPayload {
    let details = response.job_details;
    JobDetailsPayload {
        job: JobDetail {
            id: details.id,
            title: details.title,
            company_logo_url: details.company_logo_url,
            company_website_url: details.company_website_url,
            rating: details.rating,
            location: details.location,
            employment_type: details.employment_type,
            package_per_annum: details.package_per_annum,
            job_description: details.job_description,
            skills: details
                .skills
                .into_iter()
                .map(|skill| Skill {
                    name: skill.name,
                    image_url: skill.image_url,
                })
                .collect(),
            life_at_company: LifeAtCompany {
                description: details.life_at_company.description,
                image_url: details.life_at_company.image_url,
            },
        },
        similar_jobs: response
            .similar_jobs
            .into_iter()
            .map(map_similar_job)
            .collect(),
    }
}
