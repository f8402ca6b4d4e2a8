pub type JobId = String;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetails {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobSummary {
    pub id: JobId,
    pub title: String,
    pub company_logo_url: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skill {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LifeAtCompany {
    pub description: String,
    pub image_url: String,
}

/// Full job record shown on the detail screen.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDetail {
    pub id: JobId,
    pub title: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
    pub skills: Vec<Skill>,
    pub life_at_company: LifeAtCompany,
}

/// Condensed entry listed under a job's details. The API does not send a
/// package for these.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarJob {
    pub id: JobId,
    pub title: String,
    pub company_logo_url: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct JobDetailsPayload {
    pub job: JobDetail,
    pub similar_jobs: Vec<SimilarJob>,
}

/// Any failed data fetch. Transport errors and non-2xx statuses are not
/// distinguished once they reach the state machine; `reason` only feeds logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchFailure {
    pub reason: String,
}

impl FetchFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginFailure {
    /// The server answered with a non-2xx status and this message.
    Rejected(String),
    /// The request never produced a usable answer.
    Unavailable,
}

pub const LOGIN_UNAVAILABLE_MESSAGE: &str = "Something went wrong. Please try again";

impl LoginFailure {
    pub fn message(&self) -> &str {
        match self {
            LoginFailure::Rejected(message) => message,
            LoginFailure::Unavailable => LOGIN_UNAVAILABLE_MESSAGE,
        }
    }
}
