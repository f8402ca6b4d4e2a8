//! JSON bodies exchanged with the jobs API. Field names follow the API's
//! snake_case; conversion into screen models happens in the app.
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginRequest<'a> {
    pub username: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub jwt_token: String,
}

/// Body of a non-2xx answer.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ErrorBody {
    pub error_msg: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileResponse {
    pub profile_details: ProfileDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProfileDto {
    pub name: String,
    pub profile_image_url: String,
    pub short_bio: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobsResponse {
    pub jobs: Vec<JobDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDto {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetailsResponse {
    pub job_details: JobDetailsDto,
    #[serde(default)]
    pub similar_jobs: Vec<SimilarJobDto>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct JobDetailsDto {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub company_website_url: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub package_per_annum: String,
    pub job_description: String,
    #[serde(default)]
    pub skills: Vec<SkillDto>,
    pub life_at_company: LifeAtCompanyDto,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SkillDto {
    pub name: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LifeAtCompanyDto {
    pub description: String,
    pub image_url: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SimilarJobDto {
    pub id: String,
    pub title: String,
    pub company_logo_url: String,
    pub rating: f64,
    pub location: String,
    pub employment_type: String,
    pub job_description: String,
}
