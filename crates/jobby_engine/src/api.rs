use std::time::Duration;

use jobby_logging::jobby_debug;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use url::Url;

use crate::wire::{
    ErrorBody, JobDetailsResponse, JobDto, JobsResponse, LoginRequest, LoginResponse, ProfileDto,
    ProfileResponse,
};
use crate::{ApiError, FailureKind};

pub const DEFAULT_BASE_URL: &str = "https://apis.ccbp.in";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The jobs REST API. Authenticated calls take the full `Authorization`
/// header value so the caller decides which session is used.
#[async_trait::async_trait]
pub trait JobsApi: Send + Sync {
    /// Returns the issued token.
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError>;

    async fn profile(&self, authorization: &str) -> Result<ProfileDto, ApiError>;

    async fn jobs(
        &self,
        authorization: &str,
        query: &[(String, String)],
    ) -> Result<Vec<JobDto>, ApiError>;

    async fn job_details(
        &self,
        authorization: &str,
        job_id: &str,
    ) -> Result<JobDetailsResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestApi {
    base: Url,
    client: reqwest::Client,
}

impl ReqwestApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let base = Url::parse(&settings.base_url)
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::new(
                FailureKind::InvalidUrl,
                format!("{} cannot be used as a base url", settings.base_url),
            ));
        }
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { base, client })
    }

    /// Builds `{base}/{segments...}`; each segment is percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(map_reqwest_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<ErrorBody>(&body)
                .map(|body| body.error_msg)
                .unwrap_or_else(|_| status.to_string());
            return Err(ApiError::new(
                FailureKind::HttpStatus(status.as_u16()),
                message,
            ));
        }

        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl JobsApi for ReqwestApi {
    async fn login(&self, username: &str, password: &str) -> Result<String, ApiError> {
        let body = serde_json::to_vec(&LoginRequest { username, password })
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        let url = self.endpoint(&["login"]);
        jobby_debug!("POST {}", url);
        let response: LoginResponse = self
            .send(
                self.client
                    .post(url)
                    .header(CONTENT_TYPE, "application/json")
                    .body(body),
            )
            .await?;
        Ok(response.jwt_token)
    }

    async fn profile(&self, authorization: &str) -> Result<ProfileDto, ApiError> {
        let url = self.endpoint(&["profile"]);
        jobby_debug!("GET {}", url);
        let response: ProfileResponse = self
            .send(self.client.get(url).header(AUTHORIZATION, authorization))
            .await?;
        Ok(response.profile_details)
    }

    async fn jobs(
        &self,
        authorization: &str,
        query: &[(String, String)],
    ) -> Result<Vec<JobDto>, ApiError> {
        let mut url = self.endpoint(&["jobs"]);
        url.query_pairs_mut().extend_pairs(query);
        jobby_debug!("GET {}", url);
        let response: JobsResponse = self
            .send(self.client.get(url).header(AUTHORIZATION, authorization))
            .await?;
        Ok(response.jobs)
    }

    async fn job_details(
        &self,
        authorization: &str,
        job_id: &str,
    ) -> Result<JobDetailsResponse, ApiError> {
        let url = self.endpoint(&["jobs", job_id]);
        jobby_debug!("GET {}", url);
        self.send(self.client.get(url).header(AUTHORIZATION, authorization))
            .await
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ApiError::new(FailureKind::Decode, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}
