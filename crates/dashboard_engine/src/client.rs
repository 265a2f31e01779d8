use std::time::Duration;

use dashboard_logging::{dashboard_debug, dashboard_trace, dashboard_warn};
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::{BusinessData, BusinessDataRequest, FailureKind, HeadlineResponse, RequestError};

pub const DEFAULT_BASE_URL: &str = "https://growthproai-backend.onrender.com";

const BUSINESS_DATA_PATH: &str = "api/business-data";
const REGENERATE_HEADLINE_PATH: &str = "api/regenerate-headline";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// Backend origin; the API paths are resolved against it.
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

/// The two backend calls the dashboard makes.
#[async_trait::async_trait]
pub trait InsightsApi: Send + Sync {
    async fn fetch_insights(&self, name: &str, location: &str)
        -> Result<BusinessData, RequestError>;

    async fn regenerate_headline(&self, name: &str, location: &str)
        -> Result<String, RequestError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestInsightsApi {
    client: reqwest::Client,
    base_url: Url,
}

impl ReqwestInsightsApi {
    pub fn new(settings: ApiSettings) -> Result<Self, RequestError> {
        // A single trailing slash makes `join` append to the base path
        // instead of replacing its last segment.
        let normalised = format!("{}/", settings.base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised).map_err(|err| {
            RequestError::new(
                FailureKind::InvalidUrl,
                format!("invalid base url '{}': {err}", settings.base_url),
            )
        })?;

        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| RequestError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, RequestError> {
        self.base_url
            .join(path)
            .map_err(|err| RequestError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl InsightsApi for ReqwestInsightsApi {
    async fn fetch_insights(
        &self,
        name: &str,
        location: &str,
    ) -> Result<BusinessData, RequestError> {
        let url = self.endpoint(BUSINESS_DATA_PATH)?;
        let body = BusinessDataRequest {
            name: name.to_string(),
            location: location.to_string(),
        };

        dashboard_debug!("POST {}", url);
        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .json(&body)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        read_json(response).await
    }

    async fn regenerate_headline(
        &self,
        name: &str,
        location: &str,
    ) -> Result<String, RequestError> {
        let mut url = self.endpoint(REGENERATE_HEADLINE_PATH)?;
        url.query_pairs_mut()
            .append_pair("name", name)
            .append_pair("location", location);

        dashboard_debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let body: HeadlineResponse = read_json(response).await?;
        Ok(body.headline)
    }
}

/// Fails on any non-2xx status regardless of body, then decodes the body.
async fn read_json<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, RequestError> {
    let status = response.status();
    if !status.is_success() {
        dashboard_warn!("{} answered {}", response.url(), status);
        return Err(RequestError::new(
            FailureKind::HttpStatus(status.as_u16()),
            status.to_string(),
        ));
    }

    let bytes = response.bytes().await.map_err(map_reqwest_error)?;
    dashboard_trace!("{} bytes in {} response body", bytes.len(), status);
    serde_json::from_slice(&bytes)
        .map_err(|err| RequestError::new(FailureKind::Decode, err.to_string()))
}

fn map_reqwest_error(err: reqwest::Error) -> RequestError {
    if err.is_timeout() {
        return RequestError::new(FailureKind::Timeout, err.to_string());
    }
    RequestError::new(FailureKind::Network, err.to_string())
}
