use std::time::Duration;

use lfv_core::Course;
use lfv_logging::lfv_debug;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;

use crate::{ApiError, FailureKind};

const COURSES_PATH: &str = "courses";
const CONVERT_PATH: &str = "convert-youtube";

#[derive(Debug, Clone)]
pub struct ApiSettings {
    /// API root, e.g. `https://host/api`. Endpoint paths are appended to it.
    pub base_url: String,
    /// `None` leaves the transport default in place.
    pub connect_timeout: Option<Duration>,
    /// `None` means a request may wait indefinitely.
    pub request_timeout: Option<Duration>,
}

impl ApiSettings {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            connect_timeout: None,
            request_timeout: None,
        }
    }
}

/// The two backend endpoints the course page consumes.
#[async_trait::async_trait]
pub trait CourseApi: Send + Sync {
    /// `GET {base}/courses`
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    /// `POST {base}/convert-youtube` with `{"video_url": ...}`
    async fn convert_video(&self, video_url: &str) -> Result<Course, ApiError>;
}

#[derive(Debug, Serialize)]
struct ConvertRequest<'a> {
    video_url: &'a str,
}

#[derive(Debug, Clone)]
pub struct ReqwestCourseApi {
    client: reqwest::Client,
    base_url: String,
}

impl ReqwestCourseApi {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ApiError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        Url::parse(&format!("{}/{}", self.base_url, path))
            .map_err(|err| ApiError::new(FailureKind::InvalidUrl, err.to_string()))
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = request
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_reqwest_error)?;

        if !status.is_success() {
            return Err(
                ApiError::new(FailureKind::HttpStatus(status.as_u16()), status.to_string())
                    .with_detail(error_detail(&body)),
            );
        }

        serde_json::from_slice(&body)
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))
    }
}

#[async_trait::async_trait]
impl CourseApi for ReqwestCourseApi {
    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let url = self.endpoint(COURSES_PATH)?;
        lfv_debug!("GET {}", url);
        self.execute(self.client.get(url)).await
    }

    async fn convert_video(&self, video_url: &str) -> Result<Course, ApiError> {
        let url = self.endpoint(CONVERT_PATH)?;
        let payload = serde_json::to_vec(&ConvertRequest { video_url })
            .map_err(|err| ApiError::new(FailureKind::Decode, err.to_string()))?;
        lfv_debug!("POST {} video_url={}", url, video_url);
        self.execute(
            self.client
                .post(url)
                .header(CONTENT_TYPE, "application/json")
                .body(payload),
        )
        .await
    }
}

/// Pulls a textual `detail` out of an error body. Any other shape yields `None`.
fn error_detail(body: &[u8]) -> Option<String> {
    let value: serde_json::Value = serde_json::from_slice(body).ok()?;
    value
        .get("detail")
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned)
}

fn map_reqwest_error(err: reqwest::Error) -> ApiError {
    if err.is_timeout() {
        return ApiError::new(FailureKind::Timeout, err.to_string());
    }
    ApiError::new(FailureKind::Network, err.to_string())
}

#[cfg(test)]
mod tests {
    use super::error_detail;

    #[test]
    fn detail_is_read_from_string_field() {
        assert_eq!(
            error_detail(br#"{"detail":"Invalid YouTube URL"}"#),
            Some("Invalid YouTube URL".to_string())
        );
    }

    #[test]
    fn non_string_detail_is_ignored() {
        // Request validation errors carry a list of problems instead.
        let body = br#"{"detail":[{"loc":["body","video_url"],"msg":"field required"}]}"#;
        assert_eq!(error_detail(body), None);
        assert_eq!(error_detail(b"<html>Bad Gateway</html>"), None);
        assert_eq!(error_detail(b""), None);
    }
}
