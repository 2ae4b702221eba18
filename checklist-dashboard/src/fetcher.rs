use std::time::Duration;

use async_trait::async_trait;
use checklist_rules::{ApplicantRecord, RuleError};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;
use url::Url;

/// Failure to obtain an applicant record from the upstream API.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build applicant HTTP client: {0}")]
    Client(String),
    #[error("applicant HTTP request failed: {0}")]
    Request(String),
    #[error("applicant API returned unexpected status {status}")]
    UnexpectedStatus { status: reqwest::StatusCode },
    #[error("failed to decode applicant response: {0}")]
    Decode(String),
    #[error("applicant response is not a usable record: {0}")]
    MalformedRecord(#[source] RuleError),
}

/// Anything that can produce the applicant record for one dashboard request.
#[async_trait]
pub trait ApplicantSource: Send + Sync {
    async fn fetch(&self) -> Result<ApplicantRecord, FetchError>;

    /// Human readable location of the source, used in logs and health output.
    fn describe(&self) -> String;
}

/// Fetches the applicant record with a single HTTP GET.
#[derive(Clone)]
pub struct HttpApplicantSource {
    http: reqwest::Client,
    url: Url,
}

impl HttpApplicantSource {
    pub fn new(url: Url, timeout: Duration) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|err| FetchError::Client(err.to_string()))?;
        Ok(Self { http, url })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl ApplicantSource for HttpApplicantSource {
    async fn fetch(&self) -> Result<ApplicantRecord, FetchError> {
        let response = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| FetchError::Request(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::UnexpectedStatus { status });
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| FetchError::Decode(err.to_string()))?;
        debug!(url = %self.url, "fetched applicant record");

        ApplicantRecord::from_value(payload).map_err(FetchError::MalformedRecord)
    }

    fn describe(&self) -> String {
        self.url.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn source_for(server: &MockServer) -> HttpApplicantSource {
        let url = Url::parse(&format!("{}/applicant", server.uri())).expect("url");
        HttpApplicantSource::new(url, Duration::from_secs(2)).expect("client")
    }

    #[tokio::test]
    async fn returns_the_decoded_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/applicant"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "isValuationFeePaid": true,
                "riskRating": "Medium"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let record = source_for(&server).await.fetch().await.expect("record");
        assert_eq!(record.as_value()["riskRating"], "Medium");
    }

    #[tokio::test]
    async fn non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(
            err,
            FetchError::UnexpectedStatus { status } if status.as_u16() == 503
        ));
    }

    #[tokio::test]
    async fn invalid_json_is_a_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>nope</html>"))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[tokio::test]
    async fn non_object_json_is_a_malformed_record() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .mount(&server)
            .await;

        let err = source_for(&server).await.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::MalformedRecord(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_a_request_error() {
        let url = Url::parse("http://127.0.0.1:9/applicant").expect("url");
        let source = HttpApplicantSource::new(url, Duration::from_millis(500)).expect("client");

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Request(_)));
    }
}
