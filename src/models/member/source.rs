use std::fmt;
use std::future::Future;
use std::time::Duration;

use reqwest::Client;

use super::types::Member;

/// Where the dashboard loads its records from.
pub trait MemberSource: Send + Sync {
    fn fetch_members(&self) -> impl Future<Output = Result<Vec<Member>, FetchError>> + Send;
}

#[derive(Debug)]
pub enum FetchError {
    Request(reqwest::Error),
    Status(u16),
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "Request failed: {e}"),
            FetchError::Status(code) => write!(f, "Unexpected HTTP status {code}"),
            FetchError::Decode(e) => write!(f, "Invalid member JSON: {e}"),
        }
    }
}

impl std::error::Error for FetchError {}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Request(e)
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e)
    }
}

/// Single read-only GET against a static JSON endpoint. No retries.
#[derive(Debug, Clone)]
pub struct HttpMemberSource {
    client: Client,
    url: String,
}

impl HttpMemberSource {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("member-admin/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client, url: url.to_string() })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl MemberSource for HttpMemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let members: Vec<Member> = serde_json::from_str(&body)?;
        Ok(members)
    }
}

/// Fixed in-memory record list, used for demos and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticMemberSource(pub Vec<Member>);

impl MemberSource for StaticMemberSource {
    async fn fetch_members(&self) -> Result<Vec<Member>, FetchError> {
        Ok(self.0.clone())
    }
}
