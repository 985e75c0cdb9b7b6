//! Pivotal Tracker v5 REST client.

use super::{CommentRequest, DestinationError, Story, StoryComment, StoryDestination, StoryRequest};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::Url;

/// Base URL of the Pivotal Tracker v5 API.
pub const TRACKER_API_BASE: &str = "https://www.pivotaltracker.com/services/v5";

/// Header carrying the API token.
const TOKEN_HEADER: &str = "X-TrackerToken";

/// HTTP client for the Pivotal Tracker stories API.
#[derive(Debug, Clone)]
pub struct TrackerClient {
    http: Client,
    token: String,
    base_url: String,
}

impl TrackerClient {
    /// Creates a client for `base_url` authenticated with `token`.
    ///
    /// # Errors
    ///
    /// Returns [`DestinationError::Http`] if the HTTP client cannot be built.
    pub fn new(token: impl Into<String>, base_url: &Url) -> Result<Self, DestinationError> {
        let http = Client::builder()
            .user_agent(concat!("issue-migrator/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            http,
            token: token.into(),
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
        })
    }

    /// Sends a JSON `POST` to `path` and decodes the JSON answer.
    async fn post<B, R>(
        &self,
        operation: &'static str,
        path: &str,
        body: &B,
    ) -> Result<R, DestinationError>
    where
        B: Serialize + ?Sized,
        R: DeserializeOwned,
    {
        let url = format!("{}{}", self.base_url, path);
        debug!(operation, url = %url, "Sending Tracker request");

        let resp = self
            .http
            .post(url.as_str())
            .header(TOKEN_HEADER, &self.token)
            .json(body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(DestinationError::Rejected {
                operation,
                status: status.as_u16(),
                body,
            });
        }

        Ok(resp.json::<R>().await?)
    }
}

impl StoryDestination for TrackerClient {
    async fn create_story(
        &self,
        project_id: u64,
        request: &StoryRequest,
    ) -> Result<Story, DestinationError> {
        self.post(
            "create story",
            &format!("/projects/{project_id}/stories"),
            request,
        )
        .await
    }

    async fn add_comment(
        &self,
        project_id: u64,
        story_id: u64,
        request: &CommentRequest,
    ) -> Result<StoryComment, DestinationError> {
        self.post(
            "add comment",
            &format!("/projects/{project_id}/stories/{story_id}/comments"),
            request,
        )
        .await
    }
}
