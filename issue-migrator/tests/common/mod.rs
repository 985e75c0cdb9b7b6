//! In-memory source and destination used by the pipeline tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use issue_migrator::{
    CommentRequest, DestinationError, IssueSource, SourceComment, SourceError, SourceIssue, Story,
    StoryComment, StoryDestination, StoryRequest,
};
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

/// A call received by [`FakeSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceCall {
    ListIssues { repo: String, limit: usize },
    ListComments { repo: String, number: u64 },
}

/// A call received by [`RecordingDestination`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationCall {
    CreateStory {
        project_id: u64,
        request: StoryRequest,
    },
    AddComment {
        project_id: u64,
        story_id: u64,
        request: CommentRequest,
    },
}

/// Serves canned issues and comments and records every call.
#[derive(Default)]
pub struct FakeSource {
    issues: HashMap<String, Vec<SourceIssue>>,
    comments: HashMap<(String, u64), Vec<SourceComment>>,
    failing_repos: HashSet<String>,
    failing_comments: HashSet<u64>,
    calls: Mutex<Vec<SourceCall>>,
}

impl FakeSource {
    pub fn with_issue(mut self, repo: &str, issue: SourceIssue) -> Self {
        self.issues.entry(repo.to_string()).or_default().push(issue);
        self
    }

    pub fn with_comment(mut self, repo: &str, number: u64, comment: SourceComment) -> Self {
        self.comments
            .entry((repo.to_string(), number))
            .or_default()
            .push(comment);
        self
    }

    pub fn failing_on(mut self, repo: &str) -> Self {
        self.failing_repos.insert(repo.to_string());
        self
    }

    pub fn failing_comments_on(mut self, number: u64) -> Self {
        self.failing_comments.insert(number);
        self
    }

    pub fn calls(&self) -> Vec<SourceCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl IssueSource for FakeSource {
    async fn list_open_issues(
        &self,
        _owner: &str,
        repo: &str,
        limit: usize,
    ) -> Result<Vec<SourceIssue>, SourceError> {
        self.calls.lock().unwrap().push(SourceCall::ListIssues {
            repo: repo.to_string(),
            limit,
        });

        if self.failing_repos.contains(repo) {
            return Err(SourceError::RateLimitExceeded { reset_at: 0 });
        }

        let mut issues = self.issues.get(repo).cloned().unwrap_or_default();
        issues.truncate(limit);
        Ok(issues)
    }

    async fn list_comments(
        &self,
        _owner: &str,
        repo: &str,
        number: u64,
    ) -> Result<Vec<SourceComment>, SourceError> {
        self.calls.lock().unwrap().push(SourceCall::ListComments {
            repo: repo.to_string(),
            number,
        });

        if self.failing_comments.contains(&number) {
            return Err(SourceError::RateLimitExceeded { reset_at: 0 });
        }

        Ok(self
            .comments
            .get(&(repo.to_string(), number))
            .cloned()
            .unwrap_or_default())
    }
}

/// Hands out sequential story ids starting at `first_story_id` and records
/// every call.
pub struct RecordingDestination {
    next_story_id: Mutex<u64>,
    fail_create: bool,
    fail_comments: bool,
    calls: Mutex<Vec<DestinationCall>>,
}

impl RecordingDestination {
    pub fn new(first_story_id: u64) -> Self {
        Self {
            next_story_id: Mutex::new(first_story_id),
            fail_create: false,
            fail_comments: false,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_create: true,
            ..Self::new(1)
        }
    }

    pub fn failing_comments(first_story_id: u64) -> Self {
        Self {
            fail_comments: true,
            ..Self::new(first_story_id)
        }
    }

    pub fn calls(&self) -> Vec<DestinationCall> {
        self.calls.lock().unwrap().clone()
    }
}

impl StoryDestination for RecordingDestination {
    async fn create_story(
        &self,
        project_id: u64,
        request: &StoryRequest,
    ) -> Result<Story, DestinationError> {
        self.calls.lock().unwrap().push(DestinationCall::CreateStory {
            project_id,
            request: request.clone(),
        });

        if self.fail_create {
            return Err(DestinationError::Rejected {
                operation: "create story",
                status: 422,
                body: "invalid parameter".to_string(),
            });
        }

        let mut next = self.next_story_id.lock().unwrap();
        let id = *next;
        *next += 1;
        Ok(Story {
            id,
            project_id: Some(project_id),
            name: Some(request.name.clone()),
            url: None,
        })
    }

    async fn add_comment(
        &self,
        project_id: u64,
        story_id: u64,
        request: &CommentRequest,
    ) -> Result<StoryComment, DestinationError> {
        let mut calls = self.calls.lock().unwrap();
        calls.push(DestinationCall::AddComment {
            project_id,
            story_id,
            request: request.clone(),
        });

        if self.fail_comments {
            return Err(DestinationError::Rejected {
                operation: "add comment",
                status: 500,
                body: "internal error".to_string(),
            });
        }

        Ok(StoryComment {
            id: calls.len() as u64,
            story_id: Some(story_id),
            text: Some(request.text.clone()),
        })
    }
}

pub fn issue(number: u64, title: &str, body: &str, labels: &[&str]) -> SourceIssue {
    SourceIssue {
        number,
        title: title.to_string(),
        body: body.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        url: format!("https://github.com/acme/widgets/issues/{number}"),
        labels: labels.iter().map(|label| label.to_string()).collect(),
    }
}

pub fn comment(author: &str, body: &str) -> SourceComment {
    SourceComment {
        body: body.to_string(),
        author: author.to_string(),
        created_at: Utc.with_ymd_and_hms(2024, 3, 2, 8, 30, 0).unwrap(),
        url: "https://github.com/acme/widgets/issues/42#issuecomment-1".to_string(),
    }
}
