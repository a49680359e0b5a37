use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ───── GitHub API payloads ───────────────────────────────────────────

/// `GET /users/{username}`. Every field is optional so partial payloads still decode.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubUserPayload {
    pub login: Option<String>,
    pub name: Option<String>,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
}

/// One entry of `GET /users/{username}/repos`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GithubRepoPayload {
    pub name: String,
    pub description: Option<String>,
    pub html_url: Option<String>,
    pub language: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub pushed_at: Option<String>,
    pub updated_at: Option<String>,
}

impl GithubRepoPayload {
    /// Last activity timestamp: push time, else update time, else empty.
    pub fn last_activity(&self) -> &str {
        self.pushed_at
            .as_deref()
            .or(self.updated_at.as_deref())
            .unwrap_or("")
    }

    /// Descending sort key: stars, then forks, then last activity.
    pub fn popularity_key(&self) -> (u64, u64, &str) {
        (
            self.stargazers_count.unwrap_or(0),
            self.forks_count.unwrap_or(0),
            self.last_activity(),
        )
    }
}

// ───── Display models ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GithubProfile {
    pub login: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub html_url: String,
    pub bio: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub location: Option<String>,
    pub followers: u64,
    pub following: u64,
    pub public_repos: u64,
    pub public_gists: u64,
}

impl GithubProfile {
    /// Builds the display summary, falling back to `username` when the payload lacks a login.
    pub fn from_payload(payload: GithubUserPayload, username: &str) -> Self {
        let login = payload.login.unwrap_or_else(|| username.to_string());
        GithubProfile {
            name: payload.name.unwrap_or_else(|| login.clone()),
            html_url: payload
                .html_url
                .unwrap_or_else(|| format!("https://github.com/{}", login)),
            login,
            avatar_url: payload.avatar_url,
            bio: payload.bio,
            company: payload.company,
            blog: payload.blog.filter(|b| !b.is_empty()),
            location: payload.location,
            followers: payload.followers.unwrap_or(0),
            following: payload.following.unwrap_or(0),
            public_repos: payload.public_repos.unwrap_or(0),
            public_gists: payload.public_gists.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GithubRepository {
    pub name: String,
    pub description: Option<String>,
    pub html_url: String,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub pushed_at: Option<String>,
}

impl From<GithubRepoPayload> for GithubRepository {
    fn from(payload: GithubRepoPayload) -> Self {
        let pushed_at = payload.pushed_at.or(payload.updated_at);
        GithubRepository {
            html_url: payload.html_url.unwrap_or_default(),
            name: payload.name,
            description: payload.description,
            language: payload.language,
            stargazers_count: payload.stargazers_count.unwrap_or(0),
            forks_count: payload.forks_count.unwrap_or(0),
            pushed_at,
        }
    }
}

/// Profile and repositories captured together by one refresh.
#[derive(Debug, Clone)]
pub struct ProfileSnapshot {
    pub profile: GithubProfile,
    pub repositories: Vec<GithubRepository>,
    pub fetched_at: DateTime<Utc>,
}

// ───── Fallback dataset ──────────────────────────────────────────────

pub fn fallback_profile() -> GithubProfile {
    GithubProfile {
        login: "cognito-inc".to_string(),
        name: "Cognito Inc.".to_string(),
        avatar_url: None,
        html_url: "https://github.com/cognito-inc".to_string(),
        bio: Some("AI-driven software for education and business automation.".to_string()),
        company: Some("Cognito Inc.".to_string()),
        blog: None,
        location: Some("Kinshasa, DR Congo".to_string()),
        followers: 48,
        following: 12,
        public_repos: 18,
        public_gists: 3,
    }
}

/// Ordered most popular first, like a live listing after sorting.
pub fn fallback_repositories() -> Vec<GithubRepository> {
    let repo = |name: &str, description: &str, language: &str, stars: u64, forks: u64, pushed_at: &str| {
        GithubRepository {
            name: name.to_string(),
            description: Some(description.to_string()),
            html_url: format!("https://github.com/cognito-inc/{}", name),
            language: Some(language.to_string()),
            stargazers_count: stars,
            forks_count: forks,
            pushed_at: Some(pushed_at.to_string()),
        }
    };

    vec![
        repo("loyola-lms", "AI-assisted learning management system for higher education", "Python", 24, 7, "2025-05-12T09:30:00Z"),
        repo("cognitoai-platform", "Business process automation with pre-trained models", "Python", 19, 5, "2025-04-28T16:05:00Z"),
        repo("smart-analytics", "Real-time analytics dashboard for startups", "JavaScript", 11, 3, "2025-03-17T11:45:00Z"),
        repo("portfolio", "Source of this website", "HTML", 6, 1, "2025-06-02T08:00:00Z"),
        repo("ml-toolkit", "Reusable data preparation helpers", "Jupyter Notebook", 4, 0, "2024-11-20T14:10:00Z"),
    ]
}
