//! Upstream JSON shapes for the user and repository endpoints.
//!
//! GitHub sends `null` for many optional fields, so these mirror the wire format
//! loosely and are converted into [`Profile`] / [`Repo`] right after decoding.
//! Fields we don't use are ignored.

use crate::profile::{Profile, Repo};
use chrono::{DateTime, Utc};
use serde::Deserialize;

/// `GET /users/{username}`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UserRecord {
    pub login: String,
    pub avatar_url: Option<String>,
    pub html_url: Option<String>,
    pub name: Option<String>,
    pub company: Option<String>,
    pub blog: Option<String>,
    pub bio: Option<String>,
    pub twitter_username: Option<String>,
    pub email: Option<String>,
    pub hireable: Option<bool>,
    pub followers: Option<u64>,
    pub following: Option<u64>,
    pub public_repos: Option<u64>,
    pub public_gists: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
}

/// One element of `GET /users/{username}/repos`
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RepoRecord {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub html_url: Option<String>,
    pub description: Option<String>,
    pub stargazers_count: Option<u64>,
    pub forks_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub language: Option<String>,
    pub size: Option<u64>,
    pub open_issues_count: Option<u64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
    pub fork: Option<bool>,
    pub default_branch: Option<String>,
}

impl From<UserRecord> for Profile {
    fn from(u: UserRecord) -> Self {
        Self {
            login: u.login,
            name: u.name.unwrap_or_default(),
            avatar_url: u.avatar_url.unwrap_or_default(),
            html_url: u.html_url.unwrap_or_default(),
            bio: u.bio.unwrap_or_default(),
            company: u.company.unwrap_or_default(),
            blog: u.blog.unwrap_or_default(),
            twitter_username: u.twitter_username.unwrap_or_default(),
            email: u.email.filter(|e| !e.is_empty()),
            followers: u.followers.unwrap_or_default(),
            following: u.following.unwrap_or_default(),
            public_repos: u.public_repos.unwrap_or_default(),
            public_gists: u.public_gists.unwrap_or_default(),
            created_at: u.created_at,
            hireable: u.hireable.unwrap_or_default(),
            total_stars: None,
            total_forks: None,
            avg_stars_per_repo: None,
        }
    }
}

impl From<RepoRecord> for Repo {
    fn from(r: RepoRecord) -> Self {
        Self {
            id: r.id.unwrap_or_default(),
            name: r.name.unwrap_or_default(),
            full_name: r.full_name.unwrap_or_default(),
            html_url: r.html_url.unwrap_or_default(),
            description: r.description.unwrap_or_default(),
            stargazers_count: r.stargazers_count.unwrap_or_default(),
            forks_count: r.forks_count.unwrap_or_default(),
            watchers_count: r.watchers_count.unwrap_or_default(),
            language: r.language.unwrap_or_default(),
            size: r.size.unwrap_or_default(),
            open_issues_count: r.open_issues_count.unwrap_or_default(),
            created_at: r.created_at,
            updated_at: r.updated_at,
            fork: r.fork.unwrap_or_default(),
            default_branch: r.default_branch.unwrap_or_default(),
        }
    }
}
