use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One GitHub account plus the statistics derived from its repositories.
///
/// The three derived fields stay `None` until [`attach_stats`](super::attach_stats)
/// has run. After that the totals are always present (zero for an account with no
/// repositories) while the average is only present when there was at least one
/// repository to divide by.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    /// Account handle (`login` upstream).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub login: String,

    /// Display name; may be empty.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub avatar_url: String,

    /// Canonical web URL of the account.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub bio: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub company: String,

    /// Personal website.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub blog: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub twitter_username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "is_zero")]
    pub followers: u64,

    #[serde(skip_serializing_if = "is_zero")]
    pub following: u64,

    #[serde(skip_serializing_if = "is_zero")]
    pub public_repos: u64,

    #[serde(skip_serializing_if = "is_zero")]
    pub public_gists: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "is_false")]
    pub hireable: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_stars: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_forks: Option<u64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub avg_stars_per_repo: Option<f64>,
}

/// One repository owned by an account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Repo {
    #[serde(skip_serializing_if = "is_zero")]
    pub id: u64,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub name: String,

    /// `owner/name`
    #[serde(skip_serializing_if = "String::is_empty")]
    pub full_name: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub html_url: String,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,

    #[serde(skip_serializing_if = "is_zero")]
    pub stargazers_count: u64,

    #[serde(skip_serializing_if = "is_zero")]
    pub forks_count: u64,

    #[serde(skip_serializing_if = "is_zero")]
    pub watchers_count: u64,

    /// Primary language; empty when GitHub could not classify the repository.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub language: String,

    /// Size in kilobytes.
    #[serde(skip_serializing_if = "is_zero")]
    pub size: u64,

    #[serde(skip_serializing_if = "is_zero")]
    pub open_issues_count: u64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(skip_serializing_if = "is_false")]
    pub fork: bool,

    #[serde(skip_serializing_if = "String::is_empty")]
    pub default_branch: String,
}

/// A profile together with its repositories.
///
/// This is what gets rendered, and also the on-disk shape of a cache entry. The
/// username the bundle belongs to is not stored inside it; the cache encodes it in
/// the file name instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bundle {
    pub profile: Profile,
    #[serde(default)]
    pub repos: Vec<Repo>,
}

impl Bundle {
    #[must_use]
    pub const fn new(profile: Profile, repos: Vec<Repo>) -> Self {
        Self { profile, repos }
    }
}

#[expect(clippy::trivially_copy_pass_by_ref, reason = "signature required by serde's skip_serializing_if")]
const fn is_zero(n: &u64) -> bool {
    *n == 0
}

#[expect(clippy::trivially_copy_pass_by_ref, reason = "signature required by serde's skip_serializing_if")]
const fn is_false(b: &bool) -> bool {
    !*b
}
