//! Access to the GitHub REST API: the user endpoint, the paged repository
//! listing, and the combined live fetch that feeds the fallback orchestrator.

mod client;
mod pagination;
mod records;

pub use client::{Client, DEFAULT_API_URL};
pub use pagination::REPOS_PAGE_SIZE;

use crate::error::Error;
use crate::fallback::LiveSource;
use crate::profile::{Bundle, attach_stats};

impl Client {
    /// Fetch the profile, then every repository, then compute the derived stats.
    pub async fn fetch_profile_with_repos(&self, username: &str) -> Result<Bundle, Error> {
        let mut profile = self.get_profile(username).await?;
        let repos = self.get_repos(username).await?;
        attach_stats(&mut profile, &repos);
        Ok(Bundle::new(profile, repos))
    }
}

impl LiveSource for Client {
    async fn fetch(&self, username: &str) -> Result<Bundle, Error> {
        self.fetch_profile_with_repos(username).await
    }
}
