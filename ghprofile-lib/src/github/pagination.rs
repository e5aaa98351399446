//! Paged retrieval of a user's repositories.

use super::Client;
use super::records::RepoRecord;
use crate::error::Error;
use crate::profile::Repo;
use url::Url;

const LOG_TARGET: &str = "    github";

/// Items requested per page; a shorter page is the last one.
pub const REPOS_PAGE_SIZE: usize = 100;

impl Client {
    /// Fetch every public repository of `username`.
    ///
    /// Pages are requested from 1 upward until a page comes back with fewer than
    /// [`REPOS_PAGE_SIZE`] items (an empty page included). A failure on any page
    /// fails the whole call and nothing fetched so far is returned.
    pub async fn get_repos(&self, username: &str) -> Result<Vec<Repo>, Error> {
        if username.is_empty() {
            return Err(Error::Validation("username is required"));
        }

        let mut repos = Vec::new();
        let mut page: u32 = 1;

        loop {
            let url = self.repos_page_url(username, page)?;
            let records: Vec<RepoRecord> = self.get_decoded(&url).await?;
            let count = records.len();

            log::debug!(target: LOG_TARGET, "Page {page} of '{username}' repositories returned {count} item(s)");
            repos.extend(records.into_iter().map(Repo::from));

            if count < REPOS_PAGE_SIZE {
                return Ok(repos);
            }

            page += 1;
        }
    }

    fn repos_page_url(&self, username: &str, page: u32) -> Result<Url, Error> {
        let mut url = self.endpoint(&["users", username, "repos"])?;
        let _ = url
            .query_pairs_mut()
            .append_pair("per_page", &REPOS_PAGE_SIZE.to_string())
            .append_pair("page", &page.to_string());
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use super::super::DEFAULT_API_URL;
    use super::*;

    #[test]
    fn page_url_format() {
        let client = Client::new(DEFAULT_API_URL).unwrap();
        let url = client.repos_page_url("octocat", 3).unwrap();
        assert_eq!(url.as_str(), "https://api.github.com/users/octocat/repos?per_page=100&page=3");
    }

    #[tokio::test]
    async fn get_repos_requires_username() {
        let client = Client::new(DEFAULT_API_URL).unwrap();
        let err = client.get_repos("").await.unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
    }
}
