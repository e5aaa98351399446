//! Synthetic profile shown when nothing better is available, or on request.

use crate::profile::{Bundle, Profile, Repo, attach_stats};

/// Username used when the caller didn't supply one.
pub const DEMO_USERNAME: &str = "demo";

const DEMO_BIO: &str = "This is demo data used when the GitHub API is unavailable.\n\n\
                        Note: none of these numbers are real.";

/// `(name suffix, language, stars, forks)`
const DEMO_REPOS: [(&str, &str, u64, u64); 3] = [
    ("repo-one", "Go", 10, 2),
    ("repo-two", "TypeScript", 5, 1),
    ("repo-three", "Rust", 2, 0),
];

/// Build the synthetic bundle for `username`.
///
/// Deterministic and free of I/O. The username ends up in the profile's name and
/// URL and in every repository's full name and URL.
#[must_use]
pub fn demo_bundle(username: &str) -> Bundle {
    let username = if username.is_empty() { DEMO_USERNAME } else { username };
    let html_url = format!("https://github.com/{username}");

    let repos: Vec<Repo> = DEMO_REPOS
        .iter()
        .zip(1..)
        .map(|(&(name, language, stars, forks), id)| Repo {
            id,
            name: name.to_string(),
            full_name: format!("{username}/{name}"),
            html_url: format!("{html_url}/{name}"),
            language: language.to_string(),
            stargazers_count: stars,
            forks_count: forks,
            default_branch: "main".to_string(),
            ..Repo::default()
        })
        .collect();

    let mut profile = Profile {
        login: username.to_string(),
        name: username.to_string(),
        html_url,
        bio: DEMO_BIO.to_string(),
        followers: 42,
        following: 7,
        public_repos: 5,
        public_gists: 1,
        ..Profile::default()
    };

    attach_stats(&mut profile, &repos);
    Bundle::new(profile, repos)
}
