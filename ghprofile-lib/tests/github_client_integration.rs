//! Integration tests for the GitHub client and repository pagination using wiremock

use ghprofile_lib::Error;
use ghprofile_lib::github::{Client, REPOS_PAGE_SIZE};
use reqwest::Method;
use serde_json::{Value, json};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn user_json() -> Value {
    json!({
        "login": "octocat",
        "id": 583231,
        "avatar_url": "https://avatars.githubusercontent.com/u/583231?v=4",
        "html_url": "https://github.com/octocat",
        "name": "The Octocat",
        "company": "@github",
        "blog": "https://github.blog",
        "location": "San Francisco",
        "email": null,
        "hireable": null,
        "bio": null,
        "twitter_username": null,
        "public_repos": 8,
        "public_gists": 8,
        "followers": 21000,
        "following": 9,
        "created_at": "2011-01-25T18:44:36Z",
        "updated_at": "2025-01-22T12:13:57Z"
    })
}

fn repo_json(n: u64, stars: u64, forks: u64, language: Option<&str>) -> Value {
    json!({
        "id": n,
        "name": format!("repo-{n}"),
        "full_name": format!("octocat/repo-{n}"),
        "html_url": format!("https://github.com/octocat/repo-{n}"),
        "description": null,
        "fork": false,
        "stargazers_count": stars,
        "watchers_count": stars,
        "forks_count": forks,
        "language": language,
        "size": 10,
        "open_issues_count": 0,
        "default_branch": "main",
        "created_at": "2020-01-01T00:00:00Z",
        "updated_at": "2024-06-01T00:00:00Z"
    })
}

fn repo_page(first: u64, count: u64) -> Value {
    Value::Array((first..first + count).map(|n| repo_json(n, 1, 0, Some("Rust"))).collect())
}

async fn mount_page(server: &MockServer, page: u32, body: Value) {
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("per_page", REPOS_PAGE_SIZE.to_string()))
        .and(query_param("page", page.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_get_profile_maps_fields() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let profile = client.get_profile("octocat").await.unwrap();

    assert_eq!(profile.login, "octocat");
    assert_eq!(profile.name, "The Octocat");
    assert_eq!(profile.company, "@github");
    assert_eq!(profile.followers, 21000);
    assert_eq!(profile.following, 9);
    assert_eq!(profile.public_repos, 8);
    assert_eq!(profile.bio, "");
    assert_eq!(profile.email, None);
    assert!(!profile.hireable);
    assert!(profile.created_at.is_some());

    // derived stats are the aggregator's job
    assert_eq!(profile.total_stars, None);
    assert_eq!(profile.total_forks, None);
    assert_eq!(profile.avg_stars_per_repo, None);
}

#[tokio::test]
async fn test_requests_identify_the_client() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .and(header("user-agent", "ghprofile-client"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let _ = client.get_profile("octocat").await.unwrap();
}

#[tokio::test]
async fn test_get_profile_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/nobody"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"message":"Not Found"}"#))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let err = client.get_profile("nobody").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert!(!err.is_transport());

    let message = err.to_string();
    assert!(message.contains("404"), "{message}");
    assert!(message.contains("Not Found"), "{message}");
    assert!(message.contains("/users/nobody"), "{message}");
}

#[tokio::test]
async fn test_fetch_json_rejects_non_200_success() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let url = format!("{}/users/octocat", server.uri()).parse().unwrap();
    let err = client.fetch_json(Method::GET, &url).await.unwrap_err();

    assert!(matches!(err, Error::Request { status: 204, .. }));
}

#[tokio::test]
async fn test_fetch_json_returns_raw_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/anything"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not even json"))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let url = format!("{}/anything", server.uri()).parse().unwrap();
    let body = client.fetch_json(Method::GET, &url).await.unwrap();

    assert_eq!(&body[..], b"not even json");
}

#[tokio::test]
async fn test_get_profile_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let err = client.get_profile("octocat").await.unwrap_err();

    assert!(matches!(err, Error::Decode { .. }), "{err:?}");
}

#[tokio::test]
async fn test_transport_error() {
    // nothing listens on port 1
    let client = Client::new("http://127.0.0.1:1").unwrap();
    let err = client.get_profile("octocat").await.unwrap_err();

    assert!(matches!(err, Error::Transport { .. }), "{err:?}");
    assert!(err.is_transport());
    assert_eq!(err.status(), None);
}

#[tokio::test]
async fn test_empty_username_is_validation_error() {
    let client = Client::new("http://127.0.0.1:1").unwrap();

    assert!(matches!(client.get_profile("").await, Err(Error::Validation(_))));
    assert!(matches!(client.get_repos("").await, Err(Error::Validation(_))));
}

#[tokio::test]
async fn test_get_repos_single_short_page() {
    let server = MockServer::start().await;
    let body = json!([repo_json(1, 5, 1, Some("Rust")), repo_json(2, 3, 2, None)]);
    mount_page(&server, 1, body).await;

    let client = Client::new(&server.uri()).unwrap();
    let repos = client.get_repos("octocat").await.unwrap();

    assert_eq!(repos.len(), 2);
    assert_eq!(repos[0].full_name, "octocat/repo-1");
    assert_eq!(repos[0].stargazers_count, 5);
    assert_eq!(repos[0].language, "Rust");
    assert_eq!(repos[1].language, "");
    assert_eq!(repos[1].forks_count, 2);
}

#[tokio::test]
async fn test_get_repos_empty() {
    let server = MockServer::start().await;
    mount_page(&server, 1, json!([])).await;

    let client = Client::new(&server.uri()).unwrap();
    assert!(client.get_repos("octocat").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_repos_follows_pages_until_short_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, repo_page(1, 100)).await;
    mount_page(&server, 2, repo_page(101, 1)).await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(0)
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let repos = client.get_repos("octocat").await.unwrap();

    assert_eq!(repos.len(), 101);
    assert_eq!(repos[0].id, 1);
    assert_eq!(repos[100].id, 101);
}

#[tokio::test]
async fn test_get_repos_full_page_then_empty_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, repo_page(1, 100)).await;
    mount_page(&server, 2, json!([])).await;

    let client = Client::new(&server.uri()).unwrap();
    assert_eq!(client.get_repos("octocat").await.unwrap().len(), 100);
}

#[tokio::test]
async fn test_get_repos_fails_on_later_page() {
    let server = MockServer::start().await;
    mount_page(&server, 1, repo_page(1, 100)).await;

    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = Client::new(&server.uri()).unwrap();
    let err = client.get_repos("octocat").await.unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn test_fetch_profile_with_repos_attaches_stats() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .mount(&server)
        .await;
    let body = json!([repo_json(1, 5, 1, Some("Rust")), repo_json(2, 3, 2, Some("Go"))]);
    mount_page(&server, 1, body).await;

    let client = Client::new(&server.uri()).unwrap();
    let bundle = client.fetch_profile_with_repos("octocat").await.unwrap();

    assert_eq!(bundle.repos.len(), 2);
    assert_eq!(bundle.profile.total_stars, Some(8));
    assert_eq!(bundle.profile.total_forks, Some(3));
    assert_eq!(bundle.profile.avg_stars_per_repo, Some(4.0));
}

#[tokio::test]
async fn test_api_url_with_path_prefix() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v3/users/octocat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_json()))
        .expect(1)
        .mount(&server)
        .await;

    let client = Client::new(&format!("{}/api/v3/", server.uri())).unwrap();
    let profile = client.get_profile("octocat").await.unwrap();

    assert_eq!(profile.login, "octocat");
}

#[test]
fn test_invalid_api_url() {
    let _ = Client::new("not a url").unwrap_err();
    let _ = Client::new("mailto:someone@example.com").unwrap_err();
}
