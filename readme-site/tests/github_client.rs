mod common;

use common::encoded_readme;
use readme_site::{
    build_client, AccessToken, ClientError, DiscoveryError, FetchTarget, GitHubClient, Level,
    ListRequest, MemoryReporter, RepositoryClient, Runner, RunnerConfig, RunnerError,
    Visibility, PAGE_SIZE,
};
use serde_json::json;
use std::sync::Arc;
use tempfile::TempDir;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn install_crypto() {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
}

fn api_url(server: &MockServer) -> Url {
    Url::parse(&server.uri()).unwrap()
}

fn first_page() -> ListRequest {
    ListRequest {
        page: 1,
        per_page: PAGE_SIZE,
        visibility: Visibility::Public,
    }
}

fn repos(names: &[&str]) -> serde_json::Value {
    json!(names
        .iter()
        .map(|name| json!({ "id": 1, "name": name, "private": false }))
        .collect::<Vec<_>>())
}

fn not_found() -> ResponseTemplate {
    ResponseTemplate::new(404).set_body_json(json!({
        "message": "Not Found",
        "documentation_url": "https://docs.github.com/rest"
    }))
}

/// Mounts a two-page organization listing for `acme`.
async fn mount_org_listing(server: &MockServer) {
    let next = format!(
        "<{}/orgs/acme/repos?type=public&per_page=50&page=2>; rel=\"next\", <{}/orgs/acme/repos?type=public&per_page=50&page=2>; rel=\"last\"",
        server.uri(),
        server.uri()
    );

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "1"))
        .and(query_param("per_page", "50"))
        .and(query_param("type", "public"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", next.as_str())
                .set_body_json(repos(&["site", "api"])),
        )
        .expect(1)
        .mount(server)
        .await;

    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .and(query_param("page", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos(&["docs"])))
        .expect(1)
        .mount(server)
        .await;
}

#[tokio::test]
async fn lists_org_page_with_next_link() {
    install_crypto();
    let server = MockServer::start().await;
    mount_org_listing(&server).await;
    let client = GitHubClient::new(None, Some(&api_url(&server))).unwrap();

    let page = client
        .list_org_repositories("acme", first_page())
        .await
        .unwrap();

    let names: Vec<_> = page.records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, ["site", "api"]);
    assert_eq!(page.next_page, 2);

    let last = client
        .list_org_repositories("acme", ListRequest { page: 2, ..first_page() })
        .await
        .unwrap();
    assert_eq!(last.records.len(), 1);
    assert_eq!(last.next_page, 0);
}

#[tokio::test]
async fn lists_user_repositories_through_user_endpoint() {
    install_crypto();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users/octocat/repos"))
        .and(query_param("type", "public"))
        .respond_with(ResponseTemplate::new(200).set_body_json(repos(&["dotfiles"])))
        .expect(1)
        .mount(&server)
        .await;
    let client = GitHubClient::new(None, Some(&api_url(&server))).unwrap();

    let page = client
        .list_user_repositories("octocat", first_page())
        .await
        .unwrap();

    assert_eq!(page.records[0].name, "dotfiles");
    assert_eq!(page.next_page, 0);
}

#[tokio::test]
async fn fetches_and_decodes_readme() {
    install_crypto();
    let server = MockServer::start().await;
    let encoded = encoded_readme("# Site\n\nDocs for the site.\n");
    Mock::given(method("GET"))
        .and(path("/repos/acme/site/readme"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "README.md",
            "path": "README.md",
            "content": encoded.content,
            "encoding": "base64"
        })))
        .mount(&server)
        .await;
    let client = GitHubClient::new(None, Some(&api_url(&server))).unwrap();

    let readme = client.get_readme("acme", "site").await.unwrap();

    assert_eq!(readme.decode().unwrap(), "# Site\n\nDocs for the site.\n");
}

#[tokio::test]
async fn missing_readme_is_classified() {
    install_crypto();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/empty/readme"))
        .respond_with(not_found())
        .mount(&server)
        .await;
    let client = GitHubClient::new(None, Some(&api_url(&server))).unwrap();

    let result = client.get_readme("acme", "empty").await;

    assert!(matches!(
        result,
        Err(ClientError::ReadmeNotFound { owner, repo }) if owner == "acme" && repo == "empty"
    ));
}

#[tokio::test]
async fn rate_limited_listing_is_classified() {
    install_crypto();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({
            "message": "API rate limit exceeded for 127.0.0.1.",
            "documentation_url": "https://docs.github.com/rest/overview/resources-in-the-rest-api#rate-limiting"
        })))
        .mount(&server)
        .await;
    let client = GitHubClient::new(None, Some(&api_url(&server))).unwrap();

    let result = client.list_org_repositories("acme", first_page()).await;

    assert!(matches!(result, Err(ClientError::RateLimited { .. })));
}

#[tokio::test]
async fn server_errors_are_not_retried_and_keep_their_status() {
    install_crypto();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/acme/repos"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "message": "Service Unavailable"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/repos/acme/x/readme"))
        .respond_with(ResponseTemplate::new(502).set_body_json(json!({
            "message": "Server Error"
        })))
        .mount(&server)
        .await;
    let client = GitHubClient::new(None, Some(&api_url(&server))).unwrap();

    let listing = client
        .list_org_repositories("acme", first_page())
        .await
        .unwrap_err();
    let readme = client.get_readme("acme", "x").await.unwrap_err();

    let requests = server.received_requests().await.unwrap();
    let hits = |route: &str| requests.iter().filter(|r| r.url.path() == route).count();
    assert_eq!(hits("/orgs/acme/repos"), 1);
    assert_eq!(hits("/repos/acme/x/readme"), 1);

    assert!(matches!(listing, ClientError::Status { status: 503, .. }));
    assert_eq!(
        listing.to_string(),
        "GitHub API returned 503: Service Unavailable"
    );
    assert_eq!(readme.to_string(), "GitHub API returned 502: Server Error");
}

#[tokio::test]
async fn anonymous_client_warns_once() {
    install_crypto();
    let reporter = MemoryReporter::new();

    let client = build_client(None, None, &reporter).unwrap();

    assert!(!client.is_authenticated());
    let warnings = reporter.at_level(Level::Warn);
    assert_eq!(warnings.len(), 1);
    assert_eq!(warnings[0].scope, "config");
    assert!(warnings[0].message.contains("GITHUB_ACCESS_TOKEN"));
}

#[tokio::test]
async fn authenticated_client_does_not_warn() {
    install_crypto();
    let reporter = MemoryReporter::new();
    let token = AccessToken::resolve(Some("ghp_test".to_string()));

    let client = build_client(token.as_ref(), None, &reporter).unwrap();

    assert!(client.is_authenticated());
    assert!(reporter.at_level(Level::Warn).is_empty());
}

#[tokio::test]
async fn end_to_end_build_against_mock_api() {
    install_crypto();
    let server = MockServer::start().await;
    mount_org_listing(&server).await;
    for name in ["site", "api"] {
        Mock::given(method("GET"))
            .and(path(format!("/repos/acme/{name}/readme")))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "content": encoded_readme(&format!("# {name}\n")).content,
                "encoding": "base64"
            })))
            .expect(1)
            .mount(&server)
            .await;
    }
    Mock::given(method("GET"))
        .and(path("/repos/acme/docs/readme"))
        .respond_with(not_found())
        .expect(1)
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let reporter = Arc::new(MemoryReporter::new());
    let mut site = readme_site::SiteConfig {
        site: "acme".to_string(),
        api_url: Some(api_url(&server)),
        ..readme_site::SiteConfig::default()
    };
    site.output_dir = temp.path().join("content").join("readmes");
    let config = RunnerConfig::from_site(&site, None).unwrap();

    let runner = Runner::new(config, reporter.clone()).unwrap();
    let warned_before_run = reporter.at_level(Level::Warn).len();
    let summary = runner.run().await.unwrap();

    assert_eq!(warned_before_run, 1);
    assert_eq!(reporter.at_level(Level::Warn).len(), 1);
    assert_eq!(summary.repositories_discovered, 3);
    assert_eq!(summary.files_written, 2);
    assert!(site.output_dir.join("site.md").exists());
    assert!(site.output_dir.join("api.md").exists());
    assert!(!site.output_dir.join("docs.md").exists());
    assert_eq!(
        reporter.reports().first().map(|r| r.message.as_str()),
        Some("fetching repos for 'acme'")
    );
    assert_eq!(
        reporter.reports().last().map(|r| r.message.as_str()),
        Some("Fetched 3 repos")
    );
}

#[tokio::test]
async fn discovery_error_from_api_is_fatal() {
    install_crypto();
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/orgs/ghost/repos"))
        .respond_with(not_found())
        .mount(&server)
        .await;

    let temp = TempDir::new().unwrap();
    let reporter = Arc::new(MemoryReporter::new());
    let config = RunnerConfig::new(FetchTarget::organization("ghost"), None)
        .with_output_dir(temp.path());
    let client = Arc::new(GitHubClient::new(None, Some(&api_url(&server))).unwrap());

    let result = Runner::with_client(config, client, reporter.clone())
        .run()
        .await;

    assert!(matches!(
        result,
        Err(RunnerError::Discovery(DiscoveryError::Page { page: 1, .. }))
    ));
    assert_eq!(reporter.at_level(Level::Error).len(), 1);
}
