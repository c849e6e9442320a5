//! Github Platform
use super::{
    repo::RepoGithub, GITHUB_API_HEADER, GITHUB_API_URL, GITHUB_API_VERSION, GITHUB_URL,
};
use crate::{
    errors::{MigrateError, MigrateErrorKind},
    platform::{DestinationPlatform, NewRepo, PlatformFuture, PlatformType},
};
use log::{debug, error, info};
use reqwest::{
    header::{ACCEPT, AUTHORIZATION, USER_AGENT},
    RequestBuilder, StatusCode,
};
use url::Url;
use urlencoding::encode;

/// User agent sent to the API
const USER_AGENT_VALUE: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Github Platform
#[derive(Default, Debug, Clone)]
pub struct GithubPlatform {
    /// Account owning the migrated repositories
    username: String,

    /// Github token
    token: String,

    /// REST API base URL
    api_url: String,

    /// Host used for git transport
    host: String,

    /// Reqwest client
    client: reqwest::Client,
}

impl GithubPlatform {
    /// Create a new GithubPlatform talking to github.com
    pub(crate) fn new(username: String, token: String) -> Self {
        Self {
            username,
            token,
            api_url: GITHUB_API_URL.to_string(),
            host: GITHUB_URL.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Use another API base URL
    pub(crate) fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = api_url.trim_end_matches('/').to_string();
        self
    }

    /// Use another git host
    pub(crate) fn with_host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// Add the headers every GitHub API call carries
    fn headers(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header(AUTHORIZATION, format!("Bearer {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .header(USER_AGENT, USER_AGENT_VALUE)
            .header(GITHUB_API_HEADER, GITHUB_API_VERSION)
    }
}

impl DestinationPlatform for GithubPlatform {
    fn repo_exists<'a>(
        &'a self,
        name: &'a str,
    ) -> PlatformFuture<'a, Result<bool, MigrateError>> {
        Box::pin(async move {
            let url = format!(
                "{}/repos/{}/{}",
                self.api_url,
                self.username,
                encode(name)
            );
            let response = self.headers(self.client.get(&url)).send().await.map_err(|e| {
                MigrateError::new_with_source(MigrateErrorKind::RepoExists, e)
                    .with_platform(PlatformType::Github)
            })?;
            match response.status() {
                StatusCode::OK => {
                    match response.json::<RepoGithub>().await {
                        Ok(repo) => debug!(
                            "{} is at {} (private: {})",
                            repo.name, repo.html_url, repo.private
                        ),
                        Err(e) => debug!("Unreadable repository details for '{name}': {e}"),
                    }
                    info!("GitHub repository '{name}' already exists.");
                    Ok(true)
                }
                StatusCode::NOT_FOUND => {
                    info!("GitHub repository '{name}' does not exist, creating it.");
                    Ok(false)
                }
                status => {
                    let text = response.text().await.unwrap_or_default();
                    error!("Error checking GitHub repository ({status}): {text}");
                    Ok(false)
                }
            }
        })
    }

    fn create_repo<'a>(
        &'a self,
        repo: &'a NewRepo,
    ) -> PlatformFuture<'a, Result<(), MigrateError>> {
        Box::pin(async move {
            let url = format!("{}/user/repos", self.api_url);
            let response = self.headers(self.client.post(&url)).json(repo).send().await?;
            if response.status() != StatusCode::CREATED {
                let text = response.text().await?;
                return Err(MigrateError::new(MigrateErrorKind::RepoCreation)
                    .with_platform(PlatformType::Github)
                    .with_text(&text));
            }
            Ok(())
        })
    }

    fn push_url(&self, name: &str) -> Result<String, MigrateError> {
        let mut url = Url::parse(&format!(
            "https://{}/{}/{}.git",
            self.host, self.username, name
        ))?;
        if !self.token.is_empty() && url.set_username(&self.token).is_err() {
            return Err(MigrateError::new(MigrateErrorKind::InvalidUrl)
                .with_platform(PlatformType::Github)
                .with_text(&format!("{url} can't carry credentials")));
        }
        Ok(url.to_string())
    }

    fn owner(&self) -> &str {
        &self.username
    }

    fn get_type(&self) -> PlatformType {
        PlatformType::Github
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn platform(server: &MockServer) -> GithubPlatform {
        GithubPlatform::new("octo".to_string(), "ghp_token".to_string())
            .with_api_url(&server.uri())
    }

    #[tokio::test]
    async fn existing_repo() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/proj"))
            .and(header("authorization", "Bearer ghp_token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "proj",
                "private": true,
                "html_url": "https://github.com/octo/proj"
            })))
            .expect(1)
            .mount(&server)
            .await;
        assert!(platform(&server).repo_exists("proj").await.unwrap());
    }

    #[tokio::test]
    async fn missing_repo() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/proj"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&server)
            .await;
        assert!(!platform(&server).repo_exists("proj").await.unwrap());
    }

    #[tokio::test]
    async fn unexpected_status_counts_as_missing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/octo/proj"))
            .respond_with(ResponseTemplate::new(403).set_body_string("rate limited"))
            .mount(&server)
            .await;
        assert!(!platform(&server).repo_exists("proj").await.unwrap());
    }

    #[tokio::test]
    async fn create_sends_name_visibility_and_description() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .and(body_json(json!({
                "name": "proj",
                "private": false,
                "description": "Migrated from GitLab: proj"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&server)
            .await;
        let repo = NewRepo::migrated("proj", crate::platform::Visibility::Public);
        platform(&server).create_repo(&repo).await.unwrap();
    }

    #[tokio::test]
    async fn create_failure_carries_the_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/user/repos"))
            .respond_with(ResponseTemplate::new(422).set_body_string("name already exists"))
            .mount(&server)
            .await;
        let repo = NewRepo::migrated("proj", crate::platform::Visibility::Private);
        let err = platform(&server).create_repo(&repo).await.unwrap_err();
        assert_eq!(*err.kind(), MigrateErrorKind::RepoCreation);
        assert!(err.to_string().contains("name already exists"));
    }

    #[test]
    fn push_url_embeds_the_token() {
        let github = GithubPlatform::new("octo".to_string(), "ghp_token".to_string());
        assert_eq!(
            github.push_url("proj").unwrap(),
            "https://ghp_token@github.com/octo/proj.git"
        );
        let anonymous = GithubPlatform::new("octo".to_string(), String::new())
            .with_host("github.example.com");
        assert_eq!(
            anonymous.push_url("proj").unwrap(),
            "https://github.example.com/octo/proj.git"
        );
    }
}
