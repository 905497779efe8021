use crate::article::Article;
use crate::config::Config;
use thiserror::Error;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to articles API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("articles API returned {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to parse articles response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Client for the articles endpoint.
#[derive(Debug, Clone)]
pub struct ArticleFetcher {
    client: reqwest::Client,
    endpoint: String,
}

impl ArticleFetcher {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(config.articles_api_url.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint and parse the body as a JSON array of articles.
    pub async fn try_fetch(&self) -> Result<Vec<Article>, FetchError> {
        let response = self.client.get(&self.endpoint).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let body = response.text().await?;
        let articles: Vec<Article> = serde_json::from_str(&body)?;
        Ok(articles)
    }

    /// Fetch articles, logging any failure and returning an empty list instead.
    pub async fn fetch_articles(&self) -> Vec<Article> {
        match self.try_fetch().await {
            Ok(articles) => {
                info!("Fetched {} articles from {}", articles.len(), self.endpoint);
                articles
            }
            Err(e) => {
                error!("Failed to fetch articles from {}: {}", self.endpoint, e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn fetcher_for(mock_server: &MockServer) -> ArticleFetcher {
        ArticleFetcher::new(format!("{}/api/articles", mock_server.uri()))
    }

    // ==================== Success Tests ====================

    #[tokio::test]
    async fn test_fetch_articles_success() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!([
            {"headline": "First", "sdg16_score": 0.4},
            {"headline": "Second", "summary_hi": "दूसरा"}
        ]);

        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&mock_server)
            .await;

        let articles = fetcher_for(&mock_server).fetch_articles().await;

        assert_eq!(articles.len(), 2);
        assert_eq!(articles[0].headline.as_deref(), Some("First"));
        assert_eq!(articles[0].sdg16_score, Some(0.4));
        assert_eq!(articles[1].summary_hi.as_deref(), Some("दूसरा"));
    }

    #[tokio::test]
    async fn test_fetch_articles_empty_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        assert!(fetcher.try_fetch().await.unwrap().is_empty());
    }

    // ==================== Failure Tests ====================

    #[tokio::test]
    async fn test_try_fetch_non_ok_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        let err = fetcher.try_fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 500));

        assert!(fetcher.fetch_articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_try_fetch_not_found() {
        let mock_server = MockServer::start().await;

        let fetcher = fetcher_for(&mock_server);
        let err = fetcher.try_fetch().await.unwrap_err();
        assert!(matches!(err, FetchError::Status(status) if status.as_u16() == 404));
    }

    #[tokio::test]
    async fn test_try_fetch_malformed_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        assert!(matches!(fetcher.try_fetch().await, Err(FetchError::Parse(_))));
        assert!(fetcher.fetch_articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_try_fetch_object_instead_of_array() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"headline": "x"})),
            )
            .mount(&mock_server)
            .await;

        let fetcher = fetcher_for(&mock_server);
        assert!(matches!(fetcher.try_fetch().await, Err(FetchError::Parse(_))));
    }

    #[tokio::test]
    async fn test_one_bad_record_fails_the_whole_list() {
        let mock_server = MockServer::start().await;

        let body = serde_json::json!([{"headline": "ok"}, {"headline": 42}]);
        Mock::given(method("GET"))
            .and(path("/api/articles"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&mock_server)
            .await;

        assert!(fetcher_for(&mock_server).fetch_articles().await.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_articles_network_error() {
        // Nothing listens on port 1
        let fetcher = ArticleFetcher::new("http://127.0.0.1:1/api/articles");

        assert!(matches!(fetcher.try_fetch().await, Err(FetchError::Request(_))));
        assert!(fetcher.fetch_articles().await.is_empty());
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_from_config_uses_api_url() {
        let config = Config {
            articles_api_url: "http://news.example.com/api/articles".to_string(),
            feed_output: None,
            show_hindi: false,
        };

        let fetcher = ArticleFetcher::from_config(&config);
        assert_eq!(fetcher.endpoint(), "http://news.example.com/api/articles");
    }
}
