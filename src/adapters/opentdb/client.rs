//! Implements QuestionProvider against the Open Trivia DB `api.php` endpoint.
//!
//! One GET per question: `amount=1&category=<id>&difficulty=<d>&type=multiple`.
//! Transport, status and decode failures map to `DomainError::Provider`.

use crate::adapters::opentdb::mapper;
use crate::domain::{DomainError, ProviderQuestion, QuestionQuery};
use crate::ports::QuestionProvider;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

/// Open Trivia DB HTTP adapter.
pub struct OpenTdbProvider {
    client: Client,
    api_url: String,
}

impl OpenTdbProvider {
    /// Create a provider for `api_url` (e.g. "https://opentdb.com/api.php").
    ///
    /// `timeout`: `None` keeps the transport default (no request timeout).
    pub fn new(api_url: String, timeout: Option<Duration>) -> Result<Self, DomainError> {
        let mut builder = Client::builder();
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }
        let client = builder
            .build()
            .map_err(|e| DomainError::Provider(format!("build HTTP client: {}", e)))?;
        Ok(Self { client, api_url })
    }

    fn query_params(query: &QuestionQuery) -> [(&'static str, String); 4] {
        [
            ("amount", query.amount.to_string()),
            ("category", query.category.id().to_string()),
            ("difficulty", query.difficulty.as_str().to_string()),
            ("type", query.kind.as_str().to_string()),
        ]
    }
}

#[async_trait]
impl QuestionProvider for OpenTdbProvider {
    async fn fetch_question(&self, query: &QuestionQuery) -> Result<ProviderQuestion, DomainError> {
        let params = Self::query_params(query);
        debug!(url = %self.api_url, ?params, "GET question");

        let response = self
            .client
            .get(&self.api_url)
            .query(&params[..])
            .send()
            .await
            .map_err(|e| DomainError::Provider(format!("HTTP request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %text, "trivia API returned error");
            return Err(DomainError::Provider(format!(
                "API error {}: {}",
                status,
                text.chars().take(200).collect::<String>()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| DomainError::Provider(format!("read response body: {}", e)))?;
        let question = mapper::question_from_body(&body)?;
        debug!(
            category = %question.category_label,
            incorrect = question.incorrect_answers.len(),
            "question decoded"
        );
        Ok(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, Difficulty};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    /// Serve one canned HTTP response; the handle yields the raw request text.
    async fn serve_once(status_line: &'static str, body: String) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = vec![0u8; 8192];
            let n = socket.read(&mut buf).await.unwrap();
            let request = String::from_utf8_lossy(&buf[..n]).to_string();
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            request
        });
        (format!("http://{}/api.php", addr), handle)
    }

    #[test]
    fn test_query_params() {
        let q = QuestionQuery::single(Category::History, Difficulty::Medium);
        let params = OpenTdbProvider::query_params(&q);
        assert_eq!(
            params,
            [
                ("amount", "1".to_string()),
                ("category", "23".to_string()),
                ("difficulty", "medium".to_string()),
                ("type", "multiple".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_fetch_question_success() {
        let body = r#"{"response_code":0,"results":[{"type":"multiple","difficulty":"easy","category":"General Knowledge","question":"2+2=?","correct_answer":"4","incorrect_answers":["3","5","6"]}]}"#;
        let (url, server) = serve_once("200 OK", body.to_string()).await;
        let provider = OpenTdbProvider::new(url, Some(Duration::from_secs(5))).unwrap();

        let q = provider
            .fetch_question(&QuestionQuery::single(
                Category::GeneralKnowledge,
                Difficulty::Easy,
            ))
            .await
            .unwrap();
        assert_eq!(q.text, "2+2=?");
        assert_eq!(q.correct_answer, "4");
        assert_eq!(q.incorrect_answers, vec!["3", "5", "6"]);

        let request = server.await.unwrap();
        let request_line = request.lines().next().unwrap_or_default();
        assert!(request_line.starts_with("GET /api.php?"));
        assert!(request_line.contains("amount=1"));
        assert!(request_line.contains("category=9"));
        assert!(request_line.contains("difficulty=easy"));
        assert!(request_line.contains("type=multiple"));
    }

    #[tokio::test]
    async fn test_fetch_question_http_error() {
        let (url, server) = serve_once("503 Service Unavailable", "down".to_string()).await;
        let provider = OpenTdbProvider::new(url, Some(Duration::from_secs(5))).unwrap();
        let err = provider
            .fetch_question(&QuestionQuery::single(Category::Sports, Difficulty::Hard))
            .await
            .unwrap_err();
        match err {
            DomainError::Provider(msg) => assert!(msg.contains("503")),
            other => panic!("unexpected error: {other:?}"),
        }
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_fetch_question_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let provider =
            OpenTdbProvider::new(format!("http://{}/api.php", addr), Some(Duration::from_secs(5)))
                .unwrap();
        let err = provider
            .fetch_question(&QuestionQuery::single(Category::Sports, Difficulty::Easy))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Provider(_)));
    }
}
