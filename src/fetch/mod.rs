use std::{future::Future, time::Duration};

use reqwest::Client;
use tracing::{instrument, Level};

use crate::error::{Error, Result};

/// Where the menu page comes from. Production talks HTTP; tests hand back canned pages.
pub trait MenuSource: Send + Sync {
    /// Public address of the full menu, linked at the bottom of every reply.
    fn url(&self) -> &str;

    fn menu_page(&self) -> impl Future<Output = Result<String>> + Send;
}

pub fn make_client(timeout: Duration) -> Result<Client> {
    Client::builder()
        .gzip(true)
        .timeout(timeout)
        .build()
        .map_err(Error::from)
}

#[derive(Debug, Clone)]
pub struct HttpMenuSource {
    client: Client,
    url: String,
}

impl HttpMenuSource {
    pub const fn new(client: Client, url: String) -> Self {
        Self { client, url }
    }
}

impl MenuSource for HttpMenuSource {
    fn url(&self) -> &str {
        &self.url
    }

    #[instrument(skip(self), fields(url = %self.url), level = Level::DEBUG)]
    async fn menu_page(&self) -> Result<String> {
        let start = std::time::Instant::now();
        let response = self.client.get(&self.url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status.as_u16()));
        }
        let text = response.text().await?;
        log::debug!("Got text of menu page in \t {:?}", start.elapsed());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    async fn serve(app: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    fn source(url: String) -> HttpMenuSource {
        HttpMenuSource::new(make_client(Duration::from_secs(5)).unwrap(), url)
    }

    #[tokio::test]
    async fn test_fetch_menu_page() {
        let app = Router::new().route("/menu", get(|| async { "<h1>Monday</h1>" }));
        let base = serve(app).await;
        let page = source(format!("{base}/menu")).menu_page().await.unwrap();
        assert_eq!(page, "<h1>Monday</h1>");
    }

    #[tokio::test]
    async fn test_non_success_status() {
        let app = Router::new().route(
            "/menu",
            get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down for maintenance") }),
        );
        let base = serve(app).await;
        let err = source(format!("{base}/menu")).menu_page().await.unwrap_err();
        assert!(matches!(err, Error::Status(503)), "{err}");
    }

    #[tokio::test]
    async fn test_unreachable() {
        // grab a free port, then close it so nothing is listening there
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let err = source(format!("http://{addr}/menu"))
            .menu_page()
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Request(_)), "{err}");
    }
}
