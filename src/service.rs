use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};
use std::time::Duration;

use tower::Service;
use tracing::info;

use crate::cinema::{CinemaScraper, Movie};
use crate::config::CinemaConfig;
use crate::error::ScraperError;
use crate::traits::Scraper;

/// スクレイピングリクエスト
#[derive(Debug, Clone)]
pub struct ScrapeRequest {
    pub source_url: String,
    pub timeout: Duration,
}

impl ScrapeRequest {
    pub fn new(source_url: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            timeout: Duration::from_secs(60),
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl From<ScrapeRequest> for CinemaConfig {
    fn from(req: ScrapeRequest) -> Self {
        CinemaConfig::new(req.source_url).with_timeout(req.timeout)
    }
}

/// スクレイピング結果
#[derive(Debug)]
pub struct ScrapeResult {
    pub movies: Vec<Movie>,
}

/// tower::Serviceを実装したスクレイパーサービス
#[derive(Debug, Clone, Default)]
pub struct ScraperService {
    // 将来的な拡張用（レートリミット、キャッシュなど）
}

impl ScraperService {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Service<ScrapeRequest> for ScraperService {
    type Response = ScrapeResult;
    type Error = ScraperError;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: ScrapeRequest) -> Self::Future {
        info!("スクレイピングリクエスト受信: source_url={}", req.source_url);

        Box::pin(async move {
            let config: CinemaConfig = req.into();
            let scraper = CinemaScraper::new(config);

            // スクレイピング実行
            let movies = scraper.execute().await?;

            info!("スクレイピング完了: {}件", movies.len());

            Ok(ScrapeResult { movies })
        })
    }
}
