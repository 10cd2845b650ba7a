//! シネマ上映情報スクレイパーサービス
//!
//! - 上映情報ページを取得してレコード列を抽出
//! - 抽出結果をJSON APIとHTMLページとして配信
//!
//! # スクレイパー使用例
//!
//! ```rust,ignore
//! use cinema_scraper_service::{CinemaConfig, CinemaScraper, Scraper};
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = CinemaConfig::new("https://silverbirdcinemas.com/cinema/accra/");
//!     let scraper = CinemaScraper::new(config);
//!
//!     let movies = scraper.execute().await.unwrap();
//!     println!("Movies: {}", movies.len());
//! }
//! ```
//!
//! # サービス使用例
//!
//! ```rust,ignore
//! use cinema_scraper_service::{ScrapeRequest, ScraperService};
//! use tower::Service;
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut service = ScraperService::new();
//!
//!     let request = ScrapeRequest::new("https://silverbirdcinemas.com/cinema/accra/");
//!     let result = service.call(request).await.unwrap();
//!     println!("Movies: {}", result.movies.len());
//! }
//! ```

pub mod cinema;
pub mod config;
pub mod error;
pub mod service;
pub mod traits;
pub mod web;

// 主要な型をリエクスポート
pub use config::{CinemaConfig, DEFAULT_SOURCE_URL};
pub use error::ScraperError;
pub use service::{ScrapeRequest, ScrapeResult, ScraperService};
pub use traits::Scraper;

// シネマ関連の型もリエクスポート
pub use cinema::{extract_movies, find_by_id, CinemaScraper, Movie, MovieDetails};
