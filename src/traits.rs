use async_trait::async_trait;

use crate::cinema::Movie;
use crate::error::ScraperError;

#[async_trait]
pub trait Scraper: Send + Sync {
    /// 一覧ページのHTML本文を取得
    async fn fetch(&self) -> Result<String, ScraperError>;

    /// HTML本文からレコード列を抽出
    fn extract(&self, html: &str) -> Vec<Movie>;

    /// 一括実行（fetch → extract）
    async fn execute(&self) -> Result<Vec<Movie>, ScraperError> {
        let html = self.fetch().await?;
        Ok(self.extract(&html))
    }
}
