use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScraperError {
    #[error("HTTPリクエストエラー: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTPステータスエラー: {0}")]
    Status(u16),

    #[error("ドキュメント読み取りエラー: {0}")]
    Parse(String),

    #[error("テンプレート描画エラー: {0}")]
    Template(#[from] tera::Error),

    #[error("レコードが見つかりません: id={0}")]
    NotFound(i32),
}
