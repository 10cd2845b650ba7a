//! シネマ上映情報の型定義

use serde::{Deserialize, Serialize};

/// 上映エントリ1件分のレコード
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    /// 抽出パス内の通し番号（1始まり、文書順）
    pub id: i32,
    /// タイトル
    pub title: String,
    /// 上映日表示（ページの表記そのまま）
    pub duration: String,
    /// 説明ブロックの詳細フィールド
    pub details: MovieDetails,
    /// noteリンク側のジャンル（details.genreとは別ソース、両方保持する）
    pub genre: String,
    /// 上映時刻表示
    pub showtime: String,
    /// 評価表示
    pub votes: String,
}

/// 説明ブロックのラベル付きフィールド（ラベル除去済み）
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    pub release_date: String,
    pub genre: String,
    pub language: String,
}

/// レコード列から指定IDの最初のレコードを検索する。
///
/// IDは抽出パスごとに振り直されるため、別パスの列に対しては
/// 同じIDでも別のレコードを指しうる。呼び出し側はIDを
/// 1レスポンスサイクル内でのみ有効な値として扱うこと。
pub fn find_by_id(movies: &[Movie], id: i32) -> Option<&Movie> {
    movies.iter().find(|m| m.id == id)
}
