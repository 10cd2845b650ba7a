//! シネマ上映情報スクレイパー実装
//!
//! 一覧ページを1回のGETで取得し、CSSセレクタでエントリごとの
//! レコードを組み立てる

use async_trait::async_trait;
use scraper::{ElementRef, Html, Selector};
use tracing::{debug, info};

use crate::config::CinemaConfig;
use crate::error::ScraperError;
use crate::traits::Scraper;

use super::types::{Movie, MovieDetails};

/// 一覧エントリのコンテナ
const ENTRY_SELECTOR: &str = "#cinema-m .entry-item";

/// エントリ内の各フィールド
const TITLE_SELECTOR: &str = ".entry-title a";
const DATE_SELECTOR: &str = ".entry-date";
const RELEASE_SELECTOR: &str = ".desc-mv div:nth-child(1)";
const DETAIL_GENRE_SELECTOR: &str = ".desc-mv div.note";
const LANGUAGE_SELECTOR: &str = ".desc-mv div:nth-child(3)";
const GENRE_LINK_SELECTOR: &str = ".note a";
const SHOWTIME_SELECTOR: &str = ".cinema_page_showtime strong";
const VOTES_SELECTOR: &str = ".entry-rating .rate";

/// 説明ブロックのラベル文字列
const RELEASE_LABEL: &str = "Release:";
const GENRE_LABEL: &str = "Genre:";
const LANGUAGE_LABEL: &str = "Language:";

/// シネマ上映情報スクレイパー
pub struct CinemaScraper {
    config: CinemaConfig,
    client: reqwest::Client,
}

impl CinemaScraper {
    /// 新しいスクレイパーを作成
    pub fn new(config: CinemaConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl Scraper for CinemaScraper {
    async fn fetch(&self) -> Result<String, ScraperError> {
        info!("一覧ページを取得中: {}", self.config.source_url);

        let res = self
            .client
            .get(&self.config.source_url)
            .timeout(self.config.timeout)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(ScraperError::Status(status.as_u16()));
        }

        let body = res
            .text()
            .await
            .map_err(|e| ScraperError::Parse(e.to_string()))?;
        debug!("取得完了: {} bytes", body.len());

        Ok(body)
    }

    fn extract(&self, html: &str) -> Vec<Movie> {
        let movies = extract_movies(html);
        info!("{}件のレコードを抽出", movies.len());
        movies
    }
}

/// 一覧HTMLからレコード列を抽出する。
///
/// エントリは文書順に走査し、位置からIDを採番する。
/// サブ要素が欠けているフィールドは空文字列になる（エラーにしない）。
pub fn extract_movies(html: &str) -> Vec<Movie> {
    let document = Html::parse_document(html);

    let entry_sel = selector(ENTRY_SELECTOR);
    let title_sel = selector(TITLE_SELECTOR);
    let date_sel = selector(DATE_SELECTOR);
    let release_sel = selector(RELEASE_SELECTOR);
    let detail_genre_sel = selector(DETAIL_GENRE_SELECTOR);
    let language_sel = selector(LANGUAGE_SELECTOR);
    let genre_link_sel = selector(GENRE_LINK_SELECTOR);
    let showtime_sel = selector(SHOWTIME_SELECTOR);
    let votes_sel = selector(VOTES_SELECTOR);

    document
        .select(&entry_sel)
        .enumerate()
        .map(|(i, entry)| Movie {
            id: (i + 1) as i32,
            title: select_text(&entry, &title_sel),
            duration: select_text(&entry, &date_sel),
            details: MovieDetails {
                release_date: strip_label(&select_text(&entry, &release_sel), RELEASE_LABEL),
                genre: strip_label(&select_text(&entry, &detail_genre_sel), GENRE_LABEL),
                language: strip_label(&select_text(&entry, &language_sel), LANGUAGE_LABEL),
            },
            genre: select_text(&entry, &genre_link_sel),
            showtime: select_text(&entry, &showtime_sel),
            votes: select_text(&entry, &votes_sel),
        })
        .collect()
}

/// 最初にマッチしたサブ要素の子孫テキストを連結して返す（なければ空文字列）
fn select_text(entry: &ElementRef, sel: &Selector) -> String {
    entry
        .select(sel)
        .next()
        .map(|el| el.text().collect::<String>())
        .unwrap_or_default()
}

/// ラベル文字列を除去する。前置に限らず出現箇所すべてを対象とし、
/// それ以外のテキストと空白には手を付けない。
fn strip_label(text: &str, label: &str) -> String {
    text.replace(label, "")
}

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid selector")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cinema::find_by_id;

    const SINGLE_ENTRY_HTML: &str = r##"
        <html><body>
        <div id="cinema-m">
          <div class="entry-item">
            <h2 class="entry-title"><a href="/movie/dune-part-two/">Dune: Part Two</a></h2>
            <div class="entry-date">12 Mar</div>
            <div class="desc-mv">
              <div>Release:2024</div>
              <div class="note">Genre:<a href="#">Sci-Fi</a></div>
              <div>Language:English</div>
            </div>
            <div class="cinema_page_showtime"><strong>7:00 PM</strong></div>
            <div class="entry-rating"><span class="rate">8.5</span></div>
          </div>
        </div>
        </body></html>
    "##;

    const TWO_ENTRY_HTML: &str = r##"
        <html><body>
        <div id="cinema-m">
          <div class="entry-item">
            <h2 class="entry-title"><a href="#">Dune: Part Two</a></h2>
            <div class="entry-date">12 Mar</div>
            <div class="desc-mv">
              <div>Release:2024</div>
              <div class="note">Genre:<a href="#">Sci-Fi</a></div>
              <div>Language:English</div>
            </div>
            <div class="cinema_page_showtime"><strong>7:00 PM</strong></div>
            <div class="entry-rating"><span class="rate">8.5</span></div>
          </div>
          <div class="entry-item">
            <h2 class="entry-title"><a href="#">Oppenheimer</a></h2>
            <div class="entry-date">15 Mar</div>
            <div class="desc-mv">
              <div>Release:2023</div>
              <div class="note">Genre:<a href="#">Drama</a></div>
              <div>Language:English</div>
            </div>
            <div class="cinema_page_showtime"><strong>9:30 PM</strong></div>
            <div class="entry-rating"><span class="rate">9.0</span></div>
          </div>
        </div>
        </body></html>
    "##;

    #[test]
    fn test_extract_single_entry() {
        let movies = extract_movies(SINGLE_ENTRY_HTML);
        assert_eq!(movies.len(), 1);

        let movie = &movies[0];
        assert_eq!(movie.id, 1);
        assert_eq!(movie.title, "Dune: Part Two");
        assert_eq!(movie.duration, "12 Mar");
        assert_eq!(movie.details.release_date, "2024");
        assert_eq!(movie.details.genre, "Sci-Fi");
        assert_eq!(movie.details.language, "English");
        assert_eq!(movie.genre, "Sci-Fi");
        assert_eq!(movie.showtime, "7:00 PM");
        assert_eq!(movie.votes, "8.5");
    }

    #[test]
    fn test_extract_assigns_sequential_ids() {
        let movies = extract_movies(TWO_ENTRY_HTML);
        assert_eq!(movies.len(), 2);
        assert_eq!(
            movies.iter().map(|m| m.id).collect::<Vec<_>>(),
            vec![1, 2]
        );
        assert_eq!(movies[0].title, "Dune: Part Two");
        assert_eq!(movies[1].title, "Oppenheimer");
    }

    #[test]
    fn test_extract_empty_document() {
        let movies = extract_movies("<html><body><p>no listings</p></body></html>");
        assert!(movies.is_empty());
    }

    #[test]
    fn test_extract_missing_fields_default_empty() {
        let html = r##"
            <div id="cinema-m">
              <div class="entry-item">
                <h2 class="entry-title"><a href="#">Barebones</a></h2>
              </div>
            </div>
        "##;
        let movies = extract_movies(html);
        assert_eq!(movies.len(), 1);

        let movie = &movies[0];
        assert_eq!(movie.title, "Barebones");
        assert_eq!(movie.duration, "");
        assert_eq!(movie.details, MovieDetails::default());
        assert_eq!(movie.genre, "");
        assert_eq!(movie.showtime, "");
        assert_eq!(movie.votes, "");
    }

    #[test]
    fn test_extract_is_deterministic() {
        let first = extract_movies(TWO_ENTRY_HTML);
        let second = extract_movies(TWO_ENTRY_HTML);
        assert_eq!(first, second);
    }

    #[test]
    fn test_strip_label_removes_all_occurrences() {
        assert_eq!(strip_label("Genre:Action", "Genre:"), "Action");
        assert_eq!(strip_label("Genre:Action Genre:Drama", "Genre:"), "Action Drama");
        // ラベルの前後の空白はそのまま残る
        assert_eq!(strip_label("Release: 2024", "Release:"), " 2024");
    }

    #[test]
    fn test_strip_label_is_idempotent() {
        let once = strip_label("Genre:Sci-Fi", "Genre:");
        let twice = strip_label(&once, "Genre:");
        assert_eq!(once, twice);

        // ラベルを含まないフィールドは変化しない
        assert_eq!(strip_label("Sci-Fi", "Genre:"), "Sci-Fi");
    }

    #[test]
    fn test_find_by_id_within_pass() {
        let movies = extract_movies(TWO_ENTRY_HTML);
        assert_eq!(find_by_id(&movies, 1).unwrap().title, "Dune: Part Two");
        assert_eq!(find_by_id(&movies, 2).unwrap().title, "Oppenheimer");
        assert!(find_by_id(&movies, 0).is_none());
        assert!(find_by_id(&movies, 3).is_none());
    }

    #[test]
    fn test_find_by_id_out_of_range_single_entry() {
        let movies = extract_movies(SINGLE_ENTRY_HTML);
        assert!(find_by_id(&movies, 2).is_none());
    }
}
