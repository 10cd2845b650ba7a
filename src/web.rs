//! HTTP配信レイヤー
//!
//! 同じレコード列をJSON APIとHTMLページの両方で提供する。
//! レコードが必要なリクエストはハンドラ内で毎回fetch→extractを
//! 実行し、結果をリクエスト間で保持しない。

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use tera::Tera;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::cinema::{find_by_id, Movie};
use crate::config::CinemaConfig;
use crate::error::ScraperError;
use crate::traits::Scraper;

/// 共有状態。テンプレート一式はプロセス起動時に一度だけロードする
#[derive(Clone)]
pub struct AppState {
    pub config: CinemaConfig,
    pub scraper: Arc<dyn Scraper>,
    pub templates: Arc<Tera>,
}

pub fn build_router(state: AppState) -> Router {
    let assets_dir = state.config.assets_dir.clone();

    Router::new()
        .route("/api/v1/movies", get(list_movies_json))
        .route("/api/v1/movies/{id}", get(get_movie_json))
        .route("/movies", get(list_movies_html))
        .route("/movies/{id}", get(get_movie_html))
        .route("/health", get(health))
        .nest_service("/assets", ServeDir::new(assets_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}

async fn list_movies_json(
    State(state): State<AppState>,
) -> Result<Json<Vec<Movie>>, ScraperError> {
    let movies = state.scraper.execute().await?;
    Ok(Json(movies))
}

async fn get_movie_json(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Movie>, ScraperError> {
    let movies = state.scraper.execute().await?;
    let movie = find_by_id(&movies, id)
        .cloned()
        .ok_or(ScraperError::NotFound(id))?;
    Ok(Json(movie))
}

async fn list_movies_html(
    State(state): State<AppState>,
) -> Result<Html<String>, ScraperError> {
    let movies = state.scraper.execute().await?;

    let mut ctx = tera::Context::new();
    ctx.insert("movies", &movies);
    let body = state.templates.render("index.html", &ctx)?;

    Ok(Html(body))
}

async fn get_movie_html(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Html<String>, ScraperError> {
    let movies = state.scraper.execute().await?;
    let movie = find_by_id(&movies, id).ok_or(ScraperError::NotFound(id))?;

    let mut ctx = tera::Context::new();
    ctx.insert("movie", movie);
    let body = state.templates.render("details.html", &ctx)?;

    Ok(Html(body))
}

impl IntoResponse for ScraperError {
    fn into_response(self) -> Response {
        let status = match &self {
            ScraperError::NotFound(_) => StatusCode::NOT_FOUND,
            // 上流取得の失敗はこのリクエストにとって終端（リトライしない）
            ScraperError::Http(_) | ScraperError::Status(_) | ScraperError::Parse(_) => {
                StatusCode::BAD_GATEWAY
            }
            ScraperError::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        warn!("リクエスト失敗: {}", self);

        let body = Json(serde_json::json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}
