use axum::{http::header, response::Html, response::IntoResponse, routing::get, Router};

use super::AppState;

const INDEX_HTML: &str = include_str!("../../static/index.html");
const MAIN_JS: &str = include_str!("../../static/js/main.js");

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/static/js/main.js", get(main_js))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

async fn main_js() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "application/javascript; charset=utf-8")],
        MAIN_JS,
    )
}
