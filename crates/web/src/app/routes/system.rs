use axum::http::{header, StatusCode};
use axum::response::IntoResponse;

const STYLESHEET: &str = include_str!("../../../assets/style.css");

pub async fn health() -> StatusCode {
    StatusCode::OK
}

pub async fn stylesheet() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], STYLESHEET)
}
