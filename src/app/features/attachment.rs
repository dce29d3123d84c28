//! File download responses.

use axum::{
    http::{
        header::{HeaderValue, CONTENT_DISPOSITION, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};
use time::{macros::format_description, OffsetDateTime};

use crate::app::error::AppError;

pub const CSV_CONTENT_TYPE: &str = "text/csv; charset=utf-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Keep filename-safe characters only.
pub fn sanitize_filename_part(value: &str) -> String {
    value
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .take(64)
        .collect()
}

/// `{stem}-{part}-{YYYYMMDD}.{extension}` with `part` sanitized and today's UTC date.
pub fn dated_filename(stem: &str, part: &str, extension: &str) -> Result<String, AppError> {
    let date = OffsetDateTime::now_utc()
        .format(format_description!("[year][month][day]"))
        .map_err(|_| AppError::Internal)?;
    Ok(format!("{}-{}-{}.{}", stem, sanitize_filename_part(part), date, extension))
}

pub fn attachment(body: String, content_type: &'static str, filename: &str) -> Response {
    let disposition = format!(r#"attachment; filename="{}""#, filename);
    let disposition_value = HeaderValue::try_from(disposition)
        .unwrap_or_else(|_| HeaderValue::from_static("attachment"));

    let mut headers = axum::http::HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    headers.insert(CONTENT_DISPOSITION, disposition_value);

    (StatusCode::OK, headers, body).into_response()
}
