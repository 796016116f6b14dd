use axum::http::{HeaderMap, header};
use std::sync::OnceLock;
use std::time::SystemTime;

// process start, used when BUILD_DATE is not baked in
static STARTUP_DATE: OnceLock<String> = OnceLock::new();

/// Last-Modified value the server sends for the OpenAPI document.
pub fn last_modified_str() -> &'static str {
    match option_env!("BUILD_DATE") {
        Some(value) => value,
        None => STARTUP_DATE
            .get_or_init(|| httpdate::fmt_http_date(SystemTime::now()))
            .as_str(),
    }
}

/// Opaque value of an entity tag: weak prefix and quotes removed.
fn opaque_value(token: &str) -> &str {
    let token = token.trim();
    let token = token
        .strip_prefix("W/")
        .or_else(|| token.strip_prefix("w/"))
        .unwrap_or(token);
    token
        .strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(token)
}

/// Weak comparison of two entity tags.
pub fn weak_match(a: &str, b: &str) -> bool {
    opaque_value(a) == opaque_value(b)
}

/// Whether `If-None-Match` contains `*` or a tag weakly matching `actual`.
pub fn inm_matches(headers: &HeaderMap, actual: &str) -> bool {
    let Some(value) = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let value = value.trim();
    value == "*" || value.split(',').any(|candidate| weak_match(candidate, actual))
}

/// Whether `If-Modified-Since` is at or after our Last-Modified.
pub fn ims_matches(headers: &HeaderMap) -> bool {
    let Some(since) = headers
        .get(header::IF_MODIFIED_SINCE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| httpdate::parse_http_date(v).ok())
    else {
        return false;
    };

    httpdate::parse_http_date(last_modified_str())
        .map(|modified| since >= modified)
        .unwrap_or(false)
}
