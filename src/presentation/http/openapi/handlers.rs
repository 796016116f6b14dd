use axum::{
    body::Body,
    http::{HeaderMap, StatusCode, header, response::Builder},
    response::{IntoResponse, Response},
};

fn with_validators(builder: Builder) -> Builder {
    builder
        .header(header::ETAG, super::openapi_etag())
        .header(header::LAST_MODIFIED, super::openapi_meta::last_modified_str())
}

fn finish(builder: Builder, body: Body) -> Response {
    builder
        .body(body)
        .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
}

fn not_modified_response() -> Response {
    let builder = with_validators(Response::builder().status(StatusCode::NOT_MODIFIED));
    finish(builder, Body::empty())
}

fn ok_response(body: Body) -> Response {
    let builder = with_validators(Response::builder().status(StatusCode::OK))
        .header(header::CONTENT_TYPE, super::OPENAPI_CONTENT_TYPE_JSON)
        .header(header::CONTENT_LENGTH, super::openapi_content_length_str());
    finish(builder, body)
}

/// GET /openapi.json
///
/// `If-None-Match` takes precedence over `If-Modified-Since`.
pub async fn serve_openapi(headers: HeaderMap) -> Response {
    if should_return_not_modified(&headers) {
        return not_modified_response();
    }

    ok_response(Body::from(super::openapi_bytes().clone()))
}

/// HEAD /openapi.json. Same validators as GET, empty body.
pub async fn head_openapi(headers: HeaderMap) -> Response {
    if should_return_not_modified(&headers) {
        return not_modified_response();
    }

    ok_response(Body::empty())
}

fn should_return_not_modified(headers: &HeaderMap) -> bool {
    if headers.contains_key(header::IF_NONE_MATCH) {
        super::openapi_meta::inm_matches(headers, super::openapi_etag())
    } else {
        super::openapi_meta::ims_matches(headers)
    }
}
