// src/presentation/http/openapi.rs
use crate::application::{dto::AccountDto, error::FieldViolation};
use crate::presentation::http::controllers::accounts::{
    LoginRequest, MessageResponse, RegisterAccountRequest, UpdateAccountRequest,
};
use crate::presentation::http::error::ErrorResponse;
use axum::{Router, response::Redirect, routing::get};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufWriter, path::Path, sync::OnceLock};
use utoipa::{OpenApi, ToSchema};
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

mod handlers;
mod openapi_meta;

pub use handlers::{head_openapi, serve_openapi};
pub use openapi_meta::{inm_matches, weak_match};

pub(crate) const OPENAPI_CONTENT_TYPE_JSON: &str = "application/json";

static OPENAPI_BYTES: OnceLock<Bytes> = OnceLock::new();
static OPENAPI_ETAG: OnceLock<String> = OnceLock::new();
static OPENAPI_CONTENT_LENGTH: OnceLock<String> = OnceLock::new();

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::presentation::http::controllers::accounts::register,
        crate::presentation::http::controllers::accounts::login,
        crate::presentation::http::controllers::accounts::update_account,
        crate::presentation::http::controllers::accounts::list_accounts,
        crate::presentation::http::controllers::accounts::get_account,
        crate::presentation::http::controllers::accounts::delete_account,
        super::routes::health
    ),
    components(
        schemas(
            StatusResponse,
            ErrorResponse,
            FieldViolation,
            MessageResponse,
            RegisterAccountRequest,
            LoginRequest,
            UpdateAccountRequest,
            AccountDto
        )
    ),
    tags(
        (name = "Users", description = "Account registration, login and management"),
        (name = "System", description = "System level endpoints")
    ),
    info(
        title = "Account Service API",
        description = "User account management",
        version = "0.1.0"
    )
)]
pub struct ApiDoc;

/// Serialized OpenAPI document, built once per process.
pub fn openapi_bytes() -> &'static Bytes {
    OPENAPI_BYTES.get_or_init(|| match serde_json::to_vec(&ApiDoc::openapi()) {
        Ok(bytes) => Bytes::from(bytes),
        Err(err) => {
            tracing::error!(error = %err, "failed to serialize OpenAPI document");
            Bytes::new()
        }
    })
}

/// Strong ETag over the serialized document.
pub fn openapi_etag() -> &'static str {
    OPENAPI_ETAG
        .get_or_init(|| format!("\"{}\"", blake3::hash(openapi_bytes()).to_hex()))
        .as_str()
}

pub(crate) fn openapi_content_length_str() -> &'static str {
    OPENAPI_CONTENT_LENGTH
        .get_or_init(|| openapi_bytes().len().to_string())
        .as_str()
}

pub fn docs_router() -> Router {
    let openapi = ApiDoc::openapi();
    let swagger = SwaggerUi::new("/docs").url("/api-docs/openapi.json", openapi.clone());
    let redoc = Redoc::with_url("/redoc", openapi);
    Router::new()
        .route("/openapi.json", get(serve_openapi).head(head_openapi))
        .merge(swagger)
        .merge(redoc)
        .route("/", get(|| async { Redirect::permanent("/docs") }))
}

pub fn write_openapi_snapshot(output_path: &Path) -> std::io::Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &ApiDoc::openapi())?;
    Ok(())
}
