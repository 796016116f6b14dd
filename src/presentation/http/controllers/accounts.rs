// src/presentation/http/controllers/accounts.rs
use crate::application::{
    commands::accounts::{LoginCommand, RegisterAccountCommand, UpdateAccountCommand},
    dto::AccountDto,
};
use crate::presentation::http::error::{ErrorResponse, HttpResult, IntoHttpResult};
use crate::presentation::http::extractors::{ApiJson, ApiPath};
use crate::presentation::http::state::HttpState;
use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// Missing fields deserialize as empty strings so that validation reports
// them per field instead of failing the whole body.

#[derive(Debug, Deserialize, ToSchema)]
pub struct RegisterAccountRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAccountRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Always re-hashed; send the current password to keep it.
    #[serde(default)]
    pub password: String,
}

/// Confirmation returned by mutating endpoints.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account: Option<AccountDto>,
}

impl MessageResponse {
    fn new(message: &str, account: Option<AccountDto>) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
            account,
        })
    }
}

#[utoipa::path(
    post,
    path = "/users",
    request_body = RegisterAccountRequest,
    responses(
        (status = 200, description = "Account registered.", body = MessageResponse),
        (status = 400, description = "Invalid fields or email already registered.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn register(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<RegisterAccountRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = RegisterAccountCommand {
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let account = state
        .account_commands()
        .register(command)
        .await
        .into_http()?;

    Ok(MessageResponse::new(
        "User registered successfully!",
        Some(account),
    ))
}

#[utoipa::path(
    post,
    path = "/users/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Credentials accepted.", body = MessageResponse),
        (status = 401, description = "Unknown email or wrong password.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn login(
    Extension(state): Extension<HttpState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = LoginCommand {
        email: payload.email,
        password: payload.password,
    };

    let account = state
        .account_commands()
        .login(command)
        .await
        .into_http()?;

    Ok(MessageResponse::new("Login successful!", Some(account)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "Account id")),
    request_body = UpdateAccountRequest,
    responses(
        (status = 200, description = "Account updated.", body = MessageResponse),
        (status = 400, description = "Invalid fields or email taken by another account.", body = ErrorResponse),
        (status = 404, description = "Account not found.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn update_account(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateAccountRequest>,
) -> HttpResult<Json<MessageResponse>> {
    let command = UpdateAccountCommand {
        account_id: id,
        name: payload.name,
        email: payload.email,
        password: payload.password,
    };

    let account = state
        .account_commands()
        .update(command)
        .await
        .into_http()?;

    Ok(MessageResponse::new(
        "User updated successfully",
        Some(account),
    ))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All accounts.", body = [AccountDto])
    ),
    tag = "Users"
)]
pub async fn list_accounts(
    Extension(state): Extension<HttpState>,
) -> HttpResult<Json<Vec<AccountDto>>> {
    state
        .account_queries()
        .list_accounts()
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "The account.", body = AccountDto),
        (status = 404, description = "Account not found.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn get_account(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<AccountDto>> {
    state
        .account_queries()
        .get_account(id)
        .await
        .into_http()
        .map(Json)
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    params(("id" = i64, Path, description = "Account id")),
    responses(
        (status = 200, description = "Account deleted.", body = MessageResponse),
        (status = 404, description = "Account not found.", body = ErrorResponse)
    ),
    tag = "Users"
)]
pub async fn delete_account(
    Extension(state): Extension<HttpState>,
    ApiPath(id): ApiPath<i64>,
) -> HttpResult<Json<MessageResponse>> {
    state
        .account_commands()
        .delete(id)
        .await
        .into_http()?;

    Ok(MessageResponse::new("User deleted successfully", None))
}
