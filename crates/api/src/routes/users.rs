//! User routes for registration, authentication, and balance.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::AppState;
use crate::routes::error_response;
use fintrack_core::auth::{NewUser, User, UserService};
use fintrack_core::ledger::EntryService;
use fintrack_db::{EntryRepository, UserRepository};
use fintrack_shared::types::UserId;

/// Creates the user routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(register))
        .route("/users/authenticate", post(authenticate))
        .route("/users/{id}/balance", get(balance))
}

/// Request body for registration.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
    /// Raw password; stored only as an Argon2id hash.
    pub password: String,
}

/// Request body for authentication.
#[derive(Debug, Deserialize)]
pub struct AuthenticateRequest {
    /// Login email.
    pub email: String,
    /// Raw password.
    pub password: String,
}

/// A user as exposed over the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Display name.
    pub name: String,
    /// Login email.
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id.into_inner(),
            name: user.name,
            email: user.email,
        }
    }
}

/// Response for the balance endpoint.
#[derive(Debug, Serialize)]
pub struct BalanceResponse {
    /// Net balance: settled income minus settled expense.
    pub balance: Decimal,
}

/// POST /users - Register a new user.
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let service = UserService::new(UserRepository::new((*state.db).clone()));

    match service
        .register(NewUser {
            name: payload.name,
            email: payload.email,
            password: payload.password,
        })
        .await
    {
        Ok(user) => {
            info!(user_id = %user.id, email = %user.email, "New user registered");
            (StatusCode::CREATED, Json(UserResponse::from(user))).into_response()
        }
        Err(err) => {
            warn!(error = %err, "Registration rejected");
            error_response(err)
        }
    }
}

/// POST /users/authenticate - Check credentials and return the user.
async fn authenticate(
    State(state): State<AppState>,
    Json(payload): Json<AuthenticateRequest>,
) -> impl IntoResponse {
    let service = UserService::new(UserRepository::new((*state.db).clone()));

    match service.authenticate(&payload.email, &payload.password).await {
        Ok(user) => {
            info!(user_id = %user.id, "User authenticated");
            (StatusCode::OK, Json(UserResponse::from(user))).into_response()
        }
        Err(err) => {
            info!(email = %payload.email, error = %err, "Authentication failed");
            error_response(err)
        }
    }
}

/// GET /users/{id}/balance - Net balance of settled entries.
async fn balance(State(state): State<AppState>, Path(id): Path<Uuid>) -> impl IntoResponse {
    let service = EntryService::new(EntryRepository::new((*state.db).clone()));

    match service.balance_for_user(UserId::from_uuid(id)).await {
        Ok(balance) => (StatusCode::OK, Json(BalanceResponse { balance })).into_response(),
        Err(err) => error_response(err),
    }
}
