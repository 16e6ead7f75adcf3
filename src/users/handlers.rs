use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    state::AppState,
    users::{
        dto::{
            ErrorBody, LoginRequest, PublicUser, RegisterRequest, RegisteredResponse,
            REGISTERED_MESSAGE,
        },
        repo::RepoError,
        repo_types::{Role, User},
    },
};

type ApiError = (StatusCode, Json<ErrorBody>);

fn api_error(status: StatusCode, message: impl Into<String>) -> ApiError {
    (
        status,
        Json(ErrorBody {
            error: message.into(),
        }),
    )
}

/// Body extraction failures keep the extractor's status but use the JSON error body.
fn rejected(rejection: JsonRejection) -> ApiError {
    let status = rejection.status();
    let message = rejection.body_text();
    warn!(%status, error = %message, "request body rejected");
    api_error(status, message)
}

pub fn buyer_routes() -> Router<AppState> {
    Router::new()
        .route("/api/buyers/register", post(register_buyer))
        .route("/api/buyers/login", post(login_buyer))
}

pub fn seller_routes() -> Router<AppState> {
    Router::new()
        .route("/api/sellers/register", post(register_seller))
        .route("/api/sellers/login", post(login_seller))
}

pub async fn register_buyer(
    state: State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredResponse>), ApiError> {
    register(state, payload.map_err(rejected)?, Role::Buyer).await
}

pub async fn register_seller(
    state: State<AppState>,
    payload: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegisteredResponse>), ApiError> {
    register(state, payload.map_err(rejected)?, Role::Seller).await
}

pub async fn login_buyer(
    state: State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<PublicUser>, ApiError> {
    login(state, payload.map_err(rejected)?, Role::Buyer).await
}

pub async fn login_seller(
    state: State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<PublicUser>, ApiError> {
    login(state, payload.map_err(rejected)?, Role::Seller).await
}

/// Store a new user tagged with the route's role. The body never picks the role.
#[instrument(skip(state, payload))]
async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
    role: Role,
) -> Result<(StatusCode, Json<RegisteredResponse>), ApiError> {
    let id = match User::create(&state.db, &payload.name, &payload.email, role.as_str()).await {
        Ok(id) => id,
        Err(RepoError::DuplicateEmail(email)) => {
            warn!(%email, "email already registered");
            return Err(api_error(StatusCode::CONFLICT, "Email already registered"));
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(user_id = id, email = %payload.email, %role, "user registered");
    Ok((
        StatusCode::CREATED,
        Json(RegisteredResponse {
            id,
            message: REGISTERED_MESSAGE,
        }),
    ))
}

/// Look the user up by email and echo the stored fields. No credential check.
#[instrument(skip(state, payload))]
async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
    role: Role,
) -> Result<Json<PublicUser>, ApiError> {
    let user = match User::find_by_email(&state.db, &payload.email).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(email = %payload.email, "login unknown email");
            return Err(api_error(StatusCode::NOT_FOUND, "User not found"));
        }
        Err(e) => {
            error!(error = %e, "find_by_email failed");
            return Err(api_error(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()));
        }
    };

    info!(
        user_id = user.id,
        stored_role = %user.role,
        created_at = ?user.created_at,
        "user logged in"
    );
    Ok(Json(PublicUser {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role,
    }))
}
