use std::sync::Arc;

use axum::{
    Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::post,
};
use serde::{Deserialize, Serialize};

use crate::{
    domain::{
        models::user::User,
        repositories::{
            credential_repository::CredentialRepository, user_repository::UserRepository,
        },
        services::{password_service::PasswordHasher, token_service::TokenIssuer},
        validation::AccountStep,
    },
    presentation::handlers::error_response,
    usecase::{login_usecase::LoginUsecase, register_visitor_usecase::RegisterVisitorUsecase},
};

#[derive(Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: Option<String>,
}

#[derive(Serialize, Deserialize)]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub role: String,
}

impl From<User> for UserInfo {
    fn from(user: User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email,
            role: user.role.as_str().to_string(),
        }
    }
}

#[derive(Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

#[derive(Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: UserInfo,
}

#[derive(Clone)]
pub struct AuthState<
    C: CredentialRepository,
    U: UserRepository,
    P: PasswordHasher,
    T: TokenIssuer,
> {
    pub login_usecase: Arc<LoginUsecase<C, U, P, T>>,
    pub register_usecase: Arc<RegisterVisitorUsecase<C, U, P>>,
}

pub fn create_auth_router<
    C: CredentialRepository + Clone + Send + Sync + 'static,
    U: UserRepository + Clone + Send + Sync + 'static,
    P: PasswordHasher + Send + Sync + 'static,
    T: TokenIssuer + Clone + 'static,
>(
    login_usecase: LoginUsecase<C, U, P, T>,
    register_usecase: RegisterVisitorUsecase<C, U, P>,
) -> Router {
    let state = AuthState {
        login_usecase: Arc::new(login_usecase),
        register_usecase: Arc::new(register_usecase),
    };

    Router::new()
        .route("/auth/login", post(login::<C, U, P, T>))
        .route("/auth/register", post(register::<C, U, P, T>))
        .route("/auth/logout", post(logout))
        .with_state(state)
}

async fn login<
    C: CredentialRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
    T: TokenIssuer,
>(
    State(state): State<AuthState<C, U, P, T>>,
    Json(payload): Json<LoginRequest>,
) -> impl IntoResponse {
    match state
        .login_usecase
        .login(payload.email, payload.password)
        .await
    {
        Ok(result) => {
            let response = LoginResponse {
                token: result.token,
                user: result.user.into(),
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Visitor sign-up. Reuses the wizard's account validator so the password
/// and email rules stay in one place.
async fn register<
    C: CredentialRepository + Send + Sync,
    U: UserRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
    T: TokenIssuer,
>(
    State(state): State<AuthState<C, U, P, T>>,
    Json(payload): Json<RegisterRequest>,
) -> impl IntoResponse {
    let step = AccountStep {
        email: payload.email,
        password: payload.password,
        confirm_password: payload.confirm_password,
    };
    let patch = match step.validate() {
        Ok(patch) => patch,
        Err(err) => return error_response(err.into()),
    };
    // The validator populates both on success.
    let email = patch.email.unwrap_or_default();
    let password = patch.password.unwrap_or_default();

    match state
        .register_usecase
        .register(email, password, payload.name)
        .await
    {
        Ok(user) => {
            let response = RegisterResponse { user: user.into() };
            (StatusCode::CREATED, Json(response)).into_response()
        }
        Err(err) => error_response(err),
    }
}

/// Sessions are bearer tokens; ending one is purely client-side, the
/// endpoint exists so the client has a uniform call to make.
async fn logout() -> StatusCode {
    StatusCode::NO_CONTENT
}
