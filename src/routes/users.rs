use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    auth,
    error::{AppError, AppResult, OptionExt},
    repo,
    state::AppState,
    types::{envelope, new_object_id, LoginRequest, LoginResponse, RegisterRequest, User},
    validate,
};

pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let name = match req.name.as_deref() {
        None => return Err(AppError::BadRequest("name is required".into())),
        Some(v) if validate::is_blank(v) => {
            return Err(AppError::BadRequest("name is in wrong format".into()))
        }
        Some(v) => v,
    };
    let email = match req.email.as_deref() {
        None => return Err(AppError::BadRequest("email is required".into())),
        Some(v) if !validate::is_valid_email(v) => {
            return Err(AppError::BadRequest("email is in wrong format".into()))
        }
        Some(v) => v,
    };
    let password = match req.password.as_deref() {
        None => return Err(AppError::BadRequest("password is required".into())),
        Some(v) if !(8..=15).contains(&v.len()) => {
            return Err(AppError::BadRequest("password must be 8 to 15 characters".into()))
        }
        Some(v) => v,
    };

    if repo::users::email_in_use(&state.db, email).await? {
        return Err(AppError::BadRequest("Email already registered".into()));
    }

    let id = new_object_id();
    let user = User {
        id: id.clone(),
        name: name.to_string(),
        email: email.to_string(),
        password_hash: auth::hash_password(password)?,
        created_at: String::new(),
    };
    repo::users::insert(&state.db, &user).await?;
    tracing::info!(user_id = %id, "user registered");

    let created = repo::users::find_by_id(&state.db, &id).await?.ok_or_not_found("User")?;
    Ok((StatusCode::CREATED, envelope("User created successfully", created)))
}

pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let email = req
        .email
        .as_deref()
        .filter(|v| !validate::is_blank(v))
        .ok_or_else(|| AppError::BadRequest("email is required".into()))?;
    let password = req
        .password
        .as_deref()
        .filter(|v| !validate::is_blank(v))
        .ok_or_else(|| AppError::BadRequest("password is required".into()))?;

    // One message for both unknown email and wrong password
    let user = repo::users::find_by_email(&state.db, email).await?.ok_or_else(|| {
        state.metrics.inc_auth_failures();
        AppError::Unauthorized("Invalid email or password".to_string())
    })?;
    if !auth::verify_password(password, &user.password_hash)? {
        state.metrics.inc_auth_failures();
        return Err(AppError::Unauthorized("Invalid email or password".to_string()));
    }

    let expires_in_hours = state.config.auth.token_expiry_hours;
    let token = auth::create_token(&user.id, &state.config.auth.jwt_secret, expires_in_hours)?;
    tracing::info!(user_id = %user.id, "user logged in");

    Ok(envelope(
        "Login successful",
        LoginResponse { token, user_id: user.id, expires_in_hours },
    ))
}
