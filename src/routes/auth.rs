// SPDX-License-Identifier: MIT

//! Passcode gate routes.
//!
//! One shared passcode, entered once per browser. Success is remembered
//! with the `junebug_authenticated` cookie for a year.

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::middleware::passcode::{passcode_matches, PASSCODE_COOKIE, PASSCODE_COOKIE_DAYS};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/passcode", post(enter_passcode))
        .route("/auth/logout", get(logout))
}

#[derive(Deserialize)]
pub struct PasscodeRequest {
    pub passcode: String,
}

#[derive(Serialize)]
pub struct PasscodeResponse {
    pub success: bool,
}

/// Check the submitted passcode and set the gate cookie on success.
async fn enter_passcode(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Json(body): Json<PasscodeRequest>,
) -> Result<(CookieJar, Json<PasscodeResponse>)> {
    if !passcode_matches(&body.passcode, &state.config.passcode) {
        tracing::warn!("Rejected passcode attempt");
        return Err(AppError::Unauthorized);
    }

    let cookie = Cookie::build((PASSCODE_COOKIE, "1"))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.frontend_url.starts_with("https://"))
        .max_age(time::Duration::days(PASSCODE_COOKIE_DAYS))
        .build();

    tracing::info!("Passcode accepted, gate cookie set");

    Ok((jar.add(cookie), Json(PasscodeResponse { success: true })))
}

/// Clear the gate cookie.
async fn logout(jar: CookieJar) -> (CookieJar, StatusCode) {
    let removal = Cookie::build((PASSCODE_COOKIE, "")).path("/").build();
    (jar.remove(removal), StatusCode::NO_CONTENT)
}
