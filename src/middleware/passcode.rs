// SPDX-License-Identifier: MIT

//! Passcode gate middleware.
//!
//! A single shared passcode gates activity mutations. This is a UX
//! deterrent, not an access-control mechanism: successful entry is
//! remembered with a long-lived cookie, and reads are not gated at all.

use axum::{extract::Request, http::StatusCode, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;
use subtle::ConstantTimeEq;

/// Cookie set once the passcode has been entered.
pub const PASSCODE_COOKIE: &str = "junebug_authenticated";

/// Cookie lifetime: one year.
pub const PASSCODE_COOKIE_DAYS: i64 = 365;

/// Middleware that requires the passcode cookie.
pub async fn require_passcode(jar: CookieJar, request: Request, next: Next) -> Result<Response, StatusCode> {
    match jar.get(PASSCODE_COOKIE) {
        Some(cookie) if cookie.value() == "1" => Ok(next.run(request).await),
        _ => Err(StatusCode::UNAUTHORIZED),
    }
}

/// Compare a submitted passcode against the configured one in constant time.
pub fn passcode_matches(submitted: &str, expected: &str) -> bool {
    submitted.as_bytes().ct_eq(expected.as_bytes()).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passcode_match() {
        assert!(passcode_matches("woof", "woof"));
        assert!(!passcode_matches("woof", "meow"));
        assert!(!passcode_matches("woof", "woof "));
        assert!(!passcode_matches("", "woof"));
    }
}
