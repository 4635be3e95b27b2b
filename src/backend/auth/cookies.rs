/**
 * Auth Cookie
 *
 * `Set-Cookie` values for the `token` cookie and lookup of that cookie on
 * inbound requests. The cookie is `HttpOnly`, `SameSite=Strict`, lives for
 * as long as the token, and is `Secure` in production.
 */

use axum::http::{
    header::{InvalidHeaderValue, COOKIE},
    HeaderMap, HeaderValue,
};

pub const AUTH_COOKIE_NAME: &str = "token";

/// Cookie carrying a freshly issued token
pub fn auth_cookie(token: &str, max_age_secs: u64, secure: bool) -> Result<HeaderValue, InvalidHeaderValue> {
    let mut cookie = format!(
        "{AUTH_COOKIE_NAME}={token}; Path=/; HttpOnly; SameSite=Strict; Max-Age={max_age_secs}"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    HeaderValue::from_str(&cookie)
}

/// Cookie that makes the browser drop the token
pub fn clear_auth_cookie(secure: bool) -> HeaderValue {
    if secure {
        HeaderValue::from_static("token=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0; Secure")
    } else {
        HeaderValue::from_static("token=; Path=/; HttpOnly; SameSite=Strict; Max-Age=0")
    }
}

/// Value of the `token` cookie, if any
pub fn token_from_cookies(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| key.trim() == AUTH_COOKIE_NAME)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
