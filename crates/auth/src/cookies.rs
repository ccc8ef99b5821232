//! Auth cookie pair
//!
//! Login and refresh set both tokens as http-only, secure, SameSite=Strict
//! cookies; logout clears them. Clients behind the cookie transport never
//! see the tokens from script.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

/// Cookie name for the access token.
pub const ACCESS_COOKIE: &str = "accessToken";
/// Cookie name for the refresh token.
pub const REFRESH_COOKIE: &str = "refreshToken";

fn auth_cookie(name: &'static str, value: String, max_age: Duration) -> Cookie<'static> {
    Cookie::build((name, value))
        .http_only(true)
        .secure(true)
        .same_site(SameSite::Strict)
        .path("/")
        .max_age(max_age)
        .build()
}

/// Build the access-token cookie.
pub fn access_cookie(token: &str, ttl_secs: i64) -> Cookie<'static> {
    auth_cookie(ACCESS_COOKIE, token.to_string(), Duration::seconds(ttl_secs))
}

/// Build the refresh-token cookie.
pub fn refresh_cookie(token: &str, ttl_secs: i64) -> Cookie<'static> {
    auth_cookie(REFRESH_COOKIE, token.to_string(), Duration::seconds(ttl_secs))
}

/// Build an expired cookie that clears the access token.
pub fn clear_access_cookie() -> Cookie<'static> {
    auth_cookie(ACCESS_COOKIE, String::new(), Duration::ZERO)
}

/// Build an expired cookie that clears the refresh token.
pub fn clear_refresh_cookie() -> Cookie<'static> {
    auth_cookie(REFRESH_COOKIE, String::new(), Duration::ZERO)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_cookie_attributes() {
        let cookie = access_cookie("tok", 900);
        assert_eq!(cookie.name(), "accessToken");
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(900)));
    }

    #[test]
    fn test_clear_cookies_expire_immediately() {
        for cookie in [clear_access_cookie(), clear_refresh_cookie()] {
            assert!(cookie.value().is_empty());
            assert_eq!(cookie.max_age(), Some(Duration::ZERO));
            assert_eq!(cookie.http_only(), Some(true));
        }
    }
}
