//! Session cookie handling.
//!
//! The token travels only in an http-only, same-site-strict cookie so client
//! scripts never see it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use common::SessionCookieConfig;

/// Attach a session cookie carrying `token`, valid for `ttl`.
pub fn issue(
    jar: CookieJar,
    config: &SessionCookieConfig,
    token: String,
    ttl: chrono::Duration,
) -> CookieJar {
    let cookie = Cookie::build((config.name.clone(), token))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::seconds(ttl.num_seconds()))
        .build();

    jar.add(cookie)
}

/// Overwrite the session cookie with an expired, empty one.
pub fn clear(jar: CookieJar, config: &SessionCookieConfig) -> CookieJar {
    let cookie = Cookie::build((config.name.clone(), ""))
        .path("/")
        .http_only(true)
        .secure(config.secure)
        .same_site(SameSite::Strict)
        .max_age(time::Duration::ZERO)
        .build();

    jar.add(cookie)
}

/// The raw session token presented with the request, if any.
pub fn token<'a>(jar: &'a CookieJar, config: &SessionCookieConfig) -> Option<&'a str> {
    jar.get(&config.name).map(|cookie| cookie.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secure: bool) -> SessionCookieConfig {
        SessionCookieConfig {
            name: "authToken".to_string(),
            secure,
        }
    }

    #[test]
    fn test_issued_cookie_attributes() {
        let jar = issue(
            CookieJar::new(),
            &config(true),
            "token-value".to_string(),
            chrono::Duration::hours(24),
        );
        let cookie = jar.get("authToken").unwrap();

        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Strict));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(time::Duration::hours(24)));
    }

    #[test]
    fn test_cleared_cookie_expires_immediately() {
        let jar = clear(CookieJar::new(), &config(false));
        let cookie = jar.get("authToken").unwrap();

        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_token_reads_configured_cookie() {
        let jar = CookieJar::new().add(Cookie::new("authToken", "abc"));
        assert_eq!(token(&jar, &config(false)), Some("abc"));

        let other = SessionCookieConfig {
            name: "session".to_string(),
            secure: false,
        };
        assert_eq!(token(&jar, &other), None);
    }
}
