//! Session cookie codec: read the key from a request jar, issue the cookie
//! with the configured attributes, and strip it on flush.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::SessionKey;
use crate::config::{CookieConfig, SameSitePolicy};

/// Extract the session key named by the request cookie, if present.
pub fn session_key(jar: &CookieJar, config: &CookieConfig) -> Option<SessionKey> {
    jar.get(&config.name)
        .map(|cookie| SessionKey::from(cookie.value().to_string()))
}

/// Add the session cookie with the configured attributes to the jar.
pub fn issue(jar: CookieJar, key: &SessionKey, config: &CookieConfig) -> CookieJar {
    let mut cookie = Cookie::new(config.name.clone(), key.to_string());
    cookie.set_path("/");
    cookie.set_http_only(config.http_only);
    cookie.set_secure(config.secure);
    cookie.set_same_site(same_site(config.same_site));
    cookie.set_max_age(time::Duration::seconds(config.max_age_secs as i64));
    jar.add(cookie)
}

/// Remove the session cookie. The removal cookie must carry the same name
/// and path as the one issued or browsers will keep the original.
pub fn strip(jar: CookieJar, config: &CookieConfig) -> CookieJar {
    let mut cookie = Cookie::from(config.name.clone());
    cookie.set_path("/");
    jar.remove(cookie)
}

fn same_site(policy: SameSitePolicy) -> SameSite {
    match policy {
        SameSitePolicy::None => SameSite::None,
        SameSitePolicy::Lax => SameSite::Lax,
        SameSitePolicy::Strict => SameSite::Strict,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderMap;

    fn empty_jar() -> CookieJar {
        CookieJar::from_headers(&HeaderMap::new())
    }

    #[test]
    fn test_session_key_absent() {
        let config = CookieConfig::default();
        assert!(session_key(&empty_jar(), &config).is_none());
    }

    #[test]
    fn test_issue_then_read_back() {
        let config = CookieConfig::default();
        let key = SessionKey::generate();

        let jar = issue(empty_jar(), &key, &config);
        let read = session_key(&jar, &config).unwrap();
        assert_eq!(read, key);
    }

    #[test]
    fn test_issue_applies_configured_attributes() {
        let config = CookieConfig::default();
        let key = SessionKey::generate();

        let jar = issue(empty_jar(), &key, &config);
        let cookie = jar.get(&config.name).unwrap();
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
        assert_eq!(
            cookie.max_age(),
            Some(time::Duration::seconds(1_209_600))
        );
    }

    #[test]
    fn test_issue_respects_lax_insecure_config() {
        let config = CookieConfig {
            same_site: SameSitePolicy::Lax,
            secure: false,
            ..CookieConfig::default()
        };
        let key = SessionKey::generate();

        let jar = issue(empty_jar(), &key, &config);
        let cookie = jar.get(&config.name).unwrap();
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.secure(), Some(false));
    }

    #[test]
    fn test_strip_removes_cookie() {
        let config = CookieConfig::default();
        let key = SessionKey::generate();

        let jar = issue(empty_jar(), &key, &config);
        let jar = strip(jar, &config);
        assert!(jar.get(&config.name).is_none());
    }
}
