use actix_web::{
    cookie::{Cookie, CookieJar, Key, SameSite},
    HttpRequest,
};

pub const FLASH_COOKIE: &str = "flash";

/// One-shot message cookie, signed so clients cannot forge acknowledgments.
pub fn flash_cookie(key: &Key, message: &str) -> Option<Cookie<'static>> {
    let mut jar = CookieJar::new();
    jar.signed_mut(key).add(
        Cookie::build(FLASH_COOKIE, message.to_string())
            .path("/")
            .http_only(true)
            .same_site(SameSite::Lax)
            .finish(),
    );
    jar.get(FLASH_COOKIE).cloned()
}

/// Verified flash message carried by the request, if any.
pub fn read_flash(req: &HttpRequest, key: &Key) -> Option<String> {
    let cookie = req.cookie(FLASH_COOKIE)?;
    let mut jar = CookieJar::new();
    jar.add_original(cookie);
    jar.signed(key)
        .get(FLASH_COOKIE)
        .map(|c| c.value().to_string())
}

/// Expires the flash cookie once it has been shown.
pub fn clear_flash() -> Cookie<'static> {
    let mut cookie = Cookie::build(FLASH_COOKIE, "").path("/").finish();
    cookie.make_removal();
    cookie
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    fn key() -> Key {
        Key::derive_from(b"an-example-secret-that-is-long-enough-0123")
    }

    #[test]
    fn signed_message_round_trips() {
        let key = key();
        let cookie = flash_cookie(&key, "Sent!").unwrap();
        assert_ne!(cookie.value(), "Sent!");

        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(read_flash(&req, &key).as_deref(), Some("Sent!"));
    }

    #[test]
    fn tampered_cookie_is_ignored() {
        let req = TestRequest::default()
            .cookie(Cookie::new(FLASH_COOKIE, "forged message"))
            .to_http_request();
        assert_eq!(read_flash(&req, &key()), None);
    }

    #[test]
    fn other_key_cannot_read_message() {
        let cookie = flash_cookie(&key(), "Sent!").unwrap();
        let other = Key::derive_from(b"a-completely-different-secret-0123456789");
        let req = TestRequest::default().cookie(cookie).to_http_request();
        assert_eq!(read_flash(&req, &other), None);
    }
}
