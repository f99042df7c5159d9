//! Cookie Helpers
//!
//! Reading cookies from request headers and building the header that
//! removes one from the browser.

use axum::http::{HeaderMap, header};

/// Extract a cookie value from headers
pub fn extract_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(|value| value.split(';'))
        .find_map(|cookie| {
            let (key, value) = cookie.trim().split_once('=')?;

            if key == name {
                Some(value.to_string())
            } else {
                None
            }
        })
}

/// Build a Set-Cookie header value that expires `name` immediately
pub fn build_delete_cookie(name: &str, path: &str) -> String {
    format!(
        "{}=; HttpOnly; Path={}; Max-Age=0; Expires=Thu, 01 Jan 1970 00:00:00 GMT",
        name, path
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_extract_cookie() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_static("foo=bar; Boat=abc.def; other=xyz"),
        );

        assert_eq!(extract_cookie(&headers, "Boat"), Some("abc.def".to_string()));
        assert_eq!(extract_cookie(&headers, "foo"), Some("bar".to_string()));
        assert_eq!(extract_cookie(&headers, "missing"), None);
    }

    #[test]
    fn test_extract_cookie_across_headers() {
        let mut headers = HeaderMap::new();
        headers.append(header::COOKIE, HeaderValue::from_static("theme=dark"));
        headers.append(header::COOKIE, HeaderValue::from_static("Boat=token"));

        assert_eq!(extract_cookie(&headers, "Boat"), Some("token".to_string()));
    }

    #[test]
    fn test_delete_cookie() {
        let cookie = build_delete_cookie("Boat", "/");
        assert!(cookie.starts_with("Boat=;"));
        assert!(cookie.contains("Max-Age=0"));
        assert!(cookie.contains("Path=/"));
    }
}
