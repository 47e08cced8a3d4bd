//! Navigation gate for protected page paths.
//!
//! This is the cheap tier of the two-tier check: it only tests that the
//! session cookie is *present* and redirects browser navigations to the
//! login surface when it is not. It performs no signature or expiry
//! verification — a forged or expired cookie passes here and is rejected
//! by the `CurrentUser` extractor at the data boundary.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;

use guichet_auth::session::SESSION_COOKIE;

/// Path prefixes that require a session cookie to navigate to.
const PROTECTED_PREFIXES: &[&str] = &["/tickets", "/groups", "/computers", "/admin", "/profile"];

/// Where unauthenticated navigations are sent.
const LOGIN_PATH: &str = "/login";

/// Whether a path falls under the protected allow-list.
pub fn is_protected(path: &str) -> bool {
    PROTECTED_PREFIXES.iter().any(|p| path.starts_with(p))
}

/// Redirects protected-path navigations without a session cookie to the
/// login surface. Presence-only; never an authorization decision.
pub async fn navigation_gate(request: Request, next: Next) -> Response {
    if is_protected(request.uri().path()) {
        let jar = CookieJar::from_headers(request.headers());
        if jar.get(SESSION_COOKIE).is_none() {
            return Redirect::to(LOGIN_PATH).into_response();
        }
    }

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::routing::get;
    use tower::ServiceExt;

    #[test]
    fn protected_prefixes_match() {
        assert!(is_protected("/tickets"));
        assert!(is_protected("/tickets/42"));
        assert!(is_protected("/admin/users"));
        assert!(is_protected("/groups"));
    }

    #[test]
    fn open_paths_pass() {
        assert!(!is_protected("/login"));
        assert!(!is_protected("/"));
        assert!(!is_protected("/api/auth/login"));
    }

    fn gated_router() -> Router {
        Router::new()
            .route("/tickets", get(|| async { "tickets" }))
            .route("/login", get(|| async { "login" }))
            .layer(axum::middleware::from_fn(navigation_gate))
    }

    #[tokio::test]
    async fn protected_navigation_without_cookie_redirects_to_login() {
        let request = Request::builder()
            .uri("/tickets")
            .body(Body::empty())
            .unwrap();

        let response = gated_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[header::LOCATION], LOGIN_PATH);
    }

    #[tokio::test]
    async fn any_cookie_value_passes_the_gate() {
        // Presence only: even a forged value is waved through here and
        // left for the data boundary to reject.
        let request = Request::builder()
            .uri("/tickets")
            .header(header::COOKIE, format!("{SESSION_COOKIE}=not-a-real-token"))
            .body(Body::empty())
            .unwrap();

        let response = gated_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn open_navigation_needs_no_cookie() {
        let request = Request::builder()
            .uri("/login")
            .body(Body::empty())
            .unwrap();

        let response = gated_router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
