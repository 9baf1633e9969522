//! Axum extractor building a [`RequestSnapshot`] from the incoming request.

use std::convert::Infallible;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tracing::warn;

use crate::context::RequestSnapshot;

impl RequestSnapshot {
    /// Snapshot the request described by `parts`.
    ///
    /// The scheme comes from `X-Forwarded-Proto`, then the URI, then defaults
    /// to http. The host comes from the `Host` header, then the URI
    /// authority, then defaults to localhost.
    pub fn from_parts(parts: &Parts) -> Self {
        let scheme = header(parts, "x-forwarded-proto")
            .and_then(|v| v.split(',').next())
            .map(str::trim)
            .or_else(|| parts.uri.scheme_str())
            .unwrap_or("http");

        let host = header(parts, "host")
            .or_else(|| parts.uri.authority().map(|a| a.as_str()))
            .unwrap_or("localhost");

        let path_and_query = parts.uri.path_and_query().map_or("/", |pq| pq.as_str());

        let raw = format!("{scheme}://{host}{path_and_query}");
        match Self::from_url(&raw) {
            Ok(snapshot) => snapshot,
            Err(e) => {
                warn!(url = %raw, error = %e, "unparseable request url, assuming localhost");
                Self::new("http://localhost", parts.uri.path())
            }
        }
    }
}

fn header<'a>(parts: &'a Parts, name: &str) -> Option<&'a str> {
    parts.headers.get(name).and_then(|v| v.to_str().ok())
}

impl<S> FromRequestParts<S> for RequestSnapshot
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self::from_parts(parts))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use axum::http::Request;

    use super::*;
    use crate::context::RequestInfo;

    fn parts(request: Request<()>) -> Parts {
        request.into_parts().0
    }

    #[tokio::test]
    async fn extracts_host_path_and_query() {
        let mut parts = parts(
            Request::builder()
                .uri("/blog/post/?page=2")
                .header("host", "example.com:8080")
                .body(())
                .unwrap(),
        );
        let snapshot = RequestSnapshot::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(snapshot.root(), "http://example.com:8080");
        assert_eq!(snapshot.path(), "blog/post");
        assert_eq!(snapshot.url(), "http://example.com:8080/blog/post");
        assert_eq!(snapshot.query("page"), Some("2"));
    }

    #[tokio::test]
    async fn honors_forwarded_proto() {
        let mut parts = parts(
            Request::builder()
                .uri("/")
                .header("host", "example.com")
                .header("x-forwarded-proto", "https, http")
                .body(())
                .unwrap(),
        );
        let snapshot = RequestSnapshot::from_request_parts(&mut parts, &()).await.unwrap();
        assert_eq!(snapshot.root(), "https://example.com");
        assert_eq!(snapshot.path(), "/");
    }

    #[test]
    fn defaults_to_localhost() {
        let parts = parts(Request::builder().uri("/foo").body(()).unwrap());
        let snapshot = RequestSnapshot::from_parts(&parts);
        assert_eq!(snapshot.url(), "http://localhost/foo");
    }

    #[test]
    fn absolute_uri_supplies_authority() {
        let parts = parts(
            Request::builder()
                .uri("https://docs.example.org/guide")
                .body(())
                .unwrap(),
        );
        let snapshot = RequestSnapshot::from_parts(&parts);
        assert_eq!(snapshot.url(), "https://docs.example.org/guide");
    }
}
