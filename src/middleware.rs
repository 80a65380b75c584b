//! Request interceptors applied to every route: CORS (outermost) and JSON content type.

use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderMap, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower_http::set_header::SetResponseHeaderLayer;

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_METHODS: &str = "GET, POST, PUT, DELETE, OPTIONS";
pub const ALLOW_HEADERS: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";

fn set_cors_headers(headers: &mut HeaderMap) {
    headers.insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, HeaderValue::from_static(ALLOW_ORIGIN));
    headers.insert(header::ACCESS_CONTROL_ALLOW_METHODS, HeaderValue::from_static(ALLOW_METHODS));
    headers.insert(header::ACCESS_CONTROL_ALLOW_HEADERS, HeaderValue::from_static(ALLOW_HEADERS));
}

/// Stamps permissive CORS headers. A preflight (`OPTIONS`) is answered here with 200 and an
/// empty body; the inner service never sees it.
pub async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = (StatusCode::OK, Body::empty()).into_response();
        set_cors_headers(response.headers_mut());
        return response;
    }
    let mut response = next.run(request).await;
    set_cors_headers(response.headers_mut());
    response
}

/// Wrap a router in the chain. Layers added later run first, so CORS ends up outermost.
pub fn apply(router: Router) -> Router {
    router
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_TYPE,
            HeaderValue::from_static(JSON_CONTENT_TYPE),
        ))
        .layer(middleware::from_fn(cors))
}
