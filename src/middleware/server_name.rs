use axum::{
    middleware::Next,
    response::Response,
    http::{header::SERVER, Request, HeaderValue},
    body::Body,
};

pub const SERVER_NAME: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

pub async fn server_name_middleware(
    request: Request<Body>,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    response.headers_mut().insert(
        SERVER,
        HeaderValue::from_static(SERVER_NAME),
    );

    response
}
