use actix_cors::Cors;
use actix_web::http::header;

use crate::middleware::request_trace::TRACE_ID_HEADER;

/// Build CORS middleware for the configured origins.
///
/// Only the methods and headers the game API uses are allowed, and the trace
/// id header is exposed so browser clients can report it.
pub fn cors_middleware(allowed_origins: &[String]) -> Cors {
    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT])
        .expose_headers(vec![header::HeaderName::from_static(TRACE_ID_HEADER)])
        .max_age(3600);

    for origin in allowed_origins {
        cors = cors.allowed_origin(origin);
    }

    cors
}
