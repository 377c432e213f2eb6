use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use ohhell_backend::middleware::request_trace::RequestTrace;
use ohhell_backend::middleware::structured_logger::StructuredLogger;
use ohhell_backend::middleware::trace_span::TraceSpan;
use ohhell_backend::routes;
use ohhell_backend::state::app_state::AppState;

/// Build the production route table with the tracing middleware stack.
///
/// CORS is left out so responses keep a plain `BoxBody`.
pub async fn build_test_app(
    state: AppState,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = Error> {
    test::init_service(
        App::new()
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(web::Data::new(state))
            .configure(routes::configure),
    )
    .await
}
