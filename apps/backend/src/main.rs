use actix_web::{web, App, HttpServer};
use ohhell_backend::config::{EngineConfig, ServerConfig};
use ohhell_backend::middleware::cors::cors_middleware;
use ohhell_backend::middleware::request_trace::RequestTrace;
use ohhell_backend::middleware::structured_logger::StructuredLogger;
use ohhell_backend::middleware::trace_span::TraceSpan;
use ohhell_backend::routes;
use ohhell_backend::state::app_state::AppState;
use tracing::{error, info};

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Configuration comes from the process environment only; see config/.
    let config = ServerConfig::from_env().and_then(|s| Ok((s, EngineConfig::from_env()?)));
    let (server, engine) = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(error = %e, "Invalid configuration");
            std::process::exit(1);
        }
    };

    info!(
        host = %server.host,
        port = server.port,
        origins = ?server.allowed_origins,
        default_players = engine.default_players,
        fixed_seed = engine.deal_seed.is_some(),
        "Starting Oh Hell backend"
    );

    let bind_addr = server.bind_addr();
    let data = web::Data::new(AppState::new(server, engine));

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware(&data.server.allowed_origins))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind(bind_addr)?
    .run()
    .await
}
