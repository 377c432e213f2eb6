use actix_web::web;

pub mod games;
pub mod health;

/// Register every route. Shared by `main.rs` and the integration tests so
/// both exercise the same paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root));
    health::configure_routes(cfg);
    cfg.service(web::scope("/api/game").configure(games::configure_routes));
}
