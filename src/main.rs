use actix_web::{App, HttpServer, middleware, web};

use member_admin::config::{AppConfig, VIEW_SWEEP_INTERVAL};
use member_admin::handlers;
use member_admin::models::member::HttpMemberSource;
use member_admin::session::session_middleware;
use member_admin::views::{ViewRegistry, spawn_view_sweeper};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init();

    let config = AppConfig::from_env();
    let source = HttpMemberSource::new(&config.members_url, config.fetch_timeout)
        .map_err(std::io::Error::other)?;
    log::info!("Member feed: {}", source.url());

    let secret_key = config.cookie_key();
    let registry = ViewRegistry::new();
    spawn_view_sweeper(registry.clone(), config.view_idle, VIEW_SWEEP_INTERVAL);
    let bind_addr = config.bind_addr.clone();

    let config = web::Data::new(config);
    let source = web::Data::new(source);
    let registry = web::Data::new(registry);

    log::info!("Starting server at http://{bind_addr}");

    HttpServer::new(move || {
        App::new()
            .wrap(session_middleware(secret_key.clone()))
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .app_data(source.clone())
            .app_data(registry.clone())
            // Static files
            .service(actix_files::Files::new("/static", "./static"))
            .configure(handlers::configure::<HttpMemberSource>)
            // Default 404 handler (must be registered last)
            .default_service(web::to(|| async {
                let html = include_str!("../templates/errors/404.html");
                actix_web::HttpResponse::NotFound()
                    .content_type("text/html; charset=utf-8")
                    .body(html)
            }))
    })
    .bind(bind_addr)?
    .run()
    .await
}
