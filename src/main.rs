use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware, web};
use dotenv::dotenv;
use folio_backend::auth::TokenVerifier;
use folio_backend::config::AppConfig;
use folio_backend::create_pool;
use folio_backend::handlers;
use migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let config = AppConfig::from_env().expect("Invalid configuration");

    let db = create_pool(&config)
        .await
        .expect("Failed to connect to database");
    tracing::info!(max_connections = config.db_max_connections, "Connected to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");
        tracing::info!("Migrations applied");
    }

    let db_data = web::Data::new(db);
    let verifier = web::Data::new(TokenVerifier::from_config(&config.auth));

    let bind_addr = config.bind_addr();
    tracing::info!("Server running at http://{bind_addr}");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
            .allowed_headers(vec![
                actix_web::http::header::AUTHORIZATION,
                actix_web::http::header::CONTENT_TYPE,
                actix_web::http::header::ACCEPT,
            ])
            .expose_headers(vec![actix_web::http::header::LOCATION])
            .max_age(3600);

        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors)
            .app_data(db_data.clone())
            .app_data(verifier.clone())
            .service(web::scope("/api").configure(handlers::init_routes))
    })
    .bind(&bind_addr)?
    .run()
    .await
}
