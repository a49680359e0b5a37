use actix_web::{middleware::NormalizePath, web, App, HttpServer};
use cognito_portfolio::{
    constants::START_TIME,
    db::{
        postgres::{create_pool, run_migrations},
        seed::seed_demo_data,
    },
    graceful_shutdown::shutdown_signal,
    routes::configure_routes,
    settings::{AppConfig, AppEnvironment},
    shared_repos::SharedRepositories,
    telemetry::init_tracing,
    AppState,
};
use once_cell::sync::Lazy;
use tracing_actix_web::TracingLogger;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let production = matches!(AppEnvironment::from_env(), Ok(AppEnvironment::Production));
    init_tracing(production);
    Lazy::force(&START_TIME);

    let config = match AppConfig::new() {
        Ok(cfg) => {
            tracing::info!("Loaded configuration: {:?}", cfg);
            cfg
        }
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let repos = if config.database_url.trim().is_empty() {
        tracing::warn!("No DATABASE_URL configured, using in-memory stores");
        SharedRepositories::in_memory()
    } else {
        let pool = match create_pool(&config.database_url).await {
            Ok(pool) => pool,
            Err(e) => {
                tracing::error!("Database connection failed: {}", e);
                std::process::exit(1);
            }
        };
        if let Err(e) = run_migrations(&pool).await {
            tracing::error!("Migrations failed: {}", e);
            std::process::exit(1);
        }
        SharedRepositories::new(pool)
    };

    if config.seed_demo_data {
        if let Err(e) = seed_demo_data(&repos).await {
            tracing::error!("Demo data could not be seeded: {}", e);
        }
    }

    let app_state = match AppState::new(&config, repos) {
        Ok(state) => web::Data::new(state),
        Err(e) => {
            tracing::error!("Application state error: {}", e);
            std::process::exit(1);
        }
    };

    let server_addr = format!("{}:{}", config.host, config.port);

    tracing::info!(
        "Starting {} portfolio v{} on {}",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let server = HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .configure(configure_routes)
    })
    .workers(config.worker_count.max(1))
    .bind(server_addr)?
    .run();

    let handle = server.handle();

    tokio::select! {
        res = server => res,
        _ = shutdown_signal() => {
            handle.stop(true).await;
            Ok(())
        }
    }
}
