use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::{Arg, Command};
use sqlcamp_practice::config::AppConfig;
use sqlcamp_practice::database::PracticeDatabase;
use sqlcamp_practice::error::AppResult;
use sqlcamp_practice::gateway::PracticeGateway;
use sqlcamp_practice::handlers::AppState;
use sqlcamp_practice::routes;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[actix_web::main]
async fn main() -> AppResult<()> {
    let matches = Command::new("sqlcamp-practice")
        .version(env!("CARGO_PKG_VERSION"))
        .about("SQLCamp live SQL practice sandbox")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .help("Path to configuration file")
                .value_name("FILE"),
        )
        .get_matches();

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive("sqlcamp_practice=info".parse().unwrap()))
        .init();

    tracing::info!("Starting SQLCamp practice sandbox");

    let config = match matches.get_one::<String>("config") {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load()?,
    };

    let database = PracticeDatabase::connect(&config.database).await?;
    database.seed().await?;
    tracing::info!(
        "Practice store ready (pool ceiling: {} connections)",
        config.database.max_connections
    );

    let gateway = Arc::new(PracticeGateway::new(
        database,
        Duration::from_secs(config.database.query_timeout_secs),
    ));

    let app_state = web::Data::new(AppState {
        gateway: Arc::clone(&gateway),
        start_time: SystemTime::now(),
    });

    let server_addr = format!("{}:{}", config.server.host, config.server.port);
    tracing::info!("Starting HTTP server on {}", server_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(app_state.clone())
            .wrap(Cors::permissive())
            .wrap(Logger::default())
            .configure(routes::configure_routes)
    })
    .bind(&server_addr)?
    .run()
    .await?;

    gateway.close().await;
    tracing::info!("Practice store pool closed");

    Ok(())
}
