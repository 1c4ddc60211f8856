use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use clap::{Arg, Command};
use sqlcamp_accounts::config::AppConfig;
use sqlcamp_accounts::database::Database;
use sqlcamp_accounts::error::AppResult;
use sqlcamp_accounts::handlers::AppState;
use sqlcamp_accounts::routes;
use std::path::Path;
use std::sync::Arc;
use std::time::SystemTime;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[actix_web::main]
async fn main() -> AppResult<()> {
    let matches = Command::new("sqlcamp-accounts")
        .version(env!("CARGO_PKG_VERSION"))
        .about("SQLCamp user accounts, progress and certificates service")
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
        .with(EnvFilter::from_default_env().add_directive("sqlcamp_accounts=info".parse().unwrap()))
        .init();

    tracing::info!("Starting SQLCamp accounts service");

    let config = match matches.get_one::<String>("config") {
        Some(path) => AppConfig::load_from_file(Path::new(path))?,
        None => AppConfig::load()?,
    };

    let database = Arc::new(Database::connect(&config.database).await?);
    database.init().await?;
    tracing::info!("Accounts database initialized");

    let app_state = web::Data::new(AppState {
        database: Arc::clone(&database),
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

    database.close().await;
    tracing::info!("Accounts database pool closed");

    Ok(())
}
