use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use dogmatch::config::{LoggingSettings, Settings, StorageBackend};
use dogmatch::core::{AuthService, DogService, DogStore, UserStore};
use dogmatch::routes::{self, AppState};
use dogmatch::services::{JwtTokens, MemoryStore, PostgresClient, Sha256Hasher};
use std::sync::Arc;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

fn init_logging(logging: &LoggingSettings) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    if logging.format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.compact().init();
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            init_logging(&LoggingSettings::default());
            error!("Failed to load configuration: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    init_logging(&settings.logging);

    info!("Starting Dogmatch service...");

    let (dog_store, user_store) = match settings.storage.backend {
        StorageBackend::Postgres => {
            let postgres = Arc::new(
                PostgresClient::from_settings(&settings.database)
                    .await
                    .map_err(|e| {
                        error!("Failed to connect to PostgreSQL: {}", e);
                        std::io::Error::other(e)
                    })?,
            );

            info!(
                "PostgreSQL client initialized (max: {} connections)",
                settings.database.max_connections()
            );
            (
                postgres.clone() as Arc<dyn DogStore>,
                postgres as Arc<dyn UserStore>,
            )
        }
        StorageBackend::Memory => {
            warn!("Using in-memory storage, data will not survive a restart");
            let memory = Arc::new(MemoryStore::new());
            (
                memory.clone() as Arc<dyn DogStore>,
                memory as Arc<dyn UserStore>,
            )
        }
    };

    let auth = AuthService::new(
        user_store,
        Arc::new(Sha256Hasher::new(settings.auth.password_salt.clone())),
        Arc::new(JwtTokens::new(
            &settings.auth.jwt_secret,
            chrono::Duration::seconds(settings.auth.token_ttl_secs),
        )),
    );

    let app_state = AppState::new(DogService::new(dog_store), auth);

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .configure(routes::configure_extractors)
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
