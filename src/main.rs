use actix_web::{web, App, HttpResponse, HttpServer};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use lofa_settlement::config::Config;
use lofa_settlement::revenue::controllers::AppRevenueService;
use lofa_settlement::revenue::repositories::InMemoryOrderRepository;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lofa_settlement=debug,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env().expect("Failed to load configuration");
    config.validate().expect("Configuration validation failed");

    tracing::info!("Starting LOFA Settlement Service");
    tracing::info!("Environment: {}", config.app.env);
    tracing::info!("Server binding to: {}", config.server.bind_address());

    // Seed the in-memory order store
    let repository = match &config.data.dataset_path {
        Some(path) => {
            let repo = InMemoryOrderRepository::load_json(path)
                .expect("Failed to load orders dataset");
            tracing::info!("Order store seeded from {} ({} orders)", path, repo.order_count());
            repo
        }
        None => {
            tracing::warn!("ORDERS_DATASET_PATH not set; starting with an empty order store");
            InMemoryOrderRepository::default()
        }
    };

    let revenue_service = web::Data::new(AppRevenueService::new(repository));

    // Start HTTP server
    let bind_address = config.server.bind_address();
    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(revenue_service.clone())
            .configure(lofa_settlement::revenue::controllers::configure)
            .route("/health", web::get().to(health_check))
            .route("/", web::get().to(index))
    })
    .bind(&bind_address)?
    .run();

    tracing::info!("Server started at http://{}", bind_address);

    server.await
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "lofa-settlement"
    }))
}

async fn index() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "service": "LOFA Settlement Service",
        "version": "0.1.0",
        "status": "running"
    }))
}
