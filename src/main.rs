use clap::Parser;
use poem::{listener::TcpListener, Route, Server};
use poem_openapi::OpenApiService;

use applixo_backend::api::{
    CollectionApi, DetectionApi, GreenCreditApi, HealthApi, HistoryApi, NotificationsApi,
    PricingApi, ReferenceApi,
};
use applixo_backend::app_data::AppData;
use applixo_backend::cli::{Cli, Commands};
use applixo_backend::config::{init_logging, AppSettings};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let cli = Cli::parse();

    let settings = AppSettings::from_env();
    let app_data = AppData::init(settings);

    match cli.command {
        Some(Commands::Detect { image }) => {
            if let Err(error) = applixo_backend::cli::run_detect(&app_data, &image).await {
                tracing::error!("detect failed: {}", error);
                std::process::exit(1);
            }
            Ok(())
        }
        Some(Commands::Serve) | None => serve(app_data).await,
    }
}

async fn serve(app_data: AppData) -> Result<(), std::io::Error> {
    let bind_address = app_data.settings.bind_address.clone();
    let public_url = app_data.settings.public_url.clone();

    let api_service = OpenApiService::new(
        (
            HealthApi,
            CollectionApi::new(app_data.sessions.clone()),
            PricingApi,
            DetectionApi::new(app_data.detector.clone()),
            HistoryApi::new(app_data.history.clone()),
            NotificationsApi::new(app_data.notifications.clone()),
            GreenCreditApi::new(app_data.green_credit.clone()),
            ReferenceApi::new(app_data.reference.clone()),
        ),
        "APPLIXO API",
        "1.0.0",
    )
    .server(public_url);

    // Swagger UI generated from the OpenAPI service
    let ui = api_service.swagger_ui();

    let app = Route::new().nest("/api", api_service).nest("/swagger", ui);

    tracing::info!("Starting server on http://{}", bind_address);
    tracing::info!("Swagger UI available under /swagger");

    Server::new(TcpListener::bind(bind_address)).run(app).await
}
