use crate::config::PredictionConfig;
use crate::handlers;
use crate::services::{CarDataset, PriceModel};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use service_core::error::AppError;
use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Process-wide immutable state. The model and dataset are loaded once and
/// shared read-only across requests, so handlers need no locking.
#[derive(Clone)]
pub struct AppState {
    pub config: PredictionConfig,
    pub model: Arc<PriceModel>,
    pub dataset: Arc<CarDataset>,
}

pub struct Application {
    port: u16,
    server: Box<dyn std::future::Future<Output = std::io::Result<()>> + Send + Unpin>,
}

impl Application {
    pub async fn build(config: PredictionConfig) -> Result<Self, AppError> {
        let model = Arc::new(PriceModel::load(&config.model.artifact_path).map_err(|e| {
            tracing::error!(
                "Failed to load model artifact from {}: {}",
                config.model.artifact_path,
                e
            );
            e
        })?);

        let dataset = Arc::new(CarDataset::load(&config.model.dataset_path).map_err(|e| {
            tracing::error!(
                "Failed to load reference dataset from {}: {}",
                config.model.dataset_path,
                e
            );
            e
        })?);

        tracing::info!(
            rows = dataset.len(),
            "Model artifact and reference dataset loaded"
        );

        let allowed_origin = config
            .security
            .frontend_url
            .parse::<HeaderValue>()
            .map_err(|e| {
                AppError::ConfigError(anyhow::anyhow!(
                    "Invalid CORS origin '{}': {}",
                    config.security.frontend_url,
                    e
                ))
            })?;

        let cors = CorsLayer::new()
            .allow_origin(allowed_origin)
            .allow_methods([Method::GET, Method::POST])
            .allow_headers([header::CONTENT_TYPE]);

        let state = AppState {
            config: config.clone(),
            model,
            dataset,
        };

        let app = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/metrics", get(handlers::metrics_endpoint))
            .route("/predict", post(handlers::predict))
            .route("/api/companies", get(handlers::companies))
            .route("/api/models/:company", get(handlers::models_for_company))
            .route("/api/years", get(handlers::years))
            .route("/api/fuel-types", get(handlers::fuel_types))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .with_state(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        let server = axum::serve(listener, app);

        Ok(Self {
            port,
            server: Box::new(server.into_future()),
        })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        self.server.await
    }
}
