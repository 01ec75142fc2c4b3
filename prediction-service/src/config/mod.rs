use serde::Deserialize;
use service_core::config as core_config;
use service_core::config::get_env;
use service_core::error::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct PredictionConfig {
    #[serde(flatten)]
    pub common: core_config::Config,
    pub model: ModelConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ModelConfig {
    /// Path to the serialized regression model artifact.
    pub artifact_path: String,
    /// Path to the cleaned car listings CSV loaded at startup.
    pub dataset_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Origin allowed by CORS.
    pub frontend_url: String,
}

impl PredictionConfig {
    pub fn load() -> Result<Self, AppError> {
        // Common config handles .env, the optional configuration file and PORT.
        let common = core_config::Config::load()?;

        Ok(PredictionConfig {
            common,
            model: ModelConfig {
                artifact_path: get_env("MODEL_PATH", Some("models/LinearRegressionModel.json"))?,
                dataset_path: get_env("CAR_DATA_PATH", Some("data/Cleaned_Car_data.csv"))?,
            },
            security: SecurityConfig {
                frontend_url: get_env("FRONTEND_URL", Some("http://localhost:3000"))?,
            },
        })
    }
}
