use prediction_service::config::{ModelConfig, PredictionConfig, SecurityConfig};
use prediction_service::startup::Application;
use serde_json::json;
use service_core::config::Config as CoreConfig;
use uuid::Uuid;

pub const TEST_FRONTEND_URL: &str = "http://localhost:3000";

/// Reference dataset fixture, same column layout as the production CSV.
pub const SAMPLE_CSV: &str = "\
name,company,year,Price,kms_driven,fuel_type
Maruti Suzuki Swift,Maruti,2015,320000,30000,Petrol
Maruti Suzuki Baleno,Maruti,2018,550000,15000,Petrol
Hyundai i20,Hyundai,2017,450000,25000,Petrol
Hyundai Creta,Hyundai,2019,900000,20000,Diesel
Mahindra XUV500,Mahindra,2016,800000,60000,Diesel
Maruti Suzuki Wagon R,Maruti,2013,180000,45000,LPG
";

/// Model artifact fixture with known weights, so tests can assert exact
/// predictions.
pub fn sample_artifact() -> serde_json::Value {
    json!({
        "intercept": -1000000.0,
        "numeric": { "year": 500.0, "kms_driven": -0.5 },
        "categorical": {
            "name": { "Swift": 150000.0, "Creta": 400000.0 },
            "company": { "Maruti": 50000.0, "Hyundai": 80000.0 },
            "fuel_type": { "Petrol": 10000.0, "Diesel": 25000.0 }
        }
    })
}

pub struct TestApp {
    pub address: String,
    pub port: u16,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with_artifact(sample_artifact()).await
    }

    pub async fn spawn_with_artifact(artifact: serde_json::Value) -> Self {
        let fixture_dir =
            std::path::PathBuf::from(format!("target/test-fixtures-{}", Uuid::new_v4()));
        std::fs::create_dir_all(&fixture_dir).expect("Failed to create fixture directory");

        let artifact_path = fixture_dir.join("LinearRegressionModel.json");
        std::fs::write(&artifact_path, artifact.to_string()).expect("Failed to write artifact");

        let dataset_path = fixture_dir.join("Cleaned_Car_data.csv");
        std::fs::write(&dataset_path, SAMPLE_CSV).expect("Failed to write dataset");

        let config = PredictionConfig {
            common: CoreConfig { port: 0 },
            model: ModelConfig {
                artifact_path: artifact_path.to_string_lossy().into_owned(),
                dataset_path: dataset_path.to_string_lossy().into_owned(),
            },
            security: SecurityConfig {
                frontend_url: TEST_FRONTEND_URL.to_string(),
            },
        };

        let application = Application::build(config)
            .await
            .expect("Failed to build application");
        let port = application.port();

        tokio::spawn(application.run_until_stopped());

        TestApp {
            address: format!("http://127.0.0.1:{}", port),
            port,
        }
    }
}
