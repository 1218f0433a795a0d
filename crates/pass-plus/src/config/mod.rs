use crate::simulation::EligibilityPolicy;
use std::env;
use std::fmt;

/// Distinguishes runtime behavior for different stages of the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub policy: EligibilityPolicy,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let mut policy = EligibilityPolicy::default();
        if let Ok(region) = env::var("PASS_PLUS_TARGET_REGION") {
            let region = region.trim();
            if region.is_empty() {
                return Err(ConfigError::EmptyTargetRegion);
            }
            policy.target_region = region.to_string();
        }
        if let Some(threshold) = threshold_from_env("PASS_PLUS_CAFETERIA_QFM_THRESHOLD")? {
            policy.cafeteria_quotient_threshold = threshold;
        }
        if let Some(threshold) = threshold_from_env("PASS_PLUS_COMPUTER_QFM_THRESHOLD")? {
            policy.computer_quotient_threshold = threshold;
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            policy,
        })
    }
}

fn threshold_from_env(variable: &'static str) -> Result<Option<u32>, ConfigError> {
    match env::var(variable) {
        Ok(raw) => raw
            .trim()
            .parse::<u32>()
            .map(Some)
            .map_err(|_| ConfigError::InvalidThreshold {
                variable,
                value: raw,
            }),
        Err(_) => Ok(None),
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyTargetRegion,
    InvalidThreshold {
        variable: &'static str,
        value: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyTargetRegion => {
                write!(f, "PASS_PLUS_TARGET_REGION must not be empty")
            }
            ConfigError::InvalidThreshold { variable, value } => {
                write!(f, "{variable} must be a non-negative integer (found '{value}')")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
