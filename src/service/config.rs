use clap::{Parser, ValueEnum};
use std::{net::SocketAddr, time::Duration};

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum StoreBackend {
    S3,
    Memory,
}

/// Service settings. Every option can also be set through the environment,
/// including a `.env` file in the working directory.
#[derive(Clone, Debug, Parser)]
#[command(name = "api", about = "tutorial storage service", version)]
pub struct Settings {
    /// Bucket holding one JSON object per tutorial.
    #[arg(long, env = "BUCKET_NAME")]
    pub bucket_name: String,

    #[arg(long, env = "ENDPOINT", default_value = "0.0.0.0:8080")]
    pub endpoint: SocketAddr,

    #[arg(long, env = "CORS_ALLOWED_ORIGIN", default_value = "http://localhost:8081")]
    pub cors_allowed_origin: String,

    /// Upper bound on each object storage call, in milliseconds.
    #[arg(long, env = "STORAGE_TIMEOUT_MS", default_value_t = 10_000)]
    pub storage_timeout_ms: u64,

    #[arg(long, env = "STORE_BACKEND", value_enum, default_value = "s3")]
    pub store_backend: StoreBackend,

    #[arg(long, env = "AWS_REGION")]
    pub aws_region: Option<String>,

    /// Alternate endpoint for S3-compatible stores.
    #[arg(long, env = "AWS_ENDPOINT_URL")]
    pub aws_endpoint_url: Option<String>,

    #[arg(long, env = "S3_FORCE_PATH_STYLE")]
    pub s3_force_path_style: bool,

    /// Start minting ids after the highest id already in the bucket.
    #[arg(long, env = "SEED_IDS_FROM_STORE", default_value_t = true, action = clap::ArgAction::Set)]
    pub seed_ids_from_store: bool,

    #[arg(long, env = "JAEGER_ENABLED")]
    pub jaeger_enabled: bool,

    #[arg(long, env = "SERVICE_NAME", default_value = "tutorials")]
    pub service_name: String,
}

impl Settings {
    pub fn storage_timeout(&self) -> Duration {
        Duration::from_millis(self.storage_timeout_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::try_parse_from(["api", "--bucket-name", "tutorials-bucket"]).unwrap();

        assert_eq!(settings.bucket_name, "tutorials-bucket");
        assert_eq!(settings.endpoint, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(settings.cors_allowed_origin, "http://localhost:8081");
        assert_eq!(settings.storage_timeout(), Duration::from_secs(10));
        assert_eq!(settings.store_backend, StoreBackend::S3);
        assert!(settings.seed_ids_from_store);
        assert!(!settings.s3_force_path_style);
    }

    #[test]
    fn test_overrides() {
        let settings = Settings::try_parse_from([
            "api",
            "--bucket-name",
            "local",
            "--store-backend",
            "memory",
            "--storage-timeout-ms",
            "250",
            "--seed-ids-from-store",
            "false",
            "--endpoint",
            "127.0.0.1:3000",
        ])
        .unwrap();

        assert_eq!(settings.store_backend, StoreBackend::Memory);
        assert_eq!(settings.storage_timeout(), Duration::from_millis(250));
        assert!(!settings.seed_ids_from_store);
        assert_eq!(settings.endpoint.port(), 3000);
    }
}
