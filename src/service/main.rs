use clap::Parser;
use std::sync::Arc;

use tutorials::config::{Settings, StoreBackend};
use tutorials::http::{cors_layer, http_router};
use tutorials::persistence::memory::MemoryTutorialIndex;
use tutorials::services::TutorialService;
use tutorials::telemetry;
use tutorials_core::{IdentityProbe, ObjectStore};
use tutorials_memory_store::{MemoryIdentityProbe, MemoryObjectStore};
use tutorials_s3_store::{load_sdk_config, S3ObjectStore, StsIdentityProbe};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = Settings::parse();

    telemetry::init_tracing(&settings.service_name, settings.jaeger_enabled)?;

    let (store, identity_probe): (Arc<dyn ObjectStore>, Arc<dyn IdentityProbe>) =
        match settings.store_backend {
            StoreBackend::S3 => {
                let sdk_config = load_sdk_config(
                    settings.aws_region.as_deref(),
                    settings.aws_endpoint_url.as_deref(),
                )
                .await;

                let store: Arc<dyn ObjectStore> = Arc::new(S3ObjectStore::new(
                    &sdk_config,
                    &settings.bucket_name,
                    settings.s3_force_path_style,
                ));
                let identity_probe: Arc<dyn IdentityProbe> =
                    Arc::new(StsIdentityProbe::new(&sdk_config));

                (store, identity_probe)
            }
            StoreBackend::Memory => {
                tracing::warn!("using in-memory object store, tutorials will not survive restart");

                let store: Arc<dyn ObjectStore> = Arc::new(MemoryObjectStore::new());
                let identity_probe: Arc<dyn IdentityProbe> = Arc::new(MemoryIdentityProbe::local());

                (store, identity_probe)
            }
        };

    let tutorial_service = Arc::new(
        TutorialService::new(
            store,
            identity_probe,
            Box::new(MemoryTutorialIndex::default()),
        )
        .with_storage_timeout(settings.storage_timeout()),
    );

    match tutorial_service.describe_caller().await {
        Ok(identity) => tracing::info!("running as {}", identity),
        Err(err) => tracing::warn!("could not determine caller identity: {:#}", err),
    }

    if settings.seed_ids_from_store {
        tutorial_service.seed_from_store().await?;
    }

    let router = http_router(
        Arc::clone(&tutorial_service),
        cors_layer(&settings.cors_allowed_origin)?,
    );

    tracing::info!(
        "http service listening on {} (bucket {})",
        settings.endpoint,
        settings.bucket_name
    );

    axum::Server::bind(&settings.endpoint)
        .serve(router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    telemetry::shutdown_tracing();

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", err);
        std::future::pending::<()>().await;
    }

    tracing::info!("shutdown signal received");
}
