use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Installs the global subscriber: env-filtered fmt output, plus a Jaeger
/// exporter when enabled.
pub fn init_tracing(service_name: &str, jaeger_enabled: bool) -> anyhow::Result<()> {
    let otel_layer = if jaeger_enabled {
        let tracer = opentelemetry_jaeger::new_agent_pipeline()
            .with_service_name(service_name)
            .install_simple()?;

        Some(tracing_opentelemetry::layer().with_tracer(tracer))
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(otel_layer)
        .with(tracing_subscriber::fmt::layer())
        .try_init()?;

    Ok(())
}

pub fn shutdown_tracing() {
    opentelemetry::global::shutdown_tracer_provider();
}
