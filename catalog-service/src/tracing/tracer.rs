use std::error::Error;

use opentelemetry::{KeyValue, global};
use opentelemetry_sdk::{Resource, propagation::TraceContextPropagator, trace::SdkTracerProvider};
use opentelemetry_stdout::SpanExporter;
use tracing_subscriber::{EnvFilter, fmt::format::Format, prelude::*};

use crate::config::{DistributionConfig, TracingConfig};

/// Tracer configuration and initialization.
///
/// Handles setting up log output and span export for the catalog service.
pub struct Tracer;

impl Tracer {
    /// Installs the global subscriber selected by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn install(
        config: &TracingConfig,
        distribution: &DistributionConfig,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        match config {
            TracingConfig::Memory => Self::install_fmt(),
            TracingConfig::Stdout => Self::install_stdout(distribution),
        }
    }

    /// Installs stdout tracing with OpenTelemetry.
    ///
    /// # Errors
    ///
    /// Returns an error if tracer initialization fails.
    pub fn install_stdout(
        distribution: &DistributionConfig,
    ) -> Result<(), Box<dyn Error + Send + Sync>> {
        global::set_text_map_propagator(TraceContextPropagator::new());

        let mut resource = Resource::builder().with_service_name(distribution.name.clone());
        if let Some(version) = distribution.version.clone() {
            resource = resource.with_attribute(KeyValue::new("version", version));
        }

        let provider = SdkTracerProvider::builder()
            .with_resource(resource.build())
            .with_simple_exporter(SpanExporter::default())
            .build();
        global::set_tracer_provider(provider);

        Self::install_fmt()
    }

    fn install_fmt() -> Result<(), Box<dyn Error + Send + Sync>> {
        let layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().pretty())
            .with_filter(EnvFilter::from_default_env());

        tracing_subscriber::registry().with(layer).try_init()?;

        Ok(())
    }
}
