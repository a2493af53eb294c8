//! Tracing and observability module.
//!
//! Provides tracing and log output for the catalog service.

/// Tracer configuration and initialization.
pub mod tracer;
