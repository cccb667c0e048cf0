//! Structured logging, request tracing and Prometheus metrics.

mod logging;
mod metrics;
mod request;
mod routes;

pub(crate) use logging::init_subscriber;
pub(crate) use metrics::{metrics_handler, observe_checkout};
pub(crate) use request::RequestLogging;
