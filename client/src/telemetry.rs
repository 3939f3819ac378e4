//! Tracing setup for host applications

use crate::config::AppConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing/logging
///
/// Respects `RUST_LOG` when set. Safe to call more than once; only the first
/// call installs a subscriber.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if AppConfig::is_production() {
            "nutrition_tracker_client=info,reqwest=warn".into()
        } else {
            "nutrition_tracker_client=debug,reqwest=info".into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    let result = if AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        // Pretty logging for development
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
    };

    if result.is_err() {
        tracing::debug!("Tracing subscriber already installed");
    }
}
