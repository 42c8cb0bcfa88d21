//! Tracing setup: subscriber initialization and span definitions.

pub mod spans;

use std::sync::Once;

use lexalign_core::config::ObservabilityConfig;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding per-target filter directives.
pub const LOG_ENV_VAR: &str = "LEXALIGN_LOG";

static INIT: Once = Once::new();

/// Initialize tracing with the default level and text output.
///
/// Reads `LEXALIGN_LOG` for per-target levels, for example
/// `LEXALIGN_LOG=lexalign_clustering=debug,lexalign_axis=info`.
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    init_tracing_from_config(&ObservabilityConfig::default());
}

/// Initialize tracing from the `[observability]` config section.
///
/// `LEXALIGN_LOG` wins over `log_level` when set and valid.
pub fn init_tracing_from_config(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

        let registry = tracing_subscriber::registry().with(filter);
        let result = if config.json_logs {
            registry
                .with(fmt::layer().json().with_target(true))
                .try_init()
        } else {
            registry
                .with(fmt::layer().with_target(true).with_line_number(true))
                .try_init()
        };
        // Another subscriber may already be installed by the host application.
        if result.is_err() {
            tracing::debug!("global tracing subscriber already set");
        }
    });
}
