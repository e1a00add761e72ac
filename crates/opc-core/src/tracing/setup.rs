//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::config::ObservabilityConfig;
use crate::constants::ENV_LOG;

static INIT: Once = Once::new();

/// Initialize logging with the default observability config.
///
/// See [`init_tracing_with`].
pub fn init_tracing() {
    init_tracing_with(&ObservabilityConfig::default());
}

/// Initialize the OPC tracing/logging system.
///
/// Reads `OPC_LOG` for per-target log levels.
/// Format: `OPC_LOG=opc_view=debug,opc_core=warn`
///
/// Falls back to `opc=<config.log_level>` if `OPC_LOG` is not set or is
/// invalid. Only the first call has any effect.
pub fn init_tracing_with(config: &ObservabilityConfig) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(ENV_LOG)
            .unwrap_or_else(|_| EnvFilter::new(format!("opc={}", config.log_level)));

        // A host process may already own the global subscriber.
        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}
