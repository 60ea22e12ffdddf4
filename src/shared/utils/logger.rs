use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize the logging system.
///
/// Must be called once at startup. Logs go to stderr because stdout is the
/// protocol channel for the tool server.
pub fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| EnvFilter::new("info,pricelens=debug")),
            )
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    });
}
