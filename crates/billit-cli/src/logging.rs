use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "BILLIT_LOG";
const DEFAULT_DIRECTIVE: &str = "warn";

/// Logs go to stderr so `--json` output on stdout stays parseable.
pub fn init() {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
