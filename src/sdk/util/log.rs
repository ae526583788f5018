use env_logger::{Builder, Env};

/// Initializes env_logger honoring `RUST_LOG`, defaulting to `info`.
pub fn init_logging() {
    Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp_secs()
        .format_target(false)
        .init();
}
