use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber.
///
/// Call once at the start of `main`. The level comes from `RUST_LOG`
/// (e.g. `RUST_LOG=debug`) and defaults to `info`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Err(err) = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
    {
        eprintln!("Failed to initialize logger: {}", err);
    }
}
