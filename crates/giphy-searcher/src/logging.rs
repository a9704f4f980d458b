use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(not(debug_assertions))]
const DEFAULT_FILTER: &str = "warn,giphy_searcher=info,giphy_ox=info";
#[cfg(debug_assertions)]
const DEFAULT_FILTER: &str = "warn,giphy_searcher=debug,giphy_ox=debug";

/// Install the global subscriber. `RUST_LOG` replaces the default filter.
///
/// Logs go to stderr so stdout stays free for the result listing.
pub fn init() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(DEFAULT_FILTER))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .try_init()?;

    Ok(())
}
