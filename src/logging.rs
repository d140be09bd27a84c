use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the stderr subscriber. `RUST_LOG` wins over `verbose` when set.
pub fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose {
        "transit_network=debug"
    } else {
        "transit_network=warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .try_init()?;

    Ok(())
}
