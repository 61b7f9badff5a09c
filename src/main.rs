use adved::{Catalog, EmbeddedCatalog};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = Catalog::load(&EmbeddedCatalog)?;
    adved::run_gui(catalog).map_err(|e| anyhow::anyhow!("GUI exited with error: {e}"))
}
