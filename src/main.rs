use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = fnplot::FnPlotConfig::load_or_default();
    tracing::info!("starting fnplot");
    fnplot::run_fnplot(config)
}
