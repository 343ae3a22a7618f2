pub mod config;
pub mod generate_icons;
pub mod module_config;

pub fn setup_logger(verbose: bool) -> eyre::Result<()> {
    use tracing::Level;
    use tracing_subscriber::{
        filter::LevelFilter, fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, Registry,
    };

    let level = if verbose { Level::DEBUG } else { Level::INFO };
    Registry::default()
        .with(LevelFilter::from(level))
        .with(layer().with_ansi(true).with_target(false).without_time())
        .try_init()?;
    Ok(())
}
