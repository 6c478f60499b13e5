use std::env;

use charity_report_core::adapters::config::app_config::AppConfig;
use tracing::{error, info, instrument};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Registry};

mod cli_adapter;
mod service_factory;

use cli_adapter::CliAdapter;
use service_factory::ServiceFactory;

const LOG_FILE: &str = "charity_report.log";

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing()?;
    setup_panic_hook();

    let args: Vec<String> = env::args().collect();

    info!("Starting charity-report CLI");

    let config = AppConfig::load().map_err(|e| format!("{:?}", e))?;
    let services = ServiceFactory::create(&config)
        .await
        .map_err(|e| format!("{:?}", e))?;
    let cli_adapter = CliAdapter::new(services);

    match cli_adapter.run(args).await {
        Ok(_) => {
            info!("CLI execution completed successfully");
            Ok(())
        }
        Err(e) => {
            error!("CLI execution failed: {:?}", e);
            Err(e)
        }
    }
}

fn setup_tracing() -> Result<(), Box<dyn std::error::Error>> {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let log_file_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::fs::File::create(LOG_FILE)?)
        .with_ansi(false);

    Registry::default()
        .with(
            tracing_subscriber::filter::Targets::new()
                .with_target("charity_report", tracing::Level::TRACE)
                .with_target("charity_report_core", tracing::Level::TRACE),
        )
        .with(log_file_layer)
        .with(console_layer)
        .init();

    Ok(())
}

fn setup_panic_hook() {
    tracing::trace!("Setting panic hook");
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}
