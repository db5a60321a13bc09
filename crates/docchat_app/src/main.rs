mod app;
mod effects;
mod logging;
mod settings;
mod ui;
mod upload;

use std::path::PathBuf;

use client_logging::client_info;

fn main() -> anyhow::Result<()> {
    logging::initialize(logging::LogDestination::File);

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let settings = settings::load(&cwd);
    client_info!("docchat starting against {}", settings.base_url);

    app::run(settings)
}
