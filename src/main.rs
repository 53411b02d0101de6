use sitecheck::config::load_config;
use sitecheck::directory::Directory;
use sitecheck::http_probe::prelude::*;
use sitecheck::server::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    let directory = Directory::load(config.directory.file.as_deref())?;
    let prober = Prober::new(&config.probe)?;

    let state = AppState::new(prober, directory, config.sweep.concurrency);
    server::serve(&config, state).await?;

    Ok(())
}
