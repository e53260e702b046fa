//! Backend entry point: loads settings, prepares the record store and serves
//! the REST API.

mod server;

use std::ffi::OsString;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use people_backend::config::PeopleSettings;
use people_backend::outbound::persistence::{DbPool, PoolConfig, run_pending_migrations};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = load_settings(std::env::args_os())?;
    let mut config = ServerConfig::new(settings.bind_addr());

    if let Some(url) = settings.database_url() {
        let migration_url = url.to_owned();
        let applied = web::block(move || run_pending_migrations(&migration_url))
            .await
            .map_err(std::io::Error::other)?
            .map_err(std::io::Error::other)?;
        info!(applied, "database schema ready");

        let pool_config = PoolConfig::new(url).with_max_size(settings.db_max_connections());
        let pool = DbPool::new(pool_config)
            .await
            .map_err(std::io::Error::other)?;
        config = config.with_db_pool(pool);
    }

    create_server(config)?.await
}

fn load_settings<I>(args: I) -> std::io::Result<PeopleSettings>
where
    I: IntoIterator<Item = OsString>,
{
    PeopleSettings::load_from_iter(args)
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))
}
