use anyhow::Context;
use product_catalog::configuration::{get_configuration, Settings, StorageKind};
use product_catalog::db::{InMemoryProductStore, PgProductStore, ProductStore};
use product_catalog::startup::run;
use product_catalog::telemetry::{get_subscriber, init_subscriber};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("product-catalog".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber)?;

    let settings = get_configuration().context("Failed to read configuration.")?;
    let store = connect_store(&settings).await?;

    let address = format!("{}:{}", settings.app_host, settings.app_port);
    tracing::info!("Server is starting at http://{}", &address);
    let listener =
        TcpListener::bind(&address).with_context(|| format!("failed to bind to {}", address))?;

    run(listener, store, settings).await?.await?;
    Ok(())
}

async fn connect_store(settings: &Settings) -> anyhow::Result<Arc<dyn ProductStore>> {
    match settings.storage {
        StorageKind::Memory => {
            tracing::warn!("Using in-memory product storage, data is lost on restart");
            Ok(Arc::new(InMemoryProductStore::new()))
        }
        StorageKind::Postgres => {
            tracing::info!(
                db_host = %settings.database.host,
                db_port = settings.database.port,
                db_name = %settings.database.database_name,
                "Connecting to PostgreSQL"
            );

            let connect_options = PgConnectOptions::new()
                .host(&settings.database.host)
                .port(settings.database.port)
                .username(&settings.database.username)
                .password(&settings.database.password)
                .database(&settings.database.database_name)
                .ssl_mode(PgSslMode::Disable);

            let pg_pool = PgPoolOptions::new()
                .max_connections(5)
                .acquire_timeout(Duration::from_secs(30))
                .connect_with(connect_options)
                .await
                .context("DB is not connected")?;
            tracing::info!("DB is connected");

            let store = PgProductStore::new(pg_pool);
            store
                .ensure_schema()
                .await
                .context("Failed to prepare product table")?;
            Ok(Arc::new(store))
        }
    }
}
