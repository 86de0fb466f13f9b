use crate::helpers::ValidationPolicy;
use crate::models::PriceFilterMode;
use serde;

#[derive(Debug, Clone, serde::Deserialize)]
pub struct Settings {
    pub app_port: u16,
    pub app_host: String,
    #[serde(default)]
    pub storage: StorageKind,
    pub database: DatabaseSettings,
    #[serde(default)]
    pub product: ProductSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKind {
    #[default]
    Postgres,
    Memory,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct DatabaseSettings {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub database_name: String,
}

#[derive(Debug, Clone, Copy, Default, serde::Deserialize)]
pub struct ProductSettings {
    #[serde(default)]
    pub validation: ValidationPolicy,
    #[serde(default)]
    pub price_filter: PriceFilterMode,
}

impl DatabaseSettings {
    // Connection string: postgresql://<username>:<password>@<host>:<port>/<database_name>
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database_name,
        )
    }
}

pub fn get_configuration() -> Result<Settings, config::ConfigError> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // `configuration.yaml` first, then APP__* variables, e.g. APP__PRODUCT__VALIDATION=lenient
    let mut builder = config::Config::builder()
        .add_source(config::File::with_name("configuration"))
        .add_source(config::Environment::with_prefix("APP").separator("__"));

    if let Ok(port) = std::env::var("PORT") {
        builder = builder.set_override("app_port", port)?;
    }

    builder.build()?.try_deserialize()
}
