use product_catalog::configuration::{DatabaseSettings, ProductSettings, Settings, StorageKind};
use product_catalog::db::{InMemoryProductStore, ProductStore};
use product_catalog::helpers::ValidationPolicy;
use product_catalog::models::PriceFilterMode;
use std::sync::Arc;

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
}

impl TestApp {
    pub async fn post_product(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client
            .post(&format!("{}/product", &self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn list_products(&self, query: &str) -> reqwest::Response {
        self.client
            .get(&format!("{}/products{}", &self.address, query))
            .send()
            .await
            .expect("Failed to execute request.")
    }
}

pub fn test_settings(validation: ValidationPolicy, price_filter: PriceFilterMode) -> Settings {
    Settings {
        app_port: 0,
        app_host: "127.0.0.1".to_string(),
        storage: StorageKind::Memory,
        database: DatabaseSettings {
            username: "postgres".to_string(),
            password: "postgres".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5432,
            database_name: "products".to_string(),
        },
        product: ProductSettings {
            validation,
            price_filter,
        },
    }
}

pub async fn spawn_app_with_configuration(configuration: Settings) -> TestApp {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let store: Arc<dyn ProductStore> = Arc::new(InMemoryProductStore::new());
    let server = product_catalog::startup::run(listener, store, configuration)
        .await
        .expect("Failed to bind address.");

    let _ = tokio::spawn(server);

    TestApp {
        address,
        client: reqwest::Client::new(),
    }
}

pub async fn spawn_app() -> TestApp {
    spawn_app_with_configuration(test_settings(
        ValidationPolicy::Strict,
        PriceFilterMode::ExcludeEqual,
    ))
    .await
}
