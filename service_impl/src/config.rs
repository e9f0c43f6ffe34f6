use std::{env, sync::Arc};

use async_trait::async_trait;
use service::{
    config::{Config, ConfigService},
    ServiceError,
};

pub struct ConfigServiceImpl;

#[async_trait]
impl ConfigService for ConfigServiceImpl {
    async fn get_config(&self) -> Result<Config, ServiceError> {
        let timezone = env::var("TIMEZONE").unwrap_or("Europe/Stockholm".to_string());
        let server_address = env::var("SERVER_ADDRESS").unwrap_or("127.0.0.1:3000".to_string());
        let database_url =
            env::var("DATABASE_URL").unwrap_or("sqlite:./stuga.sqlite3?mode=rwc".to_string());

        Ok(Config {
            timezone: Arc::from(timezone),
            server_address: Arc::from(server_address),
            database_url: Arc::from(database_url),
        })
    }
}
