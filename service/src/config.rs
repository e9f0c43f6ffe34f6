use std::sync::Arc;

use crate::ServiceError;
use async_trait::async_trait;
use mockall::automock;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// IANA name of the timezone the cabin calendar lives in.
    pub timezone: Arc<str>,
    pub server_address: Arc<str>,
    pub database_url: Arc<str>,
}

#[automock]
#[async_trait]
pub trait ConfigService {
    async fn get_config(&self) -> Result<Config, ServiceError>;
}
