// ABOUTME: Builder pattern implementation for CmaClient configuration
// ABOUTME: Provides type-safe configuration for base URL, timeout, and API key

use secrecy::SecretString;
use std::time::Duration;
use typed_builder::TypedBuilder;

use crate::constants::http;
use crate::error::CmaError;
use crate::CmaClient;

#[derive(Debug, TypedBuilder)]
#[builder(build_method(into = Result<CmaClient, CmaError>))]
pub struct CmaClientConfig {
    /// API key for the open access API. Accepted for forward compatibility;
    /// the upstream API does not implement authentication and the key is
    /// never transmitted.
    #[builder(default = None)]
    pub api_key: Option<SecretString>,

    #[builder(default = http::REQUEST_TIMEOUT)]
    pub timeout: Duration,

    #[builder(default = None)]
    pub base_url: Option<String>,
}

impl From<CmaClientConfig> for Result<CmaClient, CmaError> {
    fn from(config: CmaClientConfig) -> Self {
        CmaClient::from_config(config)
    }
}

impl CmaClient {
    pub fn builder() -> CmaClientConfigBuilder<((), (), ())> {
        CmaClientConfig::builder()
    }
}
