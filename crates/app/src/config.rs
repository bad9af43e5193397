//! Client configuration module

use std::path::PathBuf;

use clap::Args;

use floret_app::api::ShopApiConfig;

/// Floret client configuration
#[derive(Debug, Args)]
pub(crate) struct AppConfig {
    /// Base URL of the flower shop API
    #[arg(
        long,
        env = "FLORET_API_URL",
        default_value = "http://localhost:8080/api"
    )]
    pub(crate) api_url: String,

    /// Bearer token for the wallet and order endpoints
    #[arg(long, env = "FLORET_API_TOKEN", hide_env_values = true)]
    pub(crate) api_token: Option<String>,

    /// Directory holding the persisted cart, favorites and vouchers
    #[arg(long, env = "FLORET_DATA_DIR", default_value = ".floret")]
    pub(crate) data_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "RUST_LOG", default_value = "info")]
    pub(crate) log_level: String,
}

impl AppConfig {
    /// Connection settings for the shop backend
    pub(crate) fn shop_api(&self) -> ShopApiConfig {
        ShopApiConfig {
            base_url: self.api_url.clone(),
            bearer_token: self.api_token.clone(),
        }
    }
}
