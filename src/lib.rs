use api::{ApiClient, HttpTransport};
use config::Config;
use session::SessionStore;

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod result;
pub mod session;
pub mod utils;

pub use error::{ApiError, ApiResult, StorageError};
pub use result::PaginatedResponse;

/// 控制台运行时依赖：配置、会话存储和请求执行器
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub session: SessionStore,
    pub client: ApiClient<HttpTransport>,
}

impl AppState {
    pub fn from_config(config: Config) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let session = SessionStore::from_config(&config)?;
        let client = ApiClient::from_config(&config, session.clone())?;
        Ok(Self {
            config,
            session,
            client,
        })
    }
}
