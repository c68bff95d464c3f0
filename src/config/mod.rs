use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// 令牌存储后端类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStoreKind {
    Memory,
    File,
    Redis,
}

impl TokenStoreKind {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Some(TokenStoreKind::Memory),
            "file" => Some(TokenStoreKind::File),
            "redis" => Some(TokenStoreKind::Redis),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub client_id: Option<String>,
    pub request_timeout_secs: u64,
    pub token_store: TokenStoreKind,
    pub token_file: PathBuf,
    pub redis_url: Option<String>,
    pub token_key_prefix: Option<String>,
}

const DEFAULT_TIMEOUT_SECS: u64 = 50;
const DEFAULT_TOKEN_FILE: &str = ".admin-console/storage.json";

impl Config {
    pub fn from_env() -> Result<Self, env::VarError> {
        dotenv::dotenv().ok();

        let token_store = match env::var("TOKEN_STORE") {
            Ok(value) => TokenStoreKind::parse(&value).unwrap_or_else(|| {
                tracing::warn!("Unknown TOKEN_STORE {:?}, falling back to file", value);
                TokenStoreKind::File
            }),
            Err(_) => TokenStoreKind::File,
        };

        Ok(Config {
            api_base_url: env::var("API_BASE_URL")?,
            client_id: env::var("CLIENT_ID").ok().filter(|s| !s.is_empty()),
            request_timeout_secs: env::var("REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
            token_store,
            token_file: env::var("TOKEN_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_TOKEN_FILE)),
            redis_url: env::var("REDIS_URL").ok(),
            token_key_prefix: env::var("TOKEN_KEY_PREFIX").ok().filter(|s| !s.is_empty()),
        })
    }

    /// 仅指定接口地址，其余取默认值
    pub fn with_base_url(api_base_url: impl Into<String>) -> Self {
        Config {
            api_base_url: api_base_url.into(),
            client_id: None,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            token_store: TokenStoreKind::Memory,
            token_file: PathBuf::from(DEFAULT_TOKEN_FILE),
            redis_url: None,
            token_key_prefix: None,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
