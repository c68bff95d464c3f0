use std::sync::Arc;

use crate::config::{Config, TokenStoreKind};
use crate::error::StorageError;
use crate::session::backend::{FileBackend, MemoryBackend, StorageBackend};
use crate::session::keys::token_key;
use crate::session::redis_backend::RedisBackend;

/// 会话存储：当前登录令牌的唯一持有者
///
/// 后端读写失败不会传给调用方。读失败按"没有令牌"处理，写失败只记录日志。
#[derive(Clone)]
pub struct SessionStore {
    backend: Arc<dyn StorageBackend>,
    key: String,
}

impl SessionStore {
    pub fn new(backend: impl StorageBackend + 'static) -> Self {
        Self::with_prefix(backend, None)
    }

    pub fn with_prefix(backend: impl StorageBackend + 'static, prefix: Option<&str>) -> Self {
        Self {
            backend: Arc::new(backend),
            key: token_key(prefix),
        }
    }

    /// 按配置选择存储后端
    pub fn from_config(config: &Config) -> Result<Self, StorageError> {
        let prefix = config.token_key_prefix.as_deref();
        let store = match config.token_store {
            TokenStoreKind::Memory => Self::with_prefix(MemoryBackend::new(), prefix),
            TokenStoreKind::File => {
                Self::with_prefix(FileBackend::new(config.token_file.clone()), prefix)
            }
            TokenStoreKind::Redis => {
                let url = config.redis_url.as_deref().ok_or_else(|| {
                    StorageError::Unavailable("TOKEN_STORE=redis requires REDIS_URL".into())
                })?;
                Self::with_prefix(RedisBackend::open(url)?, prefix)
            }
        };
        tracing::debug!("Session store: {:?}, key {}", config.token_store, store.key);
        Ok(store)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// 获取当前令牌
    pub async fn get_token(&self) -> Option<String> {
        match self.backend.get(&self.key).await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!("读取令牌失败，按未登录处理: {}", e);
                None
            }
        }
    }

    /// 保存令牌，覆盖旧值
    pub async fn set_token(&self, token: &str) {
        if let Err(e) = self.backend.set(&self.key, token).await {
            tracing::warn!("保存令牌失败: {}", e);
        }
    }

    /// 删除令牌，可重复调用
    pub async fn remove_token(&self) {
        if let Err(e) = self.backend.remove(&self.key).await {
            tracing::warn!("删除令牌失败: {}", e);
        }
    }

    pub async fn has_token(&self) -> bool {
        self.get_token().await.is_some()
    }
}
