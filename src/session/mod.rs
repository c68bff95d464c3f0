// 会话存储
// 负责登录令牌的持久化

pub mod backend;
pub mod keys;
pub mod redis_backend;
pub mod store;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use redis_backend::RedisBackend;
pub use store::SessionStore;
