use thiserror::Error;

/// 请求层统一错误
///
/// 调用方只需要区分两类远端失败：凭证失效（需要重新登录）和其他失败。
#[derive(Debug, Error)]
pub enum ApiError {
    /// 服务端拒绝了凭证（HTTP 401 或业务码 401）
    #[error("未授权访问，请重新登录")]
    Unauthenticated,

    /// 其他传输层或服务端失败，status 为 HTTP 状态码或业务码
    #[error("请求失败({}): {message}", .status.map(|s| s.to_string()).unwrap_or_else(|| "-".into()))]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    /// 请求在发送前就被拒绝（参数校验或序列化失败）
    #[error("请求参数无效: {0}")]
    InvalidRequest(String),
}

impl ApiError {
    pub fn request_failed(status: Option<u16>, message: impl Into<String>) -> Self {
        ApiError::RequestFailed {
            status,
            message: message.into(),
        }
    }

    pub fn is_unauthenticated(&self) -> bool {
        matches!(self, ApiError::Unauthenticated)
    }

    /// 对应的 HTTP 状态码
    ///
    /// Unauthenticated 固定为 401；RequestFailed 在传输层失败时没有状态码；本地校验失败为 None。
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthenticated => Some(401),
            ApiError::RequestFailed { status, .. } => *status,
            ApiError::InvalidRequest(_) => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::InvalidRequest(e.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// 令牌存储后端错误，只在会话存储内部处理，不会传给调用方
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("存储不可用: {0}")]
    Unavailable(String),

    #[error("存储内容损坏: {0}")]
    Corrupted(String),
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Unavailable(e.to_string())
    }
}

impl From<redis::RedisError> for StorageError {
    fn from(e: redis::RedisError) -> Self {
        StorageError::Unavailable(e.to_string())
    }
}
