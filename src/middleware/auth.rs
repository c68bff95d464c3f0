use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};

use crate::error::{ApiError, ApiResult};

/// 客户端标识请求头
pub const CLIENT_ID_HEADER: &str = "clientid";

/// 给请求附加凭证
///
/// 有令牌时写入 `Authorization: Bearer <token>`，覆盖已有的值，保证每个请求只有一个；
/// 没有令牌时不写，是否需要登录由服务端判断。
pub fn attach_credentials(
    headers: &mut HeaderMap,
    token: Option<&str>,
    client_id: Option<&str>,
) -> ApiResult<()> {
    if let Some(token) = token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| ApiError::InvalidRequest("令牌包含非法字符".into()))?;
        headers.insert(AUTHORIZATION, value);
    }

    if let Some(client_id) = client_id {
        let value = HeaderValue::from_str(client_id)
            .map_err(|_| ApiError::InvalidRequest("clientid 包含非法字符".into()))?;
        headers.insert(CLIENT_ID_HEADER, value);
    }

    Ok(())
}
