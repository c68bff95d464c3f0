use reqwest::Method;
use serde_json::Value;
use tracing::{error, warn};

use crate::api::operation::ResultShape;
use crate::api::transport::RawResponse;
use crate::error::{ApiError, ApiResult};
use crate::result::ApiResponse;
use crate::utils::error_codes;

const MAX_LOGGED_BODY: usize = 1024;

/// 把原始响应归类成结果或错误
///
/// HTTP 401 和业务码 401 都算凭证失效；其余非 2xx 状态和非 200 业务码都是 RequestFailed。
pub fn classify_response(
    method: &Method,
    path: &str,
    raw: RawResponse,
    shape: ResultShape,
) -> ApiResult<Value> {
    if raw.status == error_codes::UNAUTHORIZED as u16 {
        warn!("{} {} rejected with 401", method, path);
        return Err(ApiError::Unauthenticated);
    }

    if !raw.is_success() {
        let message = serde_json::from_str::<ApiResponse>(&raw.body)
            .ok()
            .and_then(|r| r.msg)
            .unwrap_or_else(|| format!("HTTP {}", raw.status));

        if raw.status >= 500 {
            error!(
                "Server error occurred - {} {} Status: {}, Body: {}",
                method,
                path,
                raw.status,
                truncate(&raw.body)
            );
        } else {
            warn!("{} {} failed with status {}: {}", method, path, raw.status, message);
        }
        return Err(ApiError::request_failed(Some(raw.status), message));
    }

    if raw.body.trim().is_empty() {
        return Ok(Value::Null);
    }

    let value: Value = serde_json::from_str(&raw.body).map_err(|e| {
        warn!("{} {} returned a non-JSON body: {}", method, path, e);
        ApiError::request_failed(Some(raw.status), format!("响应不是合法的 JSON: {}", e))
    })?;

    // 不是对象的响应（例如直接返回数组）不带业务码，原样返回
    let envelope: ApiResponse = match value {
        Value::Object(map) => serde_json::from_value(Value::Object(map)).map_err(|e| {
            ApiError::request_failed(Some(raw.status), format!("响应格式错误: {}", e))
        })?,
        other => return Ok(other),
    };

    match envelope.code {
        Some(error_codes::UNAUTHORIZED) => {
            warn!("{} {} rejected with business code 401", method, path);
            Err(ApiError::Unauthenticated)
        }
        Some(code) if code != error_codes::SUCCESS => {
            let message = envelope.msg.unwrap_or_else(|| "未知错误".to_string());
            if code >= error_codes::INTERNAL_ERROR && code != error_codes::WARN {
                error!("{} {} failed with business code {}: {}", method, path, code, message);
            } else {
                warn!("{} {} failed with business code {}: {}", method, path, code, message);
            }
            Err(ApiError::request_failed(u16::try_from(code).ok(), message))
        }
        Some(_) => Ok(match shape {
            ResultShape::Data => envelope.into_data(),
            ResultShape::Table => envelope.into_table(),
        }),
        // 没有业务码，说明不是包装格式，整个对象就是结果
        None => Ok(match shape {
            ResultShape::Data if envelope.rest.contains_key("data") => envelope.into_data(),
            _ => envelope.into_table(),
        }),
    }
}

fn truncate(body: &str) -> &str {
    match body.char_indices().nth(MAX_LOGGED_BODY) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
