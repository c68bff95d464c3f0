use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::{ApiError, ApiResult};

pub mod error_codes {
    pub const SUCCESS: i32 = 200;
    pub const UNAUTHORIZED: i32 = 401;
    pub const FORBIDDEN: i32 = 403;
    pub const INTERNAL_ERROR: i32 = 500;
    /// 业务警告，例如验证码错误
    pub const WARN: i32 = 601;
}

/// 把查询对象展开成 `key=value` 对
///
/// null 跳过，嵌套对象展开为 `outer[inner]`，数组用逗号连接。
pub fn flatten_query(value: &Value) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    if let Value::Object(map) = value {
        for (key, v) in map {
            push_pair(&mut pairs, key.clone(), v);
        }
    }
    pairs
}

fn push_pair(pairs: &mut Vec<(String, String)>, key: String, value: &Value) {
    match value {
        Value::Null => {}
        Value::String(s) => pairs.push((key, s.clone())),
        Value::Bool(b) => pairs.push((key, b.to_string())),
        Value::Number(n) => pairs.push((key, n.to_string())),
        Value::Array(items) => {
            let joined = items
                .iter()
                .filter_map(|item| match item {
                    Value::Null => None,
                    Value::String(s) => Some(s.clone()),
                    other => Some(other.to_string()),
                })
                .collect::<Vec<_>>()
                .join(",");
            pairs.push((key, joined));
        }
        Value::Object(map) => {
            for (inner, v) in map {
                push_pair(pairs, format!("{}[{}]", key, inner), v);
            }
        }
    }
}

/// 校验将要拼进 URL 路径的单个片段，空串和 `.`/`..` 会改变路径层级
pub fn check_path_segment(raw: &str) -> ApiResult<()> {
    if raw.is_empty() || raw == "." || raw == ".." {
        return Err(ApiError::InvalidRequest(format!("无效的路径参数: {:?}", raw)));
    }
    Ok(())
}

/// 百分号编码单个路径片段，`/`、`#`、`?` 等都会被转义
pub fn encode_path_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

/// 后端的 Long 主键可能序列化为字符串，也可能是数字
pub fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Id::deserialize(deserializer)? {
        Id::Text(s) => s,
        Id::Int(n) => n.to_string(),
    })
}

pub fn option_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Id {
        Text(String),
        Int(i64),
    }

    Ok(match Option::<Id>::deserialize(deserializer)? {
        Some(Id::Text(s)) => Some(s),
        Some(Id::Int(n)) => Some(n.to_string()),
        None => None,
    })
}

/// 后端时间格式 `yyyy-MM-dd HH:mm:ss`
pub mod datetime_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(value: &Option<NaiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(dt) => serializer.serialize_str(&dt.format(FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(s) if !s.is_empty() => NaiveDateTime::parse_from_str(&s, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
            _ => Ok(None),
        }
    }
}
