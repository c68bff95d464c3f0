use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 管理端接口的通用响应包装
///
/// 普通接口把结果放在 `data` 中，分页接口把 `rows`/`total` 与 `code`/`msg` 平铺在同一层，
/// 所以除 `code`/`msg` 之外的字段都收集到 `rest` 里，由调用方按结果形态取用。
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    /// 业务码，200 表示成功；非包装格式的响应没有该字段
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// 分页结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginatedResponse<T> {
    /// 当前页数据
    #[serde(default = "Vec::new")]
    pub rows: Vec<T>,
    /// 总记录数
    #[serde(default)]
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl ApiResponse {
    /// 取出 `data` 字段，缺失时视为 null
    pub fn into_data(mut self) -> Value {
        self.rest.remove("data").unwrap_or(Value::Null)
    }

    /// 分页接口的结果就是去掉 `code`/`msg` 后的整个对象
    pub fn into_table(self) -> Value {
        Value::Object(self.rest)
    }
}
