use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ApiResult;

/// 请求参数形态
#[derive(Debug, Clone, PartialEq)]
pub enum Params {
    None,
    /// 拼到 URL 查询串
    Query(Value),
    /// JSON 请求体
    Body(Value),
}

impl Params {
    pub fn query<T: Serialize>(value: &T) -> ApiResult<Self> {
        Ok(Params::Query(serde_json::to_value(value)?))
    }

    pub fn body<T: Serialize>(value: &T) -> ApiResult<Self> {
        Ok(Params::Body(serde_json::to_value(value)?))
    }
}

/// 结果在响应里的位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ResultShape {
    /// `{code, msg, data}`，结果是 data
    #[default]
    Data,
    /// `{code, msg, rows, total}`，结果是 rows + total
    Table,
}

/// 一个远端接口的类型化描述
///
/// 只描述方法、路径、参数和结果类型，不做任何 IO，由 [`ApiClient`](crate::api::ApiClient) 统一执行。
pub trait Operation {
    type Output: DeserializeOwned;

    fn method(&self) -> Method;

    fn path(&self) -> String;

    fn params(&self) -> ApiResult<Params> {
        Ok(Params::None)
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Data
    }
}
