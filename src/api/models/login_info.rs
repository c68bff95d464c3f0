use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::api::models::common::{DateRange, PageQuery, SortOrder};
use crate::utils::{datetime_format, option_string_or_number, string_or_number};

/// 登录状态：成功
pub const STATUS_SUCCESS: &str = "0";
/// 登录状态：失败
pub const STATUS_FAILURE: &str = "1";

/// 登录日志查询条件，所有过滤字段缺省即不过滤
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfoQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ipaddr: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by_column: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_asc: Option<SortOrder>,
    /// 登录时间范围，发送为 `params[beginTime]` / `params[endTime]`
    #[serde(rename = "params", skip_serializing_if = "Option::is_none")]
    pub date_range: Option<DateRange>,
}

impl LoginInfoQuery {
    pub fn new(page: PageQuery) -> Self {
        Self {
            page,
            ..Default::default()
        }
    }

    pub fn ipaddr(mut self, ipaddr: impl Into<String>) -> Self {
        self.ipaddr = Some(ipaddr.into());
        self
    }

    pub fn user_name(mut self, user_name: impl Into<String>) -> Self {
        self.user_name = Some(user_name.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn order_by(mut self, column: impl Into<String>, order: SortOrder) -> Self {
        self.order_by_column = Some(column.into());
        self.is_asc = Some(order);
        self
    }

    pub fn date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }
}

/// 登录日志
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginInfoRecord {
    #[serde(deserialize_with = "string_or_number")]
    pub info_id: String,
    #[serde(
        default,
        deserialize_with = "option_string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub tenant_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_type: Option<String>,
    /// "0" 成功，"1" 失败
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipaddr: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub browser: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub os: Option<String>,
    #[serde(default, with = "datetime_format", skip_serializing_if = "Option::is_none")]
    pub login_time: Option<NaiveDateTime>,
}

impl LoginInfoRecord {
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some(STATUS_SUCCESS)
    }
}
