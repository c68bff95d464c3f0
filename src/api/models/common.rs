// 通用的查询结构定义

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

use crate::error::{ApiError, ApiResult};

/// 分页参数
///
/// 页码从 1 开始，每页数量大于 0，只能通过 [`PageQuery::new`] 构造。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    page_num: u32,
    page_size: u32,
}

impl PageQuery {
    pub const DEFAULT_PAGE_SIZE: u32 = 10;

    pub fn new(page_num: u32, page_size: u32) -> ApiResult<Self> {
        if page_num < 1 {
            return Err(ApiError::InvalidRequest(format!(
                "页码必须大于等于 1，实际为 {}",
                page_num
            )));
        }
        if page_size == 0 {
            return Err(ApiError::InvalidRequest("每页数量必须大于 0".into()));
        }
        Ok(Self {
            page_num,
            page_size,
        })
    }

    pub fn page_num(&self) -> u32 {
        self.page_num
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// 下一页，页码溢出时返回 None
    pub fn next(&self) -> Option<Self> {
        self.page_num.checked_add(1).map(|page_num| Self {
            page_num,
            page_size: self.page_size,
        })
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page_num: 1,
            page_size: Self::DEFAULT_PAGE_SIZE,
        }
    }
}

/// 排序方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// 按天的时间范围，发送时补齐为当天 00:00:00 到 23:59:59
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    begin: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    pub fn new(begin: NaiveDate, end: NaiveDate) -> ApiResult<Self> {
        if begin > end {
            return Err(ApiError::InvalidRequest(format!(
                "开始日期 {} 晚于结束日期 {}",
                begin, end
            )));
        }
        Ok(Self { begin, end })
    }

    pub fn begin(&self) -> NaiveDate {
        self.begin
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }
}

impl Serialize for DateRange {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Bounds {
            begin_time: String,
            end_time: String,
        }

        Bounds {
            begin_time: format!("{} 00:00:00", self.begin.format("%Y-%m-%d")),
            end_time: format!("{} 23:59:59", self.end.format("%Y-%m-%d")),
        }
        .serialize(serializer)
    }
}
