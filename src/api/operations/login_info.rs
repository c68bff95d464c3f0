// 登录日志接口

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::api::client::ApiClient;
use crate::api::models::login_info::{LoginInfoQuery, LoginInfoRecord};
use crate::api::operation::{Operation, Params, ResultShape};
use crate::api::transport::Transport;
use crate::error::{ApiError, ApiResult};
use crate::result::PaginatedResponse;
use crate::utils::{check_path_segment, encode_path_segment};

const BASE_PATH: &str = "/monitor/logininfor";

/// 分页查询登录日志
#[derive(Debug, Clone, Copy)]
pub struct ListLoginInfo<'a> {
    pub query: &'a LoginInfoQuery,
}

impl Operation for ListLoginInfo<'_> {
    type Output = PaginatedResponse<LoginInfoRecord>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("{}/list", BASE_PATH)
    }

    fn params(&self) -> ApiResult<Params> {
        Params::query(self.query)
    }

    fn shape(&self) -> ResultShape {
        ResultShape::Table
    }
}

/// 批量删除登录日志
#[derive(Debug, Clone)]
pub struct DeleteLoginInfo {
    pub ids: Vec<String>,
}

impl Operation for DeleteLoginInfo {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        let ids = self
            .ids
            .iter()
            .map(|id| encode_path_segment(id))
            .collect::<Vec<_>>()
            .join(",");
        format!("{}/{}", BASE_PATH, ids)
    }

    fn params(&self) -> ApiResult<Params> {
        if self.ids.is_empty() {
            return Err(ApiError::InvalidRequest("至少选择一条日志".into()));
        }
        for id in &self.ids {
            check_path_segment(id)?;
        }
        Ok(Params::None)
    }
}

/// 清空登录日志
#[derive(Debug, Clone, Copy, Default)]
pub struct CleanLoginInfo;

impl Operation for CleanLoginInfo {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("{}/clean", BASE_PATH)
    }
}

/// 解锁因多次密码错误被锁定的账号
#[derive(Debug, Clone)]
pub struct UnlockLoginInfo {
    pub user_name: String,
}

impl Operation for UnlockLoginInfo {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        format!("{}/unlock/{}", BASE_PATH, encode_path_segment(&self.user_name))
    }

    fn params(&self) -> ApiResult<Params> {
        check_path_segment(&self.user_name)?;
        Ok(Params::None)
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn list_login_info(
        &self,
        query: &LoginInfoQuery,
    ) -> ApiResult<PaginatedResponse<LoginInfoRecord>> {
        self.execute(&ListLoginInfo { query }).await
    }

    pub async fn delete_login_info(&self, ids: Vec<String>) -> ApiResult<()> {
        self.execute(&DeleteLoginInfo { ids }).await.map(|_| ())
    }

    pub async fn clean_login_info(&self) -> ApiResult<()> {
        self.execute(&CleanLoginInfo).await.map(|_| ())
    }

    pub async fn unlock_login_info(&self, user_name: impl Into<String>) -> ApiResult<()> {
        self.execute(&UnlockLoginInfo {
            user_name: user_name.into(),
        })
        .await
        .map(|_| ())
    }
}
