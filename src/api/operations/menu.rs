use reqwest::Method;

use crate::api::client::ApiClient;
use crate::api::models::menu::RouteRecord;
use crate::api::operation::Operation;
use crate::api::transport::Transport;
use crate::error::ApiResult;

/// 获取当前用户的路由/菜单
#[derive(Debug, Clone, Copy, Default)]
pub struct GetRouters;

impl Operation for GetRouters {
    type Output = Vec<RouteRecord>;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/system/menu/getRouters".to_string()
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn get_routers(&self) -> ApiResult<Vec<RouteRecord>> {
        self.execute(&GetRouters).await
    }
}
