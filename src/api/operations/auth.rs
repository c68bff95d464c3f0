// 登录认证接口

use reqwest::Method;
use serde::de::IgnoredAny;

use crate::api::client::ApiClient;
use crate::api::models::auth::{LoginForm, LoginResult, VerifyCodeChallenge};
use crate::api::models::user::UserInfo;
use crate::api::operation::{Operation, Params};
use crate::api::transport::Transport;
use crate::error::ApiResult;

/// 获取验证码
#[derive(Debug, Clone, Copy, Default)]
pub struct GetCodeImg;

impl Operation for GetCodeImg {
    type Output = VerifyCodeChallenge;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/auth/code".to_string()
    }
}

/// 账号密码登录
#[derive(Debug, Clone, Copy)]
pub struct Login<'a> {
    pub form: &'a LoginForm,
}

impl Operation for Login<'_> {
    type Output = LoginResult;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn params(&self) -> ApiResult<Params> {
        Params::body(self.form)
    }
}

/// 退出登录
#[derive(Debug, Clone, Copy, Default)]
pub struct Logout;

impl Operation for Logout {
    type Output = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/auth/logout".to_string()
    }
}

/// 当前用户信息
#[derive(Debug, Clone, Copy, Default)]
pub struct GetInfo;

impl Operation for GetInfo {
    type Output = UserInfo;

    fn method(&self) -> Method {
        Method::GET
    }

    fn path(&self) -> String {
        "/system/user/getInfo".to_string()
    }
}

impl<T: Transport> ApiClient<T> {
    pub async fn get_code_img(&self) -> ApiResult<VerifyCodeChallenge> {
        self.execute(&GetCodeImg).await
    }

    /// 登录成功后保存令牌
    pub async fn login(&self, form: &LoginForm) -> ApiResult<LoginResult> {
        let result = match (&form.client_id, self.client_id()) {
            (None, Some(client_id)) => {
                let form = form.clone().with_client_id(client_id);
                self.execute(&Login { form: &form }).await?
            }
            _ => self.execute(&Login { form }).await?,
        };

        self.session().set_token(&result.access_token).await;
        tracing::info!("用户 {} 登录成功", form.username);
        Ok(result)
    }

    /// 无论服务端是否成功，本地令牌都会被删除
    pub async fn logout(&self) -> ApiResult<()> {
        let result = self.execute(&Logout).await.map(|_| ());
        self.session().remove_token().await;
        if let Err(e) = &result {
            tracing::warn!("服务端退出失败，本地令牌已清除: {}", e);
        }
        result
    }

    pub async fn get_info(&self) -> ApiResult<UserInfo> {
        self.execute(&GetInfo).await
    }
}
