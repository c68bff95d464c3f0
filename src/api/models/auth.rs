use serde::{Deserialize, Serialize};

/// 验证码
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyCodeChallenge {
    /// 是否需要验证码
    #[serde(default)]
    pub captcha_enabled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    /// base64 图片
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

impl VerifyCodeChallenge {
    pub fn is_required(&self) -> bool {
        self.captcha_enabled
    }
}

/// 登录表单
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenant_id: Option<String>,
    pub username: String,
    pub password: String,
    pub remember_me: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub grant_type: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            tenant_id: None,
            username: username.into(),
            password: password.into(),
            remember_me: false,
            code: None,
            uuid: None,
            client_id: None,
            grant_type: "password".to_string(),
        }
    }

    pub fn with_tenant(mut self, tenant_id: impl Into<String>) -> Self {
        self.tenant_id = Some(tenant_id.into());
        self
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn remember_me(mut self, remember_me: bool) -> Self {
        self.remember_me = remember_me;
        self
    }

    /// 附上验证码答案，验证码编号取自 challenge
    pub fn with_captcha(mut self, challenge: &VerifyCodeChallenge, code: impl Into<String>) -> Self {
        self.uuid = challenge.uuid.clone();
        self.code = Some(code.into());
        self
    }
}

/// 登录结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResult {
    pub access_token: String,
    /// 有效期（秒），仅供展示，客户端不据此判断过期
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expire_in: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
}
