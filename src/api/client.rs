use std::sync::Arc;

use crate::api::operation::{Operation, Params};
use crate::api::transport::{HttpTransport, OutboundRequest, Transport, TransportError};
use crate::config::Config;
use crate::error::{ApiError, ApiResult};
use crate::middleware::{attach_credentials, classify_response};
use crate::session::SessionStore;
use crate::utils::flatten_query;

/// 共享的请求执行器
///
/// 所有接口都经过 [`ApiClient::execute`]：读取令牌、附加凭证、发送、归类错误、解析结果。
pub struct ApiClient<T = HttpTransport> {
    transport: Arc<T>,
    session: SessionStore,
    client_id: Option<String>,
}

impl<T> Clone for ApiClient<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            session: self.session.clone(),
            client_id: self.client_id.clone(),
        }
    }
}

impl ApiClient<HttpTransport> {
    pub fn from_config(config: &Config, session: SessionStore) -> Result<Self, TransportError> {
        let transport = HttpTransport::from_config(config)?;
        let client = Self::new(transport, session);
        Ok(match &config.client_id {
            Some(client_id) => client.with_client_id(client_id.clone()),
            None => client,
        })
    }
}

impl<T: Transport> ApiClient<T> {
    pub fn new(transport: T, session: SessionStore) -> Self {
        Self {
            transport: Arc::new(transport),
            session,
            client_id: None,
        }
    }

    pub fn with_client_id(mut self, client_id: impl Into<String>) -> Self {
        self.client_id = Some(client_id.into());
        self
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn client_id(&self) -> Option<&str> {
        self.client_id.as_deref()
    }

    /// 执行一个类型化接口
    ///
    /// 令牌只在发送前读取一次，之后的登出不影响已经发出的请求。失败不重试。
    pub async fn execute<O: Operation>(&self, operation: &O) -> ApiResult<O::Output> {
        let params = operation.params()?;
        let method = operation.method();
        let path = operation.path();

        let mut request = OutboundRequest::new(method.clone(), path.clone());
        match params {
            Params::None => {}
            Params::Query(value) => request.query = flatten_query(&value),
            Params::Body(value) => request.body = Some(value),
        }

        let token = self.session.get_token().await;
        attach_credentials(
            &mut request.headers,
            token.as_deref(),
            self.client_id.as_deref(),
        )?;

        tracing::debug!(
            "Dispatching {} {} (authorized: {})",
            method,
            path,
            token.is_some()
        );

        let raw = self.transport.send(request).await.map_err(|e| {
            tracing::warn!("{} {} transport failure: {}", method, path, e);
            ApiError::request_failed(None, e.to_string())
        })?;

        let value = classify_response(&method, &path, raw, operation.shape())?;

        serde_json::from_value(value).map_err(|e| {
            tracing::warn!("{} {} response decode failure: {}", method, path, e);
            ApiError::request_failed(None, format!("响应解析失败: {}", e))
        })
    }
}
