use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use admin_console_client::api::models::{LoginForm, LoginInfoQuery, PageQuery};
use admin_console_client::api::{ApiClient, OutboundRequest, RawResponse, Transport, TransportError};
use admin_console_client::session::{MemoryBackend, SessionStore};
use admin_console_client::ApiError;
use async_trait::async_trait;
use reqwest::Method;
use reqwest::header::AUTHORIZATION;
use serde_json::json;

/// 按顺序返回预设响应，并记录收到的请求
#[derive(Clone, Default)]
struct MockTransport {
    responses: Arc<Mutex<VecDeque<Result<RawResponse, TransportError>>>>,
    requests: Arc<Mutex<Vec<OutboundRequest>>>,
}

impl MockTransport {
    fn respond(&self, status: u16, body: serde_json::Value) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Ok(RawResponse::new(status, body.to_string())));
        self
    }

    fn fail(&self, error: TransportError) -> &Self {
        self.responses.lock().unwrap().push_back(Err(error));
        self
    }

    fn requests(&self) -> Vec<OutboundRequest> {
        self.requests.lock().unwrap().clone()
    }

    fn last_request(&self) -> OutboundRequest {
        self.requests().pop().expect("no request recorded")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: OutboundRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(RawResponse::new(200, r#"{"code":200,"msg":"操作成功"}"#)))
    }
}

fn client() -> (ApiClient<MockTransport>, MockTransport) {
    let transport = MockTransport::default();
    let client = ApiClient::new(transport.clone(), SessionStore::new(MemoryBackend::new()));
    (client, transport)
}

fn login_info_row(id: u64, user_name: &str) -> serde_json::Value {
    json!({
        "infoId": id.to_string(),
        "tenantId": "000000",
        "userName": user_name,
        "clientKey": "pc",
        "deviceType": "pc",
        "status": "0",
        "ipaddr": "127.0.0.1",
        "loginLocation": "内网IP",
        "browser": "Chrome",
        "os": "Windows 10",
        "msg": "登录成功",
        "loginTime": "2024-05-13 22:01:10"
    })
}

#[tokio::test]
async fn no_token_sends_no_authorization() {
    let (client, transport) = client();
    transport.respond(200, json!({ "code": 200, "msg": "操作成功", "data": [] }));

    client.get_routers().await.unwrap();

    let request = transport.last_request();
    assert!(request.headers.get(AUTHORIZATION).is_none());
}

#[tokio::test]
async fn stored_token_is_attached_exactly_once() {
    let (client, transport) = client();
    client.session().set_token("abc123").await;
    transport.respond(200, json!({ "code": 200, "msg": "操作成功", "data": [] }));

    client.get_routers().await.unwrap();

    let request = transport.last_request();
    let values: Vec<_> = request.headers.get_all(AUTHORIZATION).iter().collect();
    assert_eq!(values.len(), 1);
    assert_eq!(values[0], "Bearer abc123");
}

#[tokio::test]
async fn client_id_header_is_sent_when_configured() {
    let (client, transport) = client();
    let client = client.with_client_id("e5cd7e4891bf95d1d19206ce24a7b32e");

    client.get_routers().await.ok();

    assert_eq!(
        transport.last_request().header("clientid"),
        Some("e5cd7e4891bf95d1d19206ce24a7b32e")
    );
}

#[tokio::test]
async fn auth_rejection_and_server_error_are_distinguishable() {
    let (client, transport) = client();
    transport
        .respond(401, json!({ "code": 401, "msg": "认证失败" }))
        .respond(500, json!({ "code": 500, "msg": "服务器异常" }));

    let unauthenticated = client.get_routers().await.unwrap_err();
    let failed = client.get_routers().await.unwrap_err();

    assert!(unauthenticated.is_unauthenticated());
    assert!(matches!(
        failed,
        ApiError::RequestFailed {
            status: Some(500),
            ..
        }
    ));
}

#[tokio::test]
async fn unauthenticated_does_not_clear_the_store() {
    let (client, transport) = client();
    client.session().set_token("expired").await;
    transport.respond(200, json!({ "code": 401, "msg": "令牌已过期" }));

    let err = client.get_info().await.unwrap_err();

    assert!(err.is_unauthenticated());
    assert_eq!(client.session().get_token().await, Some("expired".to_string()));
}

#[tokio::test]
async fn transport_failure_is_request_failed_without_status() {
    let (client, transport) = client();
    transport.fail(TransportError::Timeout);

    let err = client.get_routers().await.unwrap_err();
    assert!(matches!(err, ApiError::RequestFailed { status: None, .. }));
    assert_eq!(transport.requests().len(), 1);
}

#[tokio::test]
async fn login_info_query_returns_page() {
    let (client, transport) = client();
    transport.respond(
        200,
        json!({
            "code": 200,
            "msg": "查询成功",
            "total": 3,
            "rows": [
                login_info_row(1, "admin"),
                login_info_row(2, "admin"),
                login_info_row(3, "admin")
            ]
        }),
    );

    let query = LoginInfoQuery::new(PageQuery::new(1, 10).unwrap()).user_name("admin");
    let page = client.list_login_info(&query).await.unwrap();

    assert_eq!(page.rows.len(), 3);
    assert_eq!(page.total, 3);
    assert!(page.rows.iter().all(|r| r.user_name.as_deref() == Some("admin")));

    let request = transport.last_request();
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.path, "/monitor/logininfor/list");
    assert_eq!(request.query_value("pageNum"), Some("1"));
    assert_eq!(request.query_value("pageSize"), Some("10"));
    assert_eq!(request.query_value("userName"), Some("admin"));
    assert_eq!(request.query_value("ipaddr"), None);
    assert!(request.body.is_none());
}

#[tokio::test]
async fn empty_routes_are_an_empty_list() {
    let (client, transport) = client();
    transport.respond(200, json!({ "code": 200, "msg": "操作成功", "data": [] }));

    let routes = client.get_routers().await.unwrap();

    assert!(routes.is_empty());
    let request = transport.last_request();
    assert_eq!(request.path, "/system/menu/getRouters");
    assert!(request.query.is_empty());
}

#[tokio::test]
async fn empty_delete_is_not_dispatched() {
    let (client, transport) = client();

    let err = client.delete_login_info(Vec::new()).await.unwrap_err();

    assert!(matches!(err, ApiError::InvalidRequest(_)));
    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn dot_segments_are_not_dispatched() {
    let (client, transport) = client();

    let err = client
        .delete_login_info(vec!["1".into(), "..".into()])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidRequest(_)));
    assert!(client.unlock_login_info("").await.is_err());
    assert!(client.unlock_login_info(".").await.is_err());

    assert!(transport.requests().is_empty());
}

#[tokio::test]
async fn reserved_characters_stay_inside_one_segment() {
    let (client, transport) = client();

    client
        .delete_login_info(vec!["1/../../../system/user/1".into()])
        .await
        .unwrap();
    client.unlock_login_info("ad#min?x=1").await.unwrap();

    let requests = transport.requests();
    assert_eq!(
        requests[0].path,
        "/monitor/logininfor/1%2F..%2F..%2F..%2Fsystem%2Fuser%2F1"
    );
    assert_eq!(requests[1].path, "/monitor/logininfor/unlock/ad%23min%3Fx%3D1");
}

#[tokio::test]
async fn login_stores_token_and_logout_clears_it() {
    let (client, transport) = client();
    transport
        .respond(
            200,
            json!({
                "code": 200,
                "msg": "操作成功",
                "data": { "access_token": "jwt-token", "expire_in": 604800, "client_id": "pc" }
            }),
        )
        .respond(200, json!({ "code": 200, "msg": "退出成功" }));

    let client = client.with_client_id("pc");
    let result = client
        .login(&LoginForm::new("admin", "admin123").with_tenant("000000"))
        .await
        .unwrap();

    assert_eq!(result.access_token, "jwt-token");
    assert_eq!(client.session().get_token().await, Some("jwt-token".to_string()));

    let login_request = transport.last_request();
    assert_eq!(login_request.method, Method::POST);
    let body = login_request.body.unwrap();
    assert_eq!(body["username"], "admin");
    assert_eq!(body["clientId"], "pc");
    assert_eq!(body["grantType"], "password");

    client.logout().await.unwrap();
    assert_eq!(client.session().get_token().await, None);
    assert_eq!(
        transport.last_request().header("authorization"),
        Some("Bearer jwt-token")
    );
}

#[tokio::test]
async fn failed_login_keeps_previous_state() {
    let (client, transport) = client();
    transport.respond(200, json!({ "code": 500, "msg": "用户不存在/密码错误" }));

    let err = client
        .login(&LoginForm::new("admin", "wrong"))
        .await
        .unwrap_err();

    assert!(!err.is_unauthenticated());
    assert_eq!(client.session().get_token().await, None);
}

#[tokio::test]
async fn logout_clears_token_even_when_server_fails() {
    let (client, transport) = client();
    client.session().set_token("abc123").await;
    transport.respond(500, json!({ "code": 500, "msg": "服务器异常" }));

    assert!(client.logout().await.is_err());
    assert_eq!(client.session().get_token().await, None);
}

#[tokio::test]
async fn token_is_read_at_dispatch_time() {
    let (client, transport) = client();

    client.session().set_token("first").await;
    client.get_routers().await.ok();
    client.session().set_token("second").await;
    client.get_routers().await.ok();

    let requests = transport.requests();
    assert_eq!(requests[0].header("authorization"), Some("Bearer first"));
    assert_eq!(requests[1].header("authorization"), Some("Bearer second"));
}

#[tokio::test]
async fn concurrent_requests_share_one_client() {
    let (client, transport) = client();
    client.session().set_token("shared").await;

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_routers().await })
        })
        .collect();
    for handle in handles {
        handle.await.unwrap().ok();
    }

    let requests = transport.requests();
    assert_eq!(requests.len(), 8);
    assert!(
        requests
            .iter()
            .all(|r| r.header("authorization") == Some("Bearer shared"))
    );
}

#[tokio::test]
async fn captcha_and_user_info_decode() {
    let (client, transport) = client();
    transport
        .respond(
            200,
            json!({ "code": 200, "msg": "操作成功", "data": { "captchaEnabled": true, "uuid": "u-1", "img": "iVBOR" } }),
        )
        .respond(
            200,
            json!({
                "code": 200,
                "msg": "操作成功",
                "data": {
                    "user": { "userId": "1", "userName": "admin", "nickName": "管理员", "deptId": 103 },
                    "roles": ["superadmin"],
                    "permissions": ["*:*:*"]
                }
            }),
        );

    let challenge = client.get_code_img().await.unwrap();
    assert!(challenge.is_required());
    assert_eq!(challenge.uuid.as_deref(), Some("u-1"));

    let info = client.get_info().await.unwrap();
    assert_eq!(info.user.display_name(), "管理员");
    assert_eq!(info.user.extra["deptId"], 103);
    assert_eq!(info.roles, vec!["superadmin".to_string()]);
}

#[tokio::test]
async fn login_info_maintenance_paths() {
    let (client, transport) = client();

    client
        .delete_login_info(vec!["10".into(), "11".into()])
        .await
        .unwrap();
    client.clean_login_info().await.unwrap();
    client.unlock_login_info("admin").await.unwrap();

    let requests = transport.requests();
    assert_eq!(
        (requests[0].method.clone(), requests[0].path.as_str()),
        (Method::DELETE, "/monitor/logininfor/10,11")
    );
    assert_eq!(requests[1].path, "/monitor/logininfor/clean");
    assert_eq!(
        (requests[2].method.clone(), requests[2].path.as_str()),
        (Method::GET, "/monitor/logininfor/unlock/admin")
    );
}
