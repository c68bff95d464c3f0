use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::string_or_number;

/// 用户信息
///
/// 只声明界面用到的字段，服务端新增的字段原样保存在 `extra` 里。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "string_or_number")]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    /// 显示名称
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nick_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, Value>,
}

impl User {
    /// 优先昵称，其次账号，最后用户ID
    pub fn display_name(&self) -> &str {
        self.nick_name
            .as_deref()
            .or(self.user_name.as_deref())
            .unwrap_or(&self.user_id)
    }
}

/// 当前登录用户的资料、角色和权限
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub user: User,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl UserInfo {
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions
            .iter()
            .any(|p| p == "*:*:*" || p == permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_fields_land_in_extra() {
        let user: User = serde_json::from_str(
            r#"{
                "userId": 1,
                "userName": "admin",
                "nickName": "疯狂的狮子Li",
                "avatar": null,
                "deptName": "研发部门",
                "loginDate": "2024-05-01 10:00:00"
            }"#,
        )
        .unwrap();

        assert_eq!(user.user_id, "1");
        assert_eq!(user.display_name(), "疯狂的狮子Li");
        assert_eq!(user.avatar, None);
        assert_eq!(user.extra.get("deptName"), Some(&Value::from("研发部门")));
        assert!(!user.extra.contains_key("userName"));
    }

    #[test]
    fn user_info_permissions() {
        let info: UserInfo = serde_json::from_str(
            r#"{"user":{"userId":"1"},"roles":["superadmin"],"permissions":["*:*:*"]}"#,
        )
        .unwrap();

        assert_eq!(info.user.display_name(), "1");
        assert!(info.has_permission("monitor:logininfor:list"));
    }
}
